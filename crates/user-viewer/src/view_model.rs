use crate::state::{UserScreenState, ViewState};
use futures::Stream;
use resource_core::{start_with_loading, ApiError, Resource, ResourceCollector};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::WatchStream;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use user_client::{GetUserUseCase, GetUsersUseCase, UserApi, UserRepository};

/// One field of [`UserScreenState`] that a fetch writes into
struct Slot<T> {
    state: Arc<watch::Sender<UserScreenState>>,
    cancel: CancellationToken,
    select: fn(&mut UserScreenState) -> &mut ViewState<T>,
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            cancel: self.cancel.clone(),
            select: self.select,
        }
    }
}

impl<T> Slot<T> {
    /// Apply a transition to the latest snapshot unless cancelled
    ///
    /// The cancellation check runs under the watch lock, the same lock
    /// [`cancel_under_lock`] takes, so no write lands after a cancel returns.
    fn update(&self, transition: impl FnOnce(ViewState<T>) -> ViewState<T>) {
        self.state.send_if_modified(|screen| {
            if self.cancel.is_cancelled() {
                return false;
            }

            let field = (self.select)(screen);
            let previous = std::mem::take(field);
            *field = transition(previous);
            true
        });
    }
}

/// Cancel `token` while holding the state lock
fn cancel_under_lock(state: &watch::Sender<UserScreenState>, token: &CancellationToken) {
    state.send_if_modified(|_| {
        token.cancel();
        false
    });
}

/// Owns the user screen state and the fetches feeding it
///
/// Fetches run on `runtime`. Cancelling (or dropping) the view model stops
/// every in-flight fetch and no further state change is applied.
pub struct UserViewModel<A> {
    get_users: GetUsersUseCase<A>,
    get_user: GetUserUseCase<A>,
    state: Arc<watch::Sender<UserScreenState>>,
    cancel: CancellationToken,
    runtime: Handle,
}

impl<A: UserApi> UserViewModel<A> {
    pub fn new(repository: UserRepository<A>, runtime: Handle) -> Self {
        let (state, _) = watch::channel(UserScreenState::default());

        Self {
            get_users: GetUsersUseCase::new(repository.clone()),
            get_user: GetUserUseCase::new(repository),
            state: Arc::new(state),
            cancel: CancellationToken::new(),
            runtime,
        }
    }

    /// Current snapshot
    pub fn state(&self) -> UserScreenState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UserScreenState> {
        self.state.subscribe()
    }

    /// Snapshots as a stream, starting with the current one
    pub fn states(&self) -> WatchStream<UserScreenState> {
        WatchStream::new(self.state.subscribe())
    }

    pub fn load_users(&self) -> JoinHandle<()> {
        debug!("Loading users");
        let resources = start_with_loading(self.get_users.execute());
        self.launch(resources, UserScreenState::users_mut)
    }

    pub fn load_user(&self, id: u64) -> JoinHandle<()> {
        debug!(id, "Loading user");
        let resources = start_with_loading(self.get_user.execute(id));
        self.launch(resources, UserScreenState::selected_mut)
    }

    /// Stop all in-flight fetches; later loads are discarded too
    pub fn cancel(&self) {
        cancel_under_lock(&self.state, &self.cancel);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn launch<T, St>(
        &self,
        resources: St,
        select: fn(&mut UserScreenState) -> &mut ViewState<T>,
    ) -> JoinHandle<()>
    where
        T: Send + 'static,
        St: Stream<Item = Resource<T>> + Send + 'static,
    {
        let slot = Slot {
            state: self.state.clone(),
            cancel: self.cancel.clone(),
            select,
        };
        let cancel = self.cancel.clone();
        let (on_success, on_error, on_loading) = (slot.clone(), slot.clone(), slot);

        let collector = ResourceCollector::new(
            move |data: T| on_success.update(|s| s.succeeded(data)),
            move |error: ApiError| on_error.update(|s| s.failed(error)),
        )
        .on_loading(move || on_loading.update(ViewState::loading));

        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => debug!("Fetch cancelled"),
                _ = collector.collect(resources) => {}
            }
        })
    }
}

impl<A> Drop for UserViewModel<A> {
    fn drop(&mut self) {
        cancel_under_lock(&self.state, &self.cancel);
    }
}
