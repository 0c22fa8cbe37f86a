use crate::api_error::ApiError;
use crate::resource::Resource;
use futures::{stream, Stream, StreamExt};

/// Routes every observed [`Resource`] to the handler matching its variant
///
/// Values are dispatched in arrival order with no buffering. Panics raised by
/// a handler are not caught and reach the caller of [`ResourceCollector::collect`].
pub struct ResourceCollector<S, E, L = fn()> {
    on_success: S,
    on_error: E,
    on_loading: L,
}

fn ignore_loading() {}

impl<S, E> ResourceCollector<S, E> {
    pub fn new(on_success: S, on_error: E) -> Self {
        Self {
            on_success,
            on_error,
            on_loading: ignore_loading as fn(),
        }
    }
}

impl<S, E, L> ResourceCollector<S, E, L> {
    /// Replace the default no-op `Loading` handler
    pub fn on_loading<L2>(self, on_loading: L2) -> ResourceCollector<S, E, L2>
    where
        L2: FnMut(),
    {
        ResourceCollector {
            on_success: self.on_success,
            on_error: self.on_error,
            on_loading,
        }
    }

    /// Dispatch a single value
    pub fn dispatch<T>(&mut self, resource: Resource<T>)
    where
        S: FnMut(T),
        E: FnMut(ApiError),
        L: FnMut(),
    {
        match resource {
            Resource::Loading => (self.on_loading)(),
            Resource::Success(data) => (self.on_success)(data),
            Resource::Error(error) => (self.on_error)(error),
        }
    }

    /// Drive `resources` to completion, dispatching each value as it arrives
    pub async fn collect<T, St>(mut self, resources: St)
    where
        St: Stream<Item = Resource<T>>,
        S: FnMut(T),
        E: FnMut(ApiError),
        L: FnMut(),
    {
        futures::pin_mut!(resources);

        while let Some(resource) = resources.next().await {
            self.dispatch(resource);
        }
    }
}

/// Collect a stream with success and error handlers, ignoring `Loading`
pub async fn collect_resource<T, St, S, E>(resources: St, on_success: S, on_error: E)
where
    St: Stream<Item = Resource<T>>,
    S: FnMut(T),
    E: FnMut(ApiError),
{
    ResourceCollector::new(on_success, on_error)
        .collect(resources)
        .await
}

/// Prefix a stream with one synthetic `Loading` value
pub fn start_with_loading<T, St>(resources: St) -> impl Stream<Item = Resource<T>>
where
    St: Stream<Item = Resource<T>>,
{
    stream::once(async { Resource::Loading }).chain(resources)
}
