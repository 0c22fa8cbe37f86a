//! The single boundary where raised failures become `Resource::Error` values.
//!
//! Nothing downstream of [`safe_api_call`] sees a raised failure: transport
//! errors, error statuses and even panics inside the call are classified here.

use crate::error::{Error, Result};
use crate::response::ApiResponse;
use async_stream::stream;
use futures::{FutureExt, Stream};
use resource_core::api_error::UNEXPECTED_ERROR_MESSAGE;
use resource_core::{ApiError, ApiErrorMapper, Resource};
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::{debug, warn};

/// Run `call` once when first polled and yield exactly one terminal value
///
/// The returned stream is lazy and completes right after its single item.
pub fn safe_api_call<T, M, F, Fut>(mapper: M, call: F) -> impl Stream<Item = Resource<T>>
where
    M: ApiErrorMapper,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<ApiResponse<T>>>,
{
    stream! {
        yield execute_api_call(&mapper, call).await;
    }
}

/// Run `call` and classify its outcome
pub async fn execute_api_call<T, M, F, Fut>(mapper: &M, call: F) -> Resource<T>
where
    M: ApiErrorMapper + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<ApiResponse<T>>>,
{
    let outcome = AssertUnwindSafe(async move { call().await })
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(response)) => classify_response(mapper, response),
        Ok(Err(Error::Connect(reason))) => {
            warn!(reason = %reason, "Request failed before a response was received");
            Resource::Error(ApiError::network())
        }
        Ok(Err(Error::Http { status, message })) => {
            warn!(status, message = %message, "Transport reported an HTTP failure");
            Resource::Error(ApiError::http(message, status))
        }
        Ok(Err(Error::Unexpected(message))) => {
            warn!(message = %message, "Request failed unexpectedly");
            Resource::Error(ApiError::unknown(message, 0))
        }
        Err(payload) => {
            let message = panic_message(&*payload);
            warn!(message = %message, "Request panicked");
            Resource::Error(ApiError::unknown(message, 0))
        }
    }
}

fn classify_response<T, M>(mapper: &M, response: ApiResponse<T>) -> Resource<T>
where
    M: ApiErrorMapper + ?Sized,
{
    let successful = response.is_successful();

    match response.body {
        Some(body) if successful => {
            debug!(status = response.status, "Request succeeded");
            Resource::Success(body)
        }
        _ => {
            let error = mapper.map_error(response.error_body.as_deref(), response.status);
            warn!(
                status = response.status,
                kind = %error.kind(),
                message = error.message(),
                "Request returned an error response"
            );
            Resource::Error(error)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNEXPECTED_ERROR_MESSAGE.to_string()
    }
}
