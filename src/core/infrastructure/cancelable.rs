//! Cancellation of pending API operations.
//!
//! An editor owns a [`CancellationToken`]; every operation it starts is raced
//! against that token so that disposing of the editor abandons the request and
//! its eventual result is never observed.

use crate::core::domain::error::{PiholeError, PiholeResult};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Runs `operation` until it completes or `token` is cancelled, whichever
/// happens first. Cancellation wins ties and yields `PiholeError::Cancelled`.
pub async fn cancelable<F, T>(token: &CancellationToken, operation: F) -> PiholeResult<T>
where
    F: Future<Output = PiholeResult<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(PiholeError::Cancelled),
        result = operation => result,
    }
}

/// Swallows a cancellation outcome, turning it into `Ok(None)`.
pub fn ignore_cancel<T>(result: PiholeResult<T>) -> PiholeResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(PiholeError::Cancelled) => Ok(None),
        Err(error) => Err(error),
    }
}
