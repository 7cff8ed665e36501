//! Network helpers with timeout support.

use std::future::Future;

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;

use crate::core::error::ExplorerError;

/// Race a future against a timeout.
///
/// # Returns
/// * `Ok(output)` if the future completes first
/// * `Err(ExplorerError::Timeout)` if `timeout_ms` elapses first
pub async fn with_timeout<F>(future: F, timeout_ms: u32) -> Result<F::Output, ExplorerError>
where
    F: Future,
{
    let timeout = TimeoutFuture::new(timeout_ms);
    pin_mut!(future);
    pin_mut!(timeout);

    match select(future, timeout).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(_) => Err(ExplorerError::Timeout),
    }
}
