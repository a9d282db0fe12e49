use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

use crate::cloud::types::Operation;
use crate::utils::{Result, TranslatorError};

/// Re-fetches `operation` through `fetch` every `poll_interval` until it
/// reports `done`, then surfaces any error status it finished with.
pub async fn wait_until_done<F, Fut>(
    operation: Operation,
    poll_interval: Duration,
    timeout: Duration,
    mut fetch: F,
) -> Result<Operation>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Operation>>,
{
    let started = Instant::now();
    let mut current = operation;
    let mut polls = 0usize;

    while !current.done {
        if started.elapsed() >= timeout {
            return Err(TranslatorError::Timeout {
                name: current.name,
                seconds: timeout.as_secs(),
            });
        }

        tokio::time::sleep(poll_interval).await;
        polls += 1;
        current = fetch(current.name.clone()).await?;
        tracing::debug!(operation = %current.name, polls, done = current.done, "Polled operation");
    }

    current.into_result()
}
