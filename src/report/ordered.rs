//! Bounded concurrent execution with in-order delivery.
//!
//! Runs one task per index and hands results to the caller strictly in index
//! order. A result that finishes early waits in a reorder buffer until
//! everything before it has been delivered. Tasks are started inside a
//! sliding window of `max_concurrent` indexes past the next undelivered one,
//! so running tasks and buffered results together never exceed
//! `max_concurrent`.

use std::collections::BTreeMap;
use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::Result;

/// Run `task(0..count)` with bounded concurrency and deliver results in order.
///
/// At most `max_concurrent` tasks are started but not yet delivered at any
/// time, whether still running or waiting in the reorder buffer. A slow task
/// therefore holds back new work instead of letting finished results pile up.
///
/// The first error stops scheduling and is returned immediately. Tasks still
/// in flight are dropped, and no result at or after the failing index is
/// delivered.
///
/// With `max_concurrent == 1` each task starts only after the previous one
/// has been delivered.
///
/// # Example
///
/// ```ignore
/// run_ordered(
///     groups.len(),
///     4,
///     |index| aggregator.build_row(index + 1, &groups[index]),
///     |_, row| sink.row(row),
/// )
/// .await?;
/// ```
pub async fn run_ordered<T, F, Fut, E>(
    count: usize,
    max_concurrent: usize,
    task: F,
    mut deliver: E,
) -> Result<()>
where
    F: Fn(usize) -> Fut,
    Fut: Future<Output = Result<T>>,
    E: FnMut(usize, T) -> Result<()>,
{
    if count == 0 {
        return Ok(());
    }

    let max_concurrent = max_concurrent.max(1);
    debug!(
        "Running {} tasks with max {} concurrent",
        count, max_concurrent
    );

    // Tag each future with its index so results can be put back in order
    let tagged = |index: usize| {
        let fut = task(index);
        async move { (index, fut.await) }
    };

    let mut in_flight = FuturesUnordered::new();
    let mut ready: BTreeMap<usize, T> = BTreeMap::new();
    let mut next_to_start = 0;
    let mut next_to_deliver = 0;

    while next_to_start < count && next_to_start < max_concurrent {
        in_flight.push(tagged(next_to_start));
        next_to_start += 1;
    }

    while let Some((index, result)) = in_flight.next().await {
        let item = result?;
        ready.insert(index, item);

        while let Some(item) = ready.remove(&next_to_deliver) {
            deliver(next_to_deliver, item)?;
            next_to_deliver += 1;
        }

        // The earliest undelivered index is always running, so the window
        // keeps moving as long as work remains
        while next_to_start < count && next_to_start < next_to_deliver + max_concurrent {
            in_flight.push(tagged(next_to_start));
            next_to_start += 1;
        }
    }

    debug!("Delivered {} results", next_to_deliver);
    Ok(())
}
