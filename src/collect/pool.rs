// src/collect/pool.rs
// =============================================================================
// This module runs an async worker over a list of items with a fixed number
// of workers, and returns the results in the same order as the items.
//
// How it works:
// - We start min(limit, items.len()) workers
// - They share one cursor; each worker claims the next unclaimed index,
//   runs the job for it, then claims again until the list is exhausted
// - A slow item only holds up its own worker, the others keep pulling work
// - Every result is tagged with its index, so the output order does not
//   depend on which download finished first
//
// All workers are futures joined on the current task, so the cursor is the
// only shared state and an AtomicUsize is enough.
//
// The first error fails the whole batch. The other workers are dropped and
// whatever they were doing is discarded.
// =============================================================================

use futures::future::try_join_all;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

// Maps `worker` over `items` with at most `limit` jobs in flight
//
// Parameters:
//   items: the inputs, borrowed for the whole run
//   limit: maximum number of concurrent jobs (0 is treated as 1)
//   worker: called with (index, item) exactly once per item
//
// Returns: results[i] belongs to items[i], or the first error
pub async fn map_with_concurrency<'a, T, R, E, F, Fut>(
    items: &'a [T],
    limit: usize,
    worker: F,
) -> Result<Vec<R>, E>
where
    F: Fn(usize, &'a T) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let cursor = AtomicUsize::new(0);
    let worker_count = limit.max(1).min(items.len());

    let cursor = &cursor;
    let worker = &worker;
    let workers = (0..worker_count).map(|_| async move {
        let mut finished = Vec::new();
        loop {
            let index = cursor.fetch_add(1, Ordering::Relaxed);
            let Some(item) = items.get(index) else {
                break;
            };
            finished.push((index, worker(index, item).await?));
        }
        Ok::<_, E>(finished)
    });

    let batches = try_join_all(workers).await?;

    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(items.len()).collect();
    for (index, result) in batches.into_iter().flatten() {
        slots[index] = Some(result);
    }

    Ok(slots.into_iter().flatten().collect())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not tokio::spawn?
//    - Spawned tasks must own their data ('static), so the items and the
//      worker would need to be wrapped in Arc
//    - Futures joined with try_join_all can simply borrow them
//
// 2. What is fetch_add?
//    - Atomically adds 1 and returns the previous value
//    - Two workers can never get the same index
//
// 3. What does let-else do?
//    - let Some(item) = ... else { break; } binds item, or runs the else
//      block when the pattern does not match
//    - Here it stops the worker once the cursor passes the end of the list
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_results_keep_input_order() {
        // Earlier items sleep longer, so they finish last
        let items: Vec<u64> = (0..8).collect();
        let results = map_with_concurrency(&items, 3, |index, item| async move {
            tokio::time::sleep(Duration::from_millis(40 - *item * 5)).await;
            Ok::<_, String>(format!("{}:{}", index, item * 10))
        })
        .await
        .unwrap();

        let expected: Vec<String> = (0..8).map(|i| format!("{}:{}", i, i * 10)).collect();
        assert_eq!(results, expected);
    }

    #[tokio::test]
    async fn test_never_exceeds_limit() {
        let active = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let items = vec![(); 20];

        let (active, peak) = (&active, &peak);
        map_with_concurrency(&items, 4, |_, _| async move {
            let now = active.fetch_add(1, Ordering::SeqCst) + 1;
            peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            active.fetch_sub(1, Ordering::SeqCst);
            Ok::<_, String>(())
        })
        .await
        .unwrap();

        assert_eq!(peak.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_each_item_runs_once() {
        let calls = AtomicUsize::new(0);
        let items: Vec<usize> = (0..50).collect();
        let results = map_with_concurrency(&items, 64, |_, item| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<_, String>(*item) }
        })
        .await
        .unwrap();

        assert_eq!(results, items);
        assert_eq!(calls.load(Ordering::SeqCst), 50);
    }

    #[tokio::test]
    async fn test_first_error_fails_the_batch() {
        let items: Vec<usize> = (0..10).collect();
        let result = map_with_concurrency(&items, 2, |_, item| async move {
            if *item == 3 {
                Err(format!("item {} failed", item))
            } else {
                Ok(*item)
            }
        })
        .await;

        assert_eq!(result, Err("item 3 failed".to_string()));
    }

    #[tokio::test]
    async fn test_empty_input() {
        let items: Vec<u8> = Vec::new();
        let results = map_with_concurrency(&items, 8, |_, _| async {
            Err::<u8, String>("worker should not run".to_string())
        })
        .await
        .unwrap();

        assert!(results.is_empty());
    }
}
