use anyhow::Result;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinSet;
use tracing::error;

use crate::output::{OutputSink, SeenSet, format_json};
use crate::runner::Counters;
use crate::types::RawResult;

/// Read the result queue until it is closed, dispatching every line that
/// should be shown to a writer task. At most `max_writers` writes are in
/// flight; all of them are awaited before returning.
pub(crate) async fn pull_output(
    mut output: Receiver<RawResult>,
    seen: Arc<SeenSet>,
    sink: Arc<OutputSink>,
    counters: Arc<Counters>,
    max_writers: usize,
) -> Result<()> {
    let mut writers = JoinSet::new();

    while let Some(result) = output.recv().await {
        let line = match result {
            RawResult::Domain(domain) => {
                if !seen.first_sight(&domain) {
                    continue;
                }
                domain
            }
            RawResult::Record { url, domains } => match format_json(&url, &domains) {
                Ok(json) => json,
                Err(e) => {
                    error!("[{}] could not encode result: {}", url, e);
                    continue;
                }
            },
        };

        if writers.len() >= max_writers.max(1)
            && let Some(done) = writers.join_next().await
        {
            done?;
        }

        let sink = sink.clone();
        let counters = counters.clone();
        writers.spawn(async move {
            sink.emit(&line).await;
            counters.emitted.fetch_add(1, Ordering::Relaxed);
        });
    }

    while let Some(done) = writers.join_next().await {
        done?;
    }

    Ok(())
}
