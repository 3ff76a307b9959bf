//! The fetch pipeline.
//!
//! ```text
//! feeder --(work queue)--> N workers --(result queue)--> drain --> writers
//! ```
//!
//! Both queues are bounded by the concurrency level, so a slow stage makes
//! the previous one wait instead of buffering without limit. Shutdown runs
//! front to back: the feeder drops its sender, workers exit once the work
//! queue is drained, the result queue closes when the last worker is joined,
//! and the drain returns after its writers have finished.

mod drain;
mod feeder;
mod worker;

use anyhow::Result;
use futures::future::join_all;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::{AsyncBufRead, BufReader};
use tokio::sync::{Mutex, mpsc};
use tokio::task;
use tracing::debug;

use crate::config::Options;
use crate::csp::CspSource;
use crate::output::{OutputSink, SeenSet};
use crate::types::{OutputFormat, RawResult};
use crate::utils::RateLimiter;

use drain::pull_output;
use feeder::push_input;
use worker::{WorkerContext, execute};

#[derive(Debug, Default)]
pub(crate) struct Counters {
    pub targets: AtomicU64,
    pub fetched: AtomicU64,
    pub failed: AtomicU64,
    pub emitted: AtomicU64,
}

/// Totals for one run. Every target ends up either fetched or failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub targets: u64,
    pub fetched: u64,
    pub failed: u64,
    pub emitted: u64,
}

pub struct Runner {
    options: Arc<Options>,
    source: Arc<dyn CspSource>,
    sink: Arc<OutputSink>,
    limiter: Arc<RateLimiter>,
    seen: Arc<SeenSet>,
    counters: Arc<Counters>,
}

impl Runner {
    pub fn new(options: Options, source: Arc<dyn CspSource>, sink: OutputSink) -> Self {
        let limiter = RateLimiter::new(options.rate_limit);
        Self {
            options: Arc::new(options),
            source,
            sink: Arc::new(sink),
            limiter: Arc::new(limiter),
            seen: Arc::new(SeenSet::new()),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Run the pipeline, reading process stdin when it was piped in.
    pub async fn run(self) -> Result<RunSummary> {
        let stdin = self
            .options
            .stdin
            .then(|| BufReader::new(tokio::io::stdin()));
        self.run_with_stdin(stdin).await
    }

    /// Run the pipeline with `stdin` as the streamed input source.
    pub async fn run_with_stdin<R>(self, stdin: Option<R>) -> Result<RunSummary>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
    {
        let concurrency = self.options.concurrency.max(1);
        if !self.limiter.is_unlimited() {
            debug!("Rate limited to {:?} requests per second", self.options.rate_limit);
        }
        let (input_tx, input_rx) = mpsc::channel::<String>(concurrency);
        let (output_tx, output_rx) = mpsc::channel::<RawResult>(concurrency);

        let feeder = task::spawn(push_input(
            self.options.clone(),
            stdin,
            input_tx,
            self.counters.clone(),
        ));

        let ctx = Arc::new(WorkerContext {
            options: self.options.clone(),
            source: self.source.clone(),
            limiter: self.limiter.clone(),
            counters: self.counters.clone(),
        });
        let input_rx = Arc::new(Mutex::new(input_rx));
        let workers = (0..concurrency)
            .map(|_| task::spawn(execute(ctx.clone(), input_rx.clone(), output_tx.clone())))
            .collect::<Vec<_>>();
        // Workers now own the work receiver and every sender of the result queue
        drop(input_rx);
        drop(output_tx);

        let drain = task::spawn(pull_output(
            output_rx,
            self.seen.clone(),
            self.sink.clone(),
            self.counters.clone(),
            concurrency,
        ));

        let fed = feeder.await;
        let joined = join_all(workers).await;
        let drained = drain.await;
        // Flush whatever reached the sink even when a stage failed
        let flushed = self.sink.finish().await;

        fed?;
        for worker in joined {
            worker?;
        }
        drained??;
        flushed?;

        let summary = RunSummary {
            targets: self.counters.targets.load(Ordering::Relaxed),
            fetched: self.counters.fetched.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            emitted: self.counters.emitted.load(Ordering::Relaxed),
        };
        debug!(
            "Processed {} targets ({} fetched, {} failed), {} results emitted, {} unique domains",
            summary.targets,
            summary.fetched,
            summary.failed,
            summary.emitted,
            self.seen.len()
        );
        if self.options.format == OutputFormat::Plain && self.seen.is_empty() {
            debug!("No CSP domains found");
        }

        Ok(summary)
    }
}
