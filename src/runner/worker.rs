use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{Receiver, Sender};
use tracing::{debug, warn};

use crate::config::Options;
use crate::csp::CspSource;
use crate::filter::filter_domains;
use crate::runner::Counters;
use crate::types::{OutputFormat, RawResult};
use crate::utils::{RateLimiter, prepare_url};

/// State shared by every worker of the pool
pub(crate) struct WorkerContext {
    pub options: Arc<Options>,
    pub source: Arc<dyn CspSource>,
    pub limiter: Arc<RateLimiter>,
    pub counters: Arc<Counters>,
}

/// Take targets off the work queue until it is closed and drained.
pub(crate) async fn execute(
    ctx: Arc<WorkerContext>,
    input: Arc<Mutex<Receiver<String>>>,
    output: Sender<RawResult>,
) {
    loop {
        let target = input.lock().await.recv().await;
        let Some(target) = target else {
            break;
        };

        if !process_target(&ctx, &target, &output).await {
            debug!("Result queue closed, worker stopping");
            break;
        }
    }
}

/// Fetch one target and push what it yields. Returns false only when the
/// result queue is gone.
async fn process_target(ctx: &WorkerContext, target: &str, output: &Sender<RawResult>) -> bool {
    let url = match prepare_url(target) {
        Ok(url) => url,
        Err(e) => {
            ctx.fail(e);
            return true;
        }
    };

    ctx.limiter.wait().await;

    let found = match ctx.source.fetch(&url).await {
        Ok(found) => found,
        Err(e) => {
            ctx.fail(format!("{:#}", e));
            return true;
        }
    };
    ctx.counters.fetched.fetch_add(1, Ordering::Relaxed);

    let domains = filter_domains(found, &ctx.options.domains);

    match ctx.options.format {
        OutputFormat::Plain => {
            for domain in domains {
                if output.send(RawResult::Domain(domain)).await.is_err() {
                    return false;
                }
            }
            true
        }
        OutputFormat::Json => output
            .send(RawResult::Record { url, domains })
            .await
            .is_ok(),
    }
}

impl WorkerContext {
    /// Per-target failures only surface in verbose mode.
    fn fail(&self, err: impl Display) {
        self.counters.failed.fetch_add(1, Ordering::Relaxed);
        if self.options.verbose {
            warn!("{}", err);
        } else {
            debug!("{}", err);
        }
    }
}
