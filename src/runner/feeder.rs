use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc::{Sender, error::SendError};
use tracing::{debug, error};

use crate::config::Options;
use crate::runner::Counters;
use crate::utils::expand_cidr;

/// Push every target from the configured sources onto the work queue:
/// the single input, then the list file (deduplicated), then stdin.
/// The queue closes when this returns and `input` is dropped.
pub(crate) async fn push_input<R>(
    options: Arc<Options>,
    stdin: Option<R>,
    input: Sender<String>,
    counters: Arc<Counters>,
) where
    R: AsyncBufRead + Unpin,
{
    let feeder = Feeder {
        input,
        cidr: options.cidr,
        counters,
    };

    if let Err(e) = feeder.feed(&options, stdin).await {
        debug!("Work queue closed early, dropping {:?}", e.0);
    }
}

struct Feeder {
    input: Sender<String>,
    cidr: bool,
    counters: Arc<Counters>,
}

impl Feeder {
    async fn feed<R>(&self, options: &Options, stdin: Option<R>) -> Result<(), SendError<String>>
    where
        R: AsyncBufRead + Unpin,
    {
        if let Some(single) = &options.input {
            self.push_line(single).await?;
        }

        if let Some(path) = &options.list {
            match tokio::fs::read(path).await {
                Ok(bytes) => {
                    let content = String::from_utf8_lossy(&bytes);
                    for line in unique_lines(&content) {
                        self.push_line(line).await?;
                    }
                }
                Err(e) => error!("Could not read input list {}: {}", path, e),
            }
        }

        if let Some(reader) = stdin {
            // Split on raw bytes so one undecodable line cannot end the stream
            let mut lines = reader.split(b'\n');
            loop {
                match lines.next_segment().await {
                    Ok(Some(line)) => self.push_line(&String::from_utf8_lossy(&line)).await?,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Error reading stdin: {}", e);
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    async fn push_line(&self, line: &str) -> Result<(), SendError<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        if !self.cidr {
            return self.push(line.to_string()).await;
        }

        match expand_cidr(line) {
            Ok(ips) => {
                for ip in ips {
                    self.push(ip).await?;
                }
                Ok(())
            }
            Err(e) => {
                error!("{}", e);
                Ok(())
            }
        }
    }

    async fn push(&self, target: String) -> Result<(), SendError<String>> {
        self.input.send(target).await?;
        self.counters.targets.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Non-empty trimmed lines in first-seen order, duplicates removed.
fn unique_lines(content: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && seen.insert(*l))
        .collect()
}
