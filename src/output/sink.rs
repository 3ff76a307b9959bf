use std::io;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex;
use tracing::error;

use crate::errors::ConfigError;

/// Where emitted results go: stdout, plus the output file when one is set.
pub struct OutputSink {
    output_writer: Option<Mutex<BufWriter<File>>>,
    stdout: bool,
}

impl OutputSink {
    /// Create (truncating) the output file up front so a bad path fails the
    /// run before any target is processed.
    pub async fn create(path: Option<&str>, stdout: bool) -> Result<Self, ConfigError> {
        let output_writer = match path {
            Some(path) => {
                let file = File::create(path)
                    .await
                    .map_err(|source| ConfigError::OutputFile {
                        path: path.to_string(),
                        source,
                    })?;
                Some(Mutex::new(BufWriter::new(file)))
            }
            None => None,
        };

        Ok(Self {
            output_writer,
            stdout,
        })
    }

    /// Write one result line. A failed file write is logged, never fatal.
    pub async fn emit(&self, line: &str) {
        if let Some(writer) = &self.output_writer {
            let mut writer = writer.lock().await;
            let mut buf = String::with_capacity(line.len() + 1);
            buf.push_str(line);
            buf.push('\n');
            if let Err(e) = writer.write_all(buf.as_bytes()).await {
                error!("Error writing to output file: {}", e);
            }
        }

        if self.stdout {
            println!("{}", line);
        }
    }

    /// Flush buffered file output.
    pub async fn finish(&self) -> io::Result<()> {
        if let Some(writer) = &self.output_writer {
            let mut writer = writer.lock().await;
            writer.flush().await?;
        }
        Ok(())
    }
}
