//! Background progress indicator for long-running steps.
//!
//! [`Progressor`] prints an opening message, then one progress character per
//! interval from a background thread, and finally a closing message once stopped:
//!
//! ```text
//! Generating AutoGen files......... done
//! ```
//!
//! # Environment Variables
//!
//! - `BASETOOLS_NO_PROGRESS`: Set to any value to disable all progress output
//!
//! # Examples
//!
//! ```rust,no_run
//! use basetools::utils::progress::Progressor;
//! use std::time::Duration;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut progress = Progressor::new("Generating", "done", '.', Duration::from_secs(1));
//! progress.start()?;
//! // long running work
//! progress.stop();
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::io::Write;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// Environment variable that disables progress output.
pub const NO_PROGRESS_ENV: &str = "BASETOOLS_NO_PROGRESS";

fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some()
}

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

struct Worker {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

/// Prints progress characters from a background thread until stopped.
///
/// Stopping joins the thread, so the closing message is always written before
/// [`stop`](Self::stop) returns. Dropping a running progressor stops it.
pub struct Progressor {
    open_message: String,
    close_message: String,
    progress_char: char,
    interval: Duration,
    enabled: bool,
    sink: Sink,
    worker: Option<Worker>,
}

impl Progressor {
    /// Creates a progressor writing to stderr.
    pub fn new(
        open_message: impl Into<String>,
        close_message: impl Into<String>,
        progress_char: char,
        interval: Duration,
    ) -> Self {
        Self {
            open_message: open_message.into(),
            close_message: close_message.into(),
            progress_char,
            interval,
            enabled: true,
            sink: Arc::new(Mutex::new(Box::new(std::io::stderr()))),
            worker: None,
        }
    }

    /// Redirects output to `writer` instead of stderr.
    #[must_use]
    pub fn with_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.sink = Arc::new(Mutex::new(Box::new(writer)));
        self
    }

    /// Turns output on or off. A disabled progressor never spawns a thread.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// Starts the background thread. Does nothing if already running or disabled.
    pub fn start(&mut self) -> Result<()> {
        if self.worker.is_some() || !self.enabled || is_progress_disabled() {
            return Ok(());
        }

        let (stop, stopped) = mpsc::channel();
        let sink = Arc::clone(&self.sink);
        let open_message = self.open_message.clone();
        let close_message = self.close_message.clone();
        let progress_char = self.progress_char;
        let interval = self.interval;

        let handle = std::thread::Builder::new()
            .name("progressor".to_string())
            .spawn(move || {
                emit(&sink, &open_message);
                loop {
                    match stopped.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            emit(&sink, progress_char.encode_utf8(&mut [0; 4]));
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                emit(&sink, &format!("{close_message}\n"));
            })
            .context("Failed to spawn progress thread")?;

        self.worker = Some(Worker {
            stop,
            handle,
        });
        Ok(())
    }

    /// Stops the background thread and waits for the closing message.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.stop.send(());
            if worker.handle.join().is_err() {
                tracing::warn!("progress thread panicked");
            }
        }
    }
}

impl Drop for Progressor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Progress output is cosmetic; write failures are ignored.
fn emit(sink: &Sink, text: &str) {
    if let Ok(mut writer) = sink.lock() {
        let _ = writer.write_all(text.as_bytes());
        let _ = writer.flush();
    }
}
