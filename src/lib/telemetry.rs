//! Logging setup. Events go through `tracing` and are formatted by
//! `tracing-subscriber`; in the browser the formatted lines land on the devtools
//! console, natively they go to stderr. Never log session identifiers or tokens.

use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "info";

/// Parses a filter directive, falling back to `info` when it is malformed.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

/// Installs the global subscriber. Calling it twice keeps the first one.
pub fn init(directive: &str) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_ansi(false)
        .with_target(true)
        .without_time();

    #[cfg(target_arch = "wasm32")]
    let result = builder.with_writer(console::ConsoleWriter::default).try_init();
    #[cfg(not(target_arch = "wasm32"))]
    let result = builder.with_writer(std::io::stderr).try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};

    /// Buffers one formatted event and hands it to `console.log` on drop.
    #[derive(Default)]
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = self.flush();
        }
    }
}
