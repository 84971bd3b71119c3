//! `tracing` setup for the browser. Events are formatted by the
//! `tracing-subscriber` fmt layer and forwarded to the developer console at the
//! matching console level. Log lines must never carry form contents.

use super::config::DEFAULT_LOG_LEVEL;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Parses a configured log level, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn parse_level(value: &str) -> Level {
    Level::from_str(value.trim())
        .or_else(|_| Level::from_str(DEFAULT_LOG_LEVEL))
        .unwrap_or(Level::INFO)
}

fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::default().add_directive(level.into())
}

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init(log_level: &str) {
    use tracing_subscriber::{Registry, fmt, layer::SubscriberExt};

    let fmt_layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_writer(console::ConsoleMakeWriter);

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(build_filter(parse_level(log_level)));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Turns a formatted event buffer into the console line, dropping the trailing
/// newline added by the fmt layer.
fn console_line(buffer: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(buffer);
    let line = line.trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use super::console_line;
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let Some(line) = console_line(&self.buffer) else {
                return;
            };
            let value = JsValue::from_str(&line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&value),
                Level::WARN => web_sys::console::warn_1(&value),
                Level::INFO => web_sys::console::info_1(&value),
                _ => web_sys::console::debug_1(&value),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}
