//! Console logging
//!
//! The fmt subscriber formats each event into a [`ConsoleWriter`], which
//! forwards the line to the browser console method matching the event level
//! when it is dropped.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Browser console method used for a given level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<Level> for ConsoleMethod {
    fn from(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Debug,
        }
    }
}

/// Buffers one formatted event
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = wasm_bindgen_x::JsValue::from_str(line.trim_end());
        match self.method {
            ConsoleMethod::Error => web_sys_x::console::error_1(&line),
            ConsoleMethod::Warn => web_sys_x::console::warn_1(&line),
            ConsoleMethod::Info => web_sys_x::console::info_1(&line),
            ConsoleMethod::Debug => web_sys_x::console::debug_1(&line),
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::Info,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::from(*meta.level()),
            buf: Vec::new(),
        }
    }
}

/// Install the console subscriber. `directive` is an `EnvFilter` string;
/// an invalid one falls back to `info`.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(MakeConsoleWriter)
        .without_time()
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(ConsoleMethod::from(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::from(Level::TRACE), ConsoleMethod::Debug);
    }
}
