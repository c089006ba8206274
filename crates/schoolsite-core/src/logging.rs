//! Logging setup for WASM and native targets.
//!
//! All crates emit `tracing` events. This module installs the subscriber
//! that turns those events into output:
//!
//! | Target | Sink | Filter |
//! |--------|------|--------|
//! | WASM | `console.error` / `console.warn` / `console.info` / `console.debug` | configured level |
//! | Non-WASM | stderr | `RUST_LOG`, falling back to the configured level |
//!
//! ## Example
//!
//! ```ignore
//! use schoolsite_core::logging;
//!
//! logging::init("debug");
//! tracing::info!(page = "home", "site started");
//! ```

use tracing_subscriber::EnvFilter;

/// Level used when the configured directive cannot be parsed.
const FALLBACK_LEVEL: &str = "info";

/// Installs the global subscriber.
///
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init(level: &str) {
	let filter = build_filter(level);

	#[cfg(target_arch = "wasm32")]
	let result = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(console::MakeConsoleWriter)
		.with_ansi(false)
		.without_time()
		.with_target(false)
		.try_init();

	#[cfg(not(target_arch = "wasm32"))]
	let result = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init();

	if result.is_err() {
		tracing::debug!("logging already initialised");
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn build_filter(level: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| directive_filter(level))
}

#[cfg(target_arch = "wasm32")]
fn build_filter(level: &str) -> EnvFilter {
	directive_filter(level)
}

fn directive_filter(level: &str) -> EnvFilter {
	EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

#[cfg(target_arch = "wasm32")]
mod console {
	use std::io::{self, Write};

	use tracing::{Level, Metadata};
	use tracing_subscriber::fmt::MakeWriter;
	use wasm_bindgen::JsValue;

	/// Hands out one [`ConsoleWriter`] per formatted event.
	pub(super) struct MakeConsoleWriter;

	/// Buffers one formatted event and flushes it to the console on drop.
	pub(super) struct ConsoleWriter {
		level: Level,
		buffer: Vec<u8>,
	}

	impl Write for ConsoleWriter {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.buffer.extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	impl Drop for ConsoleWriter {
		fn drop(&mut self) {
			let line = String::from_utf8_lossy(&self.buffer);
			let message = JsValue::from_str(line.trim_end());
			match self.level {
				Level::ERROR => web_sys::console::error_1(&message),
				Level::WARN => web_sys::console::warn_1(&message),
				Level::INFO => web_sys::console::info_1(&message),
				_ => web_sys::console::debug_1(&message),
			}
		}
	}

	impl<'a> MakeWriter<'a> for MakeConsoleWriter {
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
