//! OpenTelemetry tracing exported to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → socialshell-otlp.json
//! ```
//!
//! Each exported batch becomes one OTLP JSON line in
//! `~/.local/share/zellij/socialshell/socialshell-otlp.json`. The file rotates
//! at 10 MB and keeps three backups.
//!
//! The filter level is the plugin's `trace_level` option (default `info`).

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, TRACE_FILE};
