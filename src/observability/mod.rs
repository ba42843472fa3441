//! OpenTelemetry tracing with OTLP JSON spans written to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → opentelemetry_sdk → OtlpFileExporter → RotatingFile
//! ```
//!
//! Spans land in `~/.local/share/zellij/docportal/docportal-otlp.json`, one
//! OTLP document per exported batch. The file rotates at 10 MiB and keeps
//! three numbered backups.
//!
//! The filter comes from the `trace_level` plugin option (default `"info"`)
//! and accepts any `EnvFilter` directive, e.g. `"docportal=debug"`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`export`]: span exporter and OTLP JSON encoding
//! - [`rotation`]: size-rotated line writer

mod export;
mod init;
mod rotation;

pub use init::init_tracing;
