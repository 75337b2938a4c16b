//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces go to `~/.local/share/zellij/projboard/projboard-otlp.json`
//! - The file rotates at 10 MB, keeping 3 numbered backups
//! - Each line is a standalone OTLP JSON document
//!
//! The level is set with the `trace_level` plugin configuration key.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Size-rotated line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, DEFAULT_TRACE_LEVEL};

/// `service.name` resource attribute and instrumentation scope of exported spans.
pub const SERVICE_NAME: &str = "projboard";
