//! OpenTelemetry tracer provider backed by a file exporter.
//!
//! Plugins cannot open network connections from the sandbox, so finished spans
//! are written as OTLP JSON lines to a rotating file instead of a collector.

use super::file_writer::RotatingFileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::future::ready;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter writing one OTLP document per exported batch.
struct FileSpanExporter {
    writer: RotatingFileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(writer: RotatingFileWriter, resource: Resource) -> Self {
        Self {
            writer,
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }
        let document = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&document)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        Box::pin(ready(self.write_batch(&batch)))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider that exports every span as soon as it ends.
///
/// A simple (unbatched) exporter is used because the plugin has no async
/// runtime to drive a batch processor.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(RotatingFileWriter::new(file_path), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;
    use tempfile::TempDir;

    fn exporter(dir: &TempDir) -> FileSpanExporter {
        let resource = Resource::new(vec![KeyValue::new("service.name", "projboard")]);
        FileSpanExporter::new(RotatingFileWriter::new(dir.path().join("trace.json")), resource)
    }

    #[test]
    fn each_batch_is_one_json_line() {
        let dir = TempDir::new().unwrap();
        let exporter = exporter(&dir);

        exporter.write_batch(&[]).unwrap();
        exporter.write_batch(&[]).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("trace.json")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert!(parsed["resourceSpans"].is_array());
    }

    #[test]
    fn shut_down_exporter_refuses_batches() {
        let dir = TempDir::new().unwrap();
        let mut exporter = exporter(&dir);

        exporter.shutdown();

        assert!(exporter.write_batch(&[]).is_err());
        assert!(!dir.path().join("trace.json").exists());
    }
}
