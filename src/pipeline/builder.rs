// src/pipeline/builder.rs
use super::config::{ExportConfig, Strictness};
use super::orchestrator::ExportPipeline;
use crate::error::PipelineError;
use std::path::Path;

/// A builder for creating an `ExportPipeline`.
#[derive(Debug, Default)]
pub struct ExportPipelineBuilder {
    config: ExportConfig,
}

impl ExportPipelineBuilder {
    /// Creates a builder with the default paths and lenient handling.
    pub fn new() -> Self { Default::default() }

    /// Replaces every setting at once.
    pub fn with_config(mut self, config: ExportConfig) -> Self { self.config = config; self }

    /// Path of the XML catalog feed to read.
    pub fn with_input<P: AsRef<Path>>(mut self, path: P) -> Self { self.config.input = path.as_ref().to_path_buf(); self }

    /// Path of the JSON file to write. Missing parent directories are created on write.
    pub fn with_output<P: AsRef<Path>>(mut self, path: P) -> Self { self.config.output = path.as_ref().to_path_buf(); self }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self { self.config.strictness = strictness; self }

    pub fn with_pretty(mut self, pretty: bool) -> Self { self.config.pretty = pretty; self }

    /// Consumes the builder and validates the configuration.
    pub fn build(self) -> Result<ExportPipeline, PipelineError> {
        if self.config.input.as_os_str().is_empty() {
            return Err(PipelineError::Config("input path is empty".to_string()));
        }
        if self.config.output.as_os_str().is_empty() {
            return Err(PipelineError::Config("output path is empty".to_string()));
        }
        log::debug!(
            "Export configured: {} -> {} ({:?})",
            self.config.input.display(),
            self.config.output.display(),
            self.config.strictness
        );
        Ok(ExportPipeline::new(self.config))
    }
}
