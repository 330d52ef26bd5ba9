pub mod fixtures;

use admonis_export::{ExportPipelineBuilder, ExportReport, PipelineError, Strictness};
use serde_json::Value;
use std::path::{Path, PathBuf};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

/// Convert an in-memory feed with the given strictness.
pub fn convert(xml: &str, strictness: Strictness) -> Result<ExportReport, PipelineError> {
    ExportPipelineBuilder::new()
        .with_strictness(strictness)
        .build()?
        .convert_str(xml)
}

/// Read back a JSON export written by the pipeline.
pub fn read_export(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
