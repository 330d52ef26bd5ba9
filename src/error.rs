// src/error.rs
use admonis_catalog::CatalogError;
use thiserror::Error;

/// Errors surfaced by the export pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Catalog conversion failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
