//! Converts an XML product catalog feed into Admonis products.
//!
//! The heavy lifting lives in [`admonis_catalog`]; this crate wires it to the
//! filesystem and JSON output.

pub mod error;
pub mod export;
pub mod pipeline;

pub use admonis_catalog::{
    CatalogError, CatalogIndex, DEFAULT_SUG_NAME_1, DEFAULT_SUG_NAME_1_TITLE,
    DEFAULT_SUG_NAME_2_TITLE, FeedDocument, MappingReport, ProductMapper, UnresolvedVariant,
};
pub use admonis_types::{Product, ProductOption};
pub use error::PipelineError;
pub use export::{write_json, write_json_file};
pub use pipeline::{
    ExportConfig, ExportPipeline, ExportPipelineBuilder, ExportReport, ExportSummary, Strictness,
};
