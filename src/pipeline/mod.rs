//! Export pipeline orchestration.
//!
//! - [`ExportPipelineBuilder`]: Fluent builder for configuring an export
//! - [`ExportPipeline`]: Loads a feed, maps it and writes the JSON export
//! - [`ExportConfig`]: Paths, strictness and output formatting
//!
//! # Example
//!
//! ```ignore
//! use admonis_export::{ExportPipelineBuilder, Strictness};
//!
//! let summary = ExportPipelineBuilder::new()
//!     .with_input("Admonis/Product.xml")
//!     .with_output("output/products.json")
//!     .with_strictness(Strictness::Strict)
//!     .build()?
//!     .run()?;
//! ```

mod builder;
pub mod config;
mod orchestrator;

pub use builder::ExportPipelineBuilder;
pub use config::{ExportConfig, Strictness};
pub use orchestrator::{ExportPipeline, ExportReport, ExportSummary};
