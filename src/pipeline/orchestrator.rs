// src/pipeline/orchestrator.rs
use super::config::ExportConfig;
use crate::error::PipelineError;
use crate::export::write_json_file;
use admonis_catalog::{CatalogIndex, FeedDocument, ProductMapper, UnresolvedVariant};
use admonis_types::Product;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Everything produced by converting one catalog, before it is written.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub products: Vec<Product>,
    pub unresolved: Vec<UnresolvedVariant>,
    /// `product` elements dropped because they carried no `product-id`.
    pub skipped_without_id: usize,
}

impl ExportReport {
    pub fn option_count(&self) -> usize {
        Product::option_count(&self.products)
    }
}

/// Counts reported after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub products: usize,
    pub options: usize,
    pub unresolved: usize,
    pub skipped_without_id: usize,
    pub output: PathBuf,
}

/// Reads a catalog feed, maps it and writes the products out as JSON.
///
/// The output file is only touched once the whole catalog has been mapped,
/// so a failing run leaves no partial export behind.
#[derive(Debug)]
pub struct ExportPipeline {
    config: ExportConfig,
}

impl ExportPipeline {
    pub(crate) fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Converts an in-memory XML feed.
    pub fn convert_str(&self, xml: &str) -> Result<ExportReport, PipelineError> {
        let document = FeedDocument::parse(xml)?;
        let index = CatalogIndex::build(&document, self.config.strictness)?;
        let mapping = ProductMapper::new(&index)
            .with_strictness(self.config.strictness)
            .map()?;

        Ok(ExportReport {
            products: mapping.products,
            unresolved: mapping.unresolved,
            skipped_without_id: index.skipped(),
        })
    }

    /// Reads the configured input file and converts it.
    pub fn load(&self) -> Result<ExportReport, PipelineError> {
        let path = &self.config.input;
        info!("Loading catalog from {}", path.display());
        let xml = fs::read_to_string(path).map_err(|e| {
            PipelineError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read catalog from '{}': {}", path.display(), e),
            ))
        })?;
        self.convert_str(&xml)
    }

    /// Loads, converts and writes the configured catalog.
    pub fn run(&self) -> Result<ExportSummary, PipelineError> {
        let report = self.load()?;
        if !report.unresolved.is_empty() {
            warn!("{} variant reference(s) could not be resolved", report.unresolved.len());
        }

        write_json_file(&report.products, &self.config.output, self.config.pretty)?;
        info!(
            "Wrote {} products to {}",
            report.products.len(),
            self.config.output.display()
        );

        Ok(ExportSummary {
            products: report.products.len(),
            options: report.option_count(),
            unresolved: report.unresolved.len(),
            skipped_without_id: report.skipped_without_id,
            output: self.config.output.clone(),
        })
    }
}
