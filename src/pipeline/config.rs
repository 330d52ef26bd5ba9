use std::path::PathBuf;

pub use admonis_catalog::Strictness;

/// Where the catalog is read from, where the export goes, and how strictly
/// dangling references are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub strictness: Strictness,
    /// Indented JSON when true, a single line otherwise.
    pub pretty: bool,
}

impl ExportConfig {
    pub const DEFAULT_INPUT: &'static str = "Admonis/Product.xml";
    pub const DEFAULT_OUTPUT: &'static str = "output/products.json";
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(Self::DEFAULT_INPUT),
            output: PathBuf::from(Self::DEFAULT_OUTPUT),
            strictness: Strictness::default(),
            pretty: true,
        }
    }
}
