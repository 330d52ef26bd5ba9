//! JSON output for mapped products.

use crate::error::PipelineError;
use admonis_types::Product;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Serializes `products` as a JSON array into `writer`.
pub fn write_json<W: Write>(products: &[Product], writer: W, pretty: bool) -> Result<(), PipelineError> {
    if pretty {
        serde_json::to_writer_pretty(writer, products)?;
    } else {
        serde_json::to_writer(writer, products)?;
    }
    Ok(())
}

/// Writes `products` to `path`, creating missing parent directories.
///
/// The document is fully serialized before the file is opened.
pub fn write_json_file(products: &[Product], path: &Path, pretty: bool) -> Result<(), PipelineError> {
    let mut buffer = Vec::new();
    write_json(products, &mut buffer, pretty)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, buffer)?;
    Ok(())
}
