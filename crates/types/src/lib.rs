//! Records emitted by the catalog mapper and consumed by the JSON exporter.

pub mod option;
pub mod product;

pub use option::ProductOption;
pub use product::Product;
