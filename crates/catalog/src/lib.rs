//! Catalog feed indexing and product mapping.
//!
//! A feed is parsed into a [`FeedDocument`], every `product` element is
//! indexed by id in a [`CatalogIndex`], and a [`ProductMapper`] turns the
//! parents (products with a `variations` child) into [`Product`] records,
//! resolving each listed variant through the index.
//!
//! ```ignore
//! use admonis_catalog::{CatalogIndex, FeedDocument, ProductMapper, Strictness};
//!
//! let doc = FeedDocument::parse(&xml)?;
//! let index = CatalogIndex::build(&doc, Strictness::Lenient)?;
//! let products = ProductMapper::new(&index).get_products()?;
//! ```

pub mod document;
pub mod error;
pub mod fields;
pub mod index;
pub mod mapper;
pub mod policy;

pub use admonis_types::{Product, ProductOption};
pub use document::{FeedDocument, Namespace};
pub use error::CatalogError;
pub use fields::FieldReader;
pub use index::CatalogIndex;
pub use mapper::{
    DEFAULT_SUG_NAME_1, DEFAULT_SUG_NAME_1_TITLE, DEFAULT_SUG_NAME_2_TITLE, MappingReport,
    ProductMapper, ResolvedOptions, UnresolvedVariant,
};
pub use policy::Strictness;
