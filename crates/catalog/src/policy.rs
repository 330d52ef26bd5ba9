/// How the catalog reacts to data it cannot place.
///
/// Applies to `product` elements without a `product-id` and to variant ids
/// that are not present in the index. Everything else that is missing falls
/// back to a per-field default regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Skip the offending element, log a warning and keep going. (Default)
    #[default]
    Lenient,
    /// Abort the whole conversion with an error.
    Strict,
}
