use crate::error::ValidationError;
use crate::query_map::QueryMap;

/// Validation capability injected by the application.
///
/// A schema coerces a raw [`QueryMap`] into its typed output (string→number,
/// comma-split lists, ...) and reports malformed input as a recoverable
/// [`ValidationError`] — never as a panic.
///
/// The [`coerce`](crate::coerce) module provides the per-field building
/// blocks a typical implementation is assembled from.
pub trait QuerySchema {
    /// The typed record this schema produces.
    type Output: QueryRecord + Clone + Default + Send + 'static;

    fn safe_parse(&self, raw: &QueryMap) -> Result<Self::Output, ValidationError>;
}

/// Re-serialization capability of a typed record.
pub trait QueryRecord {
    /// Flat key/value pairs this record serializes back to.
    ///
    /// A field holding no value contributes no pair (its key is absent from
    /// the serialized query string, not present with an empty value).
    /// List-valued fields contribute a single pair whose value is the
    /// comma-joined list.
    fn query_pairs(&self) -> Vec<(String, String)>;
}
