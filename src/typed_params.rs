use core::fmt::Display;

use crate::error::{Reporter, ValidationError, default_reporter};
use crate::query_map::QueryMap;
use crate::schema::{QueryRecord, QuerySchema};
use crate::search_params::UrlSearchParams;

/// Stateless typed view over a query string.
///
/// Unlike [`UrlStore`](crate::UrlStore) this helper is not observable: it
/// mutates its own `data` in place and hands itself back for chaining.
pub struct TypedParams<S: QuerySchema> {
    schema: S,
    data: S::Output,
    report: Reporter,
}

impl<S: QuerySchema> TypedParams<S> {
    /// Derive the initial value from `params`. Validation failure leaves the
    /// default record and reports through a `tracing` error event.
    pub fn new(params: &UrlSearchParams, schema: S) -> Self {
        Self::build(params, schema, default_reporter())
    }

    /// Like [`new`](Self::new) with an injected diagnostic callback.
    pub fn with_reporter(
        params: &UrlSearchParams,
        schema: S,
        report: impl Fn(&ValidationError) + Send + Sync + 'static,
    ) -> Self {
        Self::build(params, schema, Box::new(report))
    }

    fn build(params: &UrlSearchParams, schema: S, report: Reporter) -> Self {
        let mut typed = Self {
            schema,
            data: S::Output::default(),
            report,
        };
        typed.from(params);
        typed
    }

    /// The current validated record.
    pub fn data(&self) -> &S::Output {
        &self.data
    }

    /// Re-derive `data` from a fresh set of params.
    ///
    /// On validation failure the error goes to the diagnostic callback and
    /// the previously held `data` is retained.
    pub fn from(&mut self, params: &UrlSearchParams) -> &mut Self {
        let raw = QueryMap::from_entries(params.entries());
        match self.schema.safe_parse(&raw) {
            Ok(data) => self.data = data,
            Err(err) => (self.report)(&err),
        }
        self
    }

    /// Serialize the current record, overwrite one key with the display form
    /// of `value`, and re-derive.
    pub fn set_query(&mut self, key: &str, value: impl Display) -> &mut Self {
        let mut search = UrlSearchParams::from_pairs(self.data.query_pairs());
        search.set(key, &value.to_string());
        self.from(&search)
    }

    /// Canonical query-string form of the current record.
    pub fn to_query_string(&self) -> String {
        UrlSearchParams::from_pairs(self.data.query_pairs()).to_string()
    }
}

impl<S: QuerySchema> core::fmt::Display for TypedParams<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<S: QuerySchema> core::fmt::Debug for TypedParams<S>
where
    S::Output: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TypedParams")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
