use core::fmt::Display;

use crate::error::{Reporter, ValidationError, default_reporter};
use crate::observable::{Readable, Subscription, Writable};
use crate::query_map::QueryMap;
use crate::schema::{QueryRecord, QuerySchema};
use crate::search_params::UrlSearchParams;

/// Reactive URL query store: a mutable observable of the validated record
/// plus a derived observable of its canonical serialized form.
///
/// Both representations are always recomputed together from the newly
/// adopted record, by every mutating operation. Publish order is fixed:
/// the serialized form first, then the record. On validation failure
/// neither representation changes; the error goes to the diagnostic
/// reporter.
pub struct UrlStore<S: QuerySchema> {
    schema: S,
    value: Writable<S::Output>,
    url: Writable<String>,
    report: Reporter,
}

impl<S: QuerySchema> UrlStore<S> {
    /// Derive the initial record from `params`. Validation failure leaves
    /// the default record (and its serialization) and reports through a
    /// `tracing` error event.
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
        let initial = S::Output::default();
        let store = Self {
            schema,
            url: Writable::new(serialize(&initial)),
            value: Writable::new(initial),
            report,
        };
        store.set_from(params);
        store
    }

    /// Register an observer of the record; delivered the current value
    /// immediately and every subsequent value.
    pub fn subscribe(&self, f: impl FnMut(&S::Output) + Send + 'static) -> Subscription<S::Output> {
        self.value.subscribe(f)
    }

    /// Clone of the current record.
    pub fn get(&self) -> S::Output {
        self.value.get()
    }

    /// Read-only observable of the serialized query string.
    pub fn url(&self) -> Readable<String> {
        self.url.readonly()
    }

    /// Adopt a caller-provided record.
    ///
    /// The serialized form is recomputed from the record, so any field the
    /// caller left empty has its key dropped from the query string.
    pub fn set(&self, value: S::Output) {
        self.url.set(serialize(&value));
        self.value.set(value);
    }

    /// Adopt a transform of the current record.
    pub fn update(&self, f: impl FnOnce(&S::Output) -> S::Output) {
        self.set(f(&self.value.get()));
    }

    /// Re-derive the record from a fresh set of params.
    pub fn set_from(&self, params: &UrlSearchParams) {
        self.apply(params);
    }

    /// Rebuild params from the current record, overwrite one key with the
    /// display form of `value`, and re-derive. One logical transition:
    /// subscribers see the new url, then the new record.
    pub fn set_query(&self, key: &str, value: impl Display) {
        let mut search = UrlSearchParams::from_pairs(self.value.get().query_pairs());
        search.set(key, &value.to_string());
        self.apply(&search);
    }

    /// Rebuild params from the current record, delete one key, and
    /// re-derive. Removing an absent key is a no-op transition.
    pub fn remove_by_key(&self, key: &str) {
        let mut search = UrlSearchParams::from_pairs(self.value.get().query_pairs());
        search.delete(key, None);
        self.apply(&search);
    }

    /// The single writer: validate `params` and, on success, publish both
    /// representations derived from the new record — url first, value
    /// second. On failure publish neither.
    fn apply(&self, params: &UrlSearchParams) {
        let raw = QueryMap::from_entries(params.entries());
        match self.schema.safe_parse(&raw) {
            Ok(data) => {
                self.url.set(serialize(&data));
                self.value.set(data);
            }
            Err(err) => (self.report)(&err),
        }
    }
}

impl<S: QuerySchema> core::fmt::Debug for UrlStore<S>
where
    S::Output: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UrlStore")
            .field("value", &self.value)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

fn serialize(record: &impl QueryRecord) -> String {
    UrlSearchParams::from_pairs(record.query_pairs()).to_string()
}
