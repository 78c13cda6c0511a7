//! Typed, observable URL query state.
//!
//! This crate binds a URL query string to a validated, reactively observable
//! value. A [`QuerySchema`] implementation (supplied by the application)
//! coerces the raw query mapping into a typed record; [`UrlStore`] keeps that
//! record and its canonical serialized form in sync through every mutation.

// Internal modules (not public API)
mod error;
mod observable;
mod percent;
mod query_map;
mod schema;
mod search_params;
mod typed_params;
mod url_store;

// Field coercion helpers for schema implementations
pub mod coerce;

// Public API
pub use error::{FieldError, ValidationError};
pub use observable::{Readable, Subscription, Writable};
pub use query_map::{QueryMap, QueryValue};
pub use schema::{QueryRecord, QuerySchema};
pub use search_params::UrlSearchParams;
pub use typed_params::TypedParams;
pub use url_store::UrlStore;

pub type Result<T> = core::result::Result<T, ValidationError>;
