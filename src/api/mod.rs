//! HTTP API layer.
//!
//! [`request`] owns the transport contract (base path, timeout, token
//! injection, response normalization); [`endpoints`] is the flat surface of
//! backend calls built on top of it.

pub mod endpoints;
pub mod request;

pub use endpoints::*;
pub use request::{
    get_api_base, set_api_base, set_token, clear_token, ApiClient, CredentialProvider,
    LocalStorageCredentials, Method, RequestDescriptor, RequestError, StaticCredentials,
    DEFAULT_API_BASE, REQUEST_TIMEOUT_MS, TOKEN_HEADER, TOKEN_STORAGE_KEY,
};
