//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FirebaseBackend`] - Firestore + Identity Toolkit over any [`HttpClient`](crate::traits::HttpClient)
//! - [`InMemoryBackend`] - The whole backend contract in memory (tests, `--demo`)
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Canned HTTP responses with request recording

pub mod firebase;
pub mod memory;
pub mod mock;
pub mod reqwest_http;

pub use firebase::{FirebaseBackend, FirebaseOptions};
pub use memory::{BackendCall, BackendOp, InMemoryBackend, DEMO_ADMIN_PASSWORD};
pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
