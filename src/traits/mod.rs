//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`Backend`] - Remote document store and credential service
//! - [`HttpClient`] - HTTP client operations used by the REST backend
//! - [`NotificationSink`] - Transient user-facing messages
//! - [`Renderer`] - Consumer of projected view documents

pub mod backend;
pub mod http;
pub mod notification;
pub mod renderer;

pub use backend::{Backend, BackendError};
pub use http::{Headers, HttpClient, HttpError, HttpRequest, Method, Response};
pub use notification::{NotificationSink, Severity, NOTIFICATION_TTL};
pub use renderer::{NullRenderer, RecordingRenderer, Renderer, WatchRenderer};
