//! Client for the document management REST service.
//!
//! [`models`] mirrors the service's JSON records and request payloads.
//! [`ApiClient`] wraps a single `reqwest` client and attaches the bearer token
//! to every call. The crate targets `wasm32` for the browser UI but builds
//! natively too, which is where its unit tests run.

mod api;
mod client;
mod config;
mod error;
pub mod models;

pub use api::{
    file_retrieval_path, upload_category, FileContent, UploadFile, DEFAULT_UPLOAD_CATEGORY,
};
pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_API_HOST};
pub use error::{ApiError, Result};
pub use models::{
    AttachedFile, Branch, Category, CreatedOn, Department, Document, DocumentHeaderPayload,
    DocumentPayload, Employee, IdRef, NamedRef, Role, SearchCriteria,
};
