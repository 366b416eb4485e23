//! # schemascore-api
//!
//! HTTP surface for the schemascore engine: a single `POST /score_schema`
//! endpoint with permissive CORS. Validation failures map to 4xx responses
//! with a machine-readable kind; unexpected analysis failures map to an
//! opaque 500 with the cause logged, never leaked.

pub mod rest;

pub use rest::RestApi;
