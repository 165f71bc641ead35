//! # API crate: HTTP access to the shared page's backend
//!
//! The backend is an external REST service with one collection per section
//! (`/photos`, `/songs`, `/movies`, `/notes`, `/plans`). This crate knows where
//! it lives and how to talk to it; what to do with the answers lives in
//! `store`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `BACKEND_URL` from the environment (`.env` on native, build-time on WASM) with a localhost default |
//! | [`client`] | [`HttpClient`], the reqwest implementation of [`store::ResourceClient`] |
//! | [`error`] | [`ApiError`]: transport, status, and decode failures, each naming the URL |

pub mod client;
pub mod config;
pub mod error;

pub use client::HttpClient;
pub use config::ApiConfig;
pub use error::ApiError;

pub use store::{ListQuery, ResourceClient};
