//! # rickdex-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **compiled dashboard bundle** (`index.html`, the WASM module,
//!   its JS glue and stylesheets) from a directory on disk
//! - Fall back to `index.html` for unknown paths so client-side routing works
//! - Expose a `/health` probe for process supervisors
//!
//! ## Dependency rule
//! The dashboard fetches characters directly from the public API, so this
//! adapter knows nothing about characters: it depends on neither
//! `rickdex-domain` nor `rickdex-app`.

pub mod assets;
pub mod router;

pub use assets::{AssetsError, StaticAssets};
