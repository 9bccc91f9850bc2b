#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Biblio web client.
//!
//! The heart of this crate is the session & request-authorization core in
//! [`crate::core`]: a durable session store, a navigation guard, and the
//! classification rules of the HTTP request pipeline. Everything in `core`
//! plus the route table is DOM-free and tested on the host target; the Yew
//! application shell, views, and the `gloo-net` transport are gated to
//! `wasm32`.

pub mod core;
pub mod routes;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
