//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown, with the storage it owns
//! - **Requests**: List, Create, Get, Update and Delete, with ids and payloads at `debug`
//! - **Mutations**: `Created` / `Updated` / `Deleted` at `info`, with the collection size
//! - **Rejections**: validation failures, duplicates, missing ids and storage errors at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Mutations and rejections only
//! RUST_LOG=info cargo run
//!
//! # Every request with its full payload
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` the canonical product scenario reads:
//!
//! ```text
//! INFO Actor started entity_type="Product" storage=products.json
//! INFO Created entity_type="Product" id=1 size=1
//! WARN Create failed entity_type="Product" error=Entity error: Duplicate code: C1
//! INFO Updated entity_type="Product" id=1
//! INFO Deleted entity_type="Product" id=1 size=0
//! INFO Shutdown entity_type="Product" storage=products.json
//! ```
//!
//! The compact format hides the crate/module prefix (`with_target(false)`); the
//! `entity_type` field already says which actor is talking.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
