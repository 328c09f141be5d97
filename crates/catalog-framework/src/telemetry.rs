//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger used by every catalog process.
//!
//! ## Configuration
//!
//! Log lines are compact and hide the crate/module prefix (`with_target(false)`).
//! The resource is identified by the `entity_type` field instead (`MOVIE`, `BOOK`, ...).
//! Levels come from the `RUST_LOG` environment variable.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and writes
//! RUST_LOG=debug cargo run    # request payloads, specifications, validation passes
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Writes**: `Created`, `Updated`, `Deleted`, `Duplicated` with the entity id
//! - **Searches**: compiled specification at `debug`, totals at `info`
//! - **Rejections**: validation codes and hook failures at `warn`
//!
//! With `RUST_LOG=debug` a failed movie creation reads:
//!
//! ```text
//! DEBUG add called entity_type="MOVIE" request=MovieChange { title: Some(""), .. }
//! WARN Validation failed codes=["MOVIE_TITLE_EMPTY"] status=422
//! ```

/// Initializes the global `tracing` subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the resource
        .compact()
        .init();
}
