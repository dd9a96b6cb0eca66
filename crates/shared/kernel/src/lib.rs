//! Kernel utilities shared across aspects.
//! Keep this crate lightweight; it re-exports ergonomic helpers for IDs, config loading,
//! fixtures and the composed platform state.
//!
//! ## ID generation
//! Use `safe_nanoid!` for URL-safe, unambiguous IDs:
//! ```rust
//! # use hunt_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use hunt_kernel::config::load_config;
//! use hunt_kernel::domain::config::HuntConfig;
//!
//! let cfg: HuntConfig = load_config(Some("hunt.toml")).unwrap_or_default();
//! ```
pub mod clock;
pub mod config;
pub mod fixtures;
pub mod platform;

pub use hunt_domain as domain;
pub use hunt_domain::{nanoid, safe_nanoid};
