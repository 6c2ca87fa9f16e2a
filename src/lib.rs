//! # trainkit
//!
//! Training-support utilities for deep-learning workflows built on the
//! Burn ML framework: explicit seeding, device placement, rotating
//! checkpoint persistence, and terminal loss-curve plotting.
//!
//! ## Modules
//!
//! - [`checkpoint`] — Rotating checkpoint store with a bounded manifest and best-snapshot tracking
//! - [`runtime`] — Seeded RNGs and the selected device, initialized once at startup
//! - [`device`] — Compile-time backend selection and tensor placement helpers
//! - [`plot`] — Loss-curve smoothing and terminal chart rendering
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod checkpoint;
pub mod config;
pub mod device;
pub mod error;
pub mod plot;
pub mod runtime;
