//! # Config Crate
//!
//! Centralized configuration constants for the Quadray geometry engine.
//! Tolerances, tessellation defaults, safety limits and the Rational
//! Trigonometry math constants the engine consumes are defined here so that
//! every crate agrees on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, quadray_grid_interval, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(approx_zero(value));
//! assert!(value.abs() < EPSILON);
//!
//! // The IVM grid interval is √6/4
//! assert!((quadray_grid_interval() - 0.6123724356957945).abs() < 1e-14);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Deterministic**: Helper functions are pure functions of their inputs
//! - **Browser-Safe**: No platform-specific values

pub mod constants;
