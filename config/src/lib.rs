//! # Config Crate
//!
//! Centralized configuration constants for the gothic window generator.
//! Every proportion, default parameter and material value lives here so the
//! geometry crates stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{SHOULDER_RATIO, DEFAULT_HEIGHT};
//!
//! let shoulder_h = DEFAULT_HEIGHT * SHOULDER_RATIO;
//! assert!(shoulder_h < DEFAULT_HEIGHT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Literal Proportions**: Visual ratios are tuned constants, not derived laws
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
