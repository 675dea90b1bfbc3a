//! Tessera Core - Shared types for the Tessera mesh pipeline
//!
//! This crate provides the foundational types used by the other crates:
//! - Mathematical primitives (re-exported from glam)
//! - Frame clock and fixed-period intervals for the viewer loop
//! - Shading mode selection handed to the external renderer

pub mod time;
pub mod types;

pub use glam::{Vec2, Vec3};
pub use time::{ClockConfig, FrameClock, Interval};
pub use types::ShadingMode;
