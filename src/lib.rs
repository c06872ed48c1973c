//! Ascent: a third-person character movement controller with stamina-scaled
//! forces, tiered jumps, dashes, and zone-unlocked abilities.

pub mod content;
pub mod course;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod motion;
pub mod ui;
