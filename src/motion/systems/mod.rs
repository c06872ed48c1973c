//! Motion domain: system modules for controller updates.

pub(crate) mod camera;
pub(crate) mod collisions;
pub(crate) mod controller;
pub(crate) mod input;

pub(crate) use camera::{follow_player, orbit_camera};
pub(crate) use controller::{drive_controller, log_motion_events};
pub(crate) use input::read_input;
