//! Viewer core for an immersive house walkthrough.
//!
//! The host render loop owns the scene, the XR session and the assets; this
//! crate owns locomotion. Each frame the host hands us the clock, the
//! controller poses, the candidate floor surfaces and a mutable borrow of
//! the player rig, and the teleport subsystem does the rest.

pub mod house_model;
pub mod input_context;
pub mod layers;
pub mod player_rig;
pub mod teleport;
pub mod time;

pub use house_model::HouseModel;
pub use input_context::{ControllerId, InputContext};
pub use player_rig::PlayerRig;
pub use time::Time;
