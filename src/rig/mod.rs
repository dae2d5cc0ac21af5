//! The humanoid joint schema.
//!
//! Pure configuration: the 22 named rotational degrees of freedom, their
//! limits and rotation axes, the default pose and the named preset poses.
//! No logic beyond lookup lives here.

pub mod joints;
pub mod presets;

pub use joints::{AxisSpec, JointAngles, JointKey, JointLimit, RotationAxis};
pub use presets::PresetPose;
