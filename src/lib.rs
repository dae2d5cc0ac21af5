#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod motion;
pub mod retarget;
pub mod rig;
pub mod scene;
pub mod simulator;
pub mod utils;

#[cfg(feature = "gltf")]
pub mod assets;

pub use errors::{MarionetteError, Result};
pub use motion::{
    BodySide, CommandId, CompletedCommand, MotionSequencer, SequencerState, SequencerStatus,
    WalkDirection,
};
pub use retarget::{
    BoneMap, BoneMapping, BoneResolver, MappingOverrides, MappingRecord, PoseApplier,
    SkeletonIndex,
};
pub use rig::{JointAngles, JointKey, JointLimit, PresetPose, RotationAxis};
pub use scene::{Node, NodeHandle, NodeKind, Scene, Skeleton, SkeletonKey, Transform};
pub use simulator::{ModelState, Simulator};
pub use utils::Timer;

#[cfg(feature = "gltf")]
pub use assets::GltfImport;
