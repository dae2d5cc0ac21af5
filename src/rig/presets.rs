use crate::rig::JointAngles;

/// A named, fully specified pose.
///
/// Presets are complete vectors, not deltas, so tweening from "whatever the
/// current pose is" to a preset is always well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetPose {
    TPose,
    Stand,
    Wave,
    Clap,
    WalkReady,
    Bow,
}

const STAND: JointAngles = JointAngles {
    left_shoulder_yaw: 10.0,
    right_shoulder_yaw: -10.0,
    ..JointAngles::ZERO
};

const WAVE: JointAngles = JointAngles {
    right_shoulder_pitch: -140.0,
    right_shoulder_yaw: -30.0,
    right_elbow: -90.0,
    right_wrist: 20.0,
    ..JointAngles::DEFAULT
};

const CLAP: JointAngles = JointAngles {
    left_shoulder_pitch: -90.0,
    left_shoulder_yaw: 45.0,
    right_shoulder_pitch: -90.0,
    right_shoulder_yaw: -45.0,
    ..JointAngles::ZERO
};

const WALK_READY: JointAngles = JointAngles {
    left_shoulder_yaw: 10.0,
    right_shoulder_yaw: -10.0,
    left_knee: 15.0,
    right_knee: 15.0,
    ..JointAngles::ZERO
};

const BOW: JointAngles = JointAngles {
    neck_pitch: 30.0,
    left_shoulder_yaw: 10.0,
    right_shoulder_yaw: -10.0,
    left_hip_pitch: -45.0,
    right_hip_pitch: -45.0,
    left_knee: 45.0,
    right_knee: 45.0,
    ..JointAngles::ZERO
};

impl PresetPose {
    pub const ALL: [PresetPose; 6] = [
        PresetPose::TPose,
        PresetPose::Stand,
        PresetPose::Wave,
        PresetPose::Clap,
        PresetPose::WalkReady,
        PresetPose::Bow,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PresetPose::TPose => "tpose",
            PresetPose::Stand => "stand",
            PresetPose::Wave => "wave",
            PresetPose::Clap => "clap",
            PresetPose::WalkReady => "walk_ready",
            PresetPose::Bow => "bow",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<PresetPose> {
        PresetPose::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The full joint vector of this preset.
    #[must_use]
    pub fn angles(self) -> JointAngles {
        match self {
            PresetPose::TPose => JointAngles::DEFAULT,
            PresetPose::Stand => STAND,
            PresetPose::Wave => WAVE,
            PresetPose::Clap => CLAP,
            PresetPose::WalkReady => WALK_READY,
            PresetPose::Bow => BOW,
        }
    }
}
