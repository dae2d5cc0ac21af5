use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 22 rotational degrees of freedom of the humanoid schema.
///
/// Serialized names are camelCase and match the joint keys used by stored
/// programs and mapping records (`leftShoulderPitch`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JointKey {
    // Torso (1)
    Torso,
    // Head (2)
    NeckYaw,
    NeckPitch,
    // Left arm (5)
    LeftShoulderPitch,
    LeftShoulderYaw,
    LeftElbow,
    LeftWrist,
    LeftGrip,
    // Right arm (5)
    RightShoulderPitch,
    RightShoulderYaw,
    RightElbow,
    RightWrist,
    RightGrip,
    // Left leg (4)
    LeftHipPitch,
    LeftHipYaw,
    LeftKnee,
    LeftAnkle,
    // Right leg (4)
    RightHipPitch,
    RightHipYaw,
    RightKnee,
    RightAnkle,
}

/// Inclusive per-joint range. Angles in degrees, grips in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimit {
    pub min: f32,
    pub max: f32,
}

impl JointLimit {
    #[inline]
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// The single local-rotation axis a joint drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

/// Rotation axis plus sign multiplier for one joint.
///
/// The sign exists so mirrored rigs can flip a joint's direction without
/// touching the schema; every stock entry is currently `+1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    pub axis: RotationAxis,
    pub sign: f32,
}

const fn axis(axis: RotationAxis) -> AxisSpec {
    AxisSpec { axis, sign: 1.0 }
}

impl JointKey {
    /// Schema order. Conceptual grouping: torso, neck, left arm, right arm,
    /// left leg, right leg.
    pub const ALL: [JointKey; 21] = [
        JointKey::Torso,
        JointKey::NeckYaw,
        JointKey::NeckPitch,
        JointKey::LeftShoulderPitch,
        JointKey::LeftShoulderYaw,
        JointKey::LeftElbow,
        JointKey::LeftWrist,
        JointKey::LeftGrip,
        JointKey::RightShoulderPitch,
        JointKey::RightShoulderYaw,
        JointKey::RightElbow,
        JointKey::RightWrist,
        JointKey::RightGrip,
        JointKey::LeftHipPitch,
        JointKey::LeftHipYaw,
        JointKey::LeftKnee,
        JointKey::LeftAnkle,
        JointKey::RightHipPitch,
        JointKey::RightHipYaw,
        JointKey::RightKnee,
        JointKey::RightAnkle,
    ];

    pub const COUNT: usize = Self::ALL.len();

    /// The serialized camelCase name of this joint.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JointKey::Torso => "torso",
            JointKey::NeckYaw => "neckYaw",
            JointKey::NeckPitch => "neckPitch",
            JointKey::LeftShoulderPitch => "leftShoulderPitch",
            JointKey::LeftShoulderYaw => "leftShoulderYaw",
            JointKey::LeftElbow => "leftElbow",
            JointKey::LeftWrist => "leftWrist",
            JointKey::LeftGrip => "leftGrip",
            JointKey::RightShoulderPitch => "rightShoulderPitch",
            JointKey::RightShoulderYaw => "rightShoulderYaw",
            JointKey::RightElbow => "rightElbow",
            JointKey::RightWrist => "rightWrist",
            JointKey::RightGrip => "rightGrip",
            JointKey::LeftHipPitch => "leftHipPitch",
            JointKey::LeftHipYaw => "leftHipYaw",
            JointKey::LeftKnee => "leftKnee",
            JointKey::LeftAnkle => "leftAnkle",
            JointKey::RightHipPitch => "rightHipPitch",
            JointKey::RightHipYaw => "rightHipYaw",
            JointKey::RightKnee => "rightKnee",
            JointKey::RightAnkle => "rightAnkle",
        }
    }

    /// Parses a serialized joint name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<JointKey> {
        JointKey::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// The declared range for this joint.
    #[must_use]
    pub fn limit(self) -> JointLimit {
        let (min, max) = match self {
            JointKey::Torso => (-45.0, 45.0),
            JointKey::NeckYaw => (-90.0, 90.0),
            JointKey::NeckPitch => (-45.0, 45.0),
            JointKey::LeftShoulderPitch => (-180.0, 60.0),
            JointKey::LeftShoulderYaw => (-30.0, 180.0),
            JointKey::LeftElbow => (-135.0, 0.0),
            JointKey::LeftWrist => (-90.0, 90.0),
            JointKey::LeftGrip => (0.0, 1.0),
            JointKey::RightShoulderPitch => (-180.0, 60.0),
            JointKey::RightShoulderYaw => (-180.0, 30.0),
            JointKey::RightElbow => (-135.0, 0.0),
            JointKey::RightWrist => (-90.0, 90.0),
            JointKey::RightGrip => (0.0, 1.0),
            JointKey::LeftHipPitch => (-90.0, 45.0),
            JointKey::LeftHipYaw => (-45.0, 45.0),
            JointKey::LeftKnee => (0.0, 135.0),
            JointKey::LeftAnkle => (-45.0, 45.0),
            JointKey::RightHipPitch => (-90.0, 45.0),
            JointKey::RightHipYaw => (-45.0, 45.0),
            JointKey::RightKnee => (0.0, 135.0),
            JointKey::RightAnkle => (-45.0, 45.0),
        };
        JointLimit { min, max }
    }

    /// The local-rotation axis (and sign) this joint writes to.
    ///
    /// Exactly one axis per joint; the pose applier leaves the other two
    /// axes at their bind-pose values.
    #[must_use]
    pub fn axis_spec(self) -> AxisSpec {
        match self {
            JointKey::Torso => axis(RotationAxis::Y),
            JointKey::NeckYaw => axis(RotationAxis::Y),
            JointKey::NeckPitch => axis(RotationAxis::X),
            JointKey::LeftShoulderPitch => axis(RotationAxis::X),
            JointKey::LeftShoulderYaw => axis(RotationAxis::Z),
            JointKey::LeftElbow => axis(RotationAxis::X),
            JointKey::LeftWrist => axis(RotationAxis::Z),
            JointKey::LeftGrip => axis(RotationAxis::Z),
            JointKey::RightShoulderPitch => axis(RotationAxis::X),
            JointKey::RightShoulderYaw => axis(RotationAxis::Z),
            JointKey::RightElbow => axis(RotationAxis::X),
            JointKey::RightWrist => axis(RotationAxis::Z),
            JointKey::RightGrip => axis(RotationAxis::Z),
            JointKey::LeftHipPitch => axis(RotationAxis::X),
            JointKey::LeftHipYaw => axis(RotationAxis::Y),
            JointKey::LeftKnee => axis(RotationAxis::X),
            JointKey::LeftAnkle => axis(RotationAxis::X),
            JointKey::RightHipPitch => axis(RotationAxis::X),
            JointKey::RightHipYaw => axis(RotationAxis::Y),
            JointKey::RightKnee => axis(RotationAxis::X),
            JointKey::RightAnkle => axis(RotationAxis::X),
        }
    }
}

impl fmt::Display for JointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full joint-angle vector: one value per schema joint.
///
/// Angles are in degrees except the two grip fields, which are open/close
/// fractions in [0, 1]. The type is `Copy`; every published update is a
/// fresh value, so readers (the renderer, the pose applier) never observe a
/// half-written vector.
///
/// Limits are enforced by callers at the sequencer boundary, not by this
/// type: an out-of-range field here is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JointAngles {
    pub torso: f32,
    pub neck_yaw: f32,
    pub neck_pitch: f32,
    pub left_shoulder_pitch: f32,
    pub left_shoulder_yaw: f32,
    pub left_elbow: f32,
    pub left_wrist: f32,
    pub left_grip: f32,
    pub right_shoulder_pitch: f32,
    pub right_shoulder_yaw: f32,
    pub right_elbow: f32,
    pub right_wrist: f32,
    pub right_grip: f32,
    pub left_hip_pitch: f32,
    pub left_hip_yaw: f32,
    pub left_knee: f32,
    pub left_ankle: f32,
    pub right_hip_pitch: f32,
    pub right_hip_yaw: f32,
    pub right_knee: f32,
    pub right_ankle: f32,
}

impl JointAngles {
    /// Every joint at zero. Distinct from [`JointAngles::DEFAULT`]: applying
    /// `ZERO` leaves a retargeted model exactly in its bind pose.
    pub const ZERO: JointAngles = JointAngles {
        torso: 0.0,
        neck_yaw: 0.0,
        neck_pitch: 0.0,
        left_shoulder_pitch: 0.0,
        left_shoulder_yaw: 0.0,
        left_elbow: 0.0,
        left_wrist: 0.0,
        left_grip: 0.0,
        right_shoulder_pitch: 0.0,
        right_shoulder_yaw: 0.0,
        right_elbow: 0.0,
        right_wrist: 0.0,
        right_grip: 0.0,
        left_hip_pitch: 0.0,
        left_hip_yaw: 0.0,
        left_knee: 0.0,
        left_ankle: 0.0,
        right_hip_pitch: 0.0,
        right_hip_yaw: 0.0,
        right_knee: 0.0,
        right_ankle: 0.0,
    };

    /// The default T-pose: arms spread horizontally, everything else neutral.
    pub const DEFAULT: JointAngles = JointAngles {
        left_shoulder_yaw: 90.0,
        right_shoulder_yaw: -90.0,
        ..JointAngles::ZERO
    };

    #[must_use]
    pub fn get(&self, key: JointKey) -> f32 {
        match key {
            JointKey::Torso => self.torso,
            JointKey::NeckYaw => self.neck_yaw,
            JointKey::NeckPitch => self.neck_pitch,
            JointKey::LeftShoulderPitch => self.left_shoulder_pitch,
            JointKey::LeftShoulderYaw => self.left_shoulder_yaw,
            JointKey::LeftElbow => self.left_elbow,
            JointKey::LeftWrist => self.left_wrist,
            JointKey::LeftGrip => self.left_grip,
            JointKey::RightShoulderPitch => self.right_shoulder_pitch,
            JointKey::RightShoulderYaw => self.right_shoulder_yaw,
            JointKey::RightElbow => self.right_elbow,
            JointKey::RightWrist => self.right_wrist,
            JointKey::RightGrip => self.right_grip,
            JointKey::LeftHipPitch => self.left_hip_pitch,
            JointKey::LeftHipYaw => self.left_hip_yaw,
            JointKey::LeftKnee => self.left_knee,
            JointKey::LeftAnkle => self.left_ankle,
            JointKey::RightHipPitch => self.right_hip_pitch,
            JointKey::RightHipYaw => self.right_hip_yaw,
            JointKey::RightKnee => self.right_knee,
            JointKey::RightAnkle => self.right_ankle,
        }
    }

    pub fn set(&mut self, key: JointKey, value: f32) {
        match key {
            JointKey::Torso => self.torso = value,
            JointKey::NeckYaw => self.neck_yaw = value,
            JointKey::NeckPitch => self.neck_pitch = value,
            JointKey::LeftShoulderPitch => self.left_shoulder_pitch = value,
            JointKey::LeftShoulderYaw => self.left_shoulder_yaw = value,
            JointKey::LeftElbow => self.left_elbow = value,
            JointKey::LeftWrist => self.left_wrist = value,
            JointKey::LeftGrip => self.left_grip = value,
            JointKey::RightShoulderPitch => self.right_shoulder_pitch = value,
            JointKey::RightShoulderYaw => self.right_shoulder_yaw = value,
            JointKey::RightElbow => self.right_elbow = value,
            JointKey::RightWrist => self.right_wrist = value,
            JointKey::RightGrip => self.right_grip = value,
            JointKey::LeftHipPitch => self.left_hip_pitch = value,
            JointKey::LeftHipYaw => self.left_hip_yaw = value,
            JointKey::LeftKnee => self.left_knee = value,
            JointKey::LeftAnkle => self.left_ankle = value,
            JointKey::RightHipPitch => self.right_hip_pitch = value,
            JointKey::RightHipYaw => self.right_hip_yaw = value,
            JointKey::RightKnee => self.right_knee = value,
            JointKey::RightAnkle => self.right_ankle = value,
        }
    }

    /// Returns a copy with one joint changed. The building block for
    /// sequencer targets ("current pose, but with this joint at X").
    #[must_use]
    pub fn with(mut self, key: JointKey, value: f32) -> JointAngles {
        self.set(key, value);
        self
    }
}

impl Default for JointAngles {
    fn default() -> Self {
        JointAngles::DEFAULT
    }
}
