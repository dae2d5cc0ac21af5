//! Rig-convention alias table.
//!
//! For each joint, an ordered list of candidate node-name patterns: the
//! joint's own schema name first, then names seen in common rigging
//! conventions (Mixamo, Blender `.L`/`.R` suffixes, underscore styles, VRM
//! upper/lower naming). Order matters: the resolver exhausts the whole
//! list with exact matching before it retries with substring matching.

use crate::rig::JointKey;

/// Candidate name patterns for one joint, in resolution priority order.
#[must_use]
pub fn alias_patterns(joint: JointKey) -> &'static [&'static str] {
    match joint {
        JointKey::Torso => &[
            "torso",
            "Spine",
            "spine",
            "Spine1",
            "spine1",
            "mixamorigSpine",
            "Torso",
            "Chest",
            "chest",
        ],
        JointKey::NeckYaw => &["neckYaw", "Neck", "neck", "mixamorigNeck", "Head", "head"],
        JointKey::NeckPitch => &["neckPitch", "Head", "head", "mixamorigHead"],
        JointKey::LeftShoulderPitch => &[
            "leftShoulderPitch",
            "LeftArm",
            "LeftShoulder",
            "mixamorigLeftArm",
            "Left_Arm",
            "L_Arm",
            "Arm.L",
            "shoulder.L",
            "LeftUpperArm",
        ],
        JointKey::LeftShoulderYaw => &[
            "leftShoulderYaw",
            "LeftArm",
            "LeftShoulder",
            "mixamorigLeftShoulder",
            "Left_Shoulder",
            "L_Shoulder",
        ],
        JointKey::LeftElbow => &[
            "leftElbow",
            "LeftForeArm",
            "LeftElbow",
            "mixamorigLeftForeArm",
            "Left_ForeArm",
            "L_ForeArm",
            "forearm.L",
            "LeftLowerArm",
        ],
        JointKey::LeftWrist => &[
            "leftWrist",
            "LeftHand",
            "LeftWrist",
            "mixamorigLeftHand",
            "Left_Hand",
            "L_Hand",
            "hand.L",
        ],
        JointKey::LeftGrip => &[
            "leftGrip",
            "LeftHandIndex1",
            "LeftHandThumb1",
            "mixamorigLeftHandIndex1",
            "Left_Finger",
            "L_Finger",
        ],
        JointKey::RightShoulderPitch => &[
            "rightShoulderPitch",
            "RightArm",
            "RightShoulder",
            "mixamorigRightArm",
            "Right_Arm",
            "R_Arm",
            "Arm.R",
            "shoulder.R",
            "RightUpperArm",
        ],
        JointKey::RightShoulderYaw => &[
            "rightShoulderYaw",
            "RightArm",
            "RightShoulder",
            "mixamorigRightShoulder",
            "Right_Shoulder",
            "R_Shoulder",
        ],
        JointKey::RightElbow => &[
            "rightElbow",
            "RightForeArm",
            "RightElbow",
            "mixamorigRightForeArm",
            "Right_ForeArm",
            "R_ForeArm",
            "forearm.R",
            "RightLowerArm",
        ],
        JointKey::RightWrist => &[
            "rightWrist",
            "RightHand",
            "RightWrist",
            "mixamorigRightHand",
            "Right_Hand",
            "R_Hand",
            "hand.R",
        ],
        JointKey::RightGrip => &[
            "rightGrip",
            "RightHandIndex1",
            "RightHandThumb1",
            "mixamorigRightHandIndex1",
            "Right_Finger",
            "R_Finger",
        ],
        JointKey::LeftHipPitch => &[
            "leftHipPitch",
            "LeftUpLeg",
            "LeftHip",
            "mixamorigLeftUpLeg",
            "Left_UpLeg",
            "L_UpLeg",
            "thigh.L",
            "LeftUpperLeg",
        ],
        JointKey::LeftHipYaw => &[
            "leftHipYaw",
            "LeftUpLeg",
            "LeftHip",
            "mixamorigLeftUpLeg",
            "Left_Hip",
            "L_Hip",
        ],
        JointKey::LeftKnee => &[
            "leftKnee",
            "LeftLeg",
            "LeftKnee",
            "mixamorigLeftLeg",
            "Left_Leg",
            "L_Leg",
            "shin.L",
            "LeftLowerLeg",
        ],
        JointKey::LeftAnkle => &[
            "leftAnkle",
            "LeftFoot",
            "LeftAnkle",
            "mixamorigLeftFoot",
            "Left_Foot",
            "L_Foot",
            "foot.L",
        ],
        JointKey::RightHipPitch => &[
            "rightHipPitch",
            "RightUpLeg",
            "RightHip",
            "mixamorigRightUpLeg",
            "Right_UpLeg",
            "R_UpLeg",
            "thigh.R",
            "RightUpperLeg",
        ],
        JointKey::RightHipYaw => &[
            "rightHipYaw",
            "RightUpLeg",
            "RightHip",
            "mixamorigRightUpLeg",
            "Right_Hip",
            "R_Hip",
        ],
        JointKey::RightKnee => &[
            "rightKnee",
            "RightLeg",
            "RightKnee",
            "mixamorigRightLeg",
            "Right_Leg",
            "R_Leg",
            "shin.R",
            "RightLowerLeg",
        ],
        JointKey::RightAnkle => &[
            "rightAnkle",
            "RightFoot",
            "RightAnkle",
            "mixamorigRightFoot",
            "Right_Foot",
            "R_Foot",
            "foot.R",
        ],
    }
}
