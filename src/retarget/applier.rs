use crate::retarget::resolver::BoneMap;
use crate::rig::{JointAngles, RotationAxis};
use crate::scene::Scene;

/// Writes the current joint-angle vector onto the resolved nodes.
///
/// Runs once per rendered frame. Each joint drives exactly one rotation
/// axis: the target local rotation is the node's bind-pose Euler rotation
/// with the configured axis offset by the signed angle delta. The other two
/// axes stay at their bind values, which keeps axis ordering intact instead
/// of accumulating gimbal drift.
pub struct PoseApplier;

impl PoseApplier {
    /// Applies `angles` through `map` and refreshes world matrices.
    ///
    /// With an empty mapping this is an idle no-op frame: no rotations are
    /// written and the model stays in whatever rest pose it loaded with.
    pub fn apply(scene: &mut Scene, map: &BoneMap, angles: &JointAngles) {
        if !map.is_empty() {
            for mapping in map.iter() {
                let spec = mapping.joint.axis_spec();
                let delta = (angles.get(mapping.joint) * spec.sign).to_radians();

                let Some(node) = scene.get_node_mut(mapping.node) else {
                    continue;
                };

                let mut euler = mapping.bind_rotation;
                match spec.axis {
                    RotationAxis::X => euler.x += delta,
                    RotationAxis::Y => euler.y += delta,
                    RotationAxis::Z => euler.z += delta,
                }
                node.transform.set_rotation_euler(euler.x, euler.y, euler.z);
            }
        }

        // World transforms must be recomputed before the frame is presented;
        // hosts that cache them would otherwise draw stale matrices.
        scene.update_matrix_world();
    }
}
