//! Simulator facade tests.
//!
//! Tests for:
//! - model attach / load-failure states
//! - the per-frame drive path (sequencer → pose applier → world matrices)
//! - override lifetime across model changes
//! - glTF hierarchy import

use marionette::rig::{JointKey, PresetPose};
use marionette::scene::{Node, NodeHandle, NodeKind, Scene};
use marionette::simulator::{ModelState, Simulator};
use marionette::motion::WalkDirection;

fn schema_rig() -> (Scene, NodeHandle) {
    let mut scene = Scene::new();
    let root = scene.create_node_with_name("TestRig");
    for key in JointKey::ALL {
        scene.add_to_parent(Node::new(key.as_str()).with_kind(NodeKind::Bone), root);
    }
    (scene, root)
}

// ============================================================================
// Model lifecycle
// ============================================================================

#[test]
fn attach_model_resolves_all_joints() {
    let mut sim = Simulator::new();
    assert_eq!(sim.model_state(), ModelState::Empty);
    assert_eq!(sim.mapped_joint_count(), 0);

    let (scene, root) = schema_rig();
    sim.attach_model(scene, root, "test");

    assert_eq!(sim.model_state(), ModelState::Loaded);
    assert_eq!(sim.model_name(), Some("test"));
    assert_eq!(sim.mapped_joint_count(), 22);
    assert_eq!(sim.node_names().len(), 22);
}

#[test]
fn load_failure_is_reported_once_and_cleanly() {
    let mut sim = Simulator::new();
    sim.set_load_failure("unreachable model file");

    assert_eq!(sim.model_state(), ModelState::Failed);
    assert_eq!(sim.load_error(), Some("unreachable model file"));
    assert_eq!(sim.mapped_joint_count(), 0);
    assert!(sim.node_names().is_empty());
    assert!(sim.scene().is_none(), "no partial scene graph is exposed");

    // The core still runs; it just has nothing to pose.
    sim.sequencer_mut().wait(0.1).unwrap();
    let outcomes = sim.advance(0.2);
    assert_eq!(outcomes.len(), 1);
}

#[test]
fn overrides_do_not_leak_across_models() {
    let mut sim = Simulator::new();
    let (scene_a, root_a) = schema_rig();
    sim.attach_model(scene_a, root_a, "model-a");
    sim.set_bone_override(JointKey::Torso, "neckYaw").unwrap();
    assert_eq!(sim.overrides().unwrap().len(), 1);

    // Loading another model (even with identical node names) must start
    // from a clean override table.
    let (scene_b, root_b) = schema_rig();
    sim.attach_model(scene_b, root_b, "model-b");
    assert!(sim.overrides().unwrap().is_empty());
}

#[test]
fn override_without_model_is_an_error() {
    let mut sim = Simulator::new();
    let err = sim.set_bone_override(JointKey::Torso, "x").unwrap_err();
    assert!(matches!(err, marionette::MarionetteError::NoModel));
}

// ============================================================================
// Frame drive path
// ============================================================================

#[test]
fn advance_writes_joint_rotations_into_the_scene() {
    let mut sim = Simulator::new();
    let (scene, root) = schema_rig();
    sim.attach_model(scene, root, "test");

    sim.sequencer_mut().rotate_joint(JointKey::Torso, 45.0).unwrap();
    let outcomes = sim.advance(1.0);
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].result.is_ok());

    let scene = sim.scene().unwrap();
    let torso = scene.find_node_by_name(scene.root_nodes[0], "torso").unwrap();
    let euler = scene.get_node(torso).unwrap().transform.rotation_euler();
    // Torso drives Y; bind rotation was identity.
    assert!((euler.y - 45.0_f32.to_radians()).abs() < 1e-4, "got {euler:?}");
}

#[test]
fn walk_moves_the_rig_root_and_world_matrices() {
    let mut sim = Simulator::new();
    let (scene, root) = schema_rig();
    sim.attach_model(scene, root, "test");

    sim.sequencer_mut().walk(WalkDirection::Forward, 0.5).unwrap();
    let mut finished = false;
    for _ in 0..40 {
        if !sim.advance(0.05).is_empty() {
            finished = true;
            break;
        }
    }
    assert!(finished, "walk should complete");
    assert_eq!(sim.position().z, -0.5);

    let scene = sim.scene().unwrap();
    let root_node = scene.get_node(root).unwrap();
    assert_eq!(root_node.transform.position.z, -0.5);
    // World matrices were refreshed after the position write.
    assert_eq!(root_node.world_matrix().translation.z, -0.5);
}

#[test]
fn empty_model_advance_is_a_no_op_frame() {
    let mut sim = Simulator::new();
    sim.sequencer_mut().apply_preset(PresetPose::Wave).unwrap();
    let outcomes = sim.advance(1.0);
    assert_eq!(outcomes.len(), 1, "motion still runs without a model");
    assert_eq!(sim.pose(), PresetPose::Wave.angles());
}

#[test]
fn stop_and_reset_flow_through_the_facade() {
    let mut sim = Simulator::new();
    sim.sequencer_mut().wait(5.0).unwrap();
    sim.advance(0.1);

    sim.stop();
    let outcomes = sim.advance(0.0);
    assert!(outcomes[0].result.as_ref().unwrap_err().is_cancelled());
    assert!(sim.sequencer_mut().wait(1.0).is_err());

    sim.reset_run();
    assert!(sim.sequencer_mut().wait(0.05).is_ok());
}

// ============================================================================
// Mapping records through the facade
// ============================================================================

#[test]
fn mapping_record_export_and_apply() {
    let mut sim = Simulator::new();
    let (scene, root) = schema_rig();
    sim.attach_model(scene, root, "robo");
    sim.set_bone_override(JointKey::LeftElbow, "leftWrist").unwrap();

    let record = sim.export_mapping_record(Some(2.0), None).unwrap();
    assert_eq!(record.model_name, "robo");
    assert_eq!(record.mappings.get(&JointKey::LeftElbow).unwrap(), "leftWrist");

    // Fresh load of the same model: applying the stored record restores the
    // manual mapping.
    let (scene, root) = schema_rig();
    sim.attach_model(scene, root, "robo");
    assert!(sim.overrides().unwrap().is_empty());
    sim.apply_mapping_record(&record).unwrap();
    let map = sim.bone_map().unwrap();
    assert_eq!(map.get(JointKey::LeftElbow).unwrap().node_name, "leftWrist");
}

#[test]
fn mapping_record_for_other_model_is_rejected() {
    let mut sim = Simulator::new();
    let (scene, root) = schema_rig();
    sim.attach_model(scene, root, "robo");

    let record = marionette::retarget::MappingRecord {
        model_name: "other".to_string(),
        mappings: Default::default(),
        scale: None,
        timestamp: None,
    };
    assert!(sim.apply_mapping_record(&record).is_err());
}

// ============================================================================
// glTF import
// ============================================================================

#[cfg(feature = "gltf")]
mod gltf_import {
    use super::*;

    /// Minimal rigged document: an armature with a three-bone chain
    /// declared as skin joints.
    const RIGGED_GLTF: &str = r#"{
        "asset": {"version": "2.0"},
        "scene": 0,
        "scenes": [{"nodes": [0]}],
        "nodes": [
            {"name": "Armature", "children": [1]},
            {"name": "mixamorigSpine", "children": [2], "translation": [0, 1, 0]},
            {"name": "mixamorigNeck", "children": [3]},
            {"name": "mixamorigHead"}
        ],
        "skins": [{"joints": [1, 2, 3]}]
    }"#;

    #[test]
    fn import_builds_hierarchy_and_marks_bones() {
        let import = marionette::assets::import_slice(RIGGED_GLTF.as_bytes(), "michelle").unwrap();
        assert_eq!(import.bone_count, 3);
        assert_eq!(import.skin_count, 1);

        let scene = &import.scene;
        let spine = scene.find_node_by_name(import.root, "mixamorigSpine").unwrap();
        assert_eq!(scene.get_node(spine).unwrap().kind, NodeKind::Bone);
        assert_eq!(scene.get_node(spine).unwrap().transform.position.y, 1.0);

        let neck = scene.find_node_by_name(import.root, "mixamorigNeck").unwrap();
        assert_eq!(scene.get_node(neck).unwrap().parent(), Some(spine));
    }

    #[test]
    fn imported_model_resolves_through_the_simulator() {
        let mut sim = Simulator::new();
        sim.load_gltf_slice(RIGGED_GLTF.as_bytes(), "michelle").unwrap();

        assert_eq!(sim.model_state(), ModelState::Loaded);
        // torso → mixamorigSpine, neckYaw → mixamorigNeck,
        // neckPitch → mixamorigHead; nothing else matches this rig.
        assert_eq!(sim.mapped_joint_count(), 3);

        let map = sim.bone_map().unwrap();
        assert_eq!(map.get(JointKey::Torso).unwrap().node_name, "mixamorigSpine");
        assert_eq!(map.get(JointKey::NeckYaw).unwrap().node_name, "mixamorigNeck");
        assert_eq!(map.get(JointKey::NeckPitch).unwrap().node_name, "mixamorigHead");

        // The armature container is not offered as a mapping candidate.
        assert!(!sim.node_names().iter().any(|n| n == "Armature"));
    }

    #[test]
    fn malformed_bytes_fail_into_the_failed_state() {
        let mut sim = Simulator::new();
        let err = sim.load_gltf_slice(b"definitely not gltf", "junk").unwrap_err();
        assert!(!err.is_cancelled());
        assert_eq!(sim.model_state(), ModelState::Failed);
        assert!(sim.load_error().is_some());
        assert_eq!(sim.mapped_joint_count(), 0);
    }
}
