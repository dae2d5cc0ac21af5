//! Simulator facade.
//!
//! Wires the core together for a host: the loaded-model slot, the motion
//! sequencer, bone mapping with manual overrides, and the per-frame drive
//! path. The host's render loop calls [`Simulator::tick`] (wall clock) or
//! [`Simulator::advance`] (explicit delta) once per frame and draws the
//! posed scene afterwards.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::errors::{MarionetteError, Result};
use crate::motion::{CompletedCommand, MotionSequencer};
use crate::retarget::{
    BoneMap, BoneResolver, MappingOverrides, MappingRecord, PoseApplier, SkeletonIndex,
};
use crate::rig::{JointAngles, JointKey};
use crate::scene::{NodeHandle, Scene};
use crate::utils::Timer;

/// Coarse model-slot state for host UIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// No model attached; the pose applier idles.
    Empty,
    /// The last load attempt failed; see [`Simulator::load_error`].
    Failed,
    Loaded,
}

struct LoadedRig {
    scene: Scene,
    root: NodeHandle,
    model_name: String,
    index: SkeletonIndex,
    map: BoneMap,
    /// Manual joint-to-node-name overrides. Lives and dies with this model.
    overrides: MappingOverrides,
    /// Bind-pose baselines per node, captured at first discovery and reused
    /// across every re-resolution for this model.
    baselines: FxHashMap<NodeHandle, Vec3>,
}

impl LoadedRig {
    fn reresolve(&mut self) {
        self.map =
            BoneResolver::resolve_all(&self.scene, &self.index, &self.overrides, &mut self.baselines);
    }
}

enum Slot {
    Empty,
    Failed(String),
    Loaded(Box<LoadedRig>),
}

/// The top-level handle a host embeds.
pub struct Simulator {
    slot: Slot,
    sequencer: MotionSequencer,
    timer: Timer,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Slot::Empty,
            sequencer: MotionSequencer::new(),
            timer: Timer::new(),
        }
    }

    // ========================================================================
    // Model lifecycle
    // ========================================================================

    /// Attaches an already-loaded scene graph as the current model.
    ///
    /// Runs node discovery and bone resolution once. Any overrides and
    /// baselines from a previous model are discarded; override names must
    /// never leak onto a different model that happens to reuse them.
    pub fn attach_model(&mut self, scene: Scene, root: NodeHandle, model_name: &str) {
        let index = SkeletonIndex::build(&scene, root);
        log::info!(
            "model {model_name:?}: {} candidate nodes, has_bones={}",
            index.entries().len(),
            index.has_bones()
        );

        let mut rig = LoadedRig {
            scene,
            root,
            model_name: model_name.to_string(),
            index,
            map: BoneMap::default(),
            overrides: MappingOverrides::default(),
            baselines: FxHashMap::default(),
        };
        rig.reresolve();
        self.slot = Slot::Loaded(Box::new(rig));
    }

    /// Imports a glTF/GLB model and attaches it.
    ///
    /// On failure the slot moves to the failed state and no partial scene
    /// graph is exposed.
    #[cfg(feature = "gltf")]
    pub fn load_gltf_slice(&mut self, bytes: &[u8], model_name: &str) -> Result<()> {
        match crate::assets::import_slice(bytes, model_name) {
            Ok(import) => {
                self.attach_model(import.scene, import.root, model_name);
                Ok(())
            }
            Err(err) => {
                self.slot = Slot::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Imports a glTF/GLB file and attaches it; the file stem becomes the
    /// model name.
    #[cfg(feature = "gltf")]
    pub fn load_gltf_path(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        match crate::assets::import_path(path) {
            Ok(import) => {
                let name = import
                    .scene
                    .get_node(import.root)
                    .map_or_else(|| "model".to_string(), |n| n.name.clone());
                self.attach_model(import.scene, import.root, &name);
                Ok(())
            }
            Err(err) => {
                self.slot = Slot::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Records a load failure reported by an external asset loader.
    pub fn set_load_failure(&mut self, message: &str) {
        self.slot = Slot::Failed(message.to_string());
    }

    pub fn clear_model(&mut self) {
        self.slot = Slot::Empty;
    }

    #[must_use]
    pub fn model_state(&self) -> ModelState {
        match self.slot {
            Slot::Empty => ModelState::Empty,
            Slot::Failed(_) => ModelState::Failed,
            Slot::Loaded(_) => ModelState::Loaded,
        }
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        match &self.slot {
            Slot::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    #[must_use]
    pub fn model_name(&self) -> Option<&str> {
        self.rig().map(|r| r.model_name.as_str())
    }

    // ========================================================================
    // Mapping introspection and overrides
    // ========================================================================

    /// How many of the 22 joints resolved on the current model.
    ///
    /// Informational, never a blocking error: a partially rigged model still
    /// operates with the joints it has.
    #[must_use]
    pub fn mapped_joint_count(&self) -> usize {
        self.rig().map_or(0, |r| r.map.len())
    }

    /// The discovered node names of the current model.
    #[must_use]
    pub fn node_names(&self) -> &[String] {
        match self.rig() {
            Some(rig) => rig.index.node_names(),
            None => &[],
        }
    }

    #[must_use]
    pub fn bone_map(&self) -> Option<&BoneMap> {
        self.rig().map(|r| &r.map)
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.rig().map(|r| &r.scene)
    }

    #[must_use]
    pub fn overrides(&self) -> Option<&MappingOverrides> {
        self.rig().map(|r| &r.overrides)
    }

    /// Maps `joint` to the node named `node_name`, then re-resolves.
    ///
    /// Manual mapping wins over automatic resolution. If the name does not
    /// exist in this model the joint falls back to automatic resolution
    /// (with a warning) rather than failing.
    pub fn set_bone_override(&mut self, joint: JointKey, node_name: &str) -> Result<()> {
        let rig = self.rig_mut()?;
        rig.overrides.insert(joint, node_name.to_string());
        rig.reresolve();
        Ok(())
    }

    pub fn clear_bone_override(&mut self, joint: JointKey) -> Result<()> {
        let rig = self.rig_mut()?;
        rig.overrides.remove(&joint);
        rig.reresolve();
        Ok(())
    }

    pub fn clear_bone_overrides(&mut self) -> Result<()> {
        let rig = self.rig_mut()?;
        rig.overrides.clear();
        rig.reresolve();
        Ok(())
    }

    /// The current overrides as a persistable record keyed by model name.
    pub fn export_mapping_record(
        &self,
        scale: Option<f32>,
        timestamp: Option<u64>,
    ) -> Result<MappingRecord> {
        let rig = self.rig().ok_or(MarionetteError::NoModel)?;
        Ok(MappingRecord {
            model_name: rig.model_name.clone(),
            mappings: rig.overrides.clone(),
            scale,
            timestamp,
        })
    }

    /// Applies a stored mapping record to the current model.
    pub fn apply_mapping_record(&mut self, record: &MappingRecord) -> Result<()> {
        let rig = self.rig_mut()?;
        if record.model_name != rig.model_name {
            return Err(MarionetteError::InvalidCommand(format!(
                "mapping record is for model {:?}, loaded model is {:?}",
                record.model_name, rig.model_name
            )));
        }
        rig.overrides = record.mappings.clone();
        rig.reresolve();
        Ok(())
    }

    // ========================================================================
    // Frame drive
    // ========================================================================

    /// Advances one frame using wall-clock time.
    pub fn tick(&mut self) -> Vec<CompletedCommand> {
        self.timer.tick();
        let dt = self.timer.dt_seconds();
        self.advance(dt)
    }

    /// Advances one frame by an explicit delta (seconds): sequencer update,
    /// rig-root position write, pose application, world-matrix refresh.
    pub fn advance(&mut self, dt: f32) -> Vec<CompletedCommand> {
        let outcomes = self.sequencer.update(dt);

        if let Slot::Loaded(rig) = &mut self.slot {
            if let Some(node) = rig.scene.get_node_mut(rig.root) {
                node.transform.position = self.sequencer.position();
            }
            let pose = self.sequencer.pose();
            PoseApplier::apply(&mut rig.scene, &rig.map, &pose);
        }

        outcomes
    }

    // ========================================================================
    // Sequencer access
    // ========================================================================

    #[must_use]
    pub fn sequencer(&self) -> &MotionSequencer {
        &self.sequencer
    }

    pub fn sequencer_mut(&mut self) -> &mut MotionSequencer {
        &mut self.sequencer
    }

    /// The latest published joint vector (what the renderer should draw).
    #[must_use]
    pub fn pose(&self) -> JointAngles {
        self.sequencer.pose()
    }

    /// The latest published rig position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.sequencer.position()
    }

    pub fn stop(&mut self) {
        self.sequencer.stop();
    }

    pub fn pause(&mut self) {
        self.sequencer.pause();
    }

    pub fn resume(&mut self) {
        self.sequencer.resume();
    }

    /// Clears a stop so a new program can run.
    pub fn reset_run(&mut self) {
        self.sequencer.reset();
    }

    fn rig(&self) -> Option<&LoadedRig> {
        match &self.slot {
            Slot::Loaded(rig) => Some(rig),
            _ => None,
        }
    }

    fn rig_mut(&mut self) -> Result<&mut LoadedRig> {
        match &mut self.slot {
            Slot::Loaded(rig) => Ok(rig),
            _ => Err(MarionetteError::NoModel),
        }
    }
}
