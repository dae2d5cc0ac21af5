use rustc_hash::FxHashSet;

use crate::scene::{NodeHandle, NodeKind, Scene};

/// Names of generic root/container nodes that carry no retargeting
/// information and are excluded from discovery.
pub const GENERIC_CONTAINER_NAMES: &[&str] = &["Scene", "Root", "RootNode", "Armature", "AuxScene"];

/// Which discovery tier an entry came from. Search priority is the
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IndexTier {
    /// A true skeletal bone found by subtree traversal.
    Bone,
    /// A bone reachable only through a skinned mesh's skeleton reference.
    SkinBone,
    /// A named non-mesh transform node (fallback for unrigged models).
    Named,
}

/// One discovered node.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub name: String,
    pub node: NodeHandle,
    pub tier: IndexTier,
}

/// The nameable skeletal nodes of one loaded model.
///
/// Built once per model load (or mapping edit). Holds two views of the same
/// traversal:
/// - [`SkeletonIndex::entries`]: every candidate node in resolver search
///   order (bones, then skeleton-referenced bones, then named nodes)
/// - [`SkeletonIndex::node_names`]: the user-facing name list with graceful
///   degradation: bone names when the model has any bones, otherwise named
///   non-leaf nodes, otherwise every named node
#[derive(Debug, Default)]
pub struct SkeletonIndex {
    entries: Vec<IndexEntry>,
    names: Vec<String>,
    bone_count: usize,
}

fn is_generic_container(name: &str) -> bool {
    GENERIC_CONTAINER_NAMES
        .iter()
        .any(|g| g.eq_ignore_ascii_case(name))
}

fn is_usable_name(name: &str) -> bool {
    !name.is_empty() && !is_generic_container(name)
}

impl SkeletonIndex {
    /// Walks the subtree of `root` and builds the index.
    #[must_use]
    pub fn build(scene: &Scene, root: NodeHandle) -> Self {
        let mut entries = Vec::new();
        let mut seen = FxHashSet::default();

        // Tier 1: true bones in the subtree.
        scene.visit_subtree(root, |handle, node| {
            if node.is_bone() && is_usable_name(&node.name) && seen.insert(node.name.clone()) {
                entries.push(IndexEntry {
                    name: node.name.clone(),
                    node: handle,
                    tier: IndexTier::Bone,
                });
            }
        });

        // Tier 2: bones reachable only via a skinned mesh's skeleton
        // reference. Such bones need not be subtree descendants at all.
        scene.visit_subtree(root, |_, node| {
            let Some(skin) = node.skin.and_then(|k| scene.skeletons.get(k)) else {
                return;
            };
            for &bone_handle in &skin.bones {
                let Some(bone) = scene.get_node(bone_handle) else {
                    continue;
                };
                if is_usable_name(&bone.name) && seen.insert(bone.name.clone()) {
                    entries.push(IndexEntry {
                        name: bone.name.clone(),
                        node: bone_handle,
                        tier: IndexTier::SkinBone,
                    });
                }
            }
        });

        let bone_count = entries.len();

        // Tier 3: named non-mesh nodes, always part of the resolver's search
        // list so unrigged models (plain parented hierarchies) still retarget.
        scene.visit_subtree(root, |handle, node| {
            if node.kind != NodeKind::Mesh
                && is_usable_name(&node.name)
                && seen.insert(node.name.clone())
            {
                entries.push(IndexEntry {
                    name: node.name.clone(),
                    node: handle,
                    tier: IndexTier::Named,
                });
            }
        });

        let names = Self::collect_names(scene, root, &entries, bone_count);

        if bone_count == 0 {
            log::info!(
                "model has no skeleton; falling back to {} named transform nodes",
                names.len()
            );
        }

        Self {
            entries,
            names,
            bone_count,
        }
    }

    /// Graceful degradation for the displayed name list.
    fn collect_names(
        scene: &Scene,
        root: NodeHandle,
        entries: &[IndexEntry],
        bone_count: usize,
    ) -> Vec<String> {
        // (1)+(2): the model has bones, so list exactly those.
        if bone_count > 0 {
            return entries[..bone_count].iter().map(|e| e.name.clone()).collect();
        }

        // (3): no bones at all; fall back to named nodes that have children.
        let mut names = Vec::new();
        let mut seen = FxHashSet::default();
        scene.visit_subtree(root, |_, node| {
            if !node.children().is_empty()
                && is_usable_name(&node.name)
                && seen.insert(node.name.clone())
            {
                names.push(node.name.clone());
            }
        });
        if !names.is_empty() {
            return names;
        }

        // (4): still empty; fall back to every named node whatsoever.
        scene.visit_subtree(root, |_, node| {
            if is_usable_name(&node.name) && seen.insert(node.name.clone()) {
                names.push(node.name.clone());
            }
        });
        names
    }

    /// All candidate nodes in resolver search order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Unique, non-empty node names for display, per the degradation tiers.
    #[inline]
    #[must_use]
    pub fn node_names(&self) -> &[String] {
        &self.names
    }

    /// Whether the model has any true bones (directly or skin-referenced).
    #[inline]
    #[must_use]
    pub fn has_bones(&self) -> bool {
        self.bone_count > 0
    }

    /// Exact-name lookup across every tier, used for manual overrides.
    #[must_use]
    pub fn find_exact(&self, name: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
