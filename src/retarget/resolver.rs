use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::Result;
use crate::retarget::aliases::alias_patterns;
use crate::retarget::index::SkeletonIndex;
use crate::rig::JointKey;
use crate::scene::{NodeHandle, Scene};

/// Two-pass name resolution.
///
/// Pass 1 tries every pattern as an exact match; pass 2 retries with
/// case-insensitive substring matching only if pass 1 found nothing. Rigs
/// routinely contain bones whose names are substrings of each other
/// ("LeftArm" vs "LeftForeArm"), so exact matching must be exhausted before
/// any substring matching runs.
///
/// Pure over the name list so it is testable without any scene graph.
/// Returns the index of the winning name.
#[must_use]
pub fn resolve_name(names: &[&str], patterns: &[&str]) -> Option<usize> {
    for pattern in patterns {
        if let Some(i) = names.iter().position(|n| n == pattern) {
            return Some(i);
        }
    }

    for pattern in patterns {
        let lowered = pattern.to_ascii_lowercase();
        if let Some(i) = names
            .iter()
            .position(|n| n.to_ascii_lowercase().contains(&lowered))
        {
            return Some(i);
        }
    }

    None
}

/// One resolved joint: which node it drives and the node's bind-pose
/// rotation (XYZ Euler, radians) captured at first discovery.
#[derive(Debug, Clone)]
pub struct BoneMapping {
    pub joint: JointKey,
    pub node_name: String,
    pub node: NodeHandle,
    pub bind_rotation: Vec3,
}

/// The resolved mappings of one model: zero to 22 entries.
///
/// Resolution may legitimately fail for some joints on an incomplete rig;
/// an absent joint is simply never animated.
#[derive(Debug, Clone, Default)]
pub struct BoneMap {
    entries: SmallVec<[BoneMapping; 22]>,
}

impl BoneMap {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, joint: JointKey) -> Option<&BoneMapping> {
        self.entries.iter().find(|m| m.joint == joint)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoneMapping> {
        self.entries.iter()
    }
}

/// User-supplied manual mapping: joint key to literal node name.
///
/// Lifetime is tied to one loaded model; the facade resets it whenever a new
/// model is attached so stale names never leak across models.
pub type MappingOverrides = FxHashMap<JointKey, String>;

/// The persisted shape of a custom mapping, keyed by model name.
///
/// Plain serializable data with camelCase keys; storage backends live
/// outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MappingRecord {
    pub model_name: String,
    pub mappings: MappingOverrides,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl MappingRecord {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<MappingRecord> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Maps joint keys onto scene nodes.
pub struct BoneResolver;

impl BoneResolver {
    /// Resolves a single joint against the index.
    ///
    /// A manual override is tried first as an exact-name lookup; manual
    /// mapping always wins over automatic. If the override names a node
    /// that does not exist in this model, automatic resolution runs as if
    /// no override were present.
    #[must_use]
    pub fn resolve(
        index: &SkeletonIndex,
        joint: JointKey,
        override_name: Option<&str>,
    ) -> Option<(NodeHandle, String)> {
        if let Some(name) = override_name {
            if let Some(entry) = index.find_exact(name) {
                return Some((entry.node, entry.name.clone()));
            }
            log::warn!("override for {joint} names unknown node {name:?}; falling back to auto");
        }

        let names: Vec<&str> = index.entries().iter().map(|e| e.name.as_str()).collect();
        let i = resolve_name(&names, alias_patterns(joint))?;
        let entry = &index.entries()[i];
        Some((entry.node, entry.name.clone()))
    }

    /// Resolves all 22 joints and captures bind-pose baselines.
    ///
    /// `baselines` is the per-model baseline cache: a node's bind rotation
    /// is sampled the first time that node appears in any mapping and reused
    /// for every later re-resolution. Re-sampling a node that has already
    /// been posed would corrupt the zero reference, so the cache, not the
    /// node's current rotation, is authoritative for known nodes.
    #[must_use]
    pub fn resolve_all(
        scene: &Scene,
        index: &SkeletonIndex,
        overrides: &MappingOverrides,
        baselines: &mut FxHashMap<NodeHandle, Vec3>,
    ) -> BoneMap {
        let mut entries: SmallVec<[BoneMapping; 22]> = SmallVec::new();

        for joint in JointKey::ALL {
            let override_name = overrides.get(&joint).map(String::as_str);
            let Some((node, node_name)) = Self::resolve(index, joint, override_name) else {
                continue;
            };

            let bind_rotation = *baselines.entry(node).or_insert_with(|| {
                scene
                    .get_node(node)
                    .map_or(Vec3::ZERO, |n| n.transform.rotation_euler())
            });

            entries.push(BoneMapping {
                joint,
                node_name,
                node,
                bind_rotation,
            });
        }

        log::info!(
            "bone mapping: {} of {} joints mapped",
            entries.len(),
            JointKey::COUNT
        );

        BoneMap { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_name;

    #[test]
    fn exact_match_beats_earlier_substring() {
        // "LeftArm" is a substring of "LeftForeArm"; the exact pass must be
        // exhausted across all patterns before any substring matching runs.
        let names = ["LeftForeArm", "LeftArm"];
        let got = resolve_name(&names, &["LeftArm", "LeftShoulder"]);
        assert_eq!(got, Some(1));
    }

    #[test]
    fn substring_fallback_is_case_insensitive() {
        let names = ["mixamorig:LeftForeArm"];
        let got = resolve_name(&names, &["LeftForeArm"]);
        assert_eq!(got, Some(0));
    }

    #[test]
    fn pattern_order_decides_between_exact_candidates() {
        let names = ["LeftShoulder", "LeftArm"];
        let got = resolve_name(&names, &["LeftArm", "LeftShoulder"]);
        assert_eq!(got, Some(1));
    }

    #[test]
    fn no_match_is_none() {
        let names = ["Hips", "Spine"];
        assert_eq!(resolve_name(&names, &["LeftFoot", "foot.L"]), None);
    }
}
