//! glTF hierarchy importer.
//!
//! Builds a [`Scene`] from a `.gltf`/`.glb` byte slice: every document node
//! becomes a named scene node with its decomposed TRS, skin joints are
//! marked as bones, and each glTF skin becomes a [`Skeleton`] referenced by
//! its skinned mesh node. Buffers are never read; nothing here needs
//! vertex data.

use std::path::Path;

use glam::{Quat, Vec3};
use rustc_hash::FxHashSet;

use crate::errors::Result;
use crate::scene::{Node, NodeHandle, NodeKind, Scene, Skeleton};

/// Result of a hierarchy import.
pub struct GltfImport {
    pub scene: Scene,
    /// The synthetic root every document-scene node hangs off.
    pub root: NodeHandle,
    pub node_count: usize,
    pub bone_count: usize,
    pub skin_count: usize,
}

/// Imports the node/skin hierarchy from glTF or GLB bytes.
///
/// `name` becomes the synthetic root node's name (conventionally the model
/// name the host displays and keys mapping records by).
pub fn import_slice(bytes: &[u8], name: &str) -> Result<GltfImport> {
    let document = gltf::Gltf::from_slice(bytes)?;

    let mut scene = Scene::new();

    // Which document nodes are skin joints, i.e. true bones.
    let joint_indices: FxHashSet<usize> = document
        .skins()
        .flat_map(|skin| skin.joints().map(|j| j.index()))
        .collect();

    // 1. Shallow pass: one scene node per document node.
    let mut node_map: Vec<NodeHandle> = Vec::with_capacity(document.nodes().count());
    for gltf_node in document.nodes() {
        let node_name = gltf_node
            .name()
            .map_or_else(|| format!("Node_{}", gltf_node.index()), str::to_string);

        let kind = if joint_indices.contains(&gltf_node.index()) {
            NodeKind::Bone
        } else if gltf_node.mesh().is_some() {
            NodeKind::Mesh
        } else {
            NodeKind::Plain
        };

        let mut node = Node::new(&node_name).with_kind(kind);
        let (t, r, s) = gltf_node.transform().decomposed();
        node.transform.position = Vec3::from_array(t);
        node.transform.rotation = Quat::from_array(r);
        node.transform.scale = Vec3::from_array(s);

        node_map.push(scene.add_node(node));
    }

    // 2. Hierarchy pass.
    for gltf_node in document.nodes() {
        let parent = node_map[gltf_node.index()];
        for child in gltf_node.children() {
            scene.attach(node_map[child.index()], parent);
        }
    }

    // 3. Skins become skeletons; skinned mesh nodes keep a reference so
    //    discovery can reach bones that are not subtree descendants.
    let mut skeleton_keys = Vec::with_capacity(document.skins().count());
    for skin in document.skins() {
        let bones: Vec<NodeHandle> = skin.joints().map(|j| node_map[j.index()]).collect();
        let skeleton_name = skin.name().unwrap_or("Skeleton");
        skeleton_keys.push(scene.add_skeleton(Skeleton::new(skeleton_name, bones)));
    }
    for gltf_node in document.nodes() {
        if let (Some(_), Some(skin)) = (gltf_node.mesh(), gltf_node.skin())
            && let Some(node) = scene.get_node_mut(node_map[gltf_node.index()])
        {
            node.skin = Some(skeleton_keys[skin.index()]);
        }
    }

    // 4. Hang the document's default scene off a synthetic named root.
    let root = scene.create_node_with_name(name);
    let doc_scene = document.default_scene().or_else(|| document.scenes().next());
    if let Some(doc_scene) = doc_scene {
        for gltf_node in doc_scene.nodes() {
            scene.attach(node_map[gltf_node.index()], root);
        }
    }

    scene.update_matrix_world();

    let import = GltfImport {
        node_count: node_map.len(),
        bone_count: joint_indices.len(),
        skin_count: skeleton_keys.len(),
        scene,
        root,
    };

    log::info!(
        "imported {name:?}: {} nodes, {} bones, {} skins",
        import.node_count,
        import.bone_count,
        import.skin_count
    );

    Ok(import)
}

/// Imports from a file path; the file stem becomes the model name.
pub fn import_path(path: impl AsRef<Path>) -> Result<GltfImport> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model");
    import_slice(&bytes, name)
}
