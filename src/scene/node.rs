use crate::scene::transform::Transform;
use crate::scene::{NodeHandle, SkeletonKey};
use glam::Affine3A;

/// What a scene node is, as far as retargeting cares.
///
/// Uploaded assets vary widely: properly skinned rigs have true bones, some
/// models animate plain transform hierarchies instead. The discovery tiers
/// in `retarget` key off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A skeletal bone capable of deforming a skinned mesh.
    Bone,
    /// A node carrying mesh geometry.
    Mesh,
    /// Any other transform node.
    Plain,
}

/// A named scene node.
///
/// Nodes form a tree through parent/child handles. Prefer [`super::Scene`]'s
/// `attach`/`add_to_parent` which keep both sides of the relationship in
/// sync; the low-level setters exist for hierarchy construction in loaders.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    /// Transform component (hot data, touched every frame).
    pub transform: Transform,

    /// For mesh nodes: the skeleton this mesh is skinned to, if any.
    pub skin: Option<SkeletonKey>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NodeKind::Plain,
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            skin: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    #[inline]
    #[must_use]
    pub fn is_bone(&self) -> bool {
        self.kind == NodeKind::Bone
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    pub fn set_parent(&mut self, parent: Option<NodeHandle>) {
        self.parent = parent;
    }

    #[inline]
    pub fn push_child(&mut self, child: NodeHandle) {
        self.children.push(child);
    }

    /// The world matrix as of the last hierarchy update.
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
