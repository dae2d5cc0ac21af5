use crate::scene::NodeHandle;

/// An ordered bone list referenced by a skinned mesh.
///
/// Not every bone is necessarily a scene-graph descendant of the mesh that
/// uses it; the skeleton reference is the only reliable way to reach such
/// bones, which is why node discovery inspects skeletons explicitly.
#[derive(Debug, Clone)]
pub struct Skeleton {
    pub name: String,
    pub bones: Vec<NodeHandle>,
}

impl Skeleton {
    #[must_use]
    pub fn new(name: &str, bones: Vec<NodeHandle>) -> Self {
        Self {
            name: name.to_string(),
            bones,
        }
    }

    /// The root bone (by convention the first joint).
    #[inline]
    #[must_use]
    pub fn root_bone(&self) -> Option<NodeHandle> {
        self.bones.first().copied()
    }
}
