//! Scene graph.
//!
//! The minimal hierarchy the retargeting core operates on:
//! - [`Node`]: named scene node with parent/child links and a [`Transform`]
//! - [`Transform`]: TRS component with cached local/world matrices
//! - [`Skeleton`]: ordered bone list referenced by skinned meshes
//! - [`Scene`]: node storage and hierarchy operations
//! - `transform_system`: decoupled world-matrix propagation

pub mod node;
pub mod scene;
pub mod skeleton;
pub mod transform;
pub mod transform_system;

pub use node::{Node, NodeKind};
pub use scene::Scene;
pub use skeleton::Skeleton;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct SkeletonKey;
}
