//! Transform system.
//!
//! Hierarchical world-matrix propagation, decoupled from [`Scene`] so it
//! only borrows the node storage. Iterative traversal; deep asset
//! hierarchies must not overflow the stack.
//!
//! [`Scene`]: crate::scene::Scene

use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Updates local and world matrices for every node reachable from `roots`.
///
/// A node's world matrix is recomputed when its own TRS changed or any
/// ancestor's did; unchanged subtrees are skipped via the transform's
/// shadow-state check.
pub fn update_hierarchy(nodes: &mut SlotMap<NodeHandle, Node>, roots: &[NodeHandle]) {
    let mut stack: Vec<(NodeHandle, Affine3A, bool)> = roots
        .iter()
        .map(|&r| (r, Affine3A::IDENTITY, false))
        .collect();

    propagate(nodes, &mut stack);
}

/// Updates matrices for `root` and its descendants only, using the parent's
/// cached world matrix as the starting point.
pub fn update_subtree(nodes: &mut SlotMap<NodeHandle, Node>, root: NodeHandle) {
    let Some(node) = nodes.get(root) else {
        return;
    };
    let parent_world = node
        .parent
        .and_then(|p| nodes.get(p))
        .map_or(Affine3A::IDENTITY, |p| p.transform.world_matrix);

    // Force the whole subtree: the caller asked for it explicitly.
    let mut stack = vec![(root, parent_world, true)];
    propagate(nodes, &mut stack);
}

fn propagate(nodes: &mut SlotMap<NodeHandle, Node>, stack: &mut Vec<(NodeHandle, Affine3A, bool)>) {
    while let Some((handle, parent_world, parent_changed)) = stack.pop() {
        let Some(node) = nodes.get_mut(handle) else {
            continue;
        };

        let local_changed = node.transform.update_local_matrix();
        let changed = local_changed || parent_changed;

        if changed {
            let world = parent_world * node.transform.local_matrix;
            node.transform.set_world_matrix(world);
        }

        let world = node.transform.world_matrix;
        stack.extend(node.children.iter().map(|&c| (c, world, changed)));
    }
}
