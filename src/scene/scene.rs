use slotmap::SlotMap;

use crate::scene::node::Node;
use crate::scene::skeleton::Skeleton;
use crate::scene::transform_system;
use crate::scene::{NodeHandle, SkeletonKey};

/// Scene graph container.
///
/// Pure data layer: node storage, the root list and the skeleton pool.
/// Rendering-side concerns live entirely in the host.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
    pub skeletons: SlotMap<SkeletonKey, Skeleton>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            skeletons: SlotMap::with_key(),
        }
    }

    /// Adds a node at the root level.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Convenience: create and add an empty named root node.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::new(name))
    }

    /// Adds a node as a child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        if let Some(c) = self.nodes.get_mut(handle) {
            c.parent = Some(parent);
        }

        handle
    }

    /// Re-parents `child` under `parent`, detaching it from its old parent
    /// (or the root list) first.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("cannot attach node to itself");
            return;
        }

        // 1. Detach from old parent / root list.
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == child)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == child) {
            self.root_nodes.remove(i);
        }

        // 2. Attach to new parent.
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        } else {
            log::error!("parent node not found during attach");
            self.root_nodes.push(child);
            return;
        }

        // 3. Update the child.
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    #[inline]
    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    #[inline]
    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    pub fn add_skeleton(&mut self, skeleton: Skeleton) -> SkeletonKey {
        self.skeletons.insert(skeleton)
    }

    /// Depth-first visit of `root` and all its descendants.
    pub fn visit_subtree<F>(&self, root: NodeHandle, mut f: F)
    where
        F: FnMut(NodeHandle, &Node),
    {
        let mut stack = vec![root];
        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            f(handle, node);
            // Reverse keeps visit order equal to child declaration order.
            stack.extend(node.children.iter().rev().copied());
        }
    }

    /// First node named exactly `name` in the subtree of `root`, depth-first.
    #[must_use]
    pub fn find_node_by_name(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        let mut found = None;
        self.visit_subtree(root, |handle, node| {
            if found.is_none() && node.name == name {
                found = Some(handle);
            }
        });
        found
    }

    /// Updates world matrices for the whole scene. Must run after the last
    /// transform write of the frame and before the frame is presented; some
    /// hosts cache world transforms and would otherwise draw stale ones.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy(&mut self.nodes, &self.root_nodes);
    }

    /// Updates world matrices for one subtree only.
    pub fn update_subtree(&mut self, root: NodeHandle) {
        transform_system::update_subtree(&mut self.nodes, root);
    }
}
