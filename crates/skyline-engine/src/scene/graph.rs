use crate::transform::Transform2D;

use super::{Geometry, NodeId, NodeKind, Painter, SceneError, SceneNode};

/// Per-node hook driven by [`Scene::update`].
///
/// The graph has no behavior of its own during an update; whatever changes a
/// node's local transform over time lives in the hook.
pub trait Animate {
    fn animate(&mut self, id: NodeId, local: &mut Transform2D, time: f64);
}

impl<F> Animate for F
where
    F: FnMut(NodeId, &mut Transform2D, f64),
{
    #[inline]
    fn animate(&mut self, id: NodeId, local: &mut Transform2D, time: f64) {
        self(id, local, time)
    }
}

/// Scene under assembly.
///
/// Nodes are appended to an arena and linked with [`add_child`](Self::add_child).
/// Links are not checked for cycles here; [`build`](Self::build) does that once
/// and hands back a [`Scene`] whose structure can no longer change.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    /// Appends a node with an identity local transform.
    ///
    /// # Panics
    /// If the graph already holds `u32::MAX + 1` nodes; handles are 32-bit.
    pub fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let id = next_id(self.nodes.len());
        self.nodes.push(SceneNode::new(kind));
        id
    }

    /// Appends a node that only groups and transforms its children.
    #[inline]
    pub fn add_composite(&mut self) -> NodeId {
        self.add_node(NodeKind::Composite)
    }

    /// Appends `child` to the end of `parent`'s child list.
    ///
    /// Duplicates and shared children are allowed. Only the handles themselves
    /// are validated; cycles are reported by [`build`](Self::build).
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        if child.index() >= self.nodes.len() {
            return Err(SceneError::UnknownNode(child));
        }
        let node = self
            .nodes
            .get_mut(parent.index())
            .ok_or(SceneError::UnknownNode(parent))?;
        node.children.push(child);
        Ok(())
    }

    /// Sets the initial local transform of a node.
    pub fn set_local(&mut self, id: NodeId, local: Transform2D) -> Result<(), SceneError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(SceneError::UnknownNode(id))?;
        node.local = local;
        Ok(())
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Verifies the child relation is acyclic and freezes the structure.
    pub fn build(self) -> Result<Scene, SceneError> {
        find_cycle(&self.nodes)?;

        let drawable = self.nodes.iter().filter(|n| n.kind.is_drawable()).count();
        let triangles: usize = self
            .nodes
            .iter()
            .filter_map(|n| n.kind.geometry())
            .map(Geometry::triangle_count)
            .sum();
        log::debug!(
            "scene built: {} nodes ({} drawable, {} composite), {} triangles",
            self.nodes.len(),
            drawable,
            self.nodes.len() - drawable,
            triangles
        );

        Ok(Scene { nodes: self.nodes })
    }
}

/// Validated, acyclic scene.
///
/// Only local transforms may change. Traversal depth is bounded by the depth
/// of the hierarchy, which `SceneGraph::build` guarantees to be finite.
#[derive(Debug)]
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn local(&self, id: NodeId) -> Option<&Transform2D> {
        self.nodes.get(id.index()).map(|n| &n.local)
    }

    #[inline]
    pub fn local_mut(&mut self, id: NodeId) -> Option<&mut Transform2D> {
        self.nodes.get_mut(id.index()).map(|n| &mut n.local)
    }

    /// Replaces a node's local transform. Unknown handles are ignored.
    pub fn set_local(&mut self, id: NodeId, local: Transform2D) {
        match self.local_mut(id) {
            Some(slot) => *slot = local,
            None => log::warn!("set_local: unknown node {id}"),
        }
    }

    /// Paints the subtree rooted at `root`.
    ///
    /// Each node's world transform is `parent_world * local`, starting from
    /// `base` (typically projection * camera). A drawable node is painted
    /// before its children; children are visited in insertion order. A node
    /// reachable along several paths is painted once per path.
    pub fn draw<P>(&self, root: NodeId, base: &Transform2D, painter: &mut P)
    where
        P: Painter + ?Sized,
    {
        if root.index() >= self.nodes.len() {
            log::warn!("draw: unknown root {root}");
            return;
        }
        self.draw_node(root, base, painter);
    }

    fn draw_node<P>(&self, id: NodeId, parent_world: &Transform2D, painter: &mut P)
    where
        P: Painter + ?Sized,
    {
        let node = &self.nodes[id.index()];
        let world = parent_world.compose(&node.local);

        if let Some(geometry) = node.kind.geometry() {
            painter.paint(&world, geometry);
        }

        for &child in &node.children {
            self.draw_node(child, &world, painter);
        }
    }

    /// Walks the subtree rooted at `root` in pre-order and lets `hook` adjust
    /// each node's local transform. Shared nodes are visited once per path.
    pub fn update<A>(&mut self, root: NodeId, time: f64, hook: &mut A)
    where
        A: Animate + ?Sized,
    {
        if root.index() >= self.nodes.len() {
            log::warn!("update: unknown root {root}");
            return;
        }
        self.update_node(root, time, hook);
    }

    fn update_node<A>(&mut self, id: NodeId, time: f64, hook: &mut A)
    where
        A: Animate + ?Sized,
    {
        hook.animate(id, &mut self.nodes[id.index()].local, time);

        for i in 0..self.nodes[id.index()].children.len() {
            let child = self.nodes[id.index()].children[i];
            self.update_node(child, time, hook);
        }
    }
}

fn next_id(len: usize) -> NodeId {
    match u32::try_from(len) {
        Ok(raw) => NodeId(raw),
        Err(_) => panic!("scene graph is limited to {} nodes", u64::from(u32::MAX) + 1),
    }
}

/// Depth-first search with open/done marks; an edge into an open node closes a cycle.
fn find_cycle(nodes: &[SceneNode]) -> Result<(), SceneError> {
    #[derive(Copy, Clone, Eq, PartialEq)]
    enum Mark {
        New,
        Open,
        Done,
    }

    let mut marks = vec![Mark::New; nodes.len()];
    // (node index, next child position)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for start in 0..nodes.len() {
        if marks[start] != Mark::New {
            continue;
        }
        marks[start] = Mark::Open;
        stack.push((start, 0));

        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            match nodes[node].children.get(next) {
                Some(&child) => {
                    top.1 += 1;
                    match marks[child.index()] {
                        Mark::New => {
                            marks[child.index()] = Mark::Open;
                            stack.push((child.index(), 0));
                        }
                        Mark::Open => {
                            log::warn!(
                                "cycle through {} node {child}",
                                nodes[child.index()].kind.name()
                            );
                            return Err(SceneError::Cycle { node: child });
                        }
                        Mark::Done => {}
                    }
                }
                None => {
                    marks[node] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}
