use super::crossing::CrossingId;

/// One entry of a boundary sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Node {
    /// Input triangle vertex, by index into the normalized triangle.
    Vertex(usize),
    /// Crossing inserted on an edge, with its parameter along that edge.
    Crossing { id: CrossingId, t: f64 },
}

/// Cyclic perimeter of one triangle, interleaved with crossings.
///
/// Starts as the three vertices. Crossings on edge `i` are kept between
/// `Vertex(i)` and the following vertex, sorted by their parameter along
/// the edge.
#[derive(Debug, Clone)]
pub(crate) struct BoundarySequence {
    nodes: Vec<Node>,
}

impl BoundarySequence {
    /// Two triangles cross in at most six points.
    const CAPACITY: usize = 9;

    pub(crate) fn new() -> Self {
        let mut nodes = Vec::with_capacity(Self::CAPACITY);
        nodes.extend((0..3).map(Node::Vertex));
        Self { nodes }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, index: usize) -> Node {
        self.nodes[index]
    }

    /// Cyclic successor of `index`.
    pub(crate) fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.nodes.len()
    }

    pub(crate) fn position_of(&self, id: CrossingId) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| matches!(n, Node::Crossing { id: other, .. } if *other == id))
    }

    /// Inserts crossing `id` at parameter `t` on edge `edge`.
    ///
    /// The crossing lands after the edge's start vertex and after every
    /// crossing already on that edge with a smaller parameter. For the
    /// closing edge this may be the end of the sequence, which is still
    /// "before" the wrap-around to vertex 0.
    pub(crate) fn insert(&mut self, edge: usize, id: CrossingId, t: f64) {
        let start = self
            .nodes
            .iter()
            .position(|n| *n == Node::Vertex(edge))
            .unwrap_or(0);

        let mut at = start + 1;
        while let Some(Node::Crossing { t: other, .. }) = self.nodes.get(at) {
            if *other > t {
                break;
            }
            at += 1;
        }
        self.nodes.insert(at, Node::Crossing { id, t });
    }
}
