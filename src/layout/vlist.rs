//! Vertical list building.

use crate::geom::Abs;
use crate::node::{BoxNode, Glue, List, Node};

/// Stacks boxes into a vertical list while maintaining baseline spacing.
///
/// Between two boxes, the builder aims for `baselineskip` from baseline to
/// baseline. When the gap that remains after subtracting the previous depth
/// and the next height falls below `lineskip_limit`, the boxes are too close
/// and `lineskip` glue is used instead.
#[derive(Debug, Clone)]
pub struct VListBuilder {
    baselineskip: Glue,
    lineskip: Glue,
    lineskip_limit: Abs,
    prev_depth: Abs,
}

impl VListBuilder {
    /// Create a builder for the given baseline discipline.
    pub fn new(
        baselineskip: Glue,
        lineskip: Glue,
        lineskip_limit: Abs,
        prev_depth: Abs,
    ) -> Self {
        Self { baselineskip, lineskip, lineskip_limit, prev_depth }
    }

    /// Append a box to the list, preceded by the appropriate interline glue.
    pub fn push(&mut self, out: &mut List, boxed: BoxNode) {
        let gap = self.baselineskip.space - self.prev_depth - boxed.height;
        if gap >= self.lineskip_limit {
            let glue = Glue { space: gap, ..self.baselineskip.clone() };
            out.push(Node::Glue(glue));
        } else {
            out.push(Node::Glue(self.lineskip.clone()));
        }
        self.prev_depth = boxed.depth;
        out.push(Node::Box(boxed));
    }

    /// The depth of the last box pushed.
    pub fn prev_depth(&self) -> Abs {
        self.prev_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::GlueOrder;
    use crate::node::BoxNode;

    fn builder() -> VListBuilder {
        VListBuilder::new(
            Glue::new(Abs::raw(12.0)).with_stretch(Abs::raw(2.0), GlueOrder::Normal),
            Glue::new(Abs::raw(3.0)),
            Abs::raw(2.0),
            Abs::zero(),
        )
    }

    #[test]
    fn test_baselineskip_fills_the_gap() {
        let mut out = List::new();
        let mut builder = builder();
        builder.push(&mut out, BoxNode::rule(Abs::raw(50.0), Abs::raw(7.0), Abs::raw(3.0)));
        builder.push(&mut out, BoxNode::rule(Abs::raw(50.0), Abs::raw(7.0), Abs::raw(3.0)));

        match &out[0] {
            Node::Glue(g) => {
                assert_eq!(g.space, Abs::raw(5.0));
                assert_eq!(g.stretch, Abs::raw(2.0));
            }
            _ => panic!("expected interline glue"),
        }
        match &out[2] {
            // Baseline to baseline: depth 3 + gap 2 + height 7 = 12.
            Node::Glue(g) => assert_eq!(g.space, Abs::raw(2.0)),
            _ => panic!("expected interline glue"),
        }
        assert_eq!(builder.prev_depth(), Abs::raw(3.0));
    }

    #[test]
    fn test_lineskip_when_boxes_are_too_close() {
        let mut out = List::new();
        let mut builder = builder();
        builder.push(&mut out, BoxNode::rule(Abs::raw(50.0), Abs::raw(11.0), Abs::raw(3.0)));

        // Gap would be 12 - 0 - 11 = 1, below the limit of 2.
        match &out[0] {
            Node::Glue(g) => assert_eq!(g.space, Abs::raw(3.0)),
            _ => panic!("expected lineskip glue"),
        }
    }
}
