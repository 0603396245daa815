//! Box assembly.
//!
//! Wrapping a list into a box fixes the box's dimensions and solves its glue
//! ratio: the single factor by which every matching glue in the list is
//! stretched or shrunk so that the content exactly fills the target size.

use crate::geom::{Abs, Flex, GlueOrder};
use crate::node::{Axis, BoxKind, BoxNode, List, ListBox, Node, Penalty};

/// Wrap a list into a horizontal box at its natural width.
pub fn hbox(children: List) -> BoxNode {
    let measured = measure_hlist(&children);
    finish(children, Axis::Horizontal, measured, measured.natural)
}

/// Wrap a list into a horizontal box of the given width.
pub fn hbox_to(children: List, width: Abs) -> BoxNode {
    let measured = measure_hlist(&children);
    finish(children, Axis::Horizontal, measured, width)
}

/// Wrap a list into a vertical box at its natural height.
pub fn vbox(children: List) -> BoxNode {
    let measured = measure_vlist(&children);
    finish(children, Axis::Vertical, measured, measured.natural)
}

/// Wrap a list into a vertical box of the given height.
pub fn vbox_to(children: List, height: Abs) -> BoxNode {
    let measured = measure_vlist(&children);
    finish(children, Axis::Vertical, measured, height)
}

/// The natural size and flexibility of a list along one axis.
#[derive(Debug, Default, Copy, Clone)]
struct Measured {
    /// The natural main-axis size.
    natural: Abs,
    /// The cross-axis extent on the far side of the baseline.
    first: Abs,
    /// The cross-axis extent on the near side of the baseline.
    second: Abs,
    /// Total stretchability of the glue in the list.
    stretch: Flex,
    /// Total shrinkability of the glue in the list.
    shrink: Flex,
}

fn measure_hlist(children: &List) -> Measured {
    let mut m = Measured::default();
    for node in children {
        match node {
            Node::Box(b) => {
                let shift = b.shift();
                m.natural += b.width;
                m.first.set_max(b.height - shift);
                m.second.set_max(b.depth + shift);
            }
            Node::Glue(g) => {
                m.natural += g.space;
                g.accumulate(&mut m.shrink, &mut m.stretch);
            }
            Node::Kern(k) => m.natural += k.space,
            Node::Penalty(_) => {}
        }
    }
    m
}

fn measure_vlist(children: &List) -> Measured {
    let mut m = Measured::default();
    for node in children {
        match node {
            Node::Box(b) => {
                let shift = b.shift();
                m.natural += b.height + b.depth;
                m.first.set_max(b.width + shift);
            }
            Node::Glue(g) => {
                m.natural += g.space;
                g.accumulate(&mut m.shrink, &mut m.stretch);
            }
            Node::Kern(k) => m.natural += k.space,
            Node::Penalty(_) => {}
        }
    }
    m
}

fn finish(children: List, axis: Axis, m: Measured, target: Abs) -> BoxNode {
    let (ratio, order) = solve(target - m.natural, m.stretch, m.shrink);
    let list = ListBox { axis, children, shift: Abs::zero(), ratio, order };
    match axis {
        Axis::Horizontal => BoxNode {
            width: target,
            height: m.first,
            depth: m.second,
            kind: BoxKind::List(list),
        },
        Axis::Vertical => BoxNode {
            width: m.first,
            height: target,
            depth: Abs::zero(),
            kind: BoxKind::List(list),
        },
    }
}

/// Solve the glue ratio for a size delta.
///
/// Only the flexibility at the effective order participates. A finite-order
/// shrink ratio is clamped at -1 since a box cannot shrink below its shrink
/// capacity. When a delta remains but there is no flexibility to absorb it,
/// the ratio takes the unviable marker magnitude [`Penalty::INF`].
fn solve(delta: Abs, stretch: Flex, shrink: Flex) -> (f64, GlueOrder) {
    if delta > Abs::zero() {
        let order = stretch.order();
        let flex = stretch.get(order);
        if flex > Abs::zero() {
            (delta / flex, order)
        } else {
            (Penalty::INF as f64, GlueOrder::Normal)
        }
    } else if delta < Abs::zero() {
        let order = shrink.order();
        let flex = shrink.get(order);
        if flex > Abs::zero() {
            let mut ratio = delta / flex;
            if order == GlueOrder::Normal {
                ratio = ratio.max(-1.0);
            }
            (ratio, order)
        } else {
            (-Penalty::INF as f64, GlueOrder::Normal)
        }
    } else {
        (0.0, GlueOrder::Normal)
    }
}
