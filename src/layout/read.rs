//! The traversal protocol renderers use to consume a finished layout.
//!
//! A reader is called once per box with the box and its absolute position.
//! Positions put `y` on the baseline, increasing downward, and the whole
//! tree starts at `(0, root.height)` so that it lies in non-negative `y`.

use crate::geom::{Abs, Point};
use crate::node::{Axis, BoxKind, BoxNode, Glue, ListBox, Node};

/// Walk a finished layout, visiting every box.
pub fn read<F>(root: &BoxNode, mut reader: F)
where
    F: FnMut(&BoxNode, Point),
{
    walk(root, start(root), &mut |boxed, pos| {
        reader(boxed, pos);
        false
    });
}

/// Walk a finished layout until the reader returns `true`.
///
/// Returns whether the traversal was stopped early.
pub fn read_until<F>(root: &BoxNode, mut reader: F) -> bool
where
    F: FnMut(&BoxNode, Point) -> bool,
{
    walk(root, start(root), &mut reader)
}

fn start(root: &BoxNode) -> Point {
    Point::new(Abs::zero(), root.height)
}

fn walk<F>(root: &BoxNode, pos: Point, reader: &mut F) -> bool
where
    F: FnMut(&BoxNode, Point) -> bool,
{
    match &root.kind {
        BoxKind::List(list) => match list.axis {
            Axis::Horizontal => walk_hbox(root, list, pos, reader),
            Axis::Vertical => walk_vbox(root, list, pos, reader),
        },
        _ => reader(root, pos),
    }
}

fn walk_hbox<F>(boxed: &BoxNode, list: &ListBox, mut pos: Point, reader: &mut F) -> bool
where
    F: FnMut(&BoxNode, Point) -> bool,
{
    if reader(boxed, pos) {
        return true;
    }

    for node in &list.children {
        match node {
            Node::Box(b) => {
                let descended = Point::new(pos.x, pos.y + b.shift());
                if walk(b, descended, reader) {
                    return true;
                }
                pos.x += b.width;
            }
            Node::Kern(k) => pos.x += k.space,
            Node::Glue(g) => pos.x += g.space + flex_part(list, g),
            Node::Penalty(_) => {}
        }
    }

    false
}

fn walk_vbox<F>(boxed: &BoxNode, list: &ListBox, mut pos: Point, reader: &mut F) -> bool
where
    F: FnMut(&BoxNode, Point) -> bool,
{
    if reader(boxed, pos) {
        return true;
    }

    pos.y -= boxed.height;
    for node in &list.children {
        match node {
            Node::Box(b) => {
                pos.y += b.height;
                let descended = Point::new(pos.x + b.shift(), pos.y);
                if walk(b, descended, reader) {
                    return true;
                }
                pos.y += b.depth;
            }
            Node::Kern(k) => pos.y += k.space,
            Node::Glue(g) => pos.y += g.space + flex_part(list, g),
            Node::Penalty(_) => {}
        }
    }

    false
}

/// How much the box's solved ratio moves a single glue.
fn flex_part(list: &ListBox, glue: &Glue) -> Abs {
    if list.ratio < 0.0 {
        if list.order == glue.shrink_order {
            return glue.shrink * list.ratio;
        }
    } else if list.order == glue.stretch_order {
        return glue.stretch * list.ratio;
    }
    Abs::zero()
}
