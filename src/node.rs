//! The node model typeset material is made of.
//!
//! Upstream modes emit a flat stream of nodes. Boxes are rigid; glue is
//! flexible space; kerns are rigid space; penalties carry break costs.

use serde::{Deserialize, Serialize};

use crate::font::FontId;
use crate::geom::{Abs, Flex, GlueOrder};

/// A list of nodes.
pub type List = Vec<Node>;

/// A piece of typeset material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A rigid box.
    Box(BoxNode),
    /// Flexible space.
    Glue(Glue),
    /// Rigid space.
    Kern(Kern),
    /// A break-cost marker.
    Penalty(Penalty),
}

impl Node {
    /// Whether this node vanishes after a line break.
    pub fn is_discardable(&self) -> bool {
        matches!(self, Self::Glue(_) | Self::Kern(_) | Self::Penalty(_))
    }

    /// Whether this node forces a line break.
    pub fn forces_break(&self) -> bool {
        matches!(self, Self::Penalty(p) if p.forces_break())
    }

    /// Whether this node forbids a line break.
    pub fn forbids_break(&self) -> bool {
        matches!(self, Self::Penalty(p) if p.forbids_break())
    }
}

impl From<BoxNode> for Node {
    fn from(boxed: BoxNode) -> Self {
        Self::Box(boxed)
    }
}

impl From<Glue> for Node {
    fn from(glue: Glue) -> Self {
        Self::Glue(glue)
    }
}

impl From<Kern> for Node {
    fn from(kern: Kern) -> Self {
        Self::Kern(kern)
    }
}

impl From<Penalty> for Node {
    fn from(penalty: Penalty) -> Self {
        Self::Penalty(penalty)
    }
}

/// A rigid box with a width, a height above and a depth below its baseline.
///
/// Dimensions are fixed at assembly time and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxNode {
    /// The width of the box.
    pub width: Abs,
    /// The extent of the box above its baseline.
    pub height: Abs,
    /// The extent of the box below its baseline.
    pub depth: Abs,
    /// What the box contains.
    pub kind: BoxKind,
}

impl BoxNode {
    /// Create a solid filled rectangle.
    pub fn rule(width: Abs, height: Abs, depth: Abs) -> Self {
        Self { width, height, depth, kind: BoxKind::Rule }
    }

    /// Create a box holding a single typeset character.
    pub fn glyph(glyph: Glyph, width: Abs, height: Abs, depth: Abs) -> Self {
        Self { width, height, depth, kind: BoxKind::Glyph(glyph) }
    }

    /// The list box inside, if this is a list box.
    pub fn as_list(&self) -> Option<&ListBox> {
        match &self.kind {
            BoxKind::List(list) => Some(list),
            _ => None,
        }
    }

    /// The cross-axis offset at which the box is placed in its parent.
    pub fn shift(&self) -> Abs {
        self.as_list().map_or(Abs::zero(), |list| list.shift)
    }
}

/// What a box contains.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoxKind {
    /// A solid filled rectangle.
    Rule,
    /// A typeset character.
    Glyph(Glyph),
    /// A list of child nodes laid out along one axis.
    List(ListBox),
}

/// A typeset character.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Glyph {
    /// The font the character is set in.
    pub font: FontId,
    /// The code point.
    pub c: char,
    /// The italic correction of the character.
    pub italic: Abs,
}

/// The two typesetting axes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Along the line, left to right.
    Horizontal,
    /// Down the page, top to bottom.
    Vertical,
}

/// A box containing a list of child nodes.
///
/// The axis decides whether children advance horizontally or vertically.
/// `ratio` and `order` record the solved glue setting: every child glue
/// whose flexibility matches `order` is adjusted by `ratio` times its
/// stretch (for a non-negative ratio) or shrink (for a negative one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListBox {
    /// The axis children are laid out along.
    pub axis: Axis,
    /// The child nodes.
    pub children: List,
    /// The cross-axis offset applied when this box is nested in a parent.
    pub shift: Abs,
    /// The solved glue-setting ratio.
    pub ratio: f64,
    /// The glue order the ratio applies to.
    pub order: GlueOrder,
}

/// Flexible space with stretch and shrink at one of four orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glue {
    /// The natural amount of space.
    pub space: Abs,
    /// How much the space can grow.
    pub stretch: Abs,
    /// The order of the stretch component.
    pub stretch_order: GlueOrder,
    /// How much the space can shrink.
    pub shrink: Abs,
    /// The order of the shrink component.
    pub shrink_order: GlueOrder,
}

impl Glue {
    /// Space without any flexibility.
    pub const fn new(space: Abs) -> Self {
        Self {
            space,
            stretch: Abs::zero(),
            stretch_order: GlueOrder::Normal,
            shrink: Abs::zero(),
            shrink_order: GlueOrder::Normal,
        }
    }

    /// This glue, with the given stretchability.
    pub fn with_stretch(self, amount: Abs, order: GlueOrder) -> Self {
        Self { stretch: amount, stretch_order: order, ..self }
    }

    /// This glue, with the given shrinkability.
    pub fn with_shrink(self, amount: Abs, order: GlueOrder) -> Self {
        Self { shrink: amount, shrink_order: order, ..self }
    }

    /// Add this glue's flexibility to running shrink and stretch totals.
    pub fn accumulate(&self, shrink: &mut Flex, stretch: &mut Flex) {
        shrink.grow(self.shrink, self.shrink_order);
        stretch.grow(self.stretch, self.stretch_order);
    }
}

/// Rigid space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Kern {
    /// The amount of space.
    pub space: Abs,
}

impl Kern {
    /// Create a kern of the given size.
    pub const fn new(space: Abs) -> Self {
        Self { space }
    }
}

/// A marker carrying the cost of breaking a line at its position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Penalty {
    /// The cost of breaking here.
    pub value: i32,
}

impl Penalty {
    /// The infinite cost. Values at or beyond it forbid a break, values at
    /// or beyond its negation force one.
    pub const INF: i32 = 10_000;

    /// Create a penalty with the given cost.
    pub const fn new(value: i32) -> Self {
        Self { value }
    }

    /// Whether this penalty forces a break.
    pub fn forces_break(self) -> bool {
        self.value <= -Self::INF
    }

    /// Whether this penalty forbids a break.
    pub fn forbids_break(self) -> bool {
        self.value >= Self::INF
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discardable_nodes() {
        assert!(Node::from(Glue::new(Abs::raw(2.0))).is_discardable());
        assert!(Node::from(Kern::new(Abs::raw(2.0))).is_discardable());
        assert!(Node::from(Penalty::new(50)).is_discardable());
        assert!(!Node::from(BoxNode::rule(Abs::raw(1.0), Abs::zero(), Abs::zero()))
            .is_discardable());
    }

    #[test]
    fn test_penalty_sentinels() {
        assert!(Penalty::new(-Penalty::INF).forces_break());
        assert!(Penalty::new(-20_000).forces_break());
        assert!(Penalty::new(Penalty::INF).forbids_break());
        assert!(!Penalty::new(9_999).forbids_break());
        assert!(!Penalty::new(-9_999).forces_break());
    }
}
