//! A box-and-glue typesetting core.
//!
//! Upstream mode machines stream typeset material into horizontal lists of
//! [nodes](Node). This crate turns those lists into finished layouts:
//!
//! - **Assembling**: A list is wrapped into an [hbox](hbox_to) or
//!   [vbox](vbox_to). The box solves its glue ratio so that the flexible
//!   space inside exactly fills the target size.
//! - **Breaking**: A [`Paragraph`] decomposes a horizontal list into lines
//!   by searching the graph of feasible breakpoints for the path with the
//!   least total demerits.
//! - **Stacking**: The resulting line boxes are pushed into a vertical list
//!   with baseline spacing maintained by the [`VListBuilder`].
//! - **Reading**: Renderers and exporters [walk](read) the finished box tree
//!   and receive each box together with its absolute position.
//!
//! The core is synchronous and stateless. Breaking a paragraph is a pure
//! function of the list and the configuration, so distinct paragraphs may be
//! processed concurrently by cloning the configuration.

pub mod diag;
pub mod font;
pub mod geom;
pub mod layout;
pub mod math;
pub mod node;
pub mod parse;

pub use crate::diag::{StrResult, TypesetError, TypesetResult};
pub use crate::font::{FixedMetrics, FontId, FontMetrics, GlyphMetrics};
pub use crate::geom::{Abs, Dimen, Flex, GlueOrder, Point, Unit, UnitSystem};
pub use crate::layout::{
    hbox, hbox_to, read, read_until, vbox, vbox_to, Breakpoint, Fitness, Paragraph,
    Parshape, ParshapeSpec, Totals, VListBuilder,
};
pub use crate::math::{MathSize, MathStyle};
pub use crate::node::{
    Axis, BoxKind, BoxNode, Glue, Glyph, Kern, List, ListBox, Node, Penalty,
};
