//! Font metrics interfaces.
//!
//! The core never touches font files. A host supplies a [`FontMetrics`]
//! implementation and the upstream mode uses it to turn characters into
//! boxes. Lookups are referentially transparent; nothing is cached here.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::geom::{Abs, UnitSystem};
use crate::node::{BoxNode, Glyph, Kern, List, Node};

/// Identifies a font face in the host's font storage.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct FontId(u16);

impl FontId {
    /// Create a font id from a raw number.
    pub const fn from_raw(id: u16) -> Self {
        Self(id)
    }

    /// Extract the raw underlying number.
    pub const fn into_raw(self) -> u16 {
        self.0
    }
}

/// The metrics of a single glyph.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct GlyphMetrics {
    /// The advance width.
    pub width: Abs,
    /// The extent above the baseline.
    pub height: Abs,
    /// The extent below the baseline.
    pub depth: Abs,
    /// The italic correction.
    pub italic: Abs,
}

/// Resolves metrics for character codes.
pub trait FontMetrics {
    /// The metrics of a character in a font.
    fn glyph(&self, font: FontId, c: char) -> GlyphMetrics;

    /// The kerning between a pair of adjacent characters.
    fn kern(&self, font: FontId, left: char, right: char) -> Abs {
        let _ = (font, left, right);
        Abs::zero()
    }

    /// The ligature a pair of adjacent characters combines into, if any.
    fn ligature(&self, font: FontId, left: char, right: char) -> Option<char> {
        let _ = (font, left, right);
        None
    }

    /// The unit system of a font.
    fn units(&self, font: FontId) -> UnitSystem;
}

/// Typeset a run of text into char boxes.
///
/// Adjacent characters are first combined into ligatures, then kern pairs
/// are inserted between the remaining ones. Interword material is the
/// caller's concern.
pub fn typeset_text(metrics: &dyn FontMetrics, font: FontId, text: &str) -> List {
    let mut chars = Vec::new();
    for c in text.chars() {
        match chars.last().and_then(|&last| metrics.ligature(font, last, c)) {
            Some(ligature) => *chars.last_mut().unwrap() = ligature,
            None => chars.push(c),
        }
    }

    let mut list = List::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let kerning = metrics.kern(font, chars[i - 1], c);
            if !kerning.approx_eq(Abs::zero()) {
                list.push(Node::Kern(Kern::new(kerning)));
            }
        }
        let m = metrics.glyph(font, c);
        let glyph = Glyph { font, c, italic: m.italic };
        list.push(Node::Box(BoxNode::glyph(glyph, m.width, m.height, m.depth)));
    }

    list
}

/// A width-table metrics provider with uniform vertical metrics.
///
/// Good enough to typeset material without a real font, for tests and for
/// hosts that measure text elsewhere.
#[derive(Debug, Clone)]
pub struct FixedMetrics {
    units: UnitSystem,
    advance: Abs,
    height: Abs,
    depth: Abs,
    widths: FxHashMap<char, Abs>,
    kerns: FxHashMap<(char, char), Abs>,
    ligatures: FxHashMap<(char, char), char>,
}

impl FixedMetrics {
    /// Create a provider whose characters all share the given metrics.
    pub fn new(advance: Abs, height: Abs, depth: Abs) -> Self {
        Self {
            units: UnitSystem::default(),
            advance,
            height,
            depth,
            widths: FxHashMap::default(),
            kerns: FxHashMap::default(),
            ligatures: FxHashMap::default(),
        }
    }

    /// Override the advance width of a single character.
    pub fn set_width(&mut self, c: char, width: Abs) {
        self.widths.insert(c, width);
    }

    /// Register a kern pair.
    pub fn set_kern(&mut self, left: char, right: char, amount: Abs) {
        self.kerns.insert((left, right), amount);
    }

    /// Register a ligature.
    pub fn set_ligature(&mut self, left: char, right: char, ligature: char) {
        self.ligatures.insert((left, right), ligature);
    }
}

impl FontMetrics for FixedMetrics {
    fn glyph(&self, _: FontId, c: char) -> GlyphMetrics {
        GlyphMetrics {
            width: self.widths.get(&c).copied().unwrap_or(self.advance),
            height: self.height,
            depth: self.depth,
            italic: Abs::zero(),
        }
    }

    fn kern(&self, _: FontId, left: char, right: char) -> Abs {
        self.kerns.get(&(left, right)).copied().unwrap_or(Abs::zero())
    }

    fn ligature(&self, _: FontId, left: char, right: char) -> Option<char> {
        self.ligatures.get(&(left, right)).copied()
    }

    fn units(&self, _: FontId) -> UnitSystem {
        self.units
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::BoxKind;

    #[test]
    fn test_typeset_text_applies_ligatures_and_kerns() {
        let mut metrics = FixedMetrics::new(Abs::raw(5.0), Abs::raw(7.0), Abs::raw(3.0));
        metrics.set_ligature('f', 'i', 'ﬁ');
        metrics.set_kern('a', 'v', Abs::raw(-0.5));
        let font = FontId::from_raw(0);

        let list = typeset_text(&metrics, font, "fiav");
        let mut chars = Vec::new();
        let mut kerns = Vec::new();
        for node in &list {
            match node {
                Node::Box(b) => match &b.kind {
                    BoxKind::Glyph(glyph) => chars.push(glyph.c),
                    _ => unreachable!(),
                },
                Node::Kern(k) => kerns.push(k.space),
                _ => unreachable!(),
            }
        }

        assert_eq!(chars, vec!['ﬁ', 'a', 'v']);
        assert_eq!(kerns, vec![Abs::raw(-0.5)]);
    }
}
