//! Math style selection.

use serde::{Deserialize, Serialize};

/// The size tier of a math style.
#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum MathSize {
    /// Math on its own line.
    Display,
    /// Math in running text.
    Text,
    /// Sub- and superscripts.
    Script,
    /// Second-level sub- and superscripts.
    ScriptScript,
}

/// One of the eight math styles: a size tier, normal or cramped.
///
/// Cramped variants lower exponents, for material set under a line such as
/// a fraction's denominator. Moving into a sub-formula follows fixed
/// transitions between the styles.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MathStyle {
    size: MathSize,
    cramped: bool,
}

/// The eight styles in table order.
const STYLES: [MathStyle; 8] = [
    MathStyle::DISPLAY,
    MathStyle::DISPLAY_CRAMPED,
    MathStyle::TEXT,
    MathStyle::TEXT_CRAMPED,
    MathStyle::SCRIPT,
    MathStyle::SCRIPT_CRAMPED,
    MathStyle::SCRIPT_SCRIPT,
    MathStyle::SCRIPT_SCRIPT_CRAMPED,
];

const SUPERSCRIPT: [usize; 8] = [4, 5, 4, 5, 6, 7, 6, 7];
const SUBSCRIPT: [usize; 8] = [5, 5, 5, 5, 7, 7, 7, 7];
const NUMERATOR: [usize; 8] = [2, 3, 4, 5, 6, 7, 6, 7];
const DENOMINATOR: [usize; 8] = [3, 3, 5, 5, 7, 7, 7, 7];
const CRAMPED: [usize; 8] = [1, 1, 3, 3, 5, 5, 7, 7];
const TEXT: [usize; 8] = [0, 1, 2, 3, 2, 3, 2, 3];

impl MathStyle {
    /// The style of display math.
    pub const DISPLAY: Self = Self::new(MathSize::Display, false);
    /// The cramped variant of display math.
    pub const DISPLAY_CRAMPED: Self = Self::new(MathSize::Display, true);
    /// The style of math in running text.
    pub const TEXT: Self = Self::new(MathSize::Text, false);
    /// The cramped variant of math in running text.
    pub const TEXT_CRAMPED: Self = Self::new(MathSize::Text, true);
    /// The style of first-level scripts.
    pub const SCRIPT: Self = Self::new(MathSize::Script, false);
    /// The cramped variant of first-level scripts.
    pub const SCRIPT_CRAMPED: Self = Self::new(MathSize::Script, true);
    /// The style of second-level scripts.
    pub const SCRIPT_SCRIPT: Self = Self::new(MathSize::ScriptScript, false);
    /// The cramped variant of second-level scripts.
    pub const SCRIPT_SCRIPT_CRAMPED: Self = Self::new(MathSize::ScriptScript, true);

    /// Create a style from its size tier and crampedness.
    pub const fn new(size: MathSize, cramped: bool) -> Self {
        Self { size, cramped }
    }

    /// The style with the given index in table order.
    pub fn from_index(index: usize) -> Self {
        STYLES[index]
    }

    /// The index of this style in table order.
    pub fn index(self) -> usize {
        2 * self.size as usize + self.cramped as usize
    }

    /// The size tier of this style.
    pub const fn size(self) -> MathSize {
        self.size
    }

    /// Whether this is a cramped variant.
    pub const fn is_cramped(self) -> bool {
        self.cramped
    }

    /// Whether glyphs in this style are set tightly.
    pub fn is_tight(self) -> bool {
        self.size >= MathSize::Script
    }

    /// The style for superscripts attached in this style.
    pub fn for_superscript(self) -> Self {
        STYLES[SUPERSCRIPT[self.index()]]
    }

    /// The style for subscripts attached in this style.
    pub fn for_subscript(self) -> Self {
        STYLES[SUBSCRIPT[self.index()]]
    }

    /// The style for a fraction's numerator.
    pub fn for_numerator(self) -> Self {
        STYLES[NUMERATOR[self.index()]]
    }

    /// The style for a fraction's denominator.
    pub fn for_denominator(self) -> Self {
        STYLES[DENOMINATOR[self.index()]]
    }

    /// The cramped variant of this style.
    pub fn to_cramped(self) -> Self {
        STYLES[CRAMPED[self.index()]]
    }

    /// The style for text embedded in material set in this style.
    pub fn for_text(self) -> Self {
        STYLES[TEXT[self.index()]]
    }
}

impl Default for MathStyle {
    fn default() -> Self {
        Self::TEXT
    }
}
