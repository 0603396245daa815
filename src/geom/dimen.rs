use std::str::FromStr;

use ecow::EcoString;

use super::*;

/// A unit of measurement accepted by the dimen notation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Points.
    Pt,
    /// Font quads.
    Em,
    /// Font x-heights.
    Ex,
    /// Picas.
    Pc,
    /// Inches.
    In,
    /// Centimeters.
    Cm,
    /// Millimeters.
    Mm,
    /// Big (PostScript) points.
    Bp,
    /// Didot points.
    Dd,
    /// Ciceros.
    Cc,
    /// Scaled points.
    Sp,
    /// First-order infinite flexibility.
    Fil,
    /// Second-order infinite flexibility.
    Fill,
    /// Third-order infinite flexibility.
    Filll,
}

impl Unit {
    /// Whether the unit denotes a finite length.
    pub fn is_finite(self) -> bool {
        !matches!(self, Self::Fil | Self::Fill | Self::Filll)
    }

    /// The textual name of the unit.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Pc => "pc",
            Self::In => "in",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::Bp => "bp",
            Self::Dd => "dd",
            Self::Cc => "cc",
            Self::Sp => "sp",
            Self::Fil => "fil",
            Self::Fill => "fill",
            Self::Filll => "filll",
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A scalar length tagged with the unit it was written in.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimen {
    /// The scalar value.
    pub value: f64,
    /// The unit the value is measured in.
    pub unit: Unit,
}

impl Dimen {
    /// Create a new dimen from a value and a unit.
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Whether this dimen denotes a finite length.
    pub fn is_finite(self) -> bool {
        self.unit.is_finite()
    }

    /// Convert this dimen into an absolute length.
    ///
    /// Infinite units resolve at scale one; their order must be handled
    /// separately by the caller.
    pub fn resolve(self, units: &UnitSystem) -> Abs {
        units.scale(self.unit) * self.value
    }
}

impl Display for Dimen {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

impl FromStr for Dimen {
    type Err = EcoString;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::dimen(s)
    }
}

/// Conversion factors from each finite unit into abstract units.
///
/// The factors for `em` and `ex` depend on the font's design, so a unit
/// system is supplied by the active font.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSystem {
    /// The size of the font quad.
    pub em: Abs,
    /// The x-height of the font.
    pub ex: Abs,
    /// The size of a point.
    pub pt: Abs,
    /// The size of a pica, classically 12pt.
    pub pc: Abs,
    /// The size of an inch, classically 72.27pt.
    pub inch: Abs,
    /// The size of a centimeter.
    pub cm: Abs,
    /// The size of a millimeter.
    pub mm: Abs,
    /// The size of a big point, classically 1/72in.
    pub bp: Abs,
    /// The size of a didot point, classically 1238/1157pt.
    pub dd: Abs,
    /// The size of a cicero, classically 12dd.
    pub cc: Abs,
    /// The size of a scaled point, classically 1/65536pt.
    pub sp: Abs,
}

impl UnitSystem {
    /// The scale of the given unit, with infinite units at scale one.
    pub fn scale(&self, unit: Unit) -> Abs {
        match unit {
            Unit::Pt => self.pt,
            Unit::Em => self.em,
            Unit::Ex => self.ex,
            Unit::Pc => self.pc,
            Unit::In => self.inch,
            Unit::Cm => self.cm,
            Unit::Mm => self.mm,
            Unit::Bp => self.bp,
            Unit::Dd => self.dd,
            Unit::Cc => self.cc,
            Unit::Sp => self.sp,
            Unit::Fil | Unit::Fill | Unit::Filll => Abs::raw(1.0),
        }
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        let pt = Abs::raw(1.0);
        let inch = pt * 72.27;
        let cm = inch / 2.54;
        let dd = pt * (1238.0 / 1157.0);
        Self {
            em: pt * 10.0,
            ex: pt * 4.3,
            pt,
            pc: pt * 12.0,
            inch,
            cm,
            mm: cm / 10.0,
            bp: inch / 72.0,
            dd,
            cc: dd * 12.0,
            sp: pt / 65536.0,
        }
    }
}
