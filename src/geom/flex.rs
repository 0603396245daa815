use super::*;

/// The order of infinity of a glue component.
///
/// A higher order dominates all lower ones: when totals are compared against
/// a target, only the component at the highest non-zero order matters.
#[derive(
    Debug, Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum GlueOrder {
    /// Finite flexibility.
    #[default]
    Normal,
    /// First-order infinite flexibility.
    Fil,
    /// Second-order infinite flexibility.
    Fill,
    /// Third-order infinite flexibility.
    Filll,
}

/// Running stretch or shrink totals with one component per glue order.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flex {
    /// The finite component.
    pub normal: Abs,
    /// The first-order infinite component.
    pub fil: Abs,
    /// The second-order infinite component.
    pub fill: Abs,
    /// The third-order infinite component.
    pub filll: Abs,
}

impl Flex {
    /// Totals without any flexibility.
    pub const fn zero() -> Self {
        Self {
            normal: Abs::zero(),
            fil: Abs::zero(),
            fill: Abs::zero(),
            filll: Abs::zero(),
        }
    }

    /// Add an amount of flexibility at the given order.
    pub fn grow(&mut self, amount: Abs, order: GlueOrder) {
        *self.at_mut(order) += amount;
    }

    /// The component at the given order.
    pub fn get(self, order: GlueOrder) -> Abs {
        match order {
            GlueOrder::Normal => self.normal,
            GlueOrder::Fil => self.fil,
            GlueOrder::Fill => self.fill,
            GlueOrder::Filll => self.filll,
        }
    }

    /// The effective order: the highest order with a non-zero component.
    pub fn order(self) -> GlueOrder {
        if !self.filll.is_zero() {
            GlueOrder::Filll
        } else if !self.fill.is_zero() {
            GlueOrder::Fill
        } else if !self.fil.is_zero() {
            GlueOrder::Fil
        } else {
            GlueOrder::Normal
        }
    }

    fn at_mut(&mut self, order: GlueOrder) -> &mut Abs {
        match order {
            GlueOrder::Normal => &mut self.normal,
            GlueOrder::Fil => &mut self.fil,
            GlueOrder::Fill => &mut self.fill,
            GlueOrder::Filll => &mut self.filll,
        }
    }
}

impl Neg for Flex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            normal: -self.normal,
            fil: -self.fil,
            fill: -self.fill,
            filll: -self.filll,
        }
    }
}

impl Add for Flex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            normal: self.normal + other.normal,
            fil: self.fil + other.fil,
            fill: self.fill + other.fill,
            filll: self.filll + other.filll,
        }
    }
}

sub_impl!(Flex - Flex -> Flex);
assign_impl!(Flex += Flex);
assign_impl!(Flex -= Flex);
