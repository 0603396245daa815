//! Support for mathematical typesetting.

mod style;

pub use self::style::{MathSize, MathStyle};
