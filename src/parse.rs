//! Parsers for the textual dimen, glue, kern, parshape and option notations.
//!
//! These are peripheral: they turn input text into [`Dimen`], [`Glue`],
//! [`Kern`], [`Parshape`] and option lists for the core, and their failures
//! never reach the paragraph optimizer.

use ecow::{eco_format, EcoString};
use unscanny::Scanner;

use crate::diag::StrResult;
use crate::geom::{Abs, Dimen, GlueOrder, Unit, UnitSystem};
use crate::layout::{Parshape, ParshapeSpec};
use crate::node::{Glue, Kern};

/// Parse a dimen like `+20pt` or `-0.5fill`.
pub fn dimen(text: &str) -> StrResult<Dimen> {
    let mut s = Scanner::new(text);
    let dimen = eat_dimen(&mut s)?;
    finish(s)?;
    Ok(dimen)
}

/// Parse a glue like `1ex plus 2pt minus 3em`.
///
/// The space must be finite; stretch and shrink written in `fil` units carry
/// their order of infinity into the glue.
pub fn glue(text: &str, units: &UnitSystem) -> StrResult<Glue> {
    let mut s = Scanner::new(text);
    let space = eat_dimen(&mut s)?;
    if !space.is_finite() {
        return Err("glue space must be finite".into());
    }

    let mut glue = Glue::new(space.resolve(units));
    s.eat_while(char::is_whitespace);
    if s.eat_if("plus") {
        let (amount, order) = flex_amount(eat_dimen(&mut s)?, units);
        glue = glue.with_stretch(amount, order);
        s.eat_while(char::is_whitespace);
    }
    if s.eat_if("minus") {
        let (amount, order) = flex_amount(eat_dimen(&mut s)?, units);
        glue = glue.with_shrink(amount, order);
    }

    finish(s)?;
    Ok(glue)
}

/// Parse a kern like `-.125pt`.
pub fn kern(text: &str, units: &UnitSystem) -> StrResult<Kern> {
    let mut s = Scanner::new(text);
    let dimen = eat_dimen(&mut s)?;
    if !dimen.is_finite() {
        return Err("kern must be finite".into());
    }
    finish(s)?;
    Ok(Kern::new(dimen.resolve(units)))
}

/// Parse a parshape like `=2 1pt 10em 0pt 12em`.
///
/// The count after `=` gives the number of (indent, length) pairs; `=0`
/// yields an empty parshape.
pub fn parshape(text: &str, units: &UnitSystem) -> StrResult<Parshape> {
    let mut s = Scanner::new(text);
    s.eat_while(char::is_whitespace);
    if !s.eat_if('=') {
        return Err("expected '='".into());
    }

    let digits = s.eat_while(|c: char| c.is_ascii_digit());
    let count: usize = digits
        .parse()
        .map_err(|_| eco_format!("expected an entry count, found {digits:?}"))?;

    let mut shape = Parshape::with_capacity(count);
    for _ in 0..count {
        let indent = eat_dimen(&mut s)?;
        let length = eat_dimen(&mut s)?;
        if !indent.is_finite() || !length.is_finite() {
            return Err("parshape entries must be finite".into());
        }
        shape.push(ParshapeSpec {
            indent: indent.resolve(units),
            length: length.resolve(units),
        });
    }

    finish(s)?;
    Ok(shape)
}

/// Parse an option list like `[key=value, standalone]`.
///
/// A key without a value maps to the empty string. Keys and values are
/// trimmed of surrounding whitespace.
pub fn options(text: &str) -> StrResult<Vec<(EcoString, EcoString)>> {
    let mut s = Scanner::new(text);
    s.eat_while(char::is_whitespace);
    if !s.eat_if('[') {
        return Err("expected '['".into());
    }

    let mut list = Vec::new();
    if !s.eat_if(']') {
        loop {
            let key = s.eat_until(['=', ',', ']']).trim();
            let value =
                if s.eat_if('=') { s.eat_until([',', ']']).trim() } else { "" };
            list.push((key.into(), value.into()));
            if s.eat_if(',') {
                continue;
            } else if s.eat_if(']') {
                break;
            }
            return Err("unclosed option list".into());
        }
    }

    finish(s)?;
    Ok(list)
}

/// Eat a signed decimal number followed by a unit name.
fn eat_dimen(s: &mut Scanner) -> StrResult<Dimen> {
    s.eat_while(char::is_whitespace);
    let start = s.cursor();
    s.eat_if(['+', '-']);
    s.eat_while(|c: char| c.is_ascii_digit());
    s.eat_if('.');
    s.eat_while(|c: char| c.is_ascii_digit());

    let number = s.from(start);
    let value: f64 = number
        .parse()
        .map_err(|_| eco_format!("expected a number, found {number:?}"))?;

    let name = s.eat_while(|c: char| c.is_ascii_alphabetic());
    let unit = match name {
        "pt" => Unit::Pt,
        "em" => Unit::Em,
        "ex" => Unit::Ex,
        "pc" => Unit::Pc,
        "in" => Unit::In,
        "cm" => Unit::Cm,
        "mm" => Unit::Mm,
        "bp" => Unit::Bp,
        "dd" => Unit::Dd,
        "cc" => Unit::Cc,
        "sp" => Unit::Sp,
        "fil" => Unit::Fil,
        "fill" => Unit::Fill,
        "filll" => Unit::Filll,
        "" => return Err("missing unit".into()),
        _ => return Err(eco_format!("unknown unit: {name}")),
    };

    Ok(Dimen::new(value, unit))
}

/// Map a flex dimen to an amount and an order of infinity.
fn flex_amount(dimen: Dimen, units: &UnitSystem) -> (Abs, GlueOrder) {
    let order = match dimen.unit {
        Unit::Fil => GlueOrder::Fil,
        Unit::Fill => GlueOrder::Fill,
        Unit::Filll => GlueOrder::Filll,
        _ => GlueOrder::Normal,
    };
    (dimen.resolve(units), order)
}

/// Require that only whitespace remains.
fn finish(mut s: Scanner) -> StrResult<()> {
    s.eat_while(char::is_whitespace);
    if s.done() {
        Ok(())
    } else {
        Err(eco_format!("unexpected input: {:?}", s.after()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units() -> UnitSystem {
        let mut units = UnitSystem::default();
        units.em = Abs::raw(2.0);
        units.ex = Abs::raw(0.5);
        units.pt = Abs::raw(1.0);
        units
    }

    #[test]
    fn test_parse_finite_dimen() {
        let d = dimen("+20pt").unwrap();
        assert_eq!(d.unit, Unit::Pt);
        assert_eq!(d.value, 20.0);

        let d = dimen("-20em").unwrap();
        assert_eq!(d.unit, Unit::Em);
        assert_eq!(d.value, -20.0);
    }

    #[test]
    fn test_parse_infinite_dimen() {
        let d = dimen("-0.5fill").unwrap();
        assert!(!d.is_finite());
        assert_eq!(d.unit, Unit::Fill);
        assert_eq!(d.value, -0.5);
    }

    #[test]
    fn test_parse_dimen_rejects_garbage() {
        assert!(dimen("pt").is_err());
        assert!(dimen("1").is_err());
        assert!(dimen("1xy").is_err());
        assert!(dimen("1pt 2pt").is_err());
    }

    #[test]
    fn test_dimen_roundtrip() {
        for text in ["20pt", "-0.5fill", "1.5em", "3fil"] {
            let d: Dimen = text.parse().unwrap();
            assert_eq!(d.to_string(), text);
            assert_eq!(d.to_string().parse::<Dimen>().unwrap(), d);
        }
    }

    #[test]
    fn test_parse_simple_glue() {
        let g = glue("1em", &units()).unwrap();
        assert_eq!(g.space, Abs::raw(2.0));
        assert_eq!(g.stretch, Abs::zero());
        assert_eq!(g.shrink, Abs::zero());
    }

    #[test]
    fn test_parse_glue_with_finite_flex() {
        let g = glue("1ex plus 2pt minus 3em", &units()).unwrap();
        assert_eq!(g.space, Abs::raw(0.5));
        assert_eq!(g.stretch, Abs::raw(2.0));
        assert_eq!(g.shrink, Abs::raw(6.0));
        assert_eq!(g.stretch_order, GlueOrder::Normal);
        assert_eq!(g.shrink_order, GlueOrder::Normal);
    }

    #[test]
    fn test_parse_glue_with_infinite_flex() {
        let g = glue("1pc plus 1fil minus 2fill", &units()).unwrap();
        assert_eq!(g.space, Abs::raw(12.0));
        assert_eq!(g.stretch, Abs::raw(1.0));
        assert_eq!(g.stretch_order, GlueOrder::Fil);
        assert_eq!(g.shrink, Abs::raw(2.0));
        assert_eq!(g.shrink_order, GlueOrder::Fill);
    }

    #[test]
    fn test_parse_glue_with_trailing_space() {
        let g = glue("1pc ", &units()).unwrap();
        assert_eq!(g.space, Abs::raw(12.0));
    }

    #[test]
    fn test_parse_glue_rejects_infinite_space() {
        assert!(glue("1fil", &units()).is_err());
    }

    #[test]
    fn test_parse_kern() {
        assert_eq!(kern("1pc ", &units()).unwrap().space, Abs::raw(12.0));
        assert_eq!(kern("-.125pt ", &units()).unwrap().space, Abs::raw(-0.125));
    }

    #[test]
    fn test_parse_parshape() {
        let shape = parshape("=1 1pt 10em", &units()).unwrap();
        assert_eq!(shape.len(), 1);
        assert_eq!(shape[0].indent, Abs::raw(1.0));
        assert_eq!(shape[0].length, Abs::raw(20.0));
    }

    #[test]
    fn test_parse_empty_parshape() {
        assert!(parshape("=0", &units()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_empty_options() {
        assert!(options("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_options_with_value() {
        let list = options("[key=value]").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].0, "key");
        assert_eq!(list[0].1, "value");
    }

    #[test]
    fn test_parse_options_with_standalone_key() {
        let list = options("[standalone key, a=b]").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].0, "standalone key");
        assert_eq!(list[0].1, "");
        assert_eq!(list[1].0, "a");
        assert_eq!(list[1].1, "b");
    }
}
