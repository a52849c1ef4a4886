//! Validated sequences of arcs.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::{fmt, slice};
use std::str::FromStr;
use crate::arc::Arc;
use crate::codec;
use crate::config::Limits;
use crate::error::ParseError;


//------------ Arcs ----------------------------------------------------------

/// The sequence of arcs making up an object identifier.
///
/// A value of this type is always a valid object identifier: it has at
/// least two arcs, the first arc is 0, 1, or 2, and if the first arc is 0
/// or 1, the second arc is at most 39. These rules make sure that the
/// first two arcs can be packed into a single subidentifier when encoding.
///
/// Sequences compare arc by arc. If one sequence is a prefix of the other,
/// the shorter one is smaller.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Arcs {
    arcs: Vec<Arc>,
}

impl Arcs {
    /// Creates a sequence from a vector of arcs using the default limits.
    ///
    /// Returns an error if the arcs do not form a valid object identifier.
    pub fn from_vec(arcs: Vec<Arc>) -> Result<Self, ParseError> {
        Self::from_vec_with(arcs, &Limits::default())
    }

    /// Creates a sequence from a vector of arcs subject to the given limits.
    ///
    /// Besides the arcs forming a valid object identifier, their encoding
    /// must not be longer than `limits.max_octets`. This way, anything
    /// accepted here can be decoded again under the same limits.
    pub fn from_vec_with(
        arcs: Vec<Arc>, limits: &Limits
    ) -> Result<Self, ParseError> {
        Self::check(&arcs)?;
        let res = Arcs { arcs };
        if codec::encoded_len(&res) > limits.max_octets {
            xerr!(return Err(ParseError::TooLong))
        }
        Ok(res)
    }

    /// Parses the dotted-decimal form subject to the given limits.
    ///
    /// The text must consist of at least two decimal integers separated by
    /// single dots. The integers must not have leading zeros.
    pub fn parse_with(s: &str, limits: &Limits) -> Result<Self, ParseError> {
        if s.is_empty() {
            xerr!(return Err(ParseError::Empty))
        }
        if s.len() > limits.max_text_len {
            xerr!(return Err(ParseError::TooLong))
        }
        let arcs = s.split('.').map(|item| {
            Arc::from_decimal(item).ok_or_else(|| {
                xerr!(ParseError::InvalidArc(item.into()))
            })
        }).collect::<Result<Vec<_>, _>>()?;
        Self::from_vec_with(arcs, limits)
    }

    /// Checks that the arcs form a valid object identifier.
    fn check(arcs: &[Arc]) -> Result<(), ParseError> {
        let (first, second) = match (arcs.get(0), arcs.get(1)) {
            (Some(first), Some(second)) => (first, second),
            _ => xerr!(return Err(ParseError::TooFewArcs))
        };
        match first.to_u32() {
            Some(0) | Some(1) => {
                if *second > Arc::from(39u8) {
                    xerr!(return Err(ParseError::SecondArcOutOfRange))
                }
            }
            Some(2) => { }
            _ => xerr!(return Err(ParseError::FirstArcOutOfRange))
        }
        Ok(())
    }

    /// Returns the number of arcs.
    ///
    /// This is always at least two.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Returns the first arc.
    pub fn first(&self) -> &Arc {
        &self.arcs[0]
    }

    /// Returns the second arc.
    pub fn second(&self) -> &Arc {
        &self.arcs[1]
    }

    /// Returns an iterator over the arcs.
    pub fn iter(&self) -> slice::Iter<Arc> {
        self.arcs.iter()
    }

    /// Returns the arcs as a slice.
    pub fn as_slice(&self) -> &[Arc] {
        self.arcs.as_ref()
    }

    /// Returns whether `self` starts with all the arcs of `prefix`.
    pub fn starts_with(&self, prefix: &Arcs) -> bool {
        self.arcs.starts_with(&prefix.arcs)
    }
}


//--- FromStr

impl FromStr for Arcs {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &Limits::default())
    }
}


//--- AsRef and IntoIterator

impl AsRef<[Arc]> for Arcs {
    fn as_ref(&self) -> &[Arc] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Arcs {
    type Item = &'a Arc;
    type IntoIter = slice::Iter<'a, Arc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


//--- Display

impl fmt::Display for Arcs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(arc) = arcs.next() {
            write!(f, "{}", arc)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parse(s: &str) -> Result<Arcs, ParseError> {
        s.parse()
    }

    #[test]
    fn parse_good() {
        for s in &[
            "0.0",
            "0.39",
            "1.39.0",
            "1.2.840.113549.1.1.1",
            "2.5.4.3",
            "2.100.3",
            "2.999",
            "2.18446744073709551616.1",
            "1.3.6.1.4.1.340282366920938463463374607431768211456",
        ] {
            assert_eq!(parse(s).unwrap().to_string(), *s);
        }
    }

    #[test]
    fn parse_bad() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("1"), Err(ParseError::TooFewArcs));
        assert_eq!(parse("2"), Err(ParseError::TooFewArcs));
        assert_eq!(parse("3.1"), Err(ParseError::FirstArcOutOfRange));
        assert_eq!(
            parse("18446744073709551616.1"),
            Err(ParseError::FirstArcOutOfRange)
        );
        assert_eq!(parse("1.40"), Err(ParseError::SecondArcOutOfRange));
        assert_eq!(parse("0.40.1"), Err(ParseError::SecondArcOutOfRange));
        assert_eq!(parse("1..2"), Err(ParseError::InvalidArc("".into())));
        assert_eq!(parse(".1.2"), Err(ParseError::InvalidArc("".into())));
        assert_eq!(parse("1.2."), Err(ParseError::InvalidArc("".into())));
        assert_eq!(parse("1.02"), Err(ParseError::InvalidArc("02".into())));
        assert_eq!(parse("1.2.x"), Err(ParseError::InvalidArc("x".into())));
        assert_eq!(parse("1.-2"), Err(ParseError::InvalidArc("-2".into())));
        assert_eq!(
            parse("{ 1 2 }"), Err(ParseError::InvalidArc("{ 1 2 }".into()))
        );

        // Segments are checked before the structure.
        assert_eq!(parse("3.x"), Err(ParseError::InvalidArc("x".into())));
    }

    #[test]
    fn parse_limits() {
        let limits = Limits { max_text_len: 7, .. Limits::DEFAULT };
        assert!(Arcs::parse_with("1.2.3.4", &limits).is_ok());
        assert_eq!(
            Arcs::parse_with("1.2.3.45", &limits),
            Err(ParseError::TooLong)
        );
    }

    #[test]
    fn encoded_len_limit() {
        // Text well within its limit may still encode to too many octets.
        let long = format!("2.{}", "9".repeat(4000));
        assert_eq!(parse(&long), Err(ParseError::TooLong));
        assert!(
            Arcs::parse_with(&long, &Limits::UNLIMITED).is_ok()
        );

        let mut arcs = vec![Arc::from(1u8), Arc::from(2u8)];
        arcs.extend((0..400).map(|_| Arc::from(1u32 << 20)));
        assert_eq!(
            Arcs::from_vec(arcs.clone()), Err(ParseError::TooLong)
        );
        assert!(Arcs::from_vec_with(arcs, &Limits::UNLIMITED).is_ok());

        // 1024 octets exactly is still fine.
        let exact = format!("1.2{}", ".1".repeat(1023));
        assert!(parse(&exact).is_ok());
        let over = format!("1.2{}", ".1".repeat(1024));
        assert_eq!(parse(&over), Err(ParseError::TooLong));
    }

    #[test]
    fn from_vec() {
        let arcs = Arcs::from_vec(
            vec![Arc::from(2u8), Arc::from(100u8), Arc::from(3u8)]
        ).unwrap();
        assert_eq!(arcs.len(), 3);
        assert_eq!(*arcs.first(), Arc::from(2u8));
        assert_eq!(*arcs.second(), Arc::from(100u8));
        assert_eq!(arcs.to_string(), "2.100.3");
        assert_eq!(
            Arcs::from_vec(vec![Arc::from(1u8)]),
            Err(ParseError::TooFewArcs)
        );
        assert_eq!(
            Arcs::from_vec(vec![Arc::from(0u8), Arc::from(40u8)]),
            Err(ParseError::SecondArcOutOfRange)
        );
    }

    #[test]
    fn ordering() {
        assert!(parse("1.2.9").unwrap() < parse("1.2.10").unwrap());
        assert!(parse("1.2").unwrap() < parse("1.2.0").unwrap());
        assert!(parse("1.39.5").unwrap() < parse("2.0").unwrap());
        assert!(
            parse("1.2.840").unwrap().starts_with(&parse("1.2").unwrap())
        );
        assert!(
            !parse("1.2").unwrap().starts_with(&parse("1.2.840").unwrap())
        );
    }
}
