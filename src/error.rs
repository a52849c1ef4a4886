//! Error Handling.
//!
//! There are two error types: [`ParseError`] for object identifiers given
//! in text form and [`DecodeError`] for encoded contents octets. Both only
//! tell what went wrong, not where. Enable the `extra-debug` feature if
//! you need to find out.

use std::{error, fmt};


//------------ ParseError ----------------------------------------------------

/// An error happened while parsing the text form of an object identifier.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ParseError {
    /// The text was empty.
    Empty,

    /// A component was not a canonical decimal integer.
    ///
    /// The variant contains the offending component which may be empty
    /// if there were superfluous dots.
    InvalidArc(String),

    /// There were fewer than two components.
    TooFewArcs,

    /// The first component was something other than 0, 1, or 2.
    FirstArcOutOfRange,

    /// The second component was larger than 39 while the first was 0 or 1.
    SecondArcOutOfRange,

    /// The text or its encoding exceeded the configured maximum length.
    TooLong,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::Empty => f.write_str("empty object identifier"),
            ParseError::InvalidArc(ref arc) => {
                write!(f, "invalid component '{}'", arc)
            }
            ParseError::TooFewArcs => {
                f.write_str("at least two components required")
            }
            ParseError::FirstArcOutOfRange => {
                f.write_str("first component can only be 0, 1, or 2")
            }
            ParseError::SecondArcOutOfRange => {
                f.write_str(
                    "second component for 0. and 1. must be less than 40"
                )
            }
            ParseError::TooLong => f.write_str("object identifier too long"),
        }
    }
}

impl error::Error for ParseError { }


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding contents octets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DecodeError {
    /// There were no contents octets at all.
    Empty,

    /// The last octet had its continuation bit set.
    Truncated,

    /// A subidentifier started with a leading zero group.
    NonMinimal,

    /// The decoded components do not form a valid object identifier.
    InvalidStructure,

    /// The octets of a UTF8String were not valid UTF-8.
    InvalidUtf8,

    /// The contents exceeded the configured maximum length.
    TooLong,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            DecodeError::Empty => "empty contents",
            DecodeError::Truncated => "unexpected end of data",
            DecodeError::NonMinimal => "non-minimal subidentifier encoding",
            DecodeError::InvalidStructure => "invalid object identifier",
            DecodeError::InvalidUtf8 => "invalid UTF-8",
            DecodeError::TooLong => "contents too long",
        })
    }
}

impl error::Error for DecodeError { }


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ParseError::InvalidArc("01".into()).to_string(),
            "invalid component '01'"
        );
        assert_eq!(
            DecodeError::Truncated.to_string(),
            "unexpected end of data"
        );
    }
}
