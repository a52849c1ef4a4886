//! Algorithm identifiers.

use std::fmt;
use std::str::FromStr;
use bytes::Bytes;
use crate::config::Limits;
use crate::error::{DecodeError, ParseError};
use crate::oid::Oid;


//------------ AlgorithmIdentifier -------------------------------------------

/// An object identifier naming an algorithm.
///
/// The value is exactly the object identifier it wraps, both in text form
/// and in its encoding. Having a separate type keeps identifiers of
/// algorithms apart from those used for other purposes. There is
/// deliberately no conversion from or dereferencing into [`Oid`], so
/// going from one to the other always needs to be spelled out.
///
/// Algorithm parameters are not supported.
///
/// [`Oid`]: ../oid/struct.Oid.html
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AlgorithmIdentifier {
    algorithm: Oid,
}

impl AlgorithmIdentifier {
    /// Creates an algorithm identifier from an object identifier.
    pub fn new(algorithm: Oid) -> Self {
        AlgorithmIdentifier { algorithm }
    }

    /// Decodes the identifier from the DER contents octets of its OID.
    pub fn from_der(octets: &[u8]) -> Result<Self, DecodeError> {
        Oid::from_der(octets).map(Self::new)
    }

    /// Decodes the identifier subject to the given limits.
    pub fn from_der_with(
        octets: &[u8], limits: &Limits
    ) -> Result<Self, DecodeError> {
        Oid::from_der_with(octets, limits).map(Self::new)
    }

    /// Returns the DER contents octets of the algorithm’s OID.
    pub fn to_der(&self) -> Bytes {
        self.algorithm.to_der()
    }

    /// Returns the object identifier of the algorithm.
    pub fn algorithm(&self) -> &Oid {
        &self.algorithm
    }

    /// Converts the value into the object identifier of the algorithm.
    pub fn into_oid(self) -> Oid {
        self.algorithm
    }
}


//--- FromStr and Display

impl FromStr for AlgorithmIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Oid::from_str(s).map(Self::new)
    }
}

impl fmt::Display for AlgorithmIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.algorithm, f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn same_value_as_oid() {
        let alg = AlgorithmIdentifier::from_str("2.16.840.1.101.3.4.2.1")
            .unwrap();
        assert_eq!(
            alg.to_der().as_ref(),
            b"\x60\x86\x48\x01\x65\x03\x04\x02\x01"
        );
        assert_eq!(AlgorithmIdentifier::from_der(&alg.to_der()).unwrap(), alg);
        assert_eq!(alg.to_string(), "2.16.840.1.101.3.4.2.1");
        assert_eq!(
            *alg.algorithm(),
            Oid::from_str("2.16.840.1.101.3.4.2.1").unwrap()
        );
        assert_eq!(alg.clone().into_oid(), *alg.algorithm());
    }

    #[test]
    fn errors_pass_through() {
        assert_eq!(
            AlgorithmIdentifier::from_str("1.40"),
            Err(ParseError::SecondArcOutOfRange)
        );
        assert_eq!(
            AlgorithmIdentifier::from_der(b"\x2A\x86"),
            Err(DecodeError::Truncated)
        );
        assert_eq!(
            AlgorithmIdentifier::from_der_with(b"\x2A\x01", &Limits {
                max_octets: 1, .. Limits::DEFAULT
            }),
            Err(DecodeError::TooLong)
        );
    }
}
