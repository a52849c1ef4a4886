//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that implements object identifiers,
//! a construct used by ASN.1 to uniquely identify all sorts of things. The
//! type is also re-exported at the top-level.
//!
//! [`Oid`]: struct.Oid.html

use std::{fmt, slice};
use std::str::FromStr;
use bytes::Bytes;
use crate::arc::Arc;
use crate::arcs::Arcs;
use crate::codec;
use crate::config::Limits;
use crate::error::{DecodeError, ParseError};


//------------ Oid -----------------------------------------------------------

/// An object identifier.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’. In DER,
/// they are encoded as a sequence of base-128 integers.
///
/// Values of this type keep the individual arcs rather than the encoded
/// form, so they can be converted into either representation. Both
/// conversions are canonical: a value has exactly one text form and
/// exactly one encoding, and parsing or decoding only accepts these.
///
/// Object identifiers are equal if all their arcs are equal. They are
/// ordered arc by arc with an identifier sorting before all identifiers
/// it is a prefix of.
///
/// Only the contents octets are handled here. The caller is responsible
/// for the tag (`0x06`) and length octets.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Oid {
    arcs: Arcs,
}

impl Oid {
    /// Creates an object identifier from a validated arc sequence.
    pub fn from_arcs(arcs: Arcs) -> Self {
        Oid { arcs }
    }

    /// Parses the dotted-decimal form subject to the given limits.
    pub fn parse_with(s: &str, limits: &Limits) -> Result<Self, ParseError> {
        Arcs::parse_with(s, limits).map(Self::from_arcs)
    }

    /// Decodes an object identifier from its DER contents octets.
    ///
    /// Uses the default limits. See [`from_der_with`] for choosing them
    /// explicitly.
    ///
    /// [`from_der_with`]: #method.from_der_with
    pub fn from_der(octets: &[u8]) -> Result<Self, DecodeError> {
        codec::decode(octets).map(Self::from_arcs)
    }

    /// Decodes an object identifier subject to the given limits.
    pub fn from_der_with(
        octets: &[u8], limits: &Limits
    ) -> Result<Self, DecodeError> {
        codec::decode_with(octets, limits).map(Self::from_arcs)
    }

    /// Returns the DER contents octets of the object identifier.
    pub fn to_der(&self) -> Bytes {
        codec::encode(&self.arcs)
    }

    /// Returns the number of contents octets `to_der` will produce.
    pub fn encoded_len(&self) -> usize {
        codec::encoded_len(&self.arcs)
    }
}


/// # Access to Arcs
///
impl Oid {
    /// Returns the arcs of the object identifier.
    pub fn arcs(&self) -> &Arcs {
        &self.arcs
    }

    /// Returns an iterator over the arcs.
    pub fn iter(&self) -> slice::Iter<Arc> {
        self.arcs.iter()
    }

    /// Returns whether this object identifier lives below `prefix`.
    ///
    /// Every object identifier starts with itself.
    pub fn starts_with(&self, prefix: &Oid) -> bool {
        self.arcs.starts_with(&prefix.arcs)
    }

    /// Converts the object identifier into its arcs.
    pub fn into_arcs(self) -> Arcs {
        self.arcs
    }
}


//--- From and FromStr

impl From<Arcs> for Oid {
    fn from(arcs: Arcs) -> Self {
        Self::from_arcs(arcs)
    }
}

impl FromStr for Oid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Arcs::from_str(s).map(Self::from_arcs)
    }
}


//--- AsRef

impl AsRef<Arcs> for Oid {
    fn as_ref(&self) -> &Arcs {
        &self.arcs
    }
}


//--- Display

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.arcs, f)
    }
}


//============ Tests =========================================================
