//! Object identifiers and UTF8String contents in DER.
//!
//! This crate implements the contents octets of two ASN.1 universal types
//! as encoded by the Distinguished Encoding Rules: object identifiers and
//! UTF8String. The tag and length octets surrounding these are left to
//! whatever TLV machinery the caller uses.
//!
//! The central type is [`Oid`]. It can be created from its dotted-decimal
//! text form or from DER contents octets and converted back into either.
//! Both directions are validated so that every value has exactly one
//! representation:
//!
//! ```
//! use derid::Oid;
//!
//! let oid: Oid = "1.2.840.113549.1.1.1".parse().unwrap();
//! assert_eq!(
//!     oid.to_der().as_ref(),
//!     b"\x2a\x86\x48\x86\xf7\x0d\x01\x01\x01"
//! );
//! assert_eq!(Oid::from_der(&oid.to_der()).unwrap(), oid);
//! ```
//!
//! [`AlgorithmIdentifier`] wraps an object identifier that names an
//! algorithm, and [`Utf8String`] holds the contents of a UTF8String value.

pub use self::algorithm::AlgorithmIdentifier;
pub use self::arc::Arc;
pub use self::arcs::Arcs;
pub use self::config::Limits;
pub use self::error::{DecodeError, ParseError};
pub use self::oid::Oid;
pub use self::string::Utf8String;

#[macro_use] pub mod debug;

pub mod algorithm;
pub mod codec;
pub mod config;
pub mod error;
pub mod oid;
pub mod string;

mod arc;
mod arcs;
