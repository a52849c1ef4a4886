//! UTF8 strings.

use std::{fmt, str};
use bytes::Bytes;
use crate::error::DecodeError;


//------------ Utf8String ----------------------------------------------------

/// The contents of a UTF8String value.
///
/// This character string allows all Unicode code points. It represents them
/// as a sequence of octets according to the UTF-8 encoding defined in
/// [RFC 3629]. Since that is also how Rust represents strings, the contents
/// octets and the text are one and the same and conversion between them
/// is free once the octets have been checked.
///
/// As with all types in this crate, tag and length octets are left to the
/// caller.
///
/// [RFC 3629]: https://tools.ietf.org/html/rfc3629
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Utf8String {
    /// The octets of the string.
    ///
    /// These are guaranteed to be valid UTF-8.
    octets: Bytes,
}

impl Utf8String {
    /// Creates a value from text.
    pub fn from_text(text: &str) -> Self {
        Utf8String { octets: Bytes::copy_from_slice(text.as_bytes()) }
    }

    /// Creates a value from contents octets.
    ///
    /// Returns an error if the octets are not valid UTF-8.
    pub fn from_bytes(
        octets: impl Into<Bytes>
    ) -> Result<Self, DecodeError> {
        let octets = octets.into();
        if str::from_utf8(octets.as_ref()).is_err() {
            xerr!(return Err(DecodeError::InvalidUtf8))
        }
        Ok(Utf8String { octets })
    }

    /// Returns the text of the string.
    pub fn as_str(&self) -> &str {
        // Safety: The octets have been checked upon creation.
        unsafe { str::from_utf8_unchecked(self.octets.as_ref()) }
    }

    /// Returns an owned copy of the text.
    pub fn to_text(&self) -> String {
        self.as_str().into()
    }

    /// Returns the contents octets.
    pub fn as_bytes(&self) -> &[u8] {
        self.octets.as_ref()
    }

    /// Converts the value into its contents octets.
    pub fn into_bytes(self) -> Bytes {
        self.octets
    }

    /// Returns the number of contents octets.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    /// Returns whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }
}


//--- From

impl<'a> From<&'a str> for Utf8String {
    fn from(text: &'a str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for Utf8String {
    fn from(text: String) -> Self {
        Utf8String { octets: text.into_bytes().into() }
    }
}


//--- AsRef

impl AsRef<str> for Utf8String {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}


//--- Display and Debug

impl fmt::Display for Utf8String {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Utf8String {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Utf8String").field(&self.as_str()).finish()
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_bytes_good() {
        let s = Utf8String::from_bytes(
            &b"gr\xC3\xBC\xC3\x9Fe \xE2\x82\xAC \xF0\x9F\xA6\x80"[..]
        ).unwrap();
        assert_eq!(s.to_text(), "grüße € 🦀");
        assert_eq!(s.len(), 16);
        assert_eq!(Utf8String::from_bytes(Bytes::new()).unwrap().as_str(), "");
    }

    #[test]
    fn from_bytes_bad() {
        for octets in &[
            &b"\x80"[..],
            &b"ab\xC3"[..],
            &b"\xE2\x82"[..],
            &b"\xC0\xAF"[..],
            &b"\xED\xA0\x80"[..],
            &b"\xF4\x90\x80\x80"[..],
            &b"\xFF"[..],
        ] {
            assert_eq!(
                Utf8String::from_bytes(*octets),
                Err(DecodeError::InvalidUtf8)
            );
        }
    }

    #[test]
    fn from_text() {
        let s = Utf8String::from_text("Zürich");
        assert_eq!(s.as_bytes(), b"Z\xC3\xBCrich");
        assert_eq!(s, Utf8String::from(String::from("Zürich")));
        assert_eq!(s, Utf8String::from("Zürich"));
        assert_eq!(s.to_string(), "Zürich");
        assert_eq!(format!("{:?}", s), "Utf8String(\"Zürich\")");
        assert_eq!(s.clone().into_bytes().as_ref(), b"Z\xC3\xBCrich");
        assert!(Utf8String::from_text("").is_empty());
    }
}
