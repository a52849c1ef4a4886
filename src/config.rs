//! Configuration.
//!
//! Object identifiers and their encoding are unbounded in size. When
//! handling untrusted input, this is an invitation to exhaust memory, so
//! all parsing and decoding happens subject to a set of [`Limits`]. The
//! limits can be given explicitly or taken from the environment.

use std::env;
use std::str::FromStr;


//------------ property ------------------------------------------------------

/// Looks up a configuration property.
///
/// Properties are taken from the environment variable `name`. If it is
/// not set or not valid Unicode, `default` is returned instead.
pub fn property(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.into())
}

/// Looks up a property via `lookup` and parses it into some type.
///
/// Falls back to `default` if the property is missing or fails to parse.
fn parsed_property<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T
) -> T {
    match lookup(name) {
        Some(value) => value.trim().parse().unwrap_or(default),
        None => default,
    }
}


//------------ Limits --------------------------------------------------------

/// Bounds applied when parsing or decoding object identifiers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Limits {
    /// The maximum number of contents octets accepted by the decoder.
    pub max_octets: usize,

    /// The maximum length in bytes of the dotted-decimal text form.
    pub max_text_len: usize,
}

impl Limits {
    /// The environment variable overriding `max_octets`.
    pub const MAX_OCTETS_VAR: &'static str = "DERID_MAX_OID_OCTETS";

    /// The environment variable overriding `max_text_len`.
    pub const MAX_TEXT_VAR: &'static str = "DERID_MAX_OID_TEXT";

    /// The default limits.
    ///
    /// Real-world object identifiers are rarely longer than a few dozen
    /// octets, so this leaves plenty of room.
    pub const DEFAULT: Limits = Limits {
        max_octets: 1024,
        max_text_len: 4096,
    };

    /// No limits at all.
    ///
    /// Only use this for input you trust.
    pub const UNLIMITED: Limits = Limits {
        max_octets: usize::MAX,
        max_text_len: usize::MAX,
    };

    /// Creates limits from the environment.
    ///
    /// Each limit is taken from its environment variable if present and
    /// a valid integer. Otherwise the default is used.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Creates limits from properties provided by `lookup`.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Limits {
            max_octets: parsed_property(
                &lookup, Self::MAX_OCTETS_VAR, Self::DEFAULT.max_octets
            ),
            max_text_len: parsed_property(
                &lookup, Self::MAX_TEXT_VAR, Self::DEFAULT.max_text_len
            ),
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    fn lookup<'a>(
        vars: &'a [(&'a str, &'a str)]
    ) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| {
            vars.iter().find(|item| item.0 == name).map(|item| item.1.into())
        }
    }

    #[test]
    fn property_default() {
        assert_eq!(
            property("DERID_TEST_SURELY_NOT_SET", "fallback"),
            "fallback"
        );
        env::set_var("DERID_TEST_PROPERTY_DEFAULT", "set");
        assert_eq!(
            property("DERID_TEST_PROPERTY_DEFAULT", "fallback"), "set"
        );
    }

    #[test]
    fn parsed_property_fallback() {
        let vars = [("NUMBER", " 17 "), ("GARBAGE", "many")];
        let vars = lookup(&vars);
        assert_eq!(parsed_property(&vars, "NUMBER", 4usize), 17);
        assert_eq!(parsed_property(&vars, "GARBAGE", 4usize), 4);
        assert_eq!(parsed_property(&vars, "MISSING", 4usize), 4);
    }

    #[test]
    fn from_lookup() {
        let vars = [
            (Limits::MAX_OCTETS_VAR, "64"),
            (Limits::MAX_TEXT_VAR, "-1"),
        ];
        assert_eq!(
            Limits::from_lookup(lookup(&vars)),
            Limits { max_octets: 64, max_text_len: 4096 }
        );
        assert_eq!(Limits::from_lookup(lookup(&[])), Limits::DEFAULT);
    }

    #[test]
    fn defaults() {
        assert_eq!(Limits::default(), Limits::DEFAULT);
        assert!(Limits::UNLIMITED.max_octets > Limits::DEFAULT.max_octets);
    }
}
