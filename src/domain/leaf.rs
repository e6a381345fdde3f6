// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal values stored at the ends of tree paths.
//!
//! A [`Leaf`] is an opaque scalar: the codec never looks inside one, it only
//! moves leaves between nested and flat layouts. The accessors here exist for
//! callers that read leaves back out of a flattened map.

use crate::domain::errors::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scalar value at the end of a path.
///
/// `Null` gives values with no content a total classification, so a null read
/// from an external format is carried through expand and flatten like any other
/// leaf.
///
/// # Examples
///
/// ```
/// use dotcfg::domain::Leaf;
///
/// let port = Leaf::from(8080);
/// assert_eq!(port.as_i64("api.port").unwrap(), 8080);
///
/// let flag = Leaf::from("yes");
/// assert!(flag.as_bool("api.debug").unwrap());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaf {
    /// An absent or null value
    Null,
    /// A boolean
    Bool(bool),
    /// A signed integer
    Integer(i64),
    /// A floating point number
    Float(f64),
    /// A string
    String(String),
}

impl Leaf {
    /// Returns a short description of the leaf's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Leaf::Null => "null",
            Leaf::Bool(_) => "a boolean",
            Leaf::Integer(_) => "an integer",
            Leaf::Float(_) => "a float",
            Leaf::String(_) => "a string",
        }
    }

    /// Returns `true` for [`Leaf::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Leaf::Null)
    }

    /// Returns `true` if this is the empty string.
    ///
    /// Expand treats an empty string as a request for an empty placeholder node.
    pub fn is_empty_string(&self) -> bool {
        matches!(self, Leaf::String(s) if s.is_empty())
    }

    /// Returns the string content, if this leaf is a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::domain::Leaf;
    ///
    /// assert_eq!(Leaf::from("localhost").as_str(), Some("localhost"));
    /// assert_eq!(Leaf::from(1).as_str(), None);
    /// ```
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Leaf::String(s) => Some(s),
            _ => None,
        }
    }

    /// Reads the leaf as a boolean.
    ///
    /// String leaves are parsed leniently (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    ///
    /// Integers `0` and `1` are accepted too. `key` is only used for error reporting.
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self {
            Leaf::Bool(b) => Ok(*b),
            Leaf::Integer(0) => Ok(false),
            Leaf::Integer(1) => Ok(true),
            Leaf::String(s) => match s.to_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(true),
                "false" | "no" | "0" | "off" => Ok(false),
                _ => s
                    .parse::<bool>()
                    .map_err(|e| CodecError::from_parse_bool_error(key.to_string(), e)),
            },
            other => Err(CodecError::kind_mismatch(key, "bool", other.kind())),
        }
    }

    /// Reads the leaf as an `i64`, parsing string leaves.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::domain::Leaf;
    ///
    /// assert_eq!(Leaf::from("42").as_i64("answer").unwrap(), 42);
    /// assert!(Leaf::from(true).as_i64("answer").is_err());
    /// ```
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        match self {
            Leaf::Integer(n) => Ok(*n),
            Leaf::String(s) => s
                .parse::<i64>()
                .map_err(|e| CodecError::from_parse_int_error(key.to_string(), e)),
            other => Err(CodecError::kind_mismatch(key, "i64", other.kind())),
        }
    }

    /// Reads the leaf as a `u64`, parsing string leaves.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        match self {
            Leaf::Integer(n) => u64::try_from(*n).map_err(|e| CodecError::TypeConversionError {
                key: key.to_string(),
                target_type: "u64".to_string(),
                source: Box::new(e),
            }),
            Leaf::String(s) => s
                .parse::<u64>()
                .map_err(|e| CodecError::from_parse_int_error(key.to_string(), e)),
            other => Err(CodecError::kind_mismatch(key, "u64", other.kind())),
        }
    }

    /// Reads the leaf as an `f64`. Integers widen, strings are parsed.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        match self {
            Leaf::Float(f) => Ok(*f),
            Leaf::Integer(n) => Ok(*n as f64),
            Leaf::String(s) => s
                .parse::<f64>()
                .map_err(|e| CodecError::from_parse_float_error(key.to_string(), e)),
            other => Err(CodecError::kind_mismatch(key, "f64", other.kind())),
        }
    }

    /// Parses the leaf's textual form into any type that implements `FromStr`.
    ///
    /// Non-string leaves are rendered with `Display` first, so `Leaf::Integer(80)`
    /// parses as `"80"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dotcfg::domain::Leaf;
    /// use std::net::IpAddr;
    ///
    /// let ip: IpAddr = Leaf::from("127.0.0.1").parse("api.bind").unwrap();
    /// assert_eq!(ip.to_string(), "127.0.0.1");
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.to_string()
            .parse::<T>()
            .map_err(|e| CodecError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for Leaf {
    fn from(s: String) -> Self {
        Leaf::String(s)
    }
}

impl From<&str> for Leaf {
    fn from(s: &str) -> Self {
        Leaf::String(s.to_string())
    }
}

impl From<bool> for Leaf {
    fn from(b: bool) -> Self {
        Leaf::Bool(b)
    }
}

impl From<i32> for Leaf {
    fn from(n: i32) -> Self {
        Leaf::Integer(i64::from(n))
    }
}

impl From<u32> for Leaf {
    fn from(n: u32) -> Self {
        Leaf::Integer(i64::from(n))
    }
}

impl From<i64> for Leaf {
    fn from(n: i64) -> Self {
        Leaf::Integer(n)
    }
}

impl From<f64> for Leaf {
    fn from(f: f64) -> Self {
        Leaf::Float(f)
    }
}

impl<T: Into<Leaf>> From<Option<T>> for Leaf {
    fn from(value: Option<T>) -> Self {
        value.map_or(Leaf::Null, Into::into)
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Null => Ok(()),
            Leaf::Bool(b) => write!(f, "{}", b),
            Leaf::Integer(n) => write!(f, "{}", n),
            Leaf::Float(x) => write!(f, "{}", x),
            Leaf::String(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_leaf_from_conversions() {
        assert_eq!(Leaf::from("a"), Leaf::String("a".to_string()));
        assert_eq!(Leaf::from("a".to_string()), Leaf::String("a".to_string()));
        assert_eq!(Leaf::from(true), Leaf::Bool(true));
        assert_eq!(Leaf::from(8080), Leaf::Integer(8080));
        assert_eq!(Leaf::from(7u32), Leaf::Integer(7));
        assert_eq!(Leaf::from(-3i64), Leaf::Integer(-3));
        assert_eq!(Leaf::from(0.5), Leaf::Float(0.5));
        assert_eq!(Leaf::from(None::<i64>), Leaf::Null);
        assert_eq!(Leaf::from(Some("x")), Leaf::from("x"));
    }

    #[test]
    fn test_is_empty_string() {
        assert!(Leaf::from("").is_empty_string());
        assert!(!Leaf::from(" ").is_empty_string());
        assert!(!Leaf::Null.is_empty_string());
    }

    #[test]
    fn test_as_bool_variants() {
        for val in ["true", "True", "YES", "1", "on"] {
            assert!(Leaf::from(val).as_bool("k").unwrap(), "Failed for value: {}", val);
        }
        for val in ["false", "False", "NO", "0", "off"] {
            assert!(!Leaf::from(val).as_bool("k").unwrap(), "Failed for value: {}", val);
        }
        assert!(Leaf::from(true).as_bool("k").unwrap());
        assert!(Leaf::from(1).as_bool("k").unwrap());
        assert!(!Leaf::from(0).as_bool("k").unwrap());
    }

    #[test]
    fn test_as_bool_invalid() {
        assert!(Leaf::from("invalid").as_bool("k").is_err());
        assert!(Leaf::from(2).as_bool("k").is_err());
        assert!(Leaf::Null.as_bool("k").is_err());
    }

    #[test]
    fn test_as_i64() {
        assert_eq!(Leaf::from(42).as_i64("k").unwrap(), 42);
        assert_eq!(Leaf::from("-42").as_i64("k").unwrap(), -42);
        assert!(Leaf::from("2.5").as_i64("k").is_err());
        assert!(Leaf::from(2.5).as_i64("k").is_err());
    }

    #[test]
    fn test_as_u64() {
        assert_eq!(Leaf::from(42).as_u64("k").unwrap(), 42);
        assert_eq!(
            Leaf::from("18446744073709551615").as_u64("k").unwrap(),
            u64::MAX
        );
        assert!(Leaf::from(-1).as_u64("k").is_err());
        assert!(Leaf::from("-1").as_u64("k").is_err());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Leaf::from(2.5).as_f64("k").unwrap(), 2.5);
        assert_eq!(Leaf::from(2).as_f64("k").unwrap(), 2.0);
        assert_eq!(Leaf::from("-3.5").as_f64("k").unwrap(), -3.5);
        assert!(Leaf::from(false).as_f64("k").is_err());
    }

    #[test]
    fn test_kind_mismatch_names_key() {
        let err = Leaf::Null.as_i64("api.port").unwrap_err();
        assert!(err.to_string().contains("api.port"));
        assert!(err.to_string().contains("null"));
    }

    #[test]
    fn test_parse_custom_type() {
        let ip: IpAddr = Leaf::from("127.0.0.1").parse("k").unwrap();
        assert_eq!(ip.to_string(), "127.0.0.1");

        let port: u16 = Leaf::from(8080).parse("k").unwrap();
        assert_eq!(port, 8080);

        let bad: Result<IpAddr> = Leaf::from("not_an_ip").parse("k");
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Leaf::from("host").to_string(), "host");
        assert_eq!(Leaf::from(8080).to_string(), "8080");
        assert_eq!(Leaf::from(true).to_string(), "true");
        assert_eq!(Leaf::Null.to_string(), "");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Leaf::from("value");
        let mut copy = original.clone();
        if let Leaf::String(s) = &mut copy {
            s.push_str("-changed");
        }
        assert_eq!(original, Leaf::from("value"));
    }
}
