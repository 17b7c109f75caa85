//! A tagged payload for trees that store more than a plain counter.
//!
//! # Examples
//!
//! ```
//! use assoc::content::Content;
//! use assoc::tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert('n', Content::Integer(42));
//! tree.insert('s', Content::from("hello"));
//!
//! assert_eq!(tree.search('n').and_then(Content::as_integer), Some(42));
//! assert_eq!(tree.search('s').map(ToString::to_string), Some("hello".to_string()));
//! ```

use std::fmt;

/// A value of one of a few primitive types, tagged with which one it is.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// A signed integer.
    Integer(i32),
    /// A floating point number.
    Float(f64),
    /// A single character.
    Char(char),
    /// An owned string.
    String(String),
}

impl Content {
    /// The integer held by this content, if it is [`Content::Integer`].
    pub fn as_integer(&self) -> Option<i32> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::String(_) => "string",
        }
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Char(c) => write!(f, "{}", c),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<i32> for Content {
    fn from(i: i32) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Content {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<char> for Content {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}
