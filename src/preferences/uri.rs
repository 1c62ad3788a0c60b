//! URI references for stored locations
//!
//! A stored location is either an absolute URI (`content://...`,
//! `file:///...`) or a relative reference such as a bare filesystem path.

use std::fmt;
use std::str::FromStr;

use url::{ParseError, Url};

/// An absolute URI or a relative URI reference
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UriRef {
    Absolute(Url),
    Relative(String),
}

impl UriRef {
    /// Parse a URI reference, returning the reason when it is not one
    pub fn parse(input: &str) -> Result<Self, String> {
        match Url::parse(input) {
            Ok(url) => Ok(Self::Absolute(url)),
            Err(ParseError::RelativeUrlWithoutBase) => {
                validate_relative(input)?;
                Ok(Self::Relative(input.to_string()))
            }
            Err(e) => Err(e.to_string()),
        }
    }

    /// Canonical string form, as written to the store
    pub fn as_str(&self) -> &str {
        match self {
            Self::Absolute(url) => url.as_str(),
            Self::Relative(s) => s,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Absolute(url) => Some(url),
            Self::Relative(_) => None,
        }
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, Self::Relative(_))
    }
}

impl From<Url> for UriRef {
    fn from(url: Url) -> Self {
        Self::Absolute(url)
    }
}

impl FromStr for UriRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// A relative reference uses only RFC 3986 characters. A colon in the first
// segment would make it a scheme.
fn validate_relative(input: &str) -> Result<(), String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(format!("incomplete percent-encoding at offset {}", i));
            }
            i += 3;
            continue;
        }
        if !is_uri_char(b) {
            return Err(format!(
                "character {:?} is not allowed in a URI reference",
                char::from(b)
            ));
        }
        i += 1;
    }

    let first_segment = input.split(['/', '?', '#']).next().unwrap_or_default();
    if first_segment.contains(':') {
        return Err(format!("'{}' is not a valid scheme", first_segment));
    }

    Ok(())
}

fn is_uri_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"-._~:/?#[]@!$&'()*+,;=".contains(&b)
}
