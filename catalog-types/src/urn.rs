//! Entity identifiers.
//!
//! Every catalog entity is addressed by a URN of the form
//! `urn:li:<kind>:<key>`, where the key may itself contain colons and
//! parenthesised tuples (`urn:li:dataset:(urn:li:dataPlatform:hive,db.t,PROD)`).

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PREFIX: &str = "urn:li:";

/// A validated entity URN.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Urn(String);

impl Urn {
    /// Parses a URN, rejecting a missing prefix, kind, or key.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let rest = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| Error::InvalidUrn(s.to_string()))?;
        let (kind, key) = rest
            .split_once(':')
            .ok_or_else(|| Error::InvalidUrn(s.to_string()))?;
        if kind.is_empty() || key.is_empty() {
            return Err(Error::InvalidUrn(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The entity-kind segment (`dataset`, `corpuser`, `glossaryTerm`, ...).
    pub fn kind(&self) -> &str {
        let rest = &self.0[PREFIX.len()..];
        rest.split_once(':').map_or(rest, |(kind, _)| kind)
    }

    /// Everything after the kind segment.
    pub fn key(&self) -> &str {
        let rest = &self.0[PREFIX.len()..];
        rest.split_once(':').map_or("", |(_, key)| key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Urn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Urn {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Urn> for String {
    fn from(urn: Urn) -> Self {
        urn.0
    }
}

impl AsRef<str> for Urn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
