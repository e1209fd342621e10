//! Capabilities an entity kind may declare.
//!
//! Generic UI (batch actions, sidebars, selection modals) asks the registry
//! which kinds declare a capability instead of hard-coding type lists.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A named feature an entity kind may or may not support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    Owners,
    GlossaryTerms,
    Tags,
    Domains,
    Deprecation,
    SoftDelete,
    DataProducts,
    Roles,
    Lineage,
    Health,
    Test,
}

impl Capability {
    pub const ALL: [Capability; 11] = [
        Self::Owners,
        Self::GlossaryTerms,
        Self::Tags,
        Self::Domains,
        Self::Deprecation,
        Self::SoftDelete,
        Self::DataProducts,
        Self::Roles,
        Self::Lineage,
        Self::Health,
        Self::Test,
    ];

    /// Returns the kebab-case name used in config and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owners => "owners",
            Self::GlossaryTerms => "glossary-terms",
            Self::Tags => "tags",
            Self::Domains => "domains",
            Self::Deprecation => "deprecation",
            Self::SoftDelete => "soft-delete",
            Self::DataProducts => "data-products",
            Self::Roles => "roles",
            Self::Lineage => "lineage",
            Self::Health => "health",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| Error::UnknownCapability(s.to_string()))
    }
}

/// Set of capabilities declared by one entity handler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    declared: HashSet<Capability>,
}

impl CapabilitySet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability. Returns `false` if it was already present.
    pub fn insert(&mut self, capability: Capability) -> bool {
        self.declared.insert(capability)
    }

    pub fn contains(&self, capability: Capability) -> bool {
        self.declared.contains(&capability)
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.declared.iter().copied()
    }

    /// Capabilities in a stable order, for display.
    #[must_use]
    pub fn sorted(&self) -> Vec<Capability> {
        let mut caps: Vec<_> = self.iter().collect();
        caps.sort();
        caps
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self {
            declared: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[Capability; N]> for CapabilitySet {
    fn from(caps: [Capability; N]) -> Self {
        caps.into_iter().collect()
    }
}
