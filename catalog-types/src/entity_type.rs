//! The closed set of entity kinds known to the catalog.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Discriminant tag of a catalog entity.
///
/// Serialized with the GraphQL enum names (`DATASET`, `CORP_USER`, ...) so
/// values round-trip through API responses untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "DATASET")]
    Dataset,
    #[serde(rename = "DASHBOARD")]
    Dashboard,
    #[serde(rename = "CHART")]
    Chart,
    #[serde(rename = "CORP_USER")]
    CorpUser,
    #[serde(rename = "CORP_GROUP")]
    CorpGroup,
    #[serde(rename = "TAG")]
    Tag,
    #[serde(rename = "DATA_FLOW")]
    DataFlow,
    #[serde(rename = "DATA_JOB")]
    DataJob,
    #[serde(rename = "GLOSSARY_TERM")]
    GlossaryTerm,
    #[serde(rename = "GLOSSARY_NODE")]
    GlossaryNode,
    #[serde(rename = "MLFEATURE")]
    MlFeature,
    #[serde(rename = "MLPRIMARY_KEY")]
    MlPrimaryKey,
    #[serde(rename = "MLFEATURE_TABLE")]
    MlFeatureTable,
    #[serde(rename = "MLMODEL")]
    MlModel,
    #[serde(rename = "MLMODEL_GROUP")]
    MlModelGroup,
    #[serde(rename = "DOMAIN")]
    Domain,
    #[serde(rename = "CONTAINER")]
    Container,
    #[serde(rename = "ROLE")]
    Role,
    #[serde(rename = "DATA_PLATFORM")]
    DataPlatform,
    #[serde(rename = "DATA_PRODUCT")]
    DataProduct,
    #[serde(rename = "DATA_PLATFORM_INSTANCE")]
    DataPlatformInstance,
    #[serde(rename = "ER_MODEL_RELATIONSHIP")]
    ErModelRelationship,
    #[serde(rename = "BUSINESS_ATTRIBUTE")]
    BusinessAttribute,
    #[serde(rename = "SCHEMA_FIELD")]
    SchemaField,
    #[serde(rename = "RESTRICTED")]
    Restricted,
}

impl EntityType {
    /// Number of entity kinds.
    pub const COUNT: usize = 25;

    /// Every entity kind, in declaration order.
    pub const ALL: [EntityType; Self::COUNT] = [
        Self::Dataset,
        Self::Dashboard,
        Self::Chart,
        Self::CorpUser,
        Self::CorpGroup,
        Self::Tag,
        Self::DataFlow,
        Self::DataJob,
        Self::GlossaryTerm,
        Self::GlossaryNode,
        Self::MlFeature,
        Self::MlPrimaryKey,
        Self::MlFeatureTable,
        Self::MlModel,
        Self::MlModelGroup,
        Self::Domain,
        Self::Container,
        Self::Role,
        Self::DataPlatform,
        Self::DataProduct,
        Self::DataPlatformInstance,
        Self::ErModelRelationship,
        Self::BusinessAttribute,
        Self::SchemaField,
        Self::Restricted,
    ];

    /// Dense index in `0..COUNT`, usable as an array slot.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the GraphQL enum name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dataset => "DATASET",
            Self::Dashboard => "DASHBOARD",
            Self::Chart => "CHART",
            Self::CorpUser => "CORP_USER",
            Self::CorpGroup => "CORP_GROUP",
            Self::Tag => "TAG",
            Self::DataFlow => "DATA_FLOW",
            Self::DataJob => "DATA_JOB",
            Self::GlossaryTerm => "GLOSSARY_TERM",
            Self::GlossaryNode => "GLOSSARY_NODE",
            Self::MlFeature => "MLFEATURE",
            Self::MlPrimaryKey => "MLPRIMARY_KEY",
            Self::MlFeatureTable => "MLFEATURE_TABLE",
            Self::MlModel => "MLMODEL",
            Self::MlModelGroup => "MLMODEL_GROUP",
            Self::Domain => "DOMAIN",
            Self::Container => "CONTAINER",
            Self::Role => "ROLE",
            Self::DataPlatform => "DATA_PLATFORM",
            Self::DataProduct => "DATA_PRODUCT",
            Self::DataPlatformInstance => "DATA_PLATFORM_INSTANCE",
            Self::ErModelRelationship => "ER_MODEL_RELATIONSHIP",
            Self::BusinessAttribute => "BUSINESS_ATTRIBUTE",
            Self::SchemaField => "SCHEMA_FIELD",
            Self::Restricted => "RESTRICTED",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownEntityType(s.to_string()))
    }
}
