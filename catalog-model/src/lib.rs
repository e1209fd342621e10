//! Entity model for the catalog front-end.
//!
//! Defines the types every entity handler works with:
//! - [`EntityData`]: an entity record as returned by the GraphQL layer
//! - [`SearchResult`]: an entity plus the fields a search matched on
//! - [`EntityHandler`]: the capability interface implemented once per [`EntityType`]
//! - render descriptors ([`Icon`], [`Preview`], [`ProfileLayout`]) that the
//!   rendering layer turns into widgets
//!
//! Handlers never fetch data. Callers query the API, wrap the response in
//! [`EntityData`] and hand it to the handler for the entity's type.
//!
//! [`EntityType`]: catalog_types::EntityType

mod entity;
mod handler;
mod properties;
mod render;

pub use entity::{EntityData, MatchedField, SearchResult};
pub use handler::EntityHandler;
pub use properties::GenericEntityProperties;
pub use render::{
    EntityActionItem, EntityMenuItem, Icon, IconStyle, Preview, PreviewType, ProfileLayout,
    ProfileTab, SidebarSection, TabDisplay, TabKind,
};
