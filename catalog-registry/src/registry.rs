//! The entity registry.
//!
//! Handlers live in a fixed-size table indexed by [`EntityType::index`], so a
//! lookup is an array access and every type has at most one slot.

use crate::{DuplicatePolicy, RegistryConfig, RegistryError, RegistryResult};
use catalog_model::{
    EntityActionItem, EntityData, EntityHandler, GenericEntityProperties, Icon, IconStyle, Preview,
    PreviewType, ProfileLayout, SearchResult,
};
use catalog_types::{Capability, EntityType, Urn};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maps each [`EntityType`] to the one handler registered for it.
pub struct EntityRegistry {
    slots: [Option<Arc<dyn EntityHandler>>; EntityType::COUNT],
    /// Types in registration order.
    order: Vec<EntityType>,
    on_duplicate: DuplicatePolicy,
}

impl EntityRegistry {
    /// Creates an empty registry using the build's default duplicate policy.
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(on_duplicate: DuplicatePolicy) -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            order: Vec::with_capacity(EntityType::COUNT),
            on_duplicate,
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_policy(config.on_duplicate)
    }

    // ================================================================
    // Registration
    // ================================================================

    /// Registers `handler` under the type it declares.
    pub fn register<H>(&mut self, handler: H) -> RegistryResult<()>
    where
        H: EntityHandler + 'static,
    {
        self.register_shared(Arc::new(handler))
    }

    /// Registers an already shared handler.
    ///
    /// A second handler for the same type is rejected, or ignored with a
    /// warning under [`DuplicatePolicy::Warn`]. The first handler always stays.
    pub fn register_shared(&mut self, handler: Arc<dyn EntityHandler>) -> RegistryResult<()> {
        let entity_type = handler.entity_type();
        let slot = &mut self.slots[entity_type.index()];

        if slot.is_some() {
            return match self.on_duplicate {
                DuplicatePolicy::Reject => Err(RegistryError::DuplicateRegistration(entity_type)),
                DuplicatePolicy::Warn => {
                    warn!(entity_type = %entity_type, "Duplicate handler registration ignored");
                    Ok(())
                }
            };
        }

        *slot = Some(handler);
        self.order.push(entity_type);
        debug!(entity_type = %entity_type, "Entity handler registered");
        Ok(())
    }

    /// Fails with the first type in `required` that has no handler.
    pub fn ensure_registered(&self, required: &[EntityType]) -> RegistryResult<()> {
        match required.iter().find(|ty| !self.contains(**ty)) {
            Some(missing) => Err(RegistryError::NotRegistered(*missing)),
            None => Ok(()),
        }
    }

    // ================================================================
    // Lookup
    // ================================================================

    /// Returns the handler for `entity_type`.
    ///
    /// Every call for the same type returns the same `Arc`.
    pub fn get(&self, entity_type: EntityType) -> RegistryResult<&Arc<dyn EntityHandler>> {
        self.find(entity_type)
            .ok_or(RegistryError::NotRegistered(entity_type))
    }

    pub fn find(&self, entity_type: EntityType) -> Option<&Arc<dyn EntityHandler>> {
        self.slots[entity_type.index()].as_ref()
    }

    pub fn contains(&self, entity_type: EntityType) -> bool {
        self.slots[entity_type.index()].is_some()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered types in registration order.
    pub fn entity_types(&self) -> impl Iterator<Item = EntityType> + '_ {
        self.order.iter().copied()
    }

    /// Registered handlers in registration order.
    pub fn handlers(&self) -> impl Iterator<Item = &Arc<dyn EntityHandler>> + '_ {
        self.order
            .iter()
            .filter_map(|ty| self.slots[ty.index()].as_ref())
    }

    /// Types whose handler declares `capability`.
    pub fn get_types_with_supported_capabilities(&self, capability: Capability) -> BTreeSet<EntityType> {
        self.handlers()
            .filter(|h| h.supported_capabilities().contains(capability))
            .map(|h| h.entity_type())
            .collect()
    }

    /// Types that may be selected as targets of a header batch action.
    pub fn action_targets(&self, action: EntityActionItem) -> BTreeSet<EntityType> {
        self.get_types_with_supported_capabilities(action.target_capability())
    }

    pub fn search_entity_types(&self) -> Vec<EntityType> {
        self.types_where(|h| h.is_search_enabled())
    }

    pub fn browse_entity_types(&self) -> Vec<EntityType> {
        self.types_where(|h| h.is_browse_enabled())
    }

    pub fn lineage_entity_types(&self) -> Vec<EntityType> {
        self.types_where(|h| h.is_lineage_enabled())
    }

    fn types_where(&self, predicate: impl Fn(&dyn EntityHandler) -> bool) -> Vec<EntityType> {
        self.handlers()
            .filter(|h| predicate(Arc::as_ref(h)))
            .map(|h| h.entity_type())
            .collect()
    }

    /// Resolves a profile URL segment back to its type.
    pub fn type_from_path_name(&self, path_name: &str) -> Option<EntityType> {
        self.handlers()
            .find(|h| h.path_name() == path_name)
            .map(|h| h.entity_type())
    }

    // ================================================================
    // Delegation
    // ================================================================

    pub fn path_name(&self, entity_type: EntityType) -> RegistryResult<&'static str> {
        Ok(self.get(entity_type)?.path_name())
    }

    pub fn entity_url(&self, entity_type: EntityType, urn: &Urn) -> RegistryResult<String> {
        Ok(self.get(entity_type)?.entity_url(urn))
    }

    pub fn entity_name(&self, entity_type: EntityType) -> RegistryResult<String> {
        Ok(self.get(entity_type)?.entity_name())
    }

    pub fn collection_name(&self, entity_type: EntityType) -> RegistryResult<String> {
        Ok(self.get(entity_type)?.collection_name())
    }

    pub fn icon(&self, entity_type: EntityType, font_size: u16, style: IconStyle) -> RegistryResult<Icon> {
        Ok(self.get(entity_type)?.icon(font_size, style, None))
    }

    pub fn display_name(&self, entity_type: EntityType, data: &EntityData) -> RegistryResult<String> {
        Ok(self.get(entity_type)?.display_name(data))
    }

    pub fn render_profile(&self, entity_type: EntityType, urn: &Urn) -> RegistryResult<ProfileLayout> {
        Ok(self.get(entity_type)?.render_profile(urn))
    }

    pub fn render_preview(
        &self,
        entity_type: EntityType,
        preview_type: PreviewType,
        data: &EntityData,
    ) -> RegistryResult<Preview> {
        Ok(self.get(entity_type)?.render_preview(preview_type, data))
    }

    pub fn render_search_result(&self, entity_type: EntityType, result: &SearchResult) -> RegistryResult<Preview> {
        Ok(self.get(entity_type)?.render_search(result))
    }

    pub fn generic_properties(
        &self,
        entity_type: EntityType,
        data: &EntityData,
    ) -> RegistryResult<GenericEntityProperties> {
        Ok(self.get(entity_type)?.generic_properties(data))
    }
}

impl Default for EntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRegistry")
            .field("types", &self.order)
            .field("on_duplicate", &self.on_duplicate)
            .finish()
    }
}
