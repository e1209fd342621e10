//! Builds the application's entity registry.

use crate::handlers::*;
use catalog_i18n::{I18nError, MessageCatalog, Translate};
use catalog_registry::{EntityRegistry, RegistryConfig, RegistryError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors raised while assembling the registry.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Failed to load messages: {0}")]
    Messages(#[from] I18nError),
}

/// Builds the translator described by `config`.
///
/// Without a messages file this is the built-in English catalog. A messages
/// file is loaded for `config.locale`, with English filling any gaps.
pub fn translator_from_config(config: &RegistryConfig) -> Result<Arc<dyn Translate>, BootstrapError> {
    let english = MessageCatalog::english();
    let catalog = match &config.messages {
        Some(path) => MessageCatalog::from_path(&config.locale, path)?.with_fallback(&english),
        None => english,
    };
    Ok(Arc::new(catalog))
}

/// Registers one handler per entity type and checks that every type in
/// `config.required_types` resolves.
pub fn build_entity_registry(
    translator: Arc<dyn Translate>,
    config: &RegistryConfig,
) -> Result<Arc<EntityRegistry>, BootstrapError> {
    let t = translator;
    let mut registry = EntityRegistry::from_config(config);

    registry.register(DatasetEntity::new(t.clone()))?;
    registry.register(DashboardEntity::new(t.clone()))?;
    registry.register(ChartEntity::new(t.clone()))?;
    registry.register(UserEntity::new(t.clone()))?;
    registry.register(GroupEntity::new(t.clone()))?;
    registry.register(TagEntity::new(t.clone()))?;
    registry.register(DataFlowEntity::new(t.clone()))?;
    registry.register(DataJobEntity::new(t.clone()))?;
    registry.register(GlossaryTermEntity::new(t.clone()))?;
    registry.register(MlFeatureEntity::new(t.clone()))?;
    registry.register(MlPrimaryKeyEntity::new(t.clone()))?;
    registry.register(MlFeatureTableEntity::new(t.clone()))?;
    registry.register(MlModelEntity::new(t.clone()))?;
    registry.register(MlModelGroupEntity::new(t.clone()))?;
    registry.register(DomainEntity::new(t.clone()))?;
    registry.register(ContainerEntity::new(t.clone()))?;
    registry.register(GlossaryNodeEntity::new(t.clone()))?;
    registry.register(RoleEntity::new(t.clone()))?;
    registry.register(DataPlatformEntity::new(t.clone()))?;
    registry.register(DataProductEntity::new(t.clone()))?;
    registry.register(DataPlatformInstanceEntity::new(t.clone()))?;
    registry.register(ErModelRelationshipEntity::new(t.clone()))?;
    registry.register(BusinessAttributeEntity::new(t.clone()))?;
    registry.register(SchemaFieldEntity::new(t.clone()))?;
    registry.register(RestrictedEntity::new(t))?;

    registry.ensure_registered(&config.required_types)?;

    info!(
        handlers = registry.len(),
        searchable = registry.search_entity_types().len(),
        on_duplicate = ?config.on_duplicate,
        "Entity registry ready"
    );
    Ok(Arc::new(registry))
}
