//! One handler per entity type.

mod business_attribute;
mod chart;
mod container;
mod dashboard;
mod data_flow;
mod data_job;
mod data_platform;
mod data_product;
mod dataset;
mod domain;
mod er_model_relationship;
mod glossary_node;
mod glossary_term;
mod group;
mod ml;
mod restricted;
mod role;
mod schema_field;
mod tag;
mod user;

pub use business_attribute::BusinessAttributeEntity;
pub use chart::ChartEntity;
pub use container::ContainerEntity;
pub use dashboard::DashboardEntity;
pub use data_flow::DataFlowEntity;
pub use data_job::DataJobEntity;
pub use data_platform::{DataPlatformEntity, DataPlatformInstanceEntity};
pub use data_product::DataProductEntity;
pub use dataset::DatasetEntity;
pub use domain::DomainEntity;
pub use er_model_relationship::ErModelRelationshipEntity;
pub use glossary_node::GlossaryNodeEntity;
pub use glossary_term::GlossaryTermEntity;
pub use group::GroupEntity;
pub use ml::{
    MlFeatureEntity, MlFeatureTableEntity, MlModelEntity, MlModelGroupEntity, MlPrimaryKeyEntity,
};
pub use restricted::RestrictedEntity;
pub use role::RoleEntity;
pub use schema_field::SchemaFieldEntity;
pub use tag::TagEntity;
pub use user::UserEntity;
