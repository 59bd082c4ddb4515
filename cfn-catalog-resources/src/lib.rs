//! Generated CloudFormation resource catalog
//!
//! DO NOT EDIT the resource modules MANUALLY - regenerate with:
//!   cfn-catalog-codegen --file schemas/<module>.json \
//!     -o cfn-catalog-resources/src/<module>.rs --mod-entry

use cfn_catalog_core::registry::Catalog;
use cfn_catalog_core::schema::ResourceSchema;

pub mod api_gateway_domain_name_access_association;
pub mod app_config_application;
pub mod ec2_subnet;
pub mod ec2_vpc;
pub mod logs_log_group;
pub mod s3_access_grants_location;
pub mod sns_topic;

/// Returns a catalog holding every generated resource type
pub fn catalog() -> Catalog {
    Catalog::new()
        .with_type::<api_gateway_domain_name_access_association::DomainNameAccessAssociation>()
        .with_type::<app_config_application::Application>()
        .with_type::<ec2_subnet::Subnet>()
        .with_type::<ec2_vpc::Vpc>()
        .with_type::<logs_log_group::LogGroup>()
        .with_type::<s3_access_grants_location::AccessGrantsLocation>()
        .with_type::<sns_topic::Topic>()
}

/// CloudFormation type names of every generated resource type
pub fn type_names() -> Vec<&'static str> {
    vec![
        api_gateway_domain_name_access_association::TYPE_NAME,
        app_config_application::TYPE_NAME,
        ec2_subnet::TYPE_NAME,
        ec2_vpc::TYPE_NAME,
        logs_log_group::TYPE_NAME,
        s3_access_grants_location::TYPE_NAME,
        sns_topic::TYPE_NAME,
    ]
}

/// Returns all generated schemas
pub fn schemas() -> Vec<ResourceSchema> {
    catalog().schemas().cloned().collect()
}
