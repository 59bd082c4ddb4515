//! api_gateway_domain_name_access_association catalog module
//!
//! Auto-generated from CloudFormation schema: AWS::ApiGateway::DomainNameAccessAssociation
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

use cfn_catalog_core::resource::CloudFormationResource;
use cfn_catalog_core::schema::{PropertySchema, ResourceSchema, types};
use cfn_catalog_core::tag::Tag;
use cfn_catalog_core::value::Value;
use serde::{Deserialize, Serialize};

/// CloudFormation type name
pub const TYPE_NAME: &str = "AWS::ApiGateway::DomainNameAccessAssociation";

/// The amazon resource name (ARN) of the domain name access association resource.
pub const ATTR_DOMAIN_NAME_ACCESS_ASSOCIATION_ARN: &str = "DomainNameAccessAssociationArn";

/// Resource Type definition for AWS::ApiGateway::DomainNameAccessAssociation.
///
/// Documentation: <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigateway-domainnameaccessassociation.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainNameAccessAssociation {
    /// The source of the domain name access association resource.
    ///
    /// Required: Yes
    ///
    /// Update requires: Replacement
    #[serde(rename = "AccessAssociationSource")]
    pub access_association_source: Value<String>,

    /// The source type of the domain name access association resource.
    ///
    /// Required: Yes
    ///
    /// Allowed values: `VPCE`
    ///
    /// Update requires: Replacement
    #[serde(rename = "AccessAssociationSourceType")]
    pub access_association_source_type: Value<String>,

    /// The amazon resource name (ARN) of the domain name resource.
    ///
    /// Required: Yes
    ///
    /// Update requires: Replacement
    #[serde(rename = "DomainNameArn")]
    pub domain_name_arn: Value<String>,

    /// An array of arbitrary tags (key-value pairs) to associate with the domainname access association.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CloudFormationResource for DomainNameAccessAssociation {
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(TYPE_NAME)
            .with_description("Resource Type definition for AWS::ApiGateway::DomainNameAccessAssociation.")
            .with_documentation_url("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-apigateway-domainnameaccessassociation.html")
            .property(
                PropertySchema::new("AccessAssociationSource", types::string())
                    .required()
                    .create_only()
                    .with_description("The source of the domain name access association resource."),
            )
            .property(
                PropertySchema::new("AccessAssociationSourceType", types::string())
                    .required()
                    .create_only()
                    .allowed_values(&["VPCE"])
                    .with_description("The source type of the domain name access association resource."),
            )
            .property(
                PropertySchema::new("DomainNameArn", types::string())
                    .required()
                    .create_only()
                    .with_description("The amazon resource name (ARN) of the domain name resource."),
            )
            .property(
                PropertySchema::new("Tags", types::tags())
                    .create_only()
                    .with_description("An array of arbitrary tags (key-value pairs) to associate with the domainname access association."),
            )
            .return_attribute(ATTR_DOMAIN_NAME_ACCESS_ASSOCIATION_ARN)
    }
}
