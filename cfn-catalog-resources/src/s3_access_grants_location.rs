//! s3_access_grants_location catalog module
//!
//! Auto-generated from CloudFormation schema: AWS::S3::AccessGrantsLocation
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

use cfn_catalog_core::resource::CloudFormationResource;
use cfn_catalog_core::schema::{PropertySchema, ResourceSchema, types};
use cfn_catalog_core::tag::Tag;
use cfn_catalog_core::value::Value;
use serde::{Deserialize, Serialize};

/// CloudFormation type name
pub const TYPE_NAME: &str = "AWS::S3::AccessGrantsLocation";

/// The Amazon Resource Name (ARN) of the specified Access Grants location.
pub const ATTR_ACCESS_GRANTS_LOCATION_ARN: &str = "AccessGrantsLocationArn";

/// The unique identifier for the specified Access Grants location.
pub const ATTR_ACCESS_GRANTS_LOCATION_ID: &str = "AccessGrantsLocationId";

/// The AWS::S3::AccessGrantsLocation resource is an Amazon S3 resource type hosted in an access grants instance which can be the target for S3 access grants.
///
/// Documentation: <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-s3-accessgrantslocation.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessGrantsLocation {
    /// The Amazon Resource Name (ARN) of the access grant location's associated IAM role.
    ///
    /// Required: Yes
    ///
    /// Update requires: No interruption
    #[serde(rename = "IamRoleArn")]
    pub iam_role_arn: Value<String>,

    /// Descriptor for where the location actually points
    ///
    /// Required: Yes
    ///
    /// Update requires: No interruption
    #[serde(rename = "LocationScope")]
    pub location_scope: Value<String>,

    /// The tags of the access grants location.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CloudFormationResource for AccessGrantsLocation {
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(TYPE_NAME)
            .with_description("The AWS::S3::AccessGrantsLocation resource is an Amazon S3 resource type hosted in an access grants instance which can be the target for S3 access grants.")
            .with_documentation_url("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-s3-accessgrantslocation.html")
            .property(
                PropertySchema::new("IamRoleArn", types::string())
                    .required()
                    .with_description("The Amazon Resource Name (ARN) of the access grant location's associated IAM role."),
            )
            .property(
                PropertySchema::new("LocationScope", types::string())
                    .required()
                    .with_description("Descriptor for where the location actually points"),
            )
            .property(
                PropertySchema::new("Tags", types::tags())
                    .create_only()
                    .with_description("The tags of the access grants location."),
            )
            .return_attribute(ATTR_ACCESS_GRANTS_LOCATION_ARN)
            .return_attribute(ATTR_ACCESS_GRANTS_LOCATION_ID)
    }
}
