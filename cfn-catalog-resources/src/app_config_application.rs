//! app_config_application catalog module
//!
//! Auto-generated from CloudFormation schema: AWS::AppConfig::Application
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

use cfn_catalog_core::resource::CloudFormationResource;
use cfn_catalog_core::schema::{PropertySchema, ResourceSchema, types};
use cfn_catalog_core::tag::Tag;
use cfn_catalog_core::value::Value;
use serde::{Deserialize, Serialize};

/// CloudFormation type name
pub const TYPE_NAME: &str = "AWS::AppConfig::Application";

/// The application Id
pub const ATTR_APPLICATION_ID: &str = "ApplicationId";

/// Resource Type definition for AWS::AppConfig::Application
///
/// Documentation: <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appconfig-application.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// A description of the application.
    ///
    /// Length: 0-1024
    ///
    /// Update requires: No interruption
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// A name for the application.
    ///
    /// Required: Yes
    ///
    /// Length: 1-64
    ///
    /// Update requires: No interruption
    #[serde(rename = "Name")]
    pub name: Value<String>,

    /// Metadata to assign to the application. Tags help organize and categorize your AWS AppConfig resources. Each tag consists of a key and an optional value, both of which you define.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CloudFormationResource for Application {
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(TYPE_NAME)
            .with_description("Resource Type definition for AWS::AppConfig::Application")
            .with_documentation_url("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appconfig-application.html")
            .property(
                PropertySchema::new("Description", types::string())
                    .min_length(0)
                    .max_length(1024)
                    .with_description("A description of the application."),
            )
            .property(
                PropertySchema::new("Name", types::string())
                    .required()
                    .min_length(1)
                    .max_length(64)
                    .with_description("A name for the application."),
            )
            .property(
                PropertySchema::new("Tags", types::tags())
                    .with_description("Metadata to assign to the application. Tags help organize and categorize your AWS AppConfig resources. Each tag consists of a key and an optional value, both of which you define."),
            )
            .return_attribute(ATTR_APPLICATION_ID)
    }
}
