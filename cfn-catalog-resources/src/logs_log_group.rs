//! logs_log_group catalog module
//!
//! Auto-generated from CloudFormation schema: AWS::Logs::LogGroup
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

use cfn_catalog_core::resource::CloudFormationResource;
use cfn_catalog_core::schema::{PropertySchema, ResourceSchema, types};
use cfn_catalog_core::tag::Tag;
use cfn_catalog_core::value::Value;
use serde::{Deserialize, Serialize};

/// CloudFormation type name
pub const TYPE_NAME: &str = "AWS::Logs::LogGroup";

/// The ARN of the log group, such as arn:aws:logs:us-west-1:123456789012:log-group:/mystack-testgroup-12ABC1AB12A1:*
pub const ATTR_ARN: &str = "Arn";

/// The AWS::Logs::LogGroup resource specifies a log group. A log group defines common properties for log streams, such as their retention and access control rules.
///
/// Documentation: <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogGroup {
    /// Creates a data protection policy and assigns it to the log group.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DataProtectionPolicy", default, skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<serde_json::Value>,

    /// The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data.
    ///
    /// Pattern: `^arn:[a-z0-9-]+:kms:[a-z0-9-]+:\d{12}:(key|alias)/.+$`
    ///
    /// Maximum length: 256
    ///
    /// Update requires: No interruption
    #[serde(rename = "KmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,

    /// Specifies the log group class for this log group.
    ///
    /// Allowed values: `STANDARD` | `INFREQUENT_ACCESS`
    ///
    /// Update requires: Replacement
    #[serde(rename = "LogGroupClass", default, skip_serializing_if = "Option::is_none")]
    pub log_group_class: Option<Value<String>>,

    /// The name of the log group. If you don't specify a name, CFN generates a unique ID for the log group.
    ///
    /// Pattern: `^[.\-_/#A-Za-z0-9]{1,512}$`
    ///
    /// Length: 1-512
    ///
    /// Update requires: Replacement
    #[serde(rename = "LogGroupName", default, skip_serializing_if = "Option::is_none")]
    pub log_group_name: Option<Value<String>>,

    /// The number of days to retain the log events in the specified log group.
    ///
    /// Allowed values: `1` | `3` | `5` | `7` | `14` | `30` | `60` | `90` | `120` | `150` | `180` | `365` | `400` | `545` | `731` | `1096` | `1827` | `2192` | `2557` | `2922` | `3288` | `3653`
    ///
    /// Update requires: No interruption
    #[serde(rename = "RetentionInDays", default, skip_serializing_if = "Option::is_none")]
    pub retention_in_days: Option<Value<i64>>,

    /// An array of key-value pairs to apply to the log group.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CloudFormationResource for LogGroup {
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(TYPE_NAME)
            .with_description("The AWS::Logs::LogGroup resource specifies a log group. A log group defines common properties for log streams, such as their retention and access control rules.")
            .with_documentation_url("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-logs-loggroup.html")
            .property(
                PropertySchema::new("DataProtectionPolicy", types::json())
                    .with_description("Creates a data protection policy and assigns it to the log group."),
            )
            .property(
                PropertySchema::new("KmsKeyId", types::string())
                    .pattern("^arn:[a-z0-9-]+:kms:[a-z0-9-]+:\\d{12}:(key|alias)/.+$")
                    .max_length(256)
                    .with_description("The Amazon Resource Name (ARN) of the KMS key to use when encrypting log data."),
            )
            .property(
                PropertySchema::new("LogGroupClass", types::string())
                    .create_only()
                    .allowed_values(&["STANDARD", "INFREQUENT_ACCESS"])
                    .with_description("Specifies the log group class for this log group."),
            )
            .property(
                PropertySchema::new("LogGroupName", types::string())
                    .create_only()
                    .pattern("^[.\\-_/#A-Za-z0-9]{1,512}$")
                    .min_length(1)
                    .max_length(512)
                    .with_description("The name of the log group. If you don't specify a name, CFN generates a unique ID for the log group."),
            )
            .property(
                PropertySchema::new("RetentionInDays", types::integer())
                    .allowed_values(&["1", "3", "5", "7", "14", "30", "60", "90", "120", "150", "180", "365", "400", "545", "731", "1096", "1827", "2192", "2557", "2922", "3288", "3653"])
                    .with_description("The number of days to retain the log events in the specified log group."),
            )
            .property(
                PropertySchema::new("Tags", types::tags())
                    .with_description("An array of key-value pairs to apply to the log group."),
            )
            .return_attribute(ATTR_ARN)
    }
}
