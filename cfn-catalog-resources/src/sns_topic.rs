//! sns_topic catalog module
//!
//! Auto-generated from CloudFormation schema: AWS::SNS::Topic
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

use cfn_catalog_core::resource::CloudFormationResource;
use cfn_catalog_core::schema::{PropertySchema, PropertyTypeSchema, ResourceSchema, types};
use cfn_catalog_core::tag::Tag;
use cfn_catalog_core::value::Value;
use serde::{Deserialize, Serialize};

/// CloudFormation type name
pub const TYPE_NAME: &str = "AWS::SNS::Topic";

/// `Fn::GetAtt` attribute TopicArn
pub const ATTR_TOPIC_ARN: &str = "TopicArn";

/// The AWS::SNS::Topic resource creates a topic to which notifications can be published.
///
/// Documentation: <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-topic.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// The archive policy determines the number of days SNS retains messages.
    ///
    /// Update requires: No interruption
    #[serde(rename = "ArchivePolicy", default, skip_serializing_if = "Option::is_none")]
    pub archive_policy: Option<serde_json::Value>,

    /// Enables content-based deduplication for FIFO topics.
    ///
    /// Update requires: No interruption
    #[serde(rename = "ContentBasedDeduplication", default, skip_serializing_if = "Option::is_none")]
    pub content_based_deduplication: Option<Value<bool>>,

    /// The body of the policy document you want to use for this topic.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DataProtectionPolicy", default, skip_serializing_if = "Option::is_none")]
    pub data_protection_policy: Option<serde_json::Value>,

    /// The DeliveryStatusLogging configuration enables you to log the delivery status of messages sent from your Amazon SNS topic to subscribed endpoints.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DeliveryStatusLogging", default, skip_serializing_if = "Option::is_none")]
    pub delivery_status_logging: Option<Vec<LoggingConfig>>,

    /// The display name to use for an SNS topic with SMS subscriptions. The display name must be maximum 100 characters long, including hyphens, underscores, spaces, and tabs.
    ///
    /// Update requires: No interruption
    #[serde(rename = "DisplayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Value<String>>,

    /// Set to true to create a FIFO topic.
    ///
    /// Update requires: Replacement
    #[serde(rename = "FifoTopic", default, skip_serializing_if = "Option::is_none")]
    pub fifo_topic: Option<Value<bool>>,

    /// The ID of an AWS managed customer master key (CMK) for SNS or a custom CMK.
    ///
    /// Update requires: No interruption
    #[serde(rename = "KmsMasterKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Value<String>>,

    /// The signature version corresponds to the hashing algorithm used while creating the signature of the notifications, subscription confirmations, or unsubscribe confirmation messages sent by Amazon SNS.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SignatureVersion", default, skip_serializing_if = "Option::is_none")]
    pub signature_version: Option<Value<String>>,

    /// The SNS subscriptions (endpoints) for this topic.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Subscription", default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Vec<Subscription>>,

    /// Update requires: No interruption
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// The name of the topic you want to create. Topic names must include only uppercase and lowercase ASCII letters, numbers, underscores, and hyphens, and must be between 1 and 256 characters long.
    ///
    /// Update requires: Replacement
    #[serde(rename = "TopicName", default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<Value<String>>,

    /// Tracing mode of an SNS topic.
    ///
    /// Update requires: No interruption
    #[serde(rename = "TracingConfig", default, skip_serializing_if = "Option::is_none")]
    pub tracing_config: Option<Value<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// The IAM role ARN to be used when logging failed message deliveries in Amazon CloudWatch.
    ///
    /// Update requires: No interruption
    #[serde(rename = "FailureFeedbackRoleArn", default, skip_serializing_if = "Option::is_none")]
    pub failure_feedback_role_arn: Option<Value<String>>,

    /// Indicates one of the supported protocols for the SNS topic.
    ///
    /// Required: Yes
    ///
    /// Allowed values: `http/s` | `sqs` | `lambda` | `firehose` | `application`
    ///
    /// Update requires: No interruption
    #[serde(rename = "Protocol")]
    pub protocol: Value<String>,

    /// The IAM role ARN to be used when logging successful message deliveries in Amazon CloudWatch.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SuccessFeedbackRoleArn", default, skip_serializing_if = "Option::is_none")]
    pub success_feedback_role_arn: Option<Value<String>>,

    /// The percentage of successful message deliveries to be logged in Amazon CloudWatch. Valid percentage values range from 0 to 100.
    ///
    /// Update requires: No interruption
    #[serde(rename = "SuccessFeedbackSampleRate", default, skip_serializing_if = "Option::is_none")]
    pub success_feedback_sample_rate: Option<Value<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// The endpoint that receives notifications from the SNS topic. The endpoint value depends on the protocol that you specify.
    ///
    /// Required: Yes
    ///
    /// Update requires: No interruption
    #[serde(rename = "Endpoint")]
    pub endpoint: Value<String>,

    /// The subscription's protocol.
    ///
    /// Required: Yes
    ///
    /// Update requires: No interruption
    #[serde(rename = "Protocol")]
    pub protocol: Value<String>,
}

impl CloudFormationResource for Topic {
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(TYPE_NAME)
            .with_description("The AWS::SNS::Topic resource creates a topic to which notifications can be published.")
            .with_documentation_url("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-sns-topic.html")
            .property(
                PropertySchema::new("ArchivePolicy", types::json())
                    .with_description("The archive policy determines the number of days SNS retains messages."),
            )
            .property(
                PropertySchema::new("ContentBasedDeduplication", types::boolean())
                    .with_description("Enables content-based deduplication for FIFO topics."),
            )
            .property(
                PropertySchema::new("DataProtectionPolicy", types::json())
                    .with_description("The body of the policy document you want to use for this topic."),
            )
            .property(
                PropertySchema::new("DeliveryStatusLogging", types::list(types::object("LoggingConfig")))
                    .with_description("The DeliveryStatusLogging configuration enables you to log the delivery status of messages sent from your Amazon SNS topic to subscribed endpoints."),
            )
            .property(
                PropertySchema::new("DisplayName", types::string())
                    .with_description("The display name to use for an SNS topic with SMS subscriptions. The display name must be maximum 100 characters long, including hyphens, underscores, spaces, and tabs."),
            )
            .property(
                PropertySchema::new("FifoTopic", types::boolean())
                    .create_only()
                    .with_description("Set to true to create a FIFO topic."),
            )
            .property(
                PropertySchema::new("KmsMasterKeyId", types::string())
                    .with_description("The ID of an AWS managed customer master key (CMK) for SNS or a custom CMK."),
            )
            .property(
                PropertySchema::new("SignatureVersion", types::string())
                    .with_description("The signature version corresponds to the hashing algorithm used while creating the signature of the notifications, subscription confirmations, or unsubscribe confirmation messages sent by Amazon SNS."),
            )
            .property(
                PropertySchema::new("Subscription", types::list(types::object("Subscription")))
                    .with_description("The SNS subscriptions (endpoints) for this topic."),
            )
            .property(
                PropertySchema::new("Tags", types::tags()),
            )
            .property(
                PropertySchema::new("TopicName", types::string())
                    .create_only()
                    .with_description("The name of the topic you want to create. Topic names must include only uppercase and lowercase ASCII letters, numbers, underscores, and hyphens, and must be between 1 and 256 characters long."),
            )
            .property(
                PropertySchema::new("TracingConfig", types::string())
                    .with_description("Tracing mode of an SNS topic."),
            )
            .property_type(
                PropertyTypeSchema::new("LoggingConfig")
                    .property(
                        PropertySchema::new("FailureFeedbackRoleArn", types::string())
                            .with_description("The IAM role ARN to be used when logging failed message deliveries in Amazon CloudWatch."),
                    )
                    .property(
                        PropertySchema::new("Protocol", types::string())
                            .required()
                            .allowed_values(&["http/s", "sqs", "lambda", "firehose", "application"])
                            .with_description("Indicates one of the supported protocols for the SNS topic."),
                    )
                    .property(
                        PropertySchema::new("SuccessFeedbackRoleArn", types::string())
                            .with_description("The IAM role ARN to be used when logging successful message deliveries in Amazon CloudWatch."),
                    )
                    .property(
                        PropertySchema::new("SuccessFeedbackSampleRate", types::string())
                            .with_description("The percentage of successful message deliveries to be logged in Amazon CloudWatch. Valid percentage values range from 0 to 100."),
                    )
            )
            .property_type(
                PropertyTypeSchema::new("Subscription")
                    .property(
                        PropertySchema::new("Endpoint", types::string())
                            .required()
                            .with_description("The endpoint that receives notifications from the SNS topic. The endpoint value depends on the protocol that you specify."),
                    )
                    .property(
                        PropertySchema::new("Protocol", types::string())
                            .required()
                            .with_description("The subscription's protocol."),
                    )
            )
            .return_attribute(ATTR_TOPIC_ARN)
    }
}
