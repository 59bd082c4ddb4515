//! ec2_subnet catalog module
//!
//! Auto-generated from CloudFormation schema: AWS::EC2::Subnet
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

use cfn_catalog_core::resource::CloudFormationResource;
use cfn_catalog_core::schema::{PropertySchema, PropertyTypeSchema, ResourceSchema, types};
use cfn_catalog_core::tag::Tag;
use cfn_catalog_core::value::Value;
use serde::{Deserialize, Serialize};

/// CloudFormation type name
pub const TYPE_NAME: &str = "AWS::EC2::Subnet";

/// The IPv6 CIDR blocks for the subnet.
pub const ATTR_IPV6_CIDR_BLOCKS: &str = "Ipv6CidrBlocks";

/// The ID of the network ACL associated with the subnet.
pub const ATTR_NETWORK_ACL_ASSOCIATION_ID: &str = "NetworkAclAssociationId";

/// The ID of the subnet.
pub const ATTR_SUBNET_ID: &str = "SubnetId";

/// Specifies a subnet for the specified VPC.
///
/// Documentation: <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-subnet.html>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subnet {
    /// Indicates whether a network interface created in this subnet receives an IPv6 address. The default value is false.
    ///
    /// Update requires: No interruption
    #[serde(rename = "AssignIpv6AddressOnCreation", default, skip_serializing_if = "Option::is_none")]
    pub assign_ipv6_address_on_creation: Option<Value<bool>>,

    /// The Availability Zone of the subnet. If you update this property, you must also update the CidrBlock property.
    ///
    /// Update requires: Replacement
    #[serde(rename = "AvailabilityZone", default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<Value<String>>,

    /// The AZ ID of the subnet.
    ///
    /// Update requires: Replacement
    #[serde(rename = "AvailabilityZoneId", default, skip_serializing_if = "Option::is_none")]
    pub availability_zone_id: Option<Value<String>>,

    /// The IPv4 CIDR block assigned to the subnet. If you update this property, we create a new subnet, and then delete the existing one.
    ///
    /// Update requires: Replacement
    #[serde(rename = "CidrBlock", default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<Value<String>>,

    /// Indicates whether DNS queries made to the Amazon-provided DNS Resolver in this subnet should return synthetic IPv6 addresses for IPv4-only destinations.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableDns64", default, skip_serializing_if = "Option::is_none")]
    pub enable_dns64: Option<Value<bool>>,

    /// Indicates the device position for local network interfaces in this subnet.
    ///
    /// Minimum: 1
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableLniAtDeviceIndex", default, skip_serializing_if = "Option::is_none")]
    pub enable_lni_at_device_index: Option<Value<i64>>,

    /// An IPv4 IPAM pool ID for the subnet.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Ipv4IpamPoolId", default, skip_serializing_if = "Option::is_none")]
    pub ipv4_ipam_pool_id: Option<Value<String>>,

    /// An IPv4 netmask length for the subnet.
    ///
    /// Range: 0-32
    ///
    /// Update requires: Replacement
    #[serde(rename = "Ipv4NetmaskLength", default, skip_serializing_if = "Option::is_none")]
    pub ipv4_netmask_length: Option<Value<i64>>,

    /// The IPv6 CIDR block. If you specify AssignIpv6AddressOnCreation, you must also specify an IPv6 CIDR block.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Ipv6CidrBlock", default, skip_serializing_if = "Option::is_none")]
    pub ipv6_cidr_block: Option<Value<String>>,

    /// Indicates whether this is an IPv6 only subnet.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Ipv6Native", default, skip_serializing_if = "Option::is_none")]
    pub ipv6_native: Option<Value<bool>>,

    /// Indicates whether instances launched in this subnet receive a public IPv4 address. The default value is false.
    ///
    /// Update requires: No interruption
    #[serde(rename = "MapPublicIpOnLaunch", default, skip_serializing_if = "Option::is_none")]
    pub map_public_ip_on_launch: Option<Value<bool>>,

    /// The Amazon Resource Name (ARN) of the Outpost.
    ///
    /// Update requires: Replacement
    #[serde(rename = "OutpostArn", default, skip_serializing_if = "Option::is_none")]
    pub outpost_arn: Option<Value<String>>,

    /// Update requires: No interruption
    #[serde(rename = "PrivateDnsNameOptionsOnLaunch", default, skip_serializing_if = "Option::is_none")]
    pub private_dns_name_options_on_launch: Option<PrivateDnsNameOptionsOnLaunch>,

    /// Any tags assigned to the subnet.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// The ID of the VPC the subnet is in. If you update this property, you must also update the CidrBlock property.
    ///
    /// Required: Yes
    ///
    /// Update requires: Replacement
    #[serde(rename = "VpcId")]
    pub vpc_id: Value<String>,
}

/// Specifies the options for instance hostnames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivateDnsNameOptionsOnLaunch {
    /// Indicates whether to respond to DNS queries for instance hostname with DNS AAAA records.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableResourceNameDnsAAAARecord", default, skip_serializing_if = "Option::is_none")]
    pub enable_resource_name_dns_aaaa_record: Option<Value<bool>>,

    /// Indicates whether to respond to DNS queries for instance hostname with DNS A records.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableResourceNameDnsARecord", default, skip_serializing_if = "Option::is_none")]
    pub enable_resource_name_dns_a_record: Option<Value<bool>>,

    /// The type of hostname for EC2 instances.
    ///
    /// Allowed values: `ip-name` | `resource-name`
    ///
    /// Update requires: No interruption
    #[serde(rename = "HostnameType", default, skip_serializing_if = "Option::is_none")]
    pub hostname_type: Option<Value<String>>,
}

impl CloudFormationResource for Subnet {
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(TYPE_NAME)
            .with_description("Specifies a subnet for the specified VPC.")
            .with_documentation_url("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-subnet.html")
            .property(
                PropertySchema::new("AssignIpv6AddressOnCreation", types::boolean())
                    .with_description("Indicates whether a network interface created in this subnet receives an IPv6 address. The default value is false."),
            )
            .property(
                PropertySchema::new("AvailabilityZone", types::string())
                    .create_only()
                    .with_description("The Availability Zone of the subnet. If you update this property, you must also update the CidrBlock property."),
            )
            .property(
                PropertySchema::new("AvailabilityZoneId", types::string())
                    .create_only()
                    .with_description("The AZ ID of the subnet."),
            )
            .property(
                PropertySchema::new("CidrBlock", types::string())
                    .create_only()
                    .with_description("The IPv4 CIDR block assigned to the subnet. If you update this property, we create a new subnet, and then delete the existing one."),
            )
            .property(
                PropertySchema::new("EnableDns64", types::boolean())
                    .with_description("Indicates whether DNS queries made to the Amazon-provided DNS Resolver in this subnet should return synthetic IPv6 addresses for IPv4-only destinations."),
            )
            .property(
                PropertySchema::new("EnableLniAtDeviceIndex", types::integer())
                    .min_value(1.0)
                    .with_description("Indicates the device position for local network interfaces in this subnet."),
            )
            .property(
                PropertySchema::new("Ipv4IpamPoolId", types::string())
                    .create_only()
                    .with_description("An IPv4 IPAM pool ID for the subnet."),
            )
            .property(
                PropertySchema::new("Ipv4NetmaskLength", types::integer())
                    .create_only()
                    .min_value(0.0)
                    .max_value(32.0)
                    .with_description("An IPv4 netmask length for the subnet."),
            )
            .property(
                PropertySchema::new("Ipv6CidrBlock", types::string())
                    .with_description("The IPv6 CIDR block. If you specify AssignIpv6AddressOnCreation, you must also specify an IPv6 CIDR block."),
            )
            .property(
                PropertySchema::new("Ipv6Native", types::boolean())
                    .with_description("Indicates whether this is an IPv6 only subnet."),
            )
            .property(
                PropertySchema::new("MapPublicIpOnLaunch", types::boolean())
                    .with_description("Indicates whether instances launched in this subnet receive a public IPv4 address. The default value is false."),
            )
            .property(
                PropertySchema::new("OutpostArn", types::string())
                    .create_only()
                    .with_description("The Amazon Resource Name (ARN) of the Outpost."),
            )
            .property(
                PropertySchema::new("PrivateDnsNameOptionsOnLaunch", types::object("PrivateDnsNameOptionsOnLaunch")),
            )
            .property(
                PropertySchema::new("Tags", types::tags())
                    .with_description("Any tags assigned to the subnet."),
            )
            .property(
                PropertySchema::new("VpcId", types::string())
                    .required()
                    .create_only()
                    .with_description("The ID of the VPC the subnet is in. If you update this property, you must also update the CidrBlock property."),
            )
            .property_type(
                PropertyTypeSchema::new("PrivateDnsNameOptionsOnLaunch")
                    .property(
                        PropertySchema::new("EnableResourceNameDnsAAAARecord", types::boolean())
                            .with_description("Indicates whether to respond to DNS queries for instance hostname with DNS AAAA records."),
                    )
                    .property(
                        PropertySchema::new("EnableResourceNameDnsARecord", types::boolean())
                            .with_description("Indicates whether to respond to DNS queries for instance hostname with DNS A records."),
                    )
                    .property(
                        PropertySchema::new("HostnameType", types::string())
                            .allowed_values(&["ip-name", "resource-name"])
                            .with_description("The type of hostname for EC2 instances."),
                    )
            )
            .return_attribute(ATTR_IPV6_CIDR_BLOCKS)
            .return_attribute(ATTR_NETWORK_ACL_ASSOCIATION_ID)
            .return_attribute(ATTR_SUBNET_ID)
    }
}
