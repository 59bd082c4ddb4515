//! ec2_vpc catalog module
//!
//! Auto-generated from CloudFormation schema: AWS::EC2::VPC
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

use cfn_catalog_core::resource::CloudFormationResource;
use cfn_catalog_core::schema::{PropertySchema, ResourceSchema, types};
use cfn_catalog_core::tag::Tag;
use cfn_catalog_core::value::Value;
use serde::{Deserialize, Serialize};

/// CloudFormation type name
pub const TYPE_NAME: &str = "AWS::EC2::VPC";

/// The association IDs of the IPv4 CIDR blocks for the VPC.
pub const ATTR_CIDR_BLOCK_ASSOCIATIONS: &str = "CidrBlockAssociations";

/// The ID of the default network ACL for the VPC.
pub const ATTR_DEFAULT_NETWORK_ACL: &str = "DefaultNetworkAcl";

/// The ID of the default security group for the VPC.
pub const ATTR_DEFAULT_SECURITY_GROUP: &str = "DefaultSecurityGroup";

/// The IPv6 CIDR blocks for the VPC.
pub const ATTR_IPV6_CIDR_BLOCKS: &str = "Ipv6CidrBlocks";

/// The ID of the VPC.
pub const ATTR_VPC_ID: &str = "VpcId";

/// Specifies a virtual private cloud (VPC). To add an IPv6 CIDR block to the VPC, see AWS::EC2::VPCCidrBlock.
///
/// Documentation: <https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vpc {
    /// The IPv4 network range for the VPC, in CIDR notation. For example, 10.0.0.0/16. We modify the specified CIDR block to its canonical form. You must specify either CidrBlock or Ipv4IpamPoolId.
    ///
    /// Update requires: Replacement
    #[serde(rename = "CidrBlock", default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<Value<String>>,

    /// Indicates whether the instances launched in the VPC get DNS hostnames. If enabled, instances in the VPC get DNS hostnames; otherwise, they do not. Disabled by default for nondefault VPCs.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableDnsHostnames", default, skip_serializing_if = "Option::is_none")]
    pub enable_dns_hostnames: Option<Value<bool>>,

    /// Indicates whether the DNS resolution is supported for the VPC. If enabled, queries to the Amazon provided DNS server at the 169.254.169.253 IP address, or the reserved IP address at the base of the VPC network range plus two succeed. Enabled by default.
    ///
    /// Update requires: No interruption
    #[serde(rename = "EnableDnsSupport", default, skip_serializing_if = "Option::is_none")]
    pub enable_dns_support: Option<Value<bool>>,

    /// The allowed tenancy of instances launched into the VPC.
    ///   +  ``default``: An instance launched into the VPC runs on shared hardware by default, unless you explicitly specify a different tenancy during instance launch.
    ///   +  ``dedicated``: An instance launched into the VPC runs on dedicated hardware by default, unless you explicitly specify a tenancy of host during instance launch.
    ///   +  ``host``: Some description.
    ///
    ///  Updating ``InstanceTenancy`` requires no replacement only if you are updating its value from dedicated to default.
    ///
    /// Allowed values: `default` | `dedicated` | `host`
    ///
    /// Update requires: No interruption
    #[serde(rename = "InstanceTenancy", default, skip_serializing_if = "Option::is_none")]
    pub instance_tenancy: Option<Value<String>>,

    /// The ID of an IPv4 IPAM pool you want to use for allocating this VPC's CIDR.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Ipv4IpamPoolId", default, skip_serializing_if = "Option::is_none")]
    pub ipv4_ipam_pool_id: Option<Value<String>>,

    /// The netmask length of the IPv4 CIDR you want to allocate to this VPC from an Amazon VPC IP Address Manager (IPAM) pool.
    ///
    /// Update requires: Replacement
    #[serde(rename = "Ipv4NetmaskLength", default, skip_serializing_if = "Option::is_none")]
    pub ipv4_netmask_length: Option<Value<i64>>,

    /// The tags for the VPC.
    ///
    /// Update requires: No interruption
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CloudFormationResource for Vpc {
    const TYPE_NAME: &'static str = TYPE_NAME;

    fn schema() -> ResourceSchema {
        ResourceSchema::new(TYPE_NAME)
            .with_description("Specifies a virtual private cloud (VPC). To add an IPv6 CIDR block to the VPC, see AWS::EC2::VPCCidrBlock.")
            .with_documentation_url("https://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-ec2-vpc.html")
            .property(
                PropertySchema::new("CidrBlock", types::string())
                    .create_only()
                    .with_description("The IPv4 network range for the VPC, in CIDR notation. For example, 10.0.0.0/16. We modify the specified CIDR block to its canonical form. You must specify either CidrBlock or Ipv4IpamPoolId."),
            )
            .property(
                PropertySchema::new("EnableDnsHostnames", types::boolean())
                    .with_description("Indicates whether the instances launched in the VPC get DNS hostnames. If enabled, instances in the VPC get DNS hostnames; otherwise, they do not. Disabled by default for nondefault VPCs."),
            )
            .property(
                PropertySchema::new("EnableDnsSupport", types::boolean())
                    .with_description("Indicates whether the DNS resolution is supported for the VPC. If enabled, queries to the Amazon provided DNS server at the 169.254.169.253 IP address, or the reserved IP address at the base of the VP..."),
            )
            .property(
                PropertySchema::new("InstanceTenancy", types::string())
                    .allowed_values(&["default", "dedicated", "host"])
                    .with_description("The allowed tenancy of instances launched into the VPC. + ``default``: An instance launched into the VPC runs on shared hardware by default, unless you explicitly specify a different tenancy during in..."),
            )
            .property(
                PropertySchema::new("Ipv4IpamPoolId", types::string())
                    .create_only()
                    .with_description("The ID of an IPv4 IPAM pool you want to use for allocating this VPC's CIDR."),
            )
            .property(
                PropertySchema::new("Ipv4NetmaskLength", types::integer())
                    .create_only()
                    .with_description("The netmask length of the IPv4 CIDR you want to allocate to this VPC from an Amazon VPC IP Address Manager (IPAM) pool."),
            )
            .property(
                PropertySchema::new("Tags", types::tags())
                    .with_description("The tags for the VPC."),
            )
            .return_attribute(ATTR_CIDR_BLOCK_ASSOCIATIONS)
            .return_attribute(ATTR_DEFAULT_NETWORK_ACL)
            .return_attribute(ATTR_DEFAULT_SECURITY_GROUP)
            .return_attribute(ATTR_IPV6_CIDR_BLOCKS)
            .return_attribute(ATTR_VPC_ID)
    }
}
