//! Checks the committed catalog against the registry schemas it was generated from

use std::collections::BTreeSet;
use std::path::PathBuf;

use cfn_catalog_core::conformance::{self, Discrepancy, Specification};
use cfn_catalog_core::registry::{TemplateError, ValidationConfig};
use cfn_catalog_core::schema::{TypeError, UpdateBehavior};
use cfn_catalog_core::{
    DeletionPolicy, Intrinsic, PseudoParameter, Resource, ResourceAttributes, SelectIndex, Tag,
    Template, Value,
};
use cfn_catalog_resources::{catalog, ec2_subnet, ec2_vpc, logs_log_group, sns_topic, type_names};
use heck::ToSnakeCase;
use serde_json::{Value as JsonValue, json};

fn schema_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("schemas")
}

fn registry_schemas() -> Vec<JsonValue> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(schema_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|path| serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap())
        .collect()
}

fn pointer_names(schema: &JsonValue, key: &str) -> BTreeSet<String> {
    schema[key]
        .as_array()
        .map(|pointers| {
            pointers
                .iter()
                .filter_map(|p| p.as_str()?.strip_prefix("/properties/"))
                .filter_map(|p| p.split('/').next())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[test]
fn every_registry_schema_is_cataloged() {
    let schemas = registry_schemas();
    assert_eq!(schemas.len(), type_names().len());

    let catalog = catalog();
    for schema in &schemas {
        let type_name = schema["typeName"].as_str().unwrap();
        assert!(catalog.contains(type_name), "{} not cataloged", type_name);
    }
}

#[test]
fn module_files_follow_type_names() {
    let src = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    for type_name in type_names() {
        let parts: Vec<&str> = type_name.split("::").collect();
        let module = format!("{}_{}", parts[1].to_snake_case(), parts[2].to_snake_case());
        assert!(
            src.join(format!("{}.rs", module)).exists(),
            "missing module {} for {}",
            module,
            type_name
        );
        assert!(schema_dir().join(format!("{}.json", module)).exists());
    }
}

#[test]
fn catalog_matches_registry_schemas() {
    let catalog = catalog();
    for registry in registry_schemas() {
        let type_name = registry["typeName"].as_str().unwrap();
        let schema = catalog.get(type_name).unwrap();

        let read_only = pointer_names(&registry, "readOnlyProperties");
        let create_only = pointer_names(&registry, "createOnlyProperties");
        let required: BTreeSet<String> = registry["required"]
            .as_array()
            .map(|names| {
                names
                    .iter()
                    .filter_map(|n| n.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        let writable: BTreeSet<String> = registry["properties"]
            .as_object()
            .unwrap()
            .keys()
            .filter(|name| !read_only.contains(*name))
            .cloned()
            .collect();
        let cataloged: BTreeSet<String> = schema.properties.keys().cloned().collect();
        assert_eq!(cataloged, writable, "{}: properties", type_name);

        for (name, property) in &schema.properties {
            assert_eq!(
                property.required,
                required.contains(name),
                "{}.{}: required",
                type_name,
                name
            );
            let expected = if create_only.contains(name) {
                UpdateBehavior::Immutable
            } else {
                UpdateBehavior::Mutable
            };
            assert_eq!(property.update, expected, "{}.{}: update", type_name, name);
        }

        let attributes: BTreeSet<String> = schema.return_attributes.iter().cloned().collect();
        assert_eq!(attributes, read_only, "{}: return attributes", type_name);
    }
}

fn vpc() -> Resource<ec2_vpc::Vpc> {
    Resource::new(ec2_vpc::Vpc {
        cidr_block: Some("10.0.0.0/16".into()),
        enable_dns_hostnames: Some(true.into()),
        enable_dns_support: Some(true.into()),
        instance_tenancy: Some("default".into()),
        tags: Some(vec![Tag::new("Name", Intrinsic::sub("${AWS::StackName}-vpc"))]),
        ..Default::default()
    })
}

fn subnet() -> Resource<ec2_subnet::Subnet> {
    Resource::new(ec2_subnet::Subnet {
        vpc_id: Intrinsic::reference("Vpc").into(),
        availability_zone: Some(Value::from(Intrinsic::Select(
            Box::new(Value::Literal(SelectIndex::from(0))),
            Box::new(Value::Intrinsic(Intrinsic::GetAZs(Box::new(Value::Literal(
                String::new(),
            ))))),
        ))),
        cidr_block: Some("10.0.1.0/24".into()),
        map_public_ip_on_launch: Some(false.into()),
        private_dns_name_options_on_launch: Some(ec2_subnet::PrivateDnsNameOptionsOnLaunch {
            hostname_type: Some("resource-name".into()),
            enable_resource_name_dns_a_record: Some(true.into()),
            ..Default::default()
        }),
        assign_ipv6_address_on_creation: None,
        availability_zone_id: None,
        enable_dns64: None,
        enable_lni_at_device_index: None,
        ipv4_ipam_pool_id: None,
        ipv4_netmask_length: None,
        ipv6_cidr_block: None,
        ipv6_native: None,
        outpost_arn: None,
        tags: None,
    })
    .with_attributes(ResourceAttributes::new().depends_on("Vpc"))
}

#[test]
fn typed_resources_validate_against_their_schemas() {
    let mut template = Template::new().with_description("network");
    template.add_resource("Vpc", &vpc()).unwrap();
    template.add_resource("Subnet", &subnet()).unwrap();

    let logs = Resource::new(logs_log_group::LogGroup {
        log_group_name: Some("/app/network".into()),
        retention_in_days: Some(Value::Literal(30)),
        log_group_class: Some("STANDARD".into()),
        ..Default::default()
    })
    .with_attributes(ResourceAttributes::new().with_deletion_policy(DeletionPolicy::Retain));
    template.add_resource("Logs", &logs).unwrap();

    let topic = Resource::new(sns_topic::Topic {
        topic_name: Some(
            Intrinsic::join(
                "-",
                [
                    Value::<String>::from(PseudoParameter::StackName),
                    Value::from("alerts"),
                ],
            )
            .into(),
        ),
        subscription: Some(vec![sns_topic::Subscription {
            endpoint: Intrinsic::get_att("Queue", "Arn").into(),
            protocol: "sqs".into(),
        }]),
        delivery_status_logging: Some(vec![sns_topic::LoggingConfig {
            protocol: "sqs".into(),
            success_feedback_sample_rate: Some("50".into()),
            failure_feedback_role_arn: None,
            success_feedback_role_arn: None,
        }]),
        ..Default::default()
    });
    template.add_resource("Topic", &topic).unwrap();
    template.parameters.insert("Queue".to_string(), json!({"Type": "String"}));

    let config = ValidationConfig {
        allow_unknown_types: false,
        allow_unknown_properties: false,
    };
    // Fn::GetAtt on a parameter is not a resource attribute
    let errors = catalog().validate_template(&template, &config).unwrap_err();
    assert_eq!(
        errors,
        vec![TemplateError::UnresolvedReference {
            logical_id: "Topic".to_string(),
            target: "Queue".to_string(),
        }]
    );

    template.parameters.clear();
    template
        .resources
        .insert("Queue".to_string(), json!({"Type": "AWS::SQS::Queue"}));
    let relaxed = ValidationConfig {
        allow_unknown_types: true,
        ..config
    };
    catalog().validate_template(&template, &relaxed).unwrap();
}

#[test]
fn typed_resources_read_back_from_template_json() {
    let mut template = Template::new();
    template.add_resource("Vpc", &vpc()).unwrap();
    template.add_resource("Subnet", &subnet()).unwrap();

    let reparsed = Template::from_json(&template.to_json_pretty().unwrap()).unwrap();
    let read: Resource<ec2_subnet::Subnet> = reparsed.resource("Subnet").unwrap();
    assert_eq!(read, subnet());
    assert_eq!(
        reparsed.resources["Subnet"]["Properties"]["VpcId"],
        json!({"Ref": "Vpc"})
    );
    assert_eq!(reparsed.resources["Subnet"]["DependsOn"], json!("Vpc"));

    // A subnet entry does not read as a VPC
    assert!(reparsed.resource::<ec2_vpc::Vpc>("Subnet").is_err());
}

#[test]
fn get_att_targets_are_checked_against_return_attributes() {
    let mut template = Template::new();
    template.add_resource("Vpc", &vpc()).unwrap();
    let mut subnet = subnet();
    subnet.properties.vpc_id = Intrinsic::get_att("Vpc", ec2_vpc::ATTR_VPC_ID).into();
    subnet.properties.ipv6_cidr_block = Some(Intrinsic::get_att("Vpc", "Ipv6Cidr").into());
    template.add_resource("Subnet", &subnet).unwrap();

    let errors = catalog()
        .validate_template(&template, &ValidationConfig::default())
        .unwrap_err();
    assert_eq!(
        errors,
        vec![TemplateError::UnknownAttribute {
            logical_id: "Subnet".to_string(),
            target: "Vpc".to_string(),
            attribute: "Ipv6Cidr".to_string(),
        }]
    );
}

#[test]
fn constraint_violations_carry_paths() {
    let schema = catalog().get(logs_log_group::TYPE_NAME).unwrap().clone();
    let errors = schema
        .validate(&json!({
            "LogGroupName": "bad name!",
            "RetentionInDays": 2,
            "LogGroupClass": "ARCHIVE",
            "Tags": [{"Key": "team"}]
        }))
        .unwrap_err();

    assert!(errors.iter().any(|e| matches!(
        e,
        TypeError::PatternMismatch { path, .. } if path == "LogGroupName"
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        TypeError::InvalidEnumVariant { path, value, .. } if path == "RetentionInDays" && value == "2"
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        TypeError::InvalidEnumVariant { path, .. } if path == "LogGroupClass"
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        TypeError::MissingRequired { path } if path == "Tags/0/Value"
    )));

    let subnet = catalog().get(ec2_subnet::TYPE_NAME).unwrap().clone();
    let errors = subnet
        .validate(&json!({"Ipv4NetmaskLength": 40, "CidrBlock": [10]}))
        .unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&TypeError::MissingRequired {
        path: "VpcId".to_string()
    }));
    assert!(errors.iter().any(|e| matches!(
        e,
        TypeError::ValueOutOfRange { path, .. } if path == "Ipv4NetmaskLength"
    )));
    assert!(errors.iter().any(|e| matches!(
        e,
        TypeError::TypeMismatch { path, .. } if path == "CidrBlock"
    )));
}

fn specification() -> JsonValue {
    json!({
        "ResourceSpecificationVersion": "200.0.0",
        "PropertyTypes": {
            "AWS::EC2::Subnet.PrivateDnsNameOptionsOnLaunch": {
                "Documentation": "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-properties-ec2-subnet-privatednsnameoptionsonlaunch.html",
                "Properties": {
                    "EnableResourceNameDnsAAAARecord": {"PrimitiveType": "Boolean", "Required": false, "UpdateType": "Mutable"},
                    "EnableResourceNameDnsARecord": {"PrimitiveType": "Boolean", "Required": false, "UpdateType": "Mutable"},
                    "HostnameType": {"PrimitiveType": "String", "Required": false, "UpdateType": "Mutable"}
                }
            },
            "Tag": {
                "Properties": {
                    "Key": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"},
                    "Value": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"}
                }
            }
        },
        "ResourceTypes": {
            "AWS::AppConfig::Application": {
                "Documentation": "http://docs.aws.amazon.com/AWSCloudFormation/latest/UserGuide/aws-resource-appconfig-application.html",
                "Attributes": {"ApplicationId": {"PrimitiveType": "String"}},
                "Properties": {
                    "Description": {"PrimitiveType": "String", "Required": false, "UpdateType": "Mutable"},
                    "Name": {"PrimitiveType": "String", "Required": true, "UpdateType": "Mutable"},
                    "Tags": {"Type": "List", "ItemType": "Tag", "Required": false, "UpdateType": "Mutable"}
                }
            },
            "AWS::EC2::Subnet": {
                "Attributes": {
                    "Ipv6CidrBlocks": {"Type": "List", "PrimitiveItemType": "String"},
                    "NetworkAclAssociationId": {"PrimitiveType": "String"},
                    "SubnetId": {"PrimitiveType": "String"}
                },
                "Properties": {
                    "AssignIpv6AddressOnCreation": {"PrimitiveType": "Boolean", "Required": false, "UpdateType": "Mutable"},
                    "AvailabilityZone": {"PrimitiveType": "String", "Required": false, "UpdateType": "Immutable"},
                    "AvailabilityZoneId": {"PrimitiveType": "String", "Required": false, "UpdateType": "Immutable"},
                    "CidrBlock": {"PrimitiveType": "String", "Required": false, "UpdateType": "Immutable"},
                    "EnableDns64": {"PrimitiveType": "Boolean", "Required": false, "UpdateType": "Mutable"},
                    "EnableLniAtDeviceIndex": {"PrimitiveType": "Integer", "Required": false, "UpdateType": "Mutable"},
                    "Ipv4IpamPoolId": {"PrimitiveType": "String", "Required": false, "UpdateType": "Immutable"},
                    "Ipv4NetmaskLength": {"PrimitiveType": "Integer", "Required": false, "UpdateType": "Immutable"},
                    "Ipv6CidrBlock": {"PrimitiveType": "String", "Required": false, "UpdateType": "Mutable"},
                    "Ipv6Native": {"PrimitiveType": "Boolean", "Required": false, "UpdateType": "Mutable"},
                    "MapPublicIpOnLaunch": {"PrimitiveType": "Boolean", "Required": false, "UpdateType": "Mutable"},
                    "OutpostArn": {"PrimitiveType": "String", "Required": false, "UpdateType": "Immutable"},
                    "PrivateDnsNameOptionsOnLaunch": {"Type": "PrivateDnsNameOptionsOnLaunch", "Required": false, "UpdateType": "Mutable"},
                    "Tags": {"Type": "List", "ItemType": "Tag", "Required": false, "UpdateType": "Mutable"},
                    "VpcId": {"PrimitiveType": "String", "Required": true, "UpdateType": "Immutable"}
                }
            }
        }
    })
}

#[test]
fn catalog_conforms_to_specification() {
    let spec: Specification = serde_json::from_value(specification()).unwrap();
    let catalog = catalog();
    for type_name in spec.resource_type_names() {
        let report = conformance::check(catalog.get(type_name).unwrap(), &spec);
        assert!(report.is_conformant(), "{}", report);
    }
}

#[test]
fn altered_specification_reports_discrepancies() {
    let mut raw = specification();
    raw["ResourceTypes"]["AWS::EC2::Subnet"]["Properties"]["MapPublicIpOnLaunch"]["UpdateType"] =
        json!("Immutable");
    raw["ResourceTypes"]["AWS::EC2::Subnet"]["Properties"]["EnableDns64"]["PrimitiveType"] =
        json!("String");
    raw["ResourceTypes"]["AWS::EC2::Subnet"]["Attributes"]["Arn"] = json!({"PrimitiveType": "String"});
    raw["PropertyTypes"]["AWS::EC2::Subnet.PrivateDnsNameOptionsOnLaunch"]["Properties"]
        ["HostnameType"]["Required"] = json!(true);
    let spec: Specification = serde_json::from_value(raw).unwrap();

    let report = conformance::check(catalog().get(ec2_subnet::TYPE_NAME).unwrap(), &spec);
    assert!(report.discrepancies.contains(&Discrepancy::UpdateMismatch {
        scope: String::new(),
        name: "MapPublicIpOnLaunch".to_string(),
        catalog: UpdateBehavior::Mutable,
        specification: UpdateBehavior::Immutable,
    }));
    assert!(report.discrepancies.contains(&Discrepancy::TypeMismatch {
        scope: String::new(),
        name: "EnableDns64".to_string(),
        catalog: "Boolean".to_string(),
        specification: "String".to_string(),
    }));
    assert!(report.discrepancies.contains(&Discrepancy::MissingAttribute {
        name: "Arn".to_string()
    }));
    assert!(report.discrepancies.contains(&Discrepancy::RequiredMismatch {
        scope: "PrivateDnsNameOptionsOnLaunch".to_string(),
        name: "HostnameType".to_string(),
        catalog: false,
        specification: true,
    }));
    assert_eq!(report.discrepancies.len(), 4);

    let vpc = conformance::check(catalog().get(ec2_vpc::TYPE_NAME).unwrap(), &spec);
    assert_eq!(vpc.discrepancies, vec![Discrepancy::MissingResourceType]);
}
