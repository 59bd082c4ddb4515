//! Conformance - Diff cataloged schemas against the AWS resource specification
//!
//! AWS publishes `CloudFormationResourceSpecification.json`, listing every
//! resource type with its properties, item types, required flags and update
//! behavior. This module reads that document and reports where a cataloged
//! `ResourceSchema` disagrees with it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::schema::{
    AttributeType, PrimitiveType, PropertySchema, PropertyTypeSchema, ResourceSchema,
    UpdateBehavior,
};

#[derive(Debug, thiserror::Error)]
pub enum ConformanceError {
    #[error("Failed to parse resource specification: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resource type '{0}' is not in the specification")]
    UnknownResourceType(String),

    #[error("{owner}.{property}: cannot determine type")]
    UntypedProperty { owner: String, property: String },
}

/// The aggregated resource specification document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Specification {
    #[serde(default)]
    pub resource_specification_version: Option<String>,
    #[serde(default)]
    pub property_types: BTreeMap<String, SpecPropertyType>,
    #[serde(default)]
    pub resource_types: BTreeMap<String, SpecResourceType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecResourceType {
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, SpecProperty>,
    #[serde(default)]
    pub attributes: BTreeMap<String, SpecAttribute>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecPropertyType {
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, SpecProperty>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecProperty {
    #[serde(default)]
    pub documentation: Option<String>,
    #[serde(default)]
    pub primitive_type: Option<String>,
    #[serde(rename = "Type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub primitive_item_type: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub update_type: Option<String>,
    #[serde(default)]
    pub duplicates_allowed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpecAttribute {
    #[serde(default)]
    pub primitive_type: Option<String>,
    #[serde(rename = "Type", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub primitive_item_type: Option<String>,
}

impl Specification {
    pub fn from_json(json: &str) -> Result<Self, ConformanceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn resource_type_names(&self) -> impl Iterator<Item = &str> {
        self.resource_types.keys().map(String::as_str)
    }

    /// Build the schema the specification describes for `type_name`
    pub fn resource_schema(&self, type_name: &str) -> Result<ResourceSchema, ConformanceError> {
        let (schema, untyped) = self.lenient_resource_schema(type_name)?;
        match untyped.into_iter().next() {
            Some(Discrepancy::UntypedProperty { scope, name }) => {
                Err(ConformanceError::UntypedProperty {
                    owner: if scope.is_empty() {
                        type_name.to_string()
                    } else {
                        format!("{}.{}", type_name, scope)
                    },
                    property: name,
                })
            }
            _ => Ok(schema),
        }
    }

    /// Like `resource_schema`, but properties without a usable type are left
    /// out and returned as `UntypedProperty` discrepancies
    pub fn lenient_resource_schema(
        &self,
        type_name: &str,
    ) -> Result<(ResourceSchema, Vec<Discrepancy>), ConformanceError> {
        let resource = self
            .resource_types
            .get(type_name)
            .ok_or_else(|| ConformanceError::UnknownResourceType(type_name.to_string()))?;

        let mut schema = ResourceSchema::new(type_name);
        if let Some(doc) = &resource.documentation {
            schema = schema.with_documentation_url(doc.clone());
        }

        let mut untyped = Vec::new();
        let mut pending = Vec::new();
        for (name, property) in &resource.properties {
            let Some(prop) = spec_property(name, property) else {
                log::warn!("{}.{}: cannot determine type", type_name, name);
                untyped.push(Discrepancy::UntypedProperty {
                    scope: String::new(),
                    name: name.clone(),
                });
                continue;
            };
            collect_object_names(&prop.attr_type, &mut pending);
            schema = schema.property(prop);
        }

        // Pull in every nested property type reachable from the resource
        let mut seen = BTreeSet::new();
        while let Some(short_name) = pending.pop() {
            if !seen.insert(short_name.clone()) {
                continue;
            }
            let Some((qualified, property_type)) = self.lookup_property_type(type_name, &short_name)
            else {
                continue;
            };
            let mut nested = PropertyTypeSchema::new(short_name.clone());
            for (name, property) in &property_type.properties {
                let Some(prop) = spec_property(name, property) else {
                    log::warn!("{}.{}: cannot determine type", qualified, name);
                    untyped.push(Discrepancy::UntypedProperty {
                        scope: short_name.clone(),
                        name: name.clone(),
                    });
                    continue;
                };
                collect_object_names(&prop.attr_type, &mut pending);
                nested = nested.property(prop);
            }
            schema = schema.property_type(nested);
        }

        for name in resource.attributes.keys() {
            schema = schema.return_attribute(name.clone());
        }

        Ok((schema, untyped))
    }

    /// Property types are keyed `AWS::Service::Resource.Name`; `Tag` is global
    fn lookup_property_type(
        &self,
        type_name: &str,
        short_name: &str,
    ) -> Option<(String, &SpecPropertyType)> {
        let qualified = format!("{}.{}", type_name, short_name);
        self.property_types
            .get(&qualified)
            .map(|p| (qualified, p))
            .or_else(|| {
                self.property_types
                    .get(short_name)
                    .map(|p| (short_name.to_string(), p))
            })
    }
}

fn spec_property(name: &str, property: &SpecProperty) -> Option<PropertySchema> {
    let attr_type = spec_attribute_type(property)?;

    let mut schema = PropertySchema::new(name, attr_type);
    if property.required {
        schema = schema.required();
    }
    if let Some(update) = property.update_type.as_deref().and_then(UpdateBehavior::from_spec) {
        schema = schema.update(update);
    }
    if let Some(doc) = &property.documentation {
        schema = schema.with_description(doc.clone());
    }
    Some(schema)
}

fn spec_attribute_type(property: &SpecProperty) -> Option<AttributeType> {
    if let Some(primitive) = &property.primitive_type {
        return PrimitiveType::from_spec(primitive).map(AttributeType::Primitive);
    }

    let item_type = || -> Option<AttributeType> {
        match (&property.primitive_item_type, &property.item_type) {
            (Some(p), _) => PrimitiveType::from_spec(p).map(AttributeType::Primitive),
            (None, Some(item)) => Some(AttributeType::Object(item.clone())),
            (None, None) => None,
        }
    };

    match property.type_name.as_deref()? {
        "List" => item_type().map(|t| AttributeType::List(Box::new(t))),
        "Map" => item_type().map(|t| AttributeType::Map(Box::new(t))),
        other => Some(AttributeType::Object(other.to_string())),
    }
}

fn collect_object_names(attr_type: &AttributeType, names: &mut Vec<String>) {
    match attr_type {
        AttributeType::Object(name) => names.push(name.clone()),
        AttributeType::List(inner) | AttributeType::Map(inner) => {
            collect_object_names(inner, names)
        }
        AttributeType::Primitive(_) => {}
    }
}

/// One disagreement between the catalog and the specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    MissingResourceType,
    /// In the specification, not in the catalog
    MissingProperty { scope: String, name: String },
    /// In the catalog, not in the specification
    ExtraProperty { scope: String, name: String },
    RequiredMismatch {
        scope: String,
        name: String,
        catalog: bool,
        specification: bool,
    },
    TypeMismatch {
        scope: String,
        name: String,
        catalog: String,
        specification: String,
    },
    UpdateMismatch {
        scope: String,
        name: String,
        catalog: UpdateBehavior,
        specification: UpdateBehavior,
    },
    MissingPropertyType { name: String },
    /// Listed in the specification without a usable type
    UntypedProperty { scope: String, name: String },
    MissingAttribute { name: String },
    ExtraAttribute { name: String },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::MissingResourceType => {
                write!(f, "resource type is not in the specification")
            }
            Discrepancy::MissingProperty { scope, name } => {
                write!(f, "{}{}: missing from catalog", scope_prefix(scope), name)
            }
            Discrepancy::ExtraProperty { scope, name } => {
                write!(f, "{}{}: not in specification", scope_prefix(scope), name)
            }
            Discrepancy::RequiredMismatch {
                scope,
                name,
                catalog,
                specification,
            } => write!(
                f,
                "{}{}: required is {} in catalog, {} in specification",
                scope_prefix(scope),
                name,
                catalog,
                specification
            ),
            Discrepancy::TypeMismatch {
                scope,
                name,
                catalog,
                specification,
            } => write!(
                f,
                "{}{}: type is {} in catalog, {} in specification",
                scope_prefix(scope),
                name,
                catalog,
                specification
            ),
            Discrepancy::UpdateMismatch {
                scope,
                name,
                catalog,
                specification,
            } => write!(
                f,
                "{}{}: update is {} in catalog, {} in specification",
                scope_prefix(scope),
                name,
                catalog.as_spec(),
                specification.as_spec()
            ),
            Discrepancy::MissingPropertyType { name } => {
                write!(f, "property type {}: missing from catalog", name)
            }
            Discrepancy::UntypedProperty { scope, name } => {
                write!(f, "{}{}: no usable type in specification", scope_prefix(scope), name)
            }
            Discrepancy::MissingAttribute { name } => {
                write!(f, "GetAtt {}: missing from catalog", name)
            }
            Discrepancy::ExtraAttribute { name } => {
                write!(f, "GetAtt {}: not in specification", name)
            }
        }
    }
}

fn scope_prefix(scope: &str) -> String {
    if scope.is_empty() {
        String::new()
    } else {
        format!("{}.", scope)
    }
}

/// Result of checking one resource type
#[derive(Debug, Clone, PartialEq)]
pub struct ConformanceReport {
    pub type_name: String,
    pub discrepancies: Vec<Discrepancy>,
}

impl ConformanceReport {
    pub fn is_conformant(&self) -> bool {
        self.discrepancies.is_empty()
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_conformant() {
            return writeln!(f, "{}: conformant", self.type_name);
        }
        writeln!(
            f,
            "{}: {} discrepancies",
            self.type_name,
            self.discrepancies.len()
        )?;
        for d in &self.discrepancies {
            writeln!(f, "  {}", d)?;
        }
        Ok(())
    }
}

/// Diff a cataloged schema against the specification
pub fn check(schema: &ResourceSchema, spec: &Specification) -> ConformanceReport {
    let mut report = ConformanceReport {
        type_name: schema.type_name.clone(),
        discrepancies: Vec::new(),
    };

    let (reference, untyped) = match spec.lenient_resource_schema(&schema.type_name) {
        Ok(reference) => reference,
        Err(e) => {
            log::debug!("{}: {}", schema.type_name, e);
            report.discrepancies.push(Discrepancy::MissingResourceType);
            return report;
        }
    };

    let skipped = untyped
        .iter()
        .filter_map(|d| match d {
            Discrepancy::UntypedProperty { scope, name } => Some((scope.clone(), name.clone())),
            _ => None,
        })
        .collect();
    let mut differ = Differ {
        catalog: schema,
        reference: &reference,
        skipped,
        visited: BTreeSet::new(),
        discrepancies: untyped,
    };
    differ.diff_properties("", &schema.properties, &reference.properties);

    for name in &reference.return_attributes {
        if !schema.return_attributes.contains(name) {
            differ
                .discrepancies
                .push(Discrepancy::MissingAttribute { name: name.clone() });
        }
    }
    for name in &schema.return_attributes {
        if !reference.return_attributes.contains(name) {
            differ
                .discrepancies
                .push(Discrepancy::ExtraAttribute { name: name.clone() });
        }
    }

    report.discrepancies = differ.discrepancies;
    report
}

struct Differ<'a> {
    catalog: &'a ResourceSchema,
    reference: &'a ResourceSchema,
    /// (scope, name) of specification properties that could not be typed
    skipped: BTreeSet<(String, String)>,
    visited: BTreeSet<String>,
    discrepancies: Vec<Discrepancy>,
}

impl Differ<'_> {
    fn diff_properties(
        &mut self,
        scope: &str,
        catalog: &BTreeMap<String, PropertySchema>,
        reference: &BTreeMap<String, PropertySchema>,
    ) {
        for (name, expected) in reference {
            let Some(actual) = catalog.get(name) else {
                self.discrepancies.push(Discrepancy::MissingProperty {
                    scope: scope.to_string(),
                    name: name.clone(),
                });
                continue;
            };

            if actual.required != expected.required {
                self.discrepancies.push(Discrepancy::RequiredMismatch {
                    scope: scope.to_string(),
                    name: name.clone(),
                    catalog: actual.required,
                    specification: expected.required,
                });
            }

            if actual.attr_type != expected.attr_type {
                self.discrepancies.push(Discrepancy::TypeMismatch {
                    scope: scope.to_string(),
                    name: name.clone(),
                    catalog: actual.attr_type.to_string(),
                    specification: expected.attr_type.to_string(),
                });
            } else {
                let mut nested = Vec::new();
                collect_object_names(&actual.attr_type, &mut nested);
                for type_name in nested {
                    self.diff_property_type(&type_name);
                }
            }

            if actual.update != expected.update {
                self.discrepancies.push(Discrepancy::UpdateMismatch {
                    scope: scope.to_string(),
                    name: name.clone(),
                    catalog: actual.update,
                    specification: expected.update,
                });
            }
        }

        for name in catalog.keys() {
            if !reference.contains_key(name)
                && !self.skipped.contains(&(scope.to_string(), name.clone()))
            {
                self.discrepancies.push(Discrepancy::ExtraProperty {
                    scope: scope.to_string(),
                    name: name.clone(),
                });
            }
        }
    }

    fn diff_property_type(&mut self, name: &str) {
        if !self.visited.insert(name.to_string()) {
            return;
        }
        let Some(expected) = self.reference.resolve_property_type(name) else {
            return;
        };
        match self.catalog.resolve_property_type(name) {
            Some(actual) => self.diff_properties(name, &actual.properties, &expected.properties),
            None => self.discrepancies.push(Discrepancy::MissingPropertyType {
                name: name.to_string(),
            }),
        }
    }
}

/// Render a cataloged schema in the specification's own layout:
/// `{"PropertyTypes": {..}, "ResourceTypes": {type_name: {..}}}`
pub fn specification_fragment(schema: &ResourceSchema) -> JsonValue {
    let mut pending = Vec::new();
    for property in schema.properties.values() {
        collect_object_names(&property.attr_type, &mut pending);
    }

    let mut property_types = Map::new();
    let mut seen = BTreeSet::new();
    while let Some(name) = pending.pop() {
        if !seen.insert(name.clone()) {
            continue;
        }
        let Some(property_type) = schema.resolve_property_type(&name) else {
            continue;
        };
        for property in property_type.properties.values() {
            collect_object_names(&property.attr_type, &mut pending);
        }
        // Only the shared Tag falls through to an unqualified key
        let key = if schema.property_types.contains_key(&name) {
            format!("{}.{}", schema.type_name, name)
        } else {
            name
        };
        let mut entry = Map::new();
        entry.insert("Properties".into(), spec_properties(&property_type.properties));
        property_types.insert(key, JsonValue::Object(entry));
    }

    let mut resource = Map::new();
    if let Some(url) = &schema.documentation_url {
        resource.insert("Documentation".into(), url.as_str().into());
    }
    resource.insert("Properties".into(), spec_properties(&schema.properties));
    let attributes = schema
        .return_attributes
        .iter()
        .map(|name| (name.clone(), JsonValue::Object(Map::new())))
        .collect();
    resource.insert("Attributes".into(), JsonValue::Object(attributes));

    let mut resource_types = Map::new();
    resource_types.insert(schema.type_name.clone(), JsonValue::Object(resource));

    let mut fragment = Map::new();
    fragment.insert("PropertyTypes".into(), JsonValue::Object(property_types));
    fragment.insert("ResourceTypes".into(), JsonValue::Object(resource_types));
    JsonValue::Object(fragment)
}

fn spec_properties(properties: &BTreeMap<String, PropertySchema>) -> JsonValue {
    let entries = properties
        .iter()
        .map(|(name, property)| {
            let mut entry = spec_type_fields(&property.attr_type);
            entry.insert("Required".into(), property.required.into());
            entry.insert("UpdateType".into(), property.update.as_spec().into());
            (name.clone(), JsonValue::Object(entry))
        })
        .collect();
    JsonValue::Object(entries)
}

fn spec_type_fields(attr_type: &AttributeType) -> Map<String, JsonValue> {
    let mut fields = Map::new();
    match attr_type {
        AttributeType::Primitive(p) => {
            fields.insert("PrimitiveType".into(), p.as_spec().into());
        }
        AttributeType::List(inner) | AttributeType::Map(inner) => {
            let container = match attr_type {
                AttributeType::Map(_) => "Map",
                _ => "List",
            };
            fields.insert("Type".into(), container.into());
            match inner.as_ref() {
                AttributeType::Primitive(p) => {
                    fields.insert("PrimitiveItemType".into(), p.as_spec().into());
                }
                other => {
                    fields.insert("ItemType".into(), other.to_string().into());
                }
            }
        }
        AttributeType::Object(name) => {
            fields.insert("Type".into(), name.as_str().into());
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types;
    use serde_json::json;

    fn spec() -> Specification {
        serde_json::from_value(json!({
            "ResourceSpecificationVersion": "1.0.0",
            "PropertyTypes": {
                "AWS::Test::Thing.Options": {
                    "Properties": {
                        "Level": {"PrimitiveType": "Integer", "Required": true, "UpdateType": "Mutable"}
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
                "AWS::Test::Thing": {
                    "Documentation": "http://docs.example/thing",
                    "Attributes": {"Arn": {"PrimitiveType": "String"}},
                    "Properties": {
                        "Name": {"PrimitiveType": "String", "Required": true, "UpdateType": "Immutable"},
                        "Options": {"Type": "Options", "Required": false, "UpdateType": "Mutable"},
                        "Tags": {"Type": "List", "ItemType": "Tag", "Required": false, "UpdateType": "Mutable"},
                        "Ports": {"Type": "List", "PrimitiveItemType": "Integer", "Required": false, "UpdateType": "Mutable"}
                    }
                }
            }
        }))
        .unwrap()
    }

    fn conforming() -> ResourceSchema {
        ResourceSchema::new("AWS::Test::Thing")
            .property(PropertySchema::new("Name", types::string()).required().create_only())
            .property(PropertySchema::new("Options", types::object("Options")))
            .property(PropertySchema::new("Tags", types::tags()))
            .property(PropertySchema::new("Ports", types::list(types::integer())))
            .property_type(
                PropertyTypeSchema::new("Options")
                    .property(PropertySchema::new("Level", types::integer()).required()),
            )
            .return_attribute("Arn")
    }

    #[test]
    fn builds_schema_from_specification() {
        let schema = spec().resource_schema("AWS::Test::Thing").unwrap();
        assert_eq!(schema.properties.len(), 4);
        assert_eq!(schema.properties["Tags"].attr_type, types::tags());
        assert_eq!(schema.properties["Name"].update, UpdateBehavior::Immutable);
        assert!(schema.property_types.contains_key("Options"));
        assert!(schema.property_types.contains_key("Tag"));
        assert_eq!(schema.return_attributes, vec!["Arn".to_string()]);
    }

    #[test]
    fn conforming_schema_has_no_discrepancies() {
        let report = check(&conforming(), &spec());
        assert!(report.is_conformant(), "{}", report);
    }

    #[test]
    fn reports_each_kind_of_discrepancy() {
        let schema = ResourceSchema::new("AWS::Test::Thing")
            .property(PropertySchema::new("Name", types::string()))
            .property(PropertySchema::new("Options", types::object("Options")))
            .property(PropertySchema::new("Ports", types::list(types::string())))
            .property(PropertySchema::new("Extra", types::boolean()))
            .return_attribute("Id");

        let report = check(&schema, &spec());
        let d = &report.discrepancies;
        assert!(d.contains(&Discrepancy::MissingProperty {
            scope: String::new(),
            name: "Tags".to_string()
        }));
        assert!(d.contains(&Discrepancy::ExtraProperty {
            scope: String::new(),
            name: "Extra".to_string()
        }));
        assert!(d.contains(&Discrepancy::RequiredMismatch {
            scope: String::new(),
            name: "Name".to_string(),
            catalog: false,
            specification: true
        }));
        assert!(d.contains(&Discrepancy::UpdateMismatch {
            scope: String::new(),
            name: "Name".to_string(),
            catalog: UpdateBehavior::Mutable,
            specification: UpdateBehavior::Immutable
        }));
        assert!(d.contains(&Discrepancy::TypeMismatch {
            scope: String::new(),
            name: "Ports".to_string(),
            catalog: "List<String>".to_string(),
            specification: "List<Integer>".to_string()
        }));
        assert!(d.contains(&Discrepancy::MissingPropertyType {
            name: "Options".to_string()
        }));
        assert!(d.contains(&Discrepancy::MissingAttribute {
            name: "Arn".to_string()
        }));
        assert!(d.contains(&Discrepancy::ExtraAttribute {
            name: "Id".to_string()
        }));
        assert_eq!(d.len(), 8);
    }

    #[test]
    fn nested_property_discrepancies_are_scoped() {
        let schema = conforming().property_type(
            PropertyTypeSchema::new("Options")
                .property(PropertySchema::new("Level", types::integer())),
        );
        let report = check(&schema, &spec());
        assert_eq!(
            report.discrepancies,
            vec![Discrepancy::RequiredMismatch {
                scope: "Options".to_string(),
                name: "Level".to_string(),
                catalog: false,
                specification: true
            }]
        );
        assert!(report.to_string().contains("Options.Level: required is false"));
    }

    #[test]
    fn untyped_property_is_reported_and_skipped() {
        let mut spec = spec();
        let thing = spec.resource_types.get_mut("AWS::Test::Thing").unwrap();
        thing.properties.insert(
            "Ports".to_string(),
            SpecProperty {
                type_name: Some("List".to_string()),
                ..Default::default()
            },
        );

        let err = spec.resource_schema("AWS::Test::Thing").unwrap_err();
        assert!(matches!(
            err,
            ConformanceError::UntypedProperty { ref owner, ref property }
                if owner == "AWS::Test::Thing" && property == "Ports"
        ));

        let (reference, _) = spec.lenient_resource_schema("AWS::Test::Thing").unwrap();
        assert!(!reference.properties.contains_key("Ports"));
        assert!(reference.properties.contains_key("Name"));

        let report = check(&conforming(), &spec);
        assert_eq!(
            report.discrepancies,
            vec![Discrepancy::UntypedProperty {
                scope: String::new(),
                name: "Ports".to_string()
            }]
        );
        assert!(report.to_string().contains("Ports: no usable type in specification"));
    }

    #[test]
    fn unknown_resource_type() {
        let report = check(&ResourceSchema::new("AWS::Test::Other"), &spec());
        assert_eq!(report.discrepancies, vec![Discrepancy::MissingResourceType]);
    }

    #[test]
    fn fragment_of_a_schema_conforms_to_itself() {
        let fragment = specification_fragment(&conforming());
        assert_eq!(
            fragment["ResourceTypes"]["AWS::Test::Thing"]["Properties"]["Tags"],
            json!({"Type": "List", "ItemType": "Tag", "Required": false, "UpdateType": "Mutable"})
        );
        assert!(fragment["PropertyTypes"]["AWS::Test::Thing.Options"].is_object());
        assert!(fragment["PropertyTypes"]["Tag"].is_object());

        let spec: Specification = serde_json::from_value(fragment).unwrap();
        let report = check(&conforming(), &spec);
        assert!(report.is_conformant(), "{}", report);
    }
}
