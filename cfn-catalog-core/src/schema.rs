//! Schema - Runtime descriptors for resource property schemas
//!
//! Every generated resource module builds a `ResourceSchema` describing its
//! `Properties` block, so templates assembled from plain JSON can be checked
//! against the same rules the typed structs encode.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use regex::Regex;
use serde_json::Value as JsonValue;

use crate::intrinsic::is_intrinsic;

/// Primitive property types as named by the resource specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Integer,
    Long,
    Double,
    Boolean,
    Timestamp,
    Json,
}

impl PrimitiveType {
    /// Parse a `PrimitiveType` / `PrimitiveItemType` value
    pub fn from_spec(name: &str) -> Option<Self> {
        match name {
            "String" => Some(PrimitiveType::String),
            "Integer" => Some(PrimitiveType::Integer),
            "Long" => Some(PrimitiveType::Long),
            "Double" => Some(PrimitiveType::Double),
            "Boolean" => Some(PrimitiveType::Boolean),
            "Timestamp" => Some(PrimitiveType::Timestamp),
            "Json" => Some(PrimitiveType::Json),
            _ => None,
        }
    }

    pub fn as_spec(&self) -> &'static str {
        match self {
            PrimitiveType::String => "String",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Long => "Long",
            PrimitiveType::Double => "Double",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Timestamp => "Timestamp",
            PrimitiveType::Json => "Json",
        }
    }

    /// Check whether a raw template literal is acceptable for this type.
    /// CloudFormation coerces scalar literals, so `"80"` is a valid Integer.
    fn accepts(&self, value: &JsonValue) -> bool {
        match self {
            PrimitiveType::String | PrimitiveType::Timestamp => {
                value.is_string() || value.is_number() || value.is_boolean()
            }
            PrimitiveType::Integer | PrimitiveType::Long => match value {
                JsonValue::Number(n) => n.is_i64() || n.is_u64(),
                JsonValue::String(s) => s.parse::<i64>().is_ok(),
                _ => false,
            },
            PrimitiveType::Double => match value {
                JsonValue::Number(_) => true,
                JsonValue::String(s) => s.parse::<f64>().is_ok(),
                _ => false,
            },
            PrimitiveType::Boolean => match value {
                JsonValue::Bool(_) => true,
                JsonValue::String(s) => s == "true" || s == "false",
                _ => false,
            },
            PrimitiveType::Json => value.is_object() || value.is_string(),
        }
    }
}

/// Property type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    /// Primitive value
    Primitive(PrimitiveType),
    /// List of items
    List(Box<AttributeType>),
    /// String-keyed map of values
    Map(Box<AttributeType>),
    /// Named property type (e.g. "PrivateDnsNameOptionsOnLaunch", "Tag")
    Object(String),
}

impl AttributeType {
    fn type_name(&self) -> String {
        match self {
            AttributeType::Primitive(p) => p.as_spec().to_string(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Object(name) => name.clone(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Effect of changing a property on an existing resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateBehavior {
    /// Update requires: No interruption
    #[default]
    Mutable,
    /// Update requires: Replacement
    Immutable,
    /// Update requires: Some interruptions
    Conditional,
}

impl UpdateBehavior {
    pub fn from_spec(name: &str) -> Option<Self> {
        match name {
            "Mutable" => Some(UpdateBehavior::Mutable),
            "Immutable" => Some(UpdateBehavior::Immutable),
            "Conditional" => Some(UpdateBehavior::Conditional),
            _ => None,
        }
    }

    pub fn as_spec(&self) -> &'static str {
        match self {
            UpdateBehavior::Mutable => "Mutable",
            UpdateBehavior::Immutable => "Immutable",
            UpdateBehavior::Conditional => "Conditional",
        }
    }

    /// Wording used by the AWS reference documentation
    pub fn update_requires(&self) -> &'static str {
        match self {
            UpdateBehavior::Mutable => "No interruption",
            UpdateBehavior::Immutable => "Replacement",
            UpdateBehavior::Conditional => "Some interruptions",
        }
    }
}

/// Value constraints documented for a property.
/// Constraints on a list property apply to its items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constraints {
    pub allowed_values: Vec<String>,
    pub pattern: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
}

impl Constraints {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Type error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
    #[error("{path}: type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        path: String,
        expected: String,
        got: String,
    },

    #[error("{path}: invalid value '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        path: String,
        value: String,
        expected: Vec<String>,
    },

    #[error("{path}: value '{value}' does not match pattern {pattern}")]
    PatternMismatch {
        path: String,
        value: String,
        pattern: String,
    },

    #[error("{path}: length {length} is outside {}..={}", fmt_bound(min), fmt_bound(max))]
    LengthOutOfRange {
        path: String,
        length: usize,
        min: Option<usize>,
        max: Option<usize>,
    },

    #[error("{path}: value {value} is outside {}..={}", fmt_bound(min), fmt_bound(max))]
    ValueOutOfRange {
        path: String,
        value: f64,
        min: Option<f64>,
        max: Option<f64>,
    },

    #[error("{path}: required property is missing")]
    MissingRequired { path: String },

    #[error("{path}: unknown property")]
    UnknownProperty { path: String },

    #[error("{path}: unknown property type '{name}'")]
    UnknownPropertyType { path: String, name: String },
}

fn fmt_bound<T: fmt::Display>(bound: &Option<T>) -> String {
    bound.as_ref().map(|b| b.to_string()).unwrap_or_default()
}

/// Property schema
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    /// CloudFormation property name (e.g. "VpcId")
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    pub update: UpdateBehavior,
    pub description: Option<String>,
    pub constraints: Constraints,
}

impl PropertySchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            update: UpdateBehavior::Mutable,
            description: None,
            constraints: Constraints::default(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn update(mut self, update: UpdateBehavior) -> Self {
        self.update = update;
        self
    }

    /// Shorthand for `update(UpdateBehavior::Immutable)`
    pub fn create_only(self) -> Self {
        self.update(UpdateBehavior::Immutable)
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn allowed_values(mut self, values: &[&str]) -> Self {
        self.constraints.allowed_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.constraints.pattern = Some(pattern.into());
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.constraints.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.constraints.max_length = Some(max);
        self
    }

    pub fn min_value(mut self, min: f64) -> Self {
        self.constraints.min_value = Some(min);
        self
    }

    pub fn max_value(mut self, max: f64) -> Self {
        self.constraints.max_value = Some(max);
        self
    }
}

/// Nested property type schema
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTypeSchema {
    pub name: String,
    pub properties: BTreeMap<String, PropertySchema>,
    pub description: Option<String>,
}

impl PropertyTypeSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
            description: None,
        }
    }

    pub fn property(mut self, schema: PropertySchema) -> Self {
        self.properties.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// Resource schema
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSchema {
    /// CloudFormation type name (e.g. "AWS::EC2::VPC")
    pub type_name: String,
    pub description: Option<String>,
    pub documentation_url: Option<String>,
    pub properties: BTreeMap<String, PropertySchema>,
    pub property_types: BTreeMap<String, PropertyTypeSchema>,
    /// Attributes readable with `Fn::GetAtt`
    pub return_attributes: Vec<String>,
}

impl ResourceSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            description: None,
            documentation_url: None,
            properties: BTreeMap::new(),
            property_types: BTreeMap::new(),
            return_attributes: Vec::new(),
        }
    }

    pub fn property(mut self, schema: PropertySchema) -> Self {
        self.properties.insert(schema.name.clone(), schema);
        self
    }

    pub fn property_type(mut self, schema: PropertyTypeSchema) -> Self {
        self.property_types.insert(schema.name.clone(), schema);
        self
    }

    pub fn return_attribute(mut self, name: impl Into<String>) -> Self {
        self.return_attributes.push(name.into());
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_documentation_url(mut self, url: impl Into<String>) -> Self {
        self.documentation_url = Some(url.into());
        self
    }

    /// Service segment of the type name (e.g. "EC2" for "AWS::EC2::VPC")
    pub fn service(&self) -> Option<&str> {
        self.type_name.split("::").nth(1)
    }

    /// Resolve a named property type, falling back to the shared `Tag`
    pub fn resolve_property_type(&self, name: &str) -> Option<PropertyTypeSchema> {
        self.property_types
            .get(name)
            .cloned()
            .or_else(|| (name == "Tag").then(types::tag_schema))
    }

    /// Validate a raw `Properties` object, rejecting unknown properties
    pub fn validate(&self, properties: &JsonValue) -> Result<(), Vec<TypeError>> {
        self.validate_with(properties, false)
    }

    /// Validate a raw `Properties` object
    pub fn validate_with(
        &self,
        properties: &JsonValue,
        allow_unknown_properties: bool,
    ) -> Result<(), Vec<TypeError>> {
        let mut validator = Validator::new(self, allow_unknown_properties);

        if !is_intrinsic(properties) {
            match properties {
                JsonValue::Object(map) => validator.check_object(&self.properties, map, ""),
                other => validator.errors.push(TypeError::TypeMismatch {
                    path: "Properties".to_string(),
                    expected: "Object".to_string(),
                    got: json_type_name(other).to_string(),
                }),
            }
        }

        if validator.errors.is_empty() {
            Ok(())
        } else {
            Err(validator.errors)
        }
    }

    /// One line per property, sorted, e.g. `Name: String (required, update: Mutable)`
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", self.type_name));
        write_properties(&mut out, "  ", &self.properties);
        for (name, property_type) in &self.property_types {
            out.push_str(&format!("  {}\n", name));
            write_properties(&mut out, "    ", &property_type.properties);
        }
        for attr in &self.return_attributes {
            out.push_str(&format!("  GetAtt {}\n", attr));
        }
        out
    }
}

fn write_properties(out: &mut String, indent: &str, properties: &BTreeMap<String, PropertySchema>) {
    for (name, property) in properties {
        let required = if property.required { "required, " } else { "" };
        out.push_str(&format!(
            "{}{}: {} ({}update: {})\n",
            indent,
            name,
            property.attr_type,
            required,
            property.update.as_spec()
        ));
    }
}

struct Validator<'a> {
    schema: &'a ResourceSchema,
    allow_unknown_properties: bool,
    /// Compiled `pattern` constraints; `None` for patterns the regex crate rejects
    patterns: HashMap<String, Option<Regex>>,
    errors: Vec<TypeError>,
}

impl<'a> Validator<'a> {
    fn new(schema: &'a ResourceSchema, allow_unknown_properties: bool) -> Self {
        Self {
            schema,
            allow_unknown_properties,
            patterns: HashMap::new(),
            errors: Vec::new(),
        }
    }

    fn pattern(&mut self, pattern: &str) -> Option<&Regex> {
        if !self.patterns.contains_key(pattern) {
            let compiled = match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    log::debug!("skipping unsupported pattern {}: {}", pattern, e);
                    None
                }
            };
            self.patterns.insert(pattern.to_string(), compiled);
        }
        self.patterns.get(pattern).and_then(Option::as_ref)
    }

    fn check_object(
        &mut self,
        properties: &BTreeMap<String, PropertySchema>,
        map: &serde_json::Map<String, JsonValue>,
        path: &str,
    ) {
        for (name, property) in properties {
            if property.required && !map.contains_key(name) {
                self.errors.push(TypeError::MissingRequired {
                    path: join_path(path, name),
                });
            }
        }

        for (name, value) in map {
            let property_path = join_path(path, name);
            match properties.get(name) {
                Some(property) => self.check_value(
                    &property.attr_type,
                    &property.constraints,
                    value,
                    &property_path,
                ),
                None if self.allow_unknown_properties => {}
                None => self.errors.push(TypeError::UnknownProperty {
                    path: property_path,
                }),
            }
        }
    }

    fn check_value(
        &mut self,
        attr_type: &AttributeType,
        constraints: &Constraints,
        value: &JsonValue,
        path: &str,
    ) {
        if is_intrinsic(value) {
            return;
        }

        match (attr_type, value) {
            (AttributeType::Primitive(p), v) if p.accepts(v) => {
                self.check_constraints(constraints, v, path)
            }
            (AttributeType::List(inner), JsonValue::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    self.check_value(inner, constraints, item, &join_path(path, &i.to_string()));
                }
            }
            (AttributeType::Map(inner), JsonValue::Object(map)) => {
                for (k, v) in map {
                    self.check_value(inner, constraints, v, &join_path(path, k));
                }
            }
            (AttributeType::Object(name), JsonValue::Object(map)) => {
                match self.schema.resolve_property_type(name) {
                    Some(property_type) => self.check_object(&property_type.properties, map, path),
                    None => self.errors.push(TypeError::UnknownPropertyType {
                        path: path.to_string(),
                        name: name.clone(),
                    }),
                }
            }
            _ => self.errors.push(TypeError::TypeMismatch {
                path: path.to_string(),
                expected: attr_type.type_name(),
                got: json_type_name(value).to_string(),
            }),
        }
    }

    fn check_constraints(&mut self, constraints: &Constraints, value: &JsonValue, path: &str) {
        if constraints.is_empty() {
            return;
        }

        let text = match value {
            JsonValue::String(s) => s.clone(),
            other => other.to_string(),
        };

        if !constraints.allowed_values.is_empty() && !constraints.allowed_values.contains(&text) {
            self.errors.push(TypeError::InvalidEnumVariant {
                path: path.to_string(),
                value: text.clone(),
                expected: constraints.allowed_values.clone(),
            });
        }

        if let Some(pattern) = &constraints.pattern
            && self.pattern(pattern).is_some_and(|re| !re.is_match(&text))
        {
            self.errors.push(TypeError::PatternMismatch {
                path: path.to_string(),
                value: text.clone(),
                pattern: pattern.clone(),
            });
        }

        if value.is_string() {
            let length = text.chars().count();
            let too_short = constraints.min_length.is_some_and(|min| length < min);
            let too_long = constraints.max_length.is_some_and(|max| length > max);
            if too_short || too_long {
                self.errors.push(TypeError::LengthOutOfRange {
                    path: path.to_string(),
                    length,
                    min: constraints.min_length,
                    max: constraints.max_length,
                });
            }
        }

        if constraints.min_value.is_some() || constraints.max_value.is_some() {
            let number = value.as_f64().or_else(|| text.parse::<f64>().ok());
            if let Some(n) = number {
                let too_small = constraints.min_value.is_some_and(|min| n < min);
                let too_large = constraints.max_value.is_some_and(|max| n > max);
                if too_small || too_large {
                    self.errors.push(TypeError::ValueOutOfRange {
                        path: path.to_string(),
                        value: n,
                        min: constraints.min_value,
                        max: constraints.max_value,
                    });
                }
            }
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}/{}", parent, child)
    }
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "Null",
        JsonValue::Bool(_) => "Boolean",
        JsonValue::Number(_) => "Number",
        JsonValue::String(_) => "String",
        JsonValue::Array(_) => "List",
        JsonValue::Object(_) => "Object",
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    pub fn string() -> AttributeType {
        AttributeType::Primitive(PrimitiveType::String)
    }

    pub fn integer() -> AttributeType {
        AttributeType::Primitive(PrimitiveType::Integer)
    }

    pub fn double() -> AttributeType {
        AttributeType::Primitive(PrimitiveType::Double)
    }

    pub fn boolean() -> AttributeType {
        AttributeType::Primitive(PrimitiveType::Boolean)
    }

    pub fn json() -> AttributeType {
        AttributeType::Primitive(PrimitiveType::Json)
    }

    pub fn list(inner: AttributeType) -> AttributeType {
        AttributeType::List(Box::new(inner))
    }

    pub fn map(inner: AttributeType) -> AttributeType {
        AttributeType::Map(Box::new(inner))
    }

    pub fn object(name: impl Into<String>) -> AttributeType {
        AttributeType::Object(name.into())
    }

    /// `Tags` as a list of key/value pairs
    pub fn tags() -> AttributeType {
        list(object("Tag"))
    }

    /// Shared `Tag` property type
    pub fn tag_schema() -> PropertyTypeSchema {
        PropertyTypeSchema::new("Tag")
            .property(
                PropertySchema::new("Key", string())
                    .required()
                    .min_length(1)
                    .max_length(128),
            )
            .property(PropertySchema::new("Value", string()).required().max_length(256))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_schema() -> ResourceSchema {
        ResourceSchema::new("AWS::Test::Thing")
            .property(
                PropertySchema::new("Name", types::string())
                    .required()
                    .min_length(1)
                    .max_length(8)
                    .pattern("^[a-z]+$"),
            )
            .property(PropertySchema::new("Mode", types::string()).allowed_values(&["on", "off"]))
            .property(
                PropertySchema::new("Count", types::integer())
                    .min_value(1.0)
                    .max_value(10.0),
            )
            .property(PropertySchema::new("Enabled", types::boolean()))
            .property(PropertySchema::new("Options", types::object("Options")))
            .property(PropertySchema::new("Tags", types::tags()))
            .property_type(
                PropertyTypeSchema::new("Options")
                    .property(PropertySchema::new("Level", types::integer()).required()),
            )
    }

    #[test]
    fn valid_properties() {
        let props = json!({
            "Name": "thing",
            "Mode": "on",
            "Count": "5",
            "Enabled": true,
            "Options": {"Level": 2},
            "Tags": [{"Key": "team", "Value": "infra"}]
        });
        assert!(sample_schema().validate(&props).is_ok());
    }

    #[test]
    fn missing_required_property() {
        let errors = sample_schema().validate(&json!({})).unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::MissingRequired {
                path: "Name".to_string()
            }]
        );
    }

    #[test]
    fn unknown_property_is_rejected_unless_allowed() {
        let props = json!({"Name": "a", "Extra": 1});
        let errors = sample_schema().validate(&props).unwrap_err();
        assert_eq!(
            errors,
            vec![TypeError::UnknownProperty {
                path: "Extra".to_string()
            }]
        );
        assert!(sample_schema().validate_with(&props, true).is_ok());
    }

    #[test]
    fn constraint_violations_are_collected() {
        let props = json!({"Name": "TooLongName", "Mode": "maybe", "Count": 11});
        let errors = sample_schema().validate(&props).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| matches!(e, TypeError::PatternMismatch { .. })));
        assert!(errors.iter().any(|e| matches!(e, TypeError::LengthOutOfRange { length: 11, .. })));
        assert!(errors.iter().any(|e| matches!(e, TypeError::InvalidEnumVariant { .. })));
        assert!(errors.iter().any(|e| matches!(e, TypeError::ValueOutOfRange { .. })));
    }

    #[test]
    fn patterns_compile_once_per_run() {
        let schema = ResourceSchema::new("AWS::Test::Thing").property(
            PropertySchema::new("Names", types::list(types::string())).pattern("^[a-z]+$"),
        );
        let mut validator = Validator::new(&schema, false);
        let props = json!({"Names": ["a", "B", "c", "D1"]});
        validator.check_object(&schema.properties, props.as_object().unwrap(), "");

        assert_eq!(validator.patterns.len(), 1);
        let paths: Vec<String> = validator.errors.iter().map(|e| e.to_string()).collect();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].starts_with("Names/1"));
        assert!(paths[1].starts_with("Names/3"));
    }

    #[test]
    fn unsupported_patterns_are_skipped() {
        let schema = ResourceSchema::new("AWS::Test::Thing").property(
            PropertySchema::new("Names", types::list(types::string())).pattern("^(?!x).*$"),
        );
        let mut validator = Validator::new(&schema, false);
        let props = json!({"Names": ["x", "y"]});
        validator.check_object(&schema.properties, props.as_object().unwrap(), "");

        assert!(validator.errors.is_empty());
        assert!(matches!(validator.patterns.get("^(?!x).*$"), Some(None)));
    }

    #[test]
    fn nested_errors_carry_paths() {
        let props = json!({
            "Name": "a",
            "Options": {"Level": "high"},
            "Tags": [{"Key": "k"}]
        });
        let errors = sample_schema().validate(&props).unwrap_err();
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        assert!(messages.contains(&"Options/Level: type mismatch: expected Integer, got String".to_string()));
        assert!(messages.contains(&"Tags/0/Value: required property is missing".to_string()));
    }

    #[test]
    fn intrinsics_are_accepted_anywhere() {
        let props = json!({
            "Name": {"Ref": "NameParam"},
            "Count": {"Fn::GetAtt": ["Other", "Count"]},
            "Options": {"Fn::If": ["Cond", {"Level": 1}, {"Ref": "AWS::NoValue"}]},
            "Tags": {"Fn::Split": [",", "a,b"]}
        });
        assert!(sample_schema().validate(&props).is_ok());
    }

    #[test]
    fn non_object_properties() {
        let errors = sample_schema().validate(&json!([1, 2])).unwrap_err();
        assert!(matches!(errors[0], TypeError::TypeMismatch { .. }));
    }

    #[test]
    fn unresolved_property_type() {
        let schema = ResourceSchema::new("AWS::Test::Thing")
            .property(PropertySchema::new("Config", types::object("Missing")));
        let errors = schema.validate(&json!({"Config": {}})).unwrap_err();
        assert!(matches!(errors[0], TypeError::UnknownPropertyType { .. }));
    }

    #[test]
    fn numeric_allowed_values() {
        let schema = ResourceSchema::new("AWS::Test::Thing").property(
            PropertySchema::new("Days", types::integer()).allowed_values(&["1", "3", "5"]),
        );
        assert!(schema.validate(&json!({"Days": 3})).is_ok());
        assert!(schema.validate(&json!({"Days": 4})).is_err());
    }

    #[test]
    fn summary_lists_properties() {
        let summary = sample_schema().summary();
        assert!(summary.starts_with("AWS::Test::Thing\n"));
        assert!(summary.contains("  Name: String (required, update: Mutable)\n"));
        assert!(summary.contains("  Tags: List<Tag> (update: Mutable)\n"));
        assert!(summary.contains("    Level: Integer (required, update: Mutable)\n"));
    }

    #[test]
    fn service_segment() {
        assert_eq!(ResourceSchema::new("AWS::EC2::VPC").service(), Some("EC2"));
    }
}
