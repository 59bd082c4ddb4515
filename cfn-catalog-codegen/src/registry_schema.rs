//! CloudFormation registry schema documents

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

/// CloudFormation Resource Schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnSchema {
    pub type_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub documentation_url: Option<String>,
    pub properties: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub definitions: BTreeMap<String, CfnProperty>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub read_only_properties: Vec<String>,
    #[serde(default)]
    pub create_only_properties: Vec<String>,
    #[serde(default)]
    pub write_only_properties: Vec<String>,
    #[serde(default)]
    pub primary_identifier: Option<Vec<String>>,
    #[serde(default)]
    pub tagging: Option<CfnTagging>,
}

/// CloudFormation Tagging metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnTagging {
    #[serde(default)]
    pub taggable: bool,
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TypeValue {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TypeValue::Single(s) => Some(s),
            // A union of types can only be carried as free-form JSON
            TypeValue::Multiple(v) if v.len() > 1 => None,
            TypeValue::Multiple(v) => v.first().map(|s| s.as_str()),
        }
    }
}

/// A property or definition
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfnProperty {
    #[serde(rename = "type")]
    pub prop_type: Option<TypeValue>,
    pub description: Option<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    pub items: Option<Box<CfnProperty>>,
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,
    pub properties: Option<BTreeMap<String, CfnProperty>>,
    #[serde(default)]
    pub required: Vec<String>,
    pub pattern: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    #[serde(default)]
    pub insertion_order: Option<bool>,
    #[serde(default)]
    pub unique_items: Option<bool>,
}

impl CfnProperty {
    pub fn type_str(&self) -> Option<&str> {
        self.prop_type.as_ref().and_then(|t| t.as_str())
    }
}

impl CfnSchema {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn read_only_names(&self) -> BTreeSet<String> {
        top_level_names(&self.read_only_properties)
    }

    pub fn create_only_names(&self) -> BTreeSet<String> {
        top_level_names(&self.create_only_properties)
    }

    pub fn is_taggable(&self) -> bool {
        self.tagging.as_ref().map(|t| t.taggable).unwrap_or(false)
    }
}

/// "/properties/Foo" -> "Foo"; pointers into a property's members are skipped
fn top_level_names(pointers: &[String]) -> BTreeSet<String> {
    pointers
        .iter()
        .filter_map(|p| p.strip_prefix("/properties/"))
        .filter(|p| !p.is_empty() && !p.contains('/'))
        .map(|p| p.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_names() {
        let schema = CfnSchema::from_json(
            r#"{
                "typeName": "AWS::Test::Thing",
                "properties": {},
                "readOnlyProperties": ["/properties/Arn", "/properties/Config/Id"],
                "createOnlyProperties": ["/properties/Name", "/properties/Config/Mode"]
            }"#,
        )
        .unwrap();
        assert_eq!(
            schema.read_only_names().into_iter().collect::<Vec<_>>(),
            vec!["Arn"]
        );
        assert_eq!(
            schema.create_only_names().into_iter().collect::<Vec<_>>(),
            vec!["Name"]
        );
        assert!(!schema.is_taggable());
    }

    #[test]
    fn test_type_union_has_no_single_type() {
        let prop: CfnProperty =
            serde_json::from_str(r#"{"type": ["string", "object"]}"#).unwrap();
        assert_eq!(prop.type_str(), None);

        let prop: CfnProperty = serde_json::from_str(r#"{"type": ["integer"]}"#).unwrap();
        assert_eq!(prop.type_str(), Some("integer"));
    }
}
