//! Resource - Typed resource entries
//!
//! A `Resource<P>` is one entry of a template's `Resources` section: the
//! literal `Type`, the typed `Properties` block and the resource-level
//! attributes flattened beside them.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::attributes::ResourceAttributes;
use crate::error::CatalogError;
use crate::schema::ResourceSchema;

/// Implemented by every generated `Properties` struct
pub trait CloudFormationResource: Serialize + DeserializeOwned {
    /// CloudFormation type name (e.g. "AWS::AppConfig::Application")
    const TYPE_NAME: &'static str;

    /// Runtime schema of the `Properties` block
    fn schema() -> ResourceSchema;
}

/// A resource entry with typed properties
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: CloudFormationResource> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn with_attributes(mut self, attributes: ResourceAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn type_name(&self) -> &'static str {
        P::TYPE_NAME
    }

    pub fn to_json(&self) -> Result<serde_json::Value, CatalogError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn from_json(value: serde_json::Value) -> Result<Self, CatalogError> {
        let found = value
            .get("Type")
            .and_then(|t| t.as_str())
            .unwrap_or_default();
        if found != P::TYPE_NAME {
            return Err(CatalogError::TypeMismatch {
                expected: P::TYPE_NAME.to_string(),
                found: found.to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl<P: CloudFormationResource> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a, P> {
            #[serde(rename = "Type")]
            type_name: &'static str,
            #[serde(rename = "Properties")]
            properties: &'a P,
            #[serde(flatten)]
            attributes: &'a ResourceAttributes,
        }

        Entry {
            type_name: P::TYPE_NAME,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de, P: CloudFormationResource> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Entry {
            #[serde(rename = "Type")]
            type_name: String,
            #[serde(rename = "Properties", default)]
            properties: Option<serde_json::Value>,
            #[serde(flatten)]
            attributes: ResourceAttributes,
        }

        let entry = Entry::deserialize(deserializer)?;
        if entry.type_name != P::TYPE_NAME {
            return Err(de::Error::custom(format!(
                "resource type mismatch: expected {}, got {}",
                P::TYPE_NAME,
                entry.type_name
            )));
        }

        // An omitted Properties block reads as an empty object
        let properties = entry
            .properties
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
        let properties = serde_json::from_value(properties).map_err(de::Error::custom)?;

        Ok(Resource {
            properties,
            attributes: entry.attributes,
        })
    }
}
