//! Template - A CloudFormation template document
//!
//! Resource entries are stored as JSON so resources of different types can
//! share one `Resources` map; typed access goes through `Resource<P>`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::CatalogError;
use crate::resource::{CloudFormationResource, Resource};

pub const DEFAULT_FORMAT_VERSION: &str = "2010-09-09";

fn default_format_version() -> String {
    DEFAULT_FORMAT_VERSION.to_string()
}

/// A CloudFormation template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion", default = "default_format_version")]
    pub format_version: String,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Parameters", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, JsonValue>,
    #[serde(rename = "Mappings", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, JsonValue>,
    #[serde(rename = "Conditions", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, JsonValue>,
    #[serde(rename = "Resources", default)]
    pub resources: BTreeMap<String, JsonValue>,
    #[serde(rename = "Outputs", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, JsonValue>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            format_version: default_format_version(),
            description: None,
            parameters: BTreeMap::new(),
            mappings: BTreeMap::new(),
            conditions: BTreeMap::new(),
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a typed resource under a new logical ID
    pub fn add_resource<P: CloudFormationResource>(
        &mut self,
        logical_id: impl Into<String>,
        resource: &Resource<P>,
    ) -> Result<(), CatalogError> {
        let logical_id = logical_id.into();
        if !is_valid_logical_id(&logical_id) {
            return Err(CatalogError::InvalidLogicalId(logical_id));
        }
        if self.resources.contains_key(&logical_id) {
            return Err(CatalogError::DuplicateLogicalId(logical_id));
        }
        log::debug!("adding {} as {}", P::TYPE_NAME, logical_id);
        self.resources.insert(logical_id, resource.to_json()?);
        Ok(())
    }

    /// Read a resource entry back as a typed resource
    pub fn resource<P: CloudFormationResource>(
        &self,
        logical_id: &str,
    ) -> Result<Resource<P>, CatalogError> {
        let entry = self
            .resources
            .get(logical_id)
            .ok_or_else(|| CatalogError::UnknownResource(logical_id.to_string()))?;
        Resource::from_json(entry.clone())
    }

    /// `Type` of a resource entry, if present
    pub fn resource_type(&self, logical_id: &str) -> Option<&str> {
        self.resources
            .get(logical_id)
            .and_then(|entry| entry.get("Type"))
            .and_then(|t| t.as_str())
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Logical IDs are non-empty and alphanumeric
pub fn is_valid_logical_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}
