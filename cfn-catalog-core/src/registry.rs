//! Registry - Lookup of resource schemas by CloudFormation type name
//!
//! The catalog crate registers every generated resource here; the registry
//! then validates raw template JSON against those schemas.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value as JsonValue;

use crate::attributes::DependsOn;
use crate::intrinsic::{PseudoParameter, Reference, collect_references};
use crate::resource::CloudFormationResource;
use crate::schema::{ResourceSchema, TypeError};
use crate::template::{Template, is_valid_logical_id};

/// Validation options
#[derive(Debug, Clone, Default)]
pub struct ValidationConfig {
    /// Accept resource types the catalog does not know (skips their properties)
    pub allow_unknown_types: bool,

    /// Accept properties missing from a resource's schema
    pub allow_unknown_properties: bool,
}

/// A problem found in a template
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("Template declares no resources")]
    NoResources,

    #[error("{0}: logical ID must be non-empty and alphanumeric")]
    InvalidLogicalId(String),

    #[error("{logical_id}: resource entry must be an object with a string Type")]
    MissingType { logical_id: String },

    #[error("{logical_id}: unknown resource type '{type_name}'")]
    UnknownResourceType {
        logical_id: String,
        type_name: String,
    },

    #[error("{logical_id}: {error}")]
    Property {
        logical_id: String,
        error: TypeError,
    },

    #[error("{logical_id}: DependsOn target '{target}' is not a resource")]
    UnknownDependency { logical_id: String, target: String },

    #[error("{logical_id}: condition '{condition}' is not declared")]
    UnknownCondition {
        logical_id: String,
        condition: String,
    },

    #[error("{logical_id}: reference to undeclared '{target}'")]
    UnresolvedReference { logical_id: String, target: String },

    #[error("{logical_id}: {target} has no attribute '{attribute}'")]
    UnknownAttribute {
        logical_id: String,
        target: String,
        attribute: String,
    },

    #[error("{logical_id}: malformed {function}: {message}")]
    MalformedIntrinsic {
        logical_id: String,
        function: String,
        message: String,
    },
}

/// Schemas of every cataloged resource type
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    schemas: BTreeMap<String, ResourceSchema>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, schema: ResourceSchema) {
        log::trace!("registering {}", schema.type_name);
        self.schemas.insert(schema.type_name.clone(), schema);
    }

    /// Builder form of `register` for a typed resource
    pub fn with_type<P: CloudFormationResource>(mut self) -> Self {
        self.register(P::schema());
        self
    }

    pub fn get(&self, type_name: &str) -> Option<&ResourceSchema> {
        self.schemas.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn schemas(&self) -> impl Iterator<Item = &ResourceSchema> {
        self.schemas.values()
    }

    /// Distinct service segments (e.g. "EC2", "S3")
    pub fn services(&self) -> BTreeSet<&str> {
        self.schemas.values().filter_map(|s| s.service()).collect()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Validate one raw resource entry (`Type`, `Properties`, attributes)
    pub fn validate_resource(
        &self,
        logical_id: &str,
        entry: &JsonValue,
        config: &ValidationConfig,
    ) -> Vec<TemplateError> {
        let mut errors = Vec::new();

        let Some(type_name) = entry.get("Type").and_then(|t| t.as_str()) else {
            errors.push(TemplateError::MissingType {
                logical_id: logical_id.to_string(),
            });
            return errors;
        };

        let Some(schema) = self.get(type_name) else {
            if !config.allow_unknown_types {
                errors.push(TemplateError::UnknownResourceType {
                    logical_id: logical_id.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            return errors;
        };

        let empty = JsonValue::Object(serde_json::Map::new());
        let properties = entry.get("Properties").unwrap_or(&empty);
        if let Err(type_errors) = schema.validate_with(properties, config.allow_unknown_properties)
        {
            errors.extend(type_errors.into_iter().map(|error| TemplateError::Property {
                logical_id: logical_id.to_string(),
                error,
            }));
        }

        errors
    }

    /// Validate a whole template: every resource plus cross-references
    pub fn validate_template(
        &self,
        template: &Template,
        config: &ValidationConfig,
    ) -> Result<(), Vec<TemplateError>> {
        let mut errors = Vec::new();

        if template.resources.is_empty() {
            errors.push(TemplateError::NoResources);
        }

        for (logical_id, entry) in &template.resources {
            log::debug!("validating resource {}", logical_id);
            if !is_valid_logical_id(logical_id) {
                errors.push(TemplateError::InvalidLogicalId(logical_id.clone()));
            }
            errors.extend(self.validate_resource(logical_id, entry, config));
            errors.extend(self.check_links(template, logical_id, entry));
        }

        for (logical_id, output) in &template.outputs {
            errors.extend(self.check_references(template, logical_id, output));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_links(
        &self,
        template: &Template,
        logical_id: &str,
        entry: &JsonValue,
    ) -> Vec<TemplateError> {
        let mut errors = Vec::new();

        if let Some(depends_on) = entry
            .get("DependsOn")
            .and_then(|d| serde_json::from_value::<DependsOn>(d.clone()).ok())
        {
            for target in depends_on.logical_ids() {
                if !template.resources.contains_key(target) {
                    errors.push(TemplateError::UnknownDependency {
                        logical_id: logical_id.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        if let Some(condition) = entry.get("Condition").and_then(|c| c.as_str())
            && !template.conditions.contains_key(condition)
        {
            errors.push(TemplateError::UnknownCondition {
                logical_id: logical_id.to_string(),
                condition: condition.to_string(),
            });
        }

        if let Some(properties) = entry.get("Properties") {
            errors.extend(self.check_references(template, logical_id, properties));
        }

        errors
    }

    fn check_references(
        &self,
        template: &Template,
        logical_id: &str,
        value: &JsonValue,
    ) -> Vec<TemplateError> {
        let mut errors = Vec::new();

        for reference in collect_references(value) {
            match reference {
                Reference::Ref(target) => {
                    let declared = template.resources.contains_key(&target)
                        || template.parameters.contains_key(&target)
                        || PseudoParameter::from_name(&target).is_some();
                    if !declared {
                        errors.push(TemplateError::UnresolvedReference {
                            logical_id: logical_id.to_string(),
                            target,
                        });
                    }
                }
                Reference::GetAtt {
                    logical_id: target,
                    attribute,
                } => {
                    if !template.resources.contains_key(&target) {
                        errors.push(TemplateError::UnresolvedReference {
                            logical_id: logical_id.to_string(),
                            target,
                        });
                        continue;
                    }
                    let known = template
                        .resource_type(&target)
                        .and_then(|type_name| self.get(type_name))
                        .map(|schema| {
                            schema.return_attributes.is_empty()
                                || schema.return_attributes.contains(&attribute)
                        })
                        .unwrap_or(true);
                    if !known {
                        errors.push(TemplateError::UnknownAttribute {
                            logical_id: logical_id.to_string(),
                            target,
                            attribute,
                        });
                    }
                }
                Reference::Malformed { function, message } => {
                    errors.push(TemplateError::MalformedIntrinsic {
                        logical_id: logical_id.to_string(),
                        function,
                        message,
                    });
                }
            }
        }

        errors
    }
}
