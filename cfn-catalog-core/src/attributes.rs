//! Resource attributes shared by every resource entry
//!
//! These live next to `Type` and `Properties` in a template's resource entry
//! (not inside `Properties`).

use serde::{Deserialize, Serialize};

/// `DependsOn` takes a single logical ID or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

impl DependsOn {
    pub fn logical_ids(&self) -> Vec<&str> {
        match self {
            DependsOn::One(id) => vec![id.as_str()],
            DependsOn::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// What happens to the physical resource when it leaves the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// What happens to the old physical resource after a replacement update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateReplacePolicy {
    Delete,
    Retain,
    Snapshot,
}

/// Resource-level attributes (`DependsOn`, `Condition`, `DeletionPolicy`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    #[serde(rename = "DependsOn", default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(
        rename = "DeletionPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_policy: Option<DeletionPolicy>,
    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<UpdateReplacePolicy>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(
        rename = "CreationPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_policy: Option<serde_json::Value>,
    #[serde(
        rename = "UpdatePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_policy: Option<serde_json::Value>,
}

impl ResourceAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency, promoting a single `DependsOn` to a list
    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        let logical_id = logical_id.into();
        self.depends_on = Some(match self.depends_on.take() {
            None => DependsOn::One(logical_id),
            Some(DependsOn::One(existing)) => DependsOn::Many(vec![existing, logical_id]),
            Some(DependsOn::Many(mut ids)) => {
                ids.push(logical_id);
                DependsOn::Many(ids)
            }
        });
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.deletion_policy = Some(policy);
        self
    }

    pub fn with_update_replace_policy(mut self, policy: UpdateReplacePolicy) -> Self {
        self.update_replace_policy = Some(policy);
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
