//! Tag - Key/value pair shared by taggable resources

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A resource tag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// The key name of the tag.
    #[serde(rename = "Key")]
    pub key: Value<String>,
    /// The value for the tag.
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

impl Tag {
    pub fn new(key: impl Into<Value<String>>, value: impl Into<Value<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
