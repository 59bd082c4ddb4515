//! cfn-catalog core
//!
//! Shared leaf types for the CloudFormation catalog: intrinsic functions,
//! resource attributes, tags, the typed resource wrapper, and the runtime
//! schema descriptors every generated resource module registers.

pub mod attributes;
pub mod conformance;
pub mod error;
pub mod intrinsic;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod tag;
pub mod template;
pub mod value;

pub use attributes::{DeletionPolicy, DependsOn, ResourceAttributes, UpdateReplacePolicy};
pub use error::CatalogError;
pub use intrinsic::{Intrinsic, PseudoParameter, SelectIndex};
pub use registry::{Catalog, ValidationConfig};
pub use resource::{CloudFormationResource, Resource};
pub use tag::Tag;
pub use template::Template;
pub use value::Value;
