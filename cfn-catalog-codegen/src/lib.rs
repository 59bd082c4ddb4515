//! cfn-catalog codegen
//!
//! Turns CloudFormation registry schemas (the document returned by
//! `aws cloudformation describe-type`) into catalog modules for
//! cfn-catalog-resources.

pub mod config;
pub mod generator;
pub mod registry_schema;

pub use config::CodegenConfig;
pub use generator::{GeneratedModule, generate_module};
pub use registry_schema::CfnSchema;
