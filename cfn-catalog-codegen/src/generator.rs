//! Rust module generation from a registry schema

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use anyhow::{Context as _, Result, anyhow, bail};
use heck::{ToPascalCase, ToShoutySnakeCase, ToSnakeCase};
use regex::Regex;

use crate::config::CodegenConfig;
use crate::registry_schema::{CfnProperty, CfnSchema};

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use", "where",
    "while", "yield",
];

/// Keywords that cannot be raw identifiers
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super"];

/// A generated catalog module
#[derive(Debug, Clone)]
pub struct GeneratedModule {
    /// CloudFormation type name (e.g. "AWS::EC2::VPC")
    pub type_name: String,
    /// Module name (e.g. "ec2_vpc")
    pub module_name: String,
    /// Properties struct name (e.g. "Vpc")
    pub struct_name: String,
    pub code: String,
}

impl GeneratedModule {
    /// Line declaring the module in the resources crate
    pub fn mod_entry(&self) -> String {
        format!("pub mod {};", self.module_name)
    }

    /// Line registering the type in `catalog()`
    pub fn catalog_entry(&self) -> String {
        format!(".with_type::<{}::{}>()", self.module_name, self.struct_name)
    }
}

/// Split "AWS::EC2::VPC" into ("EC2", "VPC")
pub fn parse_type_name(type_name: &str) -> Result<(&str, &str)> {
    let parts: Vec<&str> = type_name.split("::").collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        bail!("Invalid type name format: {}", type_name);
    }
    Ok((parts[1], parts[2]))
}

/// Whether changing a property replaces the resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Update {
    Mutable,
    Replacement,
}

#[derive(Debug, Default)]
struct ConstraintSpec {
    allowed_values: Vec<String>,
    pattern: Option<String>,
    min_length: Option<u64>,
    max_length: Option<u64>,
    minimum: Option<f64>,
    maximum: Option<f64>,
}

#[derive(Debug)]
struct Field {
    cfn_name: String,
    rust_name: String,
    rust_type: String,
    schema_type: String,
    required: bool,
    update: Update,
    constraints: ConstraintSpec,
    description: Option<String>,
}

#[derive(Debug)]
struct NestedType {
    schema_name: String,
    struct_name: String,
    description: Option<String>,
    fields: Vec<Field>,
}

struct Context<'a> {
    schema: &'a CfnSchema,
    resource_struct: String,
    nested: BTreeMap<String, &'a CfnProperty>,
    pending: Vec<String>,
}

impl<'a> Context<'a> {
    fn struct_name_for(&self, schema_name: &str) -> String {
        let name = schema_name.to_pascal_case();
        if name == self.resource_struct {
            format!("{}Property", name)
        } else {
            name
        }
    }

    /// Whether `target` is reachable from definition `from` through `$ref`s
    fn reaches(&self, from: &str, target: &str) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![from];
        while let Some(name) = stack.pop() {
            if name == target {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(def) = self.schema.definitions.get(name) {
                collect_refs(def, &mut stack);
            }
        }
        false
    }

    fn register_nested(&mut self, schema_name: &str, def: &'a CfnProperty) -> String {
        if !self.nested.contains_key(schema_name) {
            self.nested.insert(schema_name.to_string(), def);
            self.pending.push(schema_name.to_string());
        }
        self.struct_name_for(schema_name)
    }

    /// Returns (Rust type, schema type expression)
    fn rust_type(&mut self, prop_name: &str, prop: &'a CfnProperty) -> Result<(String, String)> {
        if let Some(ref_path) = &prop.ref_path {
            let def_name = ref_path
                .strip_prefix("#/definitions/")
                .ok_or_else(|| anyhow!("Unsupported $ref '{}' in {}", ref_path, prop_name))?;
            if def_name == "Tag" {
                return Ok(("Tag".to_string(), "types::object(\"Tag\")".to_string()));
            }
            let schema = self.schema;
            let def = schema
                .definitions
                .get(def_name)
                .ok_or_else(|| anyhow!("Unresolved $ref '{}' in {}", ref_path, prop_name))?;
            if def.properties.is_some() {
                let struct_name = self.register_nested(def_name, def);
                return Ok((struct_name, format!("types::object({:?})", def_name)));
            }
            return self.rust_type(def_name, def);
        }

        let types = match prop.type_str() {
            Some("string") => ("Value<String>", "types::string()"),
            Some("integer") => ("Value<i64>", "types::integer()"),
            Some("number") => ("Value<f64>", "types::double()"),
            Some("boolean") => ("Value<bool>", "types::boolean()"),
            Some("array") => {
                return match &prop.items {
                    Some(items) => {
                        let (item_type, item_schema) = self.rust_type(prop_name, items)?;
                        let schema_type = if item_schema == "types::object(\"Tag\")" {
                            "types::tags()".to_string()
                        } else {
                            format!("types::list({})", item_schema)
                        };
                        Ok((format!("Vec<{}>", item_type), schema_type))
                    }
                    None => Ok((
                        "Vec<Value<String>>".to_string(),
                        "types::list(types::string())".to_string(),
                    )),
                };
            }
            Some("object") if prop.properties.is_some() => {
                let struct_name = self.register_nested(prop_name, prop);
                return Ok((struct_name, format!("types::object({:?})", prop_name)));
            }
            _ => ("serde_json::Value", "types::json()"),
        };
        Ok((types.0.to_string(), types.1.to_string()))
    }

    fn field(
        &mut self,
        owner: Option<&str>,
        name: &str,
        prop: &'a CfnProperty,
        required: bool,
        update: Update,
    ) -> Result<Field> {
        let (mut rust_type, schema_type) = self
            .rust_type(name, prop)
            .with_context(|| format!("Failed to map property {}", name))?;
        // A struct holding itself, directly or through other structs, needs indirection
        if let Some(owner) = owner
            && let Some(def_name) = direct_struct_ref(self.schema, prop)
            && self.reaches(def_name, owner)
        {
            rust_type = format!("Box<{}>", rust_type);
        }
        Ok(Field {
            cfn_name: name.to_string(),
            rust_name: rust_field_name(name),
            rust_type,
            schema_type,
            required,
            update,
            constraints: constraints(name, prop),
            description: prop.description.clone(),
        })
    }
}

/// Generate the catalog module for one resource type
pub fn generate_module(schema: &CfnSchema, config: &CodegenConfig) -> Result<GeneratedModule> {
    let (service, resource) = parse_type_name(&schema.type_name)?;
    let module_name = format!("{}_{}", service.to_snake_case(), resource.to_snake_case());
    let struct_name = resource.to_pascal_case();

    let read_only = schema.read_only_names();
    let create_only = schema.create_only_names();
    let required: HashSet<&str> = schema.required.iter().map(String::as_str).collect();

    let mut ctx = Context {
        schema,
        resource_struct: struct_name.clone(),
        nested: BTreeMap::new(),
        pending: Vec::new(),
    };

    let mut fields = Vec::new();
    for (name, prop) in &schema.properties {
        if read_only.contains(name) {
            continue;
        }
        let update = if create_only.contains(name) {
            Update::Replacement
        } else {
            Update::Mutable
        };
        fields.push(ctx.field(None, name, prop, required.contains(name.as_str()), update)?);
    }

    let mut nested = Vec::new();
    while let Some(schema_name) = ctx.pending.pop() {
        let def = ctx.nested[&schema_name];
        let def_required: HashSet<&str> = def.required.iter().map(String::as_str).collect();
        let mut def_fields = Vec::new();
        for (name, prop) in def.properties.iter().flatten() {
            def_fields.push(ctx.field(
                Some(&schema_name),
                name,
                prop,
                def_required.contains(name.as_str()),
                Update::Mutable,
            )?);
        }
        nested.push(NestedType {
            struct_name: ctx.struct_name_for(&schema_name),
            schema_name,
            description: def.description.clone(),
            fields: def_fields,
        });
    }
    nested.sort_by(|a, b| a.schema_name.cmp(&b.schema_name));

    let return_attributes: Vec<(&String, &CfnProperty)> = schema
        .properties
        .iter()
        .filter(|(name, _)| read_only.contains(*name))
        .collect();

    log::debug!(
        "{}: {} fields, {} nested types, {} return attributes",
        schema.type_name,
        fields.len(),
        nested.len(),
        return_attributes.len()
    );

    let mut body = String::new();
    body.push_str("/// CloudFormation type name\n");
    body.push_str(&format!(
        "pub const TYPE_NAME: &str = \"{}\";\n\n",
        schema.type_name
    ));

    for (name, prop) in &return_attributes {
        if config.doc_comments {
            let doc = match &prop.description {
                Some(desc) => desc.clone(),
                None => format!("`Fn::GetAtt` attribute {}", name),
            };
            push_doc(&mut body, "", &[doc]);
        }
        body.push_str(&format!(
            "pub const {}: &str = \"{}\";\n\n",
            attr_const_name(name),
            name
        ));
    }

    let mut struct_doc = Vec::new();
    if let Some(desc) = &schema.description {
        struct_doc.push(desc.clone());
    }
    if let Some(url) = &schema.documentation_url {
        struct_doc.push(format!("Documentation: <{}>", url));
    }
    render_struct(&mut body, config, &struct_name, &struct_doc, &fields);

    for nested_type in &nested {
        body.push('\n');
        let doc: Vec<String> = nested_type.description.iter().cloned().collect();
        render_struct(
            &mut body,
            config,
            &nested_type.struct_name,
            &doc,
            &nested_type.fields,
        );
    }

    body.push('\n');
    body.push_str(&format!(
        "impl CloudFormationResource for {} {{\n",
        struct_name
    ));
    body.push_str("    const TYPE_NAME: &'static str = TYPE_NAME;\n\n");
    body.push_str("    fn schema() -> ResourceSchema {\n");
    body.push_str("        ResourceSchema::new(TYPE_NAME)\n");
    if let Some(desc) = &schema.description {
        body.push_str(&format!(
            "            .with_description({:?})\n",
            config.truncate_description(desc)
        ));
    }
    if let Some(url) = &schema.documentation_url {
        body.push_str(&format!("            .with_documentation_url({:?})\n", url));
    }
    for field in &fields {
        render_property_schema(&mut body, config, field, "            ", ".property(");
    }
    for nested_type in &nested {
        body.push_str("            .property_type(\n");
        body.push_str(&format!(
            "                PropertyTypeSchema::new({:?})\n",
            nested_type.schema_name
        ));
        for field in &nested_type.fields {
            render_property_schema(&mut body, config, field, "                    ", ".property(");
        }
        body.push_str("            )\n");
    }
    for (name, _) in &return_attributes {
        body.push_str(&format!(
            "            .return_attribute({})\n",
            attr_const_name(name)
        ));
    }
    body.push_str("    }\n}\n");

    let code = format!(
        "{}{}\n{}",
        render_header(&module_name, &schema.type_name),
        render_imports(config, &body),
        body
    );

    Ok(GeneratedModule {
        type_name: schema.type_name.clone(),
        module_name,
        struct_name,
        code,
    })
}

/// Definition name of a `$ref` that maps to a generated struct
fn direct_struct_ref<'s>(schema: &'s CfnSchema, prop: &CfnProperty) -> Option<&'s str> {
    let def_name = prop.ref_path.as_deref()?.strip_prefix("#/definitions/")?;
    let (name, def) = schema.definitions.get_key_value(def_name)?;
    (name != "Tag" && def.properties.is_some()).then_some(name.as_str())
}

fn collect_refs<'s>(prop: &'s CfnProperty, out: &mut Vec<&'s str>) {
    if let Some(name) = prop
        .ref_path
        .as_deref()
        .and_then(|r| r.strip_prefix("#/definitions/"))
    {
        out.push(name);
    }
    if let Some(items) = &prop.items {
        collect_refs(items, out);
    }
    for member in prop.properties.iter().flat_map(|p| p.values()) {
        collect_refs(member, out);
    }
}

fn render_header(module_name: &str, type_name: &str) -> String {
    format!(
        r#"//! {} catalog module
//!
//! Auto-generated from CloudFormation schema: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with cfn-catalog-codegen

"#,
        module_name, type_name
    )
}

fn render_imports(config: &CodegenConfig, body: &str) -> String {
    let core = &config.core_crate;
    let mut schema_items = Vec::new();
    if body.contains("PropertySchema::") {
        schema_items.push("PropertySchema");
    }
    if body.contains("PropertyTypeSchema::") {
        schema_items.push("PropertyTypeSchema");
    }
    schema_items.push("ResourceSchema");
    if body.contains("types::") {
        schema_items.push("types");
    }

    let mut imports = String::new();
    imports.push_str(&format!(
        "use {}::resource::CloudFormationResource;\n",
        core
    ));
    imports.push_str(&format!(
        "use {}::schema::{{{}}};\n",
        core,
        schema_items.join(", ")
    ));
    if body.contains("<Tag>") || body.contains(": Tag,") {
        imports.push_str(&format!("use {}::tag::Tag;\n", core));
    }
    if body.contains("Value<") {
        imports.push_str(&format!("use {}::value::Value;\n", core));
    }
    imports.push_str("use serde::{Deserialize, Serialize};\n");
    imports
}

fn render_struct(
    out: &mut String,
    config: &CodegenConfig,
    name: &str,
    doc: &[String],
    fields: &[Field],
) {
    if config.doc_comments && !doc.is_empty() {
        push_doc(out, "", doc);
    }
    let has_required = fields.iter().any(|f| f.required);
    if has_required {
        out.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
    } else {
        out.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
    }
    out.push_str(&format!("pub struct {} {{\n", name));

    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if config.doc_comments {
            push_doc(out, "    ", &field_doc(field));
        }
        if field.required {
            out.push_str(&format!("    #[serde(rename = \"{}\")]\n", field.cfn_name));
            out.push_str(&format!(
                "    pub {}: {},\n",
                field.rust_name, field.rust_type
            ));
        } else {
            out.push_str(&format!(
                "    #[serde(rename = \"{}\", default, skip_serializing_if = \"Option::is_none\")]\n",
                field.cfn_name
            ));
            out.push_str(&format!(
                "    pub {}: Option<{}>,\n",
                field.rust_name, field.rust_type
            ));
        }
    }

    out.push_str("}\n");
}

fn field_doc(field: &Field) -> Vec<String> {
    let mut sections = Vec::new();
    if let Some(desc) = &field.description {
        sections.push(desc.clone());
    }
    if field.required {
        sections.push("Required: Yes".to_string());
    }
    let c = &field.constraints;
    if !c.allowed_values.is_empty() {
        let values: Vec<String> = c.allowed_values.iter().map(|v| format!("`{}`", v)).collect();
        sections.push(format!("Allowed values: {}", values.join(" | ")));
    }
    if let Some(pattern) = &c.pattern {
        sections.push(format!("Pattern: `{}`", pattern));
    }
    match (c.min_length, c.max_length) {
        (Some(min), Some(max)) => sections.push(format!("Length: {}-{}", min, max)),
        (Some(min), None) => sections.push(format!("Minimum length: {}", min)),
        (None, Some(max)) => sections.push(format!("Maximum length: {}", max)),
        (None, None) => {}
    }
    match (c.minimum, c.maximum) {
        (Some(min), Some(max)) => sections.push(format!("Range: {}-{}", min, max)),
        (Some(min), None) => sections.push(format!("Minimum: {}", min)),
        (None, Some(max)) => sections.push(format!("Maximum: {}", max)),
        (None, None) => {}
    }
    let update = match field.update {
        Update::Mutable => "No interruption",
        Update::Replacement => "Replacement",
    };
    sections.push(format!("Update requires: {}", update));
    sections
}

/// Write doc paragraphs separated by empty `///` lines
fn push_doc(out: &mut String, indent: &str, sections: &[String]) {
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push_str(&format!("{}///\n", indent));
        }
        for line in section.trim().lines() {
            let line = line.trim_end();
            if line.is_empty() {
                out.push_str(&format!("{}///\n", indent));
            } else {
                out.push_str(&format!("{}/// {}\n", indent, line));
            }
        }
    }
}

fn render_property_schema(
    out: &mut String,
    config: &CodegenConfig,
    field: &Field,
    indent: &str,
    opener: &str,
) {
    let inner = format!("{}    ", indent);
    let call = format!("{}    ", inner);

    out.push_str(&format!("{}{}\n", indent, opener));
    out.push_str(&format!(
        "{}PropertySchema::new(\"{}\", {})",
        inner, field.cfn_name, field.schema_type
    ));

    if field.required {
        out.push_str(&format!("\n{}.required()", call));
    }
    if field.update == Update::Replacement {
        out.push_str(&format!("\n{}.create_only()", call));
    }
    let c = &field.constraints;
    if !c.allowed_values.is_empty() {
        let values: Vec<String> = c.allowed_values.iter().map(|v| format!("{:?}", v)).collect();
        out.push_str(&format!("\n{}.allowed_values(&[{}])", call, values.join(", ")));
    }
    if let Some(pattern) = &c.pattern {
        out.push_str(&format!("\n{}.pattern({:?})", call, pattern));
    }
    if let Some(min) = c.min_length {
        out.push_str(&format!("\n{}.min_length({})", call, min));
    }
    if let Some(max) = c.max_length {
        out.push_str(&format!("\n{}.max_length({})", call, max));
    }
    if let Some(min) = c.minimum {
        out.push_str(&format!("\n{}.min_value({:?})", call, min));
    }
    if let Some(max) = c.maximum {
        out.push_str(&format!("\n{}.max_value({:?})", call, max));
    }
    if let Some(desc) = &field.description {
        out.push_str(&format!(
            "\n{}.with_description({:?})",
            call,
            config.truncate_description(desc)
        ));
    }
    out.push_str(",\n");
    out.push_str(&format!("{})\n", indent));
}

fn rust_field_name(name: &str) -> String {
    let snake = name.to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else if PATH_KEYWORDS.contains(&snake.as_str()) {
        format!("{}_", snake)
    } else {
        snake
    }
}

fn attr_const_name(name: &str) -> String {
    format!("ATTR_{}", name.to_shouty_snake_case())
}

fn json_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn constraints(name: &str, prop: &CfnProperty) -> ConstraintSpec {
    // Constraints of a list apply to its items
    let source = match (&prop.items, prop.type_str()) {
        (Some(items), Some("array")) if items.ref_path.is_none() => items.as_ref(),
        _ => prop,
    };

    let allowed_values = match &source.enum_values {
        Some(values) => values.iter().map(json_literal).collect(),
        None if source.type_str() == Some("string") && may_carry_enum(name) => source
            .description
            .as_deref()
            .or(prop.description.as_deref())
            .and_then(extract_enum_from_description)
            .unwrap_or_default(),
        None => Vec::new(),
    };

    ConstraintSpec {
        allowed_values,
        pattern: source.pattern.clone(),
        min_length: source.min_length,
        max_length: source.max_length,
        minimum: source.minimum,
        maximum: source.maximum,
    }
}

/// IDs, ARNs, zones and regions are free-form strings even when their
/// descriptions quote example values
fn may_carry_enum(prop_name: &str) -> bool {
    let prop_lower = prop_name.to_lowercase();
    !(prop_lower.ends_with("id")
        || prop_lower.ends_with("arn")
        || prop_lower.contains("zone")
        || prop_lower.contains("region"))
}

/// Check if a string looks like a property name (CamelCase or PascalCase)
/// rather than an enum value (lowercase, kebab-case, or UPPER_CASE)
fn looks_like_property_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => s.chars().any(|c| c.is_lowercase()),
        _ => false,
    }
}

static DOUBLE_BACKTICK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``([^`]+)``").expect("valid backtick pattern"));

/// Extract enum values from description text.
/// CloudFormation quotes allowed values in double backticks (``value``).
fn extract_enum_from_description(description: &str) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let unique: Vec<String> = DOUBLE_BACKTICK
        .captures_iter(description)
        .map(|cap| cap[1].to_string())
        .filter(|v| !looks_like_property_name(v))
        .filter(|v| seen.insert(v.clone()))
        .collect();

    // A single quoted value is an example, not an enum
    if unique.len() >= 2 { Some(unique) } else { None }
}
