use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use cfn_catalog_core::conformance::{self, Specification};
use cfn_catalog_core::registry::{Catalog, ValidationConfig};
use cfn_catalog_core::schema::{PropertySchema, ResourceSchema};
use cfn_catalog_core::template::Template;

#[derive(Parser)]
#[command(name = "cfn-catalog")]
#[command(about = "Typed catalog of CloudFormation resource schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List cataloged resource types
    List {
        /// Only list types of this service (e.g. EC2)
        #[arg(long)]
        service: Option<String>,
    },
    /// Show the property schema of a resource type
    Show {
        /// CloudFormation type name (e.g. AWS::EC2::VPC)
        type_name: String,

        /// Print as a resource specification fragment
        #[arg(long)]
        json: bool,
    },
    /// Validate a JSON template against the catalog
    Validate {
        /// Path to template file
        #[arg(default_value = "template.json")]
        file: PathBuf,

        /// Skip resources whose type is not cataloged
        #[arg(long)]
        allow_unknown_types: bool,

        /// Accept properties missing from the catalog
        #[arg(long)]
        allow_unknown_properties: bool,
    },
    /// Check the catalog against CloudFormationResourceSpecification.json
    Conform {
        /// Path to the resource specification
        spec: PathBuf,

        /// Only check this resource type
        #[arg(long = "type")]
        type_name: Option<String>,

        /// Show a diff of catalog and specification schemas
        #[arg(long)]
        diff: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { service } => run_list(service.as_deref()),
        Commands::Show { type_name, json } => run_show(&type_name, json),
        Commands::Validate {
            file,
            allow_unknown_types,
            allow_unknown_properties,
        } => run_validate(
            &file,
            &ValidationConfig {
                allow_unknown_types,
                allow_unknown_properties,
            },
        ),
        Commands::Conform {
            spec,
            type_name,
            diff,
        } => run_conform(&spec, type_name.as_deref(), diff),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cfn-catalog", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn catalog() -> Catalog {
    cfn_catalog_resources::catalog()
}

/// Type names of the catalog, optionally restricted to one service
fn list_types<'a>(catalog: &'a Catalog, service: Option<&str>) -> Vec<&'a str> {
    catalog
        .schemas()
        .filter(|schema| match service {
            Some(service) => schema
                .service()
                .is_some_and(|s| s.eq_ignore_ascii_case(service)),
            None => true,
        })
        .map(|schema| schema.type_name.as_str())
        .collect()
}

fn run_list(service: Option<&str>) -> Result<()> {
    let catalog = catalog();
    let types = list_types(&catalog, service);

    if types.is_empty() {
        match service {
            Some(service) => println!("{}", format!("No resource types for service {}.", service).yellow()),
            None => println!("{}", "No resource types cataloged.".yellow()),
        }
        return Ok(());
    }

    for type_name in &types {
        println!("{}", type_name);
    }
    println!();
    println!("{}", format!("{} resource types.", types.len()).dimmed());
    Ok(())
}

fn lookup<'a>(catalog: &'a Catalog, type_name: &str) -> Result<&'a ResourceSchema> {
    if let Some(schema) = catalog.get(type_name) {
        return Ok(schema);
    }
    let needle = type_name.to_lowercase();
    let similar: Vec<&str> = catalog
        .type_names()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect();
    if similar.is_empty() {
        bail!("Unknown resource type: {}", type_name);
    }
    bail!(
        "Unknown resource type: {} (did you mean {}?)",
        type_name,
        similar.join(", ")
    )
}

fn run_show(type_name: &str, json: bool) -> Result<()> {
    let catalog = catalog();
    let schema = lookup(&catalog, type_name)?;

    if json {
        let fragment = conformance::specification_fragment(schema);
        println!("{}", serde_json::to_string_pretty(&fragment)?);
        return Ok(());
    }

    println!("{}", schema.type_name.bold());
    if let Some(description) = &schema.description {
        println!("{}", description);
    }
    if let Some(url) = &schema.documentation_url {
        println!("{}", url.dimmed());
    }

    println!();
    println!("{}", "Properties:".cyan().bold());
    for property in schema.properties.values() {
        print_property(property, "  ");
    }

    for (name, property_type) in &schema.property_types {
        println!();
        println!("{}", format!("{}:", name).cyan().bold());
        for property in property_type.properties.values() {
            print_property(property, "  ");
        }
    }

    if !schema.return_attributes.is_empty() {
        println!();
        println!("{}", "Return attributes (Fn::GetAtt):".cyan().bold());
        for attribute in &schema.return_attributes {
            println!("  {}", attribute);
        }
    }
    Ok(())
}

fn print_property(property: &PropertySchema, indent: &str) {
    let required = if property.required {
        " required".red().to_string()
    } else {
        String::new()
    };
    println!(
        "{}{}: {}{}",
        indent,
        property.name.bold(),
        property.attr_type.to_string().green(),
        required
    );

    let constraints = &property.constraints;
    if !constraints.allowed_values.is_empty() {
        println!(
            "{}    allowed values: {}",
            indent,
            constraints.allowed_values.join(" | ")
        );
    }
    if let Some(pattern) = &constraints.pattern {
        println!("{}    pattern: {}", indent, pattern);
    }
    println!(
        "{}    update requires: {}",
        indent,
        property.update.update_requires()
    );
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run_validate(file: &Path, config: &ValidationConfig) -> Result<()> {
    let content = read_file(file)?;
    let template = Template::from_json(&content)
        .with_context(|| format!("Failed to parse template {}", file.display()))?;

    println!("{}", "Validating...".cyan());

    if let Err(errors) = catalog().validate_template(&template, config) {
        for error in &errors {
            println!("  {} {}", "✗".red(), error);
        }
        bail!("Template has {} errors", errors.len());
    }

    println!(
        "{}",
        format!(
            "✓ {} resources validated successfully.",
            template.resources.len()
        )
        .green()
    );
    Ok(())
}

fn run_conform(spec_path: &Path, type_name: Option<&str>, show_diff: bool) -> Result<()> {
    let content = read_file(spec_path)?;
    let spec = Specification::from_json(&content)?;
    log::debug!(
        "specification {} with {} resource types",
        spec.resource_specification_version
            .as_deref()
            .unwrap_or("(unversioned)"),
        spec.resource_types.len()
    );

    let catalog = catalog();
    let schemas: Vec<&ResourceSchema> = match type_name {
        Some(type_name) => vec![lookup(&catalog, type_name)?],
        None => catalog.schemas().collect(),
    };

    let mut failing = 0;
    for schema in &schemas {
        let report = conformance::check(schema, &spec);
        if report.is_conformant() {
            println!("{} {}", "✓".green(), schema.type_name);
            continue;
        }

        failing += 1;
        println!("{} {}", "✗".red(), schema.type_name.bold());
        for discrepancy in &report.discrepancies {
            println!("    {}", discrepancy);
        }
        if show_diff && let Ok((reference, _)) = spec.lenient_resource_schema(&schema.type_name)
        {
            print_diff(&reference.summary(), &schema.summary());
        }
    }

    if failing > 0 {
        bail!(
            "{} of {} resource types do not conform",
            failing,
            schemas.len()
        );
    }
    println!(
        "{}",
        format!("All {} resource types conform.", schemas.len()).green()
    );
    Ok(())
}

/// Line diff from the specification's view to the catalog's view
fn print_diff(specification: &str, catalog: &str) {
    println!(
        "\n{} {} {}",
        "---".red(),
        "specification".bold(),
        "+++ catalog".green()
    );

    let diff = TextDiff::from_lines(specification, catalog);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}
