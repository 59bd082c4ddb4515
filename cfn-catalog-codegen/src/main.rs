//! CloudFormation registry schema to catalog module generator
//!
//! Usage:
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type \
//!     --type RESOURCE --type-name AWS::EC2::VPC --query 'Schema' --output text | \
//!     cfn-catalog-codegen --type-name AWS::EC2::VPC
//!
//!   # Generate from file into the resources crate
//!   cfn-catalog-codegen --file schemas/ec2_vpc.json \
//!     -o cfn-catalog-resources/src/ec2_vpc.rs --mod-entry

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use clap::Parser;

use cfn_catalog_codegen::{CfnSchema, CodegenConfig, generate_module};

#[derive(Parser, Debug)]
#[command(name = "cfn-catalog-codegen")]
#[command(about = "Generate typed catalog modules from CloudFormation registry schemas")]
struct Args {
    /// Expected CloudFormation type name (e.g., AWS::EC2::VPC)
    #[arg(long)]
    type_name: Option<String>,

    /// Input file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,

    /// Print the `pub mod` and `catalog()` lines for the generated module
    #[arg(long)]
    mod_entry: bool,

    /// Maximum characters of embedded descriptions
    #[arg(long, default_value_t = 200)]
    description_limit: usize,

    /// Omit doc comments from the generated code
    #[arg(long)]
    no_docs: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let schema_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let schema =
        CfnSchema::from_json(&schema_json).context("Failed to parse CloudFormation schema")?;

    if let Some(expected) = &args.type_name
        && expected != &schema.type_name
    {
        bail!(
            "Schema describes {}, not {}",
            schema.type_name,
            expected
        );
    }

    let config = CodegenConfig {
        description_limit: args.description_limit,
        doc_comments: !args.no_docs,
        ..Default::default()
    };

    log::info!("generating {}", schema.type_name);
    let module = generate_module(&schema, &config)?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &module.code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!("Generated: {}", output_path);
    } else {
        print!("{}", module.code);
    }

    if args.mod_entry {
        eprintln!("{}", module.mod_entry());
        eprintln!("{}", module.catalog_entry());
    }

    Ok(())
}
