//! Minimal CLI: build the sample schema → print (types | resources)
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use regex::Regex;
use tracing::info;

use rdl_schema::{Resource, Schema, Type};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// build the sample address-book schema and print its dependency-ordered types or its resources
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    /// log at debug level (RUST_LOG overrides)
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print the declared types in resolved order
    Types(TypesOut),
    /// print the declared resources
    Resources(ResourcesOut),
}

#[derive(Args, Debug, Clone)]
struct OutputSettings {
    /// output text file (stdout if omitted); written without colors
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct TypesOut {
    #[command(flatten)]
    output_settings: OutputSettings,

    /// only print types whose name matches this regular expression
    #[arg(long)]
    filter: Option<String>,

    /// register the sample types in reverse order before finalizing
    #[arg(long, default_value_t = false)]
    reverse: bool,

    /// print the types in declaration order instead of resolving them
    #[arg(long, default_value_t = false)]
    declared: bool,
}

#[derive(clap::Parser, Debug)]
struct ResourcesOut {
    #[command(flatten)]
    output_settings: OutputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl OutputSettings {
    fn emit(&self, text: &str) -> Result<()> {
        match self.out.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("failed to create {}", parent.display()))?;
                }
                std::fs::write(out, text)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                info!(path = %out.display(), "wrote output");
            }
            None => print!("{text}"),
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Types(target) => {
                // debug path
                if target.output_settings.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                if target.output_settings.out.is_some() {
                    colored::control::set_override(false);
                }

                let filter = target
                    .filter
                    .as_deref()
                    .map(Regex::new)
                    .transpose()
                    .context("invalid --filter expression")?;

                let types = if target.declared {
                    let mut types = crate::sample::sample_types();
                    if target.reverse {
                        types.reverse();
                    }
                    types
                } else {
                    let schema = crate::sample::schema_builder(target.reverse)
                        .finalize()
                        .context("failed to finalize sample schema")?;
                    schema.types().to_vec()
                };

                let mut src = String::new();
                for (i, t) in types.iter().enumerate() {
                    if filter.as_ref().is_some_and(|rx| !rx.is_match(t.name())) {
                        continue;
                    }
                    render_type(&mut src, i + 1, t)?;
                }
                target.output_settings.emit(&src)
            }
            Command::Resources(target) => {
                // debug path
                if target.output_settings.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                if target.output_settings.out.is_some() {
                    colored::control::set_override(false);
                }

                let schema = crate::sample::schema_builder(false)
                    .finalize()
                    .context("failed to finalize sample schema")?;
                let src = render_resources(&schema)?;
                target.output_settings.emit(&src)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn render_type(out: &mut String, position: usize, t: &Type) -> std::fmt::Result {
    let deps = t.dependencies();
    write!(
        out,
        "{:>3}  {:<14} {:<8}",
        position,
        t.name().bold(),
        t.kind().to_string().cyan()
    )?;
    if t.supertype() != t.kind().name() {
        write!(out, " : {}", t.supertype().yellow())?;
    }
    if !deps.is_empty() {
        write!(out, "  <- {}", deps.join(", ").dimmed())?;
    }
    writeln!(out)
}

fn render_resources(schema: &Schema) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for r in schema.resources() {
        render_resource(&mut out, r)?;
    }
    Ok(out)
}

fn render_resource(out: &mut String, r: &Resource) -> std::fmt::Result {
    writeln!(
        out,
        "{} {} -> {} [{}]",
        r.method.green().bold(),
        r.path,
        r.type_name.bold(),
        r.expected
    )?;
    if let Some(name) = &r.name {
        writeln!(out, "    name      {name}")?;
    }
    for input in &r.inputs {
        let tag = if input.path_param {
            "path".to_string()
        } else if let Some(q) = &input.query_param {
            format!("query {q}")
        } else if let Some(h) = &input.header {
            format!("header {h}")
        } else {
            "body".to_string()
        };
        let opt = if input.optional { "?" } else { "" };
        writeln!(out, "    input     {}{opt}: {} ({tag})", input.name, input.type_name)?;
    }
    for output in &r.outputs {
        let opt = if output.optional { "?" } else { "" };
        writeln!(out, "    output    {}{opt}: {}", output.name, output.type_name)?;
    }
    if let Some(auth) = &r.auth {
        match (&auth.action, &auth.resource) {
            (Some(action), Some(resource)) => {
                writeln!(out, "    authorize {action} on {resource}")?
            }
            _ if auth.authenticate => writeln!(out, "    authenticate")?,
            _ => {}
        }
    }
    for (symbol, e) in &r.exceptions {
        writeln!(out, "    {:<9} {}", symbol.red(), e.type_name)?;
    }
    Ok(())
}
