//! Command-line parsing and help output.

use std::path::PathBuf;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Template used when `--template` is omitted.
pub const DEFAULT_TEMPLATE: &str = "leptos-csr";

/// Options for creating a project.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateOptions {
    /// Project (and directory) name.
    pub project_name: String,
    /// Registered template name.
    pub template: String,
    /// Templates directory override.
    pub templates_dir: Option<PathBuf>,
    /// Directory the project directory is created in.
    pub parent_dir: PathBuf,
    /// Class prefix written to the generated `bulma.toml`.
    pub class_prefix: Option<String>,
    /// Version requirement written for `bulma_*` dependencies.
    pub bulma_version: String,
}

/// Parsed command selection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Create a project.
    Create(CreateOptions),
    /// List registered templates.
    List {
        /// Templates directory override.
        templates_dir: Option<PathBuf>,
    },
    /// Print usage.
    Help,
}

/// Parse raw arguments (without the program name).
pub fn parse(args: Vec<String>) -> ScaffoldResult<Command> {
    let mut project_name = None;
    let mut template = None;
    let mut templates_dir = None;
    let mut parent_dir = None;
    let mut class_prefix = None;
    let mut bulma_version = None;
    let mut list = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> ScaffoldResult<String> {
            match inline_value.clone().or_else(|| args.next()) {
                Some(value) if !value.is_empty() => Ok(value),
                _ => Err(ScaffoldError::invalid(format!("{name} requires a value"))),
            }
        };

        match flag.as_str() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "--list" => list = true,
            "--template" | "-t" => template = Some(value("--template")?),
            "--templates-dir" => templates_dir = Some(PathBuf::from(value("--templates-dir")?)),
            "--dir" => parent_dir = Some(PathBuf::from(value("--dir")?)),
            "--prefix" => class_prefix = Some(value("--prefix")?),
            "--bulma-version" => bulma_version = Some(value("--bulma-version")?),
            other if other.starts_with('-') => {
                return Err(ScaffoldError::invalid(format!("unknown option: {other}")));
            }
            _ => {
                if project_name.is_some() {
                    return Err(ScaffoldError::invalid(format!(
                        "unexpected extra argument: {arg}"
                    )));
                }
                project_name = Some(arg);
            }
        }
    }

    if list {
        return Ok(Command::List { templates_dir });
    }

    let Some(project_name) = project_name else {
        return Err(ScaffoldError::invalid("missing project name")
            .with_hint("run `create-bulma-app --help` for usage"));
    };

    Ok(Command::Create(CreateOptions {
        project_name,
        template: template.unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
        templates_dir,
        parent_dir: parent_dir.unwrap_or_else(|| PathBuf::from(".")),
        class_prefix,
        bulma_version: bulma_version.unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
    }))
}

/// Print the usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: create-bulma-app <project-name> [options]\n\
         \n\
         Options:\n\
           -t, --template <name>      Template to copy (default: {DEFAULT_TEMPLATE})\n\
           --templates-dir <dir>      Directory containing templates.toml\n\
           --dir <parent>             Create the project inside this directory (default: .)\n\
           --prefix <class-prefix>    Class prefix written to bulma.toml\n\
           --bulma-version <version>  Version used for bulma_* dependencies\n\
           --list                     List available templates\n\
           -h, --help                 Show this help\n"
    );
}
