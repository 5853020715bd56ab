//! `create-bulma-app` entrypoint.

use std::env;
use std::process::ExitCode;

use create_bulma_app::cli::{self, Command};
use create_bulma_app::{templates_dir, ScaffoldResult, TemplateRegistry};

fn main() -> ExitCode {
    let command = match cli::parse(env::args().skip(1).collect()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            cli::print_usage();
            return ExitCode::from(2);
        }
    };

    let result = match command {
        Command::Help => {
            cli::print_usage();
            Ok(())
        }
        Command::List { templates_dir: dir } => list(dir.as_deref()),
        Command::Create(options) => create(&options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn list(dir: Option<&std::path::Path>) -> ScaffoldResult<()> {
    let registry = TemplateRegistry::load(&templates_dir(dir))?;
    let width = registry
        .templates()
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or_default();
    for entry in registry.templates() {
        println!("{:<width$}  {}", entry.name, entry.description);
    }
    Ok(())
}

fn create(options: &cli::CreateOptions) -> ScaffoldResult<()> {
    let templates = templates_dir(options.templates_dir.as_deref());
    let report = create_bulma_app::run(options, &templates)?;
    println!(
        "Created {} from template `{}` ({} files, {} rewritten)",
        report.target.display(),
        report.template,
        report.files.len(),
        report.rewritten.len()
    );
    println!("\nNext steps:\n  cd {}\n  trunk serve", report.target.display());
    Ok(())
}
