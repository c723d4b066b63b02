mod archive;
mod args;
mod context;
mod error;
mod excludes;
mod result;
mod utils;
mod validate;

use args::Args;
use context::Context;
use excludes::ExcludeList;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        path,
        exclude,
        output,
        verbose,
    } = Args::parse();

    let project_root = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    // Create context
    let ctx = Context::new(project_root, verbose);

    // Use cliclack for nice UI
    cliclack::intro("unipack")?;

    // Validate project structure and locate the milestone readme
    let readme = {
        let spinner = cliclack::spinner();
        spinner.start("Validating project structure...");
        match validate::validate_project(&ctx.project_root) {
            Ok(readme) => {
                spinner.stop("Project structure validated");
                readme
            }
            Err(e) => {
                spinner.error("Project structure validation failed");
                return Err(e);
            }
        }
    };

    // Resolve exclusion patterns
    let using_defaults = exclude.is_empty();
    let excludes = ExcludeList::resolve(&exclude)?;
    if using_defaults {
        cliclack::log::info("Using default exclusion patterns")?;
    }

    // Derive the output name from the readme unless one was given
    let output_path = output.unwrap_or_else(|| archive::derive_output_name(&readme));

    cliclack::log::info(format!("Project root : {}", ctx.project_root.display()))?;
    cliclack::log::info(format!("Output zip   : {}", output_path.display()))?;

    // Package the project
    let count = if ctx.verbose {
        cliclack::log::step("Packaging files...")?;
        archive::package(&ctx, &readme, &output_path, &excludes)?
    } else {
        let spinner = cliclack::spinner();
        spinner.start("Packaging files...");
        match archive::package(&ctx, &readme, &output_path, &excludes) {
            Ok(count) => {
                spinner.stop(format!("Packaged {} files", count));
                count
            }
            Err(e) => {
                spinner.error("Packaging failed");
                return Err(e);
            }
        }
    };

    cliclack::outro(format!(
        "Packaging complete: {} files in {}",
        count,
        output_path.display()
    ))?;
    Ok(())
}
