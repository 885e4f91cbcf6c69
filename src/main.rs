// Table scaffold generator CLI

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use table_scaffold::{config::GeneratorConfig, workspace::Tree, CodeGenerator, GenerateOptions};

#[derive(Parser)]
#[command(name = "table-scaffold")]
#[command(about = "Generate an Angular table component from an annotated C# model")]
struct Args {
    /// Component name
    #[arg(short, long)]
    name: String,

    /// Project name in the workspace file
    #[arg(short, long)]
    project: String,

    /// C# model file
    #[arg(short, long)]
    csfile: PathBuf,

    /// Partial name of the module file that declares the component
    #[arg(short, long)]
    module: Option<String>,

    /// Folder that receives the component folder
    #[arg(long)]
    path: Option<String>,

    /// Workspace root
    #[arg(short, long, default_value = ".")]
    root: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = GeneratorConfig::from_env();
    let generator = CodeGenerator::new(Tree::new(&args.root), config);

    let options = GenerateOptions {
        name: args.name,
        project: args.project,
        csfile: args.csfile,
        module: args.module,
        path: args.path,
    };

    let report = generator.generate(&options)?;
    println!(
        "Generated {} with {} columns in {}",
        report.context.component_class_name(),
        report.properties.len(),
        report.context.target_folder_path
    );

    Ok(())
}
