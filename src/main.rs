use clap::{Parser, Subcommand};
use mkdoc::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mkdoc")]
#[command(about = "Generate README.md from feature and flavour descriptors")]
#[command(long_about = "\
Generate README.md from feature and flavour descriptors

Each category directory holds one subdirectory per item, and each item holds
a YAML descriptor named after its category. A Handlebars template renders
them all into the README.

Project structure:

  project/
  ├── mkdoc.toml                   # Optional config (see gen-config)
  ├── README.md.handlebars         # Template
  ├── README.md                    # Output, replaced on every build
  ├── feature/
  │   ├── 01_intro/feature.yaml    # → docObjects.feature.intro
  │   └── 02_usage/feature.yaml    # → docObjects.feature.usage
  └── flavour/
      └── minimal/flavour.yaml     # → docObjects.flavour.minimal

Sort prefixes up to the first underscore (01_, aa_) are stripped from item
names. Items keep their on-disk order.")]
#[command(version)]
struct Cli {
    /// Project root containing the category directories and template
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the template and write the README (default)
    Build,
    /// Load every descriptor and compile the template without writing
    Check,
    /// Print the assembled document model as JSON
    Model,
    /// Print a stock mkdoc.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => {
            let config = config::load_config(&cli.root)?;
            let report = generate::generate(&cli.root, &config)?;
            output::print_generate_output(&report);
        }
        Command::Check => {
            let config = config::load_config(&cli.root)?;
            println!("==> Checking {}", cli.root.display());
            let assembly = generate::check(&cli.root, &config)?;
            output::print_assembly_output(&assembly.categories);
            println!("==> Descriptors and template are valid");
        }
        Command::Model => {
            let config = config::load_config(&cli.root)?;
            let assembly = generate::assemble(&cli.root, &config)?;
            println!("{}", serde_json::to_string_pretty(&assembly.model)?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
