use atelier::generate::{self, Site};
use atelier::route::Route;
use atelier::{config, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Static site generator for artist portfolios")]
#[command(long_about = "\
Static site generator for artist portfolios

A catalog of artworks and exhibitions becomes a complete portfolio site:
home, about, one portfolio page per category, one page per artwork, and a
contact page.

Content structure:

  content/
  ├── config.toml                  # Site config (optional, merged over defaults)
  ├── catalog.toml                 # Artworks and exhibitions (or catalog.json)
  ├── about.md                     # Biography (optional, markdown)
  └── images/
      ├── artworks/                # Files named in each artwork's `images`
      │   └── urban-reflections-i.jpg
      └── artist/
          ├── portrait.jpg         # About page portrait
          └── studio.jpg           # About page studio shot

Without a catalog file the bundled sample catalog is used. Images that are
missing render as titled placeholders.

Run 'atelier gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log per-page progress (same as RUST_LOG=debug)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the whole site into the output directory
    Build,
    /// Validate config and catalog, and list what would be built
    Check,
    /// List every page and the file it is written to
    Routes,
    /// Show which page a URL path renders
    Resolve {
        /// Site path, e.g. /portfolio?category=drawings
        path: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build => {
            let site = load_site(&cli.source)?;
            init_thread_pool(&site.config.processing);
            println!("==> Building {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&site, &cli.output)?;
            output::print_build_output(&site, &report, &cli.output);
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site = load_site(&cli.source)?;
            output::print_check_output(&site);
            println!("==> Content is valid");
        }
        Command::Routes => {
            let site = load_site(&cli.source)?;
            output::print_routes(&site.catalog);
        }
        Command::Resolve { path } => {
            let site = load_site(&cli.source)?;
            output::print_resolve(&path, &Route::parse(&path), &site.catalog);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load_site(source: &std::path::Path) -> Result<Site, Box<dyn std::error::Error>> {
    let site_config = config::load_config(source)?;
    Ok(Site::load(source, site_config)?)
}

/// Logs go to stderr so command output stays pipeable. `RUST_LOG` wins
/// over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "atelier=debug" } else { "atelier=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Initialize the rayon thread pool based on processing config.
///
/// Caps at the number of available CPU cores: user can constrain down, not up.
fn init_thread_pool(processing: &config::ProcessingConfig) {
    let threads = config::effective_threads(processing);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .ok();
}
