use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use core_rtx::{UPLOAD_INSTRUCTIONS, compose, save_robots_txt, setup_logging};
use data_model_rtx::{CRAWLERS, CrawlerCategory, GenerationInput, Platform, PlatformInfo, Strategy, StrategyInfo};

#[derive(Parser)]
#[command(name = "robots-txt")]
#[command(about = "Generate a robots.txt for search engine and AI crawler visibility", long_about = None)]
struct CoreCli {
    #[command(subcommand)]
    command: Commands,
    /// Log debug details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a robots.txt
    Generate(Generate),

    /// List the visibility strategies
    Strategies,

    /// List the platform templates and the paths each one disallows
    Platforms,

    /// List the known crawlers
    Crawlers {
        /// Only list crawlers of this category: search or ai.
        #[arg(short, long)]
        category: Option<CrawlerCategory>,
    },
}

#[derive(Args)]
struct Generate {
    /// Visibility strategy: maxVisibility, aiOnly, or traditional.
    #[arg(short, long, default_value_t = Strategy::default())]
    strategy: Strategy,

    /// Platform template: custom, wordpress, shopify, or ecommerce.
    #[arg(short, long, default_value_t = Platform::default())]
    platform: Platform,

    /// Sitemap URL to advertise. Omitted when blank.
    #[arg(long, default_value = "")]
    sitemap_url: String,

    /// Output file path for the generated robots.txt. Prints to stdout when absent.
    #[arg(short, long, value_parser = validate_output_file)]
    output: Option<PathBuf>,
}

fn validate_output_file(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    if path.exists() && path.is_dir() {
        return Err(format!("Output path is a directory: {}", path.display()));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        return Err(format!(
            "Output file parent directory does not exist: {}",
            parent.display()
        ));
    }

    Ok(path)
}

fn warn_on_unparseable_sitemap(input: &GenerationInput) {
    if let Some(sitemap) = input.sitemap()
        && let Err(e) = url::Url::parse(sitemap)
    {
        tracing::warn!(sitemap, error = %e, "sitemap URL is not an absolute URL; emitting it as given");
    }
}

fn main() {
    let cli = CoreCli::parse();

    setup_logging(if cli.verbose {
        "robots_txt=debug,core_rtx=debug"
    } else {
        "robots_txt=info,core_rtx=info"
    });

    match cli.command {
        Commands::Generate(args) => {
            let input = GenerationInput::new(args.strategy, args.platform, args.sitemap_url);
            warn_on_unparseable_sitemap(&input);
            let robots_txt = compose(&input);

            match args.output {
                None => println!("{robots_txt}"),
                Some(path) => {
                    if let Err(e) = save_robots_txt(&path, &robots_txt) {
                        eprintln!("ERROR: {e}");
                        std::process::exit(1)
                    }
                    eprintln!("Wrote {}. Next steps:", path.display());
                    for (i, step) in UPLOAD_INSTRUCTIONS.iter().enumerate().skip(1) {
                        eprintln!("  {i}. {step}");
                    }
                }
            }
        }

        Commands::Strategies => {
            for info in Strategy::ALL.map(StrategyInfo::from) {
                println!("{:<14} {}", info.strategy, info.label);
                println!("{:<14} {}", "", info.description);
            }
        }

        Commands::Platforms => {
            for info in Platform::ALL.map(PlatformInfo::from) {
                println!("{:<10} {} ({})", info.platform, info.label, info.disallow.join(" "));
            }
        }

        Commands::Crawlers { category } => {
            let crawlers = CRAWLERS
                .iter()
                .filter(|c| category.is_none_or(|wanted| c.category == wanted));
            for c in crawlers {
                println!("{:<20} {:<8} {} ({})", c.user_agent, c.category, c.name, c.company);
            }
        }
    }
}
