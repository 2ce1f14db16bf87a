// src/main.rs - Desktop entry point and command-line tools

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use freshveg::catalog::{self, Catalog, FilterQuery, PriceRange, SortKey};
use freshveg::config::StoreConfig;
use freshveg::error::Result;
use freshveg::logging;
use freshveg::ui::App;

#[derive(Parser)]
#[command(
    name = "freshveg",
    version = freshveg::VERSION,
    about = "FreshVeg organic vegetable storefront",
    long_about = None
)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at info level regardless of the configured level
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level regardless of the configured level
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the storefront window
    Run,
    /// Print the filtered and sorted catalog
    Catalog {
        #[arg(short, long, default_value = "")]
        search: String,
        #[arg(long, default_value = catalog::ALL_CATEGORIES)]
        category: String,
        /// all, low, medium or high
        #[arg(long, default_value = "all")]
        price: PriceRange,
        /// name, price-low, price-high or rating
        #[arg(long, default_value = "name")]
        sort: SortKey,
    },
    /// Validate configuration
    ValidateConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("❌ {}", err);
            return ExitCode::FAILURE;
        }
    };

    let _guard = match logging::init(&config.logging) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("❌ Failed to set up logging: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let outcome = match cli.command {
        Some(Commands::Run) | None => run_application(config),
        Some(Commands::Catalog {
            search,
            category,
            price,
            sort,
        }) => {
            let query = FilterQuery {
                search,
                category,
                price_range: price,
                sort,
            };
            print_catalog(&config, &query);
            Ok(())
        }
        Some(Commands::ValidateConfig) => validate_config(&config),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<StoreConfig> {
    let mut config = StoreConfig::load(cli.config.as_deref())?;

    if cli.debug {
        config.logging.level = "debug".to_string();
    } else if cli.verbose {
        config.logging.level = "info".to_string();
    }

    Ok(config)
}

fn run_application(config: StoreConfig) -> Result<()> {
    use dioxus::desktop::{tao::dpi::LogicalSize, Config, WindowBuilder};

    config.ensure_valid()?;

    tracing::info!(
        version = freshveg::VERSION,
        environment = %config.app.environment,
        "starting {}",
        config.app.name
    );

    let window = WindowBuilder::new()
        .with_title(config.ui.window_title.clone())
        .with_resizable(true)
        .with_inner_size(LogicalSize::new(
            config.ui.window_width,
            config.ui.window_height,
        ));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .with_context(config)
        .launch(App);

    Ok(())
}

fn print_catalog(config: &StoreConfig, query: &FilterQuery) {
    let catalog = Catalog::seed();
    let products = catalog::apply(catalog.products(), query);

    println!(
        "{} | {} | {} | {}",
        config.app.name,
        catalog.category_label(&query.category),
        query.price_range.label(&config.shop.currency_label),
        query.sort.label()
    );
    for product in &products {
        println!(
            "  {:>2}  {:<28} {:>12}  {:.1}★  {}",
            product.id,
            product.name,
            config.shop.format_money(product.price),
            product.rating,
            catalog.category_label(&product.category)
        );
    }
    println!("{} product(s)", products.len());
}

fn validate_config(config: &StoreConfig) -> Result<()> {
    println!("Validating configuration...");

    let problems = config.validate();
    if problems.is_empty() {
        println!("✅ Configuration is valid");
        println!("   Store: {}", config.app.name);
        println!("   Version: {}", freshveg::VERSION);
        println!("   Environment: {}", config.app.environment);
        return Ok(());
    }

    for problem in &problems {
        println!("   • {}", problem);
    }
    config.ensure_valid()
}
