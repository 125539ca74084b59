//! Trek Nav - navigation menu of a trekking and tour site
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use trek_nav::headless::HeadlessEvent;
use treknav_app::config::{self, PresentationMode};
use treknav_app::Router;
use treknav_core::{logging, Route};

/// Trek Nav - navigation menu of a trekking and tour site
#[derive(Parser, Debug)]
#[command(name = "trek-nav")]
#[command(about = "Browse a site's navigation menu in the terminal", long_about = None)]
struct Args {
    /// Project directory holding .treknav/ (defaults to the current directory)
    #[arg(value_name = "PROJECT_DIR")]
    path: Option<PathBuf>,

    /// Menu file to load instead of .treknav/menu.toml
    #[arg(long, value_name = "PATH")]
    menu: Option<PathBuf>,

    /// Route to start on (overrides behavior.initial_route)
    #[arg(long)]
    route: Option<String>,

    /// Always show the mobile drawer
    #[arg(long, conflicts_with = "desktop")]
    mobile: bool,

    /// Always show the desktop bar
    #[arg(long)]
    desktop: bool,

    /// Run in headless mode (NDJSON on stdin/stdout, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write default .treknav/config.toml and menu.toml, then exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let project_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        config::init_config_dir(&project_path)?;
        eprintln!(
            "Wrote default configuration to {}",
            project_path.join(".treknav").display()
        );
        return Ok(());
    }

    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    let mut settings = config::load_settings(&project_path);
    if args.mobile {
        settings.ui.presentation = PresentationMode::Mobile;
    } else if args.desktop {
        settings.ui.presentation = PresentationMode::Desktop;
    }

    let tree = match config::load_menu(&project_path, args.menu.as_deref()) {
        Ok(tree) => Arc::new(tree),
        Err(e) => {
            // Scripts read stdout, not stderr
            if args.headless {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
            return Err(e.into());
        }
    };
    let route = args
        .route
        .map(Route::from)
        .unwrap_or_else(|| Route::from(settings.behavior.initial_route.clone()));
    info!(
        "Loaded {} menu entries, starting at {}",
        tree.len(),
        route
    );

    let router = Router::new(route);
    if args.headless {
        trek_nav::run_headless(tree, settings, &router).await?;
    } else {
        trek_nav::run(tree, settings, &router).await?;
    }

    info!("Route history: {:?}", router.history());
    Ok(())
}
