use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use crate::config::Config;
use crate::route::RoutePath;
use crate::tui;

/// hackreg - terminal registration client for hackathon events
#[derive(Parser)]
#[command(
    name = "hackreg",
    version = crate::version::VERSION,
    about = "Terminal registration client for hackathon events",
    long_about = r#"hackreg renders the hackathon landing page in your terminal and lets you
register for the event without leaving it.

Examples:
  hackreg                          # Open the landing page
  hackreg /register                # Jump straight to the registration form
  hackreg --endpoint http://...    # Override the registration API endpoint"#
)]
pub struct Cli {
    /// Route path to open at startup, e.g. "/register" or "/event/schedule"
    pub path: Option<String>,

    /// Registration API endpoint override
    #[arg(short = 'e', long = "endpoint")]
    pub endpoint: Option<String>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        info!("{} starting", crate::version::full_version());
        if self.debug {
            debug!("Debug logging enabled");
        }

        let mut config = Config::init()?;
        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        config.validate()?;
        debug!("Configuration initialized");

        let route = self
            .path
            .as_deref()
            .map(RoutePath::parse)
            .unwrap_or_default();
        info!("Starting interactive mode at route {:?}", route.route);

        tui::run(config, route).await
    }
}
