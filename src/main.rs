//! # Nautilus PvP
//!
//! The promotional site and store for the Nautilus PvP Minecraft server,
//! rendered as a native [Floem](https://github.com/lapce/floem) application.
//!
//! The window shows a navigation bar, the page for the current path and a
//! footer. Pages are chosen by [`pages::site_router`] from the path held in a
//! [`nautilus_store::PathStore`]; the cart lives in a
//! [`nautilus_store::CartStore`] that is shared by every visit to the store
//! page.

mod app;
mod clipboard;
mod config;
mod footer;
mod logging;
mod nav;
mod pages;
mod theme;
mod timer;
mod widgets;

use anyhow::Context;
use clap::Parser;
use floem::{kurbo::Size, window::WindowConfig, Application};
use tracing::info;

use crate::config::{Cli, SiteConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli).context("failed to load site configuration")?;
    logging::init(&config.log_level);

    info!(
        start_path = %config.start_path,
        server = %config.server_address,
        "starting Nautilus PvP site"
    );

    // The configuration is read-only for the rest of the process.
    let config: &'static SiteConfig = Box::leak(Box::new(config));
    let window = WindowConfig::default()
        .title(config.window.title.clone())
        .size(Size::new(config.window.width, config.window.height));

    Application::new()
        .window(move |_| app::app_view(config), Some(window))
        .run();

    Ok(())
}
