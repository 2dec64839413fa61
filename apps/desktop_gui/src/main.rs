mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the contacts API (overrides contacts.toml and env).
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = match load_settings()
        .and_then(|settings| settings.with_api_base_url(args.api_url.as_deref()))
    {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings.api_base_url);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Contact Manager")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Contact Manager",
        options,
        Box::new(|_cc| Ok(Box::new(ui::ContactManagerApp::new(cmd_tx, ui_rx)))),
    )
}
