mod backend_bridge;
mod config;
mod content;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use mailer::{DeliveryHandle, EmailJsMailer, SimulatedMailer};

use crate::backend_bridge::commands::BackendCommand;
use crate::backend_bridge::runtime;
use crate::config::{load_settings, DeliveryMode};
use crate::controller::events::UiEvent;
use crate::ui::FolioApp;

#[derive(Debug, Parser)]
#[command(name = "folio-desk", about = "Desktop portfolio with a contact form")]
struct Cli {
    /// Settings file (defaults to ./folio.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Page content TOML (defaults to the built-in portfolio).
    #[arg(long)]
    content: Option<PathBuf>,
    /// Force the simulated delivery backend regardless of settings.
    #[arg(long)]
    simulate_delivery: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let mut settings = load_settings(cli.config.as_deref());
    if cli.simulate_delivery {
        settings.delivery = DeliveryMode::Simulated;
    }
    if settings.delivery == DeliveryMode::EmailJs && !settings.delivery_ready() {
        tracing::warn!(
            "emailjs delivery selected but credentials are still placeholders; using the simulated backend"
        );
        settings.delivery = DeliveryMode::Simulated;
    }

    let content_path = cli.content.clone().or_else(|| settings.content_path.clone());
    let content = content::load_content(content_path.as_deref())?;

    let delivery: Box<dyn DeliveryHandle> = match settings.delivery {
        DeliveryMode::Simulated => Box::new(SimulatedMailer::new()),
        DeliveryMode::EmailJs => Box::new(
            EmailJsMailer::new(settings.mailer_config())
                .context("invalid email delivery configuration")?,
        ),
    };

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    runtime::launch(delivery, cmd_rx, ui_tx);

    let title = content.title.clone();
    let mode = settings.delivery;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FolioApp::new(content, mode, cmd_tx, ui_rx)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run app shell: {err}"))?;
    Ok(())
}
