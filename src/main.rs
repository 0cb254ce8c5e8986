#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use anyhow::Context;
use iced::window;
use iced::Size;

use autosave::config::Config;
use autosave::storage::ConfyStore;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::load();
    let store = ConfyStore::open_default().context("draft storage is unavailable")?;
    tracing::info!(
        path = %store.path().display(),
        debounce_ms = config.debounce_ms,
        "auto-save started"
    );

    let timings = config.timings();
    iced::application(move || app::new(store.clone(), timings), app::update, app::view)
        .title("Auto-save")
        .theme(app::theme)
        .subscription(app::subscription)
        .window(window::Settings {
            size: Size::new(900.0, 640.0),
            min_size: Some(Size::new(480.0, 360.0)),
            ..Default::default()
        })
        .settings(app::settings())
        .run()
        .map_err(|e| anyhow::anyhow!("editor window failed: {e}"))
}
