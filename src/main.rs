use log::{error, info, warn};
use statscreen::core::constants::{DISPLAY_I2C_ADDR, I2C_BUS_PATH, REFRESH_INTERVAL};
use statscreen::core::{install_signal_handler, Shutdown, UpdateLoop};
use statscreen::display::{DisplayDriver, Oled};
use statscreen::render::{select_font, StatusRenderer};
use statscreen::sources::Collectors;

fn main() {
    // RUST_LOG overrides the default verbosity
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    warn!("Starting statscreen v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run() {
        error!("Fatal startup error: {:#}", e);
        std::process::exit(1);
    }

    info!("Shut down cleanly");
}

fn run() -> anyhow::Result<()> {
    let mut display = Oled::open(I2C_BUS_PATH, DISPLAY_I2C_ADDR)?;
    display.clear()?;

    let renderer = StatusRenderer::new(select_font());
    let collectors = Collectors::new();

    let shutdown = Shutdown::new();
    install_signal_handler(shutdown.clone())?;

    let mut update_loop = UpdateLoop::new(collectors, renderer, display, shutdown, REFRESH_INTERVAL);
    update_loop.run();

    Ok(())
}
