use anyhow::Result;

use easel_engine::device::GpuInit;
use easel_engine::logging::{init_logging, LogTarget, LoggingConfig};
use easel_engine::window::Runtime;
use easel_painter::{Assets, PainterApp, PainterConfig};

fn main() -> Result<()> {
    // Asset diagnostics belong on stdout.
    init_logging(LoggingConfig {
        target: LogTarget::Stdout,
        ..LoggingConfig::default()
    });

    let config = PainterConfig::default();
    let assets = Assets::load(&config);
    let app = PainterApp::new(&config, assets);

    // Uncapped present mode: render as fast as possible, update at a fixed rate.
    Runtime::run(config.runtime_config(), GpuInit::uncapped(), app)
}
