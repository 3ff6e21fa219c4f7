use anyhow::Result;
use santa_config::SantaConfig;

fn main() -> Result<()> {
    let config = SantaConfig::load();

    env_logger::Builder::new()
        .parse_filters(&config.logging.filter)
        .init();
    log::info!(
        "starting {:?} at {}x{}",
        config.window.title,
        config.window.width,
        config.window.height
    );

    santa_shell::run(config)
}
