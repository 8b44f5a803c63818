use clap::Parser as _;
use postboard::{
    cli::{Cli, Command},
    config, Config, Postboard,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=debug,tower_http=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Command::ConfigTemplate) => config::print_config_template(),
        Some(Command::ConfigInit { config_path }) => {
            let config_path = config::init_config(config_path)?;
            println!("Configuration file created: {}", config_path.display());
        }
        Some(Command::Render { config_path }) => {
            let config = Config::load(config_path)?;
            let html = Postboard::boot(config)?.render_once().await?;
            println!("{html}");
        }
        None => {
            let config = Config::load(cli.args.config_path)?;
            Postboard::boot(config)?.serve().await?;
        }
    }

    Ok(())
}
