use anyhow::Result;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kannada_translit::config_manager::load_config;
use kannada_translit::session::Session;
use kannada_translit::TransliteratorFactory;

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.cli_config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let transliterator = TransliteratorFactory::create_transliterator(&config.provider_config)?;
    let session = Session::new(transliterator);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    tokio::select! {
        result = session.run(stdin, &mut stdout) => {
            result?;
            info!("Session ended");
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, exiting");
            // The blocking stdin reader would otherwise hold up runtime shutdown.
            std::process::exit(0);
        }
    }

    Ok(())
}
