use varuna::config::{self, AppConfig};

fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds); existing env vars win
    if let Err(err) = config::load_bundled() {
        tracing::warn!("failed to load bundled config: {err}");
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    load_dotenv();

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        tracing::warn!("invalid configuration, using defaults: {err}");
        AppConfig::default()
    });
    tracing::info!(
        reply_delay = ?config.reply_delay,
        has_initial_message = config.initial_message.is_some(),
        "starting Varuna Lens"
    );
    config::install(config);

    dioxus::launch(varuna::ui::App);
}
