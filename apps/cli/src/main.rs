mod config;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use tickerscout_lookup::{
    get_symbol_info, Error, FmpProvider, JsonCredentialStore, LocalDatabase, User,
};

fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn open_user(config: &Config, name: &str) -> anyhow::Result<User> {
    let store = JsonCredentialStore::open(&config.credentials_path)
        .with_context(|| format!("opening credential store for {name}"))?;
    Ok(User::new(name, Box::new(store)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    init_tracing(&config.log_format);
    tracing::info!("Credential store: {}", config.credentials_path);

    let provider = match &config.search_base_url {
        Some(url) => FmpProvider::new().with_base_url(url),
        None => FmpProvider::new(),
    };

    // A name the credential store does not know: log the structured record.
    println!("Try incorrect name");
    let mut john = open_user(&config, "John")?;
    match john.api_key() {
        Ok(_) => println!("unexpected: the store knows John"),
        Err(Error::Lookup(failure)) => println!("{}", serde_json::to_string(&failure.log())?),
        Err(other) => return Err(other).context("resolving api key for John"),
    }

    let mut nicolas = open_user(&config, "Nicolas")?;

    // A symbol the endpoint matches nothing for: print the rendered form.
    println!("\nTry invalid symbol");
    match get_symbol_info(&provider, "AAAAL", &mut nicolas).await {
        Ok(matches) => println!("{matches}"),
        Err(Error::Lookup(failure)) => println!("{failure}"),
        Err(other) => return Err(other).context("searching for AAAAL"),
    }

    // A real symbol: the match collection is printed as the endpoint sent it.
    println!("\nValid symbol");
    let matches = get_symbol_info(&provider, "MXT", &mut nicolas)
        .await
        .context("searching for MXT")?;
    println!("{matches}");

    // Another unknown name: fall back to scanning the local database.
    let symbol = "MXTRF";
    let mut unknown = open_user(&config, "MacKohnley")?;
    match unknown.api_key() {
        Ok(_) => println!("\nunexpected: the store knows MacKohnley"),
        Err(Error::Lookup(failure)) => {
            println!("\n{} falls back to database", failure.kind().name());
            let db = LocalDatabase::load(&config.database_path)
                .context("loading fallback database")?;
            match db.find_by_symbol(symbol) {
                Some(record) => println!("{record}"),
                None => println!("No record for {symbol:?} in the fallback database"),
            }
        }
        Err(other) => return Err(other).context("resolving api key for MacKohnley"),
    }

    Ok(())
}
