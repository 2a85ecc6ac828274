use naira_rate_tracker::config::{AppConfig, OutputFormat};
use naira_rate_tracker::report::{banner, RunReport};
use naira_rate_tracker::{classify, RateFetcher, RateQuote};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Setup Logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Naira Rate Tracker...");

    // Load Configuration
    let config = AppConfig::load_or_default();
    info!("Loaded Configuration: {:?}", config);

    let fetcher = match RateFetcher::from_config(&config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("❌ Could not initialize rate sources: {}", e);
            let failed = RateQuote::failed(&config.pair);
            print_report(&RunReport::new(&failed, None), config.output);
            return;
        }
    };

    info!(
        "📊 Source chain for {}: {}",
        fetcher.pair(),
        fetcher.source_names().join(" -> ")
    );
    let quote = fetcher.fetch().await;

    let analysis = quote
        .is_success()
        .then(|| classify(quote.price, &config.thresholds));
    print_report(&RunReport::new(&quote, analysis.as_ref()), config.output);
}

fn print_report(report: &RunReport<'_>, output: OutputFormat) {
    match output {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("❌ Failed to encode report: {}", e);
                println!("{}", banner());
            }
        },
    }
}
