use catalog_pk_report::{
    config::app_config::AppConfig, primary_key_report::run_primary_key_report,
};
use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();
    log::debug!(
        "catalog source: {}, output path: {}",
        config.catalog_source.as_str(),
        config.output_path
    );

    match run_primary_key_report(&config).await {
        Ok(summary) => {
            log::info!(
                "results written to file: {} ({} line(s))",
                summary.output_path,
                summary.lines_written
            );
        }
        Err(error) => {
            log::error!("primary key report failed: {error}");
            std::process::exit(1);
        }
    }
}
