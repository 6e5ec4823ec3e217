use clap::Parser;
use order_lookup::utils::logger;
use order_lookup::{CliConfig, LookupOutcome, OrderClient, OrderLookup};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting order-lookup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let service = match config.service_config() {
        Ok(service) => service,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let client = OrderClient::new(&service)?;
    let lookup = OrderLookup::new(client).with_format(config.format);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match &config.order_id {
        Some(order_id) => lookup.lookup(order_id, &mut out).await?,
        None => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            lookup.run(&mut input, &mut out).await?
        }
    };

    match outcome {
        LookupOutcome::Printed { order_uid } => tracing::info!("Done with order {}", order_uid),
        LookupOutcome::NotRetrieved(e) if e.is_not_found() => {
            tracing::info!("Order service has no such order")
        }
        LookupOutcome::NotRetrieved(e) => tracing::debug!("Lookup ended without an order: {}", e),
    }

    Ok(())
}
