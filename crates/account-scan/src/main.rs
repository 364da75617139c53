use anyhow::Context;
use clap::Parser;
use sqd_account_scan::cli::Cli;
use sqd_subgraph_client::{default_http_client, ReqwestSubgraphClient};


fn init_logging(json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::builder().parse_lossy(
        std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).unwrap_or("info".to_string()),
    );

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}


fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.json_log);

    let http = default_http_client(args.timeout())?;
    let client = ReqwestSubgraphClient::new(http, args.endpoint.clone());
    let config = args.scan_config();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    runtime.block_on(async {
        let mut out = std::io::stdout().lock();
        sqd_account_scan::run(&client, &config, &mut out).await
    })?;

    Ok(())
}
