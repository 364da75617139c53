use crate::scan::ScanConfig;
use clap::{value_parser, Parser};
use std::time::Duration;
use url::Url;


pub const DEFAULT_ENDPOINT: &str =
    "https://api.studio.thegraph.com/query/36749/notional-v3-arbitrum/version/latest";


#[derive(Parser, Debug)]
#[command(version, about = "Lists subgraph accounts and checks that each of them can be queried", long_about = None)]
pub struct Cli {
    /// GraphQL endpoint of the subgraph
    #[arg(long, value_name = "URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: Url,

    /// Number of accounts to request per page
    #[arg(long, value_name = "N", default_value_t = 1000, value_parser = value_parser!(u16).range(1..=1000))]
    pub page_size: u16,

    /// Number of latest profit/loss line items to request per account
    #[arg(long, value_name = "N", default_value_t = 1000, value_parser = value_parser!(u16).range(1..=1000))]
    pub line_items: u16,

    /// Number of account checks to run concurrently
    #[arg(long, value_name = "N", default_value_t = 1, value_parser = value_parser!(u16).range(1..))]
    pub concurrency: u16,

    /// Minimal interval between two account checks in milliseconds
    #[arg(long, value_name = "MS")]
    pub request_interval_ms: Option<u64>,

    /// HTTP request timeout in seconds, requests never time out when not set
    #[arg(long, value_name = "S", value_parser = value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Whether the logs should be structured in JSON format
    #[arg(long)]
    pub json_log: bool,
}


impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            page_size: self.page_size as usize,
            line_items: self.line_items as usize,
            concurrency: self.concurrency as usize,
            request_interval: self.request_interval_ms.map(Duration::from_millis)
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}


#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["sqd-account-scan"]).unwrap();
        assert_eq!(cli.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(cli.timeout(), None);

        let config = cli.scan_config();
        assert_eq!(config.page_size, 1000);
        assert_eq!(config.line_items, 1000);
        assert_eq!(config.concurrency, 1);
        assert_eq!(config.request_interval, None);
    }

    #[test]
    fn page_size_is_bounded() {
        assert!(Cli::try_parse_from(["sqd-account-scan", "--page-size", "1001"]).is_err());
        assert!(Cli::try_parse_from(["sqd-account-scan", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["sqd-account-scan", "--concurrency", "0"]).is_err());

        let cli = Cli::try_parse_from([
            "sqd-account-scan",
            "--page-size", "100",
            "--concurrency", "4",
            "--request-interval-ms", "250",
            "--timeout-secs", "30"
        ]).unwrap();
        let config = cli.scan_config();
        assert_eq!(config.page_size, 100);
        assert_eq!(config.concurrency, 4);
        assert_eq!(config.request_interval, Some(Duration::from_millis(250)));
        assert_eq!(cli.timeout(), Some(Duration::from_secs(30)));
    }
}
