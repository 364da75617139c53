use crate::checker::check_account;
use crate::paginator::{paginate_accounts, MAX_PAGE_SIZE};
use crate::types::{Account, AccountDetail};
use anyhow::{ensure, Context};
use futures::StreamExt;
use sqd_subgraph_client::{QueryError, SubgraphClient};
use std::io::Write;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, warn};


#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub page_size: usize,
    pub line_items: usize,
    /// Number of detail requests in flight
    pub concurrency: usize,
    /// Minimal pause between the starts of two detail requests
    pub request_interval: Option<Duration>,
}


impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            line_items: 1000,
            concurrency: 1,
            request_interval: None
        }
    }
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub accounts: usize,
    pub failed: usize,
}


/// Lists all accounts, then checks each of them in list order.
///
/// Failed checks are reported to `out` and do not stop the scan.
/// Failure to list accounts is returned as an error.
pub async fn run<C, W>(client: &C, config: &ScanConfig, out: &mut W) -> anyhow::Result<ScanReport>
where
    C: SubgraphClient + ?Sized,
    W: Write
{
    ensure!(config.concurrency > 0, "concurrency must be positive");

    let accounts = paginate_accounts(client, config.page_size).await?;

    writeln!(out, "all accounts {}", accounts.len())?;
    info!(accounts = accounts.len(), "fetched account list");

    let pacer = Pacer::new(config.request_interval);

    let mut checks = futures::stream::iter(&accounts)
        .map(|account| {
            let pacer = &pacer;
            async move {
                pacer.wait().await;
                let result = check_account(client, &account.id, config.line_items).await;
                (account, result)
            }
        })
        .buffered(config.concurrency);

    let mut report = ScanReport {
        accounts: accounts.len(),
        failed: 0
    };

    while let Some((account, result)) = checks.next().await {
        match result {
            Ok(detail) => on_checked(&detail),
            Err(err) => {
                report.failed += 1;
                on_failed(account, &err, out).context("failed to write to the output")?;
            }
        }
    }

    info!(
        accounts = report.accounts,
        failed = report.failed,
        "account check completed"
    );

    Ok(report)
}


fn on_checked(detail: &AccountDetail) {
    debug!(
        account = %detail.id,
        system_account_type = detail.system_account_type.as_deref().unwrap_or("None"),
        line_items = detail.profit_loss_line_items.len(),
        latest_bundle = detail.bundle_names().next(),
        "account checked"
    );
}


fn on_failed<W: Write>(account: &Account, err: &QueryError, out: &mut W) -> std::io::Result<()> {
    warn!(
        account = %account.id,
        error = %err,
        retryable = err.is_retryable(),
        "failed to check account"
    );
    writeln!(out, "Error Processing: {}", account.id)?;
    match err.response() {
        Some(response) => writeln!(out, "{}", response),
        None => writeln!(out, "{}", err)
    }
}


struct Pacer {
    interval: Option<Mutex<Interval>>
}


impl Pacer {
    fn new(period: Option<Duration>) -> Self {
        let interval = period.filter(|p| !p.is_zero()).map(|period| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            Mutex::new(interval)
        });
        Self { interval }
    }

    async fn wait(&self) {
        if let Some(interval) = &self.interval {
            interval.lock().await.tick().await;
        }
    }
}
