use crate::queries::accounts_page;
use crate::types::Account;
use anyhow::{ensure, Context};
use sqd_subgraph_client::{query_field, SubgraphClient};
use tracing::debug;


/// Upper bound the hosted subgraph service allows for `first`.
pub const MAX_PAGE_SIZE: usize = 1000;


/// Fetches every account of the subgraph, page by page.
///
/// Pagination ends on the first page that is empty or shorter than `page_size`.
/// `skip` advances by the length of the last page. No deduplication is done
/// across pages. Any failure aborts the whole listing.
pub async fn paginate_accounts<C>(client: &C, page_size: usize) -> anyhow::Result<Vec<Account>>
where
    C: SubgraphClient + ?Sized
{
    ensure!(
        page_size > 0 && page_size <= MAX_PAGE_SIZE,
        "page size must be within 1..={}, got {}",
        MAX_PAGE_SIZE,
        page_size
    );

    let mut all_accounts = Vec::new();
    let mut skip = 0;

    loop {
        let req = accounts_page(page_size, skip);

        let page: Vec<Account> = query_field(client, &req, "accounts")
            .await
            .with_context(|| format!("failed to fetch accounts page at skip={}", skip))?;

        debug!(skip, len = page.len(), "fetched accounts page");

        let len = page.len();
        all_accounts.extend(page);
        skip += len;

        if len < page_size {
            return Ok(all_accounts)
        }
    }
}
