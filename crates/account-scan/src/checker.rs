use crate::queries::account_detail;
use crate::types::AccountDetail;
use sqd_subgraph_client::{query_field, QueryError, SubgraphClient};


/// Fetches `account(id)` together with its latest `line_items` profit/loss entries.
pub async fn check_account<C>(
    client: &C,
    id: &str,
    line_items: usize
) -> Result<AccountDetail, QueryError>
where
    C: SubgraphClient + ?Sized
{
    let req = account_detail(id, line_items);
    query_field(client, &req, "account").await
}
