use sqd_subgraph_client::GraphqlRequest;


pub const ACCOUNTS_QUERY: &str = "\
query Accounts($first: Int!, $skip: Int!) {
  accounts(first: $first, skip: $skip) {
    id
  }
}";


pub const ACCOUNT_QUERY: &str = "\
query Account($id: ID!, $first: Int!) {
  account(id: $id) {
    id
    systemAccountType
    profitLossLineItems(first: $first, orderBy: blockNumber, orderDirection: desc) {
      bundle { bundleName }
    }
  }
}";


pub fn accounts_page(first: usize, skip: usize) -> GraphqlRequest {
    GraphqlRequest::new(ACCOUNTS_QUERY)
        .with_operation_name("Accounts")
        .with_variable("first", first)
        .with_variable("skip", skip)
}


pub fn account_detail(id: &str, line_items: usize) -> GraphqlRequest {
    GraphqlRequest::new(ACCOUNT_QUERY)
        .with_operation_name("Account")
        .with_variable("id", id)
        .with_variable("first", line_items)
}
