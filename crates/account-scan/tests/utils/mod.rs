#![allow(dead_code)]

use futures::future::BoxFuture;
use parking_lot::Mutex;
use serde_json::{json, Value};
use sqd_subgraph_client::{GraphqlRequest, QueryError, RawResponse, SubgraphClient};
use std::collections::HashMap;


/// In-memory subgraph that serves a fixed account list and records every request.
pub struct MockSubgraph {
    accounts: Vec<String>,
    detail_overrides: HashMap<String, RawResponse>,
    requests: Mutex<Vec<GraphqlRequest>>,
}


impl MockSubgraph {
    pub fn with_accounts(n: usize) -> Self {
        Self::new((0..n).map(account_id).collect())
    }

    pub fn new(accounts: Vec<String>) -> Self {
        Self {
            accounts,
            detail_overrides: HashMap::new(),
            requests: Mutex::new(Vec::new())
        }
    }

    pub fn with_detail_response(mut self, id: &str, response: RawResponse) -> Self {
        self.detail_overrides.insert(id.to_string(), response);
        self
    }

    pub fn requests(&self, operation: &str) -> Vec<GraphqlRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|req| req.operation_name() == operation)
            .cloned()
            .collect()
    }

    pub fn skips(&self) -> Vec<u64> {
        self.requests("Accounts")
            .iter()
            .map(|req| req.variable("skip").and_then(Value::as_u64).unwrap())
            .collect()
    }

    fn respond(&self, req: &GraphqlRequest) -> RawResponse {
        match req.operation_name() {
            "Accounts" => {
                let first = req.variable("first").and_then(Value::as_u64).unwrap() as usize;
                let skip = req.variable("skip").and_then(Value::as_u64).unwrap() as usize;
                let page: Vec<Value> = self.accounts
                    .iter()
                    .skip(skip)
                    .take(first)
                    .map(|id| json!({"id": id}))
                    .collect();
                RawResponse::new(200, json!({"data": {"accounts": page}}).to_string())
            },
            "Account" => {
                let id = req.variable("id").and_then(Value::as_str).unwrap();
                if let Some(response) = self.detail_overrides.get(id) {
                    return response.clone()
                }
                let account = self.accounts.iter().find(|a| a.as_str() == id).map(|id| {
                    json!({
                        "id": id,
                        "systemAccountType": "None",
                        "profitLossLineItems": [
                            {"bundle": {"bundleName": "Deposit"}}
                        ]
                    })
                });
                RawResponse::new(200, json!({"data": {"account": account}}).to_string())
            },
            op => panic!("unexpected operation {}", op)
        }
    }
}


impl SubgraphClient for MockSubgraph {
    fn post<'a>(&'a self, req: &'a GraphqlRequest) -> BoxFuture<'a, Result<RawResponse, QueryError>> {
        self.requests.lock().push(req.clone());
        let response = self.respond(req);
        Box::pin(async move { Ok(response) })
    }
}


pub fn account_id(i: usize) -> String {
    format!("0x{:040x}", i)
}


pub fn output_lines(out: &[u8]) -> Vec<String> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| line.to_string())
        .collect()
}
