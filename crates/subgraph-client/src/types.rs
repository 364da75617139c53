use crate::QueryError;
use futures_core::future::BoxFuture;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};


/// GraphQL request envelope as it goes over the wire.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}


impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables: Map::new()
        }
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    pub fn operation_name(&self) -> &str {
        self.operation_name.as_deref().unwrap_or("<anonymous>")
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }
}


#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GraphqlErrorMessage {
    pub message: String,
}


#[derive(Deserialize, Debug, Default)]
pub(crate) struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorMessage>,
}


/// HTTP response exactly as received, before any GraphQL level interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}


impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into()
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}


impl Display for RawResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.body)
    }
}


pub trait SubgraphClient: Sync {
    fn post<'a>(&'a self, req: &'a GraphqlRequest) -> BoxFuture<'a, Result<RawResponse, QueryError>>;
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;


    #[test]
    fn variables_are_sent_next_to_the_query() {
        let req = GraphqlRequest::new("query Account($id: ID!) { account(id: $id) { id } }")
            .with_operation_name("Account")
            .with_variable("id", "0xabc\"}");

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "query": "query Account($id: ID!) { account(id: $id) { id } }",
                "operationName": "Account",
                "variables": {
                    "id": "0xabc\"}"
                }
            })
        );
    }

    #[test]
    fn empty_variables_are_omitted() {
        let req = GraphqlRequest::new("{ accounts { id } }");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"query": "{ accounts { id } }"})
        );
        assert_eq!(req.operation_name(), "<anonymous>");
    }
}
