use crate::{GraphqlRequest, QueryError, RawResponse, SubgraphClient};
use anyhow::Context;
use futures_core::future::BoxFuture;
use reqwest::Client;
use std::fmt::{Debug, Formatter};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;


/// HTTP client for subgraph queries. Without `timeout` a request may wait forever.
pub fn default_http_client(timeout: Option<Duration>) -> anyhow::Result<Client> {
    let mut builder = Client::builder().gzip(true);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("failed to build HTTP client")
}


#[derive(Clone)]
pub struct ReqwestSubgraphClient {
    http: Client,
    url: Url
}


impl Debug for ReqwestSubgraphClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestSubgraphClient")
            .field("url", &self.url.as_str())
            .finish()
    }
}


impl ReqwestSubgraphClient {
    pub fn from_url(url: Url) -> anyhow::Result<Self> {
        let http = default_http_client(None)?;
        Ok(Self::new(http, url))
    }

    pub fn new(http: Client, url: Url) -> Self {
        Self {
            http,
            url
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    #[instrument(level = "debug", skip_all, err(level = "debug", Display), fields(
        url = %self.url.as_str(),
        operation = %req.operation_name()
    ))]
    pub async fn post(&self, req: &GraphqlRequest) -> Result<RawResponse, QueryError> {
        let res = self.http
            .post(self.url.clone())
            .json(req)
            .send()
            .await
            .map_err(|err| QueryError::Transport(err.into()))?;

        let status = res.status().as_u16();

        let body = res.text()
            .await
            .context("failed to receive response body")
            .map_err(QueryError::Transport)?;

        debug!(status, body_len = body.len(), "got response");

        Ok(RawResponse { status, body })
    }
}


impl SubgraphClient for ReqwestSubgraphClient {
    fn post<'a>(&'a self, req: &'a GraphqlRequest) -> BoxFuture<'a, Result<RawResponse, QueryError>> {
        Box::pin(self.post(req))
    }
}
