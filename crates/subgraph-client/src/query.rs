use crate::types::GraphqlResponse;
use crate::{GraphqlRequest, QueryError, RawResponse, SubgraphClient};
use serde::de::DeserializeOwned;
use serde::Deserialize;


/// Sends `req` and decodes `data.<field>` of the response.
///
/// A `null` field counts as missing.
pub async fn query_field<C, T>(
    client: &C,
    req: &GraphqlRequest,
    field: &'static str
) -> Result<T, QueryError>
where
    C: SubgraphClient + ?Sized,
    T: DeserializeOwned
{
    let response = client.post(req).await?;
    decode_field(response, field)
}


pub fn decode_field<T: DeserializeOwned>(
    response: RawResponse,
    field: &'static str
) -> Result<T, QueryError> {
    if !response.is_success() {
        return Err(QueryError::Status(response))
    }

    let envelope: GraphqlResponse = match serde_json::from_str(&response.body) {
        Ok(envelope) => envelope,
        Err(error) => return Err(QueryError::MalformedJson { response, error })
    };

    let value = envelope.data
        .as_ref()
        .and_then(|data| data.get(field))
        .filter(|value| !value.is_null());

    match value {
        Some(value) => T::deserialize(value).map_err(|error| {
            QueryError::Decode { response, field, error }
        }),
        None if !envelope.errors.is_empty() => Err(QueryError::Graphql {
            response,
            messages: envelope.errors.into_iter().map(|e| e.message).collect()
        }),
        None => Err(QueryError::MissingField { response, field })
    }
}
