use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;


pub type AccountId = String;


#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
}


/// Only `id` is required, the rest falls back to defaults when absent or malformed.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetail {
    pub id: AccountId,
    /// Opaque marker the subgraph assigns to protocol owned accounts,
    /// e.g. `None`, `nToken`, `Vault`, `FeeReserve`.
    #[serde(default, deserialize_with = "lenient")]
    pub system_account_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub profit_loss_line_items: Vec<LineItem>,
}


#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LineItem {
    #[serde(default, deserialize_with = "lenient")]
    pub bundle: Option<Bundle>,
}


#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    #[serde(default, deserialize_with = "lenient")]
    pub bundle_name: Option<String>,
}


fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}


impl AccountDetail {
    pub fn bundle_names(&self) -> impl Iterator<Item = &str> {
        self.profit_loss_line_items
            .iter()
            .filter_map(|item| item.bundle.as_ref())
            .filter_map(|bundle| bundle.bundle_name.as_deref())
    }
}
