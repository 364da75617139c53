mod error;
mod query;
mod reqwest;
mod types;


pub use error::*;
pub use query::*;
pub use self::reqwest::*;
pub use types::*;
