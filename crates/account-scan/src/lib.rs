pub mod checker;
pub mod cli;
pub mod paginator;
pub mod queries;
pub mod scan;
pub mod types;


pub use checker::check_account;
pub use paginator::paginate_accounts;
pub use scan::{run, ScanConfig, ScanReport};
