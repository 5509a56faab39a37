pub mod credentials;
pub mod stat;

pub use credentials::{AuthMethod, Credentials};
pub use stat::{RawStat, StatId, StatsBundle, FAILED_TEXT, PENDING_TEXT};
