pub mod controller;
pub mod error;
pub mod source;

pub use controller::{fetch_all, load_bundle, SessionController, SessionPhase};
pub use error::{InitError, StatFetchError};
pub use source::{HttpStatSource, StatSource};
