pub mod error;
pub mod normalizer;
pub mod orchestrator;
pub mod preprocess;
pub mod relay;
pub mod route;

pub use error::SearchError;
pub use orchestrator::SearchOrchestrator;
pub use relay::{EventHandler, EventRelay, SubscriptionId};
