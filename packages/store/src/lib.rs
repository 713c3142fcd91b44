pub mod config;
pub mod models;
pub mod session;

pub use config::AppConfig;
pub use models::{Alert, AlertKind, SessionScope, SystemInfo, UserInfo};
pub use session::{Action, SessionState, SessionStore, SubscriptionId};
