//! System orchestration, startup, and shutdown logic.

pub mod settings;
pub mod store_system;
pub mod telemetry;

pub use settings::*;
pub use store_system::*;
pub use telemetry::*;
