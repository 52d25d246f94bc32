pub mod config;
pub mod intent;
pub mod state;
pub mod task;

pub use config::*;
pub use intent::*;
pub use state::*;
pub use task::*;
