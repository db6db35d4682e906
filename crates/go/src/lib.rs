mod command;
mod config;
mod context;
mod env;
mod error;
mod mode;
mod plugin;
mod runner;
mod schema;
mod version;

pub use command::*;
pub use config::*;
pub use context::*;
pub use env::*;
pub use error::*;
pub use mode::*;
pub use plugin::*;
pub use runner::*;
pub use schema::*;
pub use version::*;
