mod build;
mod clean;
mod env;
mod pull;
mod schema;

pub use build::*;
pub use clean::*;
pub use env::*;
pub use pull::*;
pub use schema::*;
