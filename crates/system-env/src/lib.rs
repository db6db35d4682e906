mod arch;
mod error;
mod helpers;

pub use arch::*;
pub use error::*;
pub use helpers::*;
