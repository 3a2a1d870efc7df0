mod core;
mod handle;
mod handler;
mod results;

pub use self::core::*;
pub use handle::*;
pub use handler::*;
pub use results::*;
