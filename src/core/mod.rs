pub mod constants;
pub mod motion;
pub mod scoring;
pub mod session;

pub use constants::*;
pub use motion::*;
pub use scoring::*;
pub use session::*;
