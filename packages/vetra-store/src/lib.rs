mod error;

pub mod catalogue;
pub mod session;

pub use catalogue::CuratedStore;
pub use error::{Error, Result};
pub use session::{SearchSession, SessionCache};
