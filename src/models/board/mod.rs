pub mod queries;
pub mod types;

pub use self::queries::*;
pub use self::types::*;
