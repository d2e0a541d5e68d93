pub mod card;
pub mod form;
pub mod queries;
pub mod types;

pub use self::card::{ResultCard, SubjectRow};
pub use self::form::{MarkRow, ResultForm};
pub use self::queries::*;
pub use self::types::*;
