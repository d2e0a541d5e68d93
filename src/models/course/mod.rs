pub mod form;
pub mod queries;
pub mod types;

pub use self::form::{CourseForm, PartDraft};
pub use self::queries::*;
pub use self::types::*;
