pub mod board;
pub mod catalog;
pub mod course;
pub mod keyed;
pub mod result;

pub use self::keyed::Keyed;
