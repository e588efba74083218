//! Pure data structures: the stored entities and their wire representations.

pub mod department;
pub mod user;

pub use department::*;
pub use user::*;
