//! Database entities module

pub mod category;
pub mod question;

pub use category::Entity as Category;
pub use question::Entity as Question;
