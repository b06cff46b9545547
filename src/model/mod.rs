pub mod catalog;
pub mod film;
