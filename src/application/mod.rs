pub mod catalog;
pub mod fetch;
pub mod nearby;
