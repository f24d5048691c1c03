pub mod filter;
pub mod page;
pub mod rating;
pub mod types;
