pub mod error;
pub mod filter;
pub mod product;
pub mod report;
pub mod table;
pub mod user;
