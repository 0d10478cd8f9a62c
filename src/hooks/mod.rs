pub mod data_state;
pub mod use_catalog;
pub mod use_product;
pub mod use_product_table;
pub mod use_users;

pub use data_state::DataState;
