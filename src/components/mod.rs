pub mod chart;
pub mod filter_bar;
pub mod header;
pub mod navigation;
pub mod pagination;
pub mod product_detail;
pub mod product_list;
pub mod products;
pub mod report;
pub mod status;
pub mod summary;

pub use header::Header;
pub use navigation::{MobileMenu, Screen, Sidebar};
pub use product_detail::ProductDetail;
pub use products::Products;
pub use report::Report;
