/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Number of products shown per table page
    pub const PAGE_SIZE: usize = 5;

    /// Lower price bound of cleared filters
    pub const DEFAULT_MIN_PRICE: f64 = 0.0;

    /// Upper price bound of cleared filters
    pub const DEFAULT_MAX_PRICE: f64 = 1000.0;

    /// Thresholds offered by the rating filter (0 means "All Ratings")
    pub const RATING_OPTIONS: [u8; 5] = [0, 1, 2, 3, 4];

    /// Delay before charts re-render after the window stops resizing
    pub const CHART_RESIZE_DEBOUNCE_MS: u32 = 150;
}
