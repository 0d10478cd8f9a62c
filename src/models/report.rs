use super::product::Product;

/// One chart-ready dataset: a legend label plus parallel labels and values
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (value, label) pairs, the shape expected by pie series
    pub fn pairs(&self) -> Vec<(f64, String)> {
        self.values
            .iter()
            .copied()
            .zip(self.labels.iter().cloned())
            .collect()
    }
}

/// Aggregates shown on the home view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportSummary {
    pub total_products: usize,
    pub total_categories: usize,
    pub total_users: usize,
    pub average_rating: f64,
    /// Products per category, in order of first appearance
    pub category_counts: Vec<(String, usize)>,
}

impl ReportSummary {
    pub fn compute(products: &[Product], total_categories: usize, total_users: usize) -> Self {
        Self {
            total_products: products.len(),
            total_categories,
            total_users,
            average_rating: average_rating(products),
            category_counts: category_counts(products),
        }
    }

    /// Average rating rounded to one decimal for display
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }

    pub fn category_series(&self) -> ChartSeries {
        let (labels, values) = self
            .category_counts
            .iter()
            .map(|(category, count)| (category.clone(), *count as f64))
            .unzip();

        ChartSeries {
            name: "Product Count",
            labels,
            values,
        }
    }
}

/// Mean rating over all products; 0 for an empty list
pub fn average_rating(products: &[Product]) -> f64 {
    if products.is_empty() {
        return 0.0;
    }
    let sum: f64 = products.iter().map(Product::rate).sum();
    sum / products.len() as f64
}

/// Histogram of products per category, built in one pass
pub fn category_counts(products: &[Product]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for product in products {
        match counts.iter_mut().find(|(c, _)| *c == product.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((product.category.clone(), 1)),
        }
    }
    counts
}

/// Rating per product, in fetch order
pub fn rating_series(products: &[Product]) -> ChartSeries {
    ChartSeries {
        name: "Rating",
        labels: products.iter().map(|p| p.title.clone()).collect(),
        values: products.iter().map(Product::rate).collect(),
    }
}

/// Price per product, in fetch order
pub fn price_series(products: &[Product]) -> ChartSeries {
    ChartSeries {
        name: "Price",
        labels: products.iter().map(|p| p.title.clone()).collect(),
        values: products.iter().map(|p| p.price).collect(),
    }
}
