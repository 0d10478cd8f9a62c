use std::rc::Rc;
use yew::prelude::*;

use crate::models::filter::CategoryFilter;
use crate::models::product::{Catalog, Product};
use crate::models::table::ProductTable;

/// Mutations of the products view
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    Load(Vec<Product>),
    Query(String),
    Category(CategoryFilter),
    MinPrice(f64),
    MaxPrice(f64),
    MinRating(f64),
    ClearFilters,
    Delete(u32),
    Page(usize),
}

impl ProductTable {
    /// Applies one action to the table
    pub fn apply(&mut self, action: TableAction) {
        match action {
            TableAction::Load(products) => self.replace_products(products),
            TableAction::Query(query) => self.set_query(query),
            TableAction::Category(category) => self.set_category(category),
            TableAction::MinPrice(price) => self.set_min_price(price),
            TableAction::MaxPrice(price) => self.set_max_price(price),
            TableAction::MinRating(rating) => self.set_min_rating(rating),
            TableAction::ClearFilters => self.clear_filters(),
            TableAction::Delete(id) => {
                self.remove(id);
            }
            TableAction::Page(page) => self.set_page(page),
        }
    }
}

impl Reducible for ProductTable {
    type Action = TableAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut table = (*self).clone();
        table.apply(action);
        Rc::new(table)
    }
}

/// Holds the filter/paginate state of the products view, reloading the base
/// list whenever a new catalog arrives
#[hook]
pub fn use_product_table(catalog: Option<Rc<Catalog>>) -> UseReducerHandle<ProductTable> {
    let table = use_reducer(ProductTable::default);

    {
        let table = table.clone();
        use_effect_with(catalog, move |catalog| {
            if let Some(catalog) = catalog {
                table.dispatch(TableAction::Load(catalog.products.clone()));
            }
            || ()
        });
    }

    table
}
