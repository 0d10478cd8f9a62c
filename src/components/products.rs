use std::rc::Rc;
use yew::prelude::*;

use super::filter_bar::FilterBar;
use super::pagination::Pagination;
use super::product_list::ProductList;
use super::status::Status;
use crate::hooks::use_catalog::use_catalog;
use crate::hooks::use_product_table::{TableAction, use_product_table};

#[derive(Properties, PartialEq)]
pub struct ProductsProps {
    pub on_open: Callback<u32>,
}

/// Products view: filters, the current page of the table and page buttons.
///
/// A failed fetch leaves the table empty.
#[function_component(Products)]
pub fn products(props: &ProductsProps) -> Html {
    let state = use_catalog();
    let catalog = state.data().cloned();
    let table = use_product_table(catalog.clone());

    let categories = use_memo(catalog.clone(), |catalog| {
        catalog
            .as_ref()
            .map(|c| c.categories.clone())
            .unwrap_or_default()
    });

    let on_action = {
        let table = table.clone();
        Callback::from(move |action: TableAction| table.dispatch(action))
    };
    let on_delete = on_action.reform(TableAction::Delete);
    let on_page = on_action.reform(TableAction::Page);

    html! {
        <div class="products-view">
            <FilterBar
                criteria={table.criteria().clone()}
                categories={Rc::clone(&categories)}
                on_action={on_action}
            />

            if state.is_loading() {
                <Status message="Loading products..." />
            }

            <ProductList
                products={table.page_items().to_vec()}
                on_open={props.on_open.clone()}
                {on_delete}
            />

            <Pagination
                current={table.current_page()}
                total={table.page_count()}
                on_select={on_page}
            />

            if let Some(catalog) = catalog {
                <p class="updated-at">{format!("Updated {}", catalog.updated_label())}</p>
            }
        </div>
    }
}
