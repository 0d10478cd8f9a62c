use std::rc::Rc;
use yew::prelude::*;

use super::chart::{Chart, ChartKind};
use super::summary::Summary;
use crate::hooks::use_catalog::use_catalog;
use crate::hooks::use_users::use_users;
use crate::models::product::{Catalog, Product};
use crate::models::report::{ReportSummary, price_series, rating_series};

fn products_of(catalog: Option<&Rc<Catalog>>) -> &[Product] {
    catalog.map_or(&[][..], |c| c.products.as_slice())
}

/// Home view: headline counts and the three product charts.
///
/// Products and categories arrive together; users arrive on their own. Until a
/// list has loaded, or if its fetch failed, it counts as empty.
#[function_component(Report)]
pub fn report() -> Html {
    let catalog_state = use_catalog();
    let users_state = use_users();

    let catalog = catalog_state.data().cloned();
    let user_count = users_state.data().map_or(0, |users| users.len());

    let summary = use_memo((catalog.clone(), user_count), |(catalog, user_count)| {
        match catalog {
            Some(c) => ReportSummary::compute(&c.products, c.categories.len(), *user_count),
            None => ReportSummary::compute(&[], 0, *user_count),
        }
    });

    let categories = use_memo(Rc::clone(&summary), |summary| summary.category_series());
    let ratings = use_memo(catalog.clone(), |catalog| {
        rating_series(products_of(catalog.as_ref()))
    });
    let prices = use_memo(catalog, |catalog| {
        price_series(products_of(catalog.as_ref()))
    });

    html! {
        <div class="report-view">
            <Summary summary={Rc::clone(&summary)} />

            <div class="chart-grid">
                <section class="chart-card chart-pie">
                    <h2>{"Products and their Count (by Category)"}</h2>
                    <Chart id="category-chart" kind={ChartKind::Pie} series={categories} />
                </section>

                <section class="chart-card chart-bar">
                    <h2>{"Products and their Rating"}</h2>
                    <Chart id="rating-chart" kind={ChartKind::Bar} series={ratings} />
                </section>

                <section class="chart-card chart-line">
                    <h2>{"Products and their Price Trend"}</h2>
                    <Chart id="price-chart" kind={ChartKind::Line} series={prices} />
                </section>
            </div>
        </div>
    }
}
