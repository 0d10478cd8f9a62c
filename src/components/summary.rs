use crate::models::report::ReportSummary;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryProps {
    pub summary: Rc<ReportSummary>,
}

/// Headline counts of the home view
#[function_component(Summary)]
pub fn summary(props: &SummaryProps) -> Html {
    let summary = &props.summary;

    let cards = [
        ("Total Products", summary.total_products.to_string(), "card-products"),
        ("Categories", summary.total_categories.to_string(), "card-categories"),
        ("Overall Rating", summary.rating_label(), "card-rating"),
        ("Users", summary.total_users.to_string(), "card-users"),
    ];

    html! {
        <div class="summary-grid">
            {
                cards.into_iter().map(|(title, value, class)| html! {
                    <div class={classes!("summary-card", class)} key={title}>
                        <h3>{title}</h3>
                        <p class="summary-value">{value}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}
