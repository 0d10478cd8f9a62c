use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_product_table::TableAction;
use crate::models::filter::{CategoryFilter, FilterCriteria};

/// Reads a number input; an empty or unparsable field counts as 0
pub fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

fn rating_label(threshold: u8) -> String {
    if threshold == 0 {
        "All Ratings".to_string()
    } else {
        format!("{threshold} ★ & up")
    }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub criteria: FilterCriteria,
    pub categories: Rc<Vec<String>>,
    pub on_action: Callback<TableAction>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_query = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        TableAction::Query(input.value())
    });

    let on_category = props.on_action.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        TableAction::Category(CategoryFilter::from_value(&select.value()))
    });

    let on_min_price = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        TableAction::MinPrice(parse_number(&input.value()))
    });

    let on_max_price = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        TableAction::MaxPrice(parse_number(&input.value()))
    });

    let on_rating = props.on_action.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        TableAction::MinRating(parse_number(&select.value()))
    });

    let on_clear = props.on_action.reform(|_: MouseEvent| TableAction::ClearFilters);

    let criteria = &props.criteria;
    let selected_category = criteria.category.value();

    html! {
        <div class="filter-bar">
            <div class="filter-field filter-search">
                <span class="filter-icon">{"🔍"}</span>
                <input
                    type="text"
                    placeholder="Search product..."
                    value={criteria.query.clone()}
                    oninput={on_query}
                />
            </div>

            <div class="filter-field">
                <select onchange={on_category} aria-label="Filter by category">
                    <option value="" selected={selected_category.is_empty()}>
                        {"All Categories"}
                    </option>
                    {
                        props.categories.iter().map(|category| html! {
                            <option
                                key={category.clone()}
                                value={category.clone()}
                                selected={category == selected_category}
                            >
                                {category}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>

            <div class="filter-field filter-price">
                <input
                    type="number"
                    placeholder="Min"
                    value={criteria.min_price.to_string()}
                    oninput={on_min_price}
                />
                <span>{"–"}</span>
                <input
                    type="number"
                    placeholder="Max"
                    value={criteria.max_price.to_string()}
                    oninput={on_max_price}
                />
            </div>

            <div class="filter-field">
                <select onchange={on_rating} aria-label="Filter by rating">
                    {
                        Config::RATING_OPTIONS.iter().map(|&threshold| html! {
                            <option
                                key={threshold.to_string()}
                                value={threshold.to_string()}
                                selected={f64::from(threshold) == criteria.min_rating}
                            >
                                {rating_label(threshold)}
                            </option>
                        }).collect::<Html>()
                    }
                </select>
            </div>

            <button class="filter-clear" onclick={on_clear}>
                {"✕ Clear"}
            </button>
        </div>
    }
}
