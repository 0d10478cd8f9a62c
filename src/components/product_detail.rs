use yew::prelude::*;

use super::status::Status;
use crate::hooks::DataState;
use crate::hooks::use_product::use_product;
use crate::models::product::Product;

/// Review line under the title, e.g. "3.9 / 5 (120 reviews)"
pub fn review_line(product: &Product) -> String {
    match product.rating {
        Some(r) => format!("{} / 5 ({} reviews)", r.rate, r.count),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductDetailProps {
    pub id: u32,
    pub on_back: Callback<()>,
}

#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let state = use_product(props.id);
    let on_back = props.on_back.reform(|e: MouseEvent| e.prevent_default());

    let body = match &*state {
        DataState::Loading => html! { <Status message="Loading product..." /> },
        DataState::Error(msg) => html! {
            <Status message="Product unavailable" error={msg.clone()} />
        },
        DataState::Loaded(product) => {
            let domain = product.image_domain().unwrap_or_default();

            html! {
                <>
                    <div class="detail-main">
                        <img class="detail-image" src={product.image.clone()} alt={product.title.clone()} />
                        <div class="detail-info">
                            <h1>{&product.title}</h1>
                            <p class="detail-category">{product.category.to_uppercase()}</p>
                            <p class="detail-rating">
                                <span class="star">{"★"}</span>
                                {review_line(product)}
                            </p>
                            <p class="detail-price">{format!("${}", product.price)}</p>
                        </div>
                    </div>

                    <section class="detail-section">
                        <h2>{"Product Description"}</h2>
                        <p>{&product.description}</p>
                    </section>

                    <section class="detail-section">
                        <h3>{"Image Domain"}</h3>
                        <table class="detail-table">
                            <thead>
                                <tr>
                                    <th>{"Product ID"}</th>
                                    <th>{"Image Domain"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                <tr>
                                    <td>{product.id}</td>
                                    <td>{domain}</td>
                                </tr>
                            </tbody>
                        </table>
                    </section>
                </>
            }
        }
    };

    html! {
        <div class="product-detail">
            <a href="#" class="back-link" onclick={on_back}>{"← Back to products"}</a>
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Rating;

    #[test]
    fn test_review_line() {
        let mut product = Product {
            id: 1,
            title: "Backpack".to_string(),
            price: 109.95,
            description: String::new(),
            category: "men's clothing".to_string(),
            image: String::new(),
            rating: Some(Rating {
                rate: 3.9,
                count: 120,
            }),
        };
        assert_eq!(review_line(&product), "3.9 / 5 (120 reviews)");

        product.rating = None;
        assert!(review_line(&product).is_empty());
    }
}
