use yew::prelude::*;

use crate::models::product::Product;

/// Rating cell text; blank when the record has no rating
pub fn rating_cell(product: &Product) -> String {
    product
        .rating
        .map(|r| format!("{} ★", r.rate))
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ProductListProps {
    pub products: Vec<Product>,
    pub on_open: Callback<u32>,
    pub on_delete: Callback<u32>,
}

#[function_component(ProductList)]
pub fn product_list(props: &ProductListProps) -> Html {
    html! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"Price"}</th>
                    <th>{"Category"}</th>
                    <th>{"Rating"}</th>
                    <th>{"Actions"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    props.products.iter().map(|product| {
                        let id = product.id;
                        let on_open = props.on_open.reform(move |e: MouseEvent| {
                            e.prevent_default();
                            id
                        });
                        let on_delete = props.on_delete.reform(move |_: MouseEvent| id);

                        html! {
                            <tr key={id}>
                                <td>
                                    <a href="#" class="product-link" onclick={on_open}>
                                        {&product.title}
                                    </a>
                                </td>
                                <td>{format!("${}", product.price)}</td>
                                <td class="capitalize">{&product.category}</td>
                                <td>{rating_cell(product)}</td>
                                <td>
                                    <button class="delete-button" onclick={on_delete}>
                                        {"Delete"}
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::product::Rating;

    #[test]
    fn test_rating_cell() {
        let mut product = Product {
            id: 1,
            title: "Shirt".to_string(),
            price: 20.0,
            description: String::new(),
            category: "men".to_string(),
            image: String::new(),
            rating: Some(Rating {
                rate: 4.5,
                count: 10,
            }),
        };
        assert_eq!(rating_cell(&product), "4.5 ★");

        product.rating = None;
        assert_eq!(rating_cell(&product), "");
    }
}
