use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current: usize,
    pub total: usize,
    pub on_select: Callback<usize>,
}

/// One numbered button per page
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    html! {
        <div class="pagination">
            {
                (1..=props.total).map(|page| {
                    let onclick = props.on_select.reform(move |_: MouseEvent| page);
                    let class = classes!("page-button", (page == props.current).then_some("current"));
                    html! {
                        <button key={page} {class} {onclick}>{page}</button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
