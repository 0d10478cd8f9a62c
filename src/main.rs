use yew::prelude::*;

use shop_dashboard::components::{
    Header, MobileMenu, ProductDetail, Products, Report, Screen, Sidebar,
};

#[function_component(App)]
fn app() -> Html {
    let screen = use_state(Screen::default);
    let menu_open = use_state(|| false);

    let navigate = {
        let screen = screen.clone();
        Callback::from(move |next: Screen| screen.set(next))
    };
    let open_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(true))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |()| menu_open.set(false))
    };
    let open_product = navigate.reform(Screen::ProductDetail);
    let back_to_products = navigate.reform(|()| Screen::Products);

    let content = match *screen {
        Screen::Home => html! { <Report /> },
        Screen::Products => html! { <Products on_open={open_product} /> },
        Screen::ProductDetail(id) => html! {
            <ProductDetail {id} on_back={back_to_products} />
        },
    };

    html! {
        <div class="app-container">
            <Header on_menu={open_menu} />

            <div class="app-body">
                <Sidebar current={*screen} on_navigate={navigate.clone()} />

                <main class="app-main">
                    {content}
                </main>
            </div>

            <MobileMenu
                open={*menu_open}
                current={*screen}
                on_navigate={navigate}
                on_close={close_menu}
            />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
