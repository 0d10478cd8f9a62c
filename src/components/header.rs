use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_menu: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    // Sessions are not implemented; logging out only leaves a console trace
    let on_logout = Callback::from(|_: MouseEvent| {
        gloo::console::log!("Logging out...");
    });
    let on_menu = props.on_menu.reform(|_: MouseEvent| ());

    html! {
        <header class="app-header">
            <div class="app-logo">
                <span class="app-logo-icon">{"🛒"}</span>
                <span class="app-logo-text">{"e-commerce"}</span>
            </div>

            <div class="app-user">
                <span class="app-user-name">{"👤 "}<span class="wide-only">{"Admin"}</span></span>
                <button class="logout-button" onclick={on_logout}>
                    {"⎋ "}<span class="wide-only">{"Logout"}</span>
                </button>
                <button class="menu-button" onclick={on_menu} aria-label="Open menu">
                    {"☰"}
                </button>
            </div>
        </header>
    }
}
