use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Spinner while a fetch is in flight, or the error that ended it
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.error {
        None => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{&props.message}</p>
            </div>
        },
        Some(msg) => html! {
            <div class="status error">
                <p>{"❌ Error: "}{msg}</p>
            </div>
        },
    }
}
