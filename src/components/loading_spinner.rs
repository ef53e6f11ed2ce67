use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div class="loading-spinner" role="status" aria-busy="true">
            <div class="spinner"></div>
            if let Some(message) = &props.message {
                <p class="loading-text">{message.clone()}</p>
            }
        </div>
    }
}
