use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingPlaceholderProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub text: AttrValue,
}

#[function_component(LoadingPlaceholder)]
pub fn loading_placeholder(props: &LoadingPlaceholderProps) -> Html {
    html! {
        <div class="loading-screen" role="status">{props.text.clone()}</div>
    }
}
