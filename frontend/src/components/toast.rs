use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: AttrValue,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div class={styles::TOAST} role="status">{ props.message.clone() }</div>
    }
}
