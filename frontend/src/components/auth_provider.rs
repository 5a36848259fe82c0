use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::fetch_user;
use crate::hooks::auth_state::{absorb_redirect_session, clear_token, get_token, redirect_to_sign_in, AuthContext};

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Html,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let token = use_state(|| {
        absorb_redirect_session();
        get_token()
    });
    let user = use_state(|| None);

    {
        let token = token.clone();
        let user = user.clone();
        use_effect_with((*token).clone(), move |current| {
            match current.clone() {
                Some(current) => spawn_local(async move {
                    match fetch_user(&current).await {
                        Ok(profile) => user.set(Some(profile)),
                        Err(e) if e.is_unauthorized() => {
                            log::warn!("stored session was rejected, signing out");
                            clear_token();
                            user.set(None);
                            token.set(None);
                        }
                        Err(e) => log::error!("Error fetching user: {}", e),
                    }
                }),
                None => user.set(None),
            }
            || ()
        });
    }

    let sign_in = Callback::from(|_| redirect_to_sign_in());

    let sign_out = {
        let token = token.clone();
        Callback::from(move |_| {
            clear_token();
            token.set(None);
        })
    };

    let context = AuthContext {
        user: (*user).clone(),
        token: (*token).clone(),
        sign_in,
        sign_out,
    };

    html! {
        <ContextProvider<AuthContext> {context}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}
