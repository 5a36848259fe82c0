pub mod api;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::auth_provider::AuthProvider;
use crate::components::site_header::SiteHeader;
use crate::pages::{archive::Archive, home::Home, question::QuestionPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/questions/:id")]
    Question { id: i64 },
    #[at("/archive")]
    Archive,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Question { id } => html! { <QuestionPage {id} /> },
        Route::Archive => html! { <Archive /> },
        Route::NotFound => html! {
            <main class={styles::PAGE}>
                <div class={styles::CARD}>
                    <h2 class={styles::TEXT_H3}>{"Page not found"}</h2>
                    <Link<Route> to={Route::Home} classes={classes!(styles::TEXT_LINK)}>{"Go to today's question"}</Link<Route>>
                </div>
            </main>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <div class="min-h-screen w-full relative">
                    <SiteHeader />
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </AuthProvider>
    }
}
