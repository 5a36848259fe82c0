use yew::prelude::*;

use crate::hooks::QuestionSource;
use crate::pages::question::QuestionView;
use crate::styles;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class={styles::PAGE}>
            <QuestionView source={QuestionSource::Latest} />
        </main>
    }
}
