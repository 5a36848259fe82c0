use shared::constants::DEFAULT_ARCHIVE_LIMIT;
use shared::QuestionSummary;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_archive;
use crate::styles;
use crate::Route;

#[function_component(Archive)]
pub fn archive() -> Html {
    let questions = use_state(|| None::<Vec<QuestionSummary>>);
    let error = use_state(|| None::<String>);

    {
        let questions = questions.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_archive(DEFAULT_ARCHIVE_LIMIT).await {
                    Ok(list) => questions.set(Some(list)),
                    Err(e) => {
                        log::error!("Error fetching archive: {}", e);
                        error.set(Some("Could not load previous questions.".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let body = match (&*questions, &*error) {
        (_, Some(message)) => html! { <div class={styles::CARD_ERROR}>{ message.clone() }</div> },
        (None, None) => html! { <div class={styles::TEXT_BODY}>{"Loading..."}</div> },
        (Some(list), None) if list.is_empty() => html! {
            <p class={styles::TEXT_BODY}>{"No questions yet."}</p>
        },
        (Some(list), None) => html! {
            <ul class="divide-y divide-gray-200 dark:divide-gray-700">
                {
                    for list.iter().map(|summary| html! {
                        <li class="py-3">
                            <Link<Route> to={Route::Question { id: summary.id }} classes={classes!(styles::TEXT_LINK)}>
                                { format!("#{} {}", summary.id, summary.question) }
                            </Link<Route>>
                            if let Some(date) = summary.created_at.clone() {
                                <div class={styles::TEXT_SMALL}>{ date }</div>
                            }
                        </li>
                    })
                }
            </ul>
        },
    };

    html! {
        <main class={styles::PAGE}>
            <div class={styles::CARD}>
                <h2 class={styles::TEXT_H3}>{"Previous questions of the day"}</h2>
                <div class="mt-4">{ body }</div>
                <div class="mt-6">
                    <Link<Route> to={Route::Home} classes={classes!(styles::TEXT_LINK)}>{"Back to today's question"}</Link<Route>>
                </div>
            </div>
        </main>
    }
}
