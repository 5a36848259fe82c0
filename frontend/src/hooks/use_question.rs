use shared::constants::{NETWORK_ERROR, NO_QUESTION_ERROR};
use shared::Question;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{fetch_latest_question, fetch_question, ApiError};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum QuestionSource {
    Latest,
    ById(i64),
}

#[derive(Clone, PartialEq, Debug)]
pub enum QuestionLoad {
    Loading,
    Ready(Question),
    Failed(String),
}

fn describe(error: &ApiError) -> String {
    match error {
        e if e.is_not_found() => NO_QUESTION_ERROR.to_string(),
        ApiError::Network(_) => NETWORK_ERROR.to_string(),
        _ => "Could not load the question. Please try again later.".to_string(),
    }
}

#[hook]
pub fn use_question(source: QuestionSource) -> QuestionLoad {
    let load = use_state(|| QuestionLoad::Loading);

    {
        let load = load.clone();
        use_effect_with(source, move |source| {
            let source = *source;
            load.set(QuestionLoad::Loading);

            spawn_local(async move {
                let result = match source {
                    QuestionSource::Latest => fetch_latest_question().await,
                    QuestionSource::ById(id) => fetch_question(id).await,
                };
                match result {
                    Ok(question) => load.set(QuestionLoad::Ready(question)),
                    Err(e) => {
                        log::error!("Error fetching question: {}", e);
                        load.set(QuestionLoad::Failed(describe(&e)));
                    }
                }
            });

            || ()
        });
    }

    (*load).clone()
}
