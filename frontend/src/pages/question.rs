use yew::prelude::*;

use crate::components::quiz_game::QuizGame;
use crate::hooks::{use_question, QuestionLoad, QuestionSource};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct QuestionViewProps {
    pub source: QuestionSource,
}

#[function_component(QuestionView)]
pub fn question_view(props: &QuestionViewProps) -> Html {
    match use_question(props.source) {
        QuestionLoad::Loading => html! { <div class={styles::TEXT_BODY}>{"Loading..."}</div> },
        QuestionLoad::Failed(message) => html! { <div class={styles::CARD_ERROR}>{ message }</div> },
        QuestionLoad::Ready(question) => {
            let key = question.id.to_string();
            html! {
                <QuizGame {key} {question} />
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QuestionPageProps {
    pub id: i64,
}

#[function_component(QuestionPage)]
pub fn question_page(props: &QuestionPageProps) -> Html {
    html! {
        <main class={styles::PAGE}>
            <QuestionView source={QuestionSource::ById(props.id)} />
        </main>
    }
}
