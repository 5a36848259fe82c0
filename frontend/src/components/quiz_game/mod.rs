mod answer_inputs;
mod attempt_board;
mod quiz_footer;
mod statistics_panel;

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use shared::{Question, QuizSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::clipboard;
use crate::components::toast::Toast;
use crate::hooks::{use_auth, use_player_stats};
use crate::styles;

use answer_inputs::{AnswerInputs, AnswerSlot};
use attempt_board::AttemptBoard;
use quiz_footer::QuizFooter;
use statistics_panel::StatisticsPanel;

const TOAST_MILLIS: u32 = 3_000;

#[derive(Clone, PartialEq)]
struct QuizState {
    session: QuizSession,
    notice: Option<String>,
}

enum QuizAction {
    SetChar(usize, String),
    Submit,
    Tick,
}

impl Reducible for QuizState {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let result = match action {
            QuizAction::Tick => {
                return if next.session.tick() { next.into() } else { self };
            }
            QuizAction::SetChar(index, value) => next.session.set_char(index, &value).map(|_| ()),
            QuizAction::Submit => next.session.submit().map(|_| ()),
        };

        next.notice = match result {
            Ok(()) => None,
            Err(e) => {
                log::debug!("attempt rejected: {}", e);
                Some(e.to_string())
            }
        };
        next.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizGameProps {
    pub question: Question,
}

#[function_component(QuizGame)]
pub fn quiz_game(props: &QuizGameProps) -> Html {
    let quiz = {
        let question = props.question.clone();
        use_reducer(move || QuizState {
            session: QuizSession::new(question),
            notice: None,
        })
    };
    let is_question_expanded = use_state(|| true);
    let show_toast = use_state(|| false);
    let toast_timeout = use_mut_ref(|| None::<Timeout>);
    let auth = use_auth();
    let stats = use_player_stats(auth.token.clone());

    let session = &quiz.session;
    let playing = session.is_playing();

    // Clock runs only while playing; dropping the interval stops it.
    {
        let quiz = quiz.clone();
        use_effect_with(playing, move |playing| {
            let interval = playing.then(|| Interval::new(1_000, move || quiz.dispatch(QuizAction::Tick)));
            move || drop(interval)
        });
    }

    let on_change = {
        let quiz = quiz.clone();
        Callback::from(move |(index, value): (usize, String)| {
            quiz.dispatch(QuizAction::SetChar(index, value));
        })
    };

    let on_submit = {
        let quiz = quiz.clone();
        Callback::from(move |_: MouseEvent| quiz.dispatch(QuizAction::Submit))
    };

    let on_toggle_question = {
        let is_question_expanded = is_question_expanded.clone();
        Callback::from(move |_: MouseEvent| is_question_expanded.set(!*is_question_expanded))
    };

    let on_copy = {
        let share_text = session.share_text();
        let show_toast = show_toast.clone();
        let toast_timeout = toast_timeout.clone();
        Callback::from(move |_: ()| {
            let share_text = share_text.clone();
            let show_toast = show_toast.clone();
            let toast_timeout = toast_timeout.clone();
            spawn_local(async move {
                match clipboard::write_text(&share_text).await {
                    Ok(()) => {
                        show_toast.set(true);
                        // Replacing the handle cancels the previous hide.
                        let hide = Timeout::new(TOAST_MILLIS, move || show_toast.set(false));
                        *toast_timeout.borrow_mut() = Some(hide);
                    }
                    Err(e) => log::error!("Error copying result: {}", e),
                }
            });
        })
    };

    let question = session.question();
    let slots: Vec<AnswerSlot> = (0..session.answer_len())
        .map(|i| {
            if session.is_separator(i) {
                AnswerSlot::Separator
            } else {
                AnswerSlot::Letter(session.entry_at(i))
            }
        })
        .collect();

    let question_image = |alt: &'static str| -> Html {
        match question.image() {
            Some(src) => html! {
                <div class="mt-4">
                    <img src={src.to_string()} {alt} width="500" height="300" class="w-full h-auto rounded" />
                </div>
            },
            None => html! {},
        }
    };

    html! {
        <>
            <header class={styles::QUIZ_HEADER}>
                <div class={styles::QUIZ_HEADER_BORDER}></div>
                <h1 class={styles::QUIZ_TITLE}>{"QUIX"}</h1>
            </header>
            <div class={styles::CARD}>
                <div class={styles::QUESTION_HEADER}>{"Question of the day"}</div>
                <div>
                    <p class={classes!(styles::QUESTION_TEXT, (!*is_question_expanded).then_some("line-clamp-2"))}>
                        { question.question.clone() }
                    </p>
                    if question.is_long() {
                        <button class="mt-1 text-gray-500" onclick={on_toggle_question} aria-label="Toggle question">
                            <svg
                                class={classes!("w-4", "h-4", "transition-transform", (*is_question_expanded).then_some("rotate-180"))}
                                viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
                            >
                                <polyline points="6 9 12 15 18 9" />
                            </svg>
                        </button>
                    }
                    { question_image("Question image") }
                </div>

                <AttemptBoard attempts={session.attempts().to_vec()} />

                <AnswerInputs {slots} disabled={!playing} {on_change} />

                if let Some(notice) = quiz.notice.clone() {
                    <p class={styles::TEXT_ERROR}>{ notice }</p>
                }

                <button class={classes!(styles::BUTTON_PRIMARY, "w-full")} onclick={on_submit} disabled={!playing}>
                    {"Submit"}
                </button>

                if !playing {
                    <div class="mt-6">
                        <h3 class={styles::TEXT_H3}>{"Answer Explanation:"}</h3>
                        <p class={styles::TEXT_BODY}>{ question.explanation.clone() }</p>
                        { question_image("Explanation image") }
                    </div>
                }

                if !playing && auth.is_authenticated() {
                    <StatisticsPanel stats={stats.unwrap_or_default()} {on_copy} />
                }

                if *show_toast {
                    <Toast message="Copied to clipboard" />
                }

                <QuizFooter elapsed_secs={session.elapsed_secs()} />
            </div>
        </>
    }
}
