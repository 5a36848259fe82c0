use shared::Attempt;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AttemptBoardProps {
    pub attempts: Vec<Attempt>,
}

#[function_component(AttemptBoard)]
pub fn attempt_board(props: &AttemptBoardProps) -> Html {
    html! {
        <div class="mt-6">
            {
                for props.attempts.iter().map(|attempt| html! {
                    <div class={styles::ATTEMPT_ROW}>
                        {
                            for attempt.tiles().map(|(letter, feedback)| {
                                if letter == ' ' {
                                    html! { <div class={styles::ANSWER_SPACE}></div> }
                                } else {
                                    html! {
                                        <div class={classes!(styles::ATTEMPT_BLOCK, styles::feedback_color(feedback))}>
                                            { letter.to_string() }
                                        </div>
                                    }
                                }
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}
