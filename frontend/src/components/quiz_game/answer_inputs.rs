use shared::quiz::typed_char;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::styles;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AnswerSlot {
    Separator,
    Letter(Option<char>),
}

#[derive(Properties, PartialEq)]
pub struct AnswerInputsProps {
    pub slots: Vec<AnswerSlot>,
    pub disabled: bool,
    pub on_change: Callback<(usize, String)>,
}

fn input_id(index: usize) -> String {
    format!("answer-input-{}", index)
}

fn focus_input(index: usize) {
    if let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&input_id(index)))
    {
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            element.focus().ok();
        }
    }
}

fn next_letter_slot(slots: &[AnswerSlot], after: usize) -> Option<usize> {
    slots
        .iter()
        .enumerate()
        .skip(after + 1)
        .find(|(_, slot)| matches!(slot, AnswerSlot::Letter(_)))
        .map(|(i, _)| i)
}

#[function_component(AnswerInputs)]
pub fn answer_inputs(props: &AnswerInputsProps) -> Html {
    html! {
        <div class={styles::ANSWER_ROW}>
            {
                for props.slots.iter().enumerate().map(|(index, slot)| match slot {
                    AnswerSlot::Separator => html! { <div class={styles::ANSWER_SPACE}></div> },
                    AnswerSlot::Letter(value) => {
                        let on_change = props.on_change.clone();
                        let next = next_letter_slot(&props.slots, index);
                        let oninput = Callback::from(move |e: InputEvent| {
                            let input = e.target_unchecked_into::<HtmlInputElement>();
                            let value = input.value();
                            let typed = typed_char(&value).is_some();
                            // Yew sees no value change for a blank keystroke.
                            if !typed {
                                input.set_value("");
                            }
                            on_change.emit((index, value));
                            if let (true, Some(next)) = (typed, next) {
                                focus_input(next);
                            }
                        });

                        html! {
                            <input
                                id={input_id(index)}
                                class={styles::ANSWER_INPUT}
                                maxlength="1"
                                autocomplete="off"
                                value={value.map(String::from).unwrap_or_default()}
                                {oninput}
                                disabled={props.disabled}
                            />
                        }
                    }
                })
            }
        </div>
    }
}
