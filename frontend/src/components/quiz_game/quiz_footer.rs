use shared::quiz::format_time;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct QuizFooterProps {
    pub elapsed_secs: u32,
}

#[function_component(QuizFooter)]
pub fn quiz_footer(props: &QuizFooterProps) -> Html {
    html! {
        <div class="mt-6 flex items-center justify-between text-sm text-gray-500 dark:text-gray-400">
            <div class="flex items-center gap-1">
                <svg class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10" />
                    <polyline points="12 6 12 12 16 14" />
                </svg>
                <span>{ format_time(props.elapsed_secs) }</span>
            </div>
            <span>{"Made with ❤️ o7 labs"}</span>
        </div>
    }
}
