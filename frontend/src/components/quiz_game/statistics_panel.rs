use shared::PlayerStats;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::styles;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct StatisticsPanelProps {
    pub stats: PlayerStats,
    pub on_copy: Callback<()>,
}

fn stat(value: String, label: &'static str) -> Html {
    html! {
        <div class="text-center">
            <div class="text-2xl font-bold text-gray-900 dark:text-white">{ value }</div>
            <div class={styles::TEXT_SMALL}>{ label }</div>
        </div>
    }
}

#[function_component(StatisticsPanel)]
pub fn statistics_panel(props: &StatisticsPanelProps) -> Html {
    let stats = props.stats;
    let on_copy = {
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(()))
    };

    html! {
        <div class="mt-6 border-t border-gray-200 dark:border-gray-700 pt-4">
            <h3 class={styles::TEXT_H3}>{"Statistics"}</h3>
            <div class="grid grid-cols-4 gap-2 my-4">
                { stat(stats.played.to_string(), "Played") }
                { stat(format!("{}%", stats.win_percentage), "Win %") }
                { stat(stats.current_streak.to_string(), "Current Streak") }
                { stat(stats.max_streak.to_string(), "Max Streak") }
            </div>
            <div class="flex gap-2">
                <button class={styles::BUTTON_PRIMARY} onclick={on_copy}>{"Copy"}</button>
                <Link<Route> to={Route::Archive} classes={classes!(styles::BUTTON_SECONDARY)}>
                    {"Explore previous QOTD"}
                </Link<Route>>
            </div>
        </div>
    }
}
