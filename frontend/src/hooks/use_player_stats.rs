use shared::PlayerStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::fetch_stats;

#[hook]
pub fn use_player_stats(token: Option<String>) -> Option<PlayerStats> {
    let stats = use_state(|| None::<PlayerStats>);

    {
        let stats = stats.clone();
        use_effect_with(token, move |token| {
            match token.clone() {
                Some(token) => spawn_local(async move {
                    match fetch_stats(&token).await {
                        Ok(data) => stats.set(Some(data)),
                        Err(e) => log::error!("Error fetching stats: {}", e),
                    }
                }),
                None => stats.set(None),
            }
            || ()
        });
    }

    *stats
}
