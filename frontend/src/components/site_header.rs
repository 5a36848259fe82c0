use yew::prelude::*;

use crate::hooks::use_auth;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let auth = use_auth();

    let on_sign_in = {
        let sign_in = auth.sign_in.clone();
        Callback::from(move |_: MouseEvent| sign_in.emit(()))
    };
    let on_sign_out = {
        let sign_out = auth.sign_out.clone();
        Callback::from(move |_: MouseEvent| sign_out.emit(()))
    };

    html! {
        <header class="absolute top-4 right-4 flex items-center space-x-4">
            {
                match (&auth.user, auth.is_authenticated()) {
                    (Some(user), true) => html! {
                        <div class="flex items-center space-x-3 bg-gray-100 dark:bg-gray-800 p-2 rounded-lg shadow-md">
                            if let Some(avatar) = user.user_metadata.avatar_url.clone() {
                                <img src={avatar} alt="User avatar" class="w-10 h-10 rounded-full" />
                            }
                            <span class="text-gray-800 dark:text-gray-100 font-semibold">
                                { format!("Welcome, {}", user.display_name()) }
                            </span>
                            <button class="text-sm text-gray-500 hover:text-gray-700 dark:hover:text-gray-300" onclick={on_sign_out}>
                                {"Sign out"}
                            </button>
                        </div>
                    },
                    _ => html! {
                        <button
                            onclick={on_sign_in}
                            class="bg-blue-600 hover:bg-blue-700 text-white font-semibold py-2 px-4 rounded-lg transition duration-200 shadow-lg"
                        >
                            {"Sign in with Google"}
                        </button>
                    },
                }
            }
        </header>
    }
}
