use crate::{
    actions,
    api::TikTinyClient,
    components::alert,
    models::AppState,
    routes::MainRoute,
    storage::BrowserStorage,
};
use shared::models::RegisterRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

fn bind(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            field.set(input.value());
        }
    })
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let display_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let dispatch = use_dispatch::<AppState>();
    let navigator = use_navigator();

    let onsubmit = {
        let display_name = display_name.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = RegisterRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                display_name: (*display_name).clone(),
            };
            loading.set(true);
            let loading = loading.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let mut session = dispatch.get().session.clone();
                let client = TikTinyClient::for_session(&session);
                match actions::sign_up(&client, &BrowserStorage::shared(), &mut session, &request).await {
                    Ok(()) => {
                        AppState::sign_in(&dispatch, session);
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::Feed);
                        }
                    }
                    Err(err) => {
                        log::warn!("signup failed: {err}");
                        alert(&err.alert_message("Signup failed"));
                    }
                }
                loading.set(false);
            });
        })
    };

    let is_busy = *loading;

    html! {
        <div class="max-w-md mx-auto px-4 py-10">
            <h1 class="text-3xl font-extrabold mb-6">{"Create your account"}</h1>
            <form class="space-y-4" {onsubmit}>
                <input
                    class="input input-bordered w-full"
                    placeholder="Display name"
                    value={(*display_name).clone()}
                    oninput={bind(&display_name)}
                />
                <input
                    class="input input-bordered w-full"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={bind(&email)}
                />
                <input
                    class="input input-bordered w-full"
                    placeholder="Password"
                    type="password"
                    value={(*password).clone()}
                    oninput={bind(&password)}
                />
                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    {if is_busy { "Creating..." } else { "Sign up" }}
                </button>
            </form>
            <p class="text-sm text-base-content/60 mt-4">
                {"Have an account? "}
                <Link<MainRoute> to={MainRoute::Login} classes="underline">{"Login"}</Link<MainRoute>>
            </p>
        </div>
    }
}
