use crate::{
    actions,
    api::TikTinyClient,
    components::alert,
    models::AppState,
    routes::MainRoute,
    storage::BrowserStorage,
};
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let dispatch = use_dispatch::<AppState>();
    let navigator = use_navigator();

    let onsubmit = {
        let email_handle = email.clone();
        let password_handle = password.clone();
        let loading_handle = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                email: (*email_handle).clone(),
                password: (*password_handle).clone(),
            };
            loading_handle.set(true);
            let loading_ref = loading_handle.clone();
            let dispatch = dispatch.clone();
            let navigator_handle = navigator.clone();
            spawn_local(async move {
                let mut session = dispatch.get().session.clone();
                let client = TikTinyClient::for_session(&session);
                match actions::sign_in(&client, &BrowserStorage::shared(), &mut session, &request).await {
                    Ok(()) => {
                        AppState::sign_in(&dispatch, session);
                        if let Some(ref nav) = navigator_handle {
                            nav.push(&MainRoute::Feed);
                        }
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        alert(&err.alert_message("Login failed"));
                    }
                }
                loading_ref.set(false);
            });
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                email.set(input.value());
            }
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                password.set(input.value());
            }
        })
    };

    let is_busy = *loading;

    html! {
        <div class="max-w-md mx-auto px-4 py-10">
            <h1 class="text-3xl font-extrabold mb-6">{"Welcome back"}</h1>
            <form class="space-y-4" {onsubmit}>
                <input
                    class="input input-bordered w-full"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_change}
                />
                <input
                    class="input input-bordered w-full"
                    placeholder="Password"
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password_change}
                />
                <button class="btn btn-primary w-full" type="submit" disabled={is_busy}>
                    {if is_busy { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="text-sm text-base-content/60 mt-4">
                {"No account? "}
                <Link<MainRoute> to={MainRoute::Signup} classes="underline">{"Sign up"}</Link<MainRoute>>
            </p>
        </div>
    }
}
