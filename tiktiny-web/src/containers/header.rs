use crate::{
    components::nav_links::NavLinks,
    models::AppState,
    routes::MainRoute,
};
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::{use_dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let dispatch = use_dispatch::<AppState>();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        AppState::sign_out(&dispatch);
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Feed);
        }
    });

    html! {
        <header class="navbar sticky top-0 z-50 justify-between bg-base-300/70 backdrop-blur border-b border-base-300">
            <Link<MainRoute> to={MainRoute::Feed} classes="btn btn-ghost text-2xl font-extrabold tracking-tight">
                {"TikTiny"}
            </Link<MainRoute>>
            <nav class="flex items-center gap-2">
                <NavLinks
                    current_route={props.current_route.clone()}
                    authenticated={session.is_authenticated()}
                    creator={session.is_creator()}
                />
                {
                    session.user().map_or_else(
                        || html! {},
                        |user| html! {
                            <>
                                <span class="text-sm text-base-content/70">
                                    { format!("Hi, {}", user.greeting_name()) }
                                </span>
                                <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                                    {"Log out"}
                                </button>
                            </>
                        },
                    )
                }
            </nav>
        </header>
    }
}
