use crate::{containers::layout::Layout, models::AppState, pages::*};
use shared::Session;
use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Feed,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/upload")]
    Upload,
    #[at("/v/:id")]
    Video { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Where to send the visitor instead of `route`, if anywhere.
///
/// Only the upload page is guarded: without a session it bounces to login.
pub fn redirect_for(route: &MainRoute, session: &Session) -> Option<MainRoute> {
    match route {
        MainRoute::Upload if !session.is_authenticated() => Some(MainRoute::Login),
        _ => None,
    }
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());

    if let Some(target) = redirect_for(&props.route, &session) {
        log::debug!("redirecting {:?} to {target:?}", props.route);
        return html! { <Redirect<MainRoute> to={target} /> };
    }

    let page = match props.route.clone() {
        MainRoute::Feed => html! { <FeedPage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Signup => html! { <SignupPage /> },
        MainRoute::Upload => html! { <UploadPage /> },
        MainRoute::Video { id } => html! { <VideoPage {id} /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    };

    html! {
        <Layout current_route={props.route.clone()}>
            {page}
        </Layout>
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to main route: {route:?}");
    html! { <MainRouteView {route} /> }
}
