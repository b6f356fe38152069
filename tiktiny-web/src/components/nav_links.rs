use crate::routes::MainRoute;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct NavLinksProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
    pub authenticated: bool,
    pub creator: bool,
}

/// Header links that depend on who is signed in.
#[function_component(NavLinks)]
pub fn nav_links(props: &NavLinksProps) -> Html {
    let mut routes = vec![(MainRoute::Feed, "Feed")];
    if props.creator {
        routes.push((MainRoute::Upload, "Upload"));
    }
    if !props.authenticated {
        routes.push((MainRoute::Login, "Login"));
        routes.push((MainRoute::Signup, "Sign up"));
    }

    html! {
        <>
            { for routes.into_iter().map(|(route, label)| {
                let active = if props.current_route.as_ref() == Some(&route) {
                    "btn-soft"
                } else {
                    "btn-outline"
                };
                html! {
                    <Link<MainRoute> to={route} classes={classes!("btn", "btn-sm", active)}>
                        {label}
                    </Link<MainRoute>>
                }
            }) }
        </>
    }
}
