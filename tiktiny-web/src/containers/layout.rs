use crate::containers::header::Header;
use crate::routes::MainRoute;
use yew::{Children, Html, Properties, classes, function_component, html};

pub const FOOTER_TAGLINE: &str = "Built for Scalable Advanced Software Systems · TikTok-like MVP";

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
    <div class="min-h-screen flex flex-col bg-base-100">
        <Header current_route={props.current_route.clone()} />
        <main class={classes!("flex-1", "transition-all", "duration-300")}>
            {props.children.clone()}
        </main>
        <footer class="footer footer-center p-6 border-t border-base-300 text-base-content/60 text-sm">
            <p>{FOOTER_TAGLINE}</p>
        </footer>
    </div>
    }
}
