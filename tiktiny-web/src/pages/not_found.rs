use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// `NotFoundPage` page component
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="max-w-xl mx-auto px-4 py-10 space-y-4">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p class="text-base-content/70">{ "There is nothing at this address." }</p>
            <Link<MainRoute> to={MainRoute::Feed} classes="btn btn-primary">
                { "Back to the feed" }
            </Link<MainRoute>>
        </div>
    }
}
