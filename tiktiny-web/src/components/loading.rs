use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="max-w-3xl mx-auto px-3 py-6 flex items-center gap-2 animate-fadeIn">
            <span class="loading loading-dots loading-sm"></span>
            <span>{"Loading..."}</span>
        </div>
    }
}
