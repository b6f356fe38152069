use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<String>,
    pub on_select: Callback<String>,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    html! {
        <div class="flex flex-wrap gap-2 mt-2">
            { for props.tags.iter().map(|tag| {
                let on_select = props.on_select.clone();
                let value = tag.clone();
                html! {
                    <button
                        key={tag.clone()}
                        type="button"
                        class="badge badge-ghost text-xs hover:badge-primary cursor-pointer"
                        onclick={Callback::from(move |_| on_select.emit(value.clone()))}
                    >
                        { tag }
                    </button>
                }
            }) }
        </div>
    }
}
