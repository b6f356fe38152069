use shared::models::Comment;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub comments: Vec<Comment>,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    if props.comments.is_empty() {
        return html! {
            <p class="text-sm text-base-content/60">{"No comments yet."}</p>
        };
    }

    html! {
        <ul class="space-y-3">
            { for props.comments.iter().map(|comment| html! {
                <li key={comment.id} class="bg-base-200 border border-base-300 rounded-xl px-3 py-2">
                    <p class="text-sm">{ &comment.text }</p>
                    <p class="text-xs text-base-content/50 mt-1">{ format!("by {}", comment.user_name) }</p>
                </li>
            }) }
        </ul>
    }
}
