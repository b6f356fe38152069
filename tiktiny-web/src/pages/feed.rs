use crate::{
    actions,
    api::{TikTinyClient, VideoApi},
    components::{VideoCard, alert},
    models::{AppState, FeedAction, FeedList, LatestRequest},
};
use shared::search_term_for_tag;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Scrolling feed with search, tag filters and likes.
#[function_component(FeedPage)]
pub fn feed_page() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let feed = use_reducer(FeedList::default);
    let search = use_state(String::new);
    let latest = use_memo((), |_| LatestRequest::default());

    {
        let feed = feed.dispatcher();
        let session = session.clone();
        let latest = latest.clone();
        use_effect_with((*search).clone(), move |term| {
            let term = term.clone();
            let ticket = latest.issue();
            spawn_local(async move {
                let client = TikTinyClient::for_session(&session);
                match client.list_videos(&term).await {
                    Ok(items) if latest.is_current(ticket) => feed.dispatch(FeedAction::Replace(items)),
                    Ok(_) => log::debug!("dropping stale results for `{term}`"),
                    Err(err) => log::warn!("loading feed failed: {err}"),
                }
            });
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_tag = {
        let search = search.clone();
        Callback::from(move |tag: String| search.set(search_term_for_tag(&tag).to_string()))
    };

    let on_like = {
        let feed = feed.dispatcher();
        let session = session.clone();
        Callback::from(move |video_id: i64| {
            let feed = feed.clone();
            let session = session.clone();
            spawn_local(async move {
                let client = TikTinyClient::for_session(&session);
                match actions::like(&client, &session, video_id).await {
                    Ok(count) => feed.dispatch(FeedAction::PatchLike {
                        id: video_id,
                        count,
                    }),
                    Err(err) => {
                        log::warn!("like failed: {err}");
                        alert(&err.alert_message("Like failed"));
                    }
                }
            });
        })
    };

    let api_base = AttrValue::from(session.api_base().to_string());

    html! {
        <div class="max-w-3xl mx-auto px-3 py-4">
            <div class="flex items-center gap-2 mb-3">
                <input
                    class="input input-bordered w-full"
                    placeholder="Search by title, genre or tag..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
            </div>
            <div class="space-y-10">
                { for feed.videos.iter().map(|video| html! {
                    <VideoCard
                        key={video.id}
                        video={video.clone()}
                        api_base={api_base.clone()}
                        on_like={on_like.clone()}
                        on_tag={on_tag.clone()}
                    />
                }) }
                if feed.videos.is_empty() {
                    <p class="text-center text-base-content/60">{"No videos yet."}</p>
                }
            </div>
        </div>
    }
}
