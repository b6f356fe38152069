use crate::{
    actions,
    api::{TikTinyClient, VideoApi},
    components::{CommentList, Loading, alert},
    models::{AppState, DetailAction, DetailSlot},
};
use shared::models::StarRating;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct VideoPageProps {
    pub id: i64,
}

/// Single video with its comments, a comment box and a rating form.
#[function_component(VideoPage)]
pub fn video_page(props: &VideoPageProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let detail = use_reducer(DetailSlot::default);
    let text = use_state(String::new);
    let stars = use_state(StarRating::default);

    {
        let detail = detail.dispatcher();
        let session = session.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            detail.dispatch(DetailAction::Open(id));
            spawn_local(async move {
                let client = TikTinyClient::for_session(&session);
                match client.video_detail(id).await {
                    Ok(loaded) => detail.dispatch(DetailAction::Loaded(loaded)),
                    Err(err) => log::warn!("loading video {id} failed: {err}"),
                }
            });
            || ()
        });
    }

    let on_text = {
        let text = text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                text.set(area.value());
            }
        })
    };

    let on_stars = {
        let stars = stars.clone();
        Callback::from(move |event: Event| {
            let picked = event
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<u8>().ok())
                .and_then(|value| StarRating::try_from(value).ok());
            if let Some(picked) = picked {
                stars.set(picked);
            }
        })
    };

    let on_comment = {
        let session = session.clone();
        let detail = detail.dispatcher();
        let text = text.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let detail = detail.clone();
            let text = text.clone();
            spawn_local(async move {
                let client = TikTinyClient::for_session(&session);
                match actions::comment_and_refresh(&client, &session, id, &text).await {
                    Ok(refreshed) => {
                        detail.dispatch(DetailAction::Loaded(refreshed));
                        text.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("comment on {id} failed: {err}");
                        alert(&err.alert_message("Comment failed"));
                    }
                }
            });
        })
    };

    let on_rate = {
        let session = session.clone();
        let detail = detail.dispatcher();
        let stars = *stars;
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            let session = session.clone();
            let detail = detail.clone();
            spawn_local(async move {
                let client = TikTinyClient::for_session(&session);
                match actions::rate_and_refresh(&client, &session, id, stars).await {
                    Ok(refreshed) => detail.dispatch(DetailAction::Loaded(refreshed)),
                    Err(err) => {
                        log::warn!("rating {id} failed: {err}");
                        alert(&err.alert_message("Rating failed"));
                    }
                }
            });
        })
    };

    let Some(loaded) = detail.detail.clone() else {
        return html! { <Loading /> };
    };
    let video = &loaded.video;

    html! {
        <div class="max-w-3xl mx-auto px-3 py-6 space-y-4">
            <video
                src={video.media_url(session.api_base())}
                controls=true
                class="w-full rounded-2xl bg-black"
            />
            <div>
                <h1 class="text-2xl font-bold">{ &video.title }</h1>
                <p class="text-sm text-base-content/70">
                    { format!("by {} · ★ {} · ♥ {}", video.creator_name, video.rating_label(), video.like_count) }
                </p>
            </div>
            <div class="grid grid-cols-3 gap-3">
                <section class="col-span-2">
                    <h3 class="font-semibold mb-2">{"Comments"}</h3>
                    <CommentList comments={loaded.comments.clone()} />
                </section>
                <aside class="col-span-1 bg-base-200 border border-base-300 rounded-xl p-3 space-y-3">
                    <div>
                        <h4 class="font-semibold mb-1">{"Add a comment"}</h4>
                        <textarea
                            class="textarea textarea-bordered w-full h-24"
                            value={(*text).clone()}
                            oninput={on_text}
                        />
                        <button class="btn btn-primary mt-2 w-full" onclick={on_comment}>{"Post"}</button>
                    </div>
                    <div>
                        <h4 class="font-semibold mb-1">{"Rate this video"}</h4>
                        <select class="select select-bordered w-full" onchange={on_stars}>
                            { for StarRating::all().map(|rating| html! {
                                <option
                                    value={rating.value().to_string()}
                                    selected={rating == *stars}
                                >
                                    { rating.label() }
                                </option>
                            }) }
                        </select>
                        <button class="btn btn-primary mt-2 w-full" onclick={on_rate}>{"Submit Rating"}</button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
