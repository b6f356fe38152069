use js_sys::Array;
use shared::models::Video;
use shared::extract_hashtags;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{HtmlVideoElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

use crate::components::{avatar::Avatar, tag_list::TagList};
use crate::models::{Playback, playback::AUTOPLAY_THRESHOLD};
use crate::routes::MainRoute;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub api_base: AttrValue,
    pub on_like: Callback<i64>,
    pub on_tag: Callback<String>,
}

fn apply(video: &HtmlVideoElement, playback: Playback) {
    match playback {
        Playback::Play => match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    log::debug!("autoplay rejected: {err:?}");
                }
            }),
            Err(err) => log::debug!("autoplay rejected: {err:?}"),
        },
        Playback::PauseAndRewind => {
            if let Err(err) = video.pause() {
                log::debug!("pause failed: {err:?}");
            }
            video.set_current_time(0.0);
        }
    }
}

/// Start watching `node`; the observer lives until the returned pair is
/// dropped after `disconnect`.
fn observe_autoplay(node: &NodeRef) -> Option<(IntersectionObserver, ObserverCallback)> {
    let element = node.cast::<HtmlVideoElement>()?;
    let callback: ObserverCallback = Closure::new(|entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if let Ok(video) = entry.target().dyn_into::<HtmlVideoElement>() {
                apply(&video, Playback::for_ratio(entry.intersection_ratio()));
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(AUTOPLAY_THRESHOLD));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            log::warn!("autoplay disabled: {err:?}");
            None
        }
    }
}

/// One entry of the feed: autoplaying clip, creator details and action rail.
#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        use_effect_with(props.video.id, move |_| {
            let watcher = observe_autoplay(&video_ref);
            move || {
                if let Some((observer, _callback)) = watcher {
                    observer.disconnect();
                }
            }
        });
    }

    let video = &props.video;
    let tags = extract_hashtags(&video.title, video.genre.as_deref());
    let on_like = {
        let on_like = props.on_like.clone();
        let id = video.id;
        Callback::from(move |_: MouseEvent| on_like.emit(id))
    };

    html! {
        <article class="video-card relative rounded-2xl overflow-hidden border border-base-300">
            <video
                ref={video_ref}
                src={video.media_url(&props.api_base)}
                muted=true
                playsinline=true
                loop=true
                class="w-full max-h-[80vh] object-cover bg-black"
            />
            <div class="absolute inset-x-0 bottom-0 p-4 bg-gradient-to-t from-black/70 to-transparent">
                <div class="flex items-end gap-3">
                    <Avatar name={video.creator_name.clone()} />
                    <div>
                        <h3 class="text-xl font-bold">{ &video.title }</h3>
                        <p class="text-sm text-white/70">
                            { format!("by {} · ★ {} · ♥ {}", video.creator_name, video.rating_label(), video.like_count) }
                        </p>
                        <TagList {tags} on_select={props.on_tag.clone()} />
                    </div>
                </div>
            </div>
            <div class="absolute right-3 top-1/2 -translate-y-1/2 flex flex-col items-center gap-3">
                <button type="button" aria-label="like" class="btn btn-circle btn-ghost flex-col h-auto py-2" onclick={on_like}>
                    <Icon icon_id={IconId::HeroiconsSolidHeart} class="h-6 w-6" />
                    <span class="text-xs">{ video.like_count }</span>
                </button>
                <Link<MainRoute> to={MainRoute::Video { id: video.id }} classes="btn btn-circle btn-ghost flex-col h-auto py-2">
                    <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="h-6 w-6" />
                    <span class="text-xs">{ video.comment_count.unwrap_or(0) }</span>
                </Link<MainRoute>>
            </div>
        </article>
    }
}
