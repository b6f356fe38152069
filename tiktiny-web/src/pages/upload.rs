use crate::{
    actions,
    api::{ClientError, TikTinyClient},
    components::alert,
    models::AppState,
};
use js_sys::Uint8Array;
use shared::models::{AgeRating, UploadMetadata, VideoFile};
use std::str::FromStr;
use strum::IntoEnumIterator;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yewdux::prelude::use_selector;

pub const CREATORS_ONLY: &str = "Only creators can upload.";

#[derive(Properties, PartialEq)]
pub struct UploadGateProps {
    pub creator: bool,
    pub children: Children,
}

/// Shows its children to creators and a notice to everybody else.
#[function_component(UploadGate)]
pub fn upload_gate(props: &UploadGateProps) -> Html {
    if !props.creator {
        return html! {
            <div class="max-w-xl mx-auto px-4 py-10">{CREATORS_ONLY}</div>
        };
    }
    html! { <>{props.children.clone()}</> }
}

async fn read_file(file: File) -> Result<VideoFile, ClientError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| ClientError::FileRead(format!("{err:?}")))?;
    Ok(VideoFile {
        name: file.name(),
        mime: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

fn bind(field: &UseStateHandle<String>) -> Callback<InputEvent> {
    let field = field.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            field.set(input.value());
        }
    })
}

#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let title = use_state(String::new);
    let publisher = use_state(String::new);
    let producer = use_state(String::new);
    let genre = use_state(String::new);
    let age_rating = use_state(AgeRating::default);
    let file = use_state(|| None::<File>);
    let file_input = use_node_ref();
    let loading = use_state(|| false);

    let on_file = {
        let file = file.clone();
        Callback::from(move |event: Event| {
            let selected = event
                .target_dyn_into::<HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            file.set(selected);
        })
    };

    let on_age_rating = {
        let age_rating = age_rating.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                match AgeRating::from_str(&select.value()) {
                    Ok(rating) => age_rating.set(rating),
                    Err(err) => log::warn!("unknown age rating `{}`: {err}", select.value()),
                }
            }
        })
    };

    let onsubmit = {
        let session = session.clone();
        let fields = (
            title.clone(),
            publisher.clone(),
            producer.clone(),
            genre.clone(),
            age_rating.clone(),
        );
        let file = file.clone();
        let file_input = file_input.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let (title, publisher, producer, genre, age_rating) = fields.clone();
            let metadata = UploadMetadata {
                title: (*title).clone(),
                publisher: (*publisher).clone(),
                producer: (*producer).clone(),
                genre: (*genre).clone(),
                age_rating: *age_rating,
            };
            let selected = (*file).clone();
            let session = session.clone();
            let file = file.clone();
            let file_input = file_input.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let client = TikTinyClient::for_session(&session);
                let pending = selected.is_some();
                if pending {
                    loading.set(true);
                }
                let result = actions::upload(&client, &session, &metadata, selected, read_file).await;
                if pending {
                    loading.set(false);
                }
                match result {
                    Ok(()) => {
                        for field in [&title, &publisher, &producer, &genre] {
                            field.set(String::new());
                        }
                        age_rating.set(AgeRating::default());
                        file.set(None);
                        if let Some(input) = file_input.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                        alert("Uploaded! Go to feed to view it.");
                    }
                    Err(err) => {
                        log::warn!("upload failed: {err}");
                        alert(&err.alert_message("Upload failed"));
                    }
                }
            });
        })
    };

    let is_busy = *loading;

    html! {
        <UploadGate creator={session.is_creator()}>
            <div class="max-w-xl mx-auto px-4 py-10">
                <h1 class="text-3xl font-extrabold mb-6">{"Upload a video"}</h1>
                <form class="space-y-3" {onsubmit}>
                    <input
                        ref={file_input}
                        type="file"
                        accept="video/*"
                        class="file-input file-input-bordered w-full"
                        onchange={on_file}
                    />
                    <input
                        class="input input-bordered w-full"
                        placeholder="Title"
                        value={(*title).clone()}
                        oninput={bind(&title)}
                    />
                    <div class="grid grid-cols-2 gap-2">
                        <input
                            class="input input-bordered"
                            placeholder="Publisher"
                            value={(*publisher).clone()}
                            oninput={bind(&publisher)}
                        />
                        <input
                            class="input input-bordered"
                            placeholder="Producer"
                            value={(*producer).clone()}
                            oninput={bind(&producer)}
                        />
                    </div>
                    <div class="grid grid-cols-2 gap-2">
                        <input
                            class="input input-bordered"
                            placeholder="Genre"
                            value={(*genre).clone()}
                            oninput={bind(&genre)}
                        />
                        <select class="select select-bordered" onchange={on_age_rating}>
                            { for AgeRating::iter().map(|rating| html! {
                                <option
                                    value={rating.as_ref().to_string()}
                                    selected={rating == *age_rating}
                                >
                                    { rating.to_string() }
                                </option>
                            }) }
                        </select>
                    </div>
                    <button class="btn btn-primary" type="submit" disabled={is_busy}>
                        {if is_busy { "Uploading..." } else { "Upload" }}
                    </button>
                </form>
            </div>
        </UploadGate>
    }
}
