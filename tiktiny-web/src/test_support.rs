//! Fixtures and a recording fake of [`VideoApi`] for unit tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use reqwest::StatusCode;
use shared::models::{
    AuthResponse, Comment, CommentRequest, LikeResponse, LoginRequest, RateRequest,
    RegisterRequest, UploadMetadata, User, Video, VideoDetail, VideoFile,
};
use shared::{MemoryStorage, Session};
use yew::{BaseComponent, Html, LocalServerRenderer, Properties, function_component, html};
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

use crate::api::{ClientError, VideoApi};

pub(crate) const API_BASE: &str = "http://localhost:5000";

pub(crate) fn user(role: &str) -> User {
    User {
        id: 11,
        email: format!("{role}@example.com"),
        role: role.to_string(),
        display_name: Some(format!("The {role}")),
    }
}

pub(crate) fn session_for(role: Option<&str>) -> Session {
    let mut session = Session::anonymous(API_BASE);
    if let Some(role) = role {
        session
            .set_auth(&MemoryStorage::new(), user(role), format!("{role}-token"))
            .unwrap();
    }
    session
}

pub(crate) fn video(id: i64, title: &str) -> Video {
    Video {
        id,
        title: title.to_string(),
        filepath: format!("/uploads/{id}.mp4"),
        like_count: 0,
        avg_rating: 0.0,
        comment_count: Some(0),
        creator_name: "Ana Lima".to_string(),
        genre: Some("Comedy".to_string()),
    }
}

/// In-memory stand-in for the API that records every call it receives.
#[derive(Default)]
pub(crate) struct RecordingApi {
    calls: RefCell<Vec<String>>,
    videos: RefCell<Vec<Video>>,
    comments: RefCell<Vec<(i64, Comment)>>,
    ratings: RefCell<Vec<(i64, u8)>>,
    uploads: RefCell<Vec<(UploadMetadata, VideoFile)>>,
    next_comment_id: Cell<i64>,
    auth: Option<AuthResponse>,
    failure: Option<(StatusCode, String)>,
}

impl RecordingApi {
    pub(crate) fn with_videos(videos: Vec<Video>) -> Self {
        Self {
            videos: RefCell::new(videos),
            ..Self::default()
        }
    }

    pub(crate) fn accepting_login(mut self, user: User, token: &str) -> Self {
        self.auth = Some(AuthResponse {
            user,
            token: token.to_string(),
        });
        self
    }

    pub(crate) fn failing_with(mut self, status: StatusCode, body: &str) -> Self {
        self.failure = Some((status, body.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn uploads(&self) -> Vec<(UploadMetadata, VideoFile)> {
        self.uploads.borrow().clone()
    }

    fn record(&self, call: String) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some((status, body)) => Err(ClientError::from_status(*status, body)),
            None => Ok(()),
        }
    }

    fn not_found() -> ClientError {
        ClientError::from_status(StatusCode::NOT_FOUND, r#"{"message":"Video not found"}"#)
    }
}

#[async_trait(?Send)]
impl VideoApi for RecordingApi {
    async fn list_videos(&self, search: &str) -> Result<Vec<Video>, ClientError> {
        self.record(format!("GET /videos?search={search}"))?;
        Ok(self
            .videos
            .borrow()
            .iter()
            .filter(|video| video.title.contains(search))
            .cloned()
            .collect())
    }

    async fn video_detail(&self, video_id: i64) -> Result<VideoDetail, ClientError> {
        self.record(format!("GET /videos/{video_id}"))?;
        let video = self
            .videos
            .borrow()
            .iter()
            .find(|video| video.id == video_id)
            .cloned()
            .ok_or_else(Self::not_found)?;
        let comments = self
            .comments
            .borrow()
            .iter()
            .filter(|(id, _)| *id == video_id)
            .map(|(_, comment)| comment.clone())
            .collect();
        Ok(VideoDetail { video, comments })
    }

    async fn upload_video(
        &self,
        metadata: &UploadMetadata,
        file: VideoFile,
    ) -> Result<(), ClientError> {
        self.record("POST /videos".to_string())?;
        self.uploads.borrow_mut().push((metadata.clone(), file));
        Ok(())
    }

    async fn like_video(&self, video_id: i64) -> Result<LikeResponse, ClientError> {
        self.record(format!("POST /videos/{video_id}/like"))?;
        let mut videos = self.videos.borrow_mut();
        let video = videos
            .iter_mut()
            .find(|video| video.id == video_id)
            .ok_or_else(Self::not_found)?;
        video.like_count += 1;
        Ok(LikeResponse {
            like_count: video.like_count,
        })
    }

    async fn comment(&self, video_id: i64, request: &CommentRequest) -> Result<(), ClientError> {
        self.record(format!("POST /videos/{video_id}/comment"))?;
        let id = self.next_comment_id.get() + 1;
        self.next_comment_id.set(id);
        self.comments.borrow_mut().push((
            video_id,
            Comment {
                id,
                text: request.text.clone(),
                user_name: "The viewer".to_string(),
            },
        ));
        Ok(())
    }

    async fn rate(&self, video_id: i64, request: &RateRequest) -> Result<(), ClientError> {
        self.record(format!("POST /videos/{video_id}/rate"))?;
        let mut ratings = self.ratings.borrow_mut();
        ratings.push((video_id, request.stars.value()));
        let stars: Vec<f64> = ratings
            .iter()
            .filter(|(id, _)| *id == video_id)
            .map(|(_, stars)| f64::from(*stars))
            .collect();
        if let Some(video) = self
            .videos
            .borrow_mut()
            .iter_mut()
            .find(|video| video.id == video_id)
        {
            video.avg_rating = stars.iter().sum::<f64>() / stars.len() as f64;
        }
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        self.record(format!("POST /auth/login {}", request.email))?;
        self.auth.clone().ok_or_else(|| {
            ClientError::from_status(
                StatusCode::UNAUTHORIZED,
                r#"{"message":"Invalid credentials"}"#,
            )
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        self.record(format!("POST /auth/register {}", request.email))?;
        self.auth.clone().ok_or_else(|| {
            ClientError::from_status(StatusCode::CONFLICT, r#"{"message":"Email taken"}"#)
        })
    }
}

/// Render a component to HTML without a browser.
pub(crate) async fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    tokio::task::LocalSet::new()
        .run_until(LocalServerRenderer::<C>::with_props(props).render())
        .await
}

#[derive(Properties, PartialEq)]
pub(crate) struct RoutedProps {
    #[prop_or_default]
    pub children: Html,
}

/// Router backed by in-memory history so links render outside a browser.
#[function_component(Routed)]
pub(crate) fn routed(props: &RoutedProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    html! {
        <Router {history}>
            { props.children.clone() }
        </Router>
    }
}
