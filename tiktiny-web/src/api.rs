use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, multipart};
use serde::de::DeserializeOwned;
use shared::models::{
    AuthResponse, CommentRequest, ErrorResponse, LikeResponse, LoginRequest, RateRequest,
    RegisterRequest, UploadMetadata, VIDEO_FIELD, Video, VideoDetail, VideoFile,
    VideoListResponse,
};
use shared::{Session, StorageError};
use thiserror::Error;

thread_local! {
    static SHARED_HTTP: OnceCell<Client> = OnceCell::new();
}

/// User actions that need a signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    Like,
    Comment,
    Rate,
}

impl GuardedAction {
    /// Prompt shown when the action is attempted anonymously.
    pub fn login_prompt(self) -> &'static str {
        match self {
            Self::Like => "Login to like",
            Self::Comment => "Login to comment",
            Self::Rate => "Login to rate",
        }
    }
}

/// Everything that can stop a user action.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}", .0.login_prompt())]
    LoginRequired(GuardedAction),
    #[error("Only creators can upload.")]
    NotCreator,
    #[error("Choose a video file (.mp4 recommended)")]
    MissingFile,
    #[error("could not read the selected file: {0}")]
    FileRead(String),
    #[error("server responded with {status}")]
    Server {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// Build a server error from a non-success status and its body.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        Self::Server {
            status,
            message: ErrorResponse::from_body(body).map(|error| error.message),
        }
    }

    /// True for errors raised before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::LoginRequired(_) | Self::NotCreator | Self::MissingFile
        )
    }

    /// Text for the blocking alert: validation errors speak for themselves,
    /// server errors use the server message, everything else the fallback.
    pub fn alert_message(&self, fallback: &str) -> String {
        match self {
            _ if self.is_validation() => self.to_string(),
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Calls offered by the video API.
#[async_trait(?Send)]
pub trait VideoApi {
    async fn list_videos(&self, search: &str) -> Result<Vec<Video>, ClientError>;

    async fn video_detail(&self, video_id: i64) -> Result<VideoDetail, ClientError>;

    async fn upload_video(
        &self,
        metadata: &UploadMetadata,
        file: VideoFile,
    ) -> Result<(), ClientError>;

    async fn like_video(&self, video_id: i64) -> Result<LikeResponse, ClientError>;

    async fn comment(&self, video_id: i64, request: &CommentRequest) -> Result<(), ClientError>;

    async fn rate(&self, video_id: i64, request: &RateRequest) -> Result<(), ClientError>;

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError>;
}

/// HTTP client for the TikTiny API.
///
/// Every request goes to `<api_base>/api/<path>` and carries the session's
/// bearer token when there is one.
#[derive(Clone, Debug)]
pub struct TikTinyClient {
    base_url: String,
    bearer: Option<String>,
    client: Client,
}

impl TikTinyClient {
    /// Create an anonymous client for the API at `api_base`.
    pub fn new(api_base: &str) -> Self {
        Self {
            base_url: format!("{}/api", api_base.trim_end_matches('/')),
            bearer: None,
            client: SHARED_HTTP.with(|cell| cell.get_or_init(Client::new).clone()),
        }
    }

    /// Client carrying the base URL and token of `session`.
    pub fn for_session(session: &Session) -> Self {
        Self::new(session.api_base()).with_bearer(session.token().map(str::to_string))
    }

    #[must_use]
    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.api_url(path);
        log::debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::warn!("request failed with {status}: {body}");
        Err(ClientError::from_status(status, &body))
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ClientError> {
        let response = Self::send(request).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait(?Send)]
impl VideoApi for TikTinyClient {
    async fn list_videos(&self, search: &str) -> Result<Vec<Video>, ClientError> {
        let request = self
            .request(Method::GET, "videos")
            .query(&[("search", search)]);
        let body: VideoListResponse = Self::send_json(request).await?;
        Ok(body.items)
    }

    async fn video_detail(&self, video_id: i64) -> Result<VideoDetail, ClientError> {
        Self::send_json(self.request(Method::GET, &format!("videos/{video_id}"))).await
    }

    async fn upload_video(
        &self,
        metadata: &UploadMetadata,
        file: VideoFile,
    ) -> Result<(), ClientError> {
        let VideoFile { name, mime, bytes } = file;
        let mut part = multipart::Part::bytes(bytes).file_name(name);
        if !mime.is_empty() {
            part = part.mime_str(&mime)?;
        }
        let form = metadata
            .form_fields()
            .into_iter()
            .fold(multipart::Form::new(), |form, (field, value)| {
                form.text(field, value)
            })
            .part(VIDEO_FIELD, part);

        Self::send(self.request(Method::POST, "videos").multipart(form)).await?;
        Ok(())
    }

    async fn like_video(&self, video_id: i64) -> Result<LikeResponse, ClientError> {
        Self::send_json(self.request(Method::POST, &format!("videos/{video_id}/like"))).await
    }

    async fn comment(&self, video_id: i64, request: &CommentRequest) -> Result<(), ClientError> {
        let builder = self
            .request(Method::POST, &format!("videos/{video_id}/comment"))
            .json(request);
        Self::send(builder).await?;
        Ok(())
    }

    async fn rate(&self, video_id: i64, request: &RateRequest) -> Result<(), ClientError> {
        let builder = self
            .request(Method::POST, &format!("videos/{video_id}/rate"))
            .json(request);
        Self::send(builder).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        Self::send_json(self.request(Method::POST, "auth/login").json(request)).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        Self::send_json(self.request(Method::POST, "auth/register").json(request)).await
    }
}
