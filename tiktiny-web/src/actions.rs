//! User-action flows shared by the views.
//!
//! Each flow validates locally first (session, role, selected file) and only
//! then talks to the API, so a rejected action never produces a request.
//! Mutations on a video's detail are followed by a full refetch of that
//! detail; nothing is patched in place except the feed's like counter.

use std::future::Future;

use shared::models::{
    CommentRequest, LoginRequest, RateRequest, RegisterRequest, StarRating, UploadMetadata,
    VideoDetail, VideoFile,
};
use shared::{Session, SessionStorage};

use crate::api::{ClientError, GuardedAction, VideoApi};

fn require_login(session: &Session, action: GuardedAction) -> Result<(), ClientError> {
    if session.is_authenticated() {
        Ok(())
    } else {
        Err(ClientError::LoginRequired(action))
    }
}

/// Like a video and return its new like count.
///
/// # Errors
/// [`ClientError::LoginRequired`] when anonymous, otherwise any API error.
pub async fn like(
    api: &dyn VideoApi,
    session: &Session,
    video_id: i64,
) -> Result<i64, ClientError> {
    require_login(session, GuardedAction::Like)?;
    let response = api.like_video(video_id).await?;
    Ok(response.like_count)
}

/// Post a comment, then refetch the detail it belongs to.
///
/// # Errors
/// [`ClientError::LoginRequired`] when anonymous, otherwise any API error.
pub async fn comment_and_refresh(
    api: &dyn VideoApi,
    session: &Session,
    video_id: i64,
    text: &str,
) -> Result<VideoDetail, ClientError> {
    require_login(session, GuardedAction::Comment)?;
    let request = CommentRequest {
        text: text.to_string(),
    };
    api.comment(video_id, &request).await?;
    api.video_detail(video_id).await
}

/// Rate a video, then refetch its detail.
///
/// # Errors
/// [`ClientError::LoginRequired`] when anonymous, otherwise any API error.
pub async fn rate_and_refresh(
    api: &dyn VideoApi,
    session: &Session,
    video_id: i64,
    stars: StarRating,
) -> Result<VideoDetail, ClientError> {
    require_login(session, GuardedAction::Rate)?;
    api.rate(video_id, &RateRequest { stars }).await?;
    api.video_detail(video_id).await
}

/// Upload a video for a creator.
///
/// `file` is whatever the picker holds; `read` turns it into bytes and only
/// runs once the role and file checks have passed.
///
/// # Errors
/// [`ClientError::NotCreator`], [`ClientError::MissingFile`], a read error
/// from `read`, or any API error.
pub async fn upload<F, R, Fut>(
    api: &dyn VideoApi,
    session: &Session,
    metadata: &UploadMetadata,
    file: Option<F>,
    read: R,
) -> Result<(), ClientError>
where
    R: FnOnce(F) -> Fut,
    Fut: Future<Output = Result<VideoFile, ClientError>>,
{
    if !session.is_creator() {
        return Err(ClientError::NotCreator);
    }
    let file = file.ok_or(ClientError::MissingFile)?;
    let video = read(file).await?;
    log::info!(
        "uploading `{}` ({} bytes) as `{}`",
        video.name,
        video.bytes.len(),
        metadata.title
    );
    api.upload_video(metadata, video).await
}

/// Log in and store the returned identity in `session`.
///
/// # Errors
/// Any API error, or [`ClientError::Storage`] if the session cannot be saved.
pub async fn sign_in(
    api: &dyn VideoApi,
    storage: &dyn SessionStorage,
    session: &mut Session,
    request: &LoginRequest,
) -> Result<(), ClientError> {
    let auth = api.login(request).await?;
    session.set_auth(storage, auth.user, auth.token)?;
    Ok(())
}

/// Register and store the returned identity in `session`.
///
/// # Errors
/// Any API error, or [`ClientError::Storage`] if the session cannot be saved.
pub async fn sign_up(
    api: &dyn VideoApi,
    storage: &dyn SessionStorage,
    session: &mut Session,
    request: &RegisterRequest,
) -> Result<(), ClientError> {
    let auth = api.register(request).await?;
    session.set_auth(storage, auth.user, auth.token)?;
    Ok(())
}
