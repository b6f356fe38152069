pub mod auth;
pub mod errors;
mod lenient;
pub mod upload;
pub mod user;
pub mod video;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use errors::ErrorResponse;
pub use upload::{AgeRating, UploadMetadata, VIDEO_FIELD, VideoFile};
pub use user::{User, UserRole};
pub use video::{
    Comment, CommentRequest, InvalidStarRating, LikeResponse, RateRequest, StarRating, Video,
    VideoDetail, VideoListResponse,
};
