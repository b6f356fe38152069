use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::lenient;

/// Feed item as projected by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: i64,
    pub title: String,
    /// Server-relative path of the media file, e.g. `/uploads/abc.mp4`.
    pub filepath: String,
    #[serde(deserialize_with = "lenient::i64_or_zero")]
    pub like_count: i64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub avg_rating: f64,
    #[serde(default, deserialize_with = "lenient::optional_i64")]
    pub comment_count: Option<i64>,
    #[serde(default)]
    pub creator_name: String,
    #[serde(default)]
    pub genre: Option<String>,
}

impl Video {
    /// Absolute media URL for a `<video src>` attribute.
    #[must_use]
    pub fn media_url(&self, api_base: &str) -> String {
        format!("{}{}", api_base.trim_end_matches('/'), self.filepath)
    }

    /// Average rating rounded to one decimal place.
    #[must_use]
    pub fn rating_label(&self) -> String {
        let rounded = (self.avg_rating * 10.0).round() / 10.0;
        format!("{rounded}")
    }
}

/// Payload of `GET /videos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<Video>,
}

/// Comment attached to a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub user_name: String,
}

/// Payload of `GET /videos/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoDetail {
    pub video: Video,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Payload of `POST /videos/:id/like`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeResponse {
    #[serde(rename = "likeCount", deserialize_with = "lenient::i64_or_zero")]
    pub like_count: i64,
}

/// Body of `POST /videos/:id/comment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    pub text: String,
}

/// Body of `POST /videos/:id/rate`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateRequest {
    pub stars: StarRating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a rating must be between 1 and 5 stars, got {0}")]
pub struct InvalidStarRating(pub u8);

/// A rating of one to five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every valid rating, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Option label such as `1 star` or `4 stars`.
    #[must_use]
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 star".to_string()
        } else {
            format!("{} stars", self.0)
        }
    }
}

impl Default for StarRating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for StarRating {
    type Error = InvalidStarRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidStarRating(value))
        }
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_item_with_numeric_fields() {
        let json = r#"{
            "id": 7, "title": "Cat #cute", "filepath": "/uploads/cat.mp4",
            "like_count": 12, "avg_rating": 4.25, "comment_count": 3,
            "creator_name": "Ana", "genre": "Pets"
        }"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.id, 7);
        assert_eq!(video.like_count, 12);
        assert_eq!(video.comment_count, Some(3));
        assert_eq!(video.genre.as_deref(), Some("Pets"));
        assert_eq!(video.rating_label(), "4.3");
    }

    #[test]
    fn aggregates_sent_as_strings_or_null() {
        let json = r#"{
            "id": 1, "title": "t", "filepath": "/f.mp4",
            "like_count": "5", "avg_rating": "3.50", "comment_count": null,
            "creator_name": "Bo"
        }"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(video.like_count, 5);
        assert!((video.avg_rating - 3.5).abs() < f64::EPSILON);
        assert_eq!(video.comment_count, None);
        assert_eq!(video.genre, None);

        let unrated = r#"{"id":2,"title":"t","filepath":"/f","like_count":0,"avg_rating":null,"creator_name":"Bo"}"#;
        let video: Video = serde_json::from_str(unrated).unwrap();
        assert_eq!(video.rating_label(), "0");
    }

    #[test]
    fn non_numeric_counter_is_rejected() {
        let json = r#"{"id":1,"title":"t","filepath":"/f","like_count":"lots","creator_name":"Bo"}"#;
        assert!(serde_json::from_str::<Video>(json).is_err());
    }

    #[test]
    fn media_url_joins_base_and_path() {
        let json = r#"{"id":1,"title":"t","filepath":"/uploads/a.mp4","like_count":0,"creator_name":"Bo"}"#;
        let video: Video = serde_json::from_str(json).unwrap();
        assert_eq!(
            video.media_url("http://localhost:5000/"),
            "http://localhost:5000/uploads/a.mp4"
        );
    }

    #[test]
    fn detail_payload() {
        let json = r#"{
            "video": {"id":7,"title":"t","filepath":"/f","like_count":1,"avg_rating":5,"creator_name":"Ana"},
            "comments": [{"id":1,"text":"nice","user_name":"Bo"}]
        }"#;
        let detail: VideoDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.video.id, 7);
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].user_name, "Bo");
    }

    #[test]
    fn like_response_uses_camel_case() {
        let like: LikeResponse = serde_json::from_str(r#"{"likeCount": 42}"#).unwrap();
        assert_eq!(like.like_count, 42);
    }

    #[test]
    fn star_rating_bounds() {
        assert!(StarRating::try_from(0).is_err());
        assert!(StarRating::try_from(6).is_err());
        assert_eq!(StarRating::try_from(3).unwrap().value(), 3);
        assert_eq!(StarRating::default().value(), 5);
        assert_eq!(StarRating::all().count(), 5);
    }

    #[test]
    fn star_rating_labels() {
        let labels: Vec<String> = StarRating::all().map(StarRating::label).collect();
        assert_eq!(labels[0], "1 star");
        assert_eq!(labels[4], "5 stars");
    }

    #[test]
    fn rate_request_wire_format() {
        let body = RateRequest {
            stars: StarRating::try_from(4).unwrap(),
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"stars":4}"#);
        assert!(serde_json::from_str::<RateRequest>(r#"{"stars":9}"#).is_err());
    }
}
