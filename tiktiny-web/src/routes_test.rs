//! Tests for the routing system
//!
//! Validates route paths, URL parameter parsing and the upload guard.

use strum::IntoEnumIterator;
use yew_router::Routable;

use crate::routes::{MainRoute, redirect_for};
use crate::test_support::session_for;

#[test]
fn test_route_paths() {
    assert_eq!(MainRoute::Feed.to_path(), "/");
    assert_eq!(MainRoute::Login.to_path(), "/login");
    assert_eq!(MainRoute::Signup.to_path(), "/signup");
    assert_eq!(MainRoute::Upload.to_path(), "/upload");
    assert_eq!(MainRoute::Video { id: 42 }.to_path(), "/v/42");
}

#[test]
fn test_video_route_parses_id() {
    assert_eq!(
        MainRoute::recognize("/v/17"),
        Some(MainRoute::Video { id: 17 })
    );
}

#[test]
fn test_unknown_paths_are_not_found() {
    assert_eq!(MainRoute::recognize("/nope"), Some(MainRoute::NotFound));
    assert_eq!(MainRoute::recognize("/v/abc"), Some(MainRoute::NotFound));
}

#[test]
fn test_upload_redirects_anonymous_to_login() {
    assert_eq!(
        redirect_for(&MainRoute::Upload, &session_for(None)),
        Some(MainRoute::Login)
    );
}

#[test]
fn test_upload_allowed_once_signed_in() {
    assert_eq!(redirect_for(&MainRoute::Upload, &session_for(Some("viewer"))), None);
    assert_eq!(redirect_for(&MainRoute::Upload, &session_for(Some("creator"))), None);
}

#[test]
fn test_other_routes_are_never_redirected() {
    let anonymous = session_for(None);
    for route in MainRoute::iter().filter(|route| *route != MainRoute::Upload) {
        assert_eq!(redirect_for(&route, &anonymous), None, "{route:?}");
    }
}
