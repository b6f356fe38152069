//! Feed bookkeeping that does not need a browser.

use std::cell::Cell;
use std::rc::Rc;

use shared::models::{Video, VideoDetail};
use yew::Reducible;

/// Hands out tickets for list fetches so only the newest one may apply its
/// result. Clones share the same counter.
#[derive(Clone, Debug, Default)]
pub struct LatestRequest {
    latest: Rc<Cell<u64>>,
}

impl LatestRequest {
    /// Start a new request, superseding every earlier ticket.
    pub fn issue(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

/// Copy of `videos` with the like count of `video_id` replaced.
pub fn patch_like_count(videos: &[Video], video_id: i64, like_count: i64) -> Vec<Video> {
    videos
        .iter()
        .map(|video| {
            if video.id == video_id {
                Video {
                    like_count,
                    ..video.clone()
                }
            } else {
                video.clone()
            }
        })
        .collect()
}

/// Videos currently shown in the feed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedList {
    pub videos: Vec<Video>,
}

#[derive(Debug)]
pub enum FeedAction {
    /// A fresh search result replaces the whole list.
    Replace(Vec<Video>),
    /// A like response updates one counter in whatever list is current.
    PatchLike { id: i64, count: i64 },
}

impl Reducible for FeedList {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FeedAction::Replace(videos) => Rc::new(Self { videos }),
            FeedAction::PatchLike { id, count } => {
                if !self.videos.iter().any(|video| video.id == id) {
                    return self;
                }
                Rc::new(Self {
                    videos: patch_like_count(&self.videos, id, count),
                })
            }
        }
    }
}

/// The video page's loaded detail, tied to the id being shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailSlot {
    pub id: Option<i64>,
    pub detail: Option<VideoDetail>,
}

#[derive(Debug)]
pub enum DetailAction {
    /// Switch to another video; the previous detail is dropped at once.
    Open(i64),
    /// A detail response arrived. Ignored unless it matches the open id.
    Loaded(VideoDetail),
}

impl Reducible for DetailSlot {
    type Action = DetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DetailAction::Open(id) if self.id == Some(id) => self,
            DetailAction::Open(id) => Rc::new(Self {
                id: Some(id),
                detail: None,
            }),
            DetailAction::Loaded(detail) if self.id == Some(detail.video.id) => Rc::new(Self {
                id: self.id,
                detail: Some(detail),
            }),
            DetailAction::Loaded(detail) => {
                log::debug!("dropping detail for video {}", detail.video.id);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::video;

    fn detail(id: i64) -> VideoDetail {
        VideoDetail {
            video: video(id, "clip"),
            comments: Vec::new(),
        }
    }

    #[test]
    fn newest_ticket_wins() {
        let latest = LatestRequest::default();
        let first = latest.issue();
        let second = latest.issue();

        assert!(!latest.is_current(first));
        assert!(latest.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let latest = LatestRequest::default();
        let handle = latest.clone();
        let ticket = latest.issue();
        handle.issue();

        assert!(!latest.is_current(ticket));
    }

    #[test]
    fn like_patch_touches_only_the_target() {
        let videos = vec![video(1, "a"), video(2, "b"), video(3, "c")];

        let patched = patch_like_count(&videos, 2, 42);

        assert_eq!(patched[1].like_count, 42);
        assert_eq!(patched[0], videos[0]);
        assert_eq!(patched[2], videos[2]);
        assert_eq!(patched[1].title, "b");
    }

    #[test]
    fn like_patch_for_unknown_id_is_a_no_op() {
        let videos = vec![video(1, "a")];
        assert_eq!(patch_like_count(&videos, 9, 5), videos);
    }

    #[test]
    fn like_lands_on_the_list_that_replaced_the_one_it_was_sent_from() {
        let shown = Rc::new(FeedList {
            videos: vec![video(1, "old"), video(2, "b")],
        });
        let searched = shown.reduce(FeedAction::Replace(vec![video(2, "b"), video(3, "new")]));

        let liked = searched.reduce(FeedAction::PatchLike { id: 2, count: 8 });

        let ids: Vec<i64> = liked.videos.iter().map(|video| video.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(liked.videos[0].like_count, 8);
    }

    #[test]
    fn like_for_a_video_no_longer_listed_keeps_the_list() {
        let list = Rc::new(FeedList {
            videos: vec![video(3, "new")],
        });

        let after = Rc::clone(&list).reduce(FeedAction::PatchLike { id: 1, count: 4 });

        assert!(Rc::ptr_eq(&list, &after));
    }

    #[test]
    fn opening_another_video_clears_the_previous_detail() {
        let slot = Rc::new(DetailSlot::default())
            .reduce(DetailAction::Open(1))
            .reduce(DetailAction::Loaded(detail(1)));
        assert_eq!(slot.detail, Some(detail(1)));

        let slot = slot.reduce(DetailAction::Open(2));

        assert_eq!(slot.id, Some(2));
        assert_eq!(slot.detail, None);
    }

    #[test]
    fn late_detail_for_a_closed_video_is_dropped() {
        let slot = Rc::new(DetailSlot::default())
            .reduce(DetailAction::Open(1))
            .reduce(DetailAction::Open(2))
            .reduce(DetailAction::Loaded(detail(1)));

        assert_eq!(slot.detail, None);

        let slot = slot.reduce(DetailAction::Loaded(detail(2)));
        assert_eq!(slot.detail, Some(detail(2)));
    }

    #[test]
    fn reopening_the_same_video_keeps_its_detail() {
        let slot = Rc::new(DetailSlot::default())
            .reduce(DetailAction::Open(4))
            .reduce(DetailAction::Loaded(detail(4)))
            .reduce(DetailAction::Open(4));

        assert_eq!(slot.detail, Some(detail(4)));
    }
}
