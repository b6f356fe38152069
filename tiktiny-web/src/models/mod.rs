pub mod app_state;
pub mod feed;
pub mod playback;

pub use app_state::AppState;
pub use feed::{DetailAction, DetailSlot, FeedAction, FeedList, LatestRequest};
pub use playback::Playback;
