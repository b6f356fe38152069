pub(crate) mod alert;
pub(crate) mod avatar;
pub(crate) mod comment_list;
pub(crate) mod loading;
pub(crate) mod nav_links;
pub(crate) mod tag_list;
pub(crate) mod video_card;


pub use alert::alert;
pub use comment_list::CommentList;
pub use loading::Loading;
pub use video_card::VideoCard;
