mod feed;
pub mod login;
mod not_found;
mod signup;
pub mod upload;
mod video;


pub use feed::FeedPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
pub use upload::UploadPage;
pub use video::VideoPage;
