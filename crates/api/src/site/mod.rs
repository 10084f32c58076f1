pub mod home_feed;
pub mod search;
