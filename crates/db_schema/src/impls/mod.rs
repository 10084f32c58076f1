pub mod comment;
pub mod community;
pub mod local_user;
pub mod notification;
pub mod person;
pub mod post;
pub mod tag;
