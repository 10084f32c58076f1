pub mod follow;
pub mod login;
pub mod notifications;
pub mod save_profile;
