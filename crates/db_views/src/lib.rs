pub mod comment_view;
pub mod community_view;
pub mod local_user_view;
pub mod notification_view;
pub mod person_view;
pub mod post_view;
pub mod search;
pub mod structs;
#[cfg(test)]
mod test_data;
