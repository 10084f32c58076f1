pub mod list;
pub mod mark_all_read;
pub mod mark_read;
pub mod unread_count;
