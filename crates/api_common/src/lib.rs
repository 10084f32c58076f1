pub mod comment;
pub mod community;
pub mod context;
pub mod notification;
pub mod notify;
pub mod person;
pub mod post;
pub mod relation;
pub mod site;
pub mod utils;

pub extern crate devshare_db_schema;
pub extern crate devshare_db_views;
pub extern crate devshare_utils;
