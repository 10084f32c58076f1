pub mod create;
pub mod delete;
pub mod list;
pub mod members;
pub mod read;
pub mod update;
