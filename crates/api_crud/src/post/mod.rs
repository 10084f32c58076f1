pub mod create;
pub mod delete;
pub mod list;
pub mod read;
pub mod saved;
pub mod tags;
pub mod update;
