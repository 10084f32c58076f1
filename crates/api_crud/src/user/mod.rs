pub mod create;
pub mod follows;
pub mod list;
pub mod read;
