pub mod save;
pub mod vote;
