pub mod join;
pub mod mute;
pub mod notify;
