pub mod markdown;
pub mod tags;
pub mod validation;
