#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_derive_newtype;

pub mod impls;
pub mod newtypes;
pub mod relation;
#[rustfmt::skip]
pub mod schema;
pub mod source;
pub mod traits;
pub mod utils;
