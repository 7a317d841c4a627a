// Source schema: problem definitions as opti describes them

mod config;
pub mod models;
pub mod value_objects;

pub use models::*;
pub use value_objects::*;
