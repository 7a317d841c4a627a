// Domain module: the BoFire domain a converted problem ends up as

pub mod constraints;
pub mod models;
pub mod validation;
pub mod value_objects;

pub use constraints::*;
pub use models::*;
pub use validation::*;
pub use value_objects::*;
