//! GDP aggregate: records, dataset and the data source abstraction.

pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
