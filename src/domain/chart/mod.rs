//! Chart aggregate: scales, layout, ticks and tooltip state.

pub mod entities;
pub mod scales;
pub mod services;
pub mod ticks;
pub mod tooltip;
pub mod value_objects;

pub use entities::*;
pub use scales::*;
pub use services::*;
pub use tooltip::*;
pub use value_objects::*;
