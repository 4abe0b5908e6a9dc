pub mod chart;
pub mod errors;
pub mod gdp;
pub mod logging;
