pub mod util;

pub mod app;
pub mod model;
