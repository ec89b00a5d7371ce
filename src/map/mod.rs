pub mod models;
pub mod surface;
pub mod sync;
