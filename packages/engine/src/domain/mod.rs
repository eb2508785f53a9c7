pub mod blueprint;
pub mod models;
