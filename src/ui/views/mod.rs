pub mod config;
pub mod loading;
pub mod quiz;
pub mod results;
