pub mod app;
pub mod config;
pub mod data;
pub mod model;
pub mod scoring;
pub mod source;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
