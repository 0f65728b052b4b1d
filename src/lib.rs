pub mod app;
pub mod catalog;
pub mod data;
pub mod evaluator;
pub mod icons;
pub mod model;
pub mod navigation;
pub mod progress;
pub mod session;
pub mod storage;
pub mod ui;
pub mod view_models;

#[cfg(test)]
mod fixtures;

pub use app::KodeSiapApp;
pub use catalog::Catalog;
pub use session::Session;
