pub mod controller;
pub mod state;
pub mod view;

pub use controller::AppController;
pub use state::{AppSnapshot, ResultsPane};
