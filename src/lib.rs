pub mod app_state;
pub mod cli;
pub mod commands;
pub mod driver;
pub mod logging;

pub use app_state::AppState;
pub use cli::{Args, Mode};
