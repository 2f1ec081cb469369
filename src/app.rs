pub mod handler;
pub mod state;

pub use handler::run;
pub use state::AppState;
