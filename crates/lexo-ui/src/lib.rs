pub mod boundary;
pub mod bridge;
pub mod input;
pub mod render;
pub mod state;

pub use boundary::ErrorBoundary;
pub use bridge::UiBridge;
pub use input::{Command, InputError, SearchRequest, parse_line};
pub use state::ViewState;
