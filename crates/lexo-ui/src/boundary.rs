use std::panic::{AssertUnwindSafe, catch_unwind};

use lexo_config::ui::UiConfig;

use crate::render::{RenderError, render};
use crate::state::ViewState;

pub const FALLBACK: &str = "\
Something went wrong!
Sorry for the inconvenience. The view has been reloaded, please try again.
";

/// Keeps a broken render from taking the rest of the interface down.
/// On failure the view state is reloaded and a generic screen is shown instead.
#[derive(Debug, Default)]
pub struct ErrorBoundary {
    failures: u32,
}

impl ErrorBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, state: &mut ViewState, config: &UiConfig) -> String {
        self.guard(state, |state| render(state, config))
    }

    pub fn guard<F>(&mut self, state: &mut ViewState, draw: F) -> String
    where
        F: FnOnce(&ViewState) -> Result<String, RenderError>,
    {
        let outcome = catch_unwind(AssertUnwindSafe(|| draw(state)));

        match outcome {
            Ok(Ok(view)) => view,
            Ok(Err(e)) => self.recover(state, e.to_string()),
            Err(payload) => {
                let cause = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "panic while rendering".to_string());
                self.recover(state, cause)
            }
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    fn recover(&mut self, state: &mut ViewState, cause: String) -> String {
        tracing::error!("View failed to render: {cause}");
        self.failures += 1;
        state.reload();
        FALLBACK.to_string()
    }
}
