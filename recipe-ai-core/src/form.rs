//! State of the recipe form.
//!
//! The form owns two pieces of view state, `result` and `loading`, and
//! publishes them through a `watch` channel so a renderer can show a loading
//! indicator while the query is in flight.

use std::fmt;
use tokio::sync::watch;

use crate::error::IngredientError;
use crate::ingredients::IngredientList;
use crate::query::{QueryResponse, RecipeQuery};

/// Shown when the payload arrives without recipe text.
pub const NO_RECIPE_TEXT: &str = "No recipe returned.";

/// Shown when the query returns neither a payload nor errors.
pub const NO_RESPONSE_TEXT: &str = "No response from server.";

/// What the page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub result: String,
    pub loading: bool,
}

/// A blocking message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    RequestFailed,
    Unexpected,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyInput => "Please enter some ingredients first.",
            Notice::RequestFailed => "An error occurred. See console for details.",
            Notice::Unexpected => "Something went wrong.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Surfaces notices to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// How a submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing was sent.
    Rejected,
    /// Recipe text is now in `result`.
    Recipe,
    /// Payload had no text; `result` holds the placeholder.
    NoRecipe,
    /// Backend reported structured errors.
    Failed,
    /// Neither payload nor errors.
    NoResponse,
    /// The query itself failed.
    Crashed,
}

/// Clears `loading` when dropped, whatever path leaves `submit`.
struct LoadingGuard<'a> {
    state: &'a watch::Sender<ViewState>,
}

impl<'a> LoadingGuard<'a> {
    fn start(state: &'a watch::Sender<ViewState>) -> Self {
        state.send_modify(|s| s.loading = true);
        Self { state }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.loading = false);
    }
}

/// The recipe form controller.
#[derive(Debug)]
pub struct RecipeForm {
    state: watch::Sender<ViewState>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeForm {
    pub fn new() -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { state }
    }

    /// Current view state.
    pub fn view(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Watch view state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    fn set_result(&self, result: &str) {
        self.state.send_modify(|s| s.result = result.to_string());
    }

    /// Handle a form submission with the raw `ingredients` field value.
    pub async fn submit(
        &self,
        raw: &str,
        query: &dyn RecipeQuery,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        let ingredients = match IngredientList::parse(raw) {
            Ok(ingredients) => ingredients,
            Err(IngredientError::Empty) => {
                notifier.notify(Notice::EmptyInput);
                return SubmitOutcome::Rejected;
            }
        };

        let _loading = LoadingGuard::start(&self.state);

        match query.ask(&ingredients).await {
            Ok(QueryResponse {
                data: Some(data), ..
            }) => {
                if let Some(error) = &data.error {
                    tracing::warn!(error = %error, "Recipe payload carried an error");
                }
                match data.body.as_deref().filter(|b| !b.is_empty()) {
                    Some(body) => {
                        self.set_result(body);
                        SubmitOutcome::Recipe
                    }
                    None => {
                        self.set_result(NO_RECIPE_TEXT);
                        SubmitOutcome::NoRecipe
                    }
                }
            }
            Ok(QueryResponse {
                errors: Some(errors),
                ..
            }) => {
                for error in &errors {
                    tracing::error!(message = %error.message, "Errors from API");
                }
                notifier.notify(Notice::RequestFailed);
                SubmitOutcome::Failed
            }
            Ok(_) => {
                self.set_result(NO_RESPONSE_TEXT);
                SubmitOutcome::NoResponse
            }
            Err(e) => {
                tracing::error!(error = %e, "Recipe query failed");
                notifier.notify(Notice::Unexpected);
                SubmitOutcome::Crashed
            }
        }
    }
}
