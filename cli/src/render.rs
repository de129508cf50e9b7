//! Terminal rendering of the recipe form.

use recipe_ai_core::{
    IngredientList, Notice, Notifier, RecipeForm, RecipeQuery, SubmitOutcome, ViewState,
};
use std::io::Write;

/// Prints notices to stderr.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice);
    }
}

/// Submit `raw` through a fresh form, writing a loading line to `status`
/// before the query goes out. Returns the outcome and the final view.
///
/// A provider that never yields turns `loading` on and off within one poll,
/// so the line is written before `submit` rather than from a `loading` watcher.
pub async fn run_form(
    raw: &str,
    query: &dyn RecipeQuery,
    notifier: &dyn Notifier,
    status: &mut dyn Write,
) -> (SubmitOutcome, ViewState) {
    let form = RecipeForm::new();

    // Blank input never reaches the query, so no loading line for it
    if IngredientList::parse(raw).is_ok() {
        if let Err(e) = writeln!(status, "Loading...") {
            tracing::debug!(error = %e, "Failed to write loading line");
        }
    }

    let outcome = form.submit(raw, query, notifier).await;
    (outcome, form.view())
}

/// Whether the process should exit successfully after `outcome`.
pub fn is_success(outcome: SubmitOutcome) -> bool {
    matches!(
        outcome,
        SubmitOutcome::Recipe | SubmitOutcome::NoRecipe | SubmitOutcome::NoResponse
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_ai_core::llm::FakeProvider;
    use recipe_ai_core::LocalRecipeQuery;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct Collect(Mutex<Vec<Notice>>);

    impl Notifier for Collect {
        fn notify(&self, notice: Notice) {
            self.0.lock().unwrap().push(notice);
        }
    }

    #[tokio::test]
    async fn test_run_form_with_local_query() {
        let query = LocalRecipeQuery::new(Arc::new(FakeProvider::with_recipe_responses()));
        let notifier = Collect::default();

        let mut status = Vec::new();

        let (outcome, view) = run_form("eggs, milk", &query, &notifier, &mut status).await;

        assert_eq!(String::from_utf8(status).unwrap(), "Loading...\n");
        assert_eq!(outcome, SubmitOutcome::Recipe);
        assert!(view.result.contains("Frittata"));
        assert!(!view.loading);
        assert!(notifier.0.lock().unwrap().is_empty());
        assert!(is_success(outcome));
    }

    #[tokio::test]
    async fn test_run_form_blank_input() {
        let query = LocalRecipeQuery::new(Arc::new(FakeProvider::with_recipe_responses()));
        let notifier = Collect::default();

        let mut status = Vec::new();

        let (outcome, view) = run_form("  ", &query, &notifier, &mut status).await;

        assert!(status.is_empty());
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(view, ViewState::default());
        assert_eq!(*notifier.0.lock().unwrap(), vec![Notice::EmptyInput]);
        assert!(!is_success(outcome));
    }

    #[tokio::test]
    async fn test_run_form_provider_failure() {
        let query = LocalRecipeQuery::new(Arc::new(FakeProvider::failing("offline")));
        let notifier = Collect::default();

        let mut status = Vec::new();

        let (outcome, view) = run_form("rice", &query, &notifier, &mut status).await;

        assert_eq!(String::from_utf8(status).unwrap(), "Loading...\n");
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(view.result.is_empty());
        assert_eq!(*notifier.0.lock().unwrap(), vec![Notice::RequestFailed]);
    }
}
