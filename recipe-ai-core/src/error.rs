use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngredientError {
    #[error("No ingredients given")]
    Empty,
}
