use thiserror::Error;

/// Errors that can occur while loading a recipe document
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeError {
    /// The recipe document does not exist
    #[error("Recipe {recipe_id:?} was not found")]
    NotFound { recipe_id: String },

    /// The recipe document exists but carries no steps
    #[error("Recipe {recipe_id:?} has no steps")]
    NoSteps { recipe_id: String },

    /// The fetch itself failed
    #[error("Failed to fetch recipe {recipe_id:?}: {reason}")]
    Fetch { recipe_id: String, reason: String },

    /// The worker delivering the fetch result went away before answering
    #[error("Recipe loader for {recipe_id:?} disconnected before completing")]
    Disconnected { recipe_id: String },
}
