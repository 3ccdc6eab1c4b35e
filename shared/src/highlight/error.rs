use thiserror::Error;

/// Errors that can occur while changing an ingredient's highlight
///
/// None of these are fatal: the command is dropped and the rest of the
/// registry stays usable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HighlightError {
    /// No ingredient is configured under this display name
    #[error("No ingredient named {display_name:?} is configured")]
    UnknownIngredient { display_name: String },

    /// The ingredient exists but was configured without a highlight visual
    #[error("Ingredient {display_name:?} has no highlight visual assigned")]
    MissingVisual { display_name: String },

    /// The ingredient's marker has not been scanned yet, so there is nowhere
    /// to show the highlight
    #[error("Ingredient {display_name:?} has not been located yet - scan its marker first")]
    NotRegistered { display_name: String },
}
