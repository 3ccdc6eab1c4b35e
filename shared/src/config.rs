use std::{default::Default, time::Duration};

/// Contains Config properties which will be used by a Guide
#[derive(Clone, Debug)]
pub struct GuideConfig {
    /// How long a highlight visual stays shown after its marker has been
    /// registered, as confirmation to the user that the ingredient was found.
    pub flash_duration: Duration,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            flash_duration: Duration::from_secs(3),
        }
    }
}

/// A single known ingredient, as supplied at initialization time.
#[derive(Clone, Debug)]
pub struct IngredientConfig<E> {
    /// Exact decoded text of the physical marker placed on this ingredient
    pub marker_payload: String,
    /// Name used by recipe steps to refer to this ingredient
    pub display_name: String,
    /// Scene object highlighted when this ingredient is requested. An entry
    /// without one is kept, but can never be registered or shown.
    pub highlight_visual: Option<E>,
}

impl<E> IngredientConfig<E> {
    pub fn new(marker_payload: &str, display_name: &str, highlight_visual: Option<E>) -> Self {
        Self {
            marker_payload: marker_payload.to_string(),
            display_name: display_name.to_string(),
            highlight_visual,
        }
    }
}
