use std::{sync::Mutex, time::Duration};

use sabor_shared::{Recipe, RecipeError, RecipeSource};

/// Serves a fixed recipe, optionally after a delay
pub struct StaticRecipeSource {
    recipe: Recipe,
    delay: Duration,
    fetched: Mutex<Vec<String>>,
}

impl StaticRecipeSource {
    pub fn new(recipe: Recipe) -> Self {
        Self {
            recipe,
            delay: Duration::ZERO,
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().map(|ids| ids.clone()).unwrap_or_default()
    }
}

impl RecipeSource for StaticRecipeSource {
    fn fetch(&self, recipe_id: &str) -> Result<Recipe, RecipeError> {
        if let Ok(mut ids) = self.fetched.lock() {
            ids.push(recipe_id.to_string());
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        if recipe_id != self.recipe.id {
            return Err(RecipeError::NotFound {
                recipe_id: recipe_id.to_string(),
            });
        }
        Ok(self.recipe.clone())
    }
}

/// Always fails with the given reason
pub struct FailingRecipeSource {
    reason: String,
}

impl FailingRecipeSource {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
        }
    }
}

impl RecipeSource for FailingRecipeSource {
    fn fetch(&self, recipe_id: &str) -> Result<Recipe, RecipeError> {
        Err(RecipeError::Fetch {
            recipe_id: recipe_id.to_string(),
            reason: self.reason.clone(),
        })
    }
}
