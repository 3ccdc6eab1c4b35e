use crate::recipe::{Recipe, RecipeStep};

/// Emitted whenever the active step changes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepChanged {
    pub index: usize,
    pub ingredient: Option<String>,
}

/// Position within a loaded recipe
pub struct RecipeCursor {
    recipe: Option<Recipe>,
    index: usize,
}

impl RecipeCursor {
    pub fn new() -> Self {
        Self {
            recipe: None,
            index: 0,
        }
    }

    /// Replaces the current recipe and moves to its first step
    pub fn load(&mut self, recipe: Recipe) -> Option<StepChanged> {
        self.recipe = Some(recipe);
        self.index = 0;
        self.step_changed()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn len(&self) -> usize {
        self.recipe.as_ref().map_or(0, |recipe| recipe.steps.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&RecipeStep> {
        self.recipe.as_ref()?.steps.get(self.index)
    }

    pub fn next(&mut self) -> Option<StepChanged> {
        if self.index + 1 >= self.len() {
            return None;
        }
        self.index += 1;
        self.step_changed()
    }

    pub fn previous(&mut self) -> Option<StepChanged> {
        if self.is_empty() || self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.step_changed()
    }

    /// "current / total", one-based
    pub fn counter_label(&self) -> String {
        if self.is_empty() {
            return "-- / --".to_string();
        }
        format!("{} / {}", self.index + 1, self.len())
    }

    fn step_changed(&self) -> Option<StepChanged> {
        let step = self.current()?;
        Some(StepChanged {
            index: self.index,
            ingredient: step.ingredient.clone(),
        })
    }
}

impl Default for RecipeCursor {
    fn default() -> Self {
        Self::new()
    }
}
