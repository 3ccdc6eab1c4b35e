pub mod error;
pub mod recipe_cursor;
pub mod recipe_loader;

/// One instruction of a recipe
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecipeStep {
    pub instruction: String,
    /// Display name of the ingredient to highlight during this step
    pub ingredient: Option<String>,
    /// Opaque URL handed to the video player, if the step has a video
    pub video_url: Option<String>,
}

impl RecipeStep {
    pub fn new(instruction: &str) -> Self {
        Self {
            instruction: instruction.to_string(),
            ingredient: None,
            video_url: None,
        }
    }

    pub fn with_ingredient(mut self, ingredient: &str) -> Self {
        self.ingredient = Some(ingredient.to_string()).filter(|name| !name.is_empty());
        self
    }

    pub fn with_video(mut self, video_url: &str) -> Self {
        self.video_url = Some(video_url.to_string()).filter(|url| !url.is_empty());
        self
    }

    /// Whether the "watch video" action should be offered for this step
    pub fn has_video(&self) -> bool {
        self.video_url.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipe {
    pub id: String,
    pub steps: Vec<RecipeStep>,
}

impl Recipe {
    pub fn new(id: &str, steps: Vec<RecipeStep>) -> Self {
        Self {
            id: id.to_string(),
            steps,
        }
    }
}
