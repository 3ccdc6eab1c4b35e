use std::sync::Arc;

use log::{info, warn};
use smol::channel::{self, Receiver, TryRecvError};

use crate::recipe::{error::RecipeError, Recipe};

/// Remote store that recipe documents are fetched from.
///
/// `fetch` runs on a worker thread and may block.
pub trait RecipeSource: Send + Sync + 'static {
    fn fetch(&self, recipe_id: &str) -> Result<Recipe, RecipeError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecipeStatus {
    Idle,
    Loading,
    Ready,
    Failed(RecipeError),
}

struct PendingLoad {
    recipe_id: String,
    receiver: Receiver<Result<Recipe, RecipeError>>,
}

/// Fetches recipes off the main loop and hands the result back to it.
///
/// Completion is only observable through `poll`, so the loaded recipe is
/// always applied from the main loop.
pub struct RecipeLoader {
    pending: Option<PendingLoad>,
    status: RecipeStatus,
}

impl RecipeLoader {
    pub fn new() -> Self {
        Self {
            pending: None,
            status: RecipeStatus::Idle,
        }
    }

    pub fn status(&self) -> &RecipeStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts fetching `recipe_id`. Any load still in flight is abandoned and
    /// its result discarded.
    pub fn request(&mut self, source: Arc<dyn RecipeSource>, recipe_id: &str) {
        if let Some(previous) = self.pending.take() {
            info!(
                "recipe load for {:?} superseded by {:?}",
                previous.recipe_id, recipe_id
            );
        }

        let (sender, receiver) = channel::bounded(1);
        let worker_recipe_id = recipe_id.to_string();
        std::thread::spawn(move || {
            let result = source.fetch(&worker_recipe_id).and_then(|recipe| {
                if recipe.steps.is_empty() {
                    Err(RecipeError::NoSteps {
                        recipe_id: worker_recipe_id.clone(),
                    })
                } else {
                    Ok(recipe)
                }
            });
            // the loader may have moved on to another recipe
            let _ = sender.send_blocking(result);
        });

        self.pending = Some(PendingLoad {
            recipe_id: recipe_id.to_string(),
            receiver,
        });
        self.status = RecipeStatus::Loading;
    }

    /// Returns the finished load, if the worker has delivered one since the
    /// last poll. Call once per main loop tick.
    pub fn poll(&mut self) -> Option<Result<Recipe, RecipeError>> {
        let pending = self.pending.as_ref()?;

        let result = match pending.receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(RecipeError::Disconnected {
                recipe_id: pending.recipe_id.clone(),
            }),
        };
        self.pending = None;

        match &result {
            Ok(recipe) => {
                info!("recipe {:?} loaded with {} steps", recipe.id, recipe.steps.len());
                self.status = RecipeStatus::Ready;
            }
            Err(err) => {
                warn!("{}", err);
                self.status = RecipeStatus::Failed(err.clone());
            }
        }

        Some(result)
    }
}

impl Default for RecipeLoader {
    fn default() -> Self {
        Self::new()
    }
}
