pub mod error;
pub mod ingredient_entry;
pub mod ingredient_registry;

/// Stable index of an entry within its IngredientRegistry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientKey(usize);

impl IngredientKey {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}
