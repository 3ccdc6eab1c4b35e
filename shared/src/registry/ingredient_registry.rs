use std::collections::HashMap;

use log::error;

use crate::{
    config::IngredientConfig,
    registry::{error::RegistryError, ingredient_entry::IngredientEntry, IngredientKey},
};

/// The fixed set of ingredients the guide knows about, indexed both by the
/// payload of their physical marker and by their display name.
pub struct IngredientRegistry<E> {
    entries: Vec<IngredientEntry<E>>,
    payload_to_key: HashMap<String, IngredientKey>,
    name_to_key: HashMap<String, IngredientKey>,
}

impl<E: Copy> IngredientRegistry<E> {
    /// Builds the registry, rejecting empty or duplicate keys.
    ///
    /// Entries without a highlight visual are accepted but reported once
    /// here; they stay inert for the rest of the session.
    pub fn try_new(configs: Vec<IngredientConfig<E>>) -> Result<Self, RegistryError> {
        let mut entries = Vec::with_capacity(configs.len());
        let mut payload_to_key: HashMap<String, IngredientKey> = HashMap::new();
        let mut name_to_key: HashMap<String, IngredientKey> = HashMap::new();

        for config in configs {
            if config.display_name.is_empty() {
                return Err(RegistryError::EmptyDisplayName {
                    marker_payload: config.marker_payload,
                });
            }
            if config.marker_payload.is_empty() {
                return Err(RegistryError::EmptyMarkerPayload {
                    display_name: config.display_name,
                });
            }
            if name_to_key.contains_key(&config.display_name) {
                return Err(RegistryError::DuplicateDisplayName {
                    display_name: config.display_name,
                });
            }
            if let Some(existing) = payload_to_key.get(&config.marker_payload) {
                let first: &IngredientEntry<E> = &entries[existing.index()];
                return Err(RegistryError::DuplicateMarkerPayload {
                    marker_payload: config.marker_payload,
                    first: first.display_name().to_string(),
                    second: config.display_name,
                });
            }

            if config.highlight_visual.is_none() {
                error!(
                    "Ingredient {:?} has no highlight visual assigned, it will never be highlighted",
                    config.display_name
                );
            }

            let key = IngredientKey::new(entries.len());
            payload_to_key.insert(config.marker_payload.clone(), key);
            name_to_key.insert(config.display_name.clone(), key);
            entries.push(IngredientEntry::from_config(config));
        }

        Ok(Self {
            entries,
            payload_to_key,
            name_to_key,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key_for_payload(&self, marker_payload: &str) -> Option<IngredientKey> {
        self.payload_to_key.get(marker_payload).copied()
    }

    pub fn key_for_name(&self, display_name: &str) -> Option<IngredientKey> {
        self.name_to_key.get(display_name).copied()
    }

    pub fn entry(&self, key: &IngredientKey) -> Option<&IngredientEntry<E>> {
        self.entries.get(key.index())
    }

    pub(crate) fn entry_mut(&mut self, key: &IngredientKey) -> Option<&mut IngredientEntry<E>> {
        self.entries.get_mut(key.index())
    }

    pub fn entry_by_name(&self, display_name: &str) -> Option<&IngredientEntry<E>> {
        let key = self.key_for_name(display_name)?;
        self.entry(&key)
    }

    pub fn entry_by_payload(&self, marker_payload: &str) -> Option<&IngredientEntry<E>> {
        let key = self.key_for_payload(marker_payload)?;
        self.entry(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IngredientKey, &IngredientEntry<E>)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (IngredientKey::new(index), entry))
    }
}
