use crate::config::IngredientConfig;

/// Whether the physical marker for an ingredient has been located yet.
///
/// Transitions only from `Unregistered` to `Registered`, once per session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorState {
    Unregistered,
    Registered,
}

pub struct IngredientEntry<E> {
    marker_payload: String,
    display_name: String,
    highlight_visual: Option<E>,
    anchor_state: AnchorState,
    anchor: Option<E>,
}

impl<E: Copy> IngredientEntry<E> {
    pub(crate) fn from_config(config: IngredientConfig<E>) -> Self {
        Self {
            marker_payload: config.marker_payload,
            display_name: config.display_name,
            highlight_visual: config.highlight_visual,
            anchor_state: AnchorState::Unregistered,
            anchor: None,
        }
    }

    pub fn marker_payload(&self) -> &str {
        &self.marker_payload
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn highlight_visual(&self) -> Option<E> {
        self.highlight_visual
    }

    pub fn anchor_state(&self) -> AnchorState {
        self.anchor_state
    }

    pub fn is_registered(&self) -> bool {
        self.anchor_state == AnchorState::Registered
    }

    /// The anchor created for this entry, if it has been registered
    pub fn anchor(&self) -> Option<E> {
        self.anchor
    }

    /// Records the anchor this entry's visual now lives under.
    ///
    /// Returns false and leaves the entry untouched if it was already registered.
    pub(crate) fn register(&mut self, anchor: E) -> bool {
        if self.is_registered() {
            return false;
        }
        self.anchor = Some(anchor);
        self.anchor_state = AnchorState::Registered;
        true
    }
}
