//! Pointer interaction state
//!
//! The marker layer turns raw pointer positions into [`PointerEvent`]s;
//! [`HoverState`] is the only thing those events mutate.

use egui::Pos2;

/// Pointer event produced by hit-testing the marker layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the marker with this key
    Enter(u32),
    /// Pointer left the hovered marker
    Leave,
    /// Pointer moved while over a marker, in screen points
    Move(Pos2),
}

/// Which record (if any) the pointer rests on, plus the last pointer position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    /// Key (rank) of the hovered record
    pub hovered: Option<u32>,
    /// Last pointer position seen over a marker, in screen points
    pub pointer: Pos2,
}

impl Default for HoverState {
    fn default() -> Self {
        Self {
            hovered: None,
            pointer: Pos2::ZERO,
        }
    }
}

impl HoverState {
    /// Apply one pointer event
    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(key) => {
                tracing::debug!("Hover enter place {}", key);
                self.hovered = Some(key);
            }
            PointerEvent::Leave => {
                if let Some(key) = self.hovered.take() {
                    tracing::debug!("Hover leave place {}", key);
                }
            }
            PointerEvent::Move(pos) => {
                if self.hovered.is_some() {
                    self.pointer = pos;
                }
            }
        }
    }

    /// Apply a batch of events in order
    pub fn apply_all(&mut self, events: impl IntoIterator<Item = PointerEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }
}
