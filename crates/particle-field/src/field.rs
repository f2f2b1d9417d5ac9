//! Pointer interaction field.

use glam::Vec2;

/// The pointer's last known position and its influence radius.
///
/// `pointer` is `None` both before the first pointer event and after the
/// pointer leaves the surface; either way every particle sees pure
/// relaxation. The host mutates this between ticks only, so a tick always
/// observes one consistent value.
#[derive(Clone, Copy, Debug)]
pub struct PointerField {
    pointer: Option<Vec2>,
    pub radius: f32,
}

impl PointerField {
    pub fn new(radius: f32) -> Self {
        Self {
            pointer: None,
            radius,
        }
    }

    /// Record a pointer-move notification in surface coordinates.
    pub fn set(&mut self, position: Vec2) {
        self.pointer = Some(position);
    }

    /// Forget the pointer (it left the surface).
    pub fn clear(&mut self) {
        self.pointer = None;
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }
}
