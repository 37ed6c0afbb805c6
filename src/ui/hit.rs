use ratatui::layout::{Position, Rect};

use crate::app::{Element, UiEvent};
use crate::progress::Pointer;

/// Screen regions recorded while drawing, so mouse clicks can be resolved
/// to the element under the pointer.
///
/// Later registrations sit on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Element)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rect: Rect, element: Element) {
        if rect.area() > 0 {
            self.regions.push((rect, element));
        }
    }

    /// Where `element` was drawn last, if anywhere.
    #[cfg(test)]
    pub fn rect_of(&self, element: Element) -> Option<Rect> {
        self.regions
            .iter()
            .rev()
            .find(|(_, e)| *e == element)
            .map(|(r, _)| *r)
    }

    /// Resolve a click at (`column`, `row`).
    ///
    /// The pointer offset is measured from the left edge of the region. The
    /// width is one less than the cell count, so the leftmost cell maps to 0
    /// and the rightmost to 1.
    pub fn hit(&self, column: u16, row: u16) -> Option<UiEvent> {
        let pos = Position::new(column, row);
        let (rect, element) = self.regions.iter().rev().find(|(r, _)| r.contains(pos))?;
        let offset = f64::from(column - rect.x);
        let width = f64::from(rect.width.saturating_sub(1).max(1));
        Some(UiEvent::click_at(*element, Pointer::new(offset, width)))
    }
}
