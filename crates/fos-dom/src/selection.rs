//! Range and Selection
//!
//! [`Selection`] is the document-level text selection made of [`Range`]s.
//! [`InputSelection`] is the separate selection inside a text control.

use crate::NodeId;

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionDirection {
    #[default]
    None,
    Forward,
    Backward,
}

/// Range boundary point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryPoint {
    /// The container node
    pub node: NodeId,
    /// Character offset for text, child index for elements
    pub offset: u32,
}

impl BoundaryPoint {
    pub fn new(node: NodeId, offset: u32) -> Self {
        Self { node, offset }
    }
}

/// A contiguous part of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: BoundaryPoint,
    end: BoundaryPoint,
}

impl Range {
    /// Collapsed range at a position
    pub fn new(container: NodeId, offset: u32) -> Self {
        let point = BoundaryPoint::new(container, offset);
        Self { start: point, end: point }
    }

    /// Range between two points
    pub fn between(
        start_container: NodeId,
        start_offset: u32,
        end_container: NodeId,
        end_offset: u32,
    ) -> Self {
        Self {
            start: BoundaryPoint::new(start_container, start_offset),
            end: BoundaryPoint::new(end_container, end_offset),
        }
    }

    pub fn start(&self) -> BoundaryPoint {
        self.start
    }

    pub fn end(&self) -> BoundaryPoint {
        self.end
    }

    pub fn start_container(&self) -> NodeId {
        self.start.node
    }

    pub fn end_container(&self) -> NodeId {
        self.end.node
    }

    /// Check if the range is collapsed
    pub fn collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Collapse to the start point
    pub fn collapse_to_start(&mut self) {
        self.end = self.start;
    }
}

/// Document selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<Range>,
    direction: SelectionDirection,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get number of ranges in selection
    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Get range at index
    pub fn get_range_at(&self, index: usize) -> Option<&Range> {
        self.ranges.get(index)
    }

    /// All ranges, in insertion order
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Add a range to selection
    pub fn add_range(&mut self, range: Range) {
        if self.ranges.is_empty() {
            self.direction = SelectionDirection::Forward;
        }
        self.ranges.push(range);
    }

    /// Remove all ranges
    pub fn remove_all_ranges(&mut self) {
        self.ranges.clear();
        self.direction = SelectionDirection::None;
    }

    /// Collapse selection to a point
    pub fn collapse(&mut self, node: NodeId, offset: u32) {
        self.remove_all_ranges();
        self.add_range(Range::new(node, offset));
    }

    /// Check if selection is collapsed (or empty)
    pub fn is_collapsed(&self) -> bool {
        self.ranges.iter().all(Range::collapsed)
    }

    pub fn direction(&self) -> SelectionDirection {
        self.direction
    }
}

/// Selection inside a text control, in characters of its value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSelection {
    pub start: usize,
    pub end: usize,
    pub direction: SelectionDirection,
}

impl InputSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_range(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        self.start = start;
        self.end = end;
        self.direction = direction;
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn length(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Select all text
    pub fn select_all(&mut self, text_length: usize) {
        self.set_range(0, text_length, SelectionDirection::Forward);
    }
}
