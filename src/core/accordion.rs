//! Exclusive-open FAQ accordion
//!
//! Storing the open item as a single index makes "at most one expanded" hold
//! by construction.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqItemState {
    Collapsed,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Accordion {
    len: usize,
    expanded: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Collapse every other item and flip `index`.
    ///
    /// Returns false when `index` is out of range; the accordion is unchanged.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    pub fn state(&self, index: usize) -> FaqItemState {
        if self.expanded == Some(index) {
            FaqItemState::Expanded
        } else {
            FaqItemState::Collapsed
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.state(index) == FaqItemState::Expanded
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

}
