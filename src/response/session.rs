//! Per-question response session state machine

use crate::scale::ScaleLayout;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Instruction for the presenter describing a button visual change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderInstruction {
    /// Fill button `index` to show it as the current selection
    Fill { index: usize },
    /// Restore button `index` to its empty (unselected) look
    Restore { index: usize },
}

/// Observable state of a response session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No button has been selected yet; submit clicks are ignored
    AwaitingFirstSelection,
    /// A button is selected; the answer can still be changed
    HasSelection,
    /// The answer was committed; terminal
    Submitted,
}

/// One participant's in-progress answer to one presented question
///
/// Clicks that hit nothing are silently absorbed: only valid input regions
/// act. The same machine serves rating trials and questionnaire items; only
/// the layout differs.
#[derive(Debug, Clone)]
pub struct ResponseSession {
    layout: Arc<ScaleLayout>,
    selected: Option<usize>,
    submitted: bool,
}

impl ResponseSession {
    /// Open a session over a shared, read-only layout
    pub fn new(layout: Arc<ScaleLayout>) -> Self {
        Self {
            layout,
            selected: None,
            submitted: false,
        }
    }

    /// The layout this session hit-tests against
    pub fn layout(&self) -> &ScaleLayout {
        &self.layout
    }

    /// Current state of the machine
    pub fn state(&self) -> SessionState {
        if self.submitted {
            SessionState::Submitted
        } else if self.selected.is_some() {
            SessionState::HasSelection
        } else {
            SessionState::AwaitingFirstSelection
        }
    }

    /// Currently selected button index (1-based), if any
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the answer has been committed
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// The final ordinal score, available once submitted
    ///
    /// Always the 1-based rank of the selected button among the laid-out
    /// points, never recomputed from pixel offsets.
    pub fn score(&self) -> Option<u8> {
        if self.submitted {
            self.selected.map(|i| i as u8)
        } else {
            None
        }
    }

    /// Process one pointer press, returning the render instructions it caused
    ///
    /// Transitions:
    /// - awaiting: a button hit selects it; submit-area clicks are ignored
    /// - selected: a different button reselects (restore old, fill new), the
    ///   same button is a no-op, and a submit hit commits the answer
    /// - submitted: terminal, every click is ignored
    pub fn handle_click(&mut self, point: (i32, i32)) -> Vec<RenderInstruction> {
        if self.submitted {
            return Vec::new();
        }

        match self.selected {
            None => {
                if let Some(index) = self.layout.hit_button(point) {
                    self.selected = Some(index);
                    return vec![RenderInstruction::Fill { index }];
                }
            }
            Some(current) => {
                if let Some(index) = self.layout.hit_button(point) {
                    if index != current {
                        self.selected = Some(index);
                        return vec![
                            RenderInstruction::Restore { index: current },
                            RenderInstruction::Fill { index },
                        ];
                    }
                } else if self.layout.hits_submit(point) {
                    self.submitted = true;
                }
            }
        }
        Vec::new()
    }
}
