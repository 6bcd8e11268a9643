use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Pixel offset between a hovered marker and its tooltip anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipOffset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for TooltipOffset {
    fn default() -> Self {
        Self { dx: -60.0, dy: 80.0 }
    }
}

/// Detail overlay content: a title plus insertion-ordered field rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TooltipContent {
    pub title: String,
    pub rows: IndexMap<String, String>,
}

impl TooltipContent {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_row(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.rows.insert(label.into(), value.into());
        self
    }
}

/// Public tooltip state exposed to host applications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub content: Option<TooltipContent>,
}

/// Pointer-driven hover state over the marker field.
///
/// Event-driven and single-threaded: hosts forward pointer-enter/leave
/// subscriptions here, the engine resolves which marker (if any) is hit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HoverState {
    cursor_x: f64,
    cursor_y: f64,
    pointer_inside: bool,
    hovered_record: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn pointer_inside(self) -> bool {
        self.pointer_inside
    }

    /// Dataset index of the currently hovered record, if any.
    #[must_use]
    pub fn hovered_record(self) -> Option<usize> {
        self.hovered_record
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.pointer_inside = true;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.hovered_record = None;
    }

    pub fn set_hovered_record(&mut self, index: Option<usize>) {
        self.hovered_record = index;
    }
}
