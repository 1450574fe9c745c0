//! Page-level presentation flags.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// The explore overlay is mounted.
    pub gallery_open: bool,
}

impl UiState {
    pub fn open_gallery(&mut self) {
        self.gallery_open = true;
    }

    pub fn close_gallery(&mut self) {
        self.gallery_open = false;
    }
}
