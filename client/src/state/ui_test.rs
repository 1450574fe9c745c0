use super::*;

#[test]
fn gallery_starts_closed() {
    assert!(!UiState::default().gallery_open);
}

#[test]
fn open_and_close_toggle_gallery() {
    let mut ui = UiState::default();
    ui.open_gallery();
    assert!(ui.gallery_open);
    ui.close_gallery();
    assert!(!ui.gallery_open);
    ui.open_gallery();
    assert!(ui.gallery_open);
}
