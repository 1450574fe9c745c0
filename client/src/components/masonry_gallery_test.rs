use super::*;

#[test]
fn no_hover_leaves_every_tile_at_rest() {
    assert_eq!(tile_emphasis("a", None), TileEmphasis::Rest);
}

#[test]
fn hovered_tile_focuses_and_others_dim() {
    assert_eq!(tile_emphasis("a", Some("a")), TileEmphasis::Focused);
    assert_eq!(tile_emphasis("b", Some("a")), TileEmphasis::Dimmed);
}

#[test]
fn emphasis_classes_share_the_base_class() {
    for emphasis in [TileEmphasis::Rest, TileEmphasis::Focused, TileEmphasis::Dimmed] {
        assert!(emphasis.css_class().starts_with("masonry__tile"));
    }
}
