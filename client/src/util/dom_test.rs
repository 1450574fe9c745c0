use super::*;

#[test]
fn slot_style_formats_percent_and_pixels() {
    assert_eq!(slot_style(5.0, 2.5, 480.0), "top: 5%; left: 2.5%; height: 480px;");
}

#[test]
fn translate_px_rounds_to_two_places() {
    assert_eq!(translate_px(Point::new(-12.346, 7.0)), "translate(-12.35px, 7.00px)");
}
