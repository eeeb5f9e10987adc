use super::*;
use crate::layout::geometry::Anchor;

#[test]
fn explicit_values_win_over_base() {
    let caller = ToastOptions::new().bg("#000000").width(300.0);
    let base = ToastOptions::new().bg("#FFFFFF").height(90.0);
    let merged = caller.merged_over(base);

    assert_eq!(merged.bg, Some(ColorSpec::from("#000000")));
    assert_eq!(merged.width, Some(300.0));
    assert_eq!(merged.height, Some(90.0));
    assert_eq!(merged.font_size, None);
}

#[test]
fn preset_fills_only_unset_fields() {
    let opts = ToastOptions::new()
        .preset(Preset::Success)
        .sound("alert2")
        .with_preset_applied();

    assert_eq!(opts.sound, Some(SoundSpec::from("alert2")));
    assert_eq!(opts.icon.as_deref(), Some("checkmark.circle.fill"));
    assert_eq!(opts.bg, Some(ColorSpec::from((0.2, 0.8, 0.3))));
}

#[test]
fn json_accepts_loose_shapes() {
    let opts = ToastOptions::from_json_str(
        r##"{
            "preset": "warning",
            "bg": "#3333FF88",
            "text_color": [1.0, 1.0, 1.0],
            "position": [1200, 800],
            "window_level": "status",
            "display_duration": 3.5,
            "blocking": false
        }"##,
    )
    .unwrap();

    assert_eq!(opts.preset, Some(Preset::Warning));
    assert_eq!(opts.bg, Some(ColorSpec::from("#3333FF88")));
    assert_eq!(opts.text_color, Some(ColorSpec::from([1.0, 1.0, 1.0])));
    assert_eq!(opts.position, Some(PositionSpec::from((1200.0, 800.0))));
    assert_eq!(opts.window_level, Some(WindowLevelSpec::from("status")));
    assert_eq!(opts.blocking, Some(false));

    let opts = ToastOptions::from_json_str(r#"{"position": "top-left"}"#).unwrap();
    assert_eq!(opts.position, Some(PositionSpec::from(Anchor::TopLeft)));
}

#[test]
fn json_rejects_unknown_fields() {
    let err = ToastOptions::from_json_str(r##"{"colour": "#000000"}"##).unwrap_err();
    assert!(matches!(err, ToastError::Serde(_)));
}
