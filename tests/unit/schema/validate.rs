use super::*;
use crate::layout::geometry::Anchor;
use crate::layout::measure::HeuristicMeasurer;
use crate::style::preset::Preset;

fn prepare(message: &str, options: ToastOptions) -> ToastResult<PreparedToast> {
    resolve(message, &options, &mut HeuristicMeasurer)
}

fn kind_of(message: &str, options: ToastOptions) -> ConfigErrorKind {
    let err = prepare(message, options).unwrap_err();
    err.config_kind()
        .unwrap_or_else(|| panic!("expected configuration error, got {err}"))
}

#[test]
fn defaults_only() {
    let toast = prepare("Hello", ToastOptions::new()).unwrap();
    let c = &toast.config;
    assert_eq!(c.width(), 280.0);
    assert_eq!(c.height(), 80.0);
    assert_eq!(c.position(), Position::Anchor(Anchor::BottomRight));
    assert_eq!(c.window_level(), WindowLevel::Floating);
    assert_eq!(c.bg(), DEFAULT_BG);
    assert_eq!(c.text_color(), DEFAULT_TEXT_COLOR);
    assert_eq!(c.font_size(), 16.0);
    assert_eq!(c.corner_radius(), 16.0);
    assert!(c.click_to_dismiss());
    assert!(!c.auto_size());
    assert_eq!(toast.launch, LaunchMode::Blocking { check: false });
}

#[test]
fn auto_size_with_explicit_dimensions_conflicts() {
    assert_eq!(
        kind_of("Test", ToastOptions::new().auto_size(true).width(300.0)),
        ConfigErrorKind::AutoSizeConflict
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().auto_size(true).height(100.0)),
        ConfigErrorKind::AutoSizeConflict
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().min_width(150.0)),
        ConfigErrorKind::AutoSizeConflict
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().max_width(300.0)),
        ConfigErrorKind::AutoSizeConflict
    );
    assert_eq!(
        kind_of(
            "Test",
            ToastOptions::new()
                .auto_size(true)
                .min_width(400.0)
                .max_width(200.0)
        ),
        ConfigErrorKind::AutoSizeConflict
    );
}

#[test]
fn fades_longer_than_display_fail() {
    let opts = ToastOptions::new()
        .display_duration(1.0)
        .fade_in_duration(0.6)
        .fade_out_duration(0.6);
    assert_eq!(
        kind_of("Test", opts),
        ConfigErrorKind::InvalidDurationCombination
    );

    // Exactly equal is allowed, including decimal sums.
    let opts = ToastOptions::new()
        .display_duration(0.3)
        .fade_in_duration(0.1)
        .fade_out_duration(0.2);
    prepare("Test", opts).unwrap();
}

#[test]
fn durations_are_bounded() {
    assert_eq!(
        kind_of("Test", ToastOptions::new().display_duration(0.05)),
        ConfigErrorKind::OutOfRange
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().display_duration(61.0)),
        ConfigErrorKind::OutOfRange
    );
    assert_eq!(
        kind_of(
            "Test",
            ToastOptions::new()
                .display_duration(20.0)
                .fade_out_duration(5.5)
        ),
        ConfigErrorKind::OutOfRange
    );
}

#[test]
fn hex_without_hash_is_invalid_color() {
    assert_eq!(
        kind_of("Test", ToastOptions::new().bg("FF0000")),
        ConfigErrorKind::InvalidColor
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().text_color((1.5, 0.5, 0.5))),
        ConfigErrorKind::InvalidColor
    );
}

#[test]
fn unknown_sound_is_invalid() {
    assert_eq!(
        kind_of("Test", ToastOptions::new().sound("ding")),
        ConfigErrorKind::InvalidSound
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().sound("/definitely/missing/ding.wav")),
        ConfigErrorKind::InvalidSound
    );
}

#[test]
fn existing_sound_file_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ding.aiff");
    std::fs::write(&path, b"FORM").unwrap();

    let toast = prepare("Test", ToastOptions::new().sound(path.as_path())).unwrap();
    assert_eq!(toast.config.sound(), Some(&Sound::File(path)));
}

#[test]
fn short_auto_sized_message_does_not_wrap() {
    let toast = prepare("Done!", ToastOptions::new().auto_size(true)).unwrap();
    let c = &toast.config;
    assert!(c.auto_size());
    assert_eq!(c.width(), 100.0);
    assert!(c.corner_radius() <= c.height() / 2.0);
    assert_eq!(
        c.width_bounds(),
        Some(WidthBounds {
            min: 100.0,
            max: 400.0
        })
    );
}

#[test]
fn long_auto_sized_message_pins_max_width() {
    let message = "The nightly build finished with three warnings and no errors. ".repeat(3);
    let toast = prepare(&message, ToastOptions::new().auto_size(true).max_width(300.0)).unwrap();
    assert_eq!(toast.config.width(), 300.0);
    assert!(toast.config.height() > 44.0);
}

#[test]
fn auto_sized_height_still_range_checked() {
    let message = "word ".repeat(400);
    let opts = ToastOptions::new().auto_size(true).font_size(72.0);
    assert_eq!(kind_of(&message, opts), ConfigErrorKind::OutOfRange);
}

#[test]
fn geometry_ranges_are_enforced() {
    assert_eq!(
        kind_of("Test", ToastOptions::new().width(20.0)),
        ConfigErrorKind::OutOfRange
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().height(600.0)),
        ConfigErrorKind::OutOfRange
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().font_size(100.0)),
        ConfigErrorKind::OutOfRange
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().corner_radius(101.0)),
        ConfigErrorKind::OutOfRange
    );
}

#[test]
fn position_and_level_membership() {
    assert_eq!(
        kind_of("Test", ToastOptions::new().position("middle")),
        ConfigErrorKind::InvalidPosition
    );
    assert_eq!(
        kind_of("Test", ToastOptions::new().window_level("super-high")),
        ConfigErrorKind::InvalidWindowLevel
    );

    let toast = prepare("Test", ToastOptions::new().position((10.0, 20.0))).unwrap();
    assert_eq!(
        toast.config.position(),
        Position::Point { x: 10.0, y: 20.0 }
    );
}

#[test]
fn check_requires_blocking() {
    assert_eq!(
        kind_of("Test", ToastOptions::new().check(true).blocking(false)),
        ConfigErrorKind::LaunchModeConflict
    );
    let toast = prepare("Test", ToastOptions::new().blocking(false)).unwrap();
    assert_eq!(toast.launch, LaunchMode::Detached);
    let toast = prepare("Test", ToastOptions::new().check(true)).unwrap();
    assert_eq!(toast.launch, LaunchMode::Blocking { check: true });
}

#[test]
fn blank_message_is_invalid() {
    assert_eq!(kind_of("", ToastOptions::new()), ConfigErrorKind::InvalidMessage);
    assert_eq!(
        kind_of("  \n\t", ToastOptions::new()),
        ConfigErrorKind::InvalidMessage
    );
}

#[test]
fn flag_like_message_is_invalid() {
    assert_eq!(kind_of("--width", ToastOptions::new()), ConfigErrorKind::InvalidMessage);
    assert_eq!(kind_of("-v", ToastOptions::new()), ConfigErrorKind::InvalidMessage);

    let toast = prepare(" -5 degrees outside", ToastOptions::new()).unwrap();
    assert_eq!(toast.config.message(), " -5 degrees outside");
    prepare("Build - done", ToastOptions::new()).unwrap();
}

#[test]
fn first_violation_wins() {
    // Message is checked before colors, colors before ranges.
    let opts = ToastOptions::new().bg("nope").width(1.0);
    assert_eq!(kind_of("", opts.clone()), ConfigErrorKind::InvalidMessage);
    assert_eq!(kind_of("ok", opts), ConfigErrorKind::InvalidColor);
}

#[test]
fn validation_is_idempotent() {
    let toast = prepare(
        "Saved",
        ToastOptions::new()
            .preset(Preset::Success)
            .auto_size(true)
            .position(Anchor::TopLeft),
    )
    .unwrap();
    let before = toast.config.clone();
    toast.config.validate().unwrap();
    toast.config.validate().unwrap();
    assert_eq!(toast.config, before);
}

#[test]
fn preset_defaults_yield_to_caller() {
    let toast = prepare(
        "Oops",
        ToastOptions::new().preset(Preset::Error).bg("#000000"),
    )
    .unwrap();
    assert_eq!(toast.config.bg(), Rgba::rgb(0.0, 0.0, 0.0));
    assert_eq!(toast.config.icon(), Some("xmark.circle.fill"));
    assert_eq!(
        toast.config.sound(),
        Some(&Sound::Bundled("beep1".to_owned()))
    );
}
