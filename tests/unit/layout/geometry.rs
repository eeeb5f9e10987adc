use super::*;

#[test]
fn range_checks_name_the_field() {
    assert_eq!(check_range("width", 280.0, &WIDTH_RANGE).unwrap(), 280.0);
    assert_eq!(check_range("width", 50.0, &WIDTH_RANGE).unwrap(), 50.0);
    assert_eq!(check_range("width", 1000.0, &WIDTH_RANGE).unwrap(), 1000.0);

    let err = check_range("width", 20.0, &WIDTH_RANGE).unwrap_err();
    let ToastError::Config(cfg) = err else {
        panic!("expected configuration error");
    };
    assert_eq!(cfg.kind, ConfigErrorKind::OutOfRange);
    assert_eq!(cfg.field, "width");

    assert!(check_range("font_size", 100.0, &FONT_SIZE_RANGE).is_err());
    assert!(check_range("height", f64::NAN, &HEIGHT_RANGE).is_err());
    assert!(check_range("corner_radius", -0.5, &CORNER_RADIUS_RANGE).is_err());
}

#[test]
fn anchors_parse_from_tags() {
    for a in Anchor::ALL {
        assert_eq!(a.as_str().parse::<Anchor>().unwrap(), a);
    }
    assert_eq!(
        PositionSpec::from("center").resolve().unwrap(),
        Position::Anchor(Anchor::Center)
    );
    assert_eq!(Position::default(), Position::Anchor(Anchor::BottomRight));
}

#[test]
fn unknown_tag_is_invalid_position() {
    let err = PositionSpec::from("middle").resolve().unwrap_err();
    assert_eq!(err.config_kind(), Some(ConfigErrorKind::InvalidPosition));
}

#[test]
fn coordinates_override_anchor() {
    assert_eq!(
        PositionSpec::from((1200.0, 800.0)).resolve().unwrap(),
        Position::Point {
            x: 1200.0,
            y: 800.0
        }
    );
}

#[test]
fn coordinate_arity_must_be_two() {
    for v in [vec![], vec![1.0], vec![1.0, 2.0, 3.0]] {
        let err = PositionSpec::Coordinates(v).resolve().unwrap_err();
        assert_eq!(err.config_kind(), Some(ConfigErrorKind::InvalidPosition));
    }
    let err = PositionSpec::from((f64::INFINITY, 0.0)).resolve().unwrap_err();
    assert_eq!(err.config_kind(), Some(ConfigErrorKind::InvalidPosition));
}

#[test]
fn window_levels_are_ordered_and_checked() {
    assert!(WindowLevel::Normal < WindowLevel::Floating);
    assert!(WindowLevel::Max < WindowLevel::Screensaver);
    assert_eq!(
        WindowLevelSpec::from("status").resolve().unwrap(),
        WindowLevel::Status
    );
    let err = WindowLevelSpec::from("super-high").resolve().unwrap_err();
    assert_eq!(err.config_kind(), Some(ConfigErrorKind::InvalidWindowLevel));
}
