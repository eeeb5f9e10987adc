use super::*;
use serde_json::json;

fn kind(spec: ColorSpec) -> Option<ConfigErrorKind> {
    spec.resolve("bg").err().and_then(|e| e.config_kind())
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c = ColorSpec::from("#ff0000").resolve("bg").unwrap();
    assert_eq!(c, Rgba::rgba(1.0, 0.0, 0.0, 1.0));

    let c = ColorSpec::from("#0000FF80").resolve("bg").unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn hex_round_trips_through_canonical_form() {
    for s in ["#000000", "#FFFFFF", "#3A7BD5", "#12345678", "#ABCDEF01"] {
        let c = ColorSpec::from(s).resolve("bg").unwrap();
        for ch in [c.r, c.g, c.b, c.a] {
            assert!((0.0..=1.0).contains(&ch));
        }
        assert_eq!(c.to_hex(), s);
    }
    // Opaque alpha collapses to the short form.
    let c = ColorSpec::from("#abcdefff").resolve("bg").unwrap();
    assert_eq!(c.to_hex(), "#ABCDEF");
}

#[test]
fn rejects_malformed_hex() {
    assert_eq!(kind("FF0000".into()), Some(ConfigErrorKind::InvalidColor));
    assert_eq!(kind("#FFF".into()), Some(ConfigErrorKind::InvalidColor));
    assert_eq!(kind("#FF00000".into()), Some(ConfigErrorKind::InvalidColor));
    assert_eq!(kind("#GG0000".into()), Some(ConfigErrorKind::InvalidColor));
    assert_eq!(kind("#+f0000".into()), Some(ConfigErrorKind::InvalidColor));
    assert_eq!(kind("#ééé".into()), Some(ConfigErrorKind::InvalidColor));
}

#[test]
fn accepts_component_tuples() {
    let c = ColorSpec::from((0.25, 0.5, 0.75)).resolve("bg").unwrap();
    assert_eq!(c, Rgba::rgba(0.25, 0.5, 0.75, 1.0));

    let c = ColorSpec::from([0.0, 1.0, 0.5, 0.9]).resolve("bg").unwrap();
    assert_eq!(c, Rgba::rgba(0.0, 1.0, 0.5, 0.9));
}

#[test]
fn rejects_bad_tuples_without_clamping() {
    assert_eq!(
        kind(ColorSpec::Components(vec![1.0, 0.0])),
        Some(ConfigErrorKind::InvalidColor)
    );
    assert_eq!(
        kind(ColorSpec::Components(vec![0.1; 5])),
        Some(ConfigErrorKind::InvalidColor)
    );
    assert_eq!(
        kind((1.5, 0.5, 0.5).into()),
        Some(ConfigErrorKind::InvalidColor)
    );
    assert_eq!(
        kind((0.5, -0.01, 0.5).into()),
        Some(ConfigErrorKind::InvalidColor)
    );
    assert_eq!(
        kind((0.5, 0.5, f64::NAN).into()),
        Some(ConfigErrorKind::InvalidColor)
    );
}

#[test]
fn error_names_the_field() {
    let err = ColorSpec::from("red").resolve("text_color").unwrap_err();
    let ToastError::Config(cfg) = err else {
        panic!("expected configuration error");
    };
    assert_eq!(cfg.field, "text_color");
}

#[test]
fn deserializes_untagged_shapes() {
    let c: ColorSpec = serde_json::from_value(json!("#112233")).unwrap();
    assert_eq!(c, ColorSpec::Hex("#112233".to_owned()));

    let c: ColorSpec = serde_json::from_value(json!([0.2, 0.2, 0.2])).unwrap();
    assert_eq!(c, ColorSpec::Components(vec![0.2, 0.2, 0.2]));
}
