use super::*;
use crate::layout::measure::{HeuristicMeasurer, TextExtent};

/// Reports a fixed natural width; wrapping yields `lines` lines of 20pt.
struct FixedMeasurer {
    natural: f64,
    lines: usize,
    seen_max: Option<f64>,
}

impl TextMeasurer for FixedMeasurer {
    fn measure(&mut self, _text: &str, _font_size: f64, max_width: Option<f64>) -> TextExtent {
        match max_width {
            None => TextExtent {
                width: self.natural,
                height: 20.0,
                lines: 1,
            },
            Some(w) => {
                self.seen_max = Some(w);
                TextExtent {
                    width: w,
                    height: 20.0 * self.lines as f64,
                    lines: self.lines,
                }
            }
        }
    }
}

fn request(message: &str) -> AutoSizeRequest<'_> {
    AutoSizeRequest {
        message,
        font_size: 16.0,
        has_icon: false,
        min_width: DEFAULT_MIN_WIDTH,
        max_width: DEFAULT_MAX_WIDTH,
        corner_radius: None,
    }
}

#[test]
fn short_message_uses_min_width_without_wrapping() {
    let size = estimate(request("Done!"), &mut HeuristicMeasurer);
    assert!(!size.wrapped);
    assert!(size.natural_width <= DEFAULT_MAX_WIDTH);
    assert_eq!(size.width, size.natural_width.max(DEFAULT_MIN_WIDTH));
    assert_eq!(size.width, 100.0);
    // One 19.2pt line plus 24pt of padding, rounded up.
    assert_eq!(size.height, 44.0);
}

#[test]
fn natural_width_includes_padding_and_icon() {
    let mut m = FixedMeasurer {
        natural: 150.0,
        lines: 1,
        seen_max: None,
    };
    let mut req = request("x");
    let plain = estimate(req, &mut m);
    assert_eq!(plain.natural_width, 190.0);
    assert_eq!(plain.width, 190.0);

    req.has_icon = true;
    let with_icon = estimate(req, &mut m);
    assert_eq!(with_icon.natural_width, 190.0 + 20.0 + ICON_SPACING);
}

#[test]
fn wide_message_wraps_at_max_width() {
    let mut m = FixedMeasurer {
        natural: 900.0,
        lines: 3,
        seen_max: None,
    };
    let size = estimate(request("long"), &mut m);
    assert!(size.wrapped);
    assert_eq!(size.width, DEFAULT_MAX_WIDTH);
    assert_eq!(size.height, 60.0 + 2.0 * VERTICAL_PADDING);
    assert_eq!(m.seen_max, Some(DEFAULT_MAX_WIDTH - 2.0 * HORIZONTAL_PADDING));
}

#[test]
fn radius_stays_within_half_height() {
    let mut req = request("hi");
    req.font_size = 8.0;
    req.corner_radius = Some(100.0);
    let size = estimate(req, &mut HeuristicMeasurer);
    assert!(size.corner_radius >= 0.0);
    assert!(size.corner_radius <= size.height / 2.0);
    assert_eq!(size.corner_radius, size.height / 2.0 - 2.0);

    let mut req = request("hi");
    req.corner_radius = Some(4.0);
    let size = estimate(req, &mut HeuristicMeasurer);
    assert_eq!(size.corner_radius, 4.0);
}

#[test]
fn radius_property_holds_across_inputs() {
    let long = "word ".repeat(80);
    let messages: [&str; 3] = ["a", "Build finished", long.as_str()];
    for msg in messages {
        for font_size in [8.0, 12.0, 16.0, 32.0, 72.0] {
            for radius in [None, Some(0.0), Some(50.0), Some(100.0)] {
                let mut req = request(msg);
                req.font_size = font_size;
                req.corner_radius = radius;
                let size = estimate(req, &mut HeuristicMeasurer);
                assert!(size.corner_radius >= 0.0);
                assert!(size.corner_radius <= size.height / 2.0);
            }
        }
    }
}
