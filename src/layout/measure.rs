//! Text measurement used by auto-sizing.
//!
//! The rendering engine lays text out with the platform system font in its own process, so
//! nothing here can observe its layout pass. [`ParleyMeasurer`] shapes the message against the
//! `system-ui` stack found on this host, which matches the engine's font on the same machine but
//! is not guaranteed to be pixel-identical. [`HeuristicMeasurer`] is a deterministic fallback for
//! hosts without usable system fonts.

use std::borrow::Cow;

/// Average glyph advance as a fraction of the font size.
pub const HEURISTIC_ADVANCE_EM: f64 = 0.55;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_EM: f64 = 1.2;

const SYSTEM_FONT_STACK: &str = "system-ui, sans-serif";

/// Measured text block, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextExtent {
    /// Widest line.
    pub width: f64,
    /// Total block height.
    pub height: f64,
    /// Line count after breaking.
    pub lines: usize,
}

/// Measures text at a given font size, optionally wrapping to `max_width`.
pub trait TextMeasurer {
    /// With `max_width == None` only explicit newlines break lines.
    fn measure(&mut self, text: &str, font_size: f64, max_width: Option<f64>) -> TextExtent;
}

/// Fixed-advance estimate with greedy word wrapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicMeasurer;

impl HeuristicMeasurer {
    fn char_advance(font_size: f64) -> f64 {
        font_size * HEURISTIC_ADVANCE_EM
    }

    /// Break one paragraph greedily, returning `(line_count, widest_line_chars)`.
    fn wrap_paragraph(paragraph: &str, max_chars: usize) -> (usize, usize) {
        let max_chars = max_chars.max(1);
        let mut lines = 1usize;
        let mut current = 0usize;
        let mut widest = 0usize;

        for word in paragraph.split_whitespace() {
            let mut len = word.chars().count();
            let needed = if current == 0 { len } else { current + 1 + len };
            if needed <= max_chars {
                current = needed;
                continue;
            }
            if current > 0 {
                widest = widest.max(current);
                lines += 1;
            }
            // Words wider than the line are split across lines.
            while len > max_chars {
                widest = max_chars;
                lines += 1;
                len -= max_chars;
            }
            current = len;
        }
        (lines, widest.max(current))
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&mut self, text: &str, font_size: f64, max_width: Option<f64>) -> TextExtent {
        let advance = Self::char_advance(font_size);
        let line_height = font_size * LINE_HEIGHT_EM;

        let mut lines = 0usize;
        let mut widest = 0usize;
        for paragraph in text.split('\n') {
            match max_width {
                None => {
                    lines += 1;
                    widest = widest.max(paragraph.trim_end().chars().count());
                }
                Some(w) => {
                    let max_chars = (w / advance).floor().max(1.0) as usize;
                    let (n, wide) = Self::wrap_paragraph(paragraph, max_chars);
                    lines += n;
                    widest = widest.max(wide);
                }
            }
        }

        TextExtent {
            width: widest as f64 * advance,
            height: lines as f64 * line_height,
            lines,
        }
    }
}

struct ParleyContexts {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

/// Shapes text with Parley against the host's system fonts.
///
/// Font discovery is deferred to the first measurement.
pub struct ParleyMeasurer {
    ctx: Option<ParleyContexts>,
    fallback: HeuristicMeasurer,
}

impl Default for ParleyMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl ParleyMeasurer {
    /// Measurer with no fonts loaded yet.
    pub fn new() -> Self {
        Self {
            ctx: None,
            fallback: HeuristicMeasurer,
        }
    }

    fn layout(&mut self, text: &str, size_pt: f32, max_width: Option<f32>) -> parley::Layout<()> {
        let ctx = self.ctx.get_or_insert_with(|| ParleyContexts {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        });
        let mut builder = ctx
            .layout_ctx
            .ranged_builder(&mut ctx.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Borrowed(SYSTEM_FONT_STACK)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_pt));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(max_width);
        layout
    }
}

impl TextMeasurer for ParleyMeasurer {
    fn measure(&mut self, text: &str, font_size: f64, max_width: Option<f64>) -> TextExtent {
        let layout = self.layout(text, font_size as f32, max_width.map(|w| w as f32));
        let shaped = TextExtent {
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
            lines: layout.len(),
        };
        self.shaped_or_fallback(shaped, text, font_size, max_width)
    }
}

impl ParleyMeasurer {
    /// Zero-width shaping of non-blank text means no font resolved.
    fn shaped_or_fallback(
        &mut self,
        shaped: TextExtent,
        text: &str,
        font_size: f64,
        max_width: Option<f64>,
    ) -> TextExtent {
        if shaped.width <= 0.0 && !text.trim().is_empty() {
            tracing::warn!(
                font_size,
                "no system font shaped the message; using heuristic text measurement"
            );
            return self.fallback.measure(text, font_size, max_width);
        }
        shaped
    }
}
