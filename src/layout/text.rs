use crate::colour::{colours, Colour};
use crate::font::{TextMeasure, TextMetrics};
use crate::rect::Rect;
use crate::units::Px;
use crate::WallpaperError;

/// Anything text can be drawn onto. Drawing mutates the surface in place.
pub trait TextSurface<F: ?Sized> {
    /// Draw a single line of text with the top-left of its line box at `position`
    fn draw_text(
        &mut self,
        position: (Px, Px),
        text: &str,
        font: &F,
        colour: Colour,
    ) -> Result<(), WallpaperError>;
}

/// How text is placed inside a text box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBoxStyle {
    /// Horizontal inset applied on both the left and right of the box
    pub padding: Px,
    /// Extra vertical gap between consecutive lines
    pub line_spacing: Px,
    pub colour: Colour,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        TextBoxStyle {
            padding: Px::ZERO,
            line_spacing: Px(4.0),
            colour: colours::WHITE,
        }
    }
}

/// A line of text that made it into the box, along with where it goes
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine {
    pub text: String,
    /// Top-left corner of the line
    pub position: (Px, Px),
    pub metrics: TextMetrics,
}

/// The result of fitting text into a box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextBoxLayout {
    /// Lines that fit, top to bottom
    pub lines: Vec<LaidOutLine>,
    /// Whether any wrapped lines were dropped because the box ran out of height
    pub truncated: bool,
}

/// The horizontal space available for glyphs: the box width less the padding on either
/// side, never less than zero
pub fn usable_width(bounding_box: Rect, padding: Px) -> Px {
    (bounding_box.width() - padding * 2.0).max(Px::ZERO)
}

/// Greedily wraps text into lines no wider than `max_width`.
///
/// Words are the whitespace-separated tokens of `text` and are never split. Each word is
/// appended to the current line for as long as the measured width of the line stays at or
/// under `max_width`; a word that doesn't fit starts a new line. A word that is wider than
/// `max_width` all by itself gets a line of its own and overflows it.
pub fn wrap_lines<F>(text: &str, font: &F, max_width: Px) -> Result<Vec<String>, WallpaperError>
where
    F: TextMeasure + ?Sized,
{
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };

        if font.measure(&candidate)?.width <= max_width {
            line = candidate;
        } else {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            line.push_str(word);
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    Ok(lines)
}

/// Wraps text to the width of `bounding_box` and stacks the lines from the top of the box
/// down, without drawing anything.
///
/// Lines are stacked until the next one would extend past the bottom of the box; that line
/// and every line after it are dropped and [TextBoxLayout::truncated] is set. A line whose
/// bottom lands exactly on the bottom edge still fits.
pub fn layout_text_box<F>(
    text: &str,
    font: &F,
    bounding_box: Rect,
    style: &TextBoxStyle,
) -> Result<TextBoxLayout, WallpaperError>
where
    F: TextMeasure + ?Sized,
{
    let wrapped = wrap_lines(text, font, usable_width(bounding_box, style.padding))?;
    let total = wrapped.len();

    let x = bounding_box.x0 + style.padding;
    let mut y = bounding_box.y0;
    let mut lines: Vec<LaidOutLine> = Vec::with_capacity(total);

    for text in wrapped {
        let metrics = font.measure(&text)?;
        if y + metrics.height > bounding_box.y1 {
            break;
        }

        lines.push(LaidOutLine {
            text,
            position: (x, y),
            metrics,
        });
        y += metrics.height + style.line_spacing;
    }

    Ok(TextBoxLayout {
        truncated: lines.len() < total,
        lines,
    })
}

/// Wraps `text` into `bounding_box` and draws the lines that fit onto `surface`, returning
/// how many lines were drawn.
///
/// See [layout_text_box] for how lines are wrapped and when they stop fitting. Text that
/// doesn't fit is dropped silently; use [layout_text_box] directly to find out whether that
/// happened.
pub fn wrap_and_render<F, S>(
    surface: &mut S,
    text: &str,
    font: &F,
    bounding_box: Rect,
    style: &TextBoxStyle,
) -> Result<usize, WallpaperError>
where
    F: TextMeasure + ?Sized,
    S: TextSurface<F> + ?Sized,
{
    let layout = layout_text_box(text, font, bounding_box, style)?;
    if layout.truncated {
        log::debug!(
            "text box {:?} only fits {} lines, dropping the rest",
            bounding_box,
            layout.lines.len()
        );
    }

    for line in layout.lines.iter() {
        surface.draw_text(line.position, &line.text, font, style.colour)?;
    }

    Ok(layout.lines.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Every character is `advance` wide and every line is `height` tall
    struct FixedFont {
        advance: f32,
        height: f32,
    }

    impl TextMeasure for FixedFont {
        fn measure(&self, text: &str) -> Result<TextMetrics, WallpaperError> {
            if let Some(ch) = text.chars().find(|ch| *ch == '\u{0}') {
                return Err(WallpaperError::MissingGlyph(ch));
            }
            Ok(TextMetrics {
                width: Px(text.chars().count() as f32 * self.advance),
                height: Px(self.height),
            })
        }
    }

    const FONT: FixedFont = FixedFont {
        advance: 10.0,
        height: 20.0,
    };

    #[derive(Default, Debug, PartialEq)]
    struct RecordingSurface {
        drawn: Vec<((Px, Px), String, Colour)>,
    }

    impl<F: ?Sized> TextSurface<F> for RecordingSurface {
        fn draw_text(
            &mut self,
            position: (Px, Px),
            text: &str,
            _font: &F,
            colour: Colour,
        ) -> Result<(), WallpaperError> {
            self.drawn.push((position, text.to_string(), colour));
            Ok(())
        }
    }

    fn style(padding: f32) -> TextBoxStyle {
        TextBoxStyle {
            padding: Px(padding),
            line_spacing: Px(5.0),
            colour: colours::WHITE,
        }
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut surface = RecordingSurface::default();
        let rendered = wrap_and_render(
            &mut surface,
            "",
            &FONT,
            Rect::new(0, 0, 500, 500),
            &style(10.0),
        )
        .unwrap();
        assert_eq!(rendered, 0);
        assert!(surface.drawn.is_empty());

        let rendered = wrap_and_render(
            &mut surface,
            "  \t\n  ",
            &FONT,
            Rect::new(0, 0, 500, 500),
            &style(10.0),
        )
        .unwrap();
        assert_eq!(rendered, 0);
        assert!(surface.drawn.is_empty());
    }

    #[test]
    fn wraps_greedily() {
        // usable width of 100 fits 10 characters
        let lines = wrap_lines("the quick brown fox jumps over the lazy dog", &FONT, Px(100.0)).unwrap();
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
    }

    #[test]
    fn line_of_exactly_usable_width_is_kept() {
        // "aaaa bbbbb" is exactly 100 wide
        let lines = wrap_lines("aaaa bbbbb c", &FONT, Px(100.0)).unwrap();
        assert_eq!(lines, vec!["aaaa bbbbb", "c"]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let lines = wrap_lines("a supercalifragilistic b", &FONT, Px(50.0)).unwrap();
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);

        let lines = wrap_lines("supercalifragilistic", &FONT, Px(50.0)).unwrap();
        assert_eq!(lines, vec!["supercalifragilistic"]);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let a = wrap_lines("  hello   world \n", &FONT, Px(200.0)).unwrap();
        let b = wrap_lines("hello world", &FONT, Px(200.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, vec!["hello world"]);
    }

    #[test]
    fn degenerate_box_puts_every_word_on_its_own_line() {
        // the box is narrower than its own padding
        let bbox = Rect::new(0, 0, 30, 1000);
        assert_eq!(usable_width(bbox, Px(20.0)), Px::ZERO);

        let layout = layout_text_box("one two three", &FONT, bbox, &style(20.0)).unwrap();
        let texts: Vec<&str> = layout.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(!layout.truncated);
    }

    #[test]
    fn lines_start_at_padded_top_left_and_advance_by_height_and_spacing() {
        let mut surface = RecordingSurface::default();
        let bbox = Rect::new(100, 50, 220, 500);
        let rendered = wrap_and_render(&mut surface, "aaaa bbbb cccc", &FONT, bbox, &style(10.0)).unwrap();
        assert_eq!(rendered, 2);
        assert_eq!(
            surface.drawn,
            vec![
                ((Px(110.0), Px(50.0)), "aaaa bbbb".to_string(), colours::WHITE),
                ((Px(110.0), Px(75.0)), "cccc".to_string(), colours::WHITE),
            ]
        );
    }

    #[test]
    fn truncates_to_the_lines_that_fit() {
        // every word is its own line; 20 tall plus 5 spacing means lines start at
        // 0, 25, 50, 75 and the fourth would end at 95
        let bbox = Rect::new(0, 0, 40, 94);
        let mut surface = RecordingSurface::default();
        let rendered =
            wrap_and_render(&mut surface, "one two three four five", &FONT, bbox, &style(0.0)).unwrap();
        assert_eq!(rendered, 3);
        let texts: Vec<&str> = surface.drawn.iter().map(|(_, t, _)| t.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);

        let layout = layout_text_box("one two three four five", &FONT, bbox, &style(0.0)).unwrap();
        assert!(layout.truncated);
    }

    #[test]
    fn line_ending_exactly_at_the_bottom_is_drawn() {
        let bbox = Rect::new(0, 0, 40, 95);
        let mut surface = RecordingSurface::default();
        let rendered =
            wrap_and_render(&mut surface, "one two three four five", &FONT, bbox, &style(0.0)).unwrap();
        assert_eq!(rendered, 4);
    }

    #[test]
    fn box_shorter_than_one_line_draws_nothing() {
        let bbox = Rect::new(0, 0, 400, 19);
        let layout = layout_text_box("hello", &FONT, bbox, &style(0.0)).unwrap();
        assert!(layout.lines.is_empty());
        assert!(layout.truncated);
    }

    #[test]
    fn measurement_failure_propagates() {
        let mut surface = RecordingSurface::default();
        let result = wrap_and_render(
            &mut surface,
            "fine \u{0}bad",
            &FONT,
            Rect::new(0, 0, 500, 500),
            &style(0.0),
        );
        assert!(matches!(result, Err(WallpaperError::MissingGlyph('\u{0}'))));
        assert!(surface.drawn.is_empty());
    }

    #[test]
    fn rendering_is_repeatable() {
        let text = lipsum::lipsum(120);
        let bbox = Rect::new(20, 40, 700, 400);

        let mut first = RecordingSurface::default();
        let mut second = RecordingSurface::default();
        let a = wrap_and_render(&mut first, &text, &FONT, bbox, &style(15.0)).unwrap();
        let b = wrap_and_render(&mut second, &text, &FONT, bbox, &style(15.0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(first, second);
    }

    fn arb_words() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z0-9.,;'-]{1,16}", 0..60)
    }

    fn arb_separators() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop_oneof![Just(" "), Just("  "), Just("\t"), Just("\n")], 60)
            .prop_map(|seps| seps.into_iter().map(str::to_string).collect())
    }

    proptest! {
        #[test]
        fn wrapping_preserves_words(words in arb_words(), seps in arb_separators(), width in 0.0f32..400.0) {
            let text: String = words
                .iter()
                .zip(seps.iter())
                .flat_map(|(w, s)| [s.as_str(), w.as_str()])
                .collect();

            let lines = wrap_lines(&text, &FONT, Px(width)).unwrap();
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split(' ')).collect();
            let expected: Vec<&str> = text.split_whitespace().collect();
            prop_assert_eq!(rejoined, expected);
        }

        #[test]
        fn lines_fit_unless_a_single_word(words in arb_words(), width in 0.0f32..400.0) {
            let text = words.join(" ");
            let lines = wrap_lines(&text, &FONT, Px(width)).unwrap();
            for line in lines.iter() {
                prop_assert!(!line.is_empty());
                let fits = FONT.measure(line).unwrap().width <= Px(width);
                prop_assert!(fits || !line.contains(' '), "line {:?} overflows {}", line, width);
            }
        }

        #[test]
        fn rendered_lines_are_a_prefix_of_wrapped_lines(
            words in arb_words(),
            height in 0u32..400,
        ) {
            let text = words.join(" ");
            let bbox = Rect::new(0, 0, 200, height);
            let wrapped = wrap_lines(&text, &FONT, usable_width(bbox, Px(10.0))).unwrap();

            let mut surface = RecordingSurface::default();
            let rendered = wrap_and_render(&mut surface, &text, &FONT, bbox, &style(10.0)).unwrap();

            // 20 tall lines, 5 apart: k lines need 25k - 5
            let fits = ((height as usize) + 5) / 25;
            prop_assert_eq!(rendered, wrapped.len().min(fits));
            let drawn: Vec<&String> = surface.drawn.iter().map(|(_, t, _)| t).collect();
            let expected: Vec<&String> = wrapped.iter().take(rendered).collect();
            prop_assert_eq!(drawn, expected);
        }
    }
}
