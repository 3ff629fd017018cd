//! Greedy word wrap over mixed-weight runs.
//!
//! Same first-fit algorithm as a simple line-fill estimate: a word moves to the next
//! line when it would overflow the current one. A word wider than the frame is
//! placed alone on its own line and allowed to overflow.

use crate::layout::blocks::Run;
use crate::layout::font_metrics::{get_metrics, FontFace};

/// Consecutive text on one line drawn in one face.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub face: FontFace,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappedLine {
    pub segments: Vec<Segment>,
    /// Rendered width in points.
    pub width: f32,
}

impl WrappedLine {
    fn push(&mut self, face: FontFace, text: String) {
        match self.segments.last_mut() {
            Some(last) if last.face == face => last.text.push_str(&text),
            _ => self.segments.push(Segment { face, text }),
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

struct Piece {
    face: FontFace,
    text: String,
}

/// Splits runs into words. A word may span runs when no whitespace separates them.
fn split_words(runs: &[Run], base_face: FontFace) -> Vec<Vec<Piece>> {
    let mut words: Vec<Vec<Piece>> = Vec::new();
    let mut pending_space = true;

    for run in runs {
        let face = if run.bold {
            FontFace::HelveticaBold
        } else {
            base_face
        };
        let mut rest = run.text.as_str();
        loop {
            let trimmed = rest.trim_start();
            if trimmed.len() != rest.len() {
                pending_space = true;
            }
            if trimmed.is_empty() {
                break;
            }
            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            let piece = Piece {
                face,
                text: trimmed[..end].to_string(),
            };
            match words.last_mut() {
                Some(word) if !pending_space => word.push(piece),
                _ => words.push(vec![piece]),
            }
            pending_space = false;
            rest = &trimmed[end..];
        }
    }
    words
}

/// Wraps `runs` into lines no wider than `max_width` points at `size`.
/// Non-bold runs use `base_face`.
pub fn wrap_runs(runs: &[Run], base_face: FontFace, size: f32, max_width: f32) -> Vec<WrappedLine> {
    let mut lines = Vec::new();
    let mut current = WrappedLine::default();

    for word in split_words(runs, base_face) {
        let Some(first) = word.first() else {
            continue;
        };
        let space_width = get_metrics(first.face).width_pt(" ", size);
        let word_width: f32 = word
            .iter()
            .map(|p| get_metrics(p.face).width_pt(&p.text, size))
            .sum();

        if !current.segments.is_empty() && current.width + space_width + word_width > max_width {
            lines.push(std::mem::take(&mut current));
        }

        let leading_space = !current.segments.is_empty();
        for (i, piece) in word.into_iter().enumerate() {
            let text = if i == 0 && leading_space {
                format!(" {}", piece.text)
            } else {
                piece.text
            };
            current.push(piece.face, text);
        }
        current.width += word_width + if leading_space { space_width } else { 0.0 };
    }

    if !current.segments.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 11.0;

    #[test]
    fn test_empty_runs_produce_no_lines() {
        assert!(wrap_runs(&[], FontFace::Helvetica, SIZE, 500.0).is_empty());
        assert!(wrap_runs(&[Run::plain("   ")], FontFace::Helvetica, SIZE, 500.0).is_empty());
    }

    #[test]
    fn test_short_text_is_one_line_with_collapsed_spaces() {
        let lines = wrap_runs(&[Run::plain("Hello   world")], FontFace::Helvetica, SIZE, 500.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Hello world");
        let expected = get_metrics(FontFace::Helvetica).width_pt("Hello world", SIZE);
        assert!((lines[0].width - expected).abs() < 1e-3);
    }

    #[test]
    fn test_long_text_wraps_within_width() {
        let text = "Architected a distributed caching layer using Redis and consistent hashing, \
                    reducing p99 latency by 40% under 50k RPS peak load across three regions";
        let max = 250.0;
        let lines = wrap_runs(&[Run::plain(text)], FontFace::Helvetica, SIZE, max);
        assert!(lines.len() >= 2, "expected wrap, got {} line(s)", lines.len());
        for line in &lines {
            assert!(line.width <= max + 1e-3, "line too wide: {}", line.width);
        }
        let rejoined: Vec<String> = lines.iter().map(|l| l.text()).collect();
        assert_eq!(rejoined.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let lines = wrap_runs(
            &[Run::plain("a Supercalifragilisticexpialidocious b")],
            FontFace::Helvetica,
            SIZE,
            60.0,
        );
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text(), "Supercalifragilisticexpialidocious");
    }

    #[test]
    fn test_bold_and_plain_runs_become_separate_segments() {
        let runs = [Run::bold("Cloud:"), Run::plain(" AWS, GCP")];
        let lines = wrap_runs(&runs, FontFace::Helvetica, SIZE, 500.0);
        assert_eq!(lines.len(), 1);
        let segments = &lines[0].segments;
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].face, FontFace::HelveticaBold);
        assert_eq!(segments[0].text, "Cloud:");
        assert_eq!(segments[1].face, FontFace::Helvetica);
        assert_eq!(segments[1].text, " AWS, GCP");
    }

    #[test]
    fn test_runs_without_whitespace_between_them_stay_glued() {
        let runs = [Run::plain("• "), Run::bold("Lead"), Run::plain("ership")];
        let lines = wrap_runs(&runs, FontFace::Helvetica, SIZE, 500.0);
        assert_eq!(lines[0].text(), "• Leadership");
    }
}
