//! The story: an ordered list of styled blocks handed to the renderer.

use crate::layout::styles::{ParagraphStyle, BULLET, SECTION};

/// A piece of text drawn in a single weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Run {
            text: text.into(),
            bold: true,
        }
    }
}

pub const BULLET_GLYPH: &str = "•";

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Bordered section heading.
    Heading { text: String },
    Paragraph {
        style: ParagraphStyle,
        runs: Vec<Run>,
    },
    /// Indented paragraph prefixed with a bullet glyph.
    Bullet { runs: Vec<Run> },
    Spacer { height: f32 },
    PageBreak,
}

impl Block {
    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading { text: text.into() }
    }

    pub fn paragraph(style: ParagraphStyle, text: impl Into<String>) -> Self {
        Block::Paragraph {
            style,
            runs: vec![Run::plain(text)],
        }
    }

    /// Style and runs as the renderer draws them; `None` for spacers and breaks.
    pub fn styled_runs(&self) -> Option<(ParagraphStyle, Vec<Run>)> {
        match self {
            Block::Heading { text } => Some((SECTION, vec![Run::plain(text.clone())])),
            Block::Paragraph { style, runs } => Some((*style, runs.clone())),
            Block::Bullet { runs } => {
                let mut with_glyph = Vec::with_capacity(runs.len() + 1);
                with_glyph.push(Run::plain(format!("{BULLET_GLYPH} ")));
                with_glyph.extend(runs.iter().cloned());
                Some((BULLET, with_glyph))
            }
            Block::Spacer { .. } | Block::PageBreak => None,
        }
    }

    #[cfg(test)]
    pub fn plain_text(&self) -> String {
        match self.styled_runs() {
            Some((_, runs)) => runs.iter().map(|r| r.text.as_str()).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::styles::BODY;

    #[test]
    fn test_bullet_prepends_glyph() {
        let block = Block::Bullet {
            runs: vec![Run::bold("Cloud:"), Run::plain(" AWS")],
        };
        let (style, runs) = block.styled_runs().unwrap();
        assert_eq!(style.name, "CustomBullet");
        assert_eq!(runs[0].text, "• ");
        assert_eq!(block.plain_text(), "• Cloud: AWS");
    }

    #[test]
    fn test_heading_uses_section_style() {
        let (style, _) = Block::heading("EDUCATION").styled_runs().unwrap();
        assert!(style.border.is_some());
    }

    #[test]
    fn test_spacer_and_break_have_no_runs() {
        assert!(Block::Spacer { height: 3.0 }.styled_runs().is_none());
        assert!(Block::PageBreak.styled_runs().is_none());
        assert_eq!(Block::PageBreak.plain_text(), "");
    }

    #[test]
    fn test_paragraph_helper_is_single_plain_run() {
        let block = Block::paragraph(BODY, "Hello");
        assert_eq!(
            block,
            Block::Paragraph {
                style: BODY,
                runs: vec![Run::plain("Hello")]
            }
        );
    }
}
