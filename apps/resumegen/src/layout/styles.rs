//! Paragraph styles and page geometry for the resume template.

use crate::layout::font_metrics::FontFace;

pub const POINTS_PER_INCH: f32 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    /// `0xRRGGBB` → normalized components.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Rgb(channel(16), channel(8), channel(0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: u32,
    pub padding: f32,
}

/// Visual parameters for one kind of paragraph. All lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParagraphStyle {
    pub name: &'static str,
    pub face: FontFace,
    pub font_size: f32,
    pub leading: f32,
    /// `0xRRGGBB`
    pub color: u32,
    pub alignment: Alignment,
    pub space_before: f32,
    pub space_after: f32,
    pub left_indent: f32,
    pub border: Option<Border>,
}

impl ParagraphStyle {
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(self.color)
    }
}

const NAVY: u32 = 0x003366;
const GREY: u32 = 0x666666;
const CHARCOAL: u32 = 0x333333;
const BLUE: u32 = 0x0066CC;

pub const HEADER: ParagraphStyle = ParagraphStyle {
    name: "CustomHeader",
    face: FontFace::HelveticaBold,
    font_size: 30.0,
    leading: 36.0,
    color: NAVY,
    alignment: Alignment::Center,
    space_before: 0.0,
    space_after: 12.0,
    left_indent: 0.0,
    border: None,
};

pub const SUBTITLE: ParagraphStyle = ParagraphStyle {
    name: "CustomSubtitle",
    face: FontFace::Helvetica,
    font_size: 13.0,
    leading: 15.6,
    color: GREY,
    alignment: Alignment::Center,
    space_before: 0.0,
    space_after: 6.0,
    left_indent: 0.0,
    border: None,
};

pub const CONTACT: ParagraphStyle = ParagraphStyle {
    name: "CustomContact",
    face: FontFace::Helvetica,
    font_size: 11.0,
    leading: 13.2,
    color: CHARCOAL,
    alignment: Alignment::Center,
    space_before: 0.0,
    space_after: 6.0,
    left_indent: 0.0,
    border: None,
};

pub const SECTION: ParagraphStyle = ParagraphStyle {
    name: "CustomSection",
    face: FontFace::HelveticaBold,
    font_size: 15.0,
    leading: 18.0,
    color: BLUE,
    alignment: Alignment::Left,
    space_before: 14.0,
    space_after: 8.0,
    left_indent: 0.0,
    border: Some(Border {
        width: 1.0,
        color: BLUE,
        padding: 2.0,
    }),
};

pub const BODY: ParagraphStyle = ParagraphStyle {
    name: "CustomBody",
    face: FontFace::Helvetica,
    font_size: 11.0,
    leading: 12.0,
    color: CHARCOAL,
    alignment: Alignment::Left,
    space_before: 0.0,
    space_after: 2.0,
    left_indent: 0.0,
    border: None,
};

pub const BULLET: ParagraphStyle = ParagraphStyle {
    name: "CustomBullet",
    left_indent: 20.0,
    ..BODY
};

pub const JOB_TITLE: ParagraphStyle = ParagraphStyle {
    name: "JobTitle",
    face: FontFace::HelveticaBold,
    font_size: 13.0,
    leading: 15.6,
    color: NAVY,
    alignment: Alignment::Left,
    space_before: 0.0,
    space_after: 2.0,
    left_indent: 0.0,
    border: None,
};

pub const JOB_INFO: ParagraphStyle = ParagraphStyle {
    name: "JobInfo",
    face: FontFace::HelveticaOblique,
    font_size: 11.0,
    leading: 13.2,
    color: GREY,
    alignment: Alignment::Left,
    space_before: 0.0,
    space_after: 2.0,
    left_indent: 0.0,
    border: None,
};

/// Page size and margins in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageGeometry {
    /// US letter with 0.35" margins on every side.
    pub fn letter() -> Self {
        let margin = 0.35 * POINTS_PER_INCH;
        PageGeometry {
            width: 8.5 * POINTS_PER_INCH,
            height: 11.0 * POINTS_PER_INCH,
            margin_left: margin,
            margin_right: margin,
            margin_top: margin,
            margin_bottom: margin,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Y coordinate (PDF space, origin bottom-left) where content starts.
    pub fn frame_top(&self) -> f32 {
        self.height - self.margin_top
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}
