//! Story → PDF. Wraps each block, flows lines down the frame, and starts a new
//! page on overflow or an explicit break. Output uses the base-14 Helvetica faces,
//! so nothing is embedded.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::layout::font_metrics::{get_metrics, FontFace};
use crate::layout::styles::{Alignment, PageGeometry, ParagraphStyle, Rgb};
use crate::layout::{wrap_runs, Block, WrappedLine};
use crate::render::encoding::{encode_win_ansi, WIN_ANSI};

/// Result of a successful render.
#[derive(Debug, Clone)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub pages: usize,
}

pub struct PdfRenderer {
    geometry: PageGeometry,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        PdfRenderer::new(PageGeometry::letter())
    }
}

impl PdfRenderer {
    pub fn new(geometry: PageGeometry) -> Self {
        PdfRenderer { geometry }
    }

    /// Lays out `story` and returns the serialized document.
    pub fn render(&self, story: &[Block], title: &str) -> Result<RenderedPdf, AppError> {
        let pages = self.paginate(story);
        if pages.is_empty() {
            return Err(AppError::Render("story has no drawable content".into()));
        }
        let page_count = pages.len();
        let mut doc = self.assemble(pages, title)?;
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| AppError::Render(format!("failed to serialize PDF: {e}")))?;

        debug!(pages = page_count, bytes = bytes.len(), "Rendered PDF");
        Ok(RenderedPdf {
            bytes,
            pages: page_count,
        })
    }

    /// Renders and writes the document to `path` in one call.
    pub fn render_to_file(
        &self,
        story: &[Block],
        title: &str,
        path: &Path,
    ) -> Result<RenderedPdf, AppError> {
        let rendered = self.render(story, title)?;
        std::fs::write(path, &rendered.bytes).map_err(|e| AppError::file_access(path, e))?;
        info!(
            path = %path.display(),
            pages = rendered.pages,
            bytes = rendered.bytes.len(),
            "Wrote PDF"
        );
        Ok(rendered)
    }

    // ── Pagination ───────────────────────────────────────────────────────────

    fn paginate(&self, story: &[Block]) -> Vec<Vec<Operation>> {
        let mut flow = PageFlow::new(self.geometry);
        for block in story {
            match block {
                Block::PageBreak => flow.break_page(),
                Block::Spacer { height } => flow.advance(*height),
                _ => {
                    if let Some((style, runs)) = block.styled_runs() {
                        let width = self.text_width(&style);
                        let lines = wrap_runs(&runs, style.face, style.font_size, width);
                        flow.place_paragraph(&style, &lines);
                    }
                }
            }
        }
        flow.finish()
    }

    fn text_width(&self, style: &ParagraphStyle) -> f32 {
        let padding = style.border.map(|b| b.padding * 2.0).unwrap_or(0.0);
        self.geometry.frame_width() - style.left_indent - padding
    }

    // ── Document assembly ────────────────────────────────────────────────────

    fn assemble(&self, pages: Vec<Vec<Operation>>, title: &str) -> Result<Document, AppError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for face in FontFace::ALL {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => WIN_ANSI,
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for operations in pages {
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));
            let page_id: ObjectId = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let media_box: Vec<Object> = vec![
            Object::Integer(0),
            Object::Integer(0),
            self.geometry.width.into(),
            self.geometry.height.into(),
        ];
        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "MediaBox" => media_box,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let created = chrono::Local::now().format("D:%Y%m%d%H%M%S").to_string();
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal(encode_win_ansi(title)),
            "Creator" => Object::string_literal(env!("CARGO_PKG_NAME")),
            "CreationDate" => Object::string_literal(created),
        });
        doc.trailer.set("Info", info_id);

        Ok(doc)
    }
}

/// Cursor over the page being filled. `y` is the top of the next line box in PDF
/// space (origin bottom-left).
struct PageFlow {
    geometry: PageGeometry,
    done: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl PageFlow {
    fn new(geometry: PageGeometry) -> Self {
        PageFlow {
            geometry,
            done: Vec::new(),
            current: Vec::new(),
            y: geometry.frame_top(),
        }
    }

    fn at_top(&self) -> bool {
        self.current.is_empty()
    }

    fn remaining(&self) -> f32 {
        self.y - self.geometry.margin_bottom
    }

    /// Starts a new page unless the current one is still blank.
    fn break_page(&mut self) {
        if !self.at_top() {
            self.done.push(std::mem::take(&mut self.current));
        }
        self.y = self.geometry.frame_top();
    }

    fn advance(&mut self, height: f32) {
        if self.at_top() {
            return;
        }
        self.y -= height;
        if self.remaining() <= 0.0 {
            self.break_page();
        }
    }

    fn place_paragraph(&mut self, style: &ParagraphStyle, lines: &[WrappedLine]) {
        if lines.is_empty() {
            return;
        }
        let padding = style.border.map(|b| b.padding).unwrap_or(0.0);
        let boxed = style.border.is_some();

        // Bordered headings are kept whole; other paragraphs may split across pages.
        let first_chunk = if boxed {
            style.space_before + lines.len() as f32 * style.leading + padding * 2.0
        } else {
            style.space_before + style.leading
        };
        if !self.at_top() && first_chunk > self.remaining() {
            self.break_page();
        }
        if !self.at_top() {
            self.y -= style.space_before;
        }

        let box_top = self.y;
        self.y -= padding;
        for line in lines {
            if !boxed && !self.at_top() && style.leading > self.remaining() {
                self.break_page();
            }
            self.draw_line(style, line, padding);
            self.y -= style.leading;
        }
        self.y -= padding;

        if let Some(border) = style.border {
            self.draw_border(style, border.width, border.color, box_top);
        }
        self.y -= style.space_after;
    }

    fn draw_line(&mut self, style: &ParagraphStyle, line: &WrappedLine, padding: f32) {
        let left = self.geometry.margin_left + style.left_indent + padding;
        let x = match style.alignment {
            Alignment::Left => left,
            Alignment::Center => {
                let slack = self.geometry.frame_width() - style.left_indent - line.width;
                left + (slack / 2.0).max(0.0)
            }
        };
        let descent = get_metrics(style.face).descent * style.font_size;
        let baseline = self.y - style.leading + descent;
        let Rgb(r, g, b) = style.rgb();

        self.current.push(Operation::new("BT", vec![]));
        self.current
            .push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
        self.current
            .push(Operation::new("Td", vec![x.into(), baseline.into()]));
        for segment in &line.segments {
            self.current.push(Operation::new(
                "Tf",
                vec![segment.face.resource_name().into(), style.font_size.into()],
            ));
            self.current.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(&segment.text))],
            ));
        }
        self.current.push(Operation::new("ET", vec![]));
    }

    fn draw_border(&mut self, style: &ParagraphStyle, width: f32, color: u32, top: f32) {
        let x = self.geometry.margin_left + style.left_indent;
        let w = self.geometry.frame_width() - style.left_indent;
        let h = top - self.y;
        let Rgb(r, g, b) = Rgb::from_hex(color);

        self.current
            .push(Operation::new("RG", vec![r.into(), g.into(), b.into()]));
        self.current.push(Operation::new("w", vec![width.into()]));
        self.current.push(Operation::new(
            "re",
            vec![x.into(), self.y.into(), w.into(), h.into()],
        ));
        self.current.push(Operation::new("S", vec![]));
    }

    fn finish(mut self) -> Vec<Vec<Operation>> {
        if !self.current.is_empty() {
            self.done.push(self.current);
        }
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::blocks::Run;
    use crate::layout::styles::{BODY, HEADER, JOB_INFO};

    fn page_count(bytes: &[u8]) -> usize {
        lopdf::Document::load_mem(bytes)
            .expect("rendered PDF should load")
            .get_pages()
            .len()
    }

    #[test]
    fn test_empty_story_is_render_error() {
        let err = PdfRenderer::default().render(&[], "Empty").unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }

    #[test]
    fn test_spacers_and_breaks_alone_are_render_error() {
        let story = [Block::Spacer { height: 10.0 }, Block::PageBreak];
        assert!(PdfRenderer::default().render(&story, "x").is_err());
    }

    #[test]
    fn test_single_page_document_loads_back() {
        let story = vec![
            Block::paragraph(HEADER, "JANE DOE"),
            Block::heading("PROFESSIONAL SUMMARY"),
            Block::paragraph(BODY, "Engineer with 15 years building payment platforms."),
            Block::Bullet {
                runs: vec![Run::bold("Cloud:"), Run::plain(" AWS, GCP")],
            },
        ];
        let rendered = PdfRenderer::default().render(&story, "JANE DOE").unwrap();
        assert_eq!(rendered.pages, 1);
        assert_eq!(page_count(&rendered.bytes), 1);
        assert!(rendered.bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_page_break_starts_second_page() {
        let story = vec![
            Block::paragraph(BODY, "first"),
            Block::PageBreak,
            Block::paragraph(BODY, "second"),
        ];
        let rendered = PdfRenderer::default().render(&story, "t").unwrap();
        assert_eq!(rendered.pages, 2);
        assert_eq!(page_count(&rendered.bytes), 2);
    }

    #[test]
    fn test_leading_and_trailing_breaks_do_not_add_blank_pages() {
        let story = vec![
            Block::PageBreak,
            Block::paragraph(BODY, "only"),
            Block::PageBreak,
            Block::PageBreak,
        ];
        let rendered = PdfRenderer::default().render(&story, "t").unwrap();
        assert_eq!(rendered.pages, 1);
    }

    #[test]
    fn test_overflow_flows_onto_new_pages() {
        let story: Vec<Block> = (0..120)
            .map(|i| Block::paragraph(JOB_INFO, format!("Line number {i}")))
            .collect();
        let rendered = PdfRenderer::default().render(&story, "t").unwrap();
        assert!(rendered.pages >= 2, "expected overflow, got {}", rendered.pages);
        assert_eq!(page_count(&rendered.bytes), rendered.pages);
    }

    #[test]
    fn test_extracted_text_contains_content() {
        let story = vec![
            Block::paragraph(HEADER, "JANE DOE"),
            Block::paragraph(BODY, "Principal Engineer"),
        ];
        let rendered = PdfRenderer::default().render(&story, "JANE DOE").unwrap();
        let text = pdf_extract::extract_text_from_mem(&rendered.bytes).unwrap();
        assert!(text.contains("JANE DOE"), "extracted: {text}");
        assert!(text.contains("Principal Engineer"), "extracted: {text}");
    }

    #[test]
    fn test_render_to_file_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let story = vec![Block::paragraph(BODY, "hello")];
        let rendered = PdfRenderer::default()
            .render_to_file(&story, "t", &path)
            .unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), rendered.bytes);
    }

    #[test]
    fn test_render_to_unwritable_path_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");
        let story = vec![Block::paragraph(BODY, "hello")];
        let err = PdfRenderer::default()
            .render_to_file(&story, "t", &path)
            .unwrap_err();
        assert!(matches!(err, AppError::FileAccess { .. }));
    }
}
