pub mod encoding;
pub mod pdf;

pub use pdf::PdfRenderer;
