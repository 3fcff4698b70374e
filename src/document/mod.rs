mod docx;
mod model;

pub use docx::load_docx;
pub use model::{Alignment, Document, Paragraph, ParagraphFormat, Run, Section};
