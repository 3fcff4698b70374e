#![allow(dead_code)]

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates an `assert_cmd` Command for the doc-guard binary.
#[macro_export]
macro_rules! doc_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("doc-guard"))
    };
}

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// One paragraph of a generated test document.
pub struct DocxParagraph {
    text: String,
    style: Option<String>,
    font: Option<String>,
    size_half_points: Option<u32>,
    spacing_line: Option<u32>,
    jc: Option<String>,
}

impl DocxParagraph {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: None,
            font: None,
            size_half_points: None,
            spacing_line: None,
            jc: None,
        }
    }

    /// A heading paragraph (maps to the "Heading 1" style).
    pub fn heading(text: &str) -> Self {
        Self::new(text).style("Heading1")
    }

    /// A rubric-compliant body paragraph: Times New Roman 12pt, 1.5 line
    /// spacing, justified.
    pub fn body(text: &str) -> Self {
        Self::new(text)
            .font("Times New Roman")
            .size(24)
            .spacing(360)
            .justified()
    }

    pub fn style(mut self, style_id: &str) -> Self {
        self.style = Some(style_id.to_string());
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    /// Font size in half-points (24 = 12pt).
    pub fn size(mut self, half_points: u32) -> Self {
        self.size_half_points = Some(half_points);
        self
    }

    /// Line spacing in 240ths of a line (360 = 1.5).
    pub fn spacing(mut self, line: u32) -> Self {
        self.spacing_line = Some(line);
        self
    }

    pub fn justified(mut self) -> Self {
        self.jc = Some("both".to_string());
        self
    }

    pub fn aligned(mut self, jc: &str) -> Self {
        self.jc = Some(jc.to_string());
        self
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from("<w:p>");

        let has_ppr = self.style.is_some() || self.spacing_line.is_some() || self.jc.is_some();
        if has_ppr {
            xml.push_str("<w:pPr>");
            if let Some(style) = &self.style {
                let _ = write!(xml, r#"<w:pStyle w:val="{style}"/>"#);
            }
            if let Some(line) = self.spacing_line {
                let _ = write!(xml, r#"<w:spacing w:line="{line}" w:lineRule="auto"/>"#);
            }
            if let Some(jc) = &self.jc {
                let _ = write!(xml, r#"<w:jc w:val="{jc}"/>"#);
            }
            xml.push_str("</w:pPr>");
        }

        xml.push_str("<w:r>");
        if self.font.is_some() || self.size_half_points.is_some() {
            xml.push_str("<w:rPr>");
            if let Some(font) = &self.font {
                let _ = write!(xml, r#"<w:rFonts w:ascii="{font}"/>"#);
            }
            if let Some(size) = self.size_half_points {
                let _ = write!(xml, r#"<w:sz w:val="{size}"/>"#);
            }
            xml.push_str("</w:rPr>");
        }
        let _ = write!(
            xml,
            r#"<w:t xml:space="preserve">{}</w:t>"#,
            escape_xml(&self.text)
        );
        xml.push_str("</w:r></w:p>");

        xml
    }
}

/// Builds a minimal .docx file on disk for integration tests.
pub struct DocxBuilder {
    paragraphs: Vec<DocxParagraph>,
    footer: Option<String>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
            footer: None,
        }
    }

    pub fn paragraph(mut self, paragraph: DocxParagraph) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn footer(mut self, text: &str) -> Self {
        self.footer = Some(text.to_string());
        self
    }

    pub fn write(&self, path: &Path) {
        let file = File::create(path).expect("failed to create docx file");
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options)
            .expect("failed to start content types part");
        zip.write_all(content_types().as_bytes())
            .expect("failed to write content types");

        zip.start_file("word/document.xml", options)
            .expect("failed to start document part");
        zip.write_all(self.document_xml().as_bytes())
            .expect("failed to write document part");

        zip.start_file("word/styles.xml", options)
            .expect("failed to start styles part");
        zip.write_all(styles_xml().as_bytes())
            .expect("failed to write styles part");

        if let Some(footer) = &self.footer {
            zip.start_file("word/footer1.xml", options)
                .expect("failed to start footer part");
            zip.write_all(footer_xml(footer).as_bytes())
                .expect("failed to write footer part");
        }

        zip.finish().expect("failed to finish docx file");
    }

    fn document_xml(&self) -> String {
        let mut body = String::new();
        for paragraph in &self.paragraphs {
            body.push_str(&paragraph.to_xml());
        }
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body>{body}<w:sectPr/></w:body></w:document>"#
        )
    }
}

fn content_types() -> String {
    concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        r#"<Default Extension="xml" ContentType="application/xml"/>"#,
        r#"</Types>"#
    )
    .to_string()
}

fn styles_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:styles xmlns:w="{ns}">"#,
            r#"<w:style w:type="paragraph" w:styleId="Normal"><w:name w:val="Normal"/></w:style>"#,
            r#"<w:style w:type="paragraph" w:styleId="Heading1"><w:name w:val="heading 1"/></w:style>"#,
            r#"</w:styles>"#
        ),
        ns = W_NS
    )
}

fn footer_xml(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:ftr xmlns:w="{W_NS}"><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:ftr>"#,
        escape_xml(text)
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A fully rubric-compliant document: all nine sections as headings,
/// identity fields, a numbered figure caption, and a page-number footer.
pub fn compliant_docx() -> DocxBuilder {
    let builder = DocxBuilder::new()
        .paragraph(DocxParagraph::heading("Title"))
        .paragraph(DocxParagraph::heading("Executive Summary"))
        .paragraph(DocxParagraph::heading("Company Background"))
        .paragraph(DocxParagraph::heading("Problem Definition"))
        .paragraph(DocxParagraph::heading("Objectives"))
        .paragraph(DocxParagraph::heading("Data Collection"))
        .paragraph(DocxParagraph::heading("Timelines"))
        .paragraph(DocxParagraph::heading("Expected Outcomes"))
        .paragraph(DocxParagraph::heading("Graphical Analysis"))
        .paragraph(DocxParagraph::body("Name: John Smith"))
        .paragraph(DocxParagraph::body("Roll Number: 21F3001662"))
        .paragraph(DocxParagraph::body("Figure 1 shows the project timeline."));
    builder.footer("Page 1")
}

/// A document violating every checker at least once.
pub fn noncompliant_docx() -> DocxBuilder {
    DocxBuilder::new()
        .paragraph(
            DocxParagraph::new("The results were analyzed by the team.")
                .font("Arial")
                .size(28)
                .spacing(240)
                .aligned("left"),
        )
        .paragraph(DocxParagraph::body("See Figure A for details"))
}

/// Temp directory wrapper for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn docx_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
