use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use zip::ZipArchive;

use crate::error::{DocGuardError, Result};

use super::{Alignment, Document, Paragraph, ParagraphFormat, Run, Section};

/// OOXML stores line spacing in 240ths of a single line.
const LINE_SPACING_UNITS: f32 = 240.0;
/// OOXML stores font sizes in half-points.
const HALF_POINTS_PER_POINT: f32 = 2.0;

/// Style id -> style name, from `word/styles.xml`.
type StyleMap = HashMap<String, String>;

type ParseResult<T> = std::result::Result<T, String>;

/// Load a .docx file into the normalized document model.
///
/// Only the parts the engine consumes are read: body paragraphs with run
/// fonts/sizes and paragraph formatting, the style table, section count,
/// and footer text.
///
/// # Errors
/// Returns an error if the file cannot be opened, is not a ZIP container,
/// or `word/document.xml` is missing or malformed.
pub fn load_docx(path: &Path) -> Result<Document> {
    let file = File::open(path).map_err(|source| DocGuardError::DocumentOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| parse_error(path, format!("not a ZIP container: {e}")))?;

    let styles = match read_part(&mut archive, "word/styles.xml") {
        Some(xml) => parse_styles(&xml).map_err(|e| parse_error(path, e))?,
        None => StyleMap::new(),
    };

    let Some(document_xml) = read_part(&mut archive, "word/document.xml") else {
        return Err(parse_error(path, "missing word/document.xml"));
    };
    let (paragraphs, section_count) =
        parse_document(&document_xml, &styles).map_err(|e| parse_error(path, e))?;

    let mut footers = Vec::new();
    for name in footer_part_names(&archive) {
        match read_part(&mut archive, &name) {
            Some(xml) => footers.push(parse_footer(&xml).map_err(|e| parse_error(path, e))?),
            None => footers.push(Vec::new()),
        }
    }

    // Footer parts are assigned to sections in numeric order; sections
    // without a footer part keep an empty footer.
    let sections = (0..section_count)
        .map(|i| Section {
            footer: footers.get(i).cloned().unwrap_or_default(),
        })
        .collect();

    Ok(Document {
        paragraphs,
        sections,
    })
}

fn parse_error(path: &Path, detail: impl Into<String>) -> DocGuardError {
    DocGuardError::DocumentParse {
        path: path.to_path_buf(),
        detail: detail.into(),
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Option<String> {
    let mut part = archive.by_name(name).ok()?;
    let mut xml = String::new();
    part.read_to_string(&mut xml).ok()?;
    Some(xml)
}

fn footer_part_names<R: Read + Seek>(archive: &ZipArchive<R>) -> Vec<String> {
    let mut names: Vec<String> = archive
        .file_names()
        .filter(|name| name.starts_with("word/footer") && name.ends_with(".xml"))
        .map(String::from)
        .collect();
    names.sort_by_key(|name| footer_index(name));
    names
}

fn footer_index(name: &str) -> usize {
    let digits: String = name.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// In-flight state for the paragraph currently being parsed.
#[derive(Default)]
struct ParagraphState {
    text: String,
    style_id: Option<String>,
    runs: Vec<Run>,
    format: ParagraphFormat,
    current_run: Option<Run>,
}

impl ParagraphState {
    fn finish(self, styles: &StyleMap) -> Paragraph {
        let style_name = self.style_id.map_or_else(
            || "Normal".to_string(),
            |id| styles.get(&id).map_or(id, |name| builtin_style_name(name)),
        );
        Paragraph {
            text: self.text.trim().to_string(),
            style_name,
            runs: self.runs,
            format: self.format,
        }
    }
}

/// Word stores built-in style names in lowercase ("heading 1"); the UI
/// name ("Heading 1") is what checkers match against.
fn builtin_style_name(name: &str) -> String {
    if let Some(rest) = name.strip_prefix("heading ") {
        return format!("Heading {rest}");
    }
    if name == "normal" {
        return "Normal".to_string();
    }
    name.to_string()
}

fn parse_document(xml: &str, styles: &StyleMap) -> ParseResult<(Vec<Paragraph>, usize)> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut section_count = 0usize;
    let mut para: Option<ParagraphState> = None;
    let mut in_text = false;
    // Paragraphs inside tables are not body paragraphs.
    let mut table_depth = 0usize;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth += 1,
                b"p" if table_depth == 0 => para = Some(ParagraphState::default()),
                b"r" => {
                    if let Some(state) = para.as_mut() {
                        state.current_run = Some(Run::default());
                    }
                }
                b"t" => in_text = para.is_some(),
                b"sectPr" => section_count += 1,
                _ => {
                    if let Some(state) = para.as_mut() {
                        apply_property(&e, state)?;
                    }
                }
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if table_depth == 0 => {
                    paragraphs.push(ParagraphState::default().finish(styles));
                }
                b"sectPr" => section_count += 1,
                _ => {
                    if let Some(state) = para.as_mut() {
                        apply_property(&e, state)?;
                    }
                }
            },
            Event::Text(t) => {
                if in_text && let Some(state) = para.as_mut() {
                    state
                        .text
                        .push_str(&t.unescape().map_err(|e| e.to_string())?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" => table_depth = table_depth.saturating_sub(1),
                b"t" => in_text = false,
                b"r" => {
                    if let Some(state) = para.as_mut()
                        && let Some(run) = state.current_run.take()
                    {
                        state.runs.push(run);
                    }
                }
                b"p" => {
                    if let Some(state) = para.take() {
                        paragraphs.push(state.finish(styles));
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok((paragraphs, section_count))
}

/// Apply one formatting element to the paragraph being parsed. Elements
/// that only make sense inside a run (`rFonts`, `sz`, `br`, `tab`) are
/// ignored unless a run is open, which also skips the paragraph-mark run
/// properties nested in `pPr`.
fn apply_property(e: &BytesStart, state: &mut ParagraphState) -> ParseResult<()> {
    match e.local_name().as_ref() {
        b"pStyle" => {
            if let Some(id) = get_attr(e, b"val")? {
                state.style_id = Some(id);
            }
        }
        b"jc" => {
            if let Some(value) = get_attr(e, b"val")? {
                state.format.alignment = parse_alignment(&value);
            }
        }
        b"spacing" => {
            // Only the "auto" line rule is a multiple of single spacing;
            // exact/atLeast rules are absolute heights and stay unset.
            if let Some(line) = get_attr(e, b"line")?
                && get_attr(e, b"lineRule")?
                    .as_deref()
                    .is_none_or(|rule| rule == "auto")
                && let Ok(value) = line.parse::<f32>()
            {
                state.format.line_spacing = Some(value / LINE_SPACING_UNITS);
            }
        }
        b"rFonts" => {
            if let Some(run) = state.current_run.as_mut()
                && let Some(name) = get_attr(e, b"ascii")?
            {
                run.font_name = Some(name);
            }
        }
        b"sz" => {
            if let Some(run) = state.current_run.as_mut()
                && let Some(value) = get_attr(e, b"val")?
                && let Ok(half_points) = value.parse::<f32>()
            {
                run.font_size_pt = Some(half_points / HALF_POINTS_PER_POINT);
            }
        }
        b"br" | b"cr" => {
            if state.current_run.is_some() {
                state.text.push('\n');
            }
        }
        b"tab" => {
            if state.current_run.is_some() {
                state.text.push('\t');
            }
        }
        _ => {}
    }
    Ok(())
}

fn parse_alignment(value: &str) -> Option<Alignment> {
    match value {
        "left" | "start" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" | "end" => Some(Alignment::Right),
        "both" | "distribute" => Some(Alignment::Justify),
        _ => None,
    }
}

fn parse_styles(xml: &str) -> ParseResult<StyleMap> {
    let mut reader = Reader::from_str(xml);
    let mut styles = StyleMap::new();
    let mut current_id: Option<String> = None;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) if e.local_name().as_ref() == b"style" => {
                current_id = get_attr(&e, b"styleId")?;
            }
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"name" => {
                if let Some(id) = current_id.as_ref()
                    && let Some(name) = get_attr(&e, b"val")?
                {
                    styles.insert(id.clone(), name);
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"style" => current_id = None,
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(styles)
}

fn parse_footer(xml: &str) -> ParseResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => current = Some(String::new()),
                b"t" => in_text = current.is_some(),
                _ => {}
            },
            Event::Empty(e) if e.local_name().as_ref() == b"p" => paragraphs.push(String::new()),
            Event::Text(t) => {
                if in_text && let Some(text) = current.as_mut() {
                    text.push_str(&t.unescape().map_err(|e| e.to_string())?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    if let Some(text) = current.take() {
                        paragraphs.push(text.trim().to_string());
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn get_attr(e: &BytesStart, name: &[u8]) -> ParseResult<Option<String>> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        if attr.key.local_name().as_ref() == name {
            let value = attr.unescape_value().map_err(|err| err.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "docx_tests.rs"]
mod tests;
