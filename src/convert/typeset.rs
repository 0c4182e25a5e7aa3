//! Plain-text PDF typesetting for the salvage path of the PDF converter.
//!
//! There is no full HTML layout engine here: the HTML document produced by
//! the HTML converter is flattened to text blocks, wrapped to a fixed
//! measure, and paginated onto A4 pages using the built-in Helvetica font.
//! Styling and images do not survive the trip.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const FONT_SIZE: f32 = 11.0;
const LEADING: f32 = 14.0;
const MEASURE_CHARS: usize = 90;
const LINES_PER_PAGE: usize = 53;

const RULE_LINE: &str = "----------------------------------------";

/// Elements that force a line break around their content.
const BLOCK_TAGS: &[&str] = &[
    "p",
    "div",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "li",
    "ul",
    "ol",
    "table",
    "thead",
    "tbody",
    "tr",
    "pre",
    "blockquote",
];

/// Typeset an HTML document into a paginated PDF.
pub(crate) fn html_to_pdf(html: &[u8]) -> Result<Document, lopdf::Error> {
    let source = String::from_utf8_lossy(html);
    let lines = wrap_lines(&html_to_text(&source));
    typeset_document(&lines)
}

/// Flatten an HTML document to plain text with block-level line breaks.
pub(crate) fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };

    let mut out = String::new();
    collect_text(*body, &mut out);
    out
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(t) => out.push_str(&t.text),
            Node::Element(el) => match el.name() {
                "script" | "style" => {}
                "br" => out.push('\n'),
                "hr" => {
                    ensure_newline(out);
                    out.push_str(RULE_LINE);
                    out.push('\n');
                }
                "td" | "th" => {
                    collect_text(child, out);
                    if !out.ends_with(' ') && !out.ends_with('\n') {
                        out.push(' ');
                    }
                }
                name => {
                    let block = BLOCK_TAGS.contains(&name);
                    if block {
                        ensure_newline(out);
                    }
                    collect_text(child, out);
                    if block {
                        ensure_newline(out);
                    }
                }
            },
            _ => {}
        }
    }
}

fn ensure_newline(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Trim and word-wrap text to the page measure.
///
/// Runs of blank lines collapse to a single blank line; words longer than
/// the measure are split hard.
pub(crate) fn wrap_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut last_blank = true;

    for raw in text.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if !last_blank {
                lines.push(String::new());
                last_blank = true;
            }
            continue;
        }
        last_blank = false;
        wrap_line(trimmed, MEASURE_CHARS, &mut lines);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

fn wrap_line(line: &str, measure: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= measure {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= measure {
            current.push_str(word);
            current_len = word_len;
        } else {
            // Hard-split an over-long word.
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(measure) {
                out.push(chunk.iter().collect());
            }
        }
    }

    if current_len > 0 {
        out.push(current);
    }
}

/// Build a paginated PDF document from pre-wrapped lines.
///
/// Always produces at least one page, and is fully deterministic: no
/// timestamps, document ids, or other per-run state.
pub(crate) fn typeset_document(lines: &[String]) -> Result<Document, lopdf::Error> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => Object::Reference(font_id) },
    });

    let mut page_chunks: Vec<&[String]> = lines.chunks(LINES_PER_PAGE).collect();
    if page_chunks.is_empty() {
        page_chunks.push(&[]);
    }

    let mut kids = Vec::with_capacity(page_chunks.len());
    for chunk in &page_chunks {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
            Operation::new("TL", vec![LEADING.into()]),
            Operation::new(
                "Td",
                vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN - FONT_SIZE).into()],
            ),
        ];
        for (idx, line) in chunk.iter().enumerate() {
            if idx > 0 {
                operations.push(Operation::new("T*", vec![]));
            }
            if !line.is_empty() {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::String(
                        encode_winansi(line),
                        StringFormat::Literal,
                    )],
                ));
            }
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => Object::Reference(pages_id),
            "MediaBox" => Object::Array(vec![
                0.into(),
                0.into(),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ]),
            "Resources" => Object::Reference(resources_id),
            "Contents" => Object::Reference(content_id),
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => Object::Array(kids),
            "Count" => Object::Integer(page_count),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    Ok(doc)
}

/// Transcode a line to Windows-1252 for the base-font encoding.
///
/// Unmappable characters become `?`.
fn encode_winansi(line: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut buf = [0u8; 4];
    for c in line.chars() {
        let s: &str = c.encode_utf8(&mut buf);
        let (bytes, _, unmappable) = encoding_rs::WINDOWS_1252.encode(s);
        if unmappable || bytes.len() != 1 {
            out.push(b'?');
        } else {
            out.push(bytes[0]);
        }
    }
    out
}
