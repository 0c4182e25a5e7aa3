use pulldown_cmark::{Parser, html};
use scraper::{Html, Selector};

use super::csv::{Table, parse_table};
use crate::extract::{self, ExtractError};
use crate::input::InputFile;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Merged Document</title>
<style>
body { font-family: sans-serif; margin: 2em; }
table { border-collapse: collapse; width: 100%; }
th, td { border: 1px solid #dddddd; text-align: left; padding: 8px; }
th { background-color: #f2f2f2; }
hr { margin: 2em 0; border: 1px solid #ccc; }
pre { background-color: #f5f5f5; padding: 1em; white-space: pre-wrap; word-wrap: break-word; }
</style>
</head>
<body>
"#;

const DOCUMENT_TAIL: &str = "
</body>
</html>
";

/// Assemble all inputs into one self-contained HTML document.
///
/// Every file becomes a fragment; fragments are joined with `<hr>` and
/// wrapped in a document shell with a fixed embedded stylesheet. A file that
/// fails to convert contributes an inline error note, so this never fails.
pub fn merge_as_html(files: &[InputFile]) -> Vec<u8> {
    let fragments: Vec<String> = files
        .iter()
        .map(|file| match fragment_for(file) {
            Ok(fragment) => fragment,
            Err(e) => {
                log::warn!("could not convert {}: {e}", file.name);
                format!(
                    "<hr><p>Could not process file: {} (Error: {})</p>",
                    escape_html(&file.name),
                    escape_html(&e.to_string())
                )
            }
        })
        .collect();

    let mut out = String::from(DOCUMENT_HEAD);
    out.push_str(&fragments.join("<hr>"));
    out.push_str(DOCUMENT_TAIL);
    out.into_bytes()
}

/// Convert a single file into an HTML fragment.
fn fragment_for(file: &InputFile) -> Result<String, ExtractError> {
    match file.extension().as_str() {
        "html" => Ok(body_inner_html(&extract::decode_text(&file.data))),
        "md" => {
            let source = extract::decode_text(&file.data);
            let mut rendered = String::new();
            html::push_html(&mut rendered, Parser::new(&source));
            Ok(rendered)
        }
        "csv" => {
            let content = extract::decode_text(&file.data);
            Ok(table_html(&parse_table(&content)?))
        }
        "txt" => Ok(format!(
            "<pre>{}</pre>",
            escape_html(&extract::decode_text(&file.data))
        )),
        "docx" => Ok(paragraphs_html(&extract::docx_text(&file.data)?)),
        "pdf" => Ok(paragraphs_html(&extract::pdf_text(&file.data)?)),
        // Unrecognized extensions contribute an empty fragment.
        _ => Ok(String::new()),
    }
}

/// Re-extract the inner content of a parsed document's body element.
fn body_inner_html(content: &str) -> String {
    let document = Html::parse_document(content);
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    document
        .select(&selector)
        .next()
        .map(|body| body.inner_html())
        .unwrap_or_default()
}

/// Render extracted text as a run of paragraphs, one per line.
fn paragraphs_html(text: &str) -> String {
    let body = escape_html(text.trim_end_matches('\n')).replace('\n', "</p><p>");
    format!("<div><p>{body}</p></div>")
}

/// Render a parsed CSV table as an HTML table.
fn table_html(table: &Table) -> String {
    let mut out = String::from("<table>\n<thead><tr>");
    for cell in &table.header {
        out.push_str("<th>");
        out.push_str(&escape_html(cell));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&escape_html(cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>");
    out
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
