//! End-to-end merges through `process_files`, one scenario per output format.

use doccat::{InputFile, OutputFormat, process_files};

use crate::common::{docx_with_paragraphs, pdf_page_count, pdf_page_text, pdf_with_pages};

#[test]
fn txt_batch_merges_with_end_markers() {
    let files = vec![
        InputFile::new("first.txt", b"alpha content".to_vec()),
        InputFile::new("second.txt", b"beta content".to_vec()),
    ];

    let outcome = process_files(&files, false).unwrap();
    assert_eq!(outcome.format, OutputFormat::Txt);
    assert_eq!(outcome.filename, "merged_document.txt");

    let text = String::from_utf8(outcome.data.unwrap()).unwrap();
    assert!(text.contains("alpha content"));
    assert!(text.contains("beta content"));
    assert_eq!(text.matches("--- End of File: first.txt ---").count(), 1);
    assert_eq!(text.matches("--- End of File: second.txt ---").count(), 1);
}

#[test]
fn csv_batch_stacks_rows() {
    let files = vec![
        InputFile::new("a.csv", b"id,name\n1,one\n2,two\n".to_vec()),
        InputFile::new("b.csv", b"id,name\n3,three\n4,four\n".to_vec()),
    ];

    let outcome = process_files(&files, false).unwrap();
    assert_eq!(outcome.format, OutputFormat::Csv);
    assert!(outcome.warning.is_none());

    let text = String::from_utf8(outcome.data.unwrap()).unwrap();
    // One header plus four data rows.
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().next().unwrap().contains("id,name"));
}

#[test]
fn mixed_rich_batch_promotes_to_html() {
    let files = vec![
        InputFile::new("notes.md", b"# Heading\n\nSome *markdown*.".to_vec()),
        InputFile::new("table.csv", b"x,y\n1,2\n".to_vec()),
        InputFile::new("plain.txt", b"raw text".to_vec()),
    ];

    let outcome = process_files(&files, false).unwrap();
    assert_eq!(outcome.format, OutputFormat::Html);

    let html = String::from_utf8(outcome.data.unwrap()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1>Heading</h1>"));
    assert!(html.contains("<th>x</th>"));
    assert!(html.contains("<pre>raw text</pre>"));
    // Three fragments, two separators between them.
    assert_eq!(html.matches("<hr>").count(), 2);
}

#[test]
fn docx_promotes_to_html_with_paragraphs() {
    let files = vec![
        InputFile::new("doc.docx", docx_with_paragraphs(&["first para", "second para"])),
        InputFile::new("plain.txt", b"raw".to_vec()),
    ];

    let outcome = process_files(&files, false).unwrap();
    assert_eq!(outcome.format, OutputFormat::Html);

    let html = String::from_utf8(outcome.data.unwrap()).unwrap();
    assert!(html.contains("<p>first para</p>"));
    assert!(html.contains("<p>second para</p>"));
}

#[test]
fn two_pdfs_merge_page_for_page_in_order() {
    let files = vec![
        InputFile::new("a.pdf", pdf_with_pages(&["page one of a"])),
        InputFile::new("b.pdf", pdf_with_pages(&["page one of b"])),
    ];

    let outcome = process_files(&files, false).unwrap();
    assert_eq!(outcome.format, OutputFormat::Pdf);

    let data = outcome.data.unwrap();
    assert_eq!(pdf_page_count(&data), 2);
    assert!(pdf_page_text(&data, 1).contains("page one of a"));
    assert!(pdf_page_text(&data, 2).contains("page one of b"));
}

#[test]
fn pdf_plus_text_puts_original_pages_first() {
    // The text file comes first in upload order, but the two-phase merge
    // still puts the real PDF's pages ahead of synthesized ones.
    let files = vec![
        InputFile::new("notes.txt", b"synthesized from text".to_vec()),
        InputFile::new("a.pdf", pdf_with_pages(&["the original page"])),
    ];

    let outcome = process_files(&files, false).unwrap();
    let data = outcome.data.unwrap();

    assert!(pdf_page_count(&data) >= 2);
    assert!(pdf_page_text(&data, 1).contains("the original page"));
}

#[test]
fn force_pdf_converts_a_plain_text_batch() {
    let files = vec![InputFile::new("only.txt", b"force me into pdf".to_vec())];

    let outcome = process_files(&files, true).unwrap();
    assert_eq!(outcome.format, OutputFormat::Pdf);
    assert_eq!(outcome.filename, "merged_document.pdf");

    let data = outcome.data.unwrap();
    assert!(pdf_page_count(&data) >= 1);
    assert!(pdf_page_text(&data, 1).contains("force me into pdf"));
}

#[test]
fn txt_csv_and_html_outputs_are_byte_identical_across_runs() {
    let txt = vec![InputFile::new("a.txt", b"alpha".to_vec())];
    let csv = vec![InputFile::new("a.csv", b"h\n1\n".to_vec())];
    let html = vec![InputFile::new("a.md", b"*hi*".to_vec())];

    for files in [&txt, &csv, &html] {
        let first = process_files(files, false).unwrap().data;
        let second = process_files(files, false).unwrap().data;
        assert_eq!(first, second);
    }
}
