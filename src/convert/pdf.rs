use lopdf::{Document, Object, ObjectId, dictionary};

use super::{merge_as_html, typeset};
use crate::error::Result;
use crate::input::InputFile;

/// Merge all inputs into a single PDF.
///
/// Two-phase algorithm:
/// 1. Files that already are PDFs contribute their pages directly, in file
///    order then page order. An unreadable PDF is demoted to the second
///    phase so its text can still be salvaged.
/// 2. Everything else is rendered through the HTML converter and typeset
///    into additional pages, appended after all original PDF pages. If
///    typesetting fails those files contribute nothing.
///
/// The phase split means original PDF pages always precede synthesized
/// pages, regardless of upload order.
pub fn merge_as_pdf(files: &[InputFile]) -> Result<Vec<u8>> {
    let (pdfs, mut rest): (Vec<InputFile>, Vec<InputFile>) = files
        .iter()
        .cloned()
        .partition(|f| f.extension() == "pdf");

    let mut assembler = PdfAssembler::new();

    for file in pdfs {
        match Document::load_mem(&file.data) {
            Ok(document) => assembler.append_document(document)?,
            Err(e) => {
                log::warn!("unreadable PDF {}, salvaging as text: {e}", file.name);
                rest.push(file);
            }
        }
    }

    if !rest.is_empty() {
        let html = merge_as_html(&rest);
        match typeset::html_to_pdf(&html) {
            Ok(document) => assembler.append_document(document)?,
            Err(e) => {
                log::warn!("could not typeset non-PDF inputs, skipping them: {e}");
            }
        }
    }

    assembler.into_bytes()
}

/// Accumulates pages from multiple documents into one output document.
struct PdfAssembler {
    document: Document,
    pages_id: ObjectId,
}

impl PdfAssembler {
    /// Start with an empty catalog and page tree.
    fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => Object::Array(Vec::new()),
                "Count" => Object::Integer(0),
            }),
        );
        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        document.trailer.set("Root", Object::Reference(catalog_id));

        Self { document, pages_id }
    }

    /// Append every page of `incoming`, in page order.
    fn append_document(&mut self, mut incoming: Document) -> Result<()> {
        // Renumber first so object ids cannot collide with what we hold.
        incoming.renumber_objects_with(self.document.max_id + 1);
        self.document.max_id = incoming.max_id;

        let page_ids: Vec<ObjectId> = incoming.get_pages().into_values().collect();
        self.document.objects.extend(incoming.objects);

        // Reparent the imported pages onto our page tree.
        for &page_id in &page_ids {
            if let Ok(page) = self
                .document
                .get_object_mut(page_id)
                .and_then(Object::as_dict_mut)
            {
                page.set("Parent", Object::Reference(self.pages_id));
            }
        }

        let pages = self
            .document
            .get_object_mut(self.pages_id)?
            .as_dict_mut()?;

        let kids = pages.get_mut(b"Kids")?.as_array_mut()?;
        for &page_id in &page_ids {
            kids.push(Object::Reference(page_id));
        }

        let count = pages.get(b"Count")?.as_i64()?;
        pages.set("Count", Object::Integer(count + page_ids.len() as i64));

        Ok(())
    }

    /// Serialize the accumulated document.
    fn into_bytes(mut self) -> Result<Vec<u8>> {
        self.document.renumber_objects();
        self.document.compress();

        let mut bytes = Vec::new();
        self.document.save_to(&mut bytes)?;
        Ok(bytes)
    }
}
