use crate::extract;
use crate::input::InputFile;

/// Concatenate all inputs as plain text.
///
/// Each file's content is followed by an end-of-file marker naming it; a
/// file that cannot be read contributes an inline error note instead. Never
/// fails, and never produces empty output for a non-empty input list.
pub fn merge_as_txt(files: &[InputFile]) -> Vec<u8> {
    let mut out = String::new();

    for file in files {
        match extract::read_content(file) {
            Ok(content) => {
                out.push_str(&content);
                out.push_str(&format!("\n\n--- End of File: {} ---\n\n", file.name));
            }
            Err(e) => {
                log::warn!("could not process {}: {e}", file.name);
                out.push_str(&format!(
                    "\n\n--- Could not process file: {} (Error: {e}) ---\n\n",
                    file.name
                ));
            }
        }
    }

    out.into_bytes()
}
