use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::table::EncodingRecord;

/// Render the table as one initializer entry per record.
///
/// Each entry has the shape
/// ` { 0x<mask>, 0x<signature>, &<Namespace>::Execute<Mnemonic> },`
/// with lowercase hex and no comma after the final entry. The output is a
/// fragment for an externally defined aggregate initializer; no enclosing
/// braces or declarations are emitted.
pub fn render(records: &[EncodingRecord], namespace: &str) -> String {
    let mut out = String::new();
    for (idx, record) in records.iter().enumerate() {
        let separator = if idx + 1 < records.len() { "," } else { "" };
        out.push_str(&format!(
            " {{ 0x{:x}, 0x{:x}, &{}::Execute{} }}{}\n",
            record.mask, record.signature, namespace, record.mnemonic, separator
        ));
    }
    out
}

/// Write `contents` to `path` all-or-nothing.
///
/// The contents go to a sibling temporary file first and only replace the
/// destination on success, so a failed run never leaves a partial table.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let mut tmp_name = OsString::from(path.as_os_str());
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    match fs::write(&tmp, contents) {
        Ok(()) => fs::rename(&tmp, path),
        Err(err) => {
            let _ = fs::remove_file(&tmp);
            Err(err)
        }
    }
}
