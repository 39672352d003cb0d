use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use super::RawImport;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read a source file as text.
///
/// UTF-8 is preferred (a leading BOM is dropped); anything that is not valid
/// UTF-8 is decoded byte-for-byte as Latin-1, which cannot fail. Only I/O
/// errors are reported.
pub fn read_source(file_path: &Path) -> io::Result<String> {
    let file = File::open(file_path)?;
    let file_size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut bytes = Vec::with_capacity(file_size);
    reader.read_to_end(&mut bytes)?;

    Ok(decode_source(bytes))
}

pub fn decode_source(bytes: Vec<u8>) -> String {
    let bytes = if bytes.starts_with(UTF8_BOM) {
        bytes[UTF8_BOM.len()..].to_vec()
    } else {
        bytes
    };
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| char::from(b)).collect(),
    }
}

/// Keeps the first occurrence of every raw reference text.
pub struct ImportCollector {
    seen: HashSet<String>,
    imports: Vec<RawImport>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            imports: Vec::new(),
        }
    }

    pub fn push(&mut self, import: RawImport) {
        if self.seen.insert(import.reference.as_str().to_string()) {
            self.imports.push(import);
        }
    }

    pub fn finish(self) -> Vec<RawImport> {
        self.imports
    }
}

impl Default for ImportCollector {
    fn default() -> Self {
        Self::new()
    }
}
