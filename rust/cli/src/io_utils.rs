//! File I/O utilities for reading simulator logs and preparing output paths.
//!
//! Logs may be plain text or Zstandard-compressed (`.zst`); a leading UTF-8
//! BOM is removed either way.

/// Read a text file with automatic .zst decompression detection.
///
/// # Example
///
/// ```rust,no_run
/// # use tricklog_cli::io_utils::read_text_auto;
///
/// let content = read_text_auto("games.log").unwrap();
/// let compressed = read_text_auto("games.log.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(comp.as_slice()).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Ensure the parent directory of `path` exists, creating it if needed.
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
