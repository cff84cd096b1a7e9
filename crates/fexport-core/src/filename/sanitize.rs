//! On-disk filename sanitization.

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Makes a resolved filename safe to join onto a download directory.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Trims surrounding whitespace
/// - Limits length to 255 bytes, keeping the extension when it fits
///
/// Returns `None` when nothing usable is left (empty, `.` or `..`).
pub fn sanitize_for_disk(name: &str) -> Option<String> {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();

    let trimmed = replaced.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return None;
    }
    if trimmed.len() <= NAME_MAX {
        return Some(trimmed.to_string());
    }

    let (stem, ext) = match trimmed.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && ext.len() < 16 => (stem, Some(ext)),
        _ => (trimmed, None),
    };
    let budget = NAME_MAX - ext.map_or(0, |e| e.len() + 1);
    let mut take = budget.min(stem.len());
    while take > 0 && !stem.is_char_boundary(take) {
        take -= 1;
    }
    let mut out = stem[..take].to_string();
    if let Some(ext) = ext {
        out.push('.');
        out.push_str(ext);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_unchanged() {
        assert_eq!(sanitize_for_disk("report.pdf").as_deref(), Some("report.pdf"));
        assert_eq!(sanitize_for_disk("real name.dat").as_deref(), Some("real name.dat"));
        assert_eq!(sanitize_for_disk("文档.pdf").as_deref(), Some("文档.pdf"));
    }

    #[test]
    fn removes_slash_and_backslash() {
        assert_eq!(sanitize_for_disk("a/b\\c.txt").as_deref(), Some("a_b_c.txt"));
        assert_eq!(
            sanitize_for_disk("../../etc/passwd").as_deref(),
            Some(".._.._etc_passwd")
        );
    }

    #[test]
    fn control_chars() {
        assert_eq!(
            sanitize_for_disk("file\x00name\n.txt").as_deref(),
            Some("file_name_.txt")
        );
    }

    #[test]
    fn reserved_and_empty() {
        assert_eq!(sanitize_for_disk(""), None);
        assert_eq!(sanitize_for_disk("   "), None);
        assert_eq!(sanitize_for_disk("."), None);
        assert_eq!(sanitize_for_disk(".."), None);
    }

    #[test]
    fn long_names_keep_extension() {
        let long = format!("{}.pdf", "é".repeat(200));
        let out = sanitize_for_disk(&long).unwrap();
        assert!(out.len() <= NAME_MAX);
        assert!(out.ends_with(".pdf"));
    }
}
