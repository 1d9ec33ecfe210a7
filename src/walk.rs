use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Number of leading bytes inspected by the binary-content heuristic.
const BINARY_SNIFF_LEN: usize = 1024;

/// Collect the files to scan from a list of file/directory arguments.
///
/// Explicit file arguments pass through unconditionally; directories
/// recurse with the extension allow-list applied (an empty list admits
/// everything). Each directory's results are sorted with [`path_order`], so
/// a subdirectory's contents stay contiguous in the output. Paths already
/// seen are skipped; unreadable entries are reported to stderr and skipped.
pub fn discover_files(paths: &[PathBuf], extensions: &[String]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            eprintln!("Error: path not found: {}", path.display());
            continue;
        }

        if path.is_dir() {
            let mut discovered = Vec::new();
            for entry in WalkDir::new(path).follow_links(false) {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        if extension_allowed(entry.path(), extensions) {
                            discovered.push(entry.into_path());
                        }
                    }
                    Ok(_) => {}
                    Err(err) => eprintln!("Warning: cannot read directory entry: {}", err),
                }
            }
            discovered.sort_by(|a, b| path_order(a, b));
            for file in discovered {
                push_unique(file, &mut seen, &mut files);
            }
        } else {
            push_unique(path.clone(), &mut seen, &mut files);
        }
    }

    files
}

/// Lexicographic path comparison with the separator ordered below every
/// other byte, so `dir/` entries sort before `dir2` and a directory's
/// contents group together.
pub fn path_order(a: &Path, b: &Path) -> Ordering {
    fn rank(byte: u8) -> u8 {
        match byte {
            b'/' | b'\\' => 0,
            other => other,
        }
    }

    let a = a.to_string_lossy();
    let b = b.to_string_lossy();
    a.bytes().map(rank).cmp(b.bytes().map(rank))
}

/// First-1024-bytes heuristic: any control byte other than tab, newline or
/// carriage return marks the file as binary and excludes it from scanning.
pub fn is_probably_binary(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .take(BINARY_SNIFF_LEN)
        .any(|&b| (b < 0x20 || b == 0x7F) && !matches!(b, b'\t' | b'\n' | b'\r'))
}

fn extension_allowed(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn push_unique(path: PathBuf, seen: &mut HashSet<PathBuf>, files: &mut Vec<PathBuf>) {
    let key = path.canonicalize().unwrap_or_else(|_| path.clone());
    if seen.insert(key) {
        files.push(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_binary_detection() {
        assert!(is_probably_binary(b"text with a NUL \x00 byte"));
        assert!(is_probably_binary(b"\x01\x02\x03"));
        assert!(!is_probably_binary(b"plain text\twith tabs\nand lines\r\n"));
        assert!(!is_probably_binary(b""));
    }

    #[test]
    fn test_binary_detection_only_sniffs_prefix() {
        let mut content = vec![b'a'; BINARY_SNIFF_LEN];
        content.push(0x00);
        assert!(!is_probably_binary(&content));
    }

    #[test]
    fn test_path_order_groups_directory_contents() {
        let mut paths = vec![
            PathBuf::from("src0.txt"),
            PathBuf::from("src/zeta.txt"),
            PathBuf::from("src/alpha.txt"),
            PathBuf::from("src.txt"),
        ];
        paths.sort_by(|a, b| path_order(a, b));
        assert_eq!(
            paths,
            vec![
                PathBuf::from("src/alpha.txt"),
                PathBuf::from("src/zeta.txt"),
                PathBuf::from("src.txt"),
                PathBuf::from("src0.txt"),
            ]
        );
    }

    #[test]
    fn test_extension_filtering() {
        let extensions = vec!["php".to_string()];
        assert!(extension_allowed(Path::new("index.php"), &extensions));
        assert!(extension_allowed(Path::new("INDEX.PHP"), &extensions));
        assert!(!extension_allowed(Path::new("notes.txt"), &extensions));
        assert!(!extension_allowed(Path::new("Makefile"), &extensions));
        assert!(extension_allowed(Path::new("anything.bin"), &[]));
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("b.php"), "x").unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        fs::write(dir.path().join("sub").join("a.php"), "x").unwrap();

        let files = discover_files(
            &[dir.path().to_path_buf()],
            &["php".to_string()],
        );
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![PathBuf::from("b.php"), PathBuf::from("sub/a.php")]
        );
    }

    #[test]
    fn test_discover_deduplicates() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.php");
        fs::write(&file, "x").unwrap();

        let files = discover_files(&[file.clone(), file.clone()], &[]);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_explicit_files_bypass_extension_filter() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "x").unwrap();

        let files = discover_files(&[file.clone()], &["php".to_string()]);
        assert_eq!(files, vec![file]);
    }
}
