use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Read game lines from a file, or from stdin when `path` is `None` or "-".
///
/// Bytes that are not valid UTF-8 are replaced line by line, so one bad line
/// never costs the rest of the input.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file at {}", path.display()))?;
            read_lossy_lines(BufReader::new(file))
                .with_context(|| format!("Failed to read input file at {}", path.display()))
        }
        _ => read_lossy_lines(io::stdin().lock()).context("Failed to read game results from stdin"),
    }
}

/// Split on `\n`, drop a trailing `\r` and a leading byte-order mark, and
/// decode each line on its own.
pub fn read_lossy_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!(line = lines.len() + 1, "Replaced invalid UTF-8 in input line");
        }

        let line = if lines.is_empty() {
            line.strip_prefix('\u{feff}').unwrap_or(&*line).to_string()
        } else {
            line.into_owned()
        };
        lines.push(line);
    }

    Ok(lines)
}

/// Write rendered output to a file atomically, with a trailing newline
pub fn write_output(path: &Path, rendered: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    writeln!(file, "{}", rendered)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save output to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringConfig;
    use std::env;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn test_read_lines_from_file() {
        let temp_path = env::temp_dir().join("league_table_test_input.txt");
        fs::write(&temp_path, "Lions 3, Snakes 3\r\nTarantulas 1, FC Awesome 0\n\n").unwrap();

        let lines = read_lines(Some(&temp_path)).unwrap();
        assert_eq!(
            lines,
            vec!["Lions 3, Snakes 3", "Tarantulas 1, FC Awesome 0", ""]
        );

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_read_lines_missing_file() {
        let temp_path = env::temp_dir().join("league_table_test_no_such_input.txt");
        let _ = fs::remove_file(&temp_path);

        let err = read_lines(Some(&temp_path)).unwrap_err();
        assert!(err.to_string().contains("Failed to open input file"));
    }

    #[test]
    fn test_read_lines_survives_invalid_utf8() {
        let temp_path = env::temp_dir().join("league_table_test_bad_utf8.txt");
        fs::write(&temp_path, b"Lions 3, Snakes 1\nBad\xff 1, X 2\nBears 0, Wolves 0\n").unwrap();

        let lines = read_lines(Some(&temp_path)).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Lions 3, Snakes 1");
        assert_eq!(lines[1], "Bad\u{fffd} 1, X 2");
        assert_eq!(lines[2], "Bears 0, Wolves 0");

        let standings = crate::compute_standings(&lines, &ScoringConfig::default());
        assert_eq!(standings.games, 3);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_leading_bom_is_stripped() {
        let input = "\u{feff}Lions 3, Snakes 1\nLions 1, Snakes 1\n";
        let lines = read_lossy_lines(Cursor::new(input.as_bytes())).unwrap();
        assert_eq!(lines[0], "Lions 3, Snakes 1");

        let standings = crate::compute_standings(&lines, &ScoringConfig::default());
        assert_eq!(standings.ranking.len(), 2);
        assert_eq!(standings.ranking[0].team, "Lions");
        assert_eq!(standings.ranking[0].points, 4);
    }

    #[test]
    fn test_lossy_lines_without_trailing_newline() {
        let lines = read_lossy_lines(Cursor::new(&b"a 1, b 2\r\nc 3, d 4"[..])).unwrap();
        assert_eq!(lines, vec!["a 1, b 2", "c 3, d 4"]);
    }

    #[test]
    fn test_write_output_roundtrip() {
        let temp_path = env::temp_dir().join("league_table_test_output.txt");
        let _ = fs::remove_file(&temp_path);

        write_output(&temp_path, "1. Lions, 3 pts").unwrap();
        assert_eq!(fs::read_to_string(&temp_path).unwrap(), "1. Lions, 3 pts\n");

        let _ = fs::remove_file(&temp_path);
    }
}
