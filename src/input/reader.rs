use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

use crate::translation::TextInput;

/// The service rejects request bodies much larger than this.
pub const MAX_INPUT_SIZE: usize = 100 * 1024;

pub struct InputReader;

impl InputReader {
    /// Collects the text to send.
    ///
    /// Positional arguments win over `file`/stdin. One argument is sent as a
    /// single string, several as a list. Text read from a file or stdin is a
    /// single string unless `lines` is set, in which case every non-blank
    /// line becomes its own entry.
    pub fn texts(mut args: Vec<String>, file: Option<&str>, lines: bool) -> Result<TextInput> {
        let input = match args.len() {
            0 => {
                let content = Self::read(file)?;
                if lines {
                    Self::split_lines(&content)
                } else {
                    TextInput::Single(content.trim_end().to_string())
                }
            }
            1 => TextInput::Single(args.remove(0)),
            _ => TextInput::Many(args),
        };

        if input.is_empty() || matches!(&input, TextInput::Single(s) if s.is_empty()) {
            bail!("Error: Input is empty");
        }

        Ok(input)
    }

    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn split_lines(content: &str) -> TextInput {
        TextInput::Many(
            content
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} KB) exceeds maximum allowed size (100 KB).\n\n\
                 Consider splitting the file into smaller parts.",
                size as f64 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} KB) exceeds maximum allowed size (100 KB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn path(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }

    #[test]
    fn test_single_argument_is_single() {
        let input = InputReader::texts(vec!["Hello".to_string()], None, false).unwrap();
        assert_eq!(input, TextInput::Single("Hello".to_string()));
    }

    #[test]
    fn test_several_arguments_are_many() {
        let input =
            InputReader::texts(vec!["Hello".to_string(), "Bye".to_string()], None, false).unwrap();
        assert_eq!(
            input,
            TextInput::Many(vec!["Hello".to_string(), "Bye".to_string()])
        );
    }

    #[test]
    fn test_empty_argument_is_rejected() {
        let result = InputReader::texts(vec![String::new()], None, false);
        assert!(result.unwrap_err().to_string().contains("Input is empty"));
    }

    #[test]
    fn test_file_is_single_trimmed() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, World!").unwrap();

        let input = InputReader::texts(Vec::new(), Some(path(&temp_file)), false).unwrap();
        assert_eq!(input, TextInput::Single("Hello, World!".to_string()));
    }

    #[test]
    fn test_file_lines_skip_blank() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Hola\n\n  \nBonjour\n").unwrap();

        let input = InputReader::texts(Vec::new(), Some(path(&temp_file)), true).unwrap();
        assert_eq!(
            input,
            TextInput::Many(vec!["Hola".to_string(), "Bonjour".to_string()])
        );
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let temp_file = NamedTempFile::new().unwrap();

        assert!(InputReader::texts(Vec::new(), Some(path(&temp_file)), false).is_err());
        assert!(InputReader::texts(Vec::new(), Some(path(&temp_file)), true).is_err());
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(Some("/nonexistent/path/to/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_file_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "こんにちは世界！\n日本語テスト";
        write!(temp_file, "{content}").unwrap();

        let result = InputReader::read(Some(path(&temp_file))).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_file_exceeds_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_file.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let result = InputReader::read(Some(file_path.to_str().unwrap()));
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_file_at_max_size() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max_file.txt");
        fs::write(&file_path, "x".repeat(MAX_INPUT_SIZE)).unwrap();

        let result = InputReader::read(Some(file_path.to_str().unwrap())).unwrap();
        assert_eq!(result.len(), MAX_INPUT_SIZE);
    }
}
