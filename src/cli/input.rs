//! User input utilities for interactive CLI prompts
//!
//! Provides the interactive data file picker: a bounded retry loop over
//! a line-reading abstraction, so selection logic is testable without a
//! terminal attached.

use crate::constants::MAX_PROMPT_ATTEMPTS;
use crate::{Error, Result, reader};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// List the files in a directory and prompt the user to select one
///
/// Returns the path to the selected file. Fails when the directory
/// cannot be listed, contains no files, or the user exhausts the
/// allowed attempts.
pub fn choose_file_in_dir(directory: &Path) -> Result<PathBuf> {
    let files = reader::list_files(directory)?;
    let stdin = io::stdin();
    let selected = prompt_select_file(&files, stdin.lock(), MAX_PROMPT_ATTEMPTS)?;
    println!(
        "Thank you - you have selected the data file: {}",
        selected.display()
    );
    Ok(selected)
}

/// Prompt for a file selection by item number over any line source
///
/// Retries on invalid input up to `attempts` times; a closed input
/// stream or exhausted attempts produce an [`Error::Input`].
pub fn prompt_select_file<R: BufRead>(
    files: &[PathBuf],
    mut input: R,
    attempts: usize,
) -> Result<PathBuf> {
    print!("Please choose a file from the following list (key in the item number): ");
    for (i, file) in files.iter().enumerate() {
        print!("{}.{};  ", i + 1, display_name(file));
    }
    println!();
    flush_stdout()?;

    for _ in 0..attempts {
        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .map_err(|e| Error::input(format!("Failed to read selection: {}", e)))?;
        if read == 0 {
            return Err(Error::input("Input closed before a file was selected"));
        }

        match line.trim().parse::<usize>() {
            Ok(item) if (1..=files.len()).contains(&item) => {
                return Ok(files[item - 1].clone());
            }
            Ok(_) => {
                println!(
                    "The value you entered was not valid: please enter a number from 1 to {}",
                    files.len()
                );
            }
            Err(_) => {
                println!(
                    "The value you entered was not an integer: please try entering the item number again"
                );
            }
        }
        flush_stdout()?;
    }

    Err(Error::input(format!(
        "No valid selection after {} attempts",
        attempts
    )))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn flush_stdout() -> Result<()> {
    io::stdout()
        .flush()
        .map_err(|e| Error::input(format!("Failed to flush stdout: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_files() -> Vec<PathBuf> {
        vec![
            PathBuf::from("/data/a.csv"),
            PathBuf::from("/data/b.csv"),
            PathBuf::from("/data/c.csv"),
        ]
    }

    #[test]
    fn test_valid_selection() {
        let selected = prompt_select_file(&sample_files(), Cursor::new("2\n"), 3).unwrap();
        assert_eq!(selected, PathBuf::from("/data/b.csv"));
    }

    #[test]
    fn test_retry_then_success() {
        // Out of range, then not a number, then valid
        let input = Cursor::new("9\nabc\n3\n");
        let selected = prompt_select_file(&sample_files(), input, 5).unwrap();
        assert_eq!(selected, PathBuf::from("/data/c.csv"));
    }

    #[test]
    fn test_attempts_exhausted() {
        let input = Cursor::new("0\n99\nnope\n");
        let err = prompt_select_file(&sample_files(), input, 3).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }

    #[test]
    fn test_closed_input() {
        let err = prompt_select_file(&sample_files(), Cursor::new(""), 3).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }

    #[test]
    fn test_whitespace_tolerated() {
        let selected = prompt_select_file(&sample_files(), Cursor::new("  1  \n"), 3).unwrap();
        assert_eq!(selected, PathBuf::from("/data/a.csv"));
    }
}
