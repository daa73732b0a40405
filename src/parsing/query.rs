//! Query sequence loading.
//!
//! The query can come from a plain-text file (bare sequence, possibly
//! wrapped over several lines), a FASTA file (the first record is used), or
//! stdin via `-`. Whitespace is stripped in all cases; the alphabet is not
//! validated here, the service rejects sequences it cannot interpret.

use std::io::Read;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no sequence found in {0}")]
    Empty(String),
}

/// Load a query sequence from a file path, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `QueryError::Io` if the input cannot be read, or
/// `QueryError::Empty` if it contains no sequence characters.
pub fn load_query(path: &Path) -> Result<String, QueryError> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let sequence = extract_sequence(&text);
    if sequence.is_empty() {
        return Err(QueryError::Empty(path.display().to_string()));
    }
    Ok(sequence)
}

/// Extract a single sequence from raw input text.
///
/// FASTA input (first non-empty line starts with `>`) yields the first
/// record only; anything else is treated as a bare sequence. Line breaks
/// and surrounding whitespace are dropped either way.
#[must_use]
pub fn extract_sequence(text: &str) -> String {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let Some(first) = lines.next() else {
        return String::new();
    };

    if let Some(defline) = first.strip_prefix('>') {
        tracing::debug!("reading FASTA record {}", defline.split_whitespace().next().unwrap_or(""));
        // Concatenate sequence lines up to the next record
        lines.take_while(|l| !l.starts_with('>')).collect()
    } else {
        std::iter::once(first).chain(lines).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_sequence_single_line() {
        assert_eq!(extract_sequence("ACGTACGT\n"), "ACGTACGT");
    }

    #[test]
    fn test_bare_sequence_wrapped() {
        assert_eq!(extract_sequence("ACGT\nACGT\n  TTTT  \n"), "ACGTACGTTTTT");
    }

    #[test]
    fn test_fasta_first_record() {
        let text = ">query1 CFTR fragment\nGTAGGTCTTT\nGGCATTAGGA\n>query2\nAAAA\n";
        assert_eq!(extract_sequence(text), "GTAGGTCTTTGGCATTAGGA");
    }

    #[test]
    fn test_fasta_defline_only() {
        assert_eq!(extract_sequence(">empty record\n"), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_sequence(""), "");
        assert_eq!(extract_sequence("  \n\n"), "");
    }
}
