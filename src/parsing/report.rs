//! Identity extraction from BLAST text reports.
//!
//! A completed `FORMAT_TYPE=Text` report lists one or more alignments, each
//! with a statistics line:
//!
//! ```text
//!  Score = 1234 bits (668),  Expect = 0.0
//!  Identities = 45/50 (90%), Gaps = 0/50 (0%)
//! ```
//!
//! Only the first `Identities` line is extracted; the report lists hits in
//! descending score order, so the first line describes the best alignment.
//! A report with no such line (no hits, or the query produced nothing above
//! threshold) is a normal outcome, not an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::AlignmentIdentity;

static IDENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Identities = (\d+)/(\d+) \((\d+)%\)").expect("identity pattern is valid")
});

/// Scan report text for the first `Identities = m/n (p%)` line.
///
/// Returns `None` when no line matches, and also when a matched number is
/// too large to represent (digit runs beyond `u64`/`u32` range), which no
/// real report produces.
#[must_use]
pub fn scan_identities(report: &str) -> Option<AlignmentIdentity> {
    let caps = IDENTITY_RE.captures(report)?;

    let matched_bases: u64 = caps[1].parse().ok()?;
    let total_bases: u64 = caps[2].parse().ok()?;
    let percent_identity: u32 = caps[3].parse().ok()?;

    Some(AlignmentIdentity::new(
        matched_bases,
        total_bases,
        percent_identity,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_line_extracted() {
        let report = "\
BLASTN 2.16.0+

Query= test
Length=50

> NR_046654.1 Homo sapiens RNA
 Score = 84.2 bits (92),  Expect = 2e-15
 Identities = 45/50 (90%), Gaps = 0/50 (0%)
 Strand=Plus/Plus
";
        let identity = scan_identities(report).unwrap();
        assert_eq!(identity.matched_bases, 45);
        assert_eq!(identity.total_bases, 50);
        assert_eq!(identity.percent_identity, 90);
    }

    #[test]
    fn test_first_alignment_wins() {
        let report = "\
 Identities = 60/65 (92%), Gaps = 1/65 (1%)
 ...
 Identities = 30/65 (46%), Gaps = 10/65 (15%)
";
        let identity = scan_identities(report).unwrap();
        assert_eq!(identity.matched_bases, 60);
        assert_eq!(identity.total_bases, 65);
        assert_eq!(identity.percent_identity, 92);
    }

    #[test]
    fn test_no_hits_report() {
        let report = "Query= test\n\n***** No hits found *****\n";
        assert!(scan_identities(report).is_none());
    }

    #[test]
    fn test_empty_report() {
        assert!(scan_identities("").is_none());
    }

    #[test]
    fn test_values_read_literally() {
        // The percentage is taken from the text, never recomputed, even when
        // it cannot be right for the printed ratio.
        let identity = scan_identities("Identities = 10/50 (99%)").unwrap();
        assert_eq!(identity.matched_bases, 10);
        assert_eq!(identity.total_bases, 50);
        assert_eq!(identity.percent_identity, 99);
        assert!(!identity.is_consistent());
    }

    #[test]
    fn test_synthetic_reports_keep_ratio_invariant() {
        // Realistic reports never print more matches than aligned bases
        let fixtures = [(1u64, 1u64), (45, 50), (60, 65), (100, 100), (0, 37)];
        for (m, n) in fixtures {
            let pct = if n == 0 { 0 } else { m * 100 / n };
            let report = format!(" Identities = {m}/{n} ({pct}%), Gaps = 0/{n} (0%)");
            let identity = scan_identities(&report).unwrap();
            assert!(identity.matched_bases <= identity.total_bases);
        }
    }
}
