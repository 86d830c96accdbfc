//! Response segmentation for puzzle service output.
//!
//! The service answers with a single plain-text block that carries a puzzle
//! section, a solution section and, inside the solution, a letter to digit
//! mapping line:
//!
//! ```text
//! --- Puzzle ---
//! AB + C = DE
//! ...
//! --- Solution ---
//! 12 + 3 = 15
//! ...
//! Letter -> Digit mapping: {'A': 1, 'B': 2, ...}
//! ```
//!
//! [`segment`] splits that text into a [`ParsedResult`]. It never fails:
//! missing sections come back as empty strings.

use regex::Regex;
use tracing::debug;

use crate::models::ParsedResult;

/// Header line opening the puzzle section
pub const PUZZLE_HEADER: &str = "--- Puzzle ---";

/// Header line opening the solution section
pub const SOLUTION_HEADER: &str = "--- Solution ---";

/// Split a raw service response into puzzle, solution and mapping text.
///
/// Header lookup is case-insensitive. The puzzle section runs up to the
/// solution header (or end of text); the solution section runs to end of
/// text. When no puzzle header exists, everything before the solution header
/// is treated as puzzle text.
///
/// A solution header that appears before the puzzle header yields an empty
/// puzzle: the boundaries are not reordered.
pub fn segment(raw: &str) -> ParsedResult {
    let text = raw.replace("\r\n", "\n");
    // ASCII lowercasing keeps byte offsets, so indices found here slice `text` safely
    let folded = text.to_ascii_lowercase();

    let puzzle_start = find_header(&folded, PUZZLE_HEADER, false).unwrap_or(0);
    let solution_start = find_header(&folded, SOLUTION_HEADER, true);

    let puzzle_end = solution_start.unwrap_or(text.len());
    let puzzle_body = if puzzle_end >= puzzle_start {
        &text[puzzle_start..puzzle_end]
    } else {
        debug!(
            "Solution header at {} precedes puzzle header at {}, puzzle section is empty",
            puzzle_end, puzzle_start
        );
        ""
    };
    let solution_body = solution_start.map(|start| &text[start..]).unwrap_or("");

    let puzzle = strip_header_labels(puzzle_body);
    let solution_raw = strip_header_labels(solution_body);

    let (solution, mapping) = match extract_mapping(&solution_raw) {
        Some((solution, mapping)) => (solution, mapping),
        None => (solution_raw.trim().to_string(), String::new()),
    };

    debug!(
        "Segmented response: puzzle={} chars, solution={} chars, mapping={}",
        puzzle.len(),
        solution.len(),
        if mapping.is_empty() { "none" } else { mapping.as_str() }
    );

    ParsedResult {
        puzzle,
        solution,
        mapping,
    }
}

/// Find a header in already-lowercased text.
///
/// An occurrence at the start of a line (after a newline) wins. Otherwise the
/// header is accepted at the very start of the text, or anywhere at all when
/// `anywhere` is set.
fn find_header(folded: &str, header: &str, anywhere: bool) -> Option<usize> {
    let header = header.to_ascii_lowercase();

    if let Some(idx) = folded.find(&format!("\n{}", header)) {
        return Some(idx);
    }

    if anywhere {
        folded.find(&header)
    } else if folded.starts_with(&header) {
        Some(0)
    } else {
        None
    }
}

/// Trim a section body and drop a leading header label
fn strip_header_labels(block: &str) -> String {
    let puzzle_label = Regex::new(r"(?i)^--- Puzzle ---\s*").unwrap();
    let solution_label = Regex::new(r"(?i)^--- Solution ---\s*").unwrap();

    let block = block.trim();
    let block = puzzle_label.replace(block, "");
    let block = solution_label.replace(&block, "");
    block.trim().to_string()
}

/// Pull the `Letter -> Digit mapping: ...` line out of the solution text.
///
/// Returns the solution with the matched line removed, and the trimmed
/// payload. Bare label lines with no payload are dropped along with it. The
/// payload is kept verbatim and never interpreted.
fn extract_mapping(solution: &str) -> Option<(String, String)> {
    let mapping_re = Regex::new(r"(?im)^Letter\s*->\s*Digit\s*mapping:[ \t]*(.+)$").unwrap();
    let bare_label_re = Regex::new(r"(?im)^[ \t]*Letter\s*->\s*Digit\s*mapping:[ \t]*$\n?").unwrap();

    let caps = mapping_re.captures(solution)?;
    let line = caps.get(0)?;
    let mapping = caps.get(1)?.as_str().trim().to_string();

    let remaining = format!("{}{}", &solution[..line.start()], &solution[line.end()..]);
    let remaining = bare_label_re.replace_all(&remaining, "");
    Some((remaining.trim().to_string(), mapping))
}
