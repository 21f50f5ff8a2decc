//! Input parsing and live validation.
//!
//! Two input formats feed the deck builder:
//!
//! - **Structured**: a JSON array of `{"term": ..., "definition": ...}`
//!   objects, selected when the trimmed input starts with `[`.
//! - **Plain**: newline-separated text, blank lines dropped, consecutive
//!   lines pairing up as (term, definition). The line count must be even
//!   and non-zero.
//!
//! Parsing never escapes this module as a failure: [`validate`] turns errors
//! into [`Feedback`] for the input surface, which re-runs it on every change
//! to drive the inline message and the start action's enabled state.

use thiserror::Error;

use crate::core::Pair;

/// Upper bound on pair count, fixed by the `PairId` width.
pub const MAX_PAIRS: usize = u16::MAX as usize;

/// The only error kind the game knows: malformed input.
///
/// Always handled locally - surfaced as inline feedback, never fatal. Once a
/// game starts, its pairs are assumed well-formed.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Input is blank after trimming.
    #[error("input is empty")]
    Empty,

    /// Structured input failed to parse or an object was missing a field.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Plain input had an odd number of non-blank lines.
    #[error("plain text must have pairs of lines, got {0}")]
    OddLineCount(usize),

    /// Structured input parsed to an empty array.
    #[error("no pairs found")]
    NoPairs,

    /// More pairs than the board can address.
    #[error("too many pairs: {0} (limit {MAX_PAIRS})")]
    TooManyPairs(usize),
}

/// Parse raw input into an ordered pair list.
///
/// Format is chosen by the first non-whitespace character: `[` selects the
/// structured form, anything else the plain form. Line content is trimmed
/// in the plain form.
pub fn parse_pairs(raw: &str) -> Result<Vec<Pair>, FormatError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(FormatError::Empty);
    }

    let pairs = if input.starts_with('[') {
        serde_json::from_str::<Vec<Pair>>(input)?
    } else {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() % 2 != 0 {
            return Err(FormatError::OddLineCount(lines.len()));
        }
        lines
            .chunks_exact(2)
            .map(|chunk| Pair::new(chunk[0], chunk[1]))
            .collect()
    };

    if pairs.is_empty() {
        return Err(FormatError::NoPairs);
    }
    if pairs.len() > MAX_PAIRS {
        return Err(FormatError::TooManyPairs(pairs.len()));
    }

    Ok(pairs)
}

/// Validity of the current input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing entered yet; no message, start disabled.
    Empty,
    /// Input parses; start enabled.
    Valid,
    /// Input malformed; message explains, start disabled.
    Invalid,
}

/// Live feedback for the input surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    pub message: String,
}

impl Feedback {
    /// May the start action fire?
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }

    fn empty() -> Self {
        Self {
            verdict: Verdict::Empty,
            message: String::new(),
        }
    }
}

/// Validate input for live feedback. Re-run on every input change.
#[must_use]
pub fn validate(raw: &str) -> Feedback {
    if raw.trim().is_empty() {
        return Feedback::empty();
    }

    match parse_pairs(raw) {
        Ok(_) => {
            let message = if raw.trim_start().starts_with('[') {
                "Valid JSON format"
            } else {
                "Valid plain text format"
            };
            Feedback {
                verdict: Verdict::Valid,
                message: message.to_string(),
            }
        }
        Err(err) => Feedback {
            verdict: Verdict::Invalid,
            message: err.to_string(),
        },
    }
}

/// Built-in example content: three biology pairs, pretty-printed in the
/// structured format so it doubles as format documentation.
pub const EXAMPLE_JSON: &str = r#"[
  {
    "term": "Photosynthesis",
    "definition": "Process by which plants convert light energy into chemical energy"
  },
  {
    "term": "Mitosis",
    "definition": "Cell division resulting in two identical daughter cells"
  },
  {
    "term": "Osmosis",
    "definition": "Movement of water molecules across a semi-permeable membrane"
  }
]"#;

/// The example content as parsed pairs.
#[must_use]
pub fn example_pairs() -> Vec<Pair> {
    vec![
        Pair::new(
            "Photosynthesis",
            "Process by which plants convert light energy into chemical energy",
        ),
        Pair::new(
            "Mitosis",
            "Cell division resulting in two identical daughter cells",
        ),
        Pair::new(
            "Osmosis",
            "Movement of water molecules across a semi-permeable membrane",
        ),
    ]
}
