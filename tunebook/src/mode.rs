//! Mapping free-form mode strings onto ABC key fields
//!
//! Tune databases describe keys as a tonic glued to a mode name ("Gmajor", "Ador",
//! "Dmixolydian"). ABC wants something like `G`, `Am` or `D mix` in its `K:` field. The mapping is
//! an ordered list of [`Rule`]s, of which the first one that matches wins.

/// A single rewrite applied to a lowercased mode string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Strip a trailing `suffix` and append `append` to what remains
    StripSuffix {
        suffix: &'static str,
        append: &'static str,
    },

    /// Replace the first occurrence of `pattern` with `with`
    ReplaceFirst {
        pattern: &'static str,
        with: &'static str,
    },
}

impl Rule {
    /// Apply the rule, or return `None` if it doesn't match
    pub fn apply(&self, mode: &str) -> Option<String> {
        match *self {
            Rule::StripSuffix { suffix, append } => mode
                .strip_suffix(suffix)
                .map(|tonic| format!("{tonic}{append}")),
            Rule::ReplaceFirst { pattern, with } => mode
                .contains(pattern)
                .then(|| mode.replacen(pattern, with, 1)),
        }
    }
}

/// The rules in the order they are tried
///
/// Order matters: "lydian" is a substring of "mixolydian", so the latter has to come first.
pub const RULES: &[Rule] = &[
    Rule::StripSuffix {
        suffix: "major",
        append: "",
    },
    Rule::StripSuffix {
        suffix: "minor",
        append: "m",
    },
    Rule::ReplaceFirst {
        pattern: "mixolydian",
        with: " mix",
    },
    Rule::ReplaceFirst {
        pattern: "dorian",
        with: " dor",
    },
    Rule::ReplaceFirst {
        pattern: "phrygian",
        with: " phr",
    },
    Rule::ReplaceFirst {
        pattern: "lydian",
        with: " lyd",
    },
    Rule::ReplaceFirst {
        pattern: "locrian",
        with: " loc",
    },
];

/// Convert a mode string (case-insensitive) to the value of an ABC `K:` field
///
/// Unrecognized modes are passed through, lowercased.
pub fn to_abc_key(mode: &str) -> String {
    let mode = mode.to_lowercase();

    RULES
        .iter()
        .find_map(|rule| rule.apply(&mode))
        .unwrap_or(mode)
}
