//! Rewrites table patterns into `regex` crate syntax.
//!
//! Pattern tables are written in ECMAScript regex syntax, matched
//! case-insensitively and without Unicode mode. Several constructs mean
//! something different in the `regex` crate, so each source is rewritten
//! before compilation and compiled with case folding turned off:
//!
//! | Construct | Matches | Rewritten to |
//! |-----------|---------|--------------|
//! | `.` | any char except `\n`, `\r`, U+2028, U+2029 | explicit negated class |
//! | `\s` | ECMAScript whitespace (no U+0085) | explicit class |
//! | `\w`, `\d` | ASCII word chars / ASCII digits | explicit ASCII class |
//! | `\b`, `\B` | ASCII word boundary | `(?-u:\b)`, `(?-u:\B)` |
//! | letters | the letter and its case partner | `[sS]`, `[äÄ]`, ... |
//!
//! Case partners never cross the ASCII boundary: `ſ` (U+017F) does not
//! match `s` and the Kelvin sign (U+212A) does not match `k`.
//!
//! Letter ranges inside classes (`[a-z]`) are rejected; they cannot be
//! expanded letter by letter.

use crate::error::{Result, SignalError};

const LINE_TERMINATORS: &str = r"\n\r\x{2028}\x{2029}";

const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

const WORD: &str = "0-9A-Za-z_";

const DIGIT: &str = "0-9";

/// Rewrite an ECMAScript-syntax source into an equivalent `regex` source.
///
/// The result must be compiled without case-insensitivity.
///
/// # Errors
///
/// Returns [`SignalError::Pattern`] for a trailing backslash, an unterminated
/// class, a negated shorthand (`\S`, `\W`, `\D`) inside a class, or a letter
/// range inside a class.
pub fn translate(source: &str) -> Result<String> {
    let fail = |reason: &str| SignalError::Pattern(format!("{source}: {reason}"));

    let mut out = String::with_capacity(source.len() * 2);
    let mut in_class = false;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars.next().ok_or_else(|| fail("trailing backslash"))?;
                push_escape(&mut out, escaped, in_class).map_err(|reason| fail(reason))?;
            }
            '[' if !in_class => {
                in_class = true;
                out.push('[');
                if chars.peek() == Some(&'^') {
                    chars.next();
                    out.push('^');
                }
            }
            ']' if in_class => {
                in_class = false;
                out.push(']');
            }
            // Nested classes and set operators only exist on the regex side.
            '[' | '&' | '~' if in_class => {
                out.push('\\');
                out.push(c);
            }
            '(' if !in_class && chars.peek() == Some(&'?') => {
                chars.next();
                out.push_str("(?");
                // Copy a group name through verbatim.
                let mut ahead = chars.clone();
                if ahead.next() == Some('<') && !matches!(ahead.next(), Some('=' | '!')) {
                    for n in chars.by_ref() {
                        out.push(n);
                        if n == '>' {
                            break;
                        }
                    }
                }
            }
            '.' if !in_class => {
                out.push_str("[^");
                out.push_str(LINE_TERMINATORS);
                out.push(']');
            }
            _ if in_class => {
                let variants = case_variants(c);
                if variants.len() > 1 {
                    let mut ahead = chars.clone();
                    if ahead.next() == Some('-') && ahead.next().is_some_and(|n| n != ']') {
                        return Err(fail("letter range inside class"));
                    }
                    if out.ends_with('-') && !out.ends_with("[-") && !out.ends_with("\\-") {
                        return Err(fail("letter range inside class"));
                    }
                }
                out.extend(variants);
            }
            _ => {
                let variants = case_variants(c);
                if variants.len() > 1 {
                    out.push('[');
                    out.extend(variants);
                    out.push(']');
                } else {
                    out.push(c);
                }
            }
        }
    }

    if in_class {
        return Err(fail("unterminated class"));
    }
    Ok(out)
}

fn push_escape(
    out: &mut String,
    escaped: char,
    in_class: bool,
) -> std::result::Result<(), &'static str> {
    let class = match escaped {
        's' | 'S' => WHITESPACE,
        'w' | 'W' => WORD,
        'd' | 'D' => DIGIT,
        'b' | 'B' if !in_class => {
            out.push_str(if escaped == 'b' { r"(?-u:\b)" } else { r"(?-u:\B)" });
            return Ok(());
        }
        _ => {
            out.push('\\');
            out.push(escaped);
            return Ok(());
        }
    };

    let negated = escaped.is_ascii_uppercase();
    match (in_class, negated) {
        (true, true) => return Err("negated shorthand inside class"),
        (true, false) => out.push_str(class),
        (false, true) => {
            out.push_str("[^");
            out.push_str(class);
            out.push(']');
        }
        (false, false) => {
            out.push('[');
            out.push_str(class);
            out.push(']');
        }
    }
    Ok(())
}

/// Key two characters must share to match case-insensitively.
///
/// Uppercases to a single char, unless that would map a non-ASCII char
/// onto ASCII.
fn canonicalize(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if c.is_ascii() || !u.is_ascii() => u,
        _ => c,
    }
}

/// `c` followed by every other char that matches it case-insensitively.
fn case_variants(c: char) -> Vec<char> {
    let key = canonicalize(c);
    let mut variants = vec![c];
    let candidates = c
        .to_lowercase()
        .chain(c.to_uppercase())
        .chain(key.to_lowercase())
        .chain(std::iter::once(key));
    for candidate in candidates {
        if !variants.contains(&candidate) && canonicalize(candidate) == key {
            variants.push(candidate);
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use regex::Regex;

    fn compile(source: &str) -> Regex {
        Regex::new(&translate(source).unwrap()).unwrap()
    }

    // ── Case ────────────────────────────────────────────────────────────

    #[test]
    fn letters_match_both_cases() {
        let re = compile("läuft");
        assert!(re.is_match("LÄUFT"));
        assert!(re.is_match("Läuft"));
        assert!(!re.is_match("lauft"));
    }

    #[test]
    fn non_ascii_never_folds_onto_ascii() {
        assert!(!compile("sucks").is_match("ſucks"));
        assert!(!compile("krass").is_match("\u{212A}rass"));
        assert!(compile("sucks").is_match("SUCKS"));
    }

    #[test]
    fn case_variants_stay_in_their_range() {
        assert_eq!(case_variants('s'), ['s', 'S']);
        assert_eq!(case_variants('K'), ['K', 'k']);
        assert_eq!(case_variants('ö'), ['ö', 'Ö']);
        assert_eq!(case_variants('✅'), ['✅']);
        assert_eq!(case_variants('-'), ['-']);
    }

    // ── Shorthands ──────────────────────────────────────────────────────

    #[test]
    fn word_class_is_ascii() {
        let re = compile(r"^\w+$");
        assert!(re.is_match("Deploy_2"));
        assert!(!re.is_match("Größe"));
        assert!(!re.is_match("Überblick"));
    }

    #[test]
    fn whitespace_class_follows_ecmascript() {
        let re = compile(r"a\sb");
        assert!(re.is_match("a b"));
        assert!(re.is_match("a\u{A0}b"));
        assert!(re.is_match("a\u{FEFF}b"));
        assert!(!re.is_match("a\u{85}b"));
    }

    #[test]
    fn dot_stops_at_line_terminators() {
        let re = compile("need.*first");
        assert!(re.is_match("need this first"));
        assert!(!re.is_match("need this\rfirst"));
        assert!(!re.is_match("need this\nfirst"));
        assert!(!re.is_match("need this\u{2028}first"));
    }

    #[test]
    fn shorthands_inside_class() {
        let re = compile(r"^[\w\s-]+$");
        assert!(re.is_match("release notes-v2"));
        assert!(!re.is_match("größe"));
    }

    #[test]
    fn negated_shorthand_outside_class() {
        let re = compile(r"^\S+$");
        assert!(re.is_match("abc"));
        assert!(!re.is_match("a c"));
    }

    #[test]
    fn escaped_punctuation_is_kept() {
        let re = compile(r"bzgl\.?");
        assert!(re.is_match("BZGL."));
        assert_eq!(translate(r"\.").unwrap(), r"\.");
    }

    #[test]
    fn non_capturing_and_named_groups_survive() {
        assert!(compile("(?:yes!|no)").is_match("YES!"));
        let re = compile(r"(?<topic>\w+)");
        assert_eq!(&re.captures("abc").unwrap()["topic"], "abc");
    }

    // ── Errors ──────────────────────────────────────────────────────────

    #[test]
    fn rejects_unsupported_sources() {
        for source in [r"abc\", "[abc", r"[\S]", "[a-z]", "[0-z]"] {
            assert!(
                matches!(translate(source), Err(SignalError::Pattern(_))),
                "{source:?} should be rejected"
            );
        }
    }

    #[test]
    fn digit_ranges_are_fine() {
        assert!(compile("[0-9]+").is_match("42"));
    }
}
