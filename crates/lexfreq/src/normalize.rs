//! Text cleanup applied to every source before tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ASCII: Lazy<Regex> = Lazy::new(|| pattern(r"[^\x00-\x7F]+"));
// ASCII controls except \t \n \x0b \x0c \r.
static CONTROL: Lazy<Regex> = Lazy::new(|| pattern(r"[\x00-\x08\x0E-\x1F\x7F]+"));
static OPTION_MARKER: Lazy<Regex> = Lazy::new(|| pattern(r"\b[A-D]\)\s*"));
static DIGITS: Lazy<Regex> = Lazy::new(|| pattern(r"[0-9]+"));

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("normalizer pattern {re:?} does not compile: {e}"))
}

/// Replace non-ASCII runs, control characters, `A)`-style answer markers and
/// digit runs with a space, then lowercase.
///
/// The result holds only printable ASCII and ASCII whitespace, and
/// `normalize(&normalize(s)) == normalize(s)`.
///
/// ```
/// assert_eq!(
///     lexfreq::normalize("Runs running RAN. A) option1 42"),
///     "runs running ran.  option   "
/// );
/// ```
pub fn normalize(text: &str) -> String {
    let text = NON_ASCII.replace_all(text, " ");
    let text = CONTROL.replace_all(&text, " ");
    // Markers are matched before lowercasing, so `a)` in prose survives.
    let text = OPTION_MARKER.replace_all(&text, " ");
    let text = DIGITS.replace_all(&text, " ");
    text.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_clean(text: &str) -> bool {
        text.chars()
            .all(|c| c.is_ascii_graphic() || c.is_ascii_whitespace() || c == '\x0b')
    }

    #[test]
    fn strips_markers_digits_and_case() {
        assert_eq!(
            normalize("Runs running RAN. A) option1 42"),
            "runs running ran.  option   "
        );
        assert_eq!(normalize("B)answer C)  next"), " answer  next");
    }

    #[test]
    fn leaves_lowercase_and_later_letters_alone() {
        assert_eq!(normalize("(a) plan E) five"), "(a) plan e) five");
        assert_eq!(normalize("ABC) x"), "abc) x");
    }

    #[test]
    fn replaces_non_ascii_and_controls() {
        assert_eq!(normalize("café 真题 naïve"), "caf    na ve");
        assert_eq!(normalize("a\u{0}b\u{7f}c\td"), "a b c\td");
        assert!(is_clean(&normalize("\u{1b}[31mred\u{1b}[0m – “quoted” 2024")));
    }

    #[test]
    fn is_idempotent() {
        for text in [
            "Runs running RAN. A) option1 42",
            "A) B) C) D) E)",
            "x\u{3000}A)\u{2003}y",
            "",
            "plain text",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "input {text:?}");
            assert!(is_clean(&once));
        }
    }
}
