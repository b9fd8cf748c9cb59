//! Penn Treebank word tokenizer.
//!
//! Splits off punctuation, brackets and clitics (`n't`, `'s`, `'ll`, ...),
//! turns double quotes into ``` `` ``` / `''`, and separates `cannot`-style
//! fused words. A period is split off when it ends a sentence, i.e. when it
//! is followed by whitespace or the end of input, so multi-sentence text
//! tokenizes without a separate sentence splitter.

use once_cell::sync::Lazy;
use regex::Regex;

type Rule = (Regex, &'static str);

fn compile(rules: &[(&str, &'static str)]) -> Vec<Rule> {
    rules
        .iter()
        .map(|(pattern, replacement)| {
            let re = Regex::new(pattern)
                .unwrap_or_else(|e| panic!("tokenizer pattern {pattern:?} does not compile: {e}"));
            (re, *replacement)
        })
        .collect()
}

static STARTING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r#"^""#, "``"),
        (r"(``)", " $1 "),
        (r#"([ (\[{<])("|'{2})"#, "$1 `` "),
    ])
});

static PUNCTUATION: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"([:,])([^\d])", " $1 $2"),
        (r"([:,])$", " $1 "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " $0 "),
        (r#"([^.\s])(\.)([\])}>"']*)(\s|$)"#, "$1 $2 $3$4"),
        (r"[?!]", " $0 "),
        (r"([^'])' ", "$1 ' "),
    ])
});

static BRACKETS: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[(r"[\]\[(){}<>]", " $0 "), (r"--", " -- ")])
});

static ENDING_QUOTES: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r#"""#, " '' "),
        (r"(\S)('')", "$1 $2 "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "$1 $2 "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "$1 $2 "),
    ])
});

static CONTRACTIONS: Lazy<Vec<Rule>> = Lazy::new(|| {
    compile(&[
        (r"(?i)\b(can)(not)\b", " $1 $2 "),
        (r"(?i)\b(d)('ye)\b", " $1 $2 "),
        (r"(?i)\b(gim)(me)\b", " $1 $2 "),
        (r"(?i)\b(gon)(na)\b", " $1 $2 "),
        (r"(?i)\b(got)(ta)\b", " $1 $2 "),
        (r"(?i)\b(lem)(me)\b", " $1 $2 "),
        (r"(?i)\b(more)('n)\b", " $1 $2 "),
        (r"(?i)\b(wan)(na)\b", " $1 $2 "),
        (r"(?i) ('t)(is)\b", " $1 $2 "),
        (r"(?i) ('t)(was)\b", " $1 $2 "),
    ])
});

fn apply(rules: &[Rule], text: String) -> String {
    rules.iter().fold(text, |acc, (re, replacement)| {
        re.replace_all(&acc, *replacement).into_owned()
    })
}

/// Split `text` into Penn Treebank tokens, in source order.
pub fn word_tokenize(text: &str) -> Vec<String> {
    let text = apply(&STARTING_QUOTES, text.to_string());
    let text = apply(&PUNCTUATION, text);
    let text = apply(&BRACKETS, text);
    // Ending-quote rules look for a trailing space.
    let text = apply(&ENDING_QUOTES, format!(" {text} "));
    let text = apply(&CONTRACTIONS, text);
    text.split_whitespace().map(str::to_string).collect()
}
