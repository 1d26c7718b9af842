// Recase Title Case
// English title casing with a configurable list of small words

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::case::capitalize;

/// Minor words kept lowercase unless they open or close a line or follow
/// sub-phrase punctuation.
pub const DEFAULT_SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "en", "for", "if", "in", "of", "on", "or", "the",
    "to", "v", "v.", "via", "vs", "vs.",
];

/// Letters that make a word an acronym when it has nothing else and more
/// than two characters (`bbc` -> `BBC`). `y` is left out so `gym` stays a word.
pub const DEFAULT_CONSONANTS: &str = "bcdfghjklmnpqrstvwxz";

/// Punctuation that may lead or trail a word without changing how it is cased
const PUNCTUATION: &str = "!\"“#$%&'‘()*+,-–‒—―./:;?@[\\]_`{|}~";

static PUNCT_CLASS: LazyLock<String> = LazyLock::new(|| {
    let escaped: String = PUNCTUATION
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect();
    format!("[{}]", escaped)
});

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("line break pattern"));
static INLINE_PERIOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w[.]\w").expect("inline period pattern"));
static UC_ELSEWHERE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{}*?[a-zA-Z]+[A-Z]+?", *PUNCT_CLASS)).expect("uc elsewhere pattern")
});
static CAP_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{}*?\w", *PUNCT_CLASS)).expect("cap first pattern")
});
static APOS_SECOND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[dol]['‘][a-z]+(?:['s]{2})?$").expect("apostrophe pattern")
});
static UC_INITIALS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Z]\.|[A-Z]\.[A-Z])+$").expect("initials pattern")
});
static MAC_MC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([Mm]c|MC)(\w.+)").expect("mac mc pattern"));

/// Errors building a [`TitleCaser`] from a configured small-word list
#[derive(Debug, thiserror::Error)]
pub enum TitleCaseError {
    #[error("small word list is empty")]
    EmptySmallWords,

    #[error("invalid small word: {0:?}")]
    InvalidSmallWord(String),

    #[error("small word pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Title-cases English text.
///
/// Rules, per line and per space-separated word:
/// - initials (`U.S.A.`) on an all-caps line are kept
/// - `d'`/`l'`/`o'` prefixes: `d'Artagnan`, `O'Neil`
/// - `Mc` prefixes: `McDonald`
/// - words with an inline period (`example.com`) or an inner capital
///   (`iPhone`) are kept verbatim
/// - small words are lowercased, except as first or last word of a line and
///   after sub-phrase punctuation (`Star Wars: A New Hope`)
/// - slashed and hyphenated words are cased per part
/// - everything else gets its first letter uppercased
#[derive(Debug, Clone)]
pub struct TitleCaser {
    small_word: Regex,
    small_first: Regex,
    small_last: Regex,
    subphrase: Regex,
}

/// A cased word and whether first/last small-word capitalization may touch it
struct CasedWord {
    text: String,
    verbatim: bool,
}

impl CasedWord {
    fn cased(text: String) -> Self {
        Self {
            text,
            verbatim: false,
        }
    }

    fn verbatim(text: &str) -> Self {
        Self {
            text: text.to_string(),
            verbatim: true,
        }
    }
}

impl TitleCaser {
    /// Build a title caser that treats `small_words` as minor words.
    ///
    /// Words are matched case-insensitively and literally.
    pub fn new<S: AsRef<str>>(small_words: &[S]) -> Result<Self, TitleCaseError> {
        if small_words.is_empty() {
            return Err(TitleCaseError::EmptySmallWords);
        }

        let mut words = Vec::with_capacity(small_words.len());
        for word in small_words {
            let word: &str = word.as_ref();
            if word.trim().is_empty() || word.chars().any(char::is_whitespace) {
                return Err(TitleCaseError::InvalidSmallWord(word.to_string()));
            }
            words.push(word.to_lowercase());
        }

        let small = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let punct = &*PUNCT_CLASS;

        Ok(Self {
            small_word: Regex::new(&format!("(?i)^(?:{})$", small))?,
            small_first: Regex::new(&format!(r"(?i)^({}*)({})\b", punct, small))?,
            small_last: Regex::new(&format!(r"(?i)\b({}){}?$", small, punct))?,
            subphrase: Regex::new(&format!("([:.;?!\\-–‒—―] )({})", small))?,
        })
    }

    pub fn is_small_word(&self, word: &str) -> bool {
        self.small_word.is_match(word)
    }

    /// Title-case `text`.
    pub fn title_case(&self, text: &str) -> String {
        self.title_case_with(text, true)
    }

    fn title_case_with(&self, text: &str, small_first_last: bool) -> String {
        LINE_BREAKS
            .split(text)
            .map(|line| self.title_case_line(line, small_first_last))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn title_case_line(&self, line: &str, small_first_last: bool) -> String {
        let all_caps = line.to_uppercase() == line;
        let mut words: Vec<CasedWord> = line
            .split([' ', '\t'])
            .map(|word| self.title_case_word(word, all_caps, small_first_last))
            .collect();

        if small_first_last {
            if let Some(first) = words.first_mut().filter(|w| !w.verbatim) {
                first.text = self
                    .small_first
                    .replace(&first.text, |caps: &Captures| {
                        format!("{}{}", &caps[1], capitalize(&caps[2]))
                    })
                    .into_owned();
            }
            if let Some(last) = words.last_mut().filter(|w| !w.verbatim) {
                last.text = self
                    .small_last
                    .replace(&last.text, |caps: &Captures| capitalize(&caps[0]))
                    .into_owned();
            }
        }

        let joined = words
            .into_iter()
            .map(|w| w.text)
            .collect::<Vec<_>>()
            .join(" ");

        self.subphrase
            .replace_all(&joined, |caps: &Captures| {
                format!("{}{}", &caps[1], capitalize(&caps[2]))
            })
            .into_owned()
    }

    fn title_case_word(&self, word: &str, all_caps: bool, small_first_last: bool) -> CasedWord {
        if all_caps && UC_INITIALS.is_match(word) {
            return CasedWord::verbatim(word);
        }

        if APOS_SECOND.is_match(word) {
            return CasedWord::cased(apostrophe_case(word));
        }

        if let Some(caps) = MAC_MC.captures(word) {
            return CasedWord::cased(format!(
                "{}{}",
                capitalize(&caps[1]),
                self.title_case_with(&caps[2], small_first_last)
            ));
        }

        if INLINE_PERIOD.is_match(word) || (!all_caps && UC_ELSEWHERE.is_match(word)) {
            return CasedWord::verbatim(word);
        }

        if self.is_small_word(word) {
            return CasedWord::cased(word.to_lowercase());
        }

        if word.contains('/') && !word.contains("//") {
            let parts: Vec<String> = word
                .split('/')
                .map(|part| self.title_case_with(part, false))
                .collect();
            return CasedWord::cased(parts.join("/"));
        }

        if word.contains('-') {
            let parts: Vec<String> = word
                .split('-')
                .map(|part| self.title_case_with(part, small_first_last))
                .collect();
            return CasedWord::cased(parts.join("-"));
        }

        let word = if all_caps {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        if is_consonant_acronym(&word) {
            return CasedWord::cased(word.to_uppercase());
        }
        CasedWord::cased(
            CAP_FIRST
                .replace(&word, |caps: &Captures| caps[0].to_uppercase())
                .into_owned(),
        )
    }
}

impl Default for TitleCaser {
    fn default() -> Self {
        Self::new(DEFAULT_SMALL_WORDS).expect("default small words are valid")
    }
}

/// More than two characters, all of them consonants
fn is_consonant_acronym(word: &str) -> bool {
    word.chars().count() > 2
        && word
            .chars()
            .all(|c| DEFAULT_CONSONANTS.contains(c.to_ascii_lowercase()))
}

/// `d'artagnan` -> `d'Artagnan`, `o'neil` -> `O'Neil`
fn apostrophe_case(word: &str) -> String {
    let mut chars = word.chars();
    let (Some(initial), Some(apostrophe), Some(next)) = (chars.next(), chars.next(), chars.next())
    else {
        return word.to_string();
    };

    let mut out = String::with_capacity(word.len());
    if "aeiouAEIOU".contains(initial) {
        out.extend(initial.to_uppercase());
    } else {
        out.extend(initial.to_lowercase());
    }
    out.push(apostrophe);
    out.extend(next.to_uppercase());
    out.push_str(chars.as_str());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_case(text: &str) -> String {
        TitleCaser::default().title_case(text)
    }

    #[test]
    fn test_basic_title_case() {
        assert_eq!(title_case("the quick brown fox"), "The Quick Brown Fox");
        assert_eq!(title_case("a tale of two cities"), "A Tale of Two Cities");
    }

    #[test]
    fn test_small_word_at_end_is_capitalized() {
        assert_eq!(
            title_case("what are you looking for"),
            "What Are You Looking For"
        );
    }

    #[test]
    fn test_all_caps_line() {
        assert_eq!(title_case("THE CAT IN THE HAT"), "The Cat in the Hat");
        assert_eq!(title_case("U.S.A. IS GREAT"), "U.S.A. Is Great");
    }

    #[test]
    fn test_subphrase_capitalization() {
        assert_eq!(title_case("star wars: a new hope"), "Star Wars: A New Hope");
    }

    #[test]
    fn test_words_kept_verbatim() {
        assert_eq!(
            title_case("the iPhone and example.com"),
            "The iPhone and example.com"
        );
    }

    #[test]
    fn test_name_prefixes() {
        assert_eq!(title_case("mcdonald's farm"), "McDonald's Farm");
        assert_eq!(title_case("o'neil and d'artagnan"), "O'Neil and d'Artagnan");
    }

    #[test]
    fn test_slashed_words() {
        assert_eq!(title_case("this/that"), "This/That");
        assert_eq!(title_case("see http://x"), "See Http://x");
    }

    #[test]
    fn test_consonant_acronyms() {
        assert_eq!(title_case("bbc news"), "BBC News");
        assert_eq!(title_case("CSS AND HTML"), "CSS and HTML");
        assert_eq!(title_case("learn html/css"), "Learn HTML/CSS");
        assert_eq!(title_case("the gym"), "The Gym");
        assert_eq!(title_case("mr smith"), "Mr Smith");
    }

    #[test]
    fn test_mc_prefix_follows_slash_casing() {
        assert_eq!(title_case("mcthe"), "McThe");
        assert_eq!(title_case("x/mcthe"), "X/Mcthe");
        assert_eq!(title_case("x-mcthe"), "X-McThe");
    }

    #[test]
    fn test_multiple_lines() {
        assert_eq!(title_case("hello world\nthe end"), "Hello World\nThe End");
        assert_eq!(title_case("one\r\n\r\ntwo"), "One\nTwo");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_custom_small_words() {
        let caser = TitleCaser::new(&["with", "From"]).unwrap();
        assert_eq!(caser.title_case("a walk with me"), "A Walk with Me");
        assert_eq!(caser.title_case("letters from home"), "Letters from Home");
        assert!(caser.is_small_word("WITH"));
        assert!(!caser.is_small_word("the"));
    }

    #[test]
    fn test_small_words_are_literal() {
        let caser = TitleCaser::new(&["v."]).unwrap();
        assert!(caser.is_small_word("v."));
        assert!(!caser.is_small_word("vx"));
    }

    #[test]
    fn test_invalid_small_words() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            TitleCaser::new(&empty),
            Err(TitleCaseError::EmptySmallWords)
        ));
        assert!(matches!(
            TitleCaser::new(&["of", " "]),
            Err(TitleCaseError::InvalidSmallWord(_))
        ));
        assert!(matches!(
            TitleCaser::new(&["two words"]),
            Err(TitleCaseError::InvalidSmallWord(_))
        ));
    }

    #[test]
    fn test_apostrophe_case() {
        assert_eq!(apostrophe_case("l'oreal"), "l'Oreal");
        assert_eq!(apostrophe_case("O'neil"), "O'Neil");
    }
}
