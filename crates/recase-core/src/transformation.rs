// Recase Transformations
// The fixed set of named text transformations

use std::fmt;

use strum_macros::{EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::case::{to_capitalized, to_lower, to_sentence_case, to_upper};
use crate::list::{ADD_LINE_BREAKS_TO_LIST, LINE_BREAK_LIST, QUOTE_LIST};
use crate::title::TitleCaser;

/// A named, pure text transformation.
///
/// Declaration order is display order: `Transformation::iter()` yields the
/// variants in the order candidates are shown to the user.
///
/// The stable name (what a caller passes to select one transformation) is the
/// strum serialization, e.g. `"to_upper"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
pub enum Transformation {
    #[strum(serialize = "to_upper")]
    Upper,
    #[strum(serialize = "to_lower")]
    Lower,
    #[strum(serialize = "to_capitalized")]
    Capitalized,
    #[strum(serialize = "to_sentence_case")]
    SentenceCase,
    #[strum(serialize = "titlecase")]
    TitleCase,
    #[strum(serialize = "quote_list")]
    QuoteList,
    #[strum(serialize = "line_break_list")]
    LineBreakList,
    #[strum(serialize = "add_line_breaks_to_list")]
    AddLineBreaksToList,
}

impl Transformation {
    /// Stable name used to select this transformation
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Human readable label shown next to the output
    pub fn label(self) -> &'static str {
        match self {
            Transformation::Upper => "Upper Case",
            Transformation::Lower => "Lower Case",
            Transformation::Capitalized => "Capitalized",
            Transformation::SentenceCase => "Sentence Case",
            Transformation::TitleCase => "Title Case",
            Transformation::QuoteList => "Single Quote List",
            Transformation::LineBreakList => "Line Break List",
            Transformation::AddLineBreaksToList => "Add Line Breaks to List",
        }
    }

    /// Apply the transformation to `text`.
    ///
    /// Title casing is delegated to `title`; every other transformation is
    /// self-contained. Never fails, including on empty input.
    pub fn apply(self, text: &str, title: &TitleCaser) -> String {
        match self {
            Transformation::Upper => to_upper(text),
            Transformation::Lower => to_lower(text),
            Transformation::Capitalized => to_capitalized(text),
            Transformation::SentenceCase => to_sentence_case(text),
            Transformation::TitleCase => title.title_case(text),
            Transformation::QuoteList => QUOTE_LIST.apply(text),
            Transformation::LineBreakList => LINE_BREAK_LIST.apply(text),
            Transformation::AddLineBreaksToList => ADD_LINE_BREAKS_TO_LIST.apply(text),
        }
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_declaration_order() {
        let names: Vec<&str> = Transformation::iter().map(Transformation::name).collect();
        assert_eq!(
            names,
            vec![
                "to_upper",
                "to_lower",
                "to_capitalized",
                "to_sentence_case",
                "titlecase",
                "quote_list",
                "line_break_list",
                "add_line_breaks_to_list",
            ]
        );
        assert_eq!(Transformation::COUNT, 8);
    }

    #[test]
    fn test_name_round_trip() {
        for t in Transformation::iter() {
            assert_eq!(Transformation::from_str(t.name()), Ok(t));
        }
        assert!(Transformation::from_str("Upper").is_err());
        assert!(Transformation::from_str("__import__").is_err());
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: HashSet<&str> = Transformation::iter().map(Transformation::label).collect();
        assert_eq!(labels.len(), Transformation::COUNT);
    }

    #[test]
    fn test_apply() {
        let title = TitleCaser::default();
        let input = "the cat, the hat";

        assert_eq!(Transformation::Upper.apply(input, &title), "THE CAT, THE HAT");
        assert_eq!(Transformation::Lower.apply("ABC", &title), "abc");
        assert_eq!(Transformation::Capitalized.apply(input, &title), "The Cat, The Hat");
        assert_eq!(Transformation::SentenceCase.apply("HELLO", &title), "Hello");
        assert_eq!(Transformation::TitleCase.apply(input, &title), "The Cat, the Hat");
        assert_eq!(Transformation::QuoteList.apply(input, &title), "'the cat', 'the hat'");
        assert_eq!(Transformation::LineBreakList.apply(input, &title), "the cat\nthe hat");
        assert_eq!(
            Transformation::AddLineBreaksToList.apply(input, &title),
            "the cat,\nthe hat"
        );
    }

    #[test]
    fn test_apply_empty_input() {
        let title = TitleCaser::default();
        for t in Transformation::iter() {
            assert_eq!(t.apply("", &title), "", "{} on empty input", t);
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Transformation::AddLineBreaksToList.to_string(), "add_line_breaks_to_list");
    }
}
