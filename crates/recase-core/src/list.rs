// Recase List Decoration
// Reads a delimited list, cleans it up and writes it back out decorated

/// How to read, amend and write a delimited list.
///
/// The three list transformations are presets of this one algorithm:
/// [`QUOTE_LIST`], [`LINE_BREAK_LIST`] and [`ADD_LINE_BREAKS_TO_LIST`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListDecoration {
    /// Separator the input list is split on
    pub input_delimiter: &'static str,
    /// Trim each element and drop the ones left empty
    pub trim_elements: bool,
    /// Text placed before every element
    pub prefix: &'static str,
    /// Text placed after every element
    pub suffix: &'static str,
    /// Separator placed between output elements (never trailing)
    pub output_delimiter: &'static str,
}

/// `"1, 2,3,,4"` -> `'1', '2', '3', '4'`
pub const QUOTE_LIST: ListDecoration = ListDecoration {
    input_delimiter: ",",
    trim_elements: true,
    prefix: "'",
    suffix: "'",
    output_delimiter: ", ",
};

/// `"1, 2,3,,4"` -> one element per line
pub const LINE_BREAK_LIST: ListDecoration = ListDecoration {
    input_delimiter: ",",
    trim_elements: true,
    prefix: "",
    suffix: "",
    output_delimiter: "\n",
};

/// `"1, 2,3,,4"` -> one element per line, each but the last followed by a comma
pub const ADD_LINE_BREAKS_TO_LIST: ListDecoration = ListDecoration {
    input_delimiter: ",",
    trim_elements: true,
    prefix: "",
    suffix: "",
    output_delimiter: ",\n",
};

impl ListDecoration {
    /// Apply the decoration to `text`.
    ///
    /// With `trim_elements` off, elements are kept verbatim, empty ones included.
    pub fn apply(&self, text: &str) -> String {
        let elements: Vec<&str> = if self.trim_elements {
            text.split(self.input_delimiter)
                .map(str::trim)
                .filter(|elem| !elem.is_empty())
                .collect()
        } else {
            text.split(self.input_delimiter).collect()
        };

        elements
            .iter()
            .map(|elem| format!("{}{}{}", self.prefix, elem, self.suffix))
            .collect::<Vec<_>>()
            .join(self.output_delimiter)
    }
}

pub fn quote_list(text: &str) -> String {
    QUOTE_LIST.apply(text)
}

pub fn line_break_list(text: &str) -> String {
    LINE_BREAK_LIST.apply(text)
}

pub fn add_line_breaks_to_list(text: &str) -> String {
    ADD_LINE_BREAKS_TO_LIST.apply(text)
}
