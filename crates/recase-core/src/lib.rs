// Recase Core Library
// Text case transformations and name-based dispatch

pub mod case;
pub mod dispatch;
pub mod feedback;
pub mod list;
pub mod registry;
pub mod settings;
pub mod title;
pub mod transformation;

pub use case::{to_capitalized, to_lower, to_sentence_case, to_upper};
pub use dispatch::{DispatchError, Dispatcher, Invocation, Output};
pub use feedback::{Icon, ResultItem, ResultSet};
pub use list::{add_line_breaks_to_list, line_break_list, quote_list, ListDecoration};
pub use registry::Registry;
pub use settings::{default_settings_content, Settings, SettingsError, CONFIG_ENV};
pub use title::{TitleCaseError, TitleCaser};
pub use transformation::Transformation;
