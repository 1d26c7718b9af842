// Recase Dispatcher
// Applies every transformation, or one selected by name

use crate::feedback::{ResultItem, ResultSet, DEFAULT_ICON_PATH};
use crate::registry::Registry;
use crate::title::TitleCaser;

/// Errors that end a single invocation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("missing argument: an input string is required")]
    MissingArgument,

    #[error("too many arguments: expected at most 2, got {0}")]
    TooManyArguments(usize),

    #[error("unknown transformation: '{0}'")]
    UnknownTransformation(String),
}

/// A validated request: list every candidate, or apply one by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    ListAll { input: String },
    Named { input: String, name: String },
}

impl Invocation {
    /// Validate positional arguments (program name excluded).
    ///
    /// One argument lists every candidate, two select a transformation by
    /// name. Anything else is an error.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, DispatchError> {
        let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        match args.as_slice() {
            [] => Err(DispatchError::MissingArgument),
            [input] => Ok(Invocation::ListAll {
                input: input.to_string(),
            }),
            [input, name] => Ok(Invocation::Named {
                input: input.to_string(),
                name: name.to_string(),
            }),
            _ => Err(DispatchError::TooManyArguments(args.len())),
        }
    }
}

/// What an invocation produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Every candidate, for interactive selection
    Items(ResultSet),
    /// One transformation's raw output, for piping
    Text(String),
}

/// Resolves transformations by name against a [`Registry`] and applies them.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Registry,
    title: TitleCaser,
    icon_path: String,
}

impl Dispatcher {
    pub fn new(registry: Registry, title: TitleCaser) -> Self {
        Self {
            registry,
            title,
            icon_path: DEFAULT_ICON_PATH.to_string(),
        }
    }

    pub fn with_icon_path(mut self, icon_path: impl Into<String>) -> Self {
        self.icon_path = icon_path.into();
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn icon_path(&self) -> &str {
        &self.icon_path
    }

    /// Apply every registered transformation to `input`, in display order.
    pub fn list_all(&self, input: &str) -> ResultSet {
        let mut results = ResultSet::new();
        for transformation in self.registry.iter() {
            let text = transformation.apply(input, &self.title);
            log::trace!("{} -> {:?}", transformation, text);
            results.push(ResultItem::new(transformation, text, &self.icon_path));
        }
        results
    }

    /// Apply the transformation registered as `name` to `input`.
    pub fn invoke_named(&self, input: &str, name: &str) -> Result<String, DispatchError> {
        let transformation = self
            .registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownTransformation(name.to_string()))?;
        log::debug!("Applying {} ({})", transformation, transformation.label());
        Ok(transformation.apply(input, &self.title))
    }

    pub fn run(&self, invocation: &Invocation) -> Result<Output, DispatchError> {
        match invocation {
            Invocation::ListAll { input } => {
                log::debug!("Listing {} transformations", self.registry.len());
                Ok(Output::Items(self.list_all(input)))
            }
            Invocation::Named { input, name } => {
                self.invoke_named(input, name).map(Output::Text)
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(Registry::builtin(), TitleCaser::default())
    }
}
