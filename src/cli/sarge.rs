use std::convert::Infallible;

use sarge::ArgumentType;

use crate::cli::{SourceArgs, is_stdin};

impl ArgumentType for SourceArgs {
    type Error = Infallible;

    const REPEATABLE: bool = true;

    fn from_value(val: Option<&str>) -> sarge::ArgResult<Self> {
        let sources = match val {
            None => Vec::new(),
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|token| if is_stdin(token) { "-" } else { token })
                .map(str::to_string)
                .collect(),
        };

        Some(Ok(SourceArgs(sources)))
    }

    fn default_value() -> Option<Self> {
        Some(SourceArgs::default())
    }
}
