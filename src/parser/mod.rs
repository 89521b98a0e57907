mod common;
mod typescript;

pub use common::{is_identifier, ParseResult, Parser};
pub use typescript::TypeScriptParser;
