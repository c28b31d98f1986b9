//! `{{name}}` placeholder templates, cartesian expansion of variable sets and
//! coercion of JSON-sourced values into interpolation text.
mod compile;
mod expand;
mod value;


pub use compile::{CompiledTemplate, compile, first_placeholder};
pub use expand::{Binding, VarSets, combination_count, expand};
pub use value::{to_float, to_int, to_text, value_kind};
