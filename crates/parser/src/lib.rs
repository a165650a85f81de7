//! Parsers for the Unicode Character Database (UCD) text files.
//!
//! Each UCD file contributes one dimension of per-code-point data: general categories and simple
//! case mappings from UnicodeData.txt, binary properties from the PropList family, scripts and
//! script extensions, word break classes, special casings and the various alias tables. The
//! parsers in this crate normalize those heterogeneous record formats into a single
//! [`UnicodeData`] model that the code generator consumes.
//!
//! All parsers operate on file contents as strings; opening and reading the files is the
//! caller's concern. Malformed records abort the process, since the UCD is a vendored, versioned
//! input and a parse failure means the tool no longer matches the UCD edition it is fed.

mod lexer;
mod model;

mod aliases;
mod prop_list;
mod special_casing;
mod unicode_data;

pub use aliases::{parse_alias_list, parse_value_alias_list};
pub use model::{Alias, CodePointData, CodePointRange, PropList, SpecialCasing, UnicodeData};
pub use prop_list::parse_prop_list;
pub use special_casing::parse_special_casing;
pub use unicode_data::parse_unicode_data;
