//! Drives the UCD parsing pipeline and emits the generated Unicode data artifacts.

use eyre::Result;
use tracing::debug;
use ucdgen_codegen::{generate_header, generate_implementation};
use ucdgen_common::fs::{self, OutputFile};
use ucdgen_parser::{
    parse_alias_list, parse_prop_list, parse_special_casing, parse_unicode_data,
    parse_value_alias_list, UnicodeData,
};

mod opts;
pub use opts::Opts;

/// Parses every UCD input named in `opts` and writes the two generated artifacts.
///
/// The parse order is fixed: the joiner consults the property lists while processing
/// UnicodeData.txt, and the value alias parser consults the general category and script sets
/// discovered by the earlier passes.
pub fn generate(opts: &Opts) -> Result<()> {
    // Both outputs are opened up front so a bad output path fails before any parsing happens.
    let mut header = OutputFile::open(&opts.generated_header_path)?;
    let mut implementation = OutputFile::open(&opts.generated_implementation_path)?;

    let mut unicode_data = UnicodeData::new();

    let special_casing = fs::read_to_string(&opts.special_casing_path)?;
    parse_special_casing(&special_casing, &mut unicode_data);

    for path in [
        &opts.prop_list_path,
        &opts.derived_core_prop_path,
        &opts.derived_binary_prop_path,
        &opts.emoji_data_path,
    ] {
        let contents = fs::read_to_string(path)?;
        parse_prop_list(&contents, &mut unicode_data.prop_list, false);
    }

    let prop_alias = fs::read_to_string(&opts.prop_alias_path)?;
    parse_alias_list(&prop_alias, &unicode_data.prop_list, &mut unicode_data.prop_aliases);

    let scripts = fs::read_to_string(&opts.scripts_path)?;
    parse_prop_list(&scripts, &mut unicode_data.script_list, false);

    let script_extensions = fs::read_to_string(&opts.script_extensions_path)?;
    parse_prop_list(&script_extensions, &mut unicode_data.script_extensions, true);

    let word_break = fs::read_to_string(&opts.word_break_path)?;
    parse_prop_list(&word_break, &mut unicode_data.word_break_prop_list, false);

    let unicode_data_contents = fs::read_to_string(&opts.unicode_data_path)?;
    parse_unicode_data(&unicode_data_contents, &mut unicode_data);

    let prop_value_alias = fs::read_to_string(&opts.prop_value_alias_path)?;
    let general_categories = unicode_data.general_categories.clone();
    let general_category_unions = unicode_data.general_category_unions.clone();
    parse_value_alias_list(
        &prop_value_alias,
        "gc",
        &general_categories,
        &general_category_unions,
        &mut unicode_data.general_category_aliases,
        true,
    );
    let scripts_discovered: Vec<String> = unicode_data.script_list.keys().cloned().collect();
    parse_value_alias_list(
        &prop_value_alias,
        "sc",
        &scripts_discovered,
        &[],
        &mut unicode_data.script_aliases,
        false,
    );

    debug!(
        code_points = unicode_data.code_point_data.len(),
        ranges = unicode_data.code_point_ranges.len(),
        special_casings = unicode_data.special_casing.len(),
        "parsed the unicode character database"
    );

    if header.write_if_different(&generate_header(&unicode_data))? {
        debug!(path = ?header.path(), "wrote generated header");
    }
    if implementation.write_if_different(&generate_implementation(&unicode_data))? {
        debug!(path = ?implementation.path(), "wrote generated implementation");
    }

    Ok(())
}
