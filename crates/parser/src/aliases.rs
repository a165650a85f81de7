//! Parsers for PropertyAliases.txt and PropertyValueAliases.txt.
//!
//! Both files occasionally reference properties that are not present in every UCD edition;
//! aliases whose target is unknown are silently dropped rather than treated as errors.

use crate::{
    lexer,
    model::{Alias, PropList},
};

/// Parses PropertyAliases.txt records into `prop_aliases`.
///
/// The file is divided into sections by header comments ending in `"Properties"`; only the
/// `"Binary Properties"` section is of interest, for Unicode property escapes. Records carry
/// `alias ; property [; alias2]`.
pub fn parse_alias_list(input: &str, prop_list: &PropList, prop_aliases: &mut Vec<Alias>) {
    let mut current_property = String::new();

    let mut append_alias = |alias: &str, property: &str| {
        // The alias files contain lines such as "Hyphen = Hyphen", which are just skipped.
        if alias == property {
            return;
        }
        if !prop_list.contains_key(property) {
            return;
        }
        prop_aliases.push(Alias::new(property, alias));
    };

    for line in input.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            if let Some(section) = trimmed.strip_prefix('#') {
                if section.ends_with("Properties") {
                    current_property = section.trim().to_string();
                }
            }
            continue;
        }

        if current_property != "Binary Properties" {
            continue;
        }

        let Some(record) = lexer::split_record(line) else { continue };
        assert!(
            record.len() == 2 || record.len() == 3,
            "unexpected PropertyAliases field count {}",
            record.len()
        );

        append_alias(record[0], record[1]);
        if record.len() == 3 {
            append_alias(record[2], record[1]);
        }
    }
}

/// Parses the PropertyValueAliases.txt records of one category into `prop_aliases`.
///
/// Records carry `category ; short ; long [; extra]`. Which of the short and long forms is the
/// canonical value depends on the category: general categories use the short form,
/// scripts the long form. `primary_value_is_first` selects the convention. A canonical value
/// qualifies if it was discovered in `value_list` or names one of the predefined unions.
pub fn parse_value_alias_list(
    input: &str,
    desired_category: &str,
    value_list: &[String],
    prop_unions: &[Alias],
    prop_aliases: &mut Vec<Alias>,
    primary_value_is_first: bool,
) {
    let mut append_alias = |alias: &str, value: &str| {
        // The value alias file contains lines such as "Ahom = Ahom", which are just skipped.
        if alias == value {
            return;
        }
        if !value_list.iter().any(|v| v == value)
            && !prop_unions.iter().any(|union| union.alias == value)
        {
            return;
        }
        prop_aliases.push(Alias::new(value, alias));
    };

    for record in lexer::records(input) {
        if record[0] != desired_category {
            continue;
        }

        assert!(
            record.len() == 3 || record.len() == 4,
            "unexpected PropertyValueAliases field count {}",
            record.len()
        );

        let (value, alias) = if primary_value_is_first {
            (record[1], record[2])
        } else {
            (record[2], record[1])
        };
        append_alias(alias, value);

        if record.len() == 4 {
            append_alias(record[3], value);
        }
    }
}
