//! Parser for SpecialCasing.txt.
//!
//! Source: <https://www.unicode.org/Public/13.0.0/ucd/SpecialCasing.txt>
//! Field descriptions: <https://www.unicode.org/reports/tr44/tr44-13.html#SpecialCasing.txt>

use crate::{
    lexer,
    model::{SpecialCasing, UnicodeData},
};

/// Parses SpecialCasing.txt records into [`UnicodeData::special_casing`], discovering locales and
/// conditions along the way.
pub fn parse_special_casing(input: &str, unicode_data: &mut UnicodeData) {
    for record in lexer::records(input) {
        assert!(
            record.len() == 5 || record.len() == 6,
            "unexpected SpecialCasing field count {}",
            record.len()
        );

        let mut casing = SpecialCasing {
            index: unicode_data.special_casing.len() as u32,
            code_point: lexer::parse_code_point(record[0]),
            lowercase_mapping: lexer::parse_code_point_list(record[1]),
            titlecase_mapping: lexer::parse_code_point_list(record[2]),
            uppercase_mapping: lexer::parse_code_point_list(record[3]),
            ..Default::default()
        };

        if !record[4].is_empty() {
            let conditions: Vec<&str> = record[4].split(' ').collect();
            assert!(
                conditions.len() == 1 || conditions.len() == 2,
                "unexpected SpecialCasing condition list {:?}",
                record[4]
            );

            if conditions.len() == 2 {
                casing.locale = conditions[0].to_string();
                casing.condition = conditions[1].to_string();
            } else if conditions[0].bytes().all(|byte| byte.is_ascii_lowercase()) {
                casing.locale = conditions[0].to_string();
            } else {
                casing.condition = conditions[0].to_string();
            }

            casing.locale = casing.locale.to_uppercase();
            casing.condition = casing.condition.replace('_', "");

            if !casing.locale.is_empty() && !unicode_data.locales.contains(&casing.locale) {
                unicode_data.locales.push(casing.locale.clone());
            }
            if !casing.condition.is_empty() && !unicode_data.conditions.contains(&casing.condition)
            {
                unicode_data.conditions.push(casing.condition.clone());
            }
        }

        for mapping in
            [&casing.lowercase_mapping, &casing.titlecase_mapping, &casing.uppercase_mapping]
        {
            unicode_data.largest_casing_transform_size =
                unicode_data.largest_casing_transform_size.max(mapping.len() as u32);
        }

        unicode_data.special_casing.push(casing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unconditional_casing() {
        let mut unicode_data = UnicodeData::new();
        parse_special_casing(
            "00DF; 00DF; 0053 0073; 0053 0053; # LATIN SMALL LETTER SHARP S\n",
            &mut unicode_data,
        );

        let casing = &unicode_data.special_casing[0];
        assert_eq!(casing.index, 0);
        assert_eq!(casing.code_point, 0xDF);
        assert_eq!(casing.lowercase_mapping, vec![0xDF]);
        assert_eq!(casing.titlecase_mapping, vec![0x53, 0x73]);
        assert_eq!(casing.uppercase_mapping, vec![0x53, 0x53]);
        assert!(casing.locale.is_empty());
        assert!(casing.condition.is_empty());
        assert_eq!(unicode_data.largest_casing_transform_size, 2);
    }

    #[test]
    fn splits_locale_and_condition() {
        let mut unicode_data = UnicodeData::new();
        let input = "\
0049; 0131; 0049; 0049; tr; # LATIN CAPITAL LETTER I
0307; ; 0307; 0307; lt After_Soft_Dotted; # COMBINING DOT ABOVE
03A3; 03C2; 03A3; 03A3; Final_Sigma; # GREEK CAPITAL LETTER SIGMA
";
        parse_special_casing(input, &mut unicode_data);

        assert_eq!(unicode_data.special_casing[0].locale, "TR");
        assert!(unicode_data.special_casing[0].condition.is_empty());

        assert_eq!(unicode_data.special_casing[1].locale, "LT");
        assert_eq!(unicode_data.special_casing[1].condition, "AfterSoftDotted");
        assert!(unicode_data.special_casing[1].lowercase_mapping.is_empty());

        assert!(unicode_data.special_casing[2].locale.is_empty());
        assert_eq!(unicode_data.special_casing[2].condition, "FinalSigma");

        assert_eq!(unicode_data.locales, vec!["TR", "LT"]);
        assert_eq!(unicode_data.conditions, vec!["AfterSoftDotted", "FinalSigma"]);
    }

    #[test]
    fn deduplicates_discovered_locales() {
        let mut unicode_data = UnicodeData::new();
        let input = "\
0049; 0131; 0049; 0049; tr;
0130; 0069 0307; 0130; 0130; tr;
";
        parse_special_casing(input, &mut unicode_data);
        assert_eq!(unicode_data.locales, vec!["TR"]);
        assert_eq!(unicode_data.special_casing.len(), 2);
        assert_eq!(unicode_data.special_casing[1].index, 1);
    }
}
