//! Parser for UnicodeData.txt, which also joins the property lists parsed from the other files
//! onto each assigned code point.
//!
//! Field descriptions: <https://www.unicode.org/reports/tr44/tr44-13.html#UnicodeData.txt>
//!                     <https://www.unicode.org/reports/tr44/#General_Category_Values>

use crate::{
    lexer,
    model::{CodePointData, CodePointRange, PropList, UnicodeData},
};

/// Parses UnicodeData.txt records into [`UnicodeData::code_point_data`].
///
/// `<…, First>`/`<…, Last>` marker pairs additionally produce an entry in
/// [`UnicodeData::code_point_ranges`]; the marker rows themselves are kept as regular records
/// (with the markers stripped from their names) so that range endpoints are always present in
/// the emitted per-code-point table.
pub fn parse_unicode_data(input: &str, unicode_data: &mut UnicodeData) {
    let mut code_point_range_start: Option<u32> = None;

    for record in lexer::records(input) {
        assert_eq!(record.len(), 15, "unexpected UnicodeData field count {}", record.len());

        let mut data = CodePointData {
            code_point: lexer::parse_code_point(record[0]),
            name: record[1].to_string(),
            general_category: record[2].to_string(),
            canonical_combining_class: record[3]
                .parse()
                .unwrap_or_else(|_| panic!("malformed combining class {:?}", record[3])),
            bidi_class: record[4].to_string(),
            decomposition_type: record[5].to_string(),
            numeric_value_decimal: record[6].parse().ok(),
            numeric_value_digit: record[7].parse().ok(),
            numeric_value_numeric: record[8].parse().ok(),
            bidi_mirrored: record[9] == "Y",
            unicode_1_name: record[10].to_string(),
            iso_comment: record[11].to_string(),
            simple_uppercase_mapping: lexer::parse_optional_code_point(record[12]),
            simple_lowercase_mapping: lexer::parse_optional_code_point(record[13]),
            simple_titlecase_mapping: lexer::parse_optional_code_point(record[14]),
            ..Default::default()
        };

        if let Some(name) = strip_range_marker(&data.name, ", First>") {
            assert!(
                code_point_range_start.is_none(),
                "code point range opened twice at {:#x}",
                data.code_point
            );
            code_point_range_start = Some(data.code_point);
            data.name = name;
        } else if let Some(name) = strip_range_marker(&data.name, ", Last>") {
            let first = code_point_range_start.take().unwrap_or_else(|| {
                panic!("code point range closed without being opened at {:#x}", data.code_point)
            });
            unicode_data.code_point_ranges.push(CodePointRange { first, last: data.code_point });
            data.name = name;
        }

        for casing in &unicode_data.special_casing {
            if casing.code_point == data.code_point {
                data.special_casing_indices.push(casing.index);
            }
        }

        data.prop_list = assign_code_point_properties(
            data.code_point,
            &unicode_data.prop_list,
            Some("Assigned"),
        );
        data.script =
            assign_code_point_property(data.code_point, &unicode_data.script_list, "Unknown");
        data.script_extensions =
            assign_code_point_properties(data.code_point, &unicode_data.script_extensions, None);
        data.word_break_property =
            assign_code_point_property(data.code_point, &unicode_data.word_break_prop_list, "Other");

        unicode_data.largest_special_casing_size = unicode_data
            .largest_special_casing_size
            .max(data.special_casing_indices.len() as u32);
        unicode_data.largest_script_extensions_size = unicode_data
            .largest_script_extensions_size
            .max(data.script_extensions.len() as u32);

        if !unicode_data.general_categories.contains(&data.general_category) {
            unicode_data.general_categories.push(data.general_category.clone());
        }

        unicode_data.code_point_data.push(data);
    }

    assert!(
        code_point_range_start.is_none(),
        "code point range opened at {:#x} was never closed",
        code_point_range_start.unwrap_or(0)
    );
}

/// Returns the name with the leading `<` and the given `, First>`/`, Last>` suffix removed, or
/// `None` if the name is not that range marker.
fn strip_range_marker(name: &str, suffix: &str) -> Option<String> {
    Some(name.strip_prefix('<')?.strip_suffix(suffix)?.to_string())
}

/// Scans `list` in iteration order and returns the key of the first entry whose ranges contain
/// `code_point`, or the default if no entry matches.
fn assign_code_point_property(code_point: u32, list: &PropList, default: &str) -> String {
    for (property, ranges) in list {
        if ranges.iter().any(|range| range.contains(code_point)) {
            return property.clone();
        }
    }
    default.to_string()
}

/// Scans `list` in iteration order and accumulates the key of every entry whose ranges contain
/// `code_point`. The default, if any, is only applied when no entry matched.
fn assign_code_point_properties(
    code_point: u32,
    list: &PropList,
    default: Option<&str>,
) -> Vec<String> {
    let mut properties: Vec<String> = list
        .iter()
        .filter(|(_, ranges)| ranges.iter().any(|range| range.contains(code_point)))
        .map(|(property, _)| property.clone())
        .collect();

    if properties.is_empty() {
        properties.extend(default.map(String::from));
    }
    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_prop_list, parse_special_casing};

    #[test]
    fn parses_a_plain_record() {
        let mut unicode_data = UnicodeData::new();
        parse_unicode_data("0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n", &mut unicode_data);

        let data = &unicode_data.code_point_data[0];
        assert_eq!(data.code_point, 0x30);
        assert_eq!(data.name, "DIGIT ZERO");
        assert_eq!(data.general_category, "Nd");
        assert_eq!(data.canonical_combining_class, 0);
        assert_eq!(data.bidi_class, "EN");
        assert_eq!(data.numeric_value_decimal, Some(0));
        assert_eq!(data.numeric_value_digit, Some(0));
        assert_eq!(data.numeric_value_numeric, Some(0));
        assert!(!data.bidi_mirrored);
        assert_eq!(data.simple_uppercase_mapping, None);
        assert_eq!(unicode_data.general_categories, vec!["Nd"]);
    }

    #[test]
    fn fractional_numeric_values_are_absent() {
        let mut unicode_data = UnicodeData::new();
        parse_unicode_data(
            "00BD;VULGAR FRACTION ONE HALF;No;0;ON;<fraction> 0031 2044 0032;;;1/2;N;FRACTION ONE HALF;;;;\n",
            &mut unicode_data,
        );

        let data = &unicode_data.code_point_data[0];
        assert_eq!(data.numeric_value_numeric, None);
        assert_eq!(data.decomposition_type, "<fraction> 0031 2044 0032");
    }

    #[test]
    fn collapses_first_last_marker_pairs() {
        let mut unicode_data = UnicodeData::new();
        let input = "\
3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;
";
        parse_unicode_data(input, &mut unicode_data);

        assert_eq!(
            unicode_data.code_point_ranges,
            vec![CodePointRange { first: 0x3400, last: 0x4DBF }]
        );
        assert_eq!(unicode_data.code_point_data[0].name, "CJK Ideograph Extension A");
        assert_eq!(unicode_data.code_point_data[1].name, "CJK Ideograph Extension A");
    }

    #[test]
    #[should_panic(expected = "never closed")]
    fn rejects_a_dangling_open_range() {
        let mut unicode_data = UnicodeData::new();
        parse_unicode_data(
            "3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;\n",
            &mut unicode_data,
        );
    }

    #[test]
    #[should_panic(expected = "closed without being opened")]
    fn rejects_an_unopened_range_close() {
        let mut unicode_data = UnicodeData::new();
        parse_unicode_data(
            "4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;\n",
            &mut unicode_data,
        );
    }

    #[test]
    fn assigns_properties_by_range_membership() {
        let mut unicode_data = UnicodeData::new();
        parse_prop_list("0030..0039    ; ASCII_Hex_Digit\n", &mut unicode_data.prop_list, false);
        parse_prop_list("0030..0039    ; Numeric\n", &mut unicode_data.word_break_prop_list, false);
        parse_prop_list("0030..0039    ; Latn\n", &mut unicode_data.script_extensions, true);

        parse_unicode_data("0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n", &mut unicode_data);

        let data = &unicode_data.code_point_data[0];
        // ASCII is seeded with the 0x00..0x7F range, so it matches before the parsed property.
        assert_eq!(data.prop_list, vec!["ASCII", "ASCII_Hex_Digit"]);
        assert_eq!(data.script, "Unknown");
        assert_eq!(data.script_extensions, vec!["Latn"]);
        assert_eq!(data.word_break_property, "Numeric");
        assert_eq!(unicode_data.largest_script_extensions_size, 1);
    }

    #[test]
    fn applies_defaults_when_nothing_matches() {
        let mut unicode_data = UnicodeData::new();
        parse_unicode_data(
            "4E00;<CJK Ideograph, First>;Lo;0;L;;;;;N;;;;;\n9FFF;<CJK Ideograph, Last>;Lo;0;L;;;;;N;;;;;\n",
            &mut unicode_data,
        );

        let data = &unicode_data.code_point_data[0];
        assert_eq!(data.prop_list, vec!["Assigned"]);
        assert_eq!(data.script, "Unknown");
        assert!(data.script_extensions.is_empty());
        assert_eq!(data.word_break_property, "Other");
    }

    #[test]
    fn single_valued_assignment_stops_at_the_first_match() {
        let mut list = PropList::default();
        list.insert("Greek".into(), vec![CodePointRange { first: 0x370, last: 0x3FF }]);
        list.insert("Coptic".into(), vec![CodePointRange { first: 0x370, last: 0x3FF }]);

        assert_eq!(assign_code_point_property(0x391, &list, "Unknown"), "Greek");
    }

    #[test]
    fn attaches_special_casing_indices() {
        let mut unicode_data = UnicodeData::new();
        parse_special_casing(
            "0130; 0069 0307; 0130; 0130; # LATIN CAPITAL LETTER I WITH DOT ABOVE\n",
            &mut unicode_data,
        );
        parse_unicode_data(
            "0130;LATIN CAPITAL LETTER I WITH DOT ABOVE;Lu;0;L;0049 0307;;;;N;LATIN CAPITAL LETTER I DOT;;;0069;\n",
            &mut unicode_data,
        );

        let data = &unicode_data.code_point_data[0];
        assert_eq!(data.special_casing_indices, vec![0]);
        assert_eq!(unicode_data.largest_special_casing_size, 1);
        assert_eq!(data.simple_lowercase_mapping, Some(0x69));
        assert_eq!(data.simple_uppercase_mapping, None);
    }
}
