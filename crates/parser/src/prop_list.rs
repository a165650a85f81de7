//! Parser for the PropList-style files.
//!
//! The same two-field record shape is shared by PropList.txt, DerivedCoreProperties.txt,
//! DerivedBinaryProperties.txt, emoji-data.txt, Scripts.txt, ScriptExtensions.txt and
//! WordBreakProperty.txt.
//!
//! Property descriptions: <https://www.unicode.org/reports/tr44/tr44-13.html#PropList.txt>

use crate::{
    lexer,
    model::{CodePointRange, PropList},
};

/// Parses two-field `range ; property` records into `prop_list`, appending each range to the
/// bucket of its property. In multi-value mode the property field is a space-separated list of
/// property names that all receive the range; ScriptExtensions.txt is the only file using it.
pub fn parse_prop_list(input: &str, prop_list: &mut PropList, multi_value_property: bool) {
    for record in lexer::records(input) {
        assert_eq!(record.len(), 2, "unexpected field count {} in {record:?}", record.len());

        let code_point_range = record[0];
        let properties: Vec<&str> =
            if multi_value_property { record[1].split(' ').collect() } else { vec![record[1]] };

        for property in properties {
            let code_points = prop_list.entry(property.to_string()).or_default();

            let range = match code_point_range.split_once("..") {
                Some((first, last)) => CodePointRange {
                    first: lexer::parse_code_point(first),
                    last: lexer::parse_code_point(last),
                },
                None => {
                    let code_point = lexer::parse_code_point(code_point_range);
                    CodePointRange { first: code_point, last: code_point }
                }
            };

            assert!(range.first <= range.last, "inverted code point range {code_point_range:?}");
            code_points.push(range);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_code_points_and_ranges() {
        let mut prop_list = PropList::default();
        let input = "\
# PropList
0030..0039    ; ASCII_Hex_Digit # Nd  [10] DIGIT ZERO..DIGIT NINE
002D          ; Dash
058A          ; Dash
";
        parse_prop_list(input, &mut prop_list, false);

        assert_eq!(
            prop_list["ASCII_Hex_Digit"],
            vec![CodePointRange { first: 0x30, last: 0x39 }]
        );
        assert_eq!(
            prop_list["Dash"],
            vec![
                CodePointRange { first: 0x2D, last: 0x2D },
                CodePointRange { first: 0x58A, last: 0x58A },
            ]
        );
    }

    #[test]
    fn merges_buckets_across_files() {
        let mut prop_list = PropList::default();
        parse_prop_list("0041..005A    ; Alphabetic\n", &mut prop_list, false);
        parse_prop_list("0061..007A    ; Alphabetic\n", &mut prop_list, false);

        assert_eq!(prop_list["Alphabetic"].len(), 2);
    }

    #[test]
    fn multi_value_mode_fans_out_to_every_property() {
        let mut prop_list = PropList::default();
        parse_prop_list("3006          ; Hani Hira Kana\n", &mut prop_list, true);

        let range = CodePointRange { first: 0x3006, last: 0x3006 };
        assert_eq!(prop_list["Hani"], vec![range]);
        assert_eq!(prop_list["Hira"], vec![range]);
        assert_eq!(prop_list["Kana"], vec![range]);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut prop_list = PropList::default();
        let input = "\
0009..000D    ; White_Space
0021..0023    ; Pattern_Syntax
00AD          ; Hyphen
";
        parse_prop_list(input, &mut prop_list, false);

        let keys: Vec<_> = prop_list.keys().collect();
        assert_eq!(keys, vec!["White_Space", "Pattern_Syntax", "Hyphen"]);
    }
}
