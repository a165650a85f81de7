//! Emitter for the data artifact: the statically initialized tables and lookup entry points.

use crate::{header::DESIRED_FIELDS, SourceGenerator};
use tracing::debug;
use ucdgen_parser::UnicodeData;

/// Renders the generated implementation file.
pub fn generate_implementation(unicode_data: &UnicodeData) -> String {
    let mut generator = SourceGenerator::new();
    generator.set("special_casing_size", unicode_data.special_casing.len().to_string());
    generator.set("code_point_data_size", unicode_data.code_point_data.len().to_string());

    generator.append(
        r#"
#include <AK/Array.h>
#include <AK/CharacterTypes.h>
#include <AK/HashMap.h>
#include <AK/StringView.h>
#include <LibUnicode/UnicodeData.h>

namespace Unicode {
"#,
    );

    generator.append(
        r#"
static constexpr Array<SpecialCasing, @special_casing_size@> s_special_casing { {"#,
    );

    for casing in &unicode_data.special_casing {
        generator.set("code_point", format!("{:#x}", casing.code_point));
        generator.append("\n    { @code_point@");

        append_list_and_size(&mut generator, &casing.lowercase_mapping, |cp| format!("{cp:#x}"));
        append_list_and_size(&mut generator, &casing.uppercase_mapping, |cp| format!("{cp:#x}"));
        append_list_and_size(&mut generator, &casing.titlecase_mapping, |cp| format!("{cp:#x}"));

        generator
            .set("locale", if casing.locale.is_empty() { "None" } else { casing.locale.as_str() });
        generator.append(", Locale::@locale@");

        generator.set(
            "condition",
            if casing.condition.is_empty() { "None" } else { casing.condition.as_str() },
        );
        generator.append(", Condition::@condition@");

        generator.append(" },");
    }

    generator.append(
        r#"
} };

static constexpr Array<UnicodeData, @code_point_data_size@> s_unicode_data { {"#,
    );

    for data in &unicode_data.code_point_data {
        generator.set("code_point", format!("{:#x}", data.code_point));
        generator.append("\n    { @code_point@");

        append_field(&mut generator, "name", format!("\"{}\"", data.name));
        append_field(
            &mut generator,
            "general_category",
            format!("GeneralCategory::{}", data.general_category),
        );
        append_field(
            &mut generator,
            "canonical_combining_class",
            data.canonical_combining_class.to_string(),
        );
        append_field(&mut generator, "bidi_class", format!("\"{}\"", data.bidi_class));
        append_field(
            &mut generator,
            "decomposition_type",
            format!("\"{}\"", data.decomposition_type),
        );
        append_field(
            &mut generator,
            "numeric_value_decimal",
            data.numeric_value_decimal.unwrap_or(-1).to_string(),
        );
        append_field(
            &mut generator,
            "numeric_value_digit",
            data.numeric_value_digit.unwrap_or(-1).to_string(),
        );
        append_field(
            &mut generator,
            "numeric_value_numeric",
            data.numeric_value_numeric.unwrap_or(-1).to_string(),
        );
        append_field(&mut generator, "bidi_mirrored", data.bidi_mirrored.to_string());
        append_field(&mut generator, "unicode_1_name", format!("\"{}\"", data.unicode_1_name));
        append_field(&mut generator, "iso_comment", format!("\"{}\"", data.iso_comment));
        // Simple mappings that are absent in the source default to the code point itself.
        append_field(
            &mut generator,
            "simple_uppercase_mapping",
            format!("{:#x}", data.simple_uppercase_mapping.unwrap_or(data.code_point)),
        );
        append_field(
            &mut generator,
            "simple_lowercase_mapping",
            format!("{:#x}", data.simple_lowercase_mapping.unwrap_or(data.code_point)),
        );
        append_field(
            &mut generator,
            "simple_titlecase_mapping",
            format!("{:#x}", data.simple_titlecase_mapping.unwrap_or(data.code_point)),
        );

        append_list_and_size(&mut generator, &data.special_casing_indices, |index| {
            format!("&s_special_casing[{index}]")
        });

        let mut first = true;
        for property in &data.prop_list {
            generator.append(if first { ", " } else { " | " });
            generator.append(&format!("Property::{property}"));
            first = false;
        }

        generator.append(&format!(", Script::{}", data.script));
        append_list_and_size(&mut generator, &data.script_extensions, |script| {
            format!("Script::{script}")
        });
        generator.append(&format!(", WordBreakProperty::{}", data.word_break_property));
        generator.append(" },");
    }

    generator.append(
        r#"
} };

static HashMap<u32, UnicodeData const*> const& ensure_code_point_map()
{
    static HashMap<u32, UnicodeData const*> code_point_to_data_map;
    code_point_to_data_map.ensure_capacity(s_unicode_data.size());

    for (auto const& unicode_data : s_unicode_data)
        code_point_to_data_map.set(unicode_data.code_point, &unicode_data);

    return code_point_to_data_map;
}

static Optional<u32> index_of_code_point_in_range(u32 code_point)
{"#,
    );

    // Strict comparisons on purpose: the endpoints of every range are real entries in the code
    // point map, inserted when the First/Last marker rows were parsed. Widening these to
    // inclusive comparisons would return range hits for code points the map already covers.
    for range in &unicode_data.code_point_ranges {
        generator.set("first", format!("{:#x}", range.first));
        generator.set("last", format!("{:#x}", range.last));

        generator.append(
            r#"
    if ((code_point > @first@) && (code_point < @last@))
        return @first@;"#,
        );
    }

    generator.append(
        r#"
    return {};
}

namespace Detail {

Optional<UnicodeData> unicode_data_for_code_point(u32 code_point)
{
    static auto const& code_point_to_data_map = ensure_code_point_map();
    VERIFY(is_unicode(code_point));

    if (auto data = code_point_to_data_map.get(code_point); data.has_value())
        return *(data.value());

    if (auto index = index_of_code_point_in_range(code_point); index.has_value()) {
        auto data_for_range = *(code_point_to_data_map.get(*index).value());
        data_for_range.simple_uppercase_mapping = code_point;
        data_for_range.simple_lowercase_mapping = code_point;
        return data_for_range;
    }

    return {};
}

Optional<Property> property_from_string(StringView const& property)
{
    if (property == "Assigned"sv)
        return Property::Assigned;"#,
    );

    for property in unicode_data.prop_list.keys() {
        generator.set("property", property.as_str());
        generator.append(
            r#"
    if (property == "@property@"sv)
        return Property::@property@;"#,
        );
    }
    for alias in &unicode_data.prop_aliases {
        generator.set("property", alias.alias.as_str());
        generator.append(
            r#"
    if (property == "@property@"sv)
        return Property::@property@;"#,
        );
    }

    generator.append(
        r#"
    return {};
}

Optional<GeneralCategory> general_category_from_string(StringView const& general_category)
{"#,
    );

    for general_category in &unicode_data.general_categories {
        generator.set("general_category", general_category.as_str());
        generator.append(
            r#"
    if (general_category == "@general_category@"sv)
        return GeneralCategory::@general_category@;"#,
        );
    }
    for union_ in &unicode_data.general_category_unions {
        generator.set("general_category", union_.alias.as_str());
        generator.append(
            r#"
    if (general_category == "@general_category@"sv)
        return GeneralCategory::@general_category@;"#,
        );
    }
    for alias in &unicode_data.general_category_aliases {
        generator.set("general_category", alias.alias.as_str());
        generator.append(
            r#"
    if (general_category == "@general_category@"sv)
        return GeneralCategory::@general_category@;"#,
        );
    }

    generator.append(
        r#"
    return {};
}

Optional<Script> script_from_string(StringView const& script)
{"#,
    );

    for script in unicode_data.script_list.keys() {
        generator.set("script", script.as_str());
        generator.append(
            r#"
    if (script == "@script@"sv)
        return Script::@script@;"#,
        );
    }
    for alias in &unicode_data.script_aliases {
        generator.set("script", alias.alias.as_str());
        generator.append(
            r#"
    if (script == "@script@"sv)
        return Script::@script@;"#,
        );
    }

    generator.append(
        r#"
    return {};
}

}

}
"#,
    );

    let contents = generator.into_string();
    debug!(bytes = contents.len(), "generated unicode data implementation");
    contents
}

/// Emits `, value` for fields on the emitted-payload allow-list, and nothing for the rest, so
/// the row literals line up with the struct declared in the header.
fn append_field(generator: &mut SourceGenerator, name: &str, value: String) {
    if !DESIRED_FIELDS.contains(&name) {
        return;
    }

    generator.set("value", value);
    generator.append(", @value@");
}

/// Emits a fixed-size array literal and its element count: `, { a, b }, 2`, or `, {}, 0` for an
/// empty list.
fn append_list_and_size<T>(
    generator: &mut SourceGenerator,
    list: &[T],
    format: impl Fn(&T) -> String,
) {
    if list.is_empty() {
        generator.append(", {}, 0");
        return;
    }

    let mut first = true;
    generator.append(", {");
    for item in list {
        generator.append(if first { " " } else { ", " });
        generator.append(&format(item));
        first = false;
    }
    generator.append(&format!(" }}, {}", list.len()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ucdgen_parser::{
        parse_prop_list, parse_special_casing, parse_unicode_data, parse_value_alias_list,
    };

    fn model_with_digit_zero() -> UnicodeData {
        let mut unicode_data = UnicodeData::new();
        parse_prop_list("0030..0039    ; ASCII_Hex_Digit\n", &mut unicode_data.prop_list, false);
        parse_unicode_data("0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;\n", &mut unicode_data);
        unicode_data
    }

    #[test]
    fn renders_code_point_rows_with_the_allow_listed_fields() {
        let implementation = generate_implementation(&model_with_digit_zero());

        assert!(implementation.contains(
            "\n    { 0x30, \"DIGIT ZERO\", GeneralCategory::Nd, 0x30, 0x30, {}, 0, \
             Property::ASCII | Property::ASCII_Hex_Digit, Script::Unknown, {}, 0, \
             WordBreakProperty::Other },"
        ));
    }

    #[test]
    fn renders_special_casing_rows() {
        let mut unicode_data = UnicodeData::new();
        parse_special_casing(
            "00DF; 00DF; 0053 0073; 0053 0053; # LATIN SMALL LETTER SHARP S\n0307; ; 0307; 0307; lt After_Soft_Dotted;\n",
            &mut unicode_data,
        );
        let implementation = generate_implementation(&unicode_data);

        assert!(implementation.contains(
            "\n    { 0xdf, { 0xdf }, 1, { 0x53, 0x53 }, 2, { 0x53, 0x73 }, 2, Locale::None, Condition::None },"
        ));
        assert!(implementation.contains(
            "\n    { 0x307, {}, 0, { 0x307 }, 1, { 0x307 }, 1, Locale::LT, Condition::AfterSoftDotted },"
        ));
    }

    #[test]
    fn range_fallback_uses_strict_comparisons() {
        let mut unicode_data = UnicodeData::new();
        parse_unicode_data(
            "3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;\n4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;\n",
            &mut unicode_data,
        );
        let implementation = generate_implementation(&unicode_data);

        assert!(implementation.contains(
            "\n    if ((code_point > 0x3400) && (code_point < 0x4dbf))\n        return 0x3400;"
        ));
        // Both endpoints are regular rows, so endpoint lookups are map hits.
        assert!(implementation.contains("\n    { 0x3400, \"CJK Ideograph Extension A\""));
        assert!(implementation.contains("\n    { 0x4dbf, \"CJK Ideograph Extension A\""));
    }

    #[test]
    fn string_lookups_cover_members_and_aliases() {
        let mut unicode_data = model_with_digit_zero();
        let general_categories = unicode_data.general_categories.clone();
        let general_category_unions = unicode_data.general_category_unions.clone();
        parse_value_alias_list(
            "gc ; Nd ; Decimal_Number\n",
            "gc",
            &general_categories,
            &general_category_unions,
            &mut unicode_data.general_category_aliases,
            true,
        );
        let implementation = generate_implementation(&unicode_data);

        assert!(implementation.contains(
            "\n    if (property == \"Assigned\"sv)\n        return Property::Assigned;"
        ));
        assert!(implementation
            .contains("\n    if (property == \"ASCII_Hex_Digit\"sv)\n        return Property::ASCII_Hex_Digit;"));
        assert!(implementation
            .contains("\n    if (general_category == \"Nd\"sv)\n        return GeneralCategory::Nd;"));
        // Alias lookups return the alias member, which the enum declares equal to its canonical.
        assert!(implementation.contains(
            "\n    if (general_category == \"Decimal_Number\"sv)\n        return GeneralCategory::Decimal_Number;"
        ));
        assert!(implementation
            .contains("\n    if (script == \"Unknown\"sv)\n        return Script::Unknown;"));
    }

    #[test]
    fn output_is_deterministic() {
        let unicode_data = model_with_digit_zero();
        assert_eq!(generate_implementation(&unicode_data), generate_implementation(&unicode_data));
    }
}
