//! Emitter for the declaration artifact: the generated Unicode data header.

use crate::SourceGenerator;
use itertools::Itertools;
use tracing::debug;
use ucdgen_parser::{Alias, UnicodeData};

/// Per-code-point fields that survive into the emitted artifacts. The full UnicodeData record is
/// parsed and kept in the model, but only these fields (plus the always-present code point,
/// casing, property, script and word break payloads) are written out, to keep the generated
/// table compact and its compile time in check.
pub(crate) const DESIRED_FIELDS: &[&str] =
    &["name", "general_category", "simple_uppercase_mapping", "simple_lowercase_mapping"];

/// Renders the generated header declaring the discovered enums, the record layouts and the
/// lookup entry points.
pub fn generate_header(unicode_data: &UnicodeData) -> String {
    let mut generator = SourceGenerator::new();
    generator.set("casing_transform_size", unicode_data.largest_casing_transform_size.to_string());
    generator.set("special_casing_size", unicode_data.largest_special_casing_size.to_string());
    generator
        .set("script_extensions_size", unicode_data.largest_script_extensions_size.to_string());

    generator.append(
        r#"
#pragma once

#include <AK/Optional.h>
#include <AK/Types.h>
#include <LibUnicode/Forward.h>

namespace Unicode {
"#,
    );

    generate_enum(&mut generator, "Locale", Some("None"), &unicode_data.locales, &[], &[], false);
    generate_enum(
        &mut generator,
        "Condition",
        Some("None"),
        &unicode_data.conditions,
        &[],
        &[],
        false,
    );
    generate_enum(
        &mut generator,
        "GeneralCategory",
        Some("None"),
        &unicode_data.general_categories,
        &unicode_data.general_category_unions,
        &unicode_data.general_category_aliases,
        true,
    );

    let properties: Vec<String> = unicode_data.prop_list.keys().cloned().collect();
    generate_enum(
        &mut generator,
        "Property",
        Some("Assigned"),
        &properties,
        &[],
        &unicode_data.prop_aliases,
        true,
    );

    let scripts: Vec<String> = unicode_data.script_list.keys().cloned().collect();
    generate_enum(&mut generator, "Script", None, &scripts, &[], &unicode_data.script_aliases, false);

    let word_break_properties: Vec<String> =
        unicode_data.word_break_prop_list.keys().cloned().collect();
    generate_enum(
        &mut generator,
        "WordBreakProperty",
        Some("Other"),
        &word_break_properties,
        &[],
        &[],
        false,
    );

    generator.append(
        r#"
struct SpecialCasing {
    u32 code_point { 0 };

    u32 lowercase_mapping[@casing_transform_size@];
    u32 lowercase_mapping_size { 0 };

    u32 uppercase_mapping[@casing_transform_size@];
    u32 uppercase_mapping_size { 0 };

    u32 titlecase_mapping[@casing_transform_size@];
    u32 titlecase_mapping_size { 0 };

    Locale locale { Locale::None };
    Condition condition { Condition::None };
};

struct UnicodeData {
    u32 code_point;"#,
    );

    // Only primitive types are used, so the table can be a statically initialized constant.
    append_field(&mut generator, "char const*", "name");
    append_field(&mut generator, "GeneralCategory", "general_category");
    append_field(&mut generator, "u8", "canonical_combining_class");
    append_field(&mut generator, "char const*", "bidi_class");
    append_field(&mut generator, "char const*", "decomposition_type");
    append_field(&mut generator, "i8", "numeric_value_decimal");
    append_field(&mut generator, "i8", "numeric_value_digit");
    append_field(&mut generator, "i8", "numeric_value_numeric");
    append_field(&mut generator, "bool", "bidi_mirrored");
    append_field(&mut generator, "char const*", "unicode_1_name");
    append_field(&mut generator, "char const*", "iso_comment");
    append_field(&mut generator, "u32", "simple_uppercase_mapping");
    append_field(&mut generator, "u32", "simple_lowercase_mapping");
    append_field(&mut generator, "u32", "simple_titlecase_mapping");

    generator.append(
        r#"

    SpecialCasing const* special_casing[@special_casing_size@] {};
    u32 special_casing_size { 0 };

    Property properties { Property::Assigned };

    Script script { Script::Unknown };
    Script script_extensions[@script_extensions_size@];
    u32 script_extensions_size { 0 };

    WordBreakProperty word_break_property { WordBreakProperty::Other };
};

namespace Detail {

Optional<UnicodeData> unicode_data_for_code_point(u32 code_point);
Optional<Property> property_from_string(StringView const& property);
Optional<GeneralCategory> general_category_from_string(StringView const& general_category);
Optional<Script> script_from_string(StringView const& script);

}

}
"#,
    );

    let contents = generator.into_string();
    debug!(bytes = contents.len(), "generated unicode data header");
    contents
}

/// Emits one enum declaration, with an optional default member first (value 0), the sorted
/// member set, and the union and alias blocks after the members so every alias can refer to an
/// already-declared canonical. Bitmask enums get single-bit member values and `&`/`|` operators
/// over the 64-bit underlying type.
fn generate_enum(
    generator: &mut SourceGenerator,
    name: &str,
    default: Option<&str>,
    values: &[String],
    unions: &[Alias],
    aliases: &[Alias],
    as_bitmask: bool,
) {
    assert!(
        !as_bitmask || values.len() <= 64,
        "bitmask enum {name} cannot hold {} members",
        values.len()
    );

    let values: Vec<&String> = values.iter().sorted().collect();
    let unions: Vec<&Alias> = unions.iter().sorted_by(|a, b| a.alias.cmp(&b.alias)).collect();
    let aliases: Vec<&Alias> = aliases.iter().sorted_by(|a, b| a.alias.cmp(&b.alias)).collect();

    generator.set("name", name);
    generator.set("underlying", format!("{name}UnderlyingType"));

    if as_bitmask {
        generator.append(
            r#"
using @underlying@ = u64;

enum class @name@ : @underlying@ {"#,
        );
    } else {
        generator.append(
            r#"
enum class @name@ {"#,
        );
    }

    if let Some(default) = default {
        generator.set("default", default);
        generator.append(
            r#"
    @default@,"#,
        );
    }

    for (index, value) in values.iter().enumerate() {
        generator.set("value", value.as_str());
        if as_bitmask {
            generator.set("index", index.to_string());
            generator.append(
                r#"
    @value@ = static_cast<@underlying@>(1) << @index@,"#,
            );
        } else {
            generator.append(
                r#"
    @value@,"#,
            );
        }
    }

    for union_ in &unions {
        generator.set("union", union_.alias.as_str());
        generator.set("value", union_.property.as_str());
        generator.append(
            r#"
    @union@ = @value@,"#,
        );
    }
    for alias in &aliases {
        generator.set("alias", alias.alias.as_str());
        generator.set("value", alias.property.as_str());
        generator.append(
            r#"
    @alias@ = @value@,"#,
        );
    }

    generator.append(
        r#"
};
"#,
    );

    if as_bitmask {
        generator.append(
            r#"
constexpr @name@ operator&(@name@ value1, @name@ value2)
{
    return static_cast<@name@>(static_cast<@underlying@>(value1) & static_cast<@underlying@>(value2));
}

constexpr @name@ operator|(@name@ value1, @name@ value2)
{
    return static_cast<@name@>(static_cast<@underlying@>(value1) | static_cast<@underlying@>(value2));
}
"#,
        );
    }
}

fn append_field(generator: &mut SourceGenerator, ty: &str, name: &str) {
    if !DESIRED_FIELDS.contains(&name) {
        return;
    }

    generator.set("type", ty);
    generator.set("name", name);
    generator.append(
        r#"
    @type@ @name@;"#,
    );
}
