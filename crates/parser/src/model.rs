use indexmap::IndexMap;

/// A contiguous block of code points sharing properties.
///
/// Some code points are excluded from UnicodeData.txt and are instead covered by a range of code
/// points, as indicated by the "name" field. For example:
///     3400;<CJK Ideograph Extension A, First>;Lo;0;L;;;;;N;;;;;
///     4DBF;<CJK Ideograph Extension A, Last>;Lo;0;L;;;;;N;;;;;
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodePointRange {
    /// First code point of the range, inclusive.
    pub first: u32,
    /// Last code point of the range, inclusive.
    pub last: u32,
}

impl CodePointRange {
    pub(crate) fn contains(&self, code_point: u32) -> bool {
        (self.first <= code_point) && (code_point <= self.last)
    }
}

/// One record from SpecialCasing.txt: a locale- or context-sensitive case mapping that cannot be
/// expressed as a single-code-point simple mapping.
#[derive(Clone, Debug, Default)]
pub struct SpecialCasing {
    /// Position of this record in [`UnicodeData::special_casing`].
    pub index: u32,
    /// The code point this casing applies to.
    pub code_point: u32,
    pub lowercase_mapping: Vec<u32>,
    pub uppercase_mapping: Vec<u32>,
    pub titlecase_mapping: Vec<u32>,
    /// Uppercased locale tag, or empty if the casing is not locale-sensitive.
    pub locale: String,
    /// Condition tag with underscores removed, or empty.
    pub condition: String,
}

/// Mapping from a discovered property name to the code point ranges it covers.
///
/// Iteration order is the order of first appearance in the source files, which keeps both the
/// joiner's range-membership scans and the emitted output deterministic across runs.
pub type PropList = IndexMap<String, Vec<CodePointRange>>;

/// A `(canonical value, alias)` pair from one of the alias files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alias {
    /// The canonical value the alias refers to. For general category unions this is the full
    /// `A | B | C` member expression.
    pub property: String,
    /// The alternative spelling.
    pub alias: String,
}

impl Alias {
    pub(crate) fn new(property: impl Into<String>, alias: impl Into<String>) -> Self {
        Self { property: property.into(), alias: alias.into() }
    }
}

/// One record from UnicodeData.txt, joined with the properties contributed by the other files.
#[derive(Clone, Debug, Default)]
pub struct CodePointData {
    pub code_point: u32,
    /// Character name. For range markers, stripped of the angle brackets and First/Last suffix.
    pub name: String,
    /// General category short form, e.g. `Lu` or `Nd`.
    pub general_category: String,
    pub canonical_combining_class: u8,
    pub bidi_class: String,
    pub decomposition_type: String,
    pub numeric_value_decimal: Option<i8>,
    pub numeric_value_digit: Option<i8>,
    pub numeric_value_numeric: Option<i8>,
    pub bidi_mirrored: bool,
    pub unicode_1_name: String,
    pub iso_comment: String,
    pub simple_uppercase_mapping: Option<u32>,
    pub simple_lowercase_mapping: Option<u32>,
    pub simple_titlecase_mapping: Option<u32>,
    /// Indices into [`UnicodeData::special_casing`] for every casing triggered by this code point.
    pub special_casing_indices: Vec<u32>,
    /// Binary property names applying to this code point. Defaults to `Assigned`.
    pub prop_list: Vec<String>,
    /// Script name. Defaults to `Unknown`.
    pub script: String,
    pub script_extensions: Vec<String>,
    /// Word break class. Defaults to `Other`.
    pub word_break_property: String,
}

/// The aggregate model built over a whole run: every parsed record plus the enum member sets,
/// alias vectors and size maxima discovered along the way. Populated in a fixed parse order,
/// immutable afterwards, consumed once by the emitters.
#[derive(Clone, Debug)]
pub struct UnicodeData {
    pub special_casing: Vec<SpecialCasing>,
    pub largest_casing_transform_size: u32,
    pub largest_special_casing_size: u32,
    pub locales: Vec<String>,
    pub conditions: Vec<String>,

    pub code_point_data: Vec<CodePointData>,
    pub code_point_ranges: Vec<CodePointRange>,

    /// General category values discovered while parsing UnicodeData.txt, in order of first
    /// appearance. The Unicode standard additionally defines values which are not in any UCD
    /// file; those are unions of other values and live in `general_category_unions`.
    pub general_categories: Vec<String>,
    pub general_category_unions: Vec<Alias>,
    pub general_category_aliases: Vec<Alias>,

    /// Binary properties merged from PropList.txt, DerivedCoreProperties.txt,
    /// DerivedBinaryProperties.txt and emoji-data.txt. Seeded with the synthetic `Any` and
    /// `ASCII` properties, which are not in any UCD file. `Assigned` is the default enum value 0
    /// so `property & Assigned == Assigned` is always true. `Any` carries no ranges because only
    /// assigned code points are parsed, whereas `Any` would include unassigned ones.
    pub prop_list: PropList,
    pub prop_aliases: Vec<Alias>,

    pub script_list: PropList,
    pub script_aliases: Vec<Alias>,
    pub script_extensions: PropList,
    pub largest_script_extensions_size: u32,

    pub word_break_prop_list: PropList,
}

impl UnicodeData {
    /// Creates an empty model, seeded with the synthetic properties and the predefined general
    /// category unions.
    pub fn new() -> Self {
        let general_category_unions = vec![
            Alias::new("Ll | Lu | Lt", "LC"),
            Alias::new("Lu | Ll | Lt | Lm | Lo", "L"),
            Alias::new("Mn | Mc | Me", "M"),
            Alias::new("Nd | Nl | No", "N"),
            Alias::new("Pc | Pd | Ps | Pe | Pi | Pf | Po", "P"),
            Alias::new("Sm | Sc | Sk | So", "S"),
            Alias::new("Zs | Zl | Zp", "Z"),
            // This union should also contain Cn (Unassigned), but unassigned code points are
            // never parsed.
            Alias::new("Cc | Cf | Cs | Co", "C"),
        ];

        let mut prop_list = PropList::default();
        prop_list.insert("Any".into(), Vec::new());
        prop_list.insert("ASCII".into(), vec![CodePointRange { first: 0, last: 0x7f }]);

        let mut script_list = PropList::default();
        script_list.insert("Unknown".into(), Vec::new());

        Self {
            special_casing: Vec::new(),
            largest_casing_transform_size: 0,
            largest_special_casing_size: 0,
            locales: Vec::new(),
            conditions: Vec::new(),
            code_point_data: Vec::new(),
            code_point_ranges: Vec::new(),
            general_categories: Vec::new(),
            general_category_unions,
            general_category_aliases: Vec::new(),
            prop_list,
            prop_aliases: Vec::new(),
            script_list,
            script_aliases: Vec::new(),
            script_extensions: PropList::default(),
            largest_script_extensions_size: 0,
            word_break_prop_list: PropList::default(),
        }
    }
}

impl Default for UnicodeData {
    fn default() -> Self {
        Self::new()
    }
}
