use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Generate compact Unicode property tables from the Unicode Character Database.
#[derive(Clone, Debug, Parser)]
#[command(name = "ucdgen", version)]
pub struct Opts {
    /// Path to the Unicode Data header file to generate.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub generated_header_path: PathBuf,

    /// Path to the Unicode Data implementation file to generate.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub generated_implementation_path: PathBuf,

    /// Path to UnicodeData.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub unicode_data_path: PathBuf,

    /// Path to SpecialCasing.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub special_casing_path: PathBuf,

    /// Path to PropList.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub prop_list_path: PathBuf,

    /// Path to DerivedCoreProperties.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub derived_core_prop_path: PathBuf,

    /// Path to DerivedBinaryProperties.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub derived_binary_prop_path: PathBuf,

    /// Path to PropertyAliases.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub prop_alias_path: PathBuf,

    /// Path to PropertyValueAliases.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub prop_value_alias_path: PathBuf,

    /// Path to Scripts.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub scripts_path: PathBuf,

    /// Path to ScriptExtensions.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub script_extensions_path: PathBuf,

    /// Path to WordBreakProperty.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub word_break_path: PathBuf,

    /// Path to emoji-data.txt file.
    #[arg(long, value_hint = ValueHint::FilePath, value_name = "PATH")]
    pub emoji_data_path: PathBuf,
}
