//! Language codes for localized error messages

pub const EN: &str = "en";
pub const RU: &str = "ru";
pub const DE: &str = "de";
pub const FR: &str = "fr";
pub const ES: &str = "es";
pub const PT: &str = "pt";
pub const IT: &str = "it";
pub const NL: &str = "nl";
pub const PL: &str = "pl";
pub const UK: &str = "uk";
pub const CS: &str = "cs";
pub const TR: &str = "tr";
pub const AR: &str = "ar";
pub const JA: &str = "ja";
pub const KO: &str = "ko";
pub const ZH: &str = "zh";

/// The language every error must carry a message for
pub const REQUIRED: &str = EN;
