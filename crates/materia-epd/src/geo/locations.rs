//! ILCD location codes grouped by region.

use materia_core::constants::GLOBAL_LOCATION;

/// Region code → member country codes (ISO 3166 alpha-2 as used by ILCD).
pub(crate) const REGIONS: &[(&str, &[&str])] = &[
    (
        "RER",
        &[
            "AL", "AT", "BA", "BE", "BG", "BY", "CH", "CY", "CZ", "DE", "DK", "EE", "ES", "FI",
            "FR", "GB", "GR", "HR", "HU", "IE", "IS", "IT", "LI", "LT", "LU", "LV", "MD", "ME",
            "MK", "MT", "NL", "NO", "PL", "PT", "RO", "RS", "SE", "SI", "SK", "UA", "XK",
        ],
    ),
    ("RNA", &["CA", "MX", "US"]),
    (
        "RLA",
        &[
            "AR", "BO", "BR", "CL", "CO", "CR", "CU", "DO", "EC", "GT", "HN", "JM", "NI", "PA",
            "PE", "PY", "SV", "TT", "UY", "VE",
        ],
    ),
    (
        "RAS",
        &[
            "BD", "CN", "HK", "ID", "IN", "JP", "KH", "KR", "KZ", "LK", "MM", "MN", "MY", "NP",
            "PH", "PK", "RU", "SG", "TH", "TW", "UZ", "VN",
        ],
    ),
    (
        "RME",
        &[
            "AE", "BH", "IL", "IQ", "IR", "JO", "KW", "LB", "OM", "QA", "SA", "SY", "TR", "YE",
        ],
    ),
    (
        "RAF",
        &[
            "AO", "CI", "CM", "DZ", "EG", "ET", "GH", "KE", "MA", "MZ", "NG", "SN", "TN", "TZ",
            "UG", "ZA", "ZM", "ZW",
        ],
    ),
    ("OCE", &["AU", "FJ", "NZ", "PG"]),
];

/// Spellings that denote a known code.
const ALIASES: &[(&str, &str)] = &[
    ("EU", "RER"),
    ("EU-27", "RER"),
    ("EU-28", "RER"),
    ("EU27", "RER"),
    ("EU28", "RER"),
    ("EUROPE", "RER"),
    ("UK", "GB"),
    ("GLOBAL", "GLO"),
    ("WORLD", "GLO"),
    ("ROW", "GLO"),
];

/// Uppercase, trimmed, aliases resolved. Unknown codes pass through.
pub fn normalize_location(code: &str) -> String {
    let code = code.trim().to_ascii_uppercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == code)
        .map(|(_, known)| known.to_string())
        .unwrap_or(code)
}

/// Region of a country code; `None` for regions, `GLO` and unknown codes.
pub fn region_of(code: &str) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(_, members)| members.contains(&code))
        .map(|(region, _)| *region)
}

pub fn is_region(code: &str) -> bool {
    REGIONS.iter().any(|(region, _)| *region == code)
}

pub fn is_known(code: &str) -> bool {
    code == GLOBAL_LOCATION || is_region(code) || region_of(code).is_some()
}

pub(crate) fn members(region: &str) -> &'static [&'static str] {
    REGIONS
        .iter()
        .find(|(r, _)| *r == region)
        .map(|(_, m)| *m)
        .unwrap_or(&[])
}

/// Every known code, `GLO` included.
pub(crate) fn all_codes() -> impl Iterator<Item = &'static str> {
    std::iter::once(GLOBAL_LOCATION).chain(
        REGIONS
            .iter()
            .flat_map(|(region, members)| std::iter::once(*region).chain(members.iter().copied())),
    )
}
