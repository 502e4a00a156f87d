//! Static region tables: the default region list, the region → continent
//! mapping, and ISO 3166-1 alpha-2 country names.
//!
//! Both lookups are total: a code with no entry resolves to [`crate::UNKNOWN`].

use crate::UNKNOWN;

/// Default regions queried when `TRENDSCOPE_REGIONS` is not set, grouped by
/// continent. Each code appears once.
pub const WORLD_REGIONS: &[&str] = &[
    // Africa
    "DZ", "AO", "BJ", "BW", "BF", "BI", "CM", "CV", "CF", "TD", "KM", "CG", "CD", "CI", "DJ", "EG",
    "GQ", "ER", "ET", "GA", "GM", "GH", "GN", "GW", "KE", "LS", "LR", "LY", "MG", "MW", "ML", "MR",
    "MU", "YT", "MA", "MZ", "NA", "NE", "NG", "RW", "RE", "SH", "ST", "SN", "SC", "SL", "SO", "ZA",
    "SS", "SD", "TN", "TG", "TZ", "EH", "ZM", "ZW",
    // North America, Central America, Caribbean
    "US", "CA", "MX", "BM", "BB", "BS", "AI", "AG", "BL", "KN", "LC", "MF", "PM", "VC", "KY", "TC",
    "VG", "VI", "PR", "HT",
    // South America
    "AR", "BO", "BR", "CL", "CO", "EC", "GF", "GY", "PY", "PE", "SR", "UY", "VE", "FK",
    // Asia
    "AF", "AM", "AZ", "BD", "BT", "BN", "KH", "CN", "HK", "IN", "ID", "IR", "IQ", "JP", "KZ", "KP",
    "KR", "KG", "LA", "LB", "MO", "MY", "MV", "MN", "MM", "NP", "PK", "PH", "SG", "LK", "TH", "TL",
    "VN",
    // Middle East
    "SA", "AE", "QA", "KW", "BH", "OM", "YE", "JO", "SY", "PS", "TR",
    // Europe
    "AL", "AD", "AT", "BY", "BE", "BA", "BG", "HR", "CY", "CZ", "DK", "EE", "FO", "FI", "FR", "DE",
    "GI", "GR", "GL", "HU", "IS", "IE", "IM", "IT", "JE", "GG", "LV", "LI", "LT", "LU", "MK", "MT",
    "MD", "MC", "ME", "NL", "NO", "PL", "PT", "RO", "RU", "SM", "RS", "SK", "SI", "ES", "SE", "CH",
    "UA", "GB", "XK",
    // Oceania
    "AU", "NZ", "FJ", "WS", "PF", "NC", "PG", "SB", "VU", "TO", "TV", "NR", "FM", "MH", "MP", "WF",
    "TK", "CK", "GU",
];

/// Maps a region code to its continent.
///
/// Middle Eastern countries get their own bucket rather than folding into
/// Asia. Greenland is reported with Europe.
#[must_use]
pub fn continent_for_region(region: &str) -> &'static str {
    match region {
        "DZ" | "AO" | "BJ" | "BW" | "BF" | "BI" | "CM" | "CV" | "CF" | "TD" | "KM" | "CG" | "CD"
        | "CI" | "DJ" | "EG" | "GQ" | "ER" | "ET" | "GA" | "GM" | "GH" | "GN" | "GW" | "KE"
        | "LS" | "LR" | "LY" | "MG" | "MW" | "ML" | "MR" | "MU" | "YT" | "MA" | "MZ" | "NA"
        | "NE" | "NG" | "RW" | "RE" | "SH" | "ST" | "SN" | "SC" | "SL" | "SO" | "ZA" | "SS"
        | "SD" | "SZ" | "TN" | "TG" | "TZ" | "UG" | "EH" | "ZM" | "ZW" => "Africa",

        "US" | "CA" | "MX" | "BM" | "BB" | "BS" | "AI" | "AG" | "BL" | "KN" | "LC" | "MF" | "PM"
        | "VC" | "KY" | "TC" | "VG" | "VI" | "PR" | "HT" | "DO" | "CU" | "JM" | "TT" | "BZ"
        | "CR" | "SV" | "GT" | "HN" | "NI" | "PA" => "North America",

        "AR" | "BO" | "BR" | "CL" | "CO" | "EC" | "GF" | "GY" | "PY" | "PE" | "SR" | "UY" | "VE"
        | "FK" => "South America",

        "AF" | "AM" | "AZ" | "BD" | "BT" | "BN" | "KH" | "CN" | "HK" | "IN" | "ID" | "IR" | "IQ"
        | "JP" | "KZ" | "KP" | "KR" | "KG" | "LA" | "LB" | "MO" | "MY" | "MV" | "MN" | "MM"
        | "NP" | "PK" | "PH" | "SG" | "LK" | "TH" | "TL" | "VN" | "TW" | "UZ" | "TJ" | "TM"
        | "GE" => "Asia",

        "TR" | "SA" | "AE" | "QA" | "KW" | "BH" | "OM" | "YE" | "JO" | "SY" | "PS" | "IL" => {
            "Middle East"
        }

        "AL" | "AD" | "AT" | "BY" | "BE" | "BA" | "BG" | "HR" | "CY" | "CZ" | "DK" | "EE" | "FI"
        | "FR" | "DE" | "GI" | "GR" | "HU" | "IS" | "IE" | "IT" | "LV" | "LI" | "LT" | "LU"
        | "MK" | "MT" | "MD" | "MC" | "ME" | "NL" | "NO" | "PL" | "PT" | "RO" | "RU" | "SM"
        | "RS" | "SK" | "SI" | "ES" | "SE" | "CH" | "UA" | "GB" | "XK" | "GG" | "JE" | "IM"
        | "FO" | "GL" => "Europe",

        "AU" | "NZ" | "FJ" | "PG" | "SB" | "VU" | "NC" | "PF" | "WS" | "TO" | "TV" | "KI" | "MH"
        | "FM" | "MP" | "PW" | "NR" | "NU" | "CK" | "NF" | "TK" | "WF" | "GU" => "Oceania",

        _ => UNKNOWN,
    }
}

/// Returns the English short name for a region code.
#[must_use]
pub fn country_name(region: &str) -> &'static str {
    COUNTRY_NAMES
        .iter()
        .find(|(code, _)| *code == region)
        .map_or(UNKNOWN, |(_, name)| *name)
}

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("AE", "United Arab Emirates"),
    ("AF", "Afghanistan"),
    ("AG", "Antigua and Barbuda"),
    ("AI", "Anguilla"),
    ("AL", "Albania"),
    ("AM", "Armenia"),
    ("AO", "Angola"),
    ("AQ", "Antarctica"),
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("AZ", "Azerbaijan"),
    ("BA", "Bosnia and Herzegovina"),
    ("BB", "Barbados"),
    ("BD", "Bangladesh"),
    ("BE", "Belgium"),
    ("BF", "Burkina Faso"),
    ("BG", "Bulgaria"),
    ("BH", "Bahrain"),
    ("BI", "Burundi"),
    ("BJ", "Benin"),
    ("BL", "Saint Barthélemy"),
    ("BM", "Bermuda"),
    ("BN", "Brunei"),
    ("BO", "Bolivia"),
    ("BQ", "Bonaire, Sint Eustatius and Saba"),
    ("BR", "Brazil"),
    ("BS", "Bahamas"),
    ("BT", "Bhutan"),
    ("BW", "Botswana"),
    ("BY", "Belarus"),
    ("BZ", "Belize"),
    ("CA", "Canada"),
    ("CC", "Cocos (Keeling) Islands"),
    ("CD", "Congo (Kinshasa)"),
    ("CF", "Central African Republic"),
    ("CG", "Congo (Brazzaville)"),
    ("CH", "Switzerland"),
    ("CI", "Ivory Coast"),
    ("CK", "Cook Islands"),
    ("CL", "Chile"),
    ("CM", "Cameroon"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CU", "Cuba"),
    ("CV", "Cape Verde"),
    ("CW", "Curaçao"),
    ("CX", "Christmas Island"),
    ("CY", "Cyprus"),
    ("CZ", "Czech Republic"),
    ("DE", "Germany"),
    ("DJ", "Djibouti"),
    ("DK", "Denmark"),
    ("DO", "Dominican Republic"),
    ("DZ", "Algeria"),
    ("EC", "Ecuador"),
    ("EE", "Estonia"),
    ("EG", "Egypt"),
    ("EH", "Western Sahara"),
    ("ER", "Eritrea"),
    ("ES", "Spain"),
    ("ET", "Ethiopia"),
    ("FI", "Finland"),
    ("FJ", "Fiji"),
    ("FK", "Falkland Islands"),
    ("FM", "Micronesia"),
    ("FO", "Faroe Islands"),
    ("FR", "France"),
    ("GA", "Gabon"),
    ("GB", "United Kingdom"),
    ("GE", "Georgia"),
    ("GF", "French Guiana"),
    ("GG", "Guernsey"),
    ("GH", "Ghana"),
    ("GI", "Gibraltar"),
    ("GL", "Greenland"),
    ("GM", "Gambia"),
    ("GN", "Guinea"),
    ("GQ", "Equatorial Guinea"),
    ("GR", "Greece"),
    ("GS", "South Georgia and the South Sandwich Islands"),
    ("GT", "Guatemala"),
    ("GU", "Guam"),
    ("GW", "Guinea-Bissau"),
    ("GY", "Guyana"),
    ("HK", "Hong Kong"),
    ("HM", "Heard Island and McDonald Islands"),
    ("HN", "Honduras"),
    ("HR", "Croatia"),
    ("HT", "Haiti"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IM", "Isle of Man"),
    ("IN", "India"),
    ("IO", "British Indian Ocean Territory"),
    ("IQ", "Iraq"),
    ("IR", "Iran"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JE", "Jersey"),
    ("JM", "Jamaica"),
    ("JO", "Jordan"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KG", "Kyrgyzstan"),
    ("KH", "Cambodia"),
    ("KI", "Kiribati"),
    ("KM", "Comoros"),
    ("KN", "Saint Kitts and Nevis"),
    ("KP", "North Korea"),
    ("KR", "South Korea"),
    ("KW", "Kuwait"),
    ("KY", "Cayman Islands"),
    ("KZ", "Kazakhstan"),
    ("LA", "Laos"),
    ("LB", "Lebanon"),
    ("LC", "Saint Lucia"),
    ("LI", "Liechtenstein"),
    ("LK", "Sri Lanka"),
    ("LR", "Liberia"),
    ("LS", "Lesotho"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("LY", "Libya"),
    ("MA", "Morocco"),
    ("MC", "Monaco"),
    ("MD", "Moldova"),
    ("ME", "Montenegro"),
    ("MF", "Saint Martin (French part)"),
    ("MG", "Madagascar"),
    ("MH", "Marshall Islands"),
    ("MK", "North Macedonia"),
    ("ML", "Mali"),
    ("MM", "Myanmar"),
    ("MN", "Mongolia"),
    ("MO", "Macau"),
    ("MP", "Northern Mariana Islands"),
    ("MR", "Mauritania"),
    ("MT", "Malta"),
    ("MU", "Mauritius"),
    ("MV", "Maldives"),
    ("MW", "Malawi"),
    ("MX", "Mexico"),
    ("MY", "Malaysia"),
    ("MZ", "Mozambique"),
    ("NA", "Namibia"),
    ("NC", "New Caledonia"),
    ("NE", "Niger"),
    ("NF", "Norfolk Island"),
    ("NG", "Nigeria"),
    ("NI", "Nicaragua"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NP", "Nepal"),
    ("NR", "Nauru"),
    ("NU", "Niue"),
    ("NZ", "New Zealand"),
    ("OM", "Oman"),
    ("PA", "Panama"),
    ("PE", "Peru"),
    ("PF", "French Polynesia"),
    ("PG", "Papua New Guinea"),
    ("PH", "Philippines"),
    ("PK", "Pakistan"),
    ("PL", "Poland"),
    ("PM", "Saint Pierre and Miquelon"),
    ("PN", "Pitcairn"),
    ("PR", "Puerto Rico"),
    ("PS", "Palestine"),
    ("PT", "Portugal"),
    ("PW", "Palau"),
    ("PY", "Paraguay"),
    ("QA", "Qatar"),
    ("RE", "Réunion"),
    ("RO", "Romania"),
    ("RS", "Serbia"),
    ("RU", "Russia"),
    ("RW", "Rwanda"),
    ("SA", "Saudi Arabia"),
    ("SB", "Solomon Islands"),
    ("SC", "Seychelles"),
    ("SD", "Sudan"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("SH", "Saint Helena"),
    ("SI", "Slovenia"),
    ("SK", "Slovakia"),
    ("SL", "Sierra Leone"),
    ("SM", "San Marino"),
    ("SN", "Senegal"),
    ("SO", "Somalia"),
    ("SR", "Suriname"),
    ("SS", "South Sudan"),
    ("ST", "Sao Tome and Principe"),
    ("SV", "El Salvador"),
    ("SX", "Sint Maarten (Dutch part)"),
    ("SY", "Syria"),
    ("SZ", "Eswatini"),
    ("TC", "Turks and Caicos Islands"),
    ("TD", "Chad"),
    ("TF", "French Southern Territories"),
    ("TG", "Togo"),
    ("TH", "Thailand"),
    ("TJ", "Tajikistan"),
    ("TK", "Tokelau"),
    ("TL", "Timor-Leste"),
    ("TM", "Turkmenistan"),
    ("TN", "Tunisia"),
    ("TO", "Tonga"),
    ("TR", "Turkey"),
    ("TT", "Trinidad and Tobago"),
    ("TV", "Tuvalu"),
    ("TW", "Taiwan"),
    ("TZ", "Tanzania"),
    ("UA", "Ukraine"),
    ("UG", "Uganda"),
    ("UM", "United States Minor Outlying Islands"),
    ("US", "United States"),
    ("UY", "Uruguay"),
    ("UZ", "Uzbekistan"),
    ("VC", "Saint Vincent and the Grenadines"),
    ("VE", "Venezuela"),
    ("VG", "British Virgin Islands"),
    ("VI", "United States Virgin Islands"),
    ("VN", "Vietnam"),
    ("VU", "Vanuatu"),
    ("WF", "Wallis and Futuna"),
    ("WS", "Samoa"),
    ("XK", "Kosovo"),
    ("YE", "Yemen"),
    ("YT", "Mayotte"),
    ("ZA", "South Africa"),
    ("ZM", "Zambia"),
    ("ZW", "Zimbabwe"),
];
