/// Hebrew product roots and their inflected surface forms (plural, construct, feminine).
pub(super) const ROOT_VARIATIONS: &[(&str, &[&str])] = &[
    // Water filtration
    ("מסנן", &["מסנן", "מסננים", "מסנני", "מסננות", "מסננת"]),
    ("פילטר", &["פילטר", "פילטרים", "פילטרי", "פילטרות"]),
    ("סינון", &["סינון", "סינונים", "סינוני"]),
    // Sinks
    ("כיור", &["כיור", "כיורים", "כיורי", "כיורות"]),
    // Faucets
    ("ברז", &["ברז", "ברזים", "ברזי", "ברזות", "ברזת"]),
    ("מתז", &["מתז", "מתזים", "מתזי", "מתזות"]),
    ("מערבל", &["מערבל", "מערבלים", "מערבלי"]),
    // Water bars
    ("בר מים", &["בר מים", "ברי מים", "בר המים"]),
    ("מיני בר", &["מיני בר", "מיניבר", "מיני ברים"]),
    ("מתקן מים", &["מתקן מים", "מתקני מים", "מתקנים"]),
    ("קולר", &["קולר", "קולרים", "קולרי"]),
    ("מצנן", &["מצנן", "מצננים", "מצנני", "מצננת"]),
    // Garbage disposal
    ("טוחן", &["טוחן", "טוחנים", "טוחני", "טוחנת"]),
    ("מטחנה", &["מטחנה", "מטחנות", "מטחנת"]),
    // Water softener
    ("מרכך", &["מרכך", "מרככים", "מרככי", "מרככת"]),
    // Osmosis
    ("אוסמוזה", &["אוסמוזה", "אוסמוזות"]),
    ("ממברנה", &["ממברנה", "ממברנות", "ממברני"]),
    // Heating
    ("דוד", &["דוד", "דודים", "דודי"]),
    ("מחמם", &["מחמם", "מחממים", "מחממי", "מחממת"]),
    ("קומקום", &["קומקום", "קומקומים", "קומקומי"]),
    // Plumbing
    ("צינור", &["צינור", "צינורות", "צינורי"]),
    ("חיבור", &["חיבור", "חיבורים", "חיבורי"]),
    ("אטם", &["אטם", "אטמים", "אטמי"]),
    ("שסתום", &["שסתום", "שסתומים", "שסתומי"]),
    ("משאבה", &["משאבה", "משאבות", "משאבי"]),
];

/// Words appended to each base keyword when building compounds.
pub(super) const MODIFIERS: &[&str] = &[
    "מים", "מטבח", "אמבטיה", "שירותים", "בית", "ביתי", "חשמלי", "מקצועי", "קטן", "גדול",
    "נירוסטה", "תעשייתי",
];

/// Hand-picked high-value phrases checked as-is.
pub(super) const EXPANSION_KEYWORDS: &[&str] = &[
    // Bathroom
    "ארון אמבטיה",
    "ארונות אמבטיה",
    "מקלחון",
    "מקלחונים",
    "אסלה",
    "אסלות",
    "אמבטיה",
    "אמבטיות",
    "מראה אמבטיה",
    "מדף אמבטיה",
    "וילון מקלחת",
    // Kitchen
    "ארון מטבח",
    "ארונות מטבח",
    "משטח",
    "משטחים",
    // Installation
    "אינסטלציה",
    "אינסטלטור",
    "תיקון",
    "התקנה",
    // Materials
    "נירוסטה",
    "קרמיקה",
    "פורצלן",
    "שיש",
];
