/// Label for keywords no category claims.
pub const OTHER: &str = "אחר";

/// Market categories and the substrings that identify them.
///
/// Order matters: the first category with a matching pattern wins, so
/// "מסנן לברז" lands in water filtration, not faucets.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("סינון מים", &["מסנן", "פילטר", "סינון", "סנן", "טיהור"]),
    ("כיורים", &["כיור"]),
    ("ברז ומתזים", &["ברז", "מתז", "grohe", "גרואה", "מזלף", "מערבל"]),
    ("בר מים", &["בר מים", "מיני בר", "קולר", "מצנן", "מתקן מים"]),
    ("טוחן אשפה", &["טוחן", "מטחנ", "מגרס"]),
    ("מרכך מים", &["מרכך", "ריכוך"]),
    ("אוסמוזה הפוכה", &["אוסמוזה", "ממברנ"]),
    ("מערכות קירור/חימום", &["דוד", "מחמם", "קומקום", "חימום", "בויילר"]),
    ("מותגים ויצרנים", &["תמי", "מי עדן", "שטראוס", "אלקטרה"]),
    ("אביזרים ותחזוקה", &["צינור", "חיבור", "אטם", "שסתום", "משאב", "צנרת"]),
];

/// Category label for a keyword, by case-insensitive substring match.
pub fn categorize(keyword: &str) -> &'static str {
    let keyword = keyword.to_lowercase();
    CATEGORIES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| keyword.contains(p)))
        .map_or(OTHER, |(label, _)| label)
}
