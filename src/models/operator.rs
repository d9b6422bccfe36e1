/// The carriers the panel knows about, in display order.
///
/// Not stored in the backend; this list is the key space for FAQs and
/// materials and the card list of the home view.
pub const OPERADORAS: &[&str] = &[
    "Trasmontano",
    "Amil",
    "SulAmérica",
    "Bradesco",
    "Vera Cruz",
    "Supermed",
    "Qualicorp",
    "Porto",
    "Hapvida",
    "Unihosp",
    "MedSênior",
    "Prevent Senior",
];

/// Operators whose name contains `query`, case-insensitively.
///
/// An empty query matches everything. Order of `operators` is preserved.
pub fn filter_operators<'a>(operators: &[&'a str], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    operators
        .iter()
        .copied()
        .filter(|op| op.to_lowercase().contains(&needle))
        .collect()
}
