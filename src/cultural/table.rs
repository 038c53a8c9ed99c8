/// Expressiveness assumed for language/emotion pairs missing from the table
pub const DEFAULT_EXPRESSIVENESS: f64 = 0.5;

/// Static emotion-expressiveness values per language, in [0, 1].
/// A deliberately small placeholder table, not a learned model.
const EXPRESSIVENESS: &[(&str, &[(&str, f64)])] = &[
    ("en", &[("happiness", 0.6), ("sadness", 0.7), ("anger", 0.5)]),
    ("pt", &[("happiness", 0.8), ("sadness", 0.6), ("anger", 0.4)]),
    ("ja", &[("happiness", 0.4), ("sadness", 0.8), ("anger", 0.3)]),
];

pub fn expressiveness(language: &str, emotion: &str) -> f64 {
    EXPRESSIVENESS
        .iter()
        .find(|(lang, _)| *lang == language)
        .and_then(|(_, emotions)| emotions.iter().find(|(e, _)| *e == emotion))
        .map(|(_, value)| *value)
        .unwrap_or(DEFAULT_EXPRESSIVENESS)
}
