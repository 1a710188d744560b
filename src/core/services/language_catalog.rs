use crate::core::models::Language;

static LANGUAGES: [Language; 18] = [
    Language::new("en", "English", "English"),
    Language::new("es", "Spanish", "Español"),
    Language::new("fr", "French", "Français"),
    Language::new("de", "German", "Deutsch"),
    Language::new("it", "Italian", "Italiano"),
    Language::new("pt", "Portuguese", "Português"),
    Language::new("ar", "Arabic", "العربية"),
    Language::new("zh", "Chinese", "中文"),
    Language::new("ja", "Japanese", "日本語"),
    Language::new("ko", "Korean", "한국어"),
    Language::new("ru", "Russian", "Русский"),
    Language::new("hi", "Hindi", "हिन्दी"),
    Language::new("tr", "Turkish", "Türkçe"),
    Language::new("nl", "Dutch", "Nederlands"),
    Language::new("pl", "Polish", "Polski"),
    Language::new("sv", "Swedish", "Svenska"),
    Language::new("vi", "Vietnamese", "Tiếng Việt"),
    Language::new("th", "Thai", "ไทย"),
];

pub fn all_languages() -> &'static [Language] {
    &LANGUAGES
}

pub fn language_by_code(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|language| language.code == code)
}

/// Unknown codes are returned as-is.
pub fn language_display_name(code: &str, use_native: bool) -> String {
    match language_by_code(code) {
        Some(language) if use_native => language.native_name.to_string(),
        Some(language) => language.name.to_string(),
        None => code.to_string(),
    }
}

pub fn search_languages(query: &str) -> Vec<&'static Language> {
    let lowercase_query = query.to_lowercase();
    LANGUAGES
        .iter()
        .filter(|language| language.matches_query(&lowercase_query))
        .collect()
}
