//! Interface labels for the panel front-end
//!
//! Translation is a pure function of the selected [`Locale`] and a
//! [`MessageKey`]; the selected locale travels in [`crate::config::InterfaceConfig`]
//! rather than in any process-wide table.

use serde::{Deserialize, Serialize};

/// Interface language
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    /// English (default)
    #[default]
    English,
    /// Ukrainian
    Ukrainian,
    /// German
    German,
    /// French
    French,
    /// Russian
    Russian,
    /// Romani
    Romani,
}

impl Locale {
    /// All locales, in picker order
    pub const ALL: [Locale; 6] = [
        Locale::English,
        Locale::Ukrainian,
        Locale::German,
        Locale::French,
        Locale::Russian,
        Locale::Romani,
    ];

    /// Name shown in the interface-language picker
    pub fn name(&self) -> &'static str {
        match self {
            Locale::English => "English",
            Locale::Ukrainian => "Ukrainian",
            Locale::German => "German",
            Locale::French => "French",
            Locale::Russian => "Russian",
            Locale::Romani => "Romani",
        }
    }

    /// Look up a locale by picker name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.name().eq_ignore_ascii_case(name.trim()))
    }

    fn table(&self) -> &'static [&'static str; MessageKey::COUNT] {
        match self {
            Locale::English => &ENGLISH,
            Locale::Ukrainian => &UKRAINIAN,
            Locale::German => &GERMAN,
            Locale::French => &FRENCH,
            Locale::Russian => &RUSSIAN,
            Locale::Romani => &ROMANI,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            let known: Vec<_> = Self::ALL.iter().map(Locale::name).collect();
            format!("unknown locale '{}', expected one of: {}", s, known.join(", "))
        })
    }
}

/// Translatable interface strings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Window title
    WindowTitle,
    /// Label of the interface-language picker
    InterfaceLanguageLabel,
    /// Label of the Wikipedia-edition picker
    WikipediaLanguageLabel,
    /// Theme toggle while the light theme is active
    DarkTheme,
    /// Theme toggle while the dark theme is active
    LightTheme,
    /// Summary heading
    Summary,
    /// Sections heading
    Sections,
    /// Categories heading
    Categories,
    /// Fetch trigger
    NewArticle,
    /// Placeholder title while a fetch is in flight
    Fetching,
    /// Title shown in place of an article after a failure
    Error,
}

impl MessageKey {
    const COUNT: usize = 11;

    fn index(self) -> usize {
        self as usize
    }
}

const ENGLISH: [&str; MessageKey::COUNT] = [
    "Wikipedia Reflection Tool",
    "Interface Language:",
    "Wikipedia Language:",
    "🌙 Dark Theme",
    "☀️ Light Theme",
    "Summary",
    "Sections",
    "Categories",
    "🔄 New Random Article",
    "Fetching article...",
    "Error",
];

const UKRAINIAN: [&str; MessageKey::COUNT] = [
    "Інструмент для рефлексії Вікіпедії",
    "Мова інтерфейсу:",
    "Мова Вікіпедії:",
    "🌙 Темна тема",
    "☀️ Світла тема",
    "Короткий опис",
    "Розділи",
    "Категорії",
    "🔄 Нова випадкова стаття",
    "Отримання статті...",
    "Помилка",
];

const GERMAN: [&str; MessageKey::COUNT] = [
    "Wikipedia Reflexions-Tool",
    "Interface Sprache:",
    "Wikipedia Sprache:",
    "🌙 Dunkles Design",
    "☀️ Helles Design",
    "Zusammenfassung",
    "Abschnitte",
    "Kategorien",
    "🔄 Neuer zufälliger Artikel",
    "Artikel wird geladen...",
    "Fehler",
];

const FRENCH: [&str; MessageKey::COUNT] = [
    "Outil de Réflexion Wikipédia",
    "Langue de l'interface :",
    "Langue Wikipédia :",
    "🌙 Thème sombre",
    "☀️ Thème clair",
    "Résumé",
    "Sections",
    "Catégories",
    "🔄 Nouvel article aléatoire",
    "Chargement de l'article...",
    "Erreur",
];

const RUSSIAN: [&str; MessageKey::COUNT] = [
    "Инструмент для рефлексии Википедии",
    "Язык интерфейса:",
    "Язык Википедии:",
    "🌙 Тёмная тема",
    "☀️ Светлая тема",
    "Обзор",
    "Разделы",
    "Категории",
    "🔄 Новая случайная статья",
    "Загрузка статьи...",
    "Ошибка",
];

const ROMANI: [&str; MessageKey::COUNT] = [
    "Wikipedia Reflection Tool",
    "Chhib:",
    "Wikipedia Chhib:",
    "🌙 Kali Tema",
    "☀️ Parni Tema",
    "Agor",
    "Kotor",
    "Kategorie",
    "🔄 Nevo Ramome Artikli",
    "Lel artikli...",
    "Dosh",
];

/// Look up the interface string for `key` in `locale`
///
/// # Examples
///
/// ```
/// use wiki_reflect::i18n::{translate, Locale, MessageKey};
///
/// assert_eq!(translate(Locale::German, MessageKey::Sections), "Abschnitte");
/// ```
pub fn translate(locale: Locale, key: MessageKey) -> &'static str {
    locale.table()[key.index()]
}
