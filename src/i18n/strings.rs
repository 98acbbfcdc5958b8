//! Localized UI strings, one table per language.
//!
//! The English table is an exhaustive `match`: adding a `TextKey` without an
//! English string does not compile. Other tables return `None` for keys they
//! have not translated yet and are served by the English fallback.
//!
//! Strings are stored raw; components escape them when producing HTML.
//! Placeholders use the `{name}` form and must match the English string.

use crate::i18n::{Language, TextKey};

/// Look up the string a language defines for a key, without fallback.
pub fn lookup(language: Language, key: TextKey) -> Option<&'static str> {
    match language {
        Language::English => Some(english(key)),
        Language::Spanish => spanish(key),
        Language::Japanese => japanese(key),
        Language::German => german(key),
        Language::French => french(key),
    }
}

// ==================== English Strings ====================

/// English strings (default language, total)
pub fn english(key: TextKey) -> &'static str {
    use TextKey::*;
    match key {
        HeaderTitle => "Bias Buster",
        HeaderAnalyzer => "Article Analyzer",
        HeaderDashboard => "Dashboard",
        HeaderSources => "Source Directory",
        HeaderSettings => "API Settings",
        HeaderDarkMode => "Switch to dark mode",
        HeaderLightMode => "Switch to light mode",

        AnalysisTitle => "Analysis Complete",
        AnalysisSubtitle => "AI-powered bias detection results",

        BiasPolitical => "Political Bias",
        BiasFactuality => "Factuality",
        BiasEmotional => "Emotional Language",
        BiasLeft => "Left",
        BiasCenterLeft => "Center-Left",
        BiasCenter => "Center",
        BiasCenterRight => "Center-Right",
        BiasRight => "Right",
        FactualityHigh => "High",
        FactualityMedium => "Medium",
        FactualityLow => "Low",
        EmotionalHigh => "High",
        EmotionalMedium => "Medium",
        EmotionalLow => "Low",

        HighlightsTitle => "Content Analysis",
        HighlightsEmotional => "Emotional Language",
        HighlightsBias => "Potential Bias",

        SocialTitle => "Social Media Reactions",
        SocialInteractions => "interactions",
        SocialComments => "Top Comments:",
        SocialPositive => "positive",
        SocialNegative => "negative",
        SocialNeutral => "neutral",

        SourcesTitle => "News Source Directory",
        SourcesSubtitle => "Explore bias ratings and factuality scores for major news organizations worldwide.",
        SourcesSearchPlaceholder => "Search news sources...",
        SourcesFilterAll => "All Bias Types",
        SourcesPolitical => "Political Bias",
        SourcesCategory => "Category",
        SourcesVerified => "Verified Source",
        SourcesNoResults => "No sources match your search",
        SourcesResultCount => "Sources: {count}",

        LanguageSelect => "Select language",
        LanguageCurrent => "Current language",

        CommonLoading => "Loading...",
        CommonError => "Error",
        CommonClose => "Close",
        CommonUnknown => "Unknown",
    }
}

// ==================== Spanish Strings ====================

fn spanish(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        HeaderTitle => "Detector de Sesgos",
        HeaderAnalyzer => "Analizador de Artículos",
        HeaderDashboard => "Panel de Control",
        HeaderSources => "Directorio de Fuentes",
        HeaderSettings => "Configuración API",
        HeaderDarkMode => "Cambiar a modo oscuro",
        HeaderLightMode => "Cambiar a modo claro",

        AnalysisTitle => "Análisis Completo",
        AnalysisSubtitle => "Resultados de detección de sesgos con IA",

        BiasPolitical => "Sesgo Político",
        BiasFactuality => "Veracidad",
        BiasEmotional => "Lenguaje Emocional",
        BiasLeft => "Izquierda",
        BiasCenterLeft => "Centro-Izquierda",
        BiasCenter => "Centro",
        BiasCenterRight => "Centro-Derecha",
        BiasRight => "Derecha",
        FactualityHigh => "Alta",
        FactualityMedium => "Media",
        FactualityLow => "Baja",
        EmotionalHigh => "Alto",
        EmotionalMedium => "Medio",
        EmotionalLow => "Bajo",

        HighlightsTitle => "Análisis de Contenido",
        HighlightsEmotional => "Lenguaje Emocional",
        HighlightsBias => "Sesgo Potencial",

        SocialTitle => "Reacciones en Redes Sociales",
        SocialInteractions => "interacciones",
        SocialComments => "Comentarios Principales:",
        SocialPositive => "positivo",
        SocialNegative => "negativo",
        SocialNeutral => "neutral",

        SourcesTitle => "Directorio de Fuentes de Noticias",
        SourcesSubtitle => "Explora calificaciones de sesgo y puntuaciones de veracidad para las principales organizaciones de noticias del mundo.",
        SourcesSearchPlaceholder => "Buscar fuentes de noticias...",
        SourcesFilterAll => "Todos los Tipos de Sesgo",
        SourcesPolitical => "Sesgo Político",
        SourcesCategory => "Categoría",
        SourcesVerified => "Fuente Verificada",
        SourcesNoResults => "Ninguna fuente coincide con tu búsqueda",
        SourcesResultCount => "Fuentes: {count}",

        LanguageSelect => "Seleccionar idioma",
        LanguageCurrent => "Idioma actual",

        CommonLoading => "Cargando...",
        CommonError => "Error",
        CommonClose => "Cerrar",
        CommonUnknown => "Desconocido",
    })
}

// ==================== Japanese Strings ====================

fn japanese(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        HeaderTitle => "バイアス・バスター",
        HeaderAnalyzer => "記事分析器",
        HeaderDashboard => "ダッシュボード",
        HeaderSources => "ソース・ディレクトリ",
        HeaderSettings => "API設定",
        HeaderDarkMode => "ダークモードに切り替え",
        HeaderLightMode => "ライトモードに切り替え",

        AnalysisTitle => "分析完了",
        AnalysisSubtitle => "AI搭載バイアス検出結果",

        BiasPolitical => "政治的バイアス",
        BiasFactuality => "事実性",
        BiasEmotional => "感情的言語",
        BiasLeft => "左派",
        BiasCenterLeft => "中道左派",
        BiasCenter => "中道",
        BiasCenterRight => "中道右派",
        BiasRight => "右派",
        FactualityHigh => "高",
        FactualityMedium => "中",
        FactualityLow => "低",
        EmotionalHigh => "高",
        EmotionalMedium => "中",
        EmotionalLow => "低",

        HighlightsTitle => "コンテンツ分析",
        HighlightsEmotional => "感情的言語",
        HighlightsBias => "潜在的バイアス",

        SocialTitle => "ソーシャルメディアの反応",
        SocialInteractions => "インタラクション",
        SocialComments => "トップコメント：",
        SocialPositive => "ポジティブ",
        SocialNegative => "ネガティブ",
        SocialNeutral => "ニュートラル",

        SourcesTitle => "ニュースソース・ディレクトリ",
        SourcesSubtitle => "世界の主要ニュース組織のバイアス評価と事実性スコアを探索します。",
        SourcesSearchPlaceholder => "ニュースソースを検索...",
        SourcesFilterAll => "すべてのバイアスタイプ",
        SourcesPolitical => "政治的バイアス",
        SourcesCategory => "カテゴリ",
        SourcesVerified => "検証済みソース",
        SourcesNoResults => "検索に一致するソースはありません",

        LanguageSelect => "言語を選択",

        CommonLoading => "読み込み中...",
        CommonError => "エラー",
        CommonClose => "閉じる",
        CommonUnknown => "不明",

        SourcesResultCount | LanguageCurrent => return None,
    })
}

// ==================== German Strings ====================

fn german(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        HeaderTitle => "Bias Buster",
        HeaderAnalyzer => "Artikel-Analysator",
        HeaderDashboard => "Dashboard",
        HeaderSources => "Quellen-Verzeichnis",
        HeaderSettings => "API-Einstellungen",
        HeaderDarkMode => "Zu dunklem Modus wechseln",
        HeaderLightMode => "Zu hellem Modus wechseln",

        AnalysisTitle => "Analyse abgeschlossen",
        AnalysisSubtitle => "KI-gestützte Bias-Erkennungsergebnisse",

        BiasPolitical => "Politische Voreingenommenheit",
        BiasFactuality => "Faktizität",
        BiasEmotional => "Emotionale Sprache",
        BiasLeft => "Links",
        BiasCenterLeft => "Mitte-Links",
        BiasCenter => "Mitte",
        BiasCenterRight => "Mitte-Rechts",
        BiasRight => "Rechts",
        FactualityHigh => "Hoch",
        FactualityMedium => "Mittel",
        FactualityLow => "Niedrig",
        EmotionalHigh => "Hoch",
        EmotionalMedium => "Mittel",
        EmotionalLow => "Niedrig",

        HighlightsTitle => "Inhaltsanalyse",
        HighlightsEmotional => "Emotionale Sprache",
        HighlightsBias => "Potenzielle Voreingenommenheit",

        SocialTitle => "Social Media Reaktionen",
        SocialInteractions => "Interaktionen",
        SocialComments => "Top-Kommentare:",
        SocialPositive => "positiv",
        SocialNegative => "negativ",
        SocialNeutral => "neutral",

        SourcesTitle => "Nachrichtenquellen-Verzeichnis",
        SourcesSubtitle => "Erkunden Sie Bias-Bewertungen und Faktizitätswerte für große Nachrichtenorganisationen weltweit.",
        SourcesSearchPlaceholder => "Nachrichtenquellen suchen...",
        SourcesFilterAll => "Alle Bias-Typen",
        SourcesPolitical => "Politische Voreingenommenheit",
        SourcesCategory => "Kategorie",
        SourcesVerified => "Verifizierte Quelle",
        SourcesNoResults => "Keine Quellen entsprechen Ihrer Suche",
        SourcesResultCount => "Quellen: {count}",

        LanguageSelect => "Sprache auswählen",

        CommonLoading => "Laden...",
        CommonError => "Fehler",
        CommonClose => "Schließen",
        CommonUnknown => "Unbekannt",

        LanguageCurrent => return None,
    })
}

// ==================== French Strings ====================

fn french(key: TextKey) -> Option<&'static str> {
    use TextKey::*;
    Some(match key {
        HeaderTitle => "Détecteur de Biais",
        HeaderAnalyzer => "Analyseur d'Articles",
        HeaderDashboard => "Tableau de Bord",
        HeaderSources => "Répertoire des Sources",
        HeaderSettings => "Paramètres API",
        HeaderDarkMode => "Passer en mode sombre",
        HeaderLightMode => "Passer en mode clair",

        AnalysisTitle => "Analyse Terminée",
        AnalysisSubtitle => "Résultats de détection de biais par IA",

        BiasPolitical => "Biais Politique",
        BiasFactuality => "Factualité",
        BiasEmotional => "Langage Émotionnel",
        BiasLeft => "Gauche",
        BiasCenterLeft => "Centre-Gauche",
        BiasCenter => "Centre",
        BiasCenterRight => "Centre-Droite",
        BiasRight => "Droite",
        FactualityHigh => "Élevée",
        FactualityMedium => "Moyenne",
        FactualityLow => "Faible",
        EmotionalHigh => "Élevé",
        EmotionalMedium => "Moyen",
        EmotionalLow => "Faible",

        HighlightsTitle => "Analyse du Contenu",
        HighlightsEmotional => "Langage Émotionnel",
        HighlightsBias => "Biais Potentiel",

        SocialTitle => "Réactions des Réseaux Sociaux",
        SocialInteractions => "interactions",
        SocialComments => "Commentaires Principaux :",
        SocialPositive => "positif",
        SocialNegative => "négatif",
        SocialNeutral => "neutre",

        SourcesTitle => "Répertoire des Sources d'Actualités",
        SourcesSubtitle => "Explorez les évaluations de biais et les scores de factualité pour les principales organisations de presse mondiales.",
        SourcesSearchPlaceholder => "Rechercher des sources d'actualités...",
        SourcesFilterAll => "Tous les Types de Biais",
        SourcesPolitical => "Biais Politique",
        SourcesCategory => "Catégorie",
        SourcesVerified => "Source Vérifiée",
        SourcesNoResults => "Aucune source ne correspond à votre recherche",
        SourcesResultCount => "Sources : {count}",

        LanguageSelect => "Choisir la langue",
        LanguageCurrent => "Langue actuelle",

        CommonLoading => "Chargement...",
        CommonError => "Erreur",
        CommonClose => "Fermer",
        CommonUnknown => "Inconnu",
    })
}
