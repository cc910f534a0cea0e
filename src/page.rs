//! Pages HTML (askama) et construction des URLs de redirection.

use crate::model::Rotation;
use crate::rotation::MIN_ITEMS;
use askama::Template;
use url::form_urlencoded;

pub const TITLE: &str = "Daily Rotation";

pub const STYLES: &str = r#"
body {
    max-width: 800px;
    margin: 2rem auto;
    padding: 1rem;
    font-family: system-ui, -apple-system, sans-serif;
    line-height: 1.5;
}
p {
    color: #4b5563;
}
.result {
    color: #4b5563;
    font-size: 2rem;
    margin: 2rem 0;
}
.result strong {
    color: #2563eb;
    font-size: 2.5rem;
    padding: 0 0.2em;
}
.anchor {
    font-size: 0.9rem;
}
.rotation-form {
    margin: 2rem 0;
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    align-items: center;
}
.error {
    color: #dc2626;
}
"#;

/// Valeurs (éventuellement pré-remplies) du formulaire.
#[derive(Debug, Clone)]
pub struct FormValues {
    pub min_items: u32,
    pub items: String,
    pub start: String,
    pub start_item: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            min_items: MIN_ITEMS,
            items: String::new(),
            start: String::new(),
            start_item: String::new(),
        }
    }
}

impl FormValues {
    pub fn prefilled(items: &str, start: Option<&str>, start_item: Option<&str>) -> Self {
        Self {
            items: items.trim().to_string(),
            start: start.unwrap_or_default().trim().to_string(),
            start_item: start_item.unwrap_or_default().trim().to_string(),
            ..Self::default()
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: &'static str,
    pub form: FormValues,
}

#[derive(Template)]
#[template(path = "rotation.html")]
pub struct RotationPage {
    pub title: &'static str,
    pub item: u32,
    pub display_date: String,
    pub timezone: &'static str,
    pub anchor: String,
    pub form: FormValues,
}

impl RotationPage {
    pub fn new(rotation: &Rotation, form: FormValues) -> Self {
        let config = rotation.config;
        let anchor = if config.has_custom_anchor() {
            format!(
                "Rotating through {} items, item {} on {}.",
                config.item_count(),
                config.start_item(),
                config.start_date().format("%Y-%m-%d")
            )
        } else {
            String::new()
        };
        Self {
            title: TITLE,
            item: rotation.item,
            display_date: rotation.display_date(),
            timezone: rotation.timezone_name(),
            anchor,
            form,
        }
    }
}

#[derive(Template)]
#[template(path = "detect_timezone.html")]
pub struct DetectTimezonePage {
    pub title: &'static str,
    /// URL déjà encodée se terminant par `tz=`
    pub target: String,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: &'static str,
    pub message: String,
    pub form: FormValues,
}

pub fn home() -> HomePage {
    HomePage {
        title: TITLE,
        form: FormValues::default(),
    }
}

pub fn detect_timezone(items: u32, start: Option<&str>, start_item: Option<&str>) -> DetectTimezonePage {
    DetectTimezonePage {
        title: "Redirecting...",
        target: detect_target(items, start, start_item),
    }
}

pub fn error(message: impl Into<String>, form: FormValues) -> ErrorPage {
    ErrorPage {
        title: "Error",
        message: message.into(),
        form,
    }
}

/// `/{items}?[start=..&][start_item=..&]tz=<tz>`
pub fn rotation_url(
    items: u32,
    tz: &str,
    start: Option<&str>,
    start_item: Option<&str>,
) -> String {
    let mut query = anchor_query(start, start_item);
    query.append_pair("tz", tz);
    format!("/{}?{}", items, query.finish())
}

/// Préfixe auquel le script client ajoute le fuseau détecté.
pub fn detect_target(items: u32, start: Option<&str>, start_item: Option<&str>) -> String {
    let mut query = anchor_query(start, start_item).finish();
    if !query.is_empty() {
        query.push('&');
    }
    format!("/{}?{}tz=", items, query)
}

fn anchor_query(
    start: Option<&str>,
    start_item: Option<&str>,
) -> form_urlencoded::Serializer<'static, String> {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(s) = start {
        query.append_pair("start", s);
    }
    if let Some(k) = start_item {
        query.append_pair("start_item", k);
    }
    query
}
