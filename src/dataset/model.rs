use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::{
    color::assign::TagColorAssigner,
    color::hsl::Rgb8,
    foundation::error::{TagbloomError, TagbloomResult},
};

/// Title shown when a dataset has neither title nor id.
pub const FALLBACK_TITLE: &str = "Unknown Dataset";
/// Description shown when fallbacks are enabled and a dataset has none.
pub const FALLBACK_DESCRIPTION: &str = "No description available";
/// Label language used when none is requested.
pub const DEFAULT_LANG: &str = "ja";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tag object with per-language labels.
pub struct LabeledTag {
    /// Tag identifier (hashed for colors, used for filtering).
    #[serde(default)]
    pub id: String,
    /// Display labels keyed by language code.
    #[serde(default)]
    pub label: BTreeMap<String, String>,
    /// Explicit color, when the data provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl LabeledTag {
    /// Label for `lang`, then `ja`, then `en`, then the id.
    pub fn label_for(&self, lang: &str) -> &str {
        [lang, "ja", "en"]
            .iter()
            .filter_map(|l| self.label.get(*l))
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or(self.id.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
/// One entry of a dataset's `tags` array.
pub enum TagRef {
    /// Bare tag id.
    Plain(String),
    /// Tag object with labels.
    Labeled(LabeledTag),
    /// Anything else; kept for round-tripping, ignored everywhere else.
    Other(serde_json::Value),
}

impl TagRef {
    fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Plain(s),
            serde_json::Value::Object(_) => match serde_json::from_value(value.clone()) {
                Ok(tag) => Self::Labeled(tag),
                Err(_) => Self::Other(value),
            },
            other => Self::Other(other),
        }
    }

    /// Non-empty tag id, if this entry has one.
    pub fn id(&self) -> Option<&str> {
        let id = match self {
            Self::Plain(s) => s.as_str(),
            Self::Labeled(t) => t.id.as_str(),
            Self::Other(_) => return None,
        };
        (!id.is_empty()).then_some(id)
    }

    /// Text to display for `lang`.
    pub fn label_for(&self, lang: &str) -> Option<&str> {
        match self {
            Self::Plain(s) => (!s.is_empty()).then_some(s.as_str()),
            Self::Labeled(t) => self.id().map(|_| t.label_for(lang)),
            Self::Other(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for TagRef {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(d).map(Self::from_value)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Tag enriched with its assigned color.
pub struct TagWithColor {
    /// Tag id.
    pub id: String,
    /// Assigned color.
    pub color: Rgb8,
    /// Labels; generated entries carry the id for `en` and `ja`.
    pub label: BTreeMap<String, String>,
}

impl TagWithColor {
    /// Enrich `id` with its color from `assigner`.
    pub fn new(id: &str, assigner: &TagColorAssigner) -> Self {
        let label = ["en", "ja"]
            .into_iter()
            .map(|lang| (lang.to_string(), id.to_string()))
            .collect();
        Self {
            id: id.to_string(),
            color: assigner.color_for(id),
            label,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One catalog entry as found in the dataset list JSON.
///
/// Missing or non-array `tags` read as no tags. Numeric or boolean `id`, `title` and
/// `description` read as text; other non-string values read as absent. Unknown fields
/// are kept in `extra`.
pub struct Dataset {
    /// Stable identifier used in links and lookups.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Human title.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Human description.
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Raw tag entries.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<TagRef>,
    /// Color-enriched tags; preferred over `tags` for display when present.
    #[serde(
        default,
        rename = "tagsWithColors",
        skip_serializing_if = "Option::is_none"
    )]
    pub tags_with_colors: Option<Vec<TagWithColor>>,
    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn lenient_tags<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<TagRef>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(d)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items.into_iter().map(TagRef::from_value).collect(),
        _ => Vec::new(),
    })
}

// Numbers and booleans become their JSON text; other non-strings read as absent.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(d)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(v @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_))) => {
            Some(v.to_string())
        }
        _ => None,
    })
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl Dataset {
    /// Non-empty id.
    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    /// Title, else id, else [`FALLBACK_TITLE`].
    pub fn display_title(&self) -> &str {
        non_empty(&self.title)
            .or_else(|| self.id())
            .unwrap_or(FALLBACK_TITLE)
    }

    /// Description, else [`FALLBACK_DESCRIPTION`] when `fallback` is set, else `None`.
    pub fn display_description(&self, fallback: bool) -> Option<&str> {
        non_empty(&self.description).or(fallback.then_some(FALLBACK_DESCRIPTION))
    }

    /// Tag ids in order, skipping entries without one.
    pub fn tag_ids(&self) -> Vec<&str> {
        self.tags.iter().filter_map(TagRef::id).collect()
    }

    /// `(id, label)` pairs for display, preferring `tags_with_colors`.
    pub fn tag_labels(&self, lang: &str) -> Vec<(&str, &str)> {
        match &self.tags_with_colors {
            Some(enriched) => enriched
                .iter()
                .filter(|t| !t.id.is_empty())
                .map(|t| {
                    let label = t
                        .label
                        .get(lang)
                        .or_else(|| t.label.get("ja"))
                        .or_else(|| t.label.get("en"))
                        .map(String::as_str)
                        .filter(|s| !s.is_empty())
                        .unwrap_or(t.id.as_str());
                    (t.id.as_str(), label)
                })
                .collect(),
            None => self
                .tags
                .iter()
                .filter_map(|t| Some((t.id()?, t.label_for(lang)?)))
                .collect(),
        }
    }

    /// Tag ids used for the petal icon, preferring `tags_with_colors`.
    pub fn icon_tags(&self) -> Vec<&str> {
        self.tag_labels(DEFAULT_LANG)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// True when any tag id equals `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.id() == Some(tag))
    }

    /// Copy with `tags_with_colors` filled from the plain tag ids.
    pub fn with_tag_colors(&self, assigner: &TagColorAssigner) -> Self {
        if self.tags.is_empty() {
            return self.clone();
        }
        let enriched = self
            .tag_ids()
            .into_iter()
            .map(|id| TagWithColor::new(id, assigner))
            .collect();
        Self {
            tags_with_colors: Some(enriched),
            ..self.clone()
        }
    }
}

/// Parse a dataset list document. The top level must be a JSON array.
pub fn parse_dataset_list(json: &str) -> TagbloomResult<Vec<Dataset>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(items) = value else {
        return Err(TagbloomError::dataset(
            "invalid data format: expected array",
        ));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| TagbloomError::dataset(format!("dataset #{i}: {e}")))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/model.rs"]
mod tests;
