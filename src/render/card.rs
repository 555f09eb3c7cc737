use crate::{
    dataset::model::{DEFAULT_LANG, Dataset},
    foundation::core::IconSize,
    render::markup::{class_list, escape_html},
    render::svg::PetalIconRenderer,
};

const CARD_CLASS: &str = "dataset-card";
const HEAD_CLASS: &str = "dataset-card__head";
const TITLE_CLASS: &str = "title";
const DESCRIPTION_CLASS: &str = "description";
const TAGS_CLASS: &str = "tags";
const TAG_CLASS: &str = "tag";
const LINK_CLASS: &str = "link";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// How the card head icon is drawn.
pub enum IconRendering {
    /// Overlapping gradient petals, one per tag.
    #[default]
    SvgOverlap,
    /// Neutral disc regardless of tags.
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Card rendering switches.
pub struct CardOptions {
    /// Wrap the title in a link to the dataset page.
    pub show_link: bool,
    /// Render the tag list.
    pub show_tags: bool,
    /// Render the description block.
    pub show_description: bool,
    /// Use a stock description when a dataset has none.
    pub show_fallback_description: bool,
    /// Prefix of dataset page links.
    pub link_base_url: String,
    /// Extra classes on the card root.
    pub custom_classes: Vec<String>,
    /// Render the petal icon in the head.
    pub show_icon: bool,
    /// Icon edge length.
    pub icon_size: IconSize,
    /// Icon style.
    pub icon_rendering: IconRendering,
    /// Preferred tag label language.
    pub lang: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            show_link: false,
            show_tags: false,
            show_description: true,
            show_fallback_description: false,
            link_base_url: String::new(),
            custom_classes: Vec::new(),
            show_icon: true,
            icon_size: IconSize::DEFAULT,
            icon_rendering: IconRendering::SvgOverlap,
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

/// Renders datasets as `dataset-card` HTML fragments.
#[derive(Debug, Default)]
pub struct DatasetCardRenderer {
    options: CardOptions,
    icons: PetalIconRenderer,
}

impl DatasetCardRenderer {
    /// Renderer with `options` and icons drawn by `icons`.
    pub fn new(options: CardOptions, icons: PetalIconRenderer) -> Self {
        Self { options, icons }
    }

    /// Active options.
    pub fn options(&self) -> &CardOptions {
        &self.options
    }

    /// One card.
    pub fn render(&self, dataset: &Dataset) -> String {
        let classes = class_list(CARD_CLASS, &self.options.custom_classes);
        let id_attr = dataset
            .id()
            .map(|id| format!(r#" data-dataset-id="{}""#, escape_html(id)))
            .unwrap_or_default();

        let mut body = self.head(dataset);
        if let Some(desc) = self.description(dataset) {
            body.push_str(&desc);
        }
        if let Some(tags) = self.tags(dataset) {
            body.push_str(&tags);
        }
        format!(r#"<div class="{classes}"{id_attr}>{body}</div>"#)
    }

    /// Cards for every dataset, in order.
    pub fn render_all(&self, datasets: &[Dataset]) -> String {
        datasets.iter().map(|d| self.render(d)).collect()
    }

    fn head(&self, dataset: &Dataset) -> String {
        let title = self.title(dataset);
        if !self.options.show_icon {
            return format!(r#"<div class="{HEAD_CLASS}">{title}</div>"#);
        }
        let icon = match self.options.icon_rendering {
            IconRendering::SvgOverlap => self
                .icons
                .render(dataset.icon_tags().as_slice(), self.options.icon_size),
            IconRendering::Placeholder => self.icons.placeholder(self.options.icon_size),
        };
        format!(r#"<div class="{HEAD_CLASS}">{icon}{title}</div>"#)
    }

    fn title(&self, dataset: &Dataset) -> String {
        let text = escape_html(dataset.display_title());
        match dataset.id() {
            Some(id) if self.options.show_link => {
                let href = format!("{}/dataset/?id={id}", self.options.link_base_url);
                format!(
                    r#"<h3 class="{TITLE_CLASS}"><a class="{LINK_CLASS}" href="{}">{text}</a></h3>"#,
                    escape_html(&href)
                )
            }
            _ => format!(r#"<div class="{TITLE_CLASS}">{text}</div>"#),
        }
    }

    fn description(&self, dataset: &Dataset) -> Option<String> {
        if !self.options.show_description {
            return None;
        }
        let text = dataset.display_description(self.options.show_fallback_description)?;
        Some(format!(
            r#"<div class="{DESCRIPTION_CLASS}">{}</div>"#,
            escape_html(text)
        ))
    }

    fn tags(&self, dataset: &Dataset) -> Option<String> {
        if !self.options.show_tags {
            return None;
        }
        let labels = dataset.tag_labels(&self.options.lang);
        if labels.is_empty() {
            return None;
        }
        let spans: String = labels
            .into_iter()
            .map(|(id, label)| {
                format!(
                    r#"<span class="{TAG_CLASS}" data-tag="{}">{}</span>"#,
                    escape_html(id),
                    escape_html(label)
                )
            })
            .collect();
        Some(format!(r#"<div class="{TAGS_CLASS}">{spans}</div>"#))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/card.rs"]
mod tests;
