use serde::Serialize;

use crate::domain::ChoiceValue;
use crate::ports::TextResolver;

/// Display text of a settings row.
///
/// Built either from literal strings or through a [`TextResolver`]; both
/// forms end up as the same plain strings, so they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ItemText {
    title: String,
    description: String,
}

impl ItemText {
    pub fn literal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Resolve title and optional description ids. No description id means
    /// an empty description.
    pub fn resolved(
        resolver: &dyn TextResolver,
        title_id: &str,
        description_id: Option<&str>,
    ) -> Self {
        Self {
            title: resolver.resolve(title_id),
            description: description_id
                .map(|id| resolver.resolve(id))
                .unwrap_or_default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// One entry of a single-choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: ChoiceValue,
}

impl ChoiceOption {
    pub fn literal(label: impl Into<String>, value: impl Into<ChoiceValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn resolved(
        resolver: &dyn TextResolver,
        label_id: &str,
        value: impl Into<ChoiceValue>,
    ) -> Self {
        Self {
            label: resolver.resolve(label_id),
            value: value.into(),
        }
    }
}
