//! Widget options and their resolution into class and attribute strings.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::Parameters;
use crate::entity::serialize_attribute;
use crate::icon::{compose_icon, IconPosition};

/// Icons shown on a button. Either, both or neither may be set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Icons {
    /// Icon before the text.
    pub primary: Option<String>,
    /// Icon after the text.
    pub secondary: Option<String>,
}

/// HTML attributes in insertion order.
///
/// Inserting a name that is already present replaces its value in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create an empty attribute list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((name, value));
        None
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Serialize as `name="value"` pairs separated by single spaces.
    pub fn serialize(&self, escape: bool) -> String {
        let mut s = String::new();
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                s.push(' ');
            }
            s.push_str(name);
            s.push_str("=\"");
            if escape {
                s.push_str(&serialize_attribute(value.into()));
            } else {
                s.push_str(value);
            }
            s.push('"');
        }
        s
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

#[cfg(feature = "serde")]
impl Serialize for Attributes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributesVisitor;

        impl<'de> serde::de::Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to values")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Attributes, A::Error> {
                let mut attributes = Attributes::new();
                while let Some((name, value)) = access.next_entry::<String, String>()? {
                    attributes.insert(name, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

/// Options for rendering a button. Every field is optional.
///
/// With the `serde` feature this also reads the historical option bag keys
/// `class`, `html` and `icon-only`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetOptions {
    /// Icons around the text.
    pub icons: Icons,
    /// Element name, `button` when unset.
    pub tag: Option<String>,
    /// Extra CSS classes.
    #[cfg_attr(feature = "serde", serde(alias = "class"))]
    pub classes: Vec<String>,
    /// Extra HTML attributes.
    #[cfg_attr(feature = "serde", serde(alias = "html"))]
    pub attributes: Attributes,
    /// Render the icons without text.
    #[cfg_attr(feature = "serde", serde(rename = "iconOnly", alias = "icon-only"))]
    pub icon_only: bool,
}

impl WidgetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary_icon(mut self, name: impl Into<String>) -> Self {
        self.icons.primary = Some(name.into());
        self
    }

    pub fn secondary_icon(mut self, name: impl Into<String>) -> Self {
        self.icons.secondary = Some(name.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn icon_only(mut self, icon_only: bool) -> Self {
        self.icon_only = icon_only;
        self
    }
}

/// The state class of a button, derived from its icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    TextOnly,
    TextIconPrimary,
    TextIconSecondary,
    TextIcons,
    IconOnly,
    IconsOnly,
}

impl ButtonState {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonState::TextOnly => "ui-button-text-only",
            ButtonState::TextIconPrimary => "ui-button-text-icon-primary",
            ButtonState::TextIconSecondary => "ui-button-text-icon-secondary",
            ButtonState::TextIcons => "ui-button-text-icons",
            ButtonState::IconOnly => "ui-button-icon-only",
            ButtonState::IconsOnly => "ui-button-icons-only",
        }
    }
}

impl fmt::Display for ButtonState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

/// Icon markup and state class for a button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIconSet {
    pub primary_markup: Option<String>,
    pub secondary_markup: Option<String>,
    pub state: ButtonState,
}

/// Everything the markup assembler needs from [`WidgetOptions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub icons: ResolvedIconSet,
    /// Extra classes joined by single spaces.
    pub extra_class: String,
    /// Serialized attributes, without leading or trailing space.
    pub html_attributes: String,
}

fn resolve_icons(icons: &Icons, icon_only: bool) -> ResolvedIconSet {
    let primary_markup = icons
        .primary
        .as_deref()
        .map(|name| compose_icon(name, IconPosition::Primary));
    let secondary_markup = icons
        .secondary
        .as_deref()
        .map(|name| compose_icon(name, IconPosition::Secondary));

    let both = primary_markup.is_some() && secondary_markup.is_some();
    let mut state = match (&primary_markup, &secondary_markup) {
        (Some(_), Some(_)) => ButtonState::TextIcons,
        (Some(_), None) => ButtonState::TextIconPrimary,
        (None, Some(_)) => ButtonState::TextIconSecondary,
        (None, None) => ButtonState::TextOnly,
    };
    if icon_only {
        state = if both {
            ButtonState::IconsOnly
        } else {
            ButtonState::IconOnly
        };
    }

    ResolvedIconSet {
        primary_markup,
        secondary_markup,
        state,
    }
}

/// Resolve options into icon markup, a state class, extra classes and an
/// attribute string. This never fails; missing fields fall back to defaults.
pub fn resolve_options(options: &WidgetOptions, parameters: &Parameters) -> ResolvedOptions {
    ResolvedOptions {
        icons: resolve_icons(&options.icons, options.icon_only),
        extra_class: options.classes.join(" ").trim().to_string(),
        html_attributes: options.attributes.serialize(parameters.escape_attributes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(options: &WidgetOptions) -> ResolvedOptions {
        resolve_options(options, &Parameters::default())
    }

    #[test]
    fn test_no_icons() {
        let resolved = resolve(&WidgetOptions::new());
        assert_eq!(resolved.icons.state, ButtonState::TextOnly);
        assert!(resolved.icons.primary_markup.is_none());
        assert!(resolved.icons.secondary_markup.is_none());
        assert_eq!(resolved.extra_class, "");
        assert_eq!(resolved.html_attributes, "");
    }

    #[test]
    fn test_icon_precedence() {
        let options = WidgetOptions::new().primary_icon("a");
        assert_eq!(resolve(&options).icons.state, ButtonState::TextIconPrimary);
        let options = options.secondary_icon("b");
        assert_eq!(resolve(&options).icons.state, ButtonState::TextIcons);
        let options = options.icon_only(true);
        assert_eq!(resolve(&options).icons.state, ButtonState::IconsOnly);
    }

    #[test]
    fn test_secondary_only() {
        let resolved = resolve(&WidgetOptions::new().secondary_icon("b"));
        assert_eq!(resolved.icons.state, ButtonState::TextIconSecondary);
        assert_eq!(
            resolved.icons.secondary_markup.as_deref(),
            Some(r#"<span class="ui-button-icon-secondary ui-icon ui-icon-b"></span>"#)
        );
    }

    #[test]
    fn test_icon_only_single_icon() {
        let options = WidgetOptions::new().secondary_icon("b").icon_only(true);
        assert_eq!(resolve(&options).icons.state, ButtonState::IconOnly);
    }

    #[test]
    fn test_icon_only_without_icons() {
        let options = WidgetOptions::new().icon_only(true);
        assert_eq!(resolve(&options).icons.state, ButtonState::IconOnly);
    }

    #[test]
    fn test_classes_joined_and_trimmed() {
        let options = WidgetOptions::new().class(" first").class("second ");
        assert_eq!(resolve(&options).extra_class, "first second");
    }

    #[test]
    fn test_attributes_in_insertion_order() {
        let options = WidgetOptions::new()
            .attribute("id", "save")
            .attribute("data-x", "1")
            .attribute("id", "store");
        assert_eq!(resolve(&options).html_attributes, r#"id="store" data-x="1""#);
    }

    #[test]
    fn test_attributes_unescaped_by_default() {
        let options = WidgetOptions::new().attribute("title", "a \"b\" & c");
        assert_eq!(resolve(&options).html_attributes, r#"title="a "b" & c""#);
    }

    #[test]
    fn test_attributes_escaped_on_request() {
        let options = WidgetOptions::new().attribute("title", "a \"b\" & c");
        let parameters = Parameters {
            escape_attributes: true,
            ..Default::default()
        };
        assert_eq!(
            resolve_options(&options, &parameters).html_attributes,
            r#"title="a &quot;b&quot; &amp; c""#
        );
    }

    #[test]
    fn test_attributes_map_api() {
        let mut attributes: Attributes = [("type", "button"), ("name", "go")].into_iter().collect();
        assert_eq!(attributes.insert("type", "submit").as_deref(), Some("button"));
        assert_eq!(attributes.get("type"), Some("submit"));
        assert_eq!(attributes.remove("name").as_deref(), Some("go"));
        assert_eq!(attributes.len(), 1);
        assert!(attributes.get("name").is_none());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ButtonState::IconsOnly.to_string(), "ui-button-icons-only");
    }
}
