/// Icon names starting with this select the silk icon family.
const SILK_PREFIX: &str = "silk";

/// Where an icon sits inside a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    /// A standalone icon.
    #[default]
    None,
    /// Before the button text.
    Primary,
    /// After the button text.
    Secondary,
}

impl IconPosition {
    fn class(&self) -> Option<&'static str> {
        match self {
            IconPosition::None => None,
            IconPosition::Primary => Some("ui-button-icon-primary"),
            IconPosition::Secondary => Some("ui-button-icon-secondary"),
        }
    }
}

/// The class shared by every icon of the family `name` belongs to.
///
/// Names starting with `silk` belong to the silk family, `ui-silk`; all
/// others to `ui-icon`.
pub fn icon_family(name: &str) -> &'static str {
    if name.starts_with(SILK_PREFIX) {
        "ui-silk"
    } else {
        "ui-icon"
    }
}

/// Render a single icon `<span>`.
///
/// The class list is the position class (if any), the family class and
/// `ui-icon-{name}`. The name is not validated;
/// `compose_icon("disk", IconPosition::Primary)` gives
/// `<span class="ui-button-icon-primary ui-icon ui-icon-disk"></span>`.
///
/// Silk icons keep their full name in the name class, so `silk-accept`
/// renders `class="ui-silk ui-icon-silk-accept"`: a theme targets silk
/// icons through `ui-silk` or the `ui-icon-silk` class prefix, and the
/// bare `ui-icon-silk` token only appears for the name `silk` itself.
pub fn compose_icon(name: &str, position: IconPosition) -> String {
    let mut s = String::from("<span class=\"");
    if let Some(class) = position.class() {
        s.push_str(class);
        s.push(' ');
    }
    s.push_str(icon_family(name));
    s.push_str(" ui-icon-");
    s.push_str(name);
    s.push_str("\"></span>");
    s
}
