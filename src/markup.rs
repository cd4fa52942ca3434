//! Button, icon and message box markup.
use crate::icon::{compose_icon, IconPosition};
use crate::options::{resolve_options, ResolvedOptions, WidgetOptions};
use crate::text::TranslatableText;
use crate::ui::Ui;

/// The kind of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    Info,
    Error,
}

impl BoxKind {
    fn box_class(&self) -> &'static str {
        match self {
            BoxKind::Info => "info-box",
            BoxKind::Error => "error-box",
        }
    }

    fn state_class(&self) -> &'static str {
        match self {
            BoxKind::Info => "ui-state-highlight",
            BoxKind::Error => "ui-state-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            BoxKind::Info => "info",
            BoxKind::Error => "alert",
        }
    }
}

/// Assemble a button around already resolved `text`.
///
/// The class list always has a slot for the extra classes and one for the
/// state class, separated by a space, even when there are no extra classes.
pub fn assemble_button(text: &str, resolved: &ResolvedOptions, tag: &str) -> String {
    let mut s = format!(
        "<{} class=\"ui-button ui-widget ui-state-default ui-corner-all {} {}\" {}>",
        tag, resolved.extra_class, resolved.icons.state, resolved.html_attributes
    );
    if let Some(primary) = &resolved.icons.primary_markup {
        s.push_str(primary);
    }
    s.push_str("<span class=\"ui-button-text\">");
    s.push_str(text);
    s.push_str("</span>");
    if let Some(secondary) = &resolved.icons.secondary_markup {
        s.push_str(secondary);
    }
    s.push_str("</");
    s.push_str(tag);
    s.push('>');
    s
}

/// Assemble a message box around already resolved `label` and `message`.
pub fn assemble_box(kind: BoxKind, label: &str, message: &str) -> String {
    format!(
        concat!(
            "<div class=\"ui-widget {}\">",
            "<div class=\"{} ui-corner-all\" style=\"padding: 0pt 0.7em;\">",
            "<p>",
            "<span class=\"ui-icon ui-icon-{}\" style=\"float: left; margin-right: 0.3em; margin-top: 0.1em;\"></span>",
            "<strong>{}</strong> {}",
            "</p>",
            "</div>",
            "</div>"
        ),
        kind.box_class(),
        kind.state_class(),
        kind.icon(),
        label,
        message
    )
}

impl Ui {
    /// Render a button.
    ///
    /// The text goes through the text resolver first.
    pub fn button(&self, text: impl Into<TranslatableText>, options: &WidgetOptions) -> String {
        let text = self.translate(&text.into());
        self.render_button(&text, options)
    }

    /// Render a submit button: a button with `type="submit"`, whatever
    /// `type` the options ask for.
    pub fn submit(&self, text: impl Into<TranslatableText>, options: &WidgetOptions) -> String {
        let mut options = options.clone();
        options.attributes.insert("type", "submit");
        self.button(text, &options)
    }

    /// Render a standalone icon.
    pub fn icon(&self, name: &str) -> String {
        compose_icon(name, IconPosition::None)
    }

    /// Render an info box with the default label.
    pub fn info_box(&self, message: impl Into<TranslatableText>) -> String {
        self.message_box(BoxKind::Info, &message.into(), &[], None)
    }

    /// Render an info box, substituting `replacements` into the translated
    /// message. A `None` label uses the default.
    pub fn info_box_with(
        &self,
        message: impl Into<TranslatableText>,
        replacements: &[(&str, &str)],
        label: Option<TranslatableText>,
    ) -> String {
        self.message_box(BoxKind::Info, &message.into(), replacements, label)
    }

    /// Render an error box with the default label.
    pub fn error_box(&self, message: impl Into<TranslatableText>) -> String {
        self.message_box(BoxKind::Error, &message.into(), &[], None)
    }

    /// Render an error box, substituting `replacements` into the translated
    /// message. A `None` label uses the default.
    pub fn error_box_with(
        &self,
        message: impl Into<TranslatableText>,
        replacements: &[(&str, &str)],
        label: Option<TranslatableText>,
    ) -> String {
        self.message_box(BoxKind::Error, &message.into(), replacements, label)
    }

    pub(crate) fn render_button(&self, text: &str, options: &WidgetOptions) -> String {
        let resolved = resolve_options(options, &self.parameters);
        let tag = options
            .tag
            .as_deref()
            .unwrap_or(&self.parameters.default_tag);
        assemble_button(text, &resolved, tag)
    }

    fn message_box(
        &self,
        kind: BoxKind,
        message: &TranslatableText,
        replacements: &[(&str, &str)],
        label: Option<TranslatableText>,
    ) -> String {
        let label = match label {
            Some(label) => self.translate(&label),
            None => {
                let default = match kind {
                    BoxKind::Info => &self.parameters.info_label,
                    BoxKind::Error => &self.parameters.error_label,
                };
                self.translate(&TranslatableText::from(default))
            }
        };
        let message = message.resolve_with(&*self.texts, replacements);
        assemble_box(kind, &label, &message)
    }
}
