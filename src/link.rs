use crate::error::Result;
use crate::options::WidgetOptions;
use crate::route::{CurrentRoute, LinkTarget};
use crate::text::TranslatableText;
use crate::ui::Ui;

/// Class added to a button link that points at the current route.
const DISABLED_CLASS: &str = "ui-state-disabled";

/// Options for rendering a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Ask the route resolver for an absolute URL.
    pub absolute: bool,
    /// Render a link to the current route as plain text.
    pub auto_disable: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            absolute: false,
            auto_disable: true,
        }
    }
}

impl LinkOptions {
    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn auto_disable(mut self, auto_disable: bool) -> Self {
        self.auto_disable = auto_disable;
        self
    }
}

/// Where a link points, once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Href {
    Url(String),
    /// The link points at the current route.
    Current,
}

impl Ui {
    /// Render a link.
    ///
    /// `target` is a literal URL or a route name. A route name that is the
    /// current route renders as the plain text, without an anchor, when
    /// `auto_disable` is set. An empty target gives an anchor with an empty
    /// `href`.
    ///
    /// Fails only if the route resolver cannot resolve `target`, even when
    /// the link would be rendered as text.
    pub fn link<C: CurrentRoute + ?Sized>(
        &self,
        target: &str,
        text: impl Into<TranslatableText>,
        options: LinkOptions,
        current: &C,
    ) -> Result<String> {
        let href = self.resolve_href(target, options, current)?;
        let text = self.translate(&text.into());
        Ok(render_link(&href, &text))
    }

    /// Render a button whose content is a link.
    ///
    /// When the link points at the current route the anchor is dropped, as
    /// with [`Ui::link`], and the button gets the `ui-state-disabled` class.
    pub fn button_link<C: CurrentRoute + ?Sized>(
        &self,
        target: &str,
        text: impl Into<TranslatableText>,
        options: &WidgetOptions,
        link_options: LinkOptions,
        current: &C,
    ) -> Result<String> {
        let href = self.resolve_href(target, link_options, current)?;
        let text = self.translate(&text.into());
        let content = render_link(&href, &text);
        if href == Href::Current {
            let mut options = options.clone();
            options.classes.push(DISABLED_CLASS.to_string());
            Ok(self.render_button(&content, &options))
        } else {
            Ok(self.render_button(&content, options))
        }
    }

    fn resolve_href<C: CurrentRoute + ?Sized>(
        &self,
        target: &str,
        options: LinkOptions,
        current: &C,
    ) -> Result<Href> {
        if target.is_empty() {
            return Ok(Href::Url(String::new()));
        }
        match LinkTarget::classify(target, self.parameters.url_classification) {
            LinkTarget::Url(url) => {
                tracing::trace!(url, "literal link target");
                Ok(Href::Url(url.to_string()))
            }
            route @ LinkTarget::Route(name) => {
                let url = self.routes.resolve(name, &[], options.absolute)?;
                if options.auto_disable && route.is_current(current) {
                    tracing::debug!(route = name, "link to current route rendered as text");
                    return Ok(Href::Current);
                }
                tracing::debug!(route = name, url = url.as_str(), "resolved route");
                Ok(Href::Url(url))
            }
        }
    }
}

fn render_link(href: &Href, text: &str) -> String {
    match href {
        Href::Url(url) => format!("<a href=\"{}\">{}</a>", url, text),
        Href::Current => text.to_string(),
    }
}
