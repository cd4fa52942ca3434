//! Markup helpers for widgets styled with the jQuery UI theme.
//!
//! [`Ui`] renders buttons, submit buttons, links, button links, icons and
//! info/error boxes as HTML strings. It depends on two capabilities you
//! supply: a [`RouteResolver`] that turns route names into URLs, and a
//! [`TextResolver`] that translates text.
//!
//! ```rust
//! use jui::{LinkOptions, RouteTable, Passthrough, Ui, WidgetOptions};
//!
//! let mut routes = RouteTable::new("http://example.com");
//! routes.add("home", "/");
//! let ui = Ui::new(routes, Passthrough);
//!
//! let button = ui.button("Save", &WidgetOptions::new().primary_icon("disk"));
//! assert!(button.contains("ui-button-text-icon-primary"));
//!
//! // a link to the page we're on is rendered as text
//! let link = ui.link("home", "Home", LinkOptions::default(), "home")?;
//! assert_eq!(link, "Home");
//! # Ok::<(), jui::Error>(())
//! ```
#![forbid(unsafe_code)]

pub mod config;
mod entity;
mod error;
mod icon;
mod link;
pub mod markup;
pub mod options;
pub mod route;
pub mod text;
mod ui;

pub use config::{Parameters, UrlClassification};
pub use error::{Capability, Error, ResolutionFailure, Result};
pub use icon::{compose_icon, icon_family, IconPosition};
pub use link::LinkOptions;
pub use markup::{assemble_box, assemble_button, BoxKind};
pub use options::{
    resolve_options, Attributes, ButtonState, Icons, ResolvedIconSet, ResolvedOptions,
    WidgetOptions,
};
pub use route::{CurrentRoute, LinkTarget, NoCurrentRoute, RouteParams, RouteResolver, RouteTable};
pub use text::{Catalog, Passthrough, TextResolver, TranslatableText};
pub use ui::{SharedRouteResolver, SharedTextResolver, Ui, UiBuilder};
