use std::fmt;
use std::sync::Arc;

use crate::config::Parameters;
use crate::error::{Capability, Error, Result};
use crate::route::RouteResolver;
use crate::text::{TextResolver, TranslatableText};

/// A shared route resolver.
pub type SharedRouteResolver = Arc<dyn RouteResolver + Send + Sync>;
/// A shared text resolver.
pub type SharedTextResolver = Arc<dyn TextResolver + Send + Sync>;

/// The `Ui` struct renders widget markup: buttons, links, icons and message
/// boxes.
///
/// It holds a route resolver and a text resolver, both shared and read-only,
/// and is otherwise stateless. Rendering the same thing twice gives the same
/// bytes as long as the resolvers answer the same way.
///
/// `Ui` is implemented in several sections: see the [`markup`](crate::markup)
/// functions for buttons, icons and boxes, and [`Ui::link`] for links.
#[derive(Clone)]
pub struct Ui {
    pub(crate) routes: SharedRouteResolver,
    pub(crate) texts: SharedTextResolver,
    pub(crate) parameters: Parameters,
}

impl Ui {
    /// Create a `Ui` with default parameters.
    pub fn new(
        routes: impl RouteResolver + Send + Sync + 'static,
        texts: impl TextResolver + Send + Sync + 'static,
    ) -> Self {
        Ui {
            routes: Arc::new(routes),
            texts: Arc::new(texts),
            parameters: Parameters::default(),
        }
    }

    pub fn builder() -> UiBuilder {
        UiBuilder::default()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    #[inline]
    pub(crate) fn translate(&self, text: &TranslatableText) -> String {
        text.resolve(&*self.texts)
    }
}

impl fmt::Debug for Ui {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ui")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Ui`]. Both resolvers are required.
#[derive(Default)]
pub struct UiBuilder {
    routes: Option<SharedRouteResolver>,
    texts: Option<SharedTextResolver>,
    parameters: Parameters,
}

impl UiBuilder {
    pub fn routes(self, routes: impl RouteResolver + Send + Sync + 'static) -> Self {
        self.shared_routes(Arc::new(routes))
    }

    pub fn shared_routes(mut self, routes: SharedRouteResolver) -> Self {
        self.routes = Some(routes);
        self
    }

    pub fn texts(self, texts: impl TextResolver + Send + Sync + 'static) -> Self {
        self.shared_texts(Arc::new(texts))
    }

    pub fn shared_texts(mut self, texts: SharedTextResolver) -> Self {
        self.texts = Some(texts);
        self
    }

    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Build the `Ui`, failing if a resolver is missing.
    pub fn build(self) -> Result<Ui> {
        let routes = self
            .routes
            .ok_or(Error::MissingCapability(Capability::RouteResolver))?;
        let texts = self
            .texts
            .ok_or(Error::MissingCapability(Capability::TextResolver))?;
        Ok(Ui {
            routes,
            texts,
            parameters: self.parameters,
        })
    }
}
