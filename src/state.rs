use std::sync::Arc;

use handlebars::{Handlebars, TemplateError};

use crate::{config::Config, flow::FlowClient, routes::chat::render};

pub struct State {
    pub flow: FlowClient,
    pub templates: Handlebars<'static>,
}

impl State {
    pub fn new(config: &Config) -> Result<Self, TemplateError> {
        Ok(Self {
            flow: FlowClient::new(config),
            templates: render::templates()?,
        })
    }
}

/// Read-only after startup, so no lock.
pub type AppState = Arc<State>;
