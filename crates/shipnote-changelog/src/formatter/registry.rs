//! Renderer registry

use std::sync::Arc;

use shipnote_core::config::MessageConfig;

use super::{BlocksRenderer, FlatRenderer, MessageRenderer};

/// Registry of available message renderers
pub struct RendererRegistry {
    renderers: Vec<Arc<dyn MessageRenderer>>,
}

impl RendererRegistry {
    /// Create a registry with the built-in renderers
    pub fn new(config: &MessageConfig) -> Self {
        Self {
            renderers: vec![
                Arc::new(FlatRenderer::with_config(config)),
                Arc::new(BlocksRenderer::with_config(config)),
            ],
        }
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Register a renderer, replacing one with the same name
    pub fn register<R: MessageRenderer + 'static>(&mut self, renderer: R) {
        self.renderers.retain(|r| r.name() != renderer.name());
        self.renderers.push(Arc::new(renderer));
    }

    /// Get renderer by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn MessageRenderer>> {
        self.renderers.iter().find(|r| r.name() == name).cloned()
    }

    pub fn all(&self) -> &[Arc<dyn MessageRenderer>] {
        &self.renderers
    }

    /// Names of all registered renderers
    pub fn names(&self) -> Vec<&'static str> {
        self.renderers.iter().map(|r| r.name()).collect()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new(&MessageConfig::default())
    }
}
