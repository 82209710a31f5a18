//! Plugin registration.

use tracing::debug;

use crate::Context;

pub use chirp_plugin::Plugin;

/// Twitter integration
#[cfg(feature = "plugin-twitter")]
pub mod twitter;

/// Common includes used in plugins.
#[allow(unused)]
mod prelude {
    pub use crate::Context;
    pub use async_trait::async_trait;
    pub use chirp_plugin::{
        Author, Error as PluginError, Name, Plugin, Reply, Request, Settings, Version,
    };
}

/// Plugin registry.
#[derive(Default)]
pub struct Registry {
    /// List of loaded plugins.
    pub plugins: Vec<Box<dyn Plugin<Context>>>,
}

impl Registry {
    /// Constructs and returns a new, empty plugin registry.
    #[must_use]
    pub fn new() -> Registry {
        Registry { plugins: vec![] }
    }

    /// Constructs and returns a new plugin registry with every enabled plugin initialized.
    #[must_use]
    pub fn preloaded(ctx: &Context) -> Registry {
        let mut registry = Self::new();
        debug!("registering plugins");

        #[cfg(feature = "plugin-twitter")]
        registry.register::<twitter::Twitter>(ctx);

        let num_plugins = registry.plugins.len();
        debug!(%num_plugins, "finished registering plugins");

        registry
    }

    /// Constructs a plugin based on its type and adds it to the registry.
    pub fn register<P: Plugin<Context> + 'static>(&mut self, ctx: &Context) {
        let plugin = Box::new(P::new(ctx));

        debug!(name = %P::name(), version = %P::version(), "registered plugin");

        self.plugins.push(plugin);
    }
}
