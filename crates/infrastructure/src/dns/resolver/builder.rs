use super::super::cache::ResolutionCache;
use super::config::ResolverConfig;
use super::iterative::IterativeResolver;
use super::root_servers::RootServerSet;
use ferrous_resolve_application::ports::NameServerClient;
use std::sync::Arc;
use tracing::info;

pub struct ResolverBuilder {
    client: Arc<dyn NameServerClient>,
    config: ResolverConfig,
    cache: Option<Arc<ResolutionCache>>,
    roots: RootServerSet,
}

impl ResolverBuilder {
    pub fn new(client: Arc<dyn NameServerClient>) -> Self {
        Self {
            client,
            config: ResolverConfig::default(),
            cache: None,
            roots: RootServerSet::builtin(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing cache instead of starting empty.
    pub fn with_cache(mut self, cache: Arc<ResolutionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_root_servers(mut self, roots: RootServerSet) -> Self {
        self.roots = roots;
        self
    }

    pub fn build(self) -> IterativeResolver {
        info!(
            roots = self.roots.len(),
            root_order = ?self.config.root_order,
            visited_scope = ?self.config.visited_scope,
            timeout_ms = self.config.query_timeout.as_millis() as u64,
            shared_cache = self.cache.is_some(),
            "Building iterative resolver"
        );

        let cache = self
            .cache
            .unwrap_or_else(|| Arc::new(ResolutionCache::new()));

        IterativeResolver::new(self.client, cache, self.roots, self.config)
    }
}
