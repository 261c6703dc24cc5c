use ferrous_resolve_domain::Config;
use ferrous_resolve_infrastructure::dns::client::UdpNameServerClient;
use ferrous_resolve_infrastructure::dns::resolver::{
    IterativeResolver, ResolverBuilder, ResolverConfig, RootServerSet,
};
use std::sync::Arc;

pub fn build_resolver(config: &Config) -> IterativeResolver {
    let client = UdpNameServerClient::with_port(config.resolver.port);

    ResolverBuilder::new(Arc::new(client))
        .with_config(ResolverConfig::from(&config.resolver))
        .with_root_servers(RootServerSet::from_config(&config.resolver.root_servers))
        .build()
}
