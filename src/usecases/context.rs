use crate::infra::{config::AppConfig, store::DomainStore};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub store: DomainStore,
}

impl AppContext {
    pub fn new(config: AppConfig, store: DomainStore) -> Self {
        Self { config, store }
    }
}
