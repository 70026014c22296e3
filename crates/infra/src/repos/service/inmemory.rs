use super::{IServiceRepo, ServiceQuery};
use crate::repos::shared::inmemory_repo::*;
use sparkle_domain::{CleaningService, ID};
use std::sync::Mutex;

pub struct InMemoryServiceRepo {
    services: Mutex<Vec<CleaningService>>,
}

impl InMemoryServiceRepo {
    pub fn new() -> Self {
        Self {
            services: Mutex::new(Vec::new()),
        }
    }

    fn matches(service: &CleaningService, query: &ServiceQuery) -> bool {
        if let Some(category) = query.category {
            if service.category != category {
                return false;
            }
        }
        if let Some(is_active) = query.is_active {
            if service.is_active != is_active {
                return false;
            }
        }
        if let Some(is_featured) = query.is_featured {
            if service.is_featured != is_featured {
                return false;
            }
        }
        true
    }
}

impl Default for InMemoryServiceRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IServiceRepo for InMemoryServiceRepo {
    async fn insert(&self, service: &CleaningService) -> anyhow::Result<()> {
        insert(service, &self.services);
        Ok(())
    }

    async fn save(&self, service: &CleaningService) -> anyhow::Result<()> {
        save(service, &self.services);
        Ok(())
    }

    async fn find(&self, service_id: &ID) -> Option<CleaningService> {
        find(service_id, &self.services)
    }

    async fn delete(&self, service_id: &ID) -> Option<CleaningService> {
        delete(service_id, &self.services)
    }

    async fn find_by_query(&self, query: ServiceQuery) -> anyhow::Result<Vec<CleaningService>> {
        let mut services = find_by(&self.services, |s| Self::matches(s, &query));
        services.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        Ok(services
            .into_iter()
            .skip(query.skip)
            .take(query.limit)
            .collect())
    }

    async fn count_by_query(&self, query: ServiceQuery) -> anyhow::Result<i64> {
        Ok(find_by(&self.services, |s| Self::matches(s, &query)).len() as i64)
    }
}
