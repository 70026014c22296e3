mod inmemory;
mod postgres;

pub use inmemory::InMemoryServiceRepo;
pub use postgres::PostgresServiceRepo;

use sparkle_domain::{CleaningService, ServiceType, ID};

#[derive(Debug, Clone, Default)]
pub struct ServiceQuery {
    pub category: Option<ServiceType>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub skip: usize,
    pub limit: usize,
}

#[async_trait::async_trait]
pub trait IServiceRepo: Send + Sync {
    async fn insert(&self, service: &CleaningService) -> anyhow::Result<()>;
    async fn save(&self, service: &CleaningService) -> anyhow::Result<()>;
    async fn find(&self, service_id: &ID) -> Option<CleaningService>;
    async fn delete(&self, service_id: &ID) -> Option<CleaningService>;
    async fn find_by_query(&self, query: ServiceQuery) -> anyhow::Result<Vec<CleaningService>>;
    async fn count_by_query(&self, query: ServiceQuery) -> anyhow::Result<i64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparkleContext;

    #[tokio::test]
    async fn crud_roundtrip() {
        let ctx = SparkleContext::create_inmemory();
        let mut service =
            CleaningService::new("Deep clean".into(), ServiceType::Residential, 10);
        ctx.repos.services.insert(&service).await.unwrap();

        service.base_price = 120.0;
        service.is_featured = true;
        ctx.repos.services.save(&service).await.unwrap();

        let found = ctx.repos.services.find(&service.id).await.unwrap();
        assert_eq!(found.base_price, 120.0);
        assert!(found.is_featured);

        assert!(ctx.repos.services.delete(&service.id).await.is_some());
        assert!(ctx.repos.services.find(&service.id).await.is_none());
    }

    #[tokio::test]
    async fn query_filters_featured_and_active() {
        let ctx = SparkleContext::create_inmemory();
        let mut featured =
            CleaningService::new("Airbnb turnover".into(), ServiceType::Airbnb, 10);
        featured.is_featured = true;
        let mut inactive =
            CleaningService::new("Old offer".into(), ServiceType::Commercial, 10);
        inactive.is_active = false;
        ctx.repos.services.insert(&featured).await.unwrap();
        ctx.repos.services.insert(&inactive).await.unwrap();

        let found = ctx
            .repos
            .services
            .find_by_query(ServiceQuery {
                is_featured: Some(true),
                is_active: Some(true),
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Airbnb turnover");
    }
}
