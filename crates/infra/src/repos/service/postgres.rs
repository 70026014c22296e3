use super::{IServiceRepo, ServiceQuery};
use crate::repos::shared::repo::enum_from_str;
use sparkle_domain::{CleaningService, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::{TryFrom, TryInto};
use tracing::error;

pub struct PostgresServiceRepo {
    pool: PgPool,
}

impl PostgresServiceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ServiceRaw {
    service_uid: Uuid,
    name: String,
    category: String,
    short_description: String,
    full_description: String,
    base_price: f64,
    price_unit: String,
    duration_minutes: i32,
    is_active: bool,
    is_featured: bool,
    sort_order: i32,
    created: i64,
    updated: i64,
}

impl TryFrom<ServiceRaw> for CleaningService {
    type Error = anyhow::Error;

    fn try_from(e: ServiceRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.service_uid.into(),
            name: e.name,
            category: enum_from_str(&e.category)?,
            short_description: e.short_description,
            full_description: e.full_description,
            base_price: e.base_price,
            price_unit: enum_from_str(&e.price_unit)?,
            duration_minutes: e.duration_minutes,
            is_active: e.is_active,
            is_featured: e.is_featured,
            sort_order: e.sort_order,
            created: e.created,
            updated: e.updated,
        })
    }
}

#[async_trait::async_trait]
impl IServiceRepo for PostgresServiceRepo {
    async fn insert(&self, service: &CleaningService) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO cleaning_services(
                service_uid, name, category, short_description, full_description,
                base_price, price_unit, duration_minutes, is_active, is_featured,
                sort_order, created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(service.id.inner_ref())
        .bind(&service.name)
        .bind(service.category.as_str())
        .bind(&service.short_description)
        .bind(&service.full_description)
        .bind(service.base_price)
        .bind(service.price_unit.as_str())
        .bind(service.duration_minutes)
        .bind(service.is_active)
        .bind(service.is_featured)
        .bind(service.sort_order)
        .bind(service.created)
        .bind(service.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert service: {:?}. DB returned error: {:?}",
                service, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, service: &CleaningService) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE cleaning_services
            SET name = $2,
            category = $3,
            short_description = $4,
            full_description = $5,
            base_price = $6,
            price_unit = $7,
            duration_minutes = $8,
            is_active = $9,
            is_featured = $10,
            sort_order = $11,
            updated = $12
            WHERE service_uid = $1
            "#,
        )
        .bind(service.id.inner_ref())
        .bind(&service.name)
        .bind(service.category.as_str())
        .bind(&service.short_description)
        .bind(&service.full_description)
        .bind(service.base_price)
        .bind(service.price_unit.as_str())
        .bind(service.duration_minutes)
        .bind(service.is_active)
        .bind(service.is_featured)
        .bind(service.sort_order)
        .bind(service.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save service: {:?}. DB returned error: {:?}",
                service, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, service_id: &ID) -> Option<CleaningService> {
        let res: Option<ServiceRaw> = sqlx::query_as(
            r#"
            SELECT * FROM cleaning_services
            WHERE service_uid = $1
            "#,
        )
        .bind(service_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find service with id: {:?} failed. DB returned error: {:?}",
                service_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|service| service.try_into().ok())
    }

    async fn delete(&self, service_id: &ID) -> Option<CleaningService> {
        let res: Option<ServiceRaw> = sqlx::query_as(
            r#"
            DELETE FROM cleaning_services
            WHERE service_uid = $1
            RETURNING *
            "#,
        )
        .bind(service_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete service with id: {:?} failed. DB returned error: {:?}",
                service_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|service| service.try_into().ok())
    }

    async fn find_by_query(&self, query: ServiceQuery) -> anyhow::Result<Vec<CleaningService>> {
        let rows: Vec<ServiceRaw> = sqlx::query_as(
            r#"
            SELECT * FROM cleaning_services
            WHERE ($1::text IS NULL OR category = $1)
            AND ($2::bool IS NULL OR is_active = $2)
            AND ($3::bool IS NULL OR is_featured = $3)
            ORDER BY sort_order ASC, name ASC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(query.category.map(|c| c.as_str()))
        .bind(query.is_active)
        .bind(query.is_featured)
        .bind(query.limit as i64)
        .bind(query.skip as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find services by query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        rows.into_iter().map(|s| s.try_into()).collect()
    }

    async fn count_by_query(&self, query: ServiceQuery) -> anyhow::Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM cleaning_services
            WHERE ($1::text IS NULL OR category = $1)
            AND ($2::bool IS NULL OR is_active = $2)
            AND ($3::bool IS NULL OR is_featured = $3)
            "#,
        )
        .bind(query.category.map(|c| c.as_str()))
        .bind(query.is_active)
        .bind(query.is_featured)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
