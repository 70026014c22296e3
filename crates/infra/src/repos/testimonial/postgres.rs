use super::{ITestimonialRepo, TestimonialQuery};
use crate::repos::shared::repo::enum_from_str;
use sparkle_domain::{Testimonial, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use std::convert::{TryFrom, TryInto};
use tracing::error;

pub struct PostgresTestimonialRepo {
    pool: PgPool,
}

impl PostgresTestimonialRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TestimonialRaw {
    testimonial_uid: Uuid,
    name: String,
    rating: i32,
    text: String,
    location: String,
    service_type: String,
    source: String,
    is_active: bool,
    is_approved: bool,
    is_featured: bool,
    sort_order: i32,
    created: i64,
    updated: i64,
}

impl TryFrom<TestimonialRaw> for Testimonial {
    type Error = anyhow::Error;

    fn try_from(e: TestimonialRaw) -> anyhow::Result<Self> {
        Ok(Self {
            id: e.testimonial_uid.into(),
            name: e.name,
            rating: e.rating,
            text: e.text,
            location: e.location,
            service_type: enum_from_str(&e.service_type)?,
            source: enum_from_str(&e.source)?,
            is_active: e.is_active,
            is_approved: e.is_approved,
            is_featured: e.is_featured,
            sort_order: e.sort_order,
            created: e.created,
            updated: e.updated,
        })
    }
}

#[async_trait::async_trait]
impl ITestimonialRepo for PostgresTestimonialRepo {
    async fn insert(&self, testimonial: &Testimonial) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO testimonials(
                testimonial_uid, name, rating, text, location, service_type,
                source, is_active, is_approved, is_featured, sort_order,
                created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(testimonial.id.inner_ref())
        .bind(&testimonial.name)
        .bind(testimonial.rating)
        .bind(&testimonial.text)
        .bind(&testimonial.location)
        .bind(testimonial.service_type.as_str())
        .bind(testimonial.source.as_str())
        .bind(testimonial.is_active)
        .bind(testimonial.is_approved)
        .bind(testimonial.is_featured)
        .bind(testimonial.sort_order)
        .bind(testimonial.created)
        .bind(testimonial.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert testimonial: {:?}. DB returned error: {:?}",
                testimonial, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, testimonial: &Testimonial) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE testimonials
            SET name = $2,
            rating = $3,
            text = $4,
            location = $5,
            service_type = $6,
            source = $7,
            is_active = $8,
            is_approved = $9,
            is_featured = $10,
            sort_order = $11,
            updated = $12
            WHERE testimonial_uid = $1
            "#,
        )
        .bind(testimonial.id.inner_ref())
        .bind(&testimonial.name)
        .bind(testimonial.rating)
        .bind(&testimonial.text)
        .bind(&testimonial.location)
        .bind(testimonial.service_type.as_str())
        .bind(testimonial.source.as_str())
        .bind(testimonial.is_active)
        .bind(testimonial.is_approved)
        .bind(testimonial.is_featured)
        .bind(testimonial.sort_order)
        .bind(testimonial.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save testimonial: {:?}. DB returned error: {:?}",
                testimonial, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, testimonial_id: &ID) -> Option<Testimonial> {
        let res: Option<TestimonialRaw> = sqlx::query_as(
            r#"
            SELECT * FROM testimonials
            WHERE testimonial_uid = $1
            "#,
        )
        .bind(testimonial_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find testimonial with id: {:?} failed. DB returned error: {:?}",
                testimonial_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|t| t.try_into().ok())
    }

    async fn delete(&self, testimonial_id: &ID) -> Option<Testimonial> {
        let res: Option<TestimonialRaw> = sqlx::query_as(
            r#"
            DELETE FROM testimonials
            WHERE testimonial_uid = $1
            RETURNING *
            "#,
        )
        .bind(testimonial_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete testimonial with id: {:?} failed. DB returned error: {:?}",
                testimonial_id, e
            );
            e
        })
        .ok()?;
        res.and_then(|t| t.try_into().ok())
    }

    async fn find_by_query(&self, query: TestimonialQuery) -> anyhow::Result<Vec<Testimonial>> {
        let rows: Vec<TestimonialRaw> = sqlx::query_as(
            r#"
            SELECT * FROM testimonials
            WHERE ($1::text IS NULL OR service_type = $1)
            AND ($2::bool IS NULL OR is_approved = $2)
            AND ($3::bool IS NULL OR is_featured = $3)
            AND (NOT $4 OR (is_active AND is_approved))
            ORDER BY sort_order ASC, created DESC
            LIMIT $5 OFFSET $6
            "#,
        )
        .bind(query.service_type.map(|s| s.as_str()))
        .bind(query.is_approved)
        .bind(query.is_featured)
        .bind(query.published_only)
        .bind(query.limit as i64)
        .bind(query.skip as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find testimonials by query: {:?} failed. DB returned error: {:?}",
                query, e
            );
            e
        })?;

        rows.into_iter().map(|t| t.try_into()).collect()
    }

    async fn count_by_query(&self, query: TestimonialQuery) -> anyhow::Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM testimonials
            WHERE ($1::text IS NULL OR service_type = $1)
            AND ($2::bool IS NULL OR is_approved = $2)
            AND ($3::bool IS NULL OR is_featured = $3)
            AND (NOT $4 OR (is_active AND is_approved))
            "#,
        )
        .bind(query.service_type.map(|s| s.as_str()))
        .bind(query.is_approved)
        .bind(query.is_featured)
        .bind(query.published_only)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
