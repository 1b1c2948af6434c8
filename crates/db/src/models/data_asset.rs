use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default)]
#[sqlx(type_name = "asset_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Active,
    Paused,
    Pending,
}

/// A data owner's sellable data asset with quality, usage and revenue metrics.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct DataAsset {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub asset_type: String,
    pub quality_score: i64,
    pub record_count: i64,
    pub update_frequency: i64, // hours between refreshes
    pub revenue_per_k: f64,
    pub industry_avg_per_k: f64,
    pub usage_rate: i64,
    pub monthly_revenue: f64,
    pub status: AssetStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateDataAsset {
    pub owner_id: Uuid,
    pub name: String,
    pub asset_type: String,
    pub quality_score: i64,
    pub record_count: i64,
    pub update_frequency: i64,
    pub revenue_per_k: f64,
    pub industry_avg_per_k: f64,
    pub usage_rate: i64,
    pub monthly_revenue: f64,
    pub status: AssetStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const ASSET_COLUMNS: &str = "id, owner_id, name, asset_type, quality_score, record_count, update_frequency, revenue_per_k, industry_avg_per_k, usage_rate, monthly_revenue, status, created_at, updated_at";

impl DataAsset {
    pub async fn create(pool: &SqlitePool, data: &CreateDataAsset) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, DataAsset>(&format!(
            r#"INSERT INTO data_assets (id, owner_id, name, asset_type, quality_score, record_count, update_frequency, revenue_per_k, industry_avg_per_k, usage_rate, monthly_revenue, status, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
               RETURNING {ASSET_COLUMNS}"#
        ))
        .bind(id)
        .bind(data.owner_id)
        .bind(&data.name)
        .bind(&data.asset_type)
        .bind(data.quality_score)
        .bind(data.record_count)
        .bind(data.update_frequency)
        .bind(data.revenue_per_k)
        .bind(data.industry_avg_per_k)
        .bind(data.usage_rate)
        .bind(data.monthly_revenue)
        .bind(&data.status)
        .bind(data.created_at)
        .bind(data.updated_at)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, DataAsset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM data_assets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_owner_id(
        pool: &SqlitePool,
        owner_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, DataAsset>(&format!(
            "SELECT {ASSET_COLUMNS} FROM data_assets WHERE owner_id = $1 ORDER BY created_at ASC"
        ))
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }
}
