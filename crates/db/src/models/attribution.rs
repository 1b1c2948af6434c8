use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// Claimed share of a campaign's value attributable to one data asset.
///
/// Percentages across a campaign's attributions are not normalized; they are
/// stored exactly as supplied.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Attribution {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub data_source_id: Uuid, // Foreign key to DataAsset
    pub cac_reduction: f64,
    pub percentage: f64,
    pub value: f64,
    pub timestamp: DateTime<Utc>,
}

impl Attribution {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &SqlitePool,
        campaign_id: Uuid,
        data_source_id: Uuid,
        cac_reduction: f64,
        percentage: f64,
        value: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Attribution>(
            r#"INSERT INTO attributions (id, campaign_id, data_source_id, cac_reduction, percentage, value, timestamp)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, campaign_id, data_source_id, cac_reduction, percentage, value, timestamp"#,
        )
        .bind(id)
        .bind(campaign_id)
        .bind(data_source_id)
        .bind(cac_reduction)
        .bind(percentage)
        .bind(value)
        .bind(timestamp)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_campaign_id(
        pool: &SqlitePool,
        campaign_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Attribution>(
            r#"SELECT id, campaign_id, data_source_id, cac_reduction, percentage, value, timestamp
               FROM attributions
               WHERE campaign_id = $1
               ORDER BY percentage DESC"#,
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}
