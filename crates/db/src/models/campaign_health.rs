use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, types::Json};
use ts_rs::TS;
use uuid::Uuid;

use super::creative::AlertSeverity;

/// Trend metrics backing a campaign health score, in signed percent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct HealthMetrics {
    pub ctr_trend: f64,
    pub cvr_trend: f64,
    pub cac_trend: f64,
    pub roas_trend: f64,
    pub budget_utilization: f64,
    pub creative_freshness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct HealthAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub message: String,
}

/// Aggregate health snapshot of a campaign.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct CampaignHealth {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub health_score: i64,
    #[sqlx(json)]
    pub metrics: HealthMetrics,
    #[sqlx(json)]
    pub alerts: Vec<HealthAlert>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCampaignHealth {
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub health_score: i64,
    pub metrics: HealthMetrics,
    pub alerts: Vec<HealthAlert>,
    pub timestamp: DateTime<Utc>,
}

const HEALTH_COLUMNS: &str =
    "id, campaign_id, buyer_id, health_score, metrics, alerts, timestamp";

impl CampaignHealth {
    pub async fn create(
        pool: &SqlitePool,
        data: &CreateCampaignHealth,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, CampaignHealth>(&format!(
            r#"INSERT INTO campaign_health (id, campaign_id, buyer_id, health_score, metrics, alerts, timestamp)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {HEALTH_COLUMNS}"#
        ))
        .bind(id)
        .bind(data.campaign_id)
        .bind(data.buyer_id)
        .bind(data.health_score)
        .bind(Json(&data.metrics))
        .bind(Json(&data.alerts))
        .bind(data.timestamp)
        .fetch_one(pool)
        .await
    }

    pub async fn find_latest_by_campaign_id(
        pool: &SqlitePool,
        campaign_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, CampaignHealth>(&format!(
            r#"SELECT {HEALTH_COLUMNS}
               FROM campaign_health
               WHERE campaign_id = $1
               ORDER BY timestamp DESC
               LIMIT 1"#
        ))
        .bind(campaign_id)
        .fetch_optional(pool)
        .await
    }
}
