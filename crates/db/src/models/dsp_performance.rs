use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[sqlx(type_name = "dsp_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DspStatus {
    Scaling,
    Optimizing,
    Saturated,
}

/// Per-DSP performance snapshot for a campaign.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct DspPerformance {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub dsp: String,
    pub spend: f64,
    pub current_ecpm: f64,
    pub ecpm_trend: f64,
    pub roas: f64,
    pub status: DspStatus,
    pub timestamp: DateTime<Utc>,
}

const DSP_COLUMNS: &str =
    "id, campaign_id, dsp, spend, current_ecpm, ecpm_trend, roas, status, timestamp";

impl DspPerformance {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &SqlitePool,
        campaign_id: Uuid,
        dsp: &str,
        spend: f64,
        current_ecpm: f64,
        ecpm_trend: f64,
        roas: f64,
        status: DspStatus,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, DspPerformance>(&format!(
            r#"INSERT INTO dsp_performance (id, campaign_id, dsp, spend, current_ecpm, ecpm_trend, roas, status, timestamp)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               RETURNING {DSP_COLUMNS}"#
        ))
        .bind(id)
        .bind(campaign_id)
        .bind(dsp)
        .bind(spend)
        .bind(current_ecpm)
        .bind(ecpm_trend)
        .bind(roas)
        .bind(status)
        .bind(timestamp)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_campaign_id(
        pool: &SqlitePool,
        campaign_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, DspPerformance>(&format!(
            "SELECT {DSP_COLUMNS} FROM dsp_performance WHERE campaign_id = $1 ORDER BY spend DESC"
        ))
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}
