use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default)]
#[sqlx(type_name = "creative_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CreativeStatus {
    #[default]
    Active,
    Paused,
    Retired,
}

/// Severity of an alert surfaced to a dashboard
#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[sqlx(type_name = "alert_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default)]
#[sqlx(type_name = "alert_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Active,
    Acknowledged,
    Resolved,
}

/// Creative asset under a campaign.
///
/// `fatigue_score` is a 0-100 engagement-decay figure supplied with the
/// creative's metrics, not computed here.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Creative {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub name: String,
    pub creative_type: String,
    pub format: String,
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    pub spend: f64,
    pub ctr: f64,
    pub cvr: f64,
    pub cpa: f64,
    pub fatigue_score: i64,
    pub days_active: i64,
    pub status: CreativeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCreative {
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub name: String,
    pub creative_type: String,
    pub format: String,
    pub impressions: i64,
    pub clicks: i64,
    pub conversions: i64,
    pub spend: f64,
    pub ctr: f64,
    pub cvr: f64,
    pub cpa: f64,
    pub fatigue_score: i64,
    pub days_active: i64,
    pub status: CreativeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct CreativeFatigueAlert {
    pub id: Uuid,
    pub creative_id: Uuid,
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub severity: AlertSeverity,
    pub ctr_drop: f64,
    pub cvr_drop: f64,
    pub recommended_action: String,
    pub impact: String,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateFatigueAlert {
    pub creative_id: Uuid,
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub severity: AlertSeverity,
    pub ctr_drop: f64,
    pub cvr_drop: f64,
    pub recommended_action: String,
    pub impact: String,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
}

const CREATIVE_COLUMNS: &str = "id, campaign_id, buyer_id, name, creative_type, format, impressions, clicks, conversions, spend, ctr, cvr, cpa, fatigue_score, days_active, status, created_at, updated_at";

impl Creative {
    pub async fn create(pool: &SqlitePool, data: &CreateCreative) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Creative>(&format!(
            r#"INSERT INTO creatives (id, campaign_id, buyer_id, name, creative_type, format, impressions, clicks, conversions, spend, ctr, cvr, cpa, fatigue_score, days_active, status, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
               RETURNING {CREATIVE_COLUMNS}"#
        ))
        .bind(id)
        .bind(data.campaign_id)
        .bind(data.buyer_id)
        .bind(&data.name)
        .bind(&data.creative_type)
        .bind(&data.format)
        .bind(data.impressions)
        .bind(data.clicks)
        .bind(data.conversions)
        .bind(data.spend)
        .bind(data.ctr)
        .bind(data.cvr)
        .bind(data.cpa)
        .bind(data.fatigue_score)
        .bind(data.days_active)
        .bind(&data.status)
        .bind(data.created_at)
        .bind(data.updated_at)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_campaign_id(
        pool: &SqlitePool,
        campaign_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Creative>(&format!(
            "SELECT {CREATIVE_COLUMNS} FROM creatives WHERE campaign_id = $1 ORDER BY created_at ASC"
        ))
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}

const ALERT_COLUMNS: &str = "id, creative_id, campaign_id, buyer_id, severity, ctr_drop, cvr_drop, recommended_action, impact, status, created_at";

impl CreativeFatigueAlert {
    pub async fn create(pool: &SqlitePool, data: &CreateFatigueAlert) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, CreativeFatigueAlert>(&format!(
            r#"INSERT INTO creative_fatigue_alerts (id, creative_id, campaign_id, buyer_id, severity, ctr_drop, cvr_drop, recommended_action, impact, status, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
               RETURNING {ALERT_COLUMNS}"#
        ))
        .bind(id)
        .bind(data.creative_id)
        .bind(data.campaign_id)
        .bind(data.buyer_id)
        .bind(&data.severity)
        .bind(data.ctr_drop)
        .bind(data.cvr_drop)
        .bind(&data.recommended_action)
        .bind(&data.impact)
        .bind(&data.status)
        .bind(data.created_at)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_campaign_id(
        pool: &SqlitePool,
        campaign_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, CreativeFatigueAlert>(&format!(
            "SELECT {ALERT_COLUMNS} FROM creative_fatigue_alerts WHERE campaign_id = $1 ORDER BY created_at DESC"
        ))
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}
