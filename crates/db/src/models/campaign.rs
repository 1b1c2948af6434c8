use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type, types::Json};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default)]
#[sqlx(type_name = "campaign_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CampaignStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Campaign {
    pub id: Uuid,
    pub buyer_id: Uuid, // Foreign key to User
    pub name: String,
    pub status: CampaignStatus,
    pub current_cac: f64,
    pub previous_cac: f64,
    pub target_cac: f64,
    pub ltv: f64,
    pub spend: f64,
    pub revenue: f64,
    pub roas: f64,
    #[sqlx(json)]
    pub dsps: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCampaign {
    pub buyer_id: Uuid,
    pub name: String,
    pub status: CampaignStatus,
    pub current_cac: f64,
    pub previous_cac: f64,
    pub target_cac: f64,
    pub ltv: f64,
    pub spend: f64,
    pub revenue: f64,
    pub roas: f64,
    pub dsps: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const CAMPAIGN_COLUMNS: &str = "id, buyer_id, name, status, current_cac, previous_cac, target_cac, ltv, spend, revenue, roas, dsps, created_at, updated_at";

impl Campaign {
    pub async fn find_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_by_buyer_id(
        pool: &SqlitePool,
        buyer_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Campaign>(&format!(
            "SELECT {CAMPAIGN_COLUMNS} FROM campaigns WHERE buyer_id = $1 ORDER BY created_at DESC"
        ))
        .bind(buyer_id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(pool: &SqlitePool, data: &CreateCampaign) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Campaign>(&format!(
            r#"INSERT INTO campaigns (id, buyer_id, name, status, current_cac, previous_cac, target_cac, ltv, spend, revenue, roas, dsps, created_at, updated_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
               RETURNING {CAMPAIGN_COLUMNS}"#
        ))
        .bind(id)
        .bind(data.buyer_id)
        .bind(&data.name)
        .bind(&data.status)
        .bind(data.current_cac)
        .bind(data.previous_cac)
        .bind(data.target_cac)
        .bind(data.ltv)
        .bind(data.spend)
        .bind(data.revenue)
        .bind(data.roas)
        .bind(Json(&data.dsps))
        .bind(data.created_at)
        .bind(data.updated_at)
        .fetch_one(pool)
        .await
    }
}
