use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type, types::Json};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[sqlx(type_name = "recommendation_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecommendationType {
    CampaignOptimization,
    DataOptimization,
}

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[sqlx(type_name = "recommendation_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default)]
#[sqlx(type_name = "recommendation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendationStatus {
    #[default]
    New,
    Accepted,
    Dismissed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImpactType {
    CostSavings,
    RevenueIncrease,
}

/// Dollar impact a recommendation is expected to have if acted on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct EstimatedImpact {
    #[serde(rename = "type")]
    pub impact_type: ImpactType,
    pub value: f64,
}

#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Recommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub rec_type: RecommendationType,
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    #[sqlx(json)]
    pub estimated_impact: EstimatedImpact,
    pub status: RecommendationStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateRecommendation {
    pub user_id: Uuid,
    pub rec_type: RecommendationType,
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    pub estimated_impact: EstimatedImpact,
    pub status: RecommendationStatus,
    pub created_at: DateTime<Utc>,
}

const RECOMMENDATION_COLUMNS: &str =
    "id, user_id, rec_type, priority, title, description, estimated_impact, status, created_at";

impl Recommendation {
    pub async fn create(
        pool: &SqlitePool,
        data: &CreateRecommendation,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Recommendation>(&format!(
            r#"INSERT INTO recommendations (id, user_id, rec_type, priority, title, description, estimated_impact, status, created_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
               RETURNING {RECOMMENDATION_COLUMNS}"#
        ))
        .bind(id)
        .bind(data.user_id)
        .bind(&data.rec_type)
        .bind(&data.priority)
        .bind(&data.title)
        .bind(&data.description)
        .bind(Json(&data.estimated_impact))
        .bind(&data.status)
        .bind(data.created_at)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_user_id(
        pool: &SqlitePool,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Recommendation>(&format!(
            r#"SELECT {RECOMMENDATION_COLUMNS}
               FROM recommendations
               WHERE user_id = $1
               ORDER BY created_at DESC"#
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
