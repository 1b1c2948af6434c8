use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, types::Json};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

/// Whether a forecast factor pushes CAC up or down.
///
/// Must agree with the sign of the factor's `impact`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FactorDirection {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct PredictionFactor {
    pub name: String,
    pub impact: f64,
    pub direction: FactorDirection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
pub struct WeeklyPrediction {
    pub week: i32,
    pub predicted_cac: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
    pub factors: Vec<PredictionFactor>,
}

/// Forward-looking CAC forecast for a campaign.
///
/// The weekly points and their confidence bands are persisted as supplied;
/// nothing is recomputed from the factors.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct CacPrediction {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[sqlx(json)]
    pub predictions: Vec<WeeklyPrediction>,
    pub current_cac: f64,
    pub model_accuracy: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreateCacPrediction {
    pub campaign_id: Uuid,
    pub buyer_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub predictions: Vec<WeeklyPrediction>,
    pub current_cac: f64,
    pub model_accuracy: f64,
}

const PREDICTION_COLUMNS: &str =
    "id, campaign_id, buyer_id, timestamp, predictions, current_cac, model_accuracy";

impl CacPrediction {
    pub async fn create(
        pool: &SqlitePool,
        data: &CreateCacPrediction,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, CacPrediction>(&format!(
            r#"INSERT INTO cac_predictions (id, campaign_id, buyer_id, timestamp, predictions, current_cac, model_accuracy)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING {PREDICTION_COLUMNS}"#
        ))
        .bind(id)
        .bind(data.campaign_id)
        .bind(data.buyer_id)
        .bind(data.timestamp)
        .bind(Json(&data.predictions))
        .bind(data.current_cac)
        .bind(data.model_accuracy)
        .fetch_one(pool)
        .await
    }

    pub async fn find_latest_by_campaign_id(
        pool: &SqlitePool,
        campaign_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, CacPrediction>(&format!(
            r#"SELECT {PREDICTION_COLUMNS}
               FROM cac_predictions
               WHERE campaign_id = $1
               ORDER BY timestamp DESC
               LIMIT 1"#
        ))
        .bind(campaign_id)
        .fetch_optional(pool)
        .await
    }
}
