use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use ts_rs::TS;
use uuid::Uuid;

/// One historical performance snapshot of a campaign.
///
/// The series for a campaign is time-ordered and ends at the run instant with
/// the campaign's live metrics, so charts are continuous with the current
/// campaign state.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct CampaignHistory {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub date: DateTime<Utc>,
    pub cac: f64,
    pub spend: f64,
    pub conversions: i64,
    pub revenue: f64,
}

impl CampaignHistory {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &SqlitePool,
        campaign_id: Uuid,
        date: DateTime<Utc>,
        cac: f64,
        spend: f64,
        conversions: i64,
        revenue: f64,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, CampaignHistory>(
            r#"INSERT INTO campaign_history (id, campaign_id, date, cac, spend, conversions, revenue)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, campaign_id, date, cac, spend, conversions, revenue"#,
        )
        .bind(id)
        .bind(campaign_id)
        .bind(date)
        .bind(cac)
        .bind(spend)
        .bind(conversions)
        .bind(revenue)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_campaign_id(
        pool: &SqlitePool,
        campaign_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, CampaignHistory>(
            r#"SELECT id, campaign_id, date, cac, spend, conversions, revenue
               FROM campaign_history
               WHERE campaign_id = $1
               ORDER BY date ASC"#,
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}
