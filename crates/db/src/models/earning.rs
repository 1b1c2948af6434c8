use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool, Type};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Type, Serialize, Deserialize, PartialEq, TS, EnumString, Display, Default)]
#[sqlx(type_name = "earning_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EarningStatus {
    #[default]
    Pending,
    Distributed,
}

/// Payout event for a data owner.
///
/// `campaign` is the originating campaign's display name, not a foreign key;
/// payouts keep their label even if the campaign is later renamed or removed.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct Earning {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub asset_id: Uuid,
    pub amount: f64,
    pub campaign: String,
    pub impressions: i64,
    pub timestamp: DateTime<Utc>,
    pub status: EarningStatus,
}

/// Earning joined with its asset's display name for list views.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, TS)]
pub struct EarningWithAsset {
    #[sqlx(flatten)]
    #[serde(flatten)]
    #[ts(flatten)]
    pub earning: Earning,
    pub asset: String,
}

impl std::ops::Deref for EarningWithAsset {
    type Target = Earning;
    fn deref(&self) -> &Self::Target {
        &self.earning
    }
}

const EARNING_COLUMNS: &str = "id, owner_id, asset_id, amount, campaign, impressions, timestamp, status";

impl Earning {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        pool: &SqlitePool,
        owner_id: Uuid,
        asset_id: Uuid,
        amount: f64,
        campaign: &str,
        impressions: i64,
        timestamp: DateTime<Utc>,
        status: EarningStatus,
    ) -> Result<Self, sqlx::Error> {
        let id = Uuid::new_v4();
        sqlx::query_as::<_, Earning>(&format!(
            r#"INSERT INTO earnings (id, owner_id, asset_id, amount, campaign, impressions, timestamp, status)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING {EARNING_COLUMNS}"#
        ))
        .bind(id)
        .bind(owner_id)
        .bind(asset_id)
        .bind(amount)
        .bind(campaign)
        .bind(impressions)
        .bind(timestamp)
        .bind(status)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_owner_id(
        pool: &SqlitePool,
        owner_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Earning>(&format!(
            r#"SELECT {EARNING_COLUMNS}
               FROM earnings
               WHERE owner_id = $1
               ORDER BY timestamp ASC"#
        ))
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_owner_id_with_asset(
        pool: &SqlitePool,
        owner_id: Uuid,
        limit: i64,
    ) -> Result<Vec<EarningWithAsset>, sqlx::Error> {
        sqlx::query_as::<_, EarningWithAsset>(
            r#"SELECT e.id, e.owner_id, e.asset_id, e.amount, e.campaign, e.impressions, e.timestamp, e.status,
                      a.name AS asset
               FROM earnings e
               JOIN data_assets a ON a.id = e.asset_id
               WHERE e.owner_id = $1
               ORDER BY e.timestamp ASC
               LIMIT $2"#,
        )
        .bind(owner_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
