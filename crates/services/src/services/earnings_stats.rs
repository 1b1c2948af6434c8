//! Earnings totals for the owner dashboard header.

use chrono::{DateTime, NaiveTime, Utc};
use db::models::earning::EarningStatus;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum EarningsStatsError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Aggregate earnings figures for one data owner.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct EarningsStats {
    /// Earned since UTC midnight of the reference instant, any status.
    pub today: f64,
    /// Total already distributed.
    pub total: f64,
    /// Total still pending distribution.
    pub pending: f64,
    pub count: i64,
}

impl EarningsStats {
    pub async fn for_owner(
        pool: &SqlitePool,
        owner_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Self, EarningsStatsError> {
        let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();

        let today = sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(amount), 0.0) FROM earnings WHERE owner_id = $1 AND timestamp >= $2",
        )
        .bind(owner_id)
        .bind(midnight)
        .fetch_one(pool)
        .await?;

        let total = Self::sum_by_status(pool, owner_id, EarningStatus::Distributed).await?;
        let pending = Self::sum_by_status(pool, owner_id, EarningStatus::Pending).await?;

        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM earnings WHERE owner_id = $1")
                .bind(owner_id)
                .fetch_one(pool)
                .await?;

        Ok(Self {
            today,
            total,
            pending,
            count,
        })
    }

    async fn sum_by_status(
        pool: &SqlitePool,
        owner_id: Uuid,
        status: EarningStatus,
    ) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar::<_, f64>(
            "SELECT COALESCE(SUM(amount), 0.0) FROM earnings WHERE owner_id = $1 AND status = $2",
        )
        .bind(owner_id)
        .bind(status)
        .fetch_one(pool)
        .await
    }
}
