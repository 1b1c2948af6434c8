//! Seeds the store with a coherent cross-referential demo dataset so the
//! buyer and owner dashboards have realistic data to render.
//!
//! The run is strictly sequential and single-pass: later steps reference ids
//! produced by earlier steps, and nothing revisits or mutates earlier records.
//! There is no rollback; a failure part-way leaves the writes made so far.

use chrono::{DateTime, Duration, Utc};
use db::models::{
    attribution::Attribution,
    campaign::{Campaign, CampaignStatus, CreateCampaign},
    campaign_health::{CampaignHealth, CreateCampaignHealth, HealthAlert, HealthMetrics},
    campaign_history::CampaignHistory,
    creative::{
        AlertSeverity, AlertStatus, CreateCreative, CreateFatigueAlert, Creative,
        CreativeFatigueAlert, CreativeStatus,
    },
    data_asset::{AssetStatus, CreateDataAsset, DataAsset},
    dsp_performance::{DspPerformance, DspStatus},
    earning::{Earning, EarningStatus},
    prediction::{
        CacPrediction, CreateCacPrediction, FactorDirection, PredictionFactor, WeeklyPrediction,
    },
    recommendation::{
        CreateRecommendation, EstimatedImpact, ImpactType, Recommendation, RecommendationPriority,
        RecommendationStatus, RecommendationType,
    },
    user::{CreateUser, User, UserRole},
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

pub const DEMO_BUYER_EMAIL: &str = "luigi@demo.com";
pub const DEMO_OWNER_EMAIL: &str = "mario@demo.com";
pub const FLAGSHIP_CAMPAIGN_NAME: &str = "Professional Sports Team 2025";

/// Fatigue score at or above which a creative gets a fatigue alert.
pub const FATIGUE_WARNING_THRESHOLD: i64 = 50;
/// Fatigue score at or above which the alert escalates to critical.
pub const FATIGUE_CRITICAL_THRESHOLD: i64 = 80;

#[derive(Debug, Error)]
pub enum DemoSeedError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SeedUsers {
    pub buyer_id: Uuid,
    pub owner_id: Uuid,
}

/// Summary returned when a seeding run completes in full.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SeedSummary {
    pub success: bool,
    pub users: SeedUsers,
    pub campaign_id: Uuid,
    pub message: String,
}

/// Severity for a creative's fatigue score, or `None` below the warning bar.
pub fn fatigue_severity(fatigue_score: i64) -> Option<AlertSeverity> {
    if fatigue_score >= FATIGUE_CRITICAL_THRESHOLD {
        Some(AlertSeverity::Critical)
    } else if fatigue_score >= FATIGUE_WARNING_THRESHOLD {
        Some(AlertSeverity::Warning)
    } else {
        None
    }
}

pub struct DemoSeedService;

impl DemoSeedService {
    /// Run a full seeding pass against the store.
    ///
    /// Captures a single run timestamp; every backdated or relative timestamp
    /// in the run derives from it.
    pub async fn run<R: Rng + Send>(
        pool: &SqlitePool,
        rng: &mut R,
    ) -> Result<SeedSummary, DemoSeedError> {
        let started_at = Utc::now();
        Self::run_at(pool, started_at, rng).await
    }

    pub async fn run_at<R: Rng + Send>(
        pool: &SqlitePool,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<SeedSummary, DemoSeedError> {
        info!("starting demo dataset seed");

        let (buyer, owner) = Self::resolve_identities(pool, started_at).await?;
        let flagship = Self::create_flagship_campaign(pool, buyer.id, started_at).await?;
        Self::create_auxiliary_campaigns(pool, buyer.id, started_at, rng).await?;
        Self::write_history(pool, flagship.id, started_at).await?;
        let creatives = Self::create_creatives(pool, flagship.id, buyer.id, started_at).await?;
        for creative in &creatives {
            Self::maybe_create_fatigue_alert(pool, creative, started_at).await?;
        }
        Self::write_forecast(pool, flagship.id, buyer.id, started_at).await?;
        Self::write_dsp_performance(pool, flagship.id, started_at, rng).await?;
        let assets = Self::create_data_assets(pool, owner.id, started_at).await?;
        Self::write_attributions(pool, flagship.id, &assets, started_at).await?;
        Self::write_earnings(pool, owner.id, &assets, &flagship.name, started_at).await?;
        Self::write_campaign_health(pool, flagship.id, buyer.id, started_at).await?;
        Self::write_recommendations(pool, buyer.id, owner.id, started_at).await?;

        info!(
            buyer_id = %buyer.id,
            owner_id = %owner.id,
            campaign_id = %flagship.id,
            "demo dataset seed complete"
        );

        Ok(SeedSummary {
            success: true,
            users: SeedUsers {
                buyer_id: buyer.id,
                owner_id: owner.id,
            },
            campaign_id: flagship.id,
            message: "Demo marketplace dataset seeded successfully".to_string(),
        })
    }

    /// Find-or-create the media buyer and the data owner.
    ///
    /// The only idempotent step; re-running the seeder reuses these two
    /// records and duplicates everything downstream.
    async fn resolve_identities(
        pool: &SqlitePool,
        started_at: DateTime<Utc>,
    ) -> Result<(User, User), DemoSeedError> {
        let buyer = User::find_or_create_by_email(
            pool,
            &CreateUser {
                email: DEMO_BUYER_EMAIL.to_string(),
                name: "Luigi".to_string(),
                role: UserRole::MediaBuyer,
                company: "Professional Sports Team".to_string(),
                onboarding_completed: true,
                created_at: started_at,
            },
        )
        .await?;

        let owner = User::find_or_create_by_email(
            pool,
            &CreateUser {
                email: DEMO_OWNER_EMAIL.to_string(),
                name: "Mario".to_string(),
                role: UserRole::DataOwner,
                company: "Audience Acuity".to_string(),
                onboarding_completed: true,
                created_at: started_at,
            },
        )
        .await?;

        Ok((buyer, owner))
    }

    /// The flagship campaign every downstream entity hangs off.
    async fn create_flagship_campaign(
        pool: &SqlitePool,
        buyer_id: Uuid,
        started_at: DateTime<Utc>,
    ) -> Result<Campaign, DemoSeedError> {
        let campaign = Campaign::create(
            pool,
            &CreateCampaign {
                buyer_id,
                name: FLAGSHIP_CAMPAIGN_NAME.to_string(),
                status: CampaignStatus::Active,
                current_cac: 5.36,
                previous_cac: 10.27,
                target_cac: 5.0,
                ltv: 150.0,
                spend: 112_120.0,
                revenue: 3_130_000.0,
                roas: 28.0,
                dsps: vec![
                    "DV360".to_string(),
                    "Amazon DSP".to_string(),
                    "The Trade Desk".to_string(),
                    "Yahoo DSP".to_string(),
                ],
                created_at: started_at,
                updated_at: started_at,
            },
        )
        .await?;
        Ok(campaign)
    }

    /// Portfolio filler around the flagship: randomized metrics, no
    /// downstream linkage.
    async fn create_auxiliary_campaigns<R: Rng + Send>(
        pool: &SqlitePool,
        buyer_id: Uuid,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(), DemoSeedError> {
        let templates = [
            ("Spring Training Promo", CampaignStatus::Active, 12_340.0),
            ("Season Pass Campaign", CampaignStatus::Active, 8_230.0),
            ("Professional Sports Campaign", CampaignStatus::Paused, 4_810.0),
            ("Holiday Ticket Bundle", CampaignStatus::Completed, 4_510.0),
        ];

        for (name, status, spend) in templates {
            let roas = rng.gen_range(20.0..30.0);
            let age_days = rng.gen_range(0.0..90.0);
            Campaign::create(
                pool,
                &CreateCampaign {
                    buyer_id,
                    name: name.to_string(),
                    status,
                    current_cac: rng.gen_range(5.0..10.0),
                    previous_cac: rng.gen_range(8.0..13.0),
                    target_cac: 6.0,
                    ltv: 120.0,
                    spend,
                    revenue: spend * rng.gen_range(20.0..30.0),
                    roas,
                    dsps: vec!["DV360".to_string(), "The Trade Desk".to_string()],
                    created_at: started_at
                        - Duration::milliseconds((age_days * 86_400_000.0) as i64),
                    updated_at: started_at,
                },
            )
            .await?;
        }

        Ok(())
    }

    /// Historical snapshots spaced backward from the run instant.
    ///
    /// The day-0 point carries the flagship's live CAC so the charted series
    /// meets the current campaign state.
    async fn write_history(
        pool: &SqlitePool,
        campaign_id: Uuid,
        started_at: DateTime<Utc>,
    ) -> Result<(), DemoSeedError> {
        // (days_ago, cac, spend, conversions, revenue)
        const HISTORY_POINTS: [(i64, f64, f64, i64, f64); 7] = [
            (30, 10.27, 10_000.0, 973, 272_440.0),
            (25, 9.50, 15_000.0, 1_579, 442_120.0),
            (20, 8.80, 20_000.0, 2_273, 636_440.0),
            (15, 7.90, 25_000.0, 3_165, 886_200.0),
            (10, 7.20, 30_000.0, 4_167, 1_166_760.0),
            (5, 6.50, 35_000.0, 5_385, 1_507_800.0),
            (0, 5.36, 40_000.0, 7_463, 2_089_640.0),
        ];

        for (days_ago, cac, spend, conversions, revenue) in HISTORY_POINTS {
            CampaignHistory::create(
                pool,
                campaign_id,
                started_at - Duration::days(days_ago),
                cac,
                spend,
                conversions,
                revenue,
            )
            .await?;
        }

        Ok(())
    }

    /// Creatives with literal engagement metrics and fatigue scores.
    async fn create_creatives(
        pool: &SqlitePool,
        campaign_id: Uuid,
        buyer_id: Uuid,
        started_at: DateTime<Utc>,
    ) -> Result<Vec<Creative>, DemoSeedError> {
        let hero_video = Creative::create(
            pool,
            &CreateCreative {
                campaign_id,
                buyer_id,
                name: "Creative 1 - Hero Video".to_string(),
                creative_type: "video".to_string(),
                format: "1920x1080".to_string(),
                impressions: 22_360_770,
                clicks: 129_692,
                conversions: 11_180,
                spend: 80_499.0,
                ctr: 0.58,
                cvr: 8.62,
                cpa: 7.2,
                fatigue_score: 62,
                days_active: 45,
                status: CreativeStatus::Active,
                created_at: started_at - Duration::days(45),
                updated_at: started_at,
            },
        )
        .await?;

        let season_highlights = Creative::create(
            pool,
            &CreateCreative {
                campaign_id,
                buyer_id,
                name: "Creative 2 - Season Highlights".to_string(),
                creative_type: "video".to_string(),
                format: "1920x1080".to_string(),
                impressions: 7_282_685,
                clicks: 19_663,
                conversions: 4_370,
                spend: 29_131.0,
                ctr: 0.27,
                cvr: 22.22,
                cpa: 6.7,
                fatigue_score: 28,
                days_active: 20,
                status: CreativeStatus::Active,
                created_at: started_at - Duration::days(20),
                updated_at: started_at,
            },
        )
        .await?;

        Ok(vec![hero_video, season_highlights])
    }

    /// Alert on any creative at or past the warning threshold.
    async fn maybe_create_fatigue_alert(
        pool: &SqlitePool,
        creative: &Creative,
        started_at: DateTime<Utc>,
    ) -> Result<Option<CreativeFatigueAlert>, DemoSeedError> {
        let Some(severity) = fatigue_severity(creative.fatigue_score) else {
            return Ok(None);
        };

        let alert = CreativeFatigueAlert::create(
            pool,
            &CreateFatigueAlert {
                creative_id: creative.id,
                campaign_id: creative.campaign_id,
                buyer_id: creative.buyer_id,
                severity,
                ctr_drop: 35.0,
                cvr_drop: 28.0,
                recommended_action: "Creative refresh recommended - performance declining"
                    .to_string(),
                impact: "$12.3K potential wasted spend if not addressed".to_string(),
                status: AlertStatus::Active,
                created_at: started_at - Duration::days(2),
            },
        )
        .await?;

        Ok(Some(alert))
    }

    /// Four-week CAC forecast. Points and factors are persisted literals;
    /// nothing here recomputes the forecast from the factors.
    async fn write_forecast(
        pool: &SqlitePool,
        campaign_id: Uuid,
        buyer_id: Uuid,
        started_at: DateTime<Utc>,
    ) -> Result<CacPrediction, DemoSeedError> {
        let factor = |name: &str, impact: f64| PredictionFactor {
            name: name.to_string(),
            impact,
            direction: if impact >= 0.0 {
                FactorDirection::Positive
            } else {
                FactorDirection::Negative
            },
        };

        let predictions = vec![
            WeeklyPrediction {
                week: 1,
                predicted_cac: 6.90,
                confidence_low: 6.80,
                confidence_high: 8.87,
                factors: vec![factor("Creative Fatigue", -15.0), factor("Seasonal Demand", 8.0)],
            },
            WeeklyPrediction {
                week: 2,
                predicted_cac: 6.24,
                confidence_low: 6.15,
                confidence_high: 6.85,
                factors: vec![
                    factor("Creative Refresh", 10.0),
                    factor("Publisher Mix Optimization", 5.0),
                ],
            },
            WeeklyPrediction {
                week: 3,
                predicted_cac: 5.57,
                confidence_low: 5.45,
                confidence_high: 5.77,
                factors: vec![
                    factor("Data Enhancement", 12.0),
                    factor("Audience Optimization", 8.0),
                ],
            },
            WeeklyPrediction {
                week: 4,
                predicted_cac: 5.36,
                confidence_low: 5.31,
                confidence_high: 5.65,
                factors: vec![factor("Full Optimization", 15.0), factor("Market Saturation", -5.0)],
            },
        ];

        let prediction = CacPrediction::create(
            pool,
            &CreateCacPrediction {
                campaign_id,
                buyer_id,
                timestamp: started_at,
                predictions,
                current_cac: 5.36,
                model_accuracy: 87.5,
            },
        )
        .await?;

        Ok(prediction)
    }

    /// Per-DSP snapshots. Besides the auxiliary campaigns, `ecpm_trend` is
    /// the only field drawn from the random source rather than supplied
    /// literally.
    async fn write_dsp_performance<R: Rng + Send>(
        pool: &SqlitePool,
        campaign_id: Uuid,
        started_at: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<(), DemoSeedError> {
        let channels = [
            ("DV360", 44_848.0, 12.5, 32.0, DspStatus::Scaling),
            ("Amazon DSP", 28_030.0, 10.2, 25.0, DspStatus::Optimizing),
            ("The Trade Desk", 22_424.0, 14.8, 35.0, DspStatus::Scaling),
            ("Yahoo DSP", 16_818.0, 8.9, 22.0, DspStatus::Saturated),
        ];

        for (dsp, spend, ecpm, roas, status) in channels {
            let ecpm_trend = rng.gen_range(-5.0..5.0);
            DspPerformance::create(
                pool,
                campaign_id,
                dsp,
                spend,
                ecpm,
                ecpm_trend,
                roas,
                status,
                started_at,
            )
            .await?;
        }

        Ok(())
    }

    /// The owner's data assets, backdated to look mature.
    async fn create_data_assets(
        pool: &SqlitePool,
        owner_id: Uuid,
        started_at: DateTime<Utc>,
    ) -> Result<Vec<DataAsset>, DemoSeedError> {
        // (name, type, quality, records, update hrs, rev/k, industry avg/k,
        //  usage %, monthly revenue, age in days)
        let fixtures: [(&str, &str, i64, i64, i64, f64, f64, i64, f64, i64); 3] = [
            (
                "Identity Resolution - Sports Fans",
                "Identity Graph",
                92,
                2_500_000,
                24,
                2.39,
                2.10,
                78,
                560.0,
                180,
            ),
            (
                "Live Sports Fan Affinity",
                "Behavioral Segment",
                88,
                1_800_000,
                168,
                7.95,
                6.50,
                85,
                890.0,
                120,
            ),
            (
                "Location Context - Stadium Visitors",
                "Location Intelligence",
                79,
                750_000,
                72,
                3.57,
                3.20,
                65,
                150.0,
                90,
            ),
        ];

        let mut assets = Vec::with_capacity(fixtures.len());
        for (name, asset_type, quality, records, freq, rev_per_k, avg_per_k, usage, monthly, age) in
            fixtures
        {
            let asset = DataAsset::create(
                pool,
                &CreateDataAsset {
                    owner_id,
                    name: name.to_string(),
                    asset_type: asset_type.to_string(),
                    quality_score: quality,
                    record_count: records,
                    update_frequency: freq,
                    revenue_per_k: rev_per_k,
                    industry_avg_per_k: avg_per_k,
                    usage_rate: usage,
                    monthly_revenue: monthly,
                    status: AssetStatus::Active,
                    created_at: started_at - Duration::days(age),
                    updated_at: started_at,
                },
            )
            .await?;
            assets.push(asset);
        }

        Ok(assets)
    }

    /// Link each asset's claimed contribution to the flagship.
    async fn write_attributions(
        pool: &SqlitePool,
        campaign_id: Uuid,
        assets: &[DataAsset],
        started_at: DateTime<Utc>,
    ) -> Result<(), DemoSeedError> {
        // (percentage, value, cac reduction) per asset, in asset order
        let shares = [(3.0, 340.0, 0.34), (11.0, 1_270.0, 1.13), (2.0, 150.0, 0.15)];

        for (asset, (percentage, value, cac_reduction)) in assets.iter().zip(shares) {
            Attribution::create(
                pool,
                campaign_id,
                asset.id,
                cac_reduction,
                percentage,
                value,
                started_at,
            )
            .await?;
        }

        Ok(())
    }

    /// One pending payout per asset, labelled with the campaign's display
    /// name.
    async fn write_earnings(
        pool: &SqlitePool,
        owner_id: Uuid,
        assets: &[DataAsset],
        campaign_name: &str,
        started_at: DateTime<Utc>,
    ) -> Result<(), DemoSeedError> {
        let payouts = [(560.0, 234_000), (890.0, 112_000), (150.0, 42_000)];

        for (asset, (amount, impressions)) in assets.iter().zip(payouts) {
            Earning::create(
                pool,
                owner_id,
                asset.id,
                amount,
                campaign_name,
                impressions,
                started_at,
                EarningStatus::Pending,
            )
            .await?;
        }

        Ok(())
    }

    /// Aggregate health snapshot for the flagship.
    async fn write_campaign_health(
        pool: &SqlitePool,
        campaign_id: Uuid,
        buyer_id: Uuid,
        started_at: DateTime<Utc>,
    ) -> Result<CampaignHealth, DemoSeedError> {
        let health = CampaignHealth::create(
            pool,
            &CreateCampaignHealth {
                campaign_id,
                buyer_id,
                health_score: 82,
                metrics: HealthMetrics {
                    ctr_trend: -12.0,
                    cvr_trend: 8.0,
                    cac_trend: -46.0,
                    roas_trend: 87.0,
                    budget_utilization: 75.0,
                    creative_freshness: 45.0,
                },
                alerts: vec![
                    HealthAlert {
                        alert_type: "creative_fatigue".to_string(),
                        severity: AlertSeverity::Warning,
                        message: "Creative 1 showing 62% fatigue - refresh recommended"
                            .to_string(),
                    },
                    HealthAlert {
                        alert_type: "performance".to_string(),
                        severity: AlertSeverity::Info,
                        message: "CAC improved by 46% since data collaboration went live"
                            .to_string(),
                    },
                ],
                timestamp: started_at,
            },
        )
        .await?;

        Ok(health)
    }

    /// One recommendation each for the buyer and the owner.
    async fn write_recommendations(
        pool: &SqlitePool,
        buyer_id: Uuid,
        owner_id: Uuid,
        started_at: DateTime<Utc>,
    ) -> Result<(), DemoSeedError> {
        Recommendation::create(
            pool,
            &CreateRecommendation {
                user_id: buyer_id,
                rec_type: RecommendationType::CampaignOptimization,
                priority: RecommendationPriority::High,
                title: "Refresh Creative 1 to Maintain Performance".to_string(),
                description: "Creative 1 is showing 62% fatigue. Refreshing could improve CTR \
                              by 35% and save $12.3K in wasted spend."
                    .to_string(),
                estimated_impact: EstimatedImpact {
                    impact_type: ImpactType::CostSavings,
                    value: 12_300.0,
                },
                status: RecommendationStatus::New,
                created_at: started_at,
            },
        )
        .await?;

        Recommendation::create(
            pool,
            &CreateRecommendation {
                user_id: owner_id,
                rec_type: RecommendationType::DataOptimization,
                priority: RecommendationPriority::Medium,
                title: "Enhance Location Context Data Freshness".to_string(),
                description: "Updating location data more frequently (daily vs 3 days) could \
                              increase value by 25% and command higher CPM."
                    .to_string(),
                estimated_impact: EstimatedImpact {
                    impact_type: ImpactType::RevenueIncrease,
                    value: 37.5,
                },
                status: RecommendationStatus::New,
                created_at: started_at,
            },
        )
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fatigue_severity_gates_on_thresholds() {
        assert_eq!(fatigue_severity(28), None);
        assert_eq!(fatigue_severity(49), None);
        assert_eq!(fatigue_severity(50), Some(AlertSeverity::Warning));
        assert_eq!(fatigue_severity(62), Some(AlertSeverity::Warning));
        assert_eq!(fatigue_severity(80), Some(AlertSeverity::Critical));
        assert_eq!(fatigue_severity(100), Some(AlertSeverity::Critical));
    }
}
