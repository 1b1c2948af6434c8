//! Read-back verification of the demo dataset.
//!
//! Builds the report an operator checks after triggering a seed run: both
//! identities, the buyer's campaign portfolio with the flagship's headline
//! metrics, the owner's assets and earnings, and attribution totals.

use db::models::{
    attribution::Attribution, campaign::Campaign, creative::Creative, data_asset::DataAsset,
    earning::Earning, user::User,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use super::demo_seed::{DEMO_BUYER_EMAIL, DEMO_OWNER_EMAIL, FLAGSHIP_CAMPAIGN_NAME};

#[derive(Debug, Error)]
pub enum SeedVerifyError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct ReportUsers {
    pub buyer: Option<UserSummary>,
    pub owner: Option<UserSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct FlagshipSummary {
    pub name: String,
    pub current_cac: f64,
    pub previous_cac: f64,
    pub roas: f64,
    pub spend: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CampaignReport {
    pub total: usize,
    pub flagship: Option<FlagshipSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AssetSummary {
    pub name: String,
    pub monthly_revenue: f64,
    pub quality_score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AssetReport {
    pub total: usize,
    pub assets: Vec<AssetSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreativeSummary {
    pub name: String,
    pub fatigue_score: i64,
    pub impressions: i64,
    pub ctr: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct CreativeReport {
    pub total: usize,
    pub details: Vec<CreativeSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct AttributionReport {
    pub total: usize,
    pub total_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct EarningReport {
    pub total: usize,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct SeedReport {
    pub users: ReportUsers,
    pub campaigns: CampaignReport,
    pub data_assets: AssetReport,
    pub creatives: CreativeReport,
    pub attributions: AttributionReport,
    pub earnings: EarningReport,
}

pub struct SeedVerifyService;

impl SeedVerifyService {
    pub async fn verify(pool: &SqlitePool) -> Result<SeedReport, SeedVerifyError> {
        let buyer = User::find_by_email(pool, DEMO_BUYER_EMAIL).await?;
        let owner = User::find_by_email(pool, DEMO_OWNER_EMAIL).await?;

        let campaigns = match &buyer {
            Some(buyer) => Campaign::find_by_buyer_id(pool, buyer.id).await?,
            None => Vec::new(),
        };
        let flagship = campaigns.iter().find(|c| c.name == FLAGSHIP_CAMPAIGN_NAME);

        let (creatives, attributions) = match flagship {
            Some(flagship) => (
                Creative::find_by_campaign_id(pool, flagship.id).await?,
                Attribution::find_by_campaign_id(pool, flagship.id).await?,
            ),
            None => (Vec::new(), Vec::new()),
        };

        let (assets, earnings) = match &owner {
            Some(owner) => (
                DataAsset::find_by_owner_id(pool, owner.id).await?,
                Earning::find_by_owner_id(pool, owner.id).await?,
            ),
            None => (Vec::new(), Vec::new()),
        };

        let summary = |user: &User| UserSummary {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        };

        Ok(SeedReport {
            users: ReportUsers {
                buyer: buyer.as_ref().map(summary),
                owner: owner.as_ref().map(summary),
            },
            campaigns: CampaignReport {
                total: campaigns.len(),
                flagship: flagship.map(|c| FlagshipSummary {
                    name: c.name.clone(),
                    current_cac: c.current_cac,
                    previous_cac: c.previous_cac,
                    roas: c.roas,
                    spend: c.spend,
                }),
            },
            data_assets: AssetReport {
                total: assets.len(),
                assets: assets
                    .iter()
                    .map(|a| AssetSummary {
                        name: a.name.clone(),
                        monthly_revenue: a.monthly_revenue,
                        quality_score: a.quality_score,
                    })
                    .collect(),
            },
            creatives: CreativeReport {
                total: creatives.len(),
                details: creatives
                    .iter()
                    .map(|c| CreativeSummary {
                        name: c.name.clone(),
                        fatigue_score: c.fatigue_score,
                        impressions: c.impressions,
                        ctr: c.ctr,
                    })
                    .collect(),
            },
            attributions: AttributionReport {
                total: attributions.len(),
                total_value: attributions.iter().map(|a| a.value).sum(),
            },
            earnings: EarningReport {
                total: earnings.len(),
                total_amount: earnings.iter().map(|e| e.amount).sum(),
            },
        })
    }
}
