use chrono::{DateTime, TimeZone, Utc};
use db::DBService;
use rand::{SeedableRng, rngs::StdRng};
use services::services::demo_seed::{
    DEMO_OWNER_EMAIL, DemoSeedService, FLAGSHIP_CAMPAIGN_NAME, SeedSummary,
};

use db::models::{
    attribution::Attribution,
    campaign::Campaign,
    campaign_health::CampaignHealth,
    campaign_history::CampaignHistory,
    creative::{AlertSeverity, Creative, CreativeFatigueAlert},
    data_asset::DataAsset,
    dsp_performance::DspPerformance,
    earning::{Earning, EarningStatus},
    prediction::{CacPrediction, FactorDirection},
    recommendation::Recommendation,
    user::User,
};

fn run_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap()
}

async fn seeded_db() -> (DBService, SeedSummary, DateTime<Utc>) {
    let db = DBService::new_in_memory().await.unwrap();
    let started_at = run_instant();
    let mut rng = StdRng::seed_from_u64(42);
    let summary = DemoSeedService::run_at(&db.pool, started_at, &mut rng)
        .await
        .unwrap();
    (db, summary, started_at)
}

async fn count(pool: &sqlx::SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn seed_creates_expected_record_counts() {
    let (db, summary, _) = seeded_db().await;

    assert!(summary.success);
    assert_eq!(count(&db.pool, "users").await, 2);
    assert_eq!(count(&db.pool, "campaigns").await, 5);
    assert_eq!(count(&db.pool, "campaign_history").await, 7);
    assert_eq!(count(&db.pool, "creatives").await, 2);
    assert_eq!(count(&db.pool, "creative_fatigue_alerts").await, 1);
    assert_eq!(count(&db.pool, "cac_predictions").await, 1);
    assert_eq!(count(&db.pool, "dsp_performance").await, 4);
    assert_eq!(count(&db.pool, "data_assets").await, 3);
    assert_eq!(count(&db.pool, "attributions").await, 3);
    assert_eq!(count(&db.pool, "earnings").await, 3);
    assert_eq!(count(&db.pool, "campaign_health").await, 1);
    assert_eq!(count(&db.pool, "recommendations").await, 2);

    let flagship = Campaign::find_by_id(&db.pool, summary.campaign_id)
        .await
        .unwrap()
        .expect("flagship exists");
    assert_eq!(flagship.name, FLAGSHIP_CAMPAIGN_NAME);
    assert_eq!(flagship.buyer_id, summary.users.buyer_id);
}

#[tokio::test]
async fn second_run_duplicates_only_downstream_records() {
    let (db, first, started_at) = seeded_db().await;

    let mut rng = StdRng::seed_from_u64(7);
    let second = DemoSeedService::run_at(&db.pool, started_at + chrono::Duration::hours(1), &mut rng)
        .await
        .unwrap();

    // The identity resolver is the only idempotency boundary.
    assert_eq!(first.users.buyer_id, second.users.buyer_id);
    assert_eq!(first.users.owner_id, second.users.owner_id);
    assert_ne!(first.campaign_id, second.campaign_id);
    assert_eq!(count(&db.pool, "users").await, 2);
    assert_eq!(count(&db.pool, "campaigns").await, 10);
}

#[tokio::test]
async fn history_is_continuous_with_flagship_state() {
    let (db, summary, _) = seeded_db().await;

    let flagship = Campaign::find_by_id(&db.pool, summary.campaign_id)
        .await
        .unwrap()
        .unwrap();
    let history = CampaignHistory::find_by_campaign_id(&db.pool, summary.campaign_id)
        .await
        .unwrap();

    assert_eq!(history.len(), 7);
    for pair in history.windows(2) {
        assert!(pair[0].date < pair[1].date, "dates must strictly increase");
    }
    let newest = history.last().unwrap();
    assert_eq!(newest.cac, flagship.current_cac);
    let oldest = history.first().unwrap();
    assert_eq!(oldest.cac, flagship.previous_cac);
}

#[tokio::test]
async fn forecast_bands_contain_estimates_and_factor_signs_agree() {
    let (db, summary, _) = seeded_db().await;

    let prediction = CacPrediction::find_latest_by_campaign_id(&db.pool, summary.campaign_id)
        .await
        .unwrap()
        .expect("prediction exists");

    assert_eq!(prediction.predictions.len(), 4);
    assert_eq!(prediction.model_accuracy, 87.5);
    for point in &prediction.predictions {
        assert!(point.confidence_low <= point.predicted_cac);
        assert!(point.predicted_cac <= point.confidence_high);
        for factor in &point.factors {
            match factor.direction {
                FactorDirection::Positive => assert!(factor.impact > 0.0),
                FactorDirection::Negative => assert!(factor.impact < 0.0),
            }
        }
    }
}

#[tokio::test]
async fn fatigue_alerts_gate_on_warning_threshold() {
    let (db, summary, _) = seeded_db().await;

    let creatives = Creative::find_by_campaign_id(&db.pool, summary.campaign_id)
        .await
        .unwrap();
    let alerts = CreativeFatigueAlert::find_by_campaign_id(&db.pool, summary.campaign_id)
        .await
        .unwrap();

    let fatigued = creatives.iter().find(|c| c.fatigue_score == 62).unwrap();
    let fresh = creatives.iter().find(|c| c.fatigue_score == 28).unwrap();

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].creative_id, fatigued.id);
    assert_eq!(alerts[0].severity, AlertSeverity::Warning);
    assert!(alerts.iter().all(|a| a.creative_id != fresh.id));
}

#[tokio::test]
async fn every_reference_resolves_to_an_id_from_the_same_run() {
    let (db, summary, _) = seeded_db().await;
    let buyer_id = summary.users.buyer_id;
    let owner_id = summary.users.owner_id;
    let campaign_id = summary.campaign_id;

    let campaigns = Campaign::find_by_buyer_id(&db.pool, buyer_id).await.unwrap();
    assert_eq!(campaigns.len(), 5);
    assert!(campaigns.iter().all(|c| c.buyer_id == buyer_id));

    let creatives = Creative::find_by_campaign_id(&db.pool, campaign_id)
        .await
        .unwrap();
    assert!(creatives
        .iter()
        .all(|c| c.campaign_id == campaign_id && c.buyer_id == buyer_id));

    let assets = DataAsset::find_by_owner_id(&db.pool, owner_id).await.unwrap();
    let asset_ids: Vec<_> = assets.iter().map(|a| a.id).collect();
    assert!(assets.iter().all(|a| a.owner_id == owner_id));

    let attributions = Attribution::find_by_campaign_id(&db.pool, campaign_id)
        .await
        .unwrap();
    assert_eq!(attributions.len(), 3);
    assert!(attributions
        .iter()
        .all(|a| a.campaign_id == campaign_id && asset_ids.contains(&a.data_source_id)));

    let earnings = Earning::find_by_owner_id(&db.pool, owner_id).await.unwrap();
    assert_eq!(earnings.len(), 3);
    assert!(earnings
        .iter()
        .all(|e| e.owner_id == owner_id && asset_ids.contains(&e.asset_id)));

    let dsp_rows = DspPerformance::find_by_campaign_id(&db.pool, campaign_id)
        .await
        .unwrap();
    assert!(dsp_rows.iter().all(|d| d.campaign_id == campaign_id));

    let health = CampaignHealth::find_latest_by_campaign_id(&db.pool, campaign_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(health.buyer_id, buyer_id);

    for user_id in [buyer_id, owner_id] {
        let recommendations = Recommendation::find_by_user_id(&db.pool, user_id)
            .await
            .unwrap();
        assert_eq!(recommendations.len(), 1);
    }
}

#[tokio::test]
async fn earnings_reference_the_campaign_by_display_name() {
    let (db, summary, _) = seeded_db().await;

    let earnings = Earning::find_by_owner_id(&db.pool, summary.users.owner_id)
        .await
        .unwrap();
    assert!(!earnings.is_empty());
    for earning in &earnings {
        assert_eq!(earning.campaign, FLAGSHIP_CAMPAIGN_NAME);
        assert_eq!(earning.status, EarningStatus::Pending);
    }
}

#[tokio::test]
async fn randomized_fields_stay_inside_documented_ranges() {
    let (db, summary, started_at) = seeded_db().await;

    let campaigns = Campaign::find_by_buyer_id(&db.pool, summary.users.buyer_id)
        .await
        .unwrap();
    let auxiliary: Vec<_> = campaigns
        .iter()
        .filter(|c| c.id != summary.campaign_id)
        .collect();
    assert_eq!(auxiliary.len(), 4);

    for campaign in auxiliary {
        assert!((5.0..10.0).contains(&campaign.current_cac));
        assert!((8.0..13.0).contains(&campaign.previous_cac));
        assert!((20.0..30.0).contains(&campaign.roas));
        let multiplier = campaign.revenue / campaign.spend;
        assert!((20.0..30.0).contains(&multiplier));
        assert!(campaign.created_at <= started_at);
        assert!(campaign.created_at > started_at - chrono::Duration::days(90));
    }

    let dsp_rows = DspPerformance::find_by_campaign_id(&db.pool, summary.campaign_id)
        .await
        .unwrap();
    for row in dsp_rows {
        assert!((-5.0..5.0).contains(&row.ecpm_trend));
    }
}

#[tokio::test]
async fn identity_resolver_reuses_the_owner_record() {
    let (db, summary, _) = seeded_db().await;

    let owner = User::find_by_email(&db.pool, DEMO_OWNER_EMAIL)
        .await
        .unwrap()
        .expect("owner exists");
    assert_eq!(owner.id, summary.users.owner_id);
}
