use chrono::{TimeZone, Utc};
use db::DBService;
use rand::{SeedableRng, rngs::StdRng};
use services::services::{
    demo_seed::{DemoSeedService, FLAGSHIP_CAMPAIGN_NAME},
    seed_verify::SeedVerifyService,
};

#[tokio::test]
async fn verify_on_empty_store_reports_nothing() {
    let db = DBService::new_in_memory().await.unwrap();

    let report = SeedVerifyService::verify(&db.pool).await.unwrap();

    assert!(report.users.buyer.is_none());
    assert!(report.users.owner.is_none());
    assert_eq!(report.campaigns.total, 0);
    assert!(report.campaigns.flagship.is_none());
    assert_eq!(report.data_assets.total, 0);
    assert_eq!(report.creatives.total, 0);
    assert_eq!(report.attributions.total, 0);
    assert_eq!(report.earnings.total, 0);
}

#[tokio::test]
async fn verify_after_seed_reports_the_full_dataset() {
    let db = DBService::new_in_memory().await.unwrap();
    let started_at = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let summary = DemoSeedService::run_at(&db.pool, started_at, &mut rng)
        .await
        .unwrap();

    let report = SeedVerifyService::verify(&db.pool).await.unwrap();

    let buyer = report.users.buyer.expect("buyer present");
    assert_eq!(buyer.id, summary.users.buyer_id);
    assert_eq!(buyer.name, "Luigi");
    let owner = report.users.owner.expect("owner present");
    assert_eq!(owner.id, summary.users.owner_id);

    assert_eq!(report.campaigns.total, 5);
    let flagship = report.campaigns.flagship.expect("flagship present");
    assert_eq!(flagship.name, FLAGSHIP_CAMPAIGN_NAME);
    assert_eq!(flagship.current_cac, 5.36);
    assert_eq!(flagship.spend, 112_120.0);

    assert_eq!(report.data_assets.total, 3);
    assert_eq!(report.creatives.total, 2);
    assert_eq!(report.attributions.total, 3);
    assert_eq!(report.attributions.total_value, 1_760.0);
    assert_eq!(report.earnings.total, 3);
    assert_eq!(report.earnings.total_amount, 1_600.0);
}
