use chrono::{Duration, TimeZone, Utc};
use db::DBService;
use db::models::earning::{Earning, EarningStatus};
use rand::{SeedableRng, rngs::StdRng};
use services::services::{demo_seed::DemoSeedService, earnings_stats::EarningsStats};

#[tokio::test]
async fn stats_bucket_earnings_by_status_and_day() {
    let db = DBService::new_in_memory().await.unwrap();
    let started_at = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    let summary = DemoSeedService::run_at(&db.pool, started_at, &mut rng)
        .await
        .unwrap();
    let owner_id = summary.users.owner_id;

    // All three seeded payouts are pending and written at the run instant.
    let stats = EarningsStats::for_owner(&db.pool, owner_id, started_at)
        .await
        .unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.pending, 1_600.0);
    assert_eq!(stats.total, 0.0);
    assert_eq!(stats.today, 1_600.0);

    // A distributed payout from last week moves into `total` without
    // affecting today's figure.
    let assets = db::models::data_asset::DataAsset::find_by_owner_id(&db.pool, owner_id)
        .await
        .unwrap();
    Earning::create(
        &db.pool,
        owner_id,
        assets[0].id,
        200.0,
        "Professional Sports Team 2025",
        10_000,
        started_at - Duration::days(7),
        EarningStatus::Distributed,
    )
    .await
    .unwrap();

    let stats = EarningsStats::for_owner(&db.pool, owner_id, started_at)
        .await
        .unwrap();
    assert_eq!(stats.count, 4);
    assert_eq!(stats.pending, 1_600.0);
    assert_eq!(stats.total, 200.0);
    assert_eq!(stats.today, 1_600.0);
}
