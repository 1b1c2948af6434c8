use chrono::{TimeZone, Utc};
use db::DBService;
use db::models::{
    campaign::{Campaign, CampaignStatus, CreateCampaign},
    data_asset::{AssetStatus, CreateDataAsset, DataAsset},
    earning::{Earning, EarningStatus},
    user::{CreateUser, User, UserRole},
};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 8, 1, 9, 30, 0).unwrap()
}

fn buyer_fixture() -> CreateUser {
    CreateUser {
        email: "buyer@example.com".to_string(),
        name: "Buyer".to_string(),
        role: UserRole::MediaBuyer,
        company: "Acme Media".to_string(),
        onboarding_completed: true,
        created_at: now(),
    }
}

#[tokio::test]
async fn find_or_create_by_email_inserts_once() {
    let db = DBService::new_in_memory().await.unwrap();
    let fixture = buyer_fixture();

    let first = User::find_or_create_by_email(&db.pool, &fixture).await.unwrap();
    let second = User::find_or_create_by_email(&db.pool, &fixture).await.unwrap();

    assert_eq!(first.id, second.id);
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(total, 1);
}

#[tokio::test]
async fn campaign_roundtrips_dsp_list_through_json_column() {
    let db = DBService::new_in_memory().await.unwrap();
    let buyer = User::create(&db.pool, &buyer_fixture()).await.unwrap();

    let created = Campaign::create(
        &db.pool,
        &CreateCampaign {
            buyer_id: buyer.id,
            name: "Launch Campaign".to_string(),
            status: CampaignStatus::Active,
            current_cac: 6.1,
            previous_cac: 9.4,
            target_cac: 5.5,
            ltv: 140.0,
            spend: 25_000.0,
            revenue: 600_000.0,
            roas: 24.0,
            dsps: vec!["DV360".to_string(), "Yahoo DSP".to_string()],
            created_at: now(),
            updated_at: now(),
        },
    )
    .await
    .unwrap();

    let fetched = Campaign::find_by_id(&db.pool, created.id)
        .await
        .unwrap()
        .expect("campaign exists");
    assert_eq!(fetched.dsps, vec!["DV360", "Yahoo DSP"]);
    assert_eq!(fetched.status, CampaignStatus::Active);
    assert_eq!(fetched.buyer_id, buyer.id);
}

#[tokio::test]
async fn earnings_list_joins_asset_display_name() {
    let db = DBService::new_in_memory().await.unwrap();
    let owner = User::create(
        &db.pool,
        &CreateUser {
            email: "owner@example.com".to_string(),
            name: "Owner".to_string(),
            role: UserRole::DataOwner,
            company: "Signal Co".to_string(),
            onboarding_completed: true,
            created_at: now(),
        },
    )
    .await
    .unwrap();

    let asset = DataAsset::create(
        &db.pool,
        &CreateDataAsset {
            owner_id: owner.id,
            name: "Purchase Intent Segment".to_string(),
            asset_type: "Behavioral Segment".to_string(),
            quality_score: 81,
            record_count: 400_000,
            update_frequency: 48,
            revenue_per_k: 4.1,
            industry_avg_per_k: 3.8,
            usage_rate: 55,
            monthly_revenue: 310.0,
            status: AssetStatus::Active,
            created_at: now(),
            updated_at: now(),
        },
    )
    .await
    .unwrap();

    Earning::create(
        &db.pool,
        owner.id,
        asset.id,
        310.0,
        "Launch Campaign",
        52_000,
        now(),
        EarningStatus::Pending,
    )
    .await
    .unwrap();

    let rows = Earning::find_by_owner_id_with_asset(&db.pool, owner.id, 50)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].asset, "Purchase Intent Segment");
    assert_eq!(rows[0].amount, 310.0);
    assert_eq!(rows[0].campaign, "Launch Campaign");
}
