mod common;

use common::{create_test_dashboard, open_dashboard, travel_fixture};
use wanderlust_core::{
    models::{FilterCounts, Plan, PlanFilter, PlanType},
    params::{ClearPlans, ListPlans, RemovePlan, SavePlan},
    WanderlustError,
};

fn save_params(plan_type: PlanType, name: &str, date: &str) -> SavePlan {
    SavePlan {
        plan_type,
        name: name.to_string(),
        details: None,
        date: Some(date.to_string()),
    }
}

#[tokio::test]
async fn test_persist_then_reload_preserves_order() {
    let (temp_dir, mut dashboard) = create_test_dashboard().await;
    let db_path = temp_dir.path().join("test.db");

    dashboard
        .save_plan(&save_params(PlanType::Event, "Fado Night", "2026-05-02"))
        .expect("Failed to save event");
    dashboard
        .save_plan(&save_params(PlanType::Holiday, "Dia de Portugal", "2026-06-10"))
        .expect("Failed to save holiday");
    dashboard
        .save_plan(&save_params(PlanType::Weekend, "Long Weekend", "2026-04-03"))
        .expect("Failed to save weekend");
    let before = dashboard.plans().as_slice().to_vec();
    drop(dashboard);

    let reopened = open_dashboard(&db_path).await;
    assert_eq!(reopened.plans().as_slice(), before.as_slice());
}

#[tokio::test]
async fn test_duplicate_save_keeps_single_entry() {
    let (_temp_dir, mut dashboard) = create_test_dashboard().await;
    let params = save_params(PlanType::Holiday, "Dia da Liberdade", "2026-04-25");

    dashboard.save_plan(&params).expect("Failed to save plan");
    let err = dashboard.save_plan(&params).unwrap_err();

    assert!(matches!(err, WanderlustError::DuplicatePlan { .. }));
    assert_eq!(dashboard.plans().len(), 1);
}

#[tokio::test]
async fn test_counts_derive_from_collection() {
    let (_temp_dir, mut dashboard) = create_test_dashboard().await;
    dashboard
        .save_plan(&save_params(PlanType::Holiday, "A", "2026-01-01"))
        .unwrap();
    dashboard
        .save_plan(&save_params(PlanType::Event, "B", "2026-02-01"))
        .unwrap();
    dashboard
        .save_plan(&save_params(PlanType::Weekend, "C", "2026-03-01"))
        .unwrap();

    assert_eq!(
        dashboard.plan_counts(),
        FilterCounts {
            all: 3,
            holiday: 1,
            event: 1,
            long_weekend: 1,
        }
    );

    let weekend_index = dashboard.list_plans(&ListPlans {
        filter: PlanFilter::LongWeekend,
    })
    .items[0]
        .index;
    let removed = dashboard
        .remove_plan(&RemovePlan {
            index: weekend_index,
            confirmed: true,
        })
        .unwrap();

    assert_eq!(removed.name, "C");
    assert_eq!(dashboard.plan_counts().long_weekend, 0);
    assert_eq!(dashboard.plan_counts().all, 2);
}

#[tokio::test]
async fn test_records_saved_from_views() {
    let source = travel_fixture();
    let (_temp_dir, mut dashboard) = create_test_dashboard().await;
    dashboard.load_reference(&source).await.unwrap();
    dashboard.select_country("PT", &source).await;

    let holidays = dashboard.holidays(&source).await.into_ready().unwrap();
    let weekends = dashboard.long_weekends(&source).await.into_ready().unwrap();
    let events = dashboard.events(&source).await.into_ready().unwrap();

    let holiday = dashboard.add_plan(Plan::from(&holidays[0])).unwrap();
    assert_eq!(holiday.name, "Dia da Liberdade");
    assert_eq!(holiday.details, "Freedom Day");

    let weekend = dashboard.add_plan(Plan::from(&weekends[0])).unwrap();
    assert_eq!(weekend.name, "Long Weekend");
    assert_eq!(weekend.details, "2026-04-03 - 2026-04-05");
    assert_eq!(weekend.date, "2026-04-03");

    let event = dashboard.add_plan(Plan::from(&events[0])).unwrap();
    assert_eq!(event.details, "Alfama");

    assert!(dashboard.is_saved(&Plan::from(&holidays[0])));
    assert!(!dashboard.is_saved(&Plan::from(&holidays[1])));
}

#[tokio::test]
async fn test_legacy_weekend_label_is_read() {
    let (temp_dir, dashboard) = create_test_dashboard().await;
    let db_path = temp_dir.path().join("test.db");
    drop(dashboard);

    {
        let mut db = wanderlust_core::Database::new(&db_path).unwrap();
        db.write_slot(
            wanderlust_core::PLANS_SLOT,
            r#"[{"type":"Long Weekend","name":"Long Weekend","details":"a - b","date":"2026-03-01"},{"bogus":true}]"#,
        )
        .unwrap();
    }

    let dashboard = open_dashboard(&db_path).await;
    assert_eq!(dashboard.plans().len(), 1);
    assert_eq!(dashboard.plans().as_slice()[0].plan_type, PlanType::Weekend);
    assert_eq!(dashboard.plan_counts().long_weekend, 1);
}

#[tokio::test]
async fn test_clear_requires_confirmation() {
    let (_temp_dir, mut dashboard) = create_test_dashboard().await;
    dashboard
        .save_plan(&save_params(PlanType::Event, "Fado Night", "2026-05-02"))
        .unwrap();

    assert!(dashboard.clear_plans(&ClearPlans { confirmed: false }).is_err());
    assert_eq!(dashboard.plans().len(), 1);

    assert_eq!(dashboard.clear_plans(&ClearPlans { confirmed: true }).unwrap(), 1);
    assert!(dashboard.plans().is_empty());
}
