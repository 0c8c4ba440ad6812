//! Tests for the dashboard module.

use std::time::Duration;

use async_trait::async_trait;
use jiff::Timestamp;

use super::*;
use crate::{
    cascade::{CityLoadOutcome, CityLoadState},
    collaborators::{CitySource, CountryDetailSource, DataOutcome, FixtureSource, SelectionLevel},
    error::{Result, WanderlustError},
    models::{Plan, PlanFilter, PlanType, RawCountryRecord},
    params::{ClearPlans, ListPlans, RemovePlan, SavePlan},
};

const FIXTURE: &str = r#"{
    "availableCountries": [
        {"countryCode": "US", "name": "United States"},
        {"countryCode": "DE", "name": "Germany"},
        {"countryCode": "NP", "name": "Nepal"}
    ],
    "countryDetails": [
        {
            "cca2": "US",
            "name": {"common": "United States", "official": "United States of America"},
            "timezones": ["UTC-05:00", "UTC-08:00"],
            "capital": ["Washington, D.C."],
            "currencies": {"USD": {"name": "United States dollar", "symbol": "$"}}
        },
        {
            "cca2": "DE",
            "name": {"common": "Germany", "official": "Federal Republic of Germany"},
            "timezones": ["UTC+01:00"],
            "capital": ["Berlin"],
            "currencies": {"EUR": {"name": "Euro", "symbol": "€"}}
        }
    ],
    "cities": {
        "United States": ["New York", "Chicago"],
        "Germany": []
    },
    "holidays": {
        "2026/DE": [
            {"date": "2026-10-03", "localName": "Tag der Deutschen Einheit", "name": "German Unity Day"}
        ]
    },
    "longWeekends": {
        "2026/DE": [
            {"startDate": "2026-04-03", "endDate": "2026-04-06", "dayCount": 4}
        ]
    },
    "events": {
        "Berlin": [{"name": "Festival of Lights", "date": "2026-10-09"}]
    },
    "coordinates": {
        "Berlin": {"name": "Berlin", "latitude": 52.52, "longitude": 13.41}
    },
    "weather": {
        "Berlin": {"temperature": 14.2, "relative_humidity": 71, "wind_speed": 11.0, "weather_code": 61}
    },
    "rates": {
        "USD": {"base": "USD", "rates": {"EUR": 0.92, "JPY": 151.3}}
    }
}"#;

fn fixture() -> FixtureSource {
    FixtureSource::from_json(FIXTURE).expect("Failed to parse fixture")
}

async fn create_test_dashboard() -> Dashboard {
    DashboardBuilder::new()
        .in_memory()
        .with_year(Some("2026"))
        .build()
        .await
        .expect("Failed to create dashboard")
}

async fn loaded_dashboard(source: &FixtureSource) -> Dashboard {
    let mut dashboard = create_test_dashboard().await;
    dashboard
        .load_reference(source)
        .await
        .expect("Failed to load reference data");
    dashboard
}

/// City source that never answers in time.
struct SlowCities;

#[async_trait]
impl CitySource for SlowCities {
    async fn load_cities(&self, _country_name: &str) -> Result<Vec<String>> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(vec!["Too Late".to_string()])
    }
}

#[async_trait]
impl CountryDetailSource for SlowCities {
    async fn load_country_detail(&self, code: &str) -> Result<RawCountryRecord> {
        Err(WanderlustError::CountryNotFound {
            code: code.to_string(),
        })
    }
}

#[tokio::test]
async fn test_load_reference_merges_and_synthesizes() {
    let source = fixture();
    let dashboard = loaded_dashboard(&source).await;

    assert_eq!(dashboard.reference().len(), 3);
    let nepal = dashboard.reference().get("NP").unwrap();
    assert_eq!(nepal.timezones, vec!["UTC".to_string()]);
    assert_eq!(nepal.flag_url, "https://flagcdn.com/w40/np.png");
}

#[tokio::test]
async fn test_load_reference_fails_when_both_lists_fail() {
    let source = fixture().with_failure("reference");
    let mut dashboard = create_test_dashboard().await;
    assert!(dashboard.load_reference(&source).await.is_err());
    assert!(dashboard.reference().is_empty());
}

#[tokio::test]
async fn test_select_country_auto_selects_first_city() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;

    let outcome = dashboard.select_country("us", &source).await;

    assert!(matches!(
        outcome,
        CityLoadOutcome::Applied { selected: Some(ref city), .. } if city == "New York"
    ));
    assert_eq!(dashboard.selection().country_code(), Some("US"));
    assert_eq!(dashboard.selection().timezone().as_str(), "UTC-05:00");

    let view = dashboard.selection_view().unwrap();
    assert_eq!(view.badge.city_suffix, "• New York");
    assert_eq!(view.banner.city_line, "• New York");
}

#[tokio::test]
async fn test_empty_city_list_falls_back_to_capital() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;

    dashboard.select_country("DE", &source).await;

    let cities = dashboard.cascade().cities();
    assert_eq!(cities.len(), 1);
    assert!(cities[0].is_capital_fallback);
    assert_eq!(dashboard.selection().city_name(), Some("Berlin"));
}

#[tokio::test]
async fn test_city_cleared_before_city_list_arrives() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;
    dashboard.select_country("US", &source).await;
    assert!(dashboard.selection().city_name().is_some());

    let (change, ticket) = dashboard.begin_country_selection("DE");
    assert!(change.city);
    assert!(ticket.is_some());
    assert_eq!(dashboard.selection().city_name(), None);
    assert!(dashboard.cascade().is_loading());
    assert_eq!(dashboard.selection_view().unwrap().badge.city_suffix, "");
}

#[tokio::test]
async fn test_stale_city_response_is_discarded() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;

    let (_, us_ticket) = dashboard.begin_country_selection("US");
    let us_ticket = us_ticket.unwrap();
    let us_cities = dashboard.load_cities(&us_ticket, &source).await;

    let (_, de_ticket) = dashboard.begin_country_selection("DE");
    let de_ticket = de_ticket.unwrap();
    let de_cities = dashboard.load_cities(&de_ticket, &source).await;

    let applied = dashboard.apply_city_load(&de_ticket, de_cities);
    assert!(!applied.is_stale());

    let late = dashboard.apply_city_load(&us_ticket, us_cities);
    assert!(late.is_stale());
    assert_eq!(dashboard.selection().city_name(), Some("Berlin"));
    assert_eq!(dashboard.cascade().cities()[0].name, "Berlin");
}

#[tokio::test]
async fn test_city_failure_leaves_error_state() {
    let source = fixture().with_failure("cities");
    let mut dashboard = loaded_dashboard(&source).await;

    let outcome = dashboard.select_country("US", &source).await;

    assert!(matches!(outcome, CityLoadOutcome::Failed { .. }));
    assert!(matches!(
        dashboard.cascade().state(),
        CityLoadState::Failed { .. }
    ));
    assert_eq!(dashboard.selection().city_name(), None);

    // the next selection starts a fresh load
    let (_, ticket) = dashboard.begin_country_selection("DE");
    assert!(ticket.is_some());
    assert!(dashboard.cascade().is_loading());
}

#[tokio::test]
async fn test_city_load_timeout_is_a_failure() {
    let source = fixture();
    let mut dashboard = DashboardBuilder::new()
        .in_memory()
        .with_collaborator_timeout(Duration::from_millis(50))
        .build()
        .await
        .unwrap();
    dashboard.load_reference(&source).await.unwrap();

    let outcome = dashboard.select_country("US", &SlowCities).await;

    match outcome {
        CityLoadOutcome::Failed { reason } => assert!(reason.contains("timed out")),
        other => panic!("expected a timeout failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_country_detail_requires_explore() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;

    assert_eq!(
        dashboard.country_detail(&source).await,
        DataOutcome::NothingSelected(SelectionLevel::Country)
    );
    assert!(matches!(
        dashboard.confirm_explore(),
        Err(WanderlustError::MissingSelection)
    ));

    dashboard.select_country("DE", &source).await;
    assert_eq!(
        dashboard.country_detail(&source).await,
        DataOutcome::NothingSelected(SelectionLevel::ExploreConfirmation)
    );
    assert!(dashboard.country_local_time(Timestamp::now()).is_none());

    dashboard.confirm_explore().unwrap();
    let overview = dashboard.country_detail(&source).await.into_ready().unwrap();
    assert_eq!(overview.record.name.official, "Federal Republic of Germany");
    assert_eq!(overview.timezone, "UTC+01:00");

    let noon_utc: Timestamp = "2026-06-01T12:00:00Z".parse().unwrap();
    let local = dashboard.country_local_time(noon_utc).unwrap();
    assert_eq!(local.hour(), 13);
}

#[tokio::test]
async fn test_new_country_resets_explore() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;
    dashboard.select_country("DE", &source).await;
    dashboard.confirm_explore().unwrap();

    dashboard.select_country("US", &source).await;
    assert!(!dashboard.selection().explore_confirmed());
}

#[tokio::test]
async fn test_calendar_views_follow_selection() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;

    assert_eq!(
        dashboard.holidays(&source).await,
        DataOutcome::NothingSelected(SelectionLevel::Country)
    );

    dashboard.select_country("DE", &source).await;
    assert_eq!(dashboard.holidays(&source).await.ready().map(Vec::len), Some(1));
    assert_eq!(
        dashboard.long_weekends(&source).await.ready().map(Vec::len),
        Some(1)
    );

    dashboard.select_year("2027");
    assert_eq!(dashboard.holidays(&source).await, DataOutcome::Empty);
}

#[tokio::test]
async fn test_holiday_failure_is_distinct_from_empty() {
    let source = fixture().with_failure("holidays");
    let mut dashboard = loaded_dashboard(&source).await;
    dashboard.select_country("DE", &source).await;

    assert!(matches!(
        dashboard.holidays(&source).await,
        DataOutcome::Failed { .. }
    ));
}

#[tokio::test]
async fn test_city_views_need_a_city() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;
    dashboard.select_country("DE", &source).await;

    let events = dashboard.events(&source).await.into_ready().unwrap();
    assert_eq!(events[0].venue_or_default(), "Local Venue");

    let weather = dashboard.weather(&source).await.into_ready().unwrap();
    assert_eq!(weather.forecast.condition().as_str(), "Rainy");

    // no sun times in the fixture for Berlin
    assert!(matches!(
        dashboard.sun_times(&source).await,
        DataOutcome::Failed { .. }
    ));

    dashboard.select_country("NP", &source).await;
    assert_eq!(
        dashboard.events(&source).await,
        DataOutcome::NothingSelected(SelectionLevel::City)
    );
}

#[tokio::test]
async fn test_exchange_rates_preselect_local_currency() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;

    let board = dashboard
        .exchange_rates(&source, "USD")
        .await
        .into_ready()
        .unwrap();
    assert_eq!(board.local_currency, None);

    dashboard.select_country("DE", &source).await;
    let board = dashboard
        .exchange_rates(&source, "usd")
        .await
        .into_ready()
        .unwrap();
    assert_eq!(board.local_currency.as_deref(), Some("EUR"));
    let converted = board.rates.convert(100.0, "USD", "EUR").unwrap();
    assert!((converted - 92.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_plan_lifecycle_updates_counts() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;
    let mut counts_rx = dashboard.view_sync().subscribe_counts();

    dashboard.select_country("DE", &source).await;
    let holidays = dashboard.holidays(&source).await.into_ready().unwrap();
    let plan = dashboard.add_plan(Plan::from(&holidays[0])).unwrap();
    assert!(dashboard.is_saved(&plan));

    dashboard
        .save_plan(&SavePlan {
            plan_type: PlanType::Event,
            name: "Festival of Lights".to_string(),
            details: None,
            date: Some("2026-10-09".to_string()),
        })
        .unwrap();

    assert!(counts_rx.has_changed().unwrap());
    let counts = *counts_rx.borrow_and_update();
    assert_eq!((counts.all, counts.holiday, counts.event), (2, 1, 1));

    let events = dashboard.list_plans(&ListPlans {
        filter: PlanFilter::Event,
    });
    assert_eq!(events.items[0].index, 1);

    assert!(matches!(
        dashboard.remove_plan(&RemovePlan {
            index: 1,
            confirmed: false
        }),
        Err(WanderlustError::InvalidInput { .. })
    ));
    dashboard
        .remove_plan(&RemovePlan {
            index: events.items[0].index,
            confirmed: true,
        })
        .unwrap();
    assert_eq!(dashboard.plan_counts().event, 0);

    assert_eq!(
        dashboard.clear_plans(&ClearPlans { confirmed: true }).unwrap(),
        1
    );
    assert_eq!(dashboard.view_sync().current_counts().all, 0);
}

#[tokio::test]
async fn test_clear_selection_keeps_year_and_hides_badge() {
    let source = fixture();
    let mut dashboard = loaded_dashboard(&source).await;
    dashboard.select_year("2030");
    dashboard.select_country("US", &source).await;

    dashboard.clear_selection();

    assert!(dashboard.selection_view().is_none());
    assert_eq!(dashboard.selection().year(), "2030");
    assert_eq!(dashboard.cascade().state(), &CityLoadState::Idle);
}

#[tokio::test]
async fn test_zero_timeout_is_rejected() {
    let result = DashboardBuilder::new()
        .in_memory()
        .with_collaborator_timeout(Duration::ZERO)
        .build()
        .await;
    assert!(matches!(result, Err(WanderlustError::Configuration { .. })));
}
