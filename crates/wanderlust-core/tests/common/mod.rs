use std::path::Path;

use tempfile::TempDir;
use wanderlust_core::{Dashboard, DashboardBuilder, FixtureSource};

/// Helper function to create a test dashboard backed by a file database
pub async fn create_test_dashboard() -> (TempDir, Dashboard) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dashboard = open_dashboard(&temp_dir.path().join("test.db")).await;
    (temp_dir, dashboard)
}

/// Open (or reopen) a dashboard on an existing database file
pub async fn open_dashboard(db_path: &Path) -> Dashboard {
    DashboardBuilder::new()
        .with_database_path(Some(db_path))
        .with_year(Some("2026"))
        .build()
        .await
        .expect("Failed to create dashboard")
}

/// Small offline data set: Portugal with cities, Malta without
#[allow(dead_code)]
pub fn travel_fixture() -> FixtureSource {
    FixtureSource::from_json(
        r#"{
            "availableCountries": [
                {"countryCode": "PT", "name": "Portugal"},
                {"countryCode": "MT", "name": "Malta"}
            ],
            "countryDetails": [
                {"cca2": "PT", "name": {"common": "Portugal"}, "timezones": ["UTC"], "capital": ["Lisbon"]},
                {"cca2": "MT", "name": {"common": "Malta"}, "timezones": ["UTC+01:00"], "capital": ["Valletta"]}
            ],
            "cities": {"Portugal": ["Lisbon", "Porto", "Faro"]},
            "holidays": {
                "2026/PT": [
                    {"date": "2026-04-25", "localName": "Dia da Liberdade", "name": "Freedom Day"},
                    {"date": "2026-06-10", "localName": "Dia de Portugal", "name": "Portugal Day"}
                ]
            },
            "longWeekends": {
                "2026/PT": [{"startDate": "2026-04-03", "endDate": "2026-04-05", "dayCount": 3}]
            },
            "events": {
                "Lisbon": [{"name": "Santo António", "date": "2026-06-12", "venue": "Alfama"}]
            }
        }"#,
    )
    .expect("Failed to parse fixture")
}
