//! End-to-end tests for the federations job against a mock site.

mod helpers;

use federation_scrape::{run_federations, Job, OutputFormat};
use helpers::{federation_page, listing_page, mount_html, mount_status, test_config, LISTING_PATH};
use wiremock::MockServer;

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;
    let listing = listing_page(&[
        ("Федерация бокса", "/ru/federations/boxing"),
        ("Instagram", "https://www.instagram.com/olympic.kz"),
        ("Федерация борьбы", "/ru/federations/wrestling"),
    ]);
    mount_html(&server, LISTING_PATH, listing).await;
    mount_html(
        &server,
        "/ru/federations/boxing",
        federation_page("Иванов Иван", 5),
    )
    .await;
    mount_html(
        &server,
        "/ru/federations/wrestling",
        federation_page("Петров Пётр", 2),
    )
    .await;
    server
}

#[tokio::test]
async fn test_listing_with_social_link_yields_two_records_in_order() {
    let server = mock_site().await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("federations.csv");
    let config = test_config(
        Job::Federations,
        format!("{}{}", server.uri(), LISTING_PATH),
        &out,
        OutputFormat::Csv,
    );

    let report = run_federations(&config).await.expect("run succeeds");
    assert_eq!(report.total, 2);
    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);
    assert_eq!(report.written, 2);

    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Federation,URL,Kazakhstan federation: Website,"));
    assert!(lines[0].ends_with(",Gold,Silver,Bronze"));
    assert!(lines[1].starts_with("Федерация бокса,"));
    assert!(lines[1].contains("Иванов Иван"));
    assert!(lines[1].ends_with(",5,0,0"));
    assert!(lines[2].starts_with("Федерация борьбы,"));
    assert!(lines[2].ends_with(",2,0,0"));
    assert!(!csv.contains("instagram"));
}

#[tokio::test]
async fn test_failed_page_is_skipped() {
    let server = MockServer::start().await;
    let listing = listing_page(&[
        ("Федерация бокса", "/ru/federations/boxing"),
        ("Федерация борьбы", "/ru/federations/wrestling"),
    ]);
    mount_html(&server, LISTING_PATH, listing).await;
    mount_status(&server, "/ru/federations/boxing", 500).await;
    mount_html(
        &server,
        "/ru/federations/wrestling",
        federation_page("Петров Пётр", 2),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("federations.txt");
    let config = test_config(
        Job::Federations,
        format!("{}{}", server.uri(), LISTING_PATH),
        &out,
        OutputFormat::Text,
    );

    let report = run_federations(&config).await.expect("run completes");
    assert_eq!(report.total, 2);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 1);

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(!text.contains("Федерация бокса"));
    assert!(text.contains("Federation: Федерация борьбы"));
    assert!(text.contains("  President: Петров Пётр"));
    assert!(text.contains("  Phone: +7 (7172) 11-22-33\n"));
    assert!(text.contains("  Vice-president: No information"));
}

#[tokio::test]
async fn test_two_runs_produce_identical_output() {
    let server = mock_site().await;
    let dir = tempfile::tempdir().unwrap();
    let listing_url = format!("{}{}", server.uri(), LISTING_PATH);

    let first = dir.path().join("first.jsonl");
    let second = dir.path().join("second.jsonl");
    for out in [&first, &second] {
        let config = test_config(Job::Federations, listing_url.clone(), out, OutputFormat::Jsonl);
        run_federations(&config).await.expect("run succeeds");
    }

    let first = std::fs::read(&first).unwrap();
    let second = std::fs::read(&second).unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_name_link_mismatch_stops_the_job() {
    let server = MockServer::start().await;
    let listing = format!(
        "{}<h3>Лишний заголовок</h3>",
        listing_page(&[("Федерация бокса", "/ru/federations/boxing")])
    );
    mount_html(&server, LISTING_PATH, listing).await;

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("federations.csv");
    let config = test_config(
        Job::Federations,
        format!("{}{}", server.uri(), LISTING_PATH),
        &out,
        OutputFormat::Csv,
    );

    let err = run_federations(&config).await.unwrap_err();
    assert!(format!("{err:#}").contains("2 names but 1 links"));
    assert!(!out.exists());
}

#[tokio::test]
async fn test_unreachable_listing_is_an_error() {
    let server = MockServer::start().await;
    mount_status(&server, LISTING_PATH, 503).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(
        Job::Federations,
        format!("{}{}", server.uri(), LISTING_PATH),
        &dir.path().join("out.csv"),
        OutputFormat::Csv,
    );

    let err = run_federations(&config).await.unwrap_err();
    assert!(format!("{err:#}").contains("503"));
}

#[tokio::test]
async fn test_concurrent_fetches_keep_listing_order() {
    let server = mock_site().await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("federations.csv");
    let config = federation_scrape::Config {
        max_concurrency: 4,
        ..test_config(
            Job::Federations,
            format!("{}{}", server.uri(), LISTING_PATH),
            &out,
            OutputFormat::Csv,
        )
    };

    run_federations(&config).await.expect("run succeeds");
    let csv = std::fs::read_to_string(&out).unwrap();
    let names: Vec<&str> = csv
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(names, vec!["Федерация бокса", "Федерация борьбы"]);
}
