//! End-to-end tests for the medals job against a mock olympedia.

mod helpers;

use federation_scrape::{run_medals, Config, Job, Locale, OutputFormat};
use helpers::{mount_html, mount_status, test_config};
use wiremock::MockServer;

const COUNTRY_PATH: &str = "/countries/KAZ";

fn country_page() -> String {
    r#"<html><body><table>
        <tr><td><a href="/editions/1">1996 Summer Olympics</a></td>
            <td><a href="/countries/KAZ/editions/1">Results</a></td></tr>
        <tr><td><a href="/editions/2">2000 Summer Olympics</a></td>
            <td><a href="/countries/KAZ/editions/2">Results</a></td></tr>
        <tr><td><a href="/editions/3">2004 Summer Olympics</a></td>
            <td><a href="/countries/KAZ/editions/3">Results</a></td></tr>
        <tr><td colspan="2"><a href="/countries/KAZ/editions/1">Atlanta again</a></td></tr>
    </table></body></html>"#
        .to_string()
}

fn edition_page(year: u32, athlete: &str, medal: &str) -> String {
    format!(
        r#"<html><head><title>Kazakhstan at the {year} Summer Olympics | Olympedia</title></head><body>
        <table>
            <tr><td colspan="4"><h2>Boxing</h2></td></tr>
            <tr><td>Featherweight, Men</td><td><a href="/athletes/1">{athlete}</a></td><td>1</td><td>{medal}</td></tr>
            <tr><td>Team, Men</td><td><a href="/countries/KAZ">Kazakhstan</a></td><td>5</td><td></td></tr>
        </table></body></html>"#
    )
}

async fn mock_olympedia() -> MockServer {
    let server = MockServer::start().await;
    mount_html(&server, COUNTRY_PATH, country_page()).await;
    mount_html(
        &server,
        "/countries/KAZ/editions/1",
        edition_page(1996, "Vasily Zhirov", "Gold"),
    )
    .await;
    mount_status(&server, "/countries/KAZ/editions/2", 404).await;
    mount_html(
        &server,
        "/countries/KAZ/editions/3",
        edition_page(2004, "Bakhtiyar Artayev", "Silver"),
    )
    .await;
    server
}

#[tokio::test]
async fn test_medals_csv_end_to_end() {
    let server = mock_olympedia().await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("olympics.csv");
    let config = test_config(
        Job::Medals,
        format!("{}{}", server.uri(), COUNTRY_PATH),
        &out,
        OutputFormat::Csv,
    );

    let report = run_medals(&config).await.expect("run completes");
    // Duplicate edition link is visited once
    assert_eq!(report.total, 3);
    assert_eq!(report.failed, 1);
    assert_eq!(report.written, 2);

    let csv = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        csv,
        "Year,Athlete(s),Sport,Discipline,Place,Medal\n\
         1996,Vasily Zhirov,Boxing,\"Featherweight, Men\",1,Gold\n\
         2004,Bakhtiyar Artayev,Boxing,\"Featherweight, Men\",1,Silver\n"
    );
}

#[tokio::test]
async fn test_medals_russian_locale() {
    let server = mock_olympedia().await;
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("olympics.csv");
    let config = Config {
        locale: Locale::Ru,
        ..test_config(
            Job::Medals,
            format!("{}{}", server.uri(), COUNTRY_PATH),
            &out,
            OutputFormat::Csv,
        )
    };

    run_medals(&config).await.expect("run completes");
    let csv = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Год,Атлет(ы),Вид спорта,Дисциплина,Место,Медаль");
    assert!(lines[1].ends_with(",Золото"));
    assert!(lines[2].ends_with(",Серебро"));
}
