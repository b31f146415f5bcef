// Shared fixtures for the job integration tests: mock pages and configs.

use std::path::Path;

use federation_scrape::{Config, Job, OutputFormat};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)] // Used by other test files
pub const LISTING_PATH: &str = "/ru/federations";

#[allow(dead_code)] // Used by other test files
/// A listing page with one anchor + heading per `(name, href)` pair.
pub fn listing_page(items: &[(&str, &str)]) -> String {
    let anchors: String = items
        .iter()
        .map(|(name, href)| {
            format!(r#"<a class="federations-list-item" href="{href}"><h3>{name}</h3></a>"#)
        })
        .collect();
    format!("<html><body><div class=\"federations-list\">{anchors}</div></body></html>")
}

#[allow(dead_code)] // Used by other test files
/// A federation page in the olympic.kz layout.
pub fn federation_page(president: &str, gold: u32) -> String {
    format!(
        r#"<html><body>
        <section id="section-local_description">
            <h2>Казахстанская федерация</h2>
            <a href="https://federation.kz">federation.kz</a>
            <p>Президент: {president}</p>
            <p>Юридический адрес: г. Астана, ул. Кунаева 10</p>
            <p>Телефон: +7 (7172) 11-22-33, +7 (7172) 11-22-33</p>
        </section>
        <section id="section-world_description">
            <h2>Международная федерация</h2>
            <p>Тел.: +41 21 000 00 00</p>
        </section>
        <div class="medals">
            <div class="medals-item"><div class="medals-item__name">Золото</div><div class="medals-item__circle">{gold}</div></div>
        </div>
    </body></html>"#
    )
}

#[allow(dead_code)] // Used by other test files
pub async fn mount_html(server: &MockServer, at: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[allow(dead_code)] // Used by other test files
pub async fn mount_status(server: &MockServer, at: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Config pointed at the mock server, writing `format` to `output`.
pub fn test_config(
    job: Job,
    listing_url: String,
    output: &Path,
    format: OutputFormat,
) -> Config {
    Config {
        listing_url,
        output: Some(output.to_path_buf()),
        format,
        timeout_seconds: 5,
        ..Config::for_job(job)
    }
}
