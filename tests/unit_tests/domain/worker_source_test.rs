use std::path::Path;

use resume_expert::domain::{DEFAULT_LOCAL_WORKER, ENGINE_VERSION, WorkerConfig, WorkerSource};

#[test]
fn given_defaults_when_building_config_then_bundled_precedes_local() {
    let config = WorkerConfig::default();

    assert_eq!(
        config.preference(),
        &[
            WorkerSource::Bundled,
            WorkerSource::LocalFile(DEFAULT_LOCAL_WORKER.into()),
        ]
    );
    assert_eq!(config.local_worker(), Path::new(DEFAULT_LOCAL_WORKER));
}

#[test]
fn given_remote_base_url_when_building_config_then_remote_is_last_and_version_pinned() {
    let config = WorkerConfig::with_defaults(false, "/opt/worker", Some("https://cdn.test/pdf/"));

    let expected_url = format!("https://cdn.test/pdf/{ENGINE_VERSION}/pdf-worker");
    assert_eq!(
        config.preference(),
        &[
            WorkerSource::LocalFile("/opt/worker".into()),
            WorkerSource::Remote(expected_url),
        ]
    );
}

#[test]
fn given_any_config_when_forcing_local_then_returns_local_worker_file() {
    let config = WorkerConfig::with_defaults(true, "/opt/worker", Some("https://cdn.test"));
    assert_eq!(config.local_only(), WorkerSource::LocalFile("/opt/worker".into()));
}

#[test]
fn given_sources_when_displayed_then_include_location() {
    assert_eq!(WorkerSource::Bundled.to_string(), "bundled");
    assert_eq!(
        WorkerSource::LocalFile("/usr/bin/pdftotext".into()).to_string(),
        "local:/usr/bin/pdftotext"
    );
    assert_eq!(WorkerSource::Remote("https://x".into()).kind(), "remote");
}
