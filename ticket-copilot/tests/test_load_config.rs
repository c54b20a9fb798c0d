use serial_test::serial;
use std::env;
use std::fs::write;
use tempfile::NamedTempFile;
use ticket_copilot::client::connect_rag_client;
use ticket_copilot::load_config::{load_config, resolve_settings, API_KEY_ENV, ENDPOINT_ENV};
use ticket_copilot_core::ProcessorError;

fn config_file(yaml: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp file");
    write(file.path(), yaml).expect("Writing temp config failed");
    file
}

#[test]
#[serial]
fn endpoint_is_read_from_yaml() {
    env::remove_var(ENDPOINT_ENV);
    env::remove_var(API_KEY_ENV);
    let file = config_file(
        r#"
processor:
  endpoint: "http://rag.internal:8000"
"#,
    );

    let config = load_config(file.path()).expect("Config should load");
    let settings = resolve_settings(Some(&config)).expect("settings resolve");

    assert_eq!(settings.endpoint, "http://rag.internal:8000");
    assert_eq!(settings.api_key, None);
}

#[test]
#[serial]
fn environment_overrides_yaml_and_supplies_key() {
    env::set_var(ENDPOINT_ENV, "https://rag.example.com");
    env::set_var(API_KEY_ENV, "s3cret");
    let file = config_file("processor:\n  endpoint: \"http://ignored:1\"\n");

    let config = load_config(file.path()).expect("Config should load");
    let settings = resolve_settings(Some(&config)).expect("settings resolve");

    assert_eq!(settings.endpoint, "https://rag.example.com");
    assert_eq!(settings.api_key.as_deref(), Some("s3cret"));

    env::remove_var(ENDPOINT_ENV);
    env::remove_var(API_KEY_ENV);
}

#[test]
#[serial]
fn client_is_built_from_file_config() {
    env::remove_var(ENDPOINT_ENV);
    let file = config_file("processor:\n  endpoint: \"http://rag.internal:8000/v1\"\n");

    let config = load_config(file.path()).expect("Config should load");
    let client = connect_rag_client(Some(&config)).expect("client builds from config");

    assert_eq!(
        client.process_url().as_str(),
        "http://rag.internal:8000/v1/tickets/process"
    );
}

#[test]
#[serial]
fn client_needs_an_endpoint() {
    env::remove_var(ENDPOINT_ENV);
    let err = connect_rag_client(None).err().expect("no endpoint configured");
    assert!(matches!(err, ProcessorError::Init(_)));
}

#[test]
#[serial]
fn empty_yaml_loads_with_defaults() {
    let file = config_file("{}\n");
    let config = load_config(file.path()).expect("empty mapping is a valid config");
    assert!(config.processor.endpoint.is_none());
}

#[test]
#[serial]
fn missing_endpoint_is_an_init_error() {
    env::remove_var(ENDPOINT_ENV);

    match resolve_settings(None) {
        Err(ProcessorError::Init(msg)) => assert!(msg.contains(ENDPOINT_ENV)),
        other => panic!("expected Init error, got {other:?}"),
    }
}

#[test]
#[serial]
fn malformed_yaml_is_rejected() {
    let file = config_file("processor: [unclosed\n");
    let err = load_config(file.path()).expect_err("broken YAML must fail");
    assert!(err.to_string().contains("Failed to parse config YAML"));
}

#[test]
fn unreadable_file_is_rejected() {
    let err = load_config("/definitely/not/here.yaml").expect_err("missing file must fail");
    assert!(err.to_string().contains("Failed to read config file"));
}
