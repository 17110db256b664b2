// Configuration loading through files and the environment

use shirube::client::Client;
use shirube::config::Config;
use shirube::imagor::options::Transformation;

#[test]
fn test_file_with_env_substitution_builds_a_working_client() {
    std::env::set_var("SHIRUBE_IT_SECRET", "file-env-secret");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shirube.yaml");
    std::fs::write(
        &path,
        "gateway:\n  host: https://img.example.com\n  secret: ${SHIRUBE_IT_SECRET}\n",
    )
    .unwrap();

    let config = Config::from_file(&path).unwrap();
    assert_eq!(config.gateway.secret, "file-env-secret");

    let client = Client::new(&config).unwrap();
    let url = client
        .url("https://example.com/a.jpg", &Transformation::resize(10, 10))
        .unwrap();
    assert!(url.starts_with("https://img.example.com/"));

    std::env::remove_var("SHIRUBE_IT_SECRET");
}

#[test]
fn test_client_rejects_config_without_secret() {
    let config = Config::from_yaml_with_env(
        r#"
gateway:
  host: https://img.example.com
"#,
    )
    .unwrap();

    let result = Client::new(&config);
    assert!(result.is_err(), "signing without a secret must be refused");
}

#[test]
fn test_environment_only_configuration() {
    std::env::set_var("IMAGOR_URL", "https://img.example.com");
    std::env::set_var("IMAGOR_SECRET", "env-only-secret");

    let config = Config::from_env();
    let client = Client::new(&config).unwrap();
    let url = client
        .url("https://example.com/a.jpg", &Transformation::default())
        .unwrap();
    assert!(url.starts_with("https://img.example.com/"));

    std::env::remove_var("IMAGOR_URL");
    std::env::remove_var("IMAGOR_SECRET");
}

#[test]
fn test_validation_failures_carry_readable_messages() {
    let no_host = Config::default();
    let err = no_host.validate().unwrap_err();
    assert!(err.to_string().contains("host"));

    let mut bad_signer = Config::default();
    bad_signer.gateway.host = "https://img.example.com".to_string();
    bad_signer.gateway.secret = "s".to_string();
    bad_signer.gateway.signer_type = "crc32".to_string();
    let err = bad_signer.validate().unwrap_err();
    assert!(err.to_string().contains("invalid signer type"));
}
