// Gateway URL generation, end to end: config in, signed URL out

use rstest::rstest;

use shirube::client::Client;
use shirube::config::Config;
use shirube::imagor::options::{Setting, Transformation};
use shirube::imagor::signer::{PathSigner, SignerType};

const SOURCE: &str = "https://example.com/a.jpg";
// base64url of SOURCE, unpadded
const SOURCE_B64: &str = "aHR0cHM6Ly9leGFtcGxlLmNvbS9hLmpwZw";

fn client_from(yaml: &str) -> Client {
    let config = Config::from_yaml_with_env(yaml).expect("test yaml should parse");
    Client::new(&config).expect("test config should validate")
}

#[test]
fn test_stock_config_produces_signed_url_with_defaults() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
"#,
    );

    let url = client.url(SOURCE, &Transformation::resize(300, 200)).unwrap();

    // Stock defaults: fit-in, quality 80, auto webp
    let path = format!(
        "/fit-in/300x200/filters:quality(80):format(webp)/{}",
        SOURCE_B64
    );
    let signer = PathSigner::new("my-secret", SignerType::Sha1, None);
    assert_eq!(url, format!("https://img.example.com/{}{}", signer.sign(&path), path));
}

#[test]
fn test_unsafe_mode_url_is_fully_deterministic() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  unsafe_mode: true
"#,
    );

    let url = client.url(SOURCE, &Transformation::resize(300, 200)).unwrap();

    assert_eq!(
        url,
        format!(
            "https://img.example.com/unsafe/fit-in/300x200/filters:quality(80):format(webp)/{}",
            SOURCE_B64
        )
    );
}

#[rstest]
#[case("sha1", 27)]
#[case("sha256", 43)]
#[case("sha512", 86)]
fn test_signature_length_tracks_algorithm(#[case] signer_type: &str, #[case] expected_len: usize) {
    let client = client_from(&format!(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
  signer_type: {}
"#,
        signer_type
    ));

    let url = client.url(SOURCE, &Transformation::resize(100, 100)).unwrap();
    let rest = url.strip_prefix("https://img.example.com/").unwrap();
    let signature = rest.split('/').next().unwrap();

    assert_eq!(
        signature.len(),
        expected_len,
        "unexpected signature length for {}: {}",
        signer_type,
        url
    );
    assert!(
        signature
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
        "signature must stay in the base64url alphabet: {}",
        signature
    );
}

#[test]
fn test_truncated_signature_is_a_prefix_of_the_full_one() {
    let full = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
  signer_type: sha256
"#,
    );
    let truncated = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
  signer_type: sha256
  signer_truncate: 40
"#,
    );

    let transformation = Transformation::resize(100, 100);
    let full_url = full.url(SOURCE, &transformation).unwrap();
    let short_url = truncated.url(SOURCE, &transformation).unwrap();

    let sig_of = |url: &str| {
        url.strip_prefix("https://img.example.com/")
            .unwrap()
            .split('/')
            .next()
            .unwrap()
            .to_string()
    };
    let full_sig = sig_of(&full_url);
    let short_sig = sig_of(&short_url);

    assert_eq!(short_sig.len(), 40);
    assert!(full_sig.starts_with(&short_sig));
}

#[test]
fn test_avif_takes_priority_when_enabled() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
  auto_avif: true
"#,
    );

    let url = client.url(SOURCE, &Transformation::resize(300, 200)).unwrap();
    assert!(url.contains("format(avif)"), "avif wins over webp: {}", url);
    assert!(!url.contains("format(webp)"));
}

#[test]
fn test_source_is_encoded_without_padding() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
"#,
    );

    let url = client.url(SOURCE, &Transformation::default()).unwrap();
    assert!(url.ends_with(SOURCE_B64));
    assert!(!url.contains('='), "base64url must stay unpadded: {}", url);
}

#[test]
fn test_same_transformation_always_signs_identically() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
"#,
    );

    let transformation = Transformation {
        smart: true,
        grayscale: true,
        blur: Some(2.0),
        ..Transformation::resize(640, 480)
    };

    let first = client.url(SOURCE, &transformation).unwrap();
    let second = client.url(SOURCE, &transformation).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_preset_composition_reaches_the_url() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
  auto_webp: false
"#,
    );

    let transformation = Transformation {
        width: 640,
        height: 0,
        ..shirube::imagor::presets::web_optimized()
    };
    let url = client.url(SOURCE, &transformation).unwrap();

    assert!(url.contains("/640x0/"));
    assert!(url.contains("quality(80)"));
    assert!(url.contains("format(webp)"));
    assert!(url.contains("strip_exif()"));
    assert!(url.contains("strip_icc()"));
}

#[test]
fn test_explicit_quality_overrides_config_default() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
  auto_webp: false
"#,
    );

    let transformation = Transformation {
        quality: Setting::Set(55),
        ..Transformation::resize(300, 200)
    };
    let url = client.url(SOURCE, &transformation).unwrap();

    assert!(url.contains("quality(55)"));
    assert!(!url.contains("quality(80)"));
}

#[test]
fn test_srcset_entries_are_individually_signed() {
    let client = client_from(
        r#"
gateway:
  host: https://img.example.com
  secret: my-secret
"#,
    );

    let srcset = client
        .srcset(SOURCE, &Transformation::default(), &[])
        .unwrap();
    let entries: Vec<&str> = srcset.split(", ").collect();

    assert_eq!(entries.len(), 5, "stock ladder has five widths");
    for entry in &entries {
        let url = entry.split(' ').next().unwrap();
        let signature = url
            .strip_prefix("https://img.example.com/")
            .unwrap()
            .split('/')
            .next()
            .unwrap();
        assert_eq!(signature.len(), 27, "sha1 signature per entry: {}", entry);
    }
}
