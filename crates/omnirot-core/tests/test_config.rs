use std::path::PathBuf;

use omnirot_core::config::RegistrationConfig;
use omnirot_core::registration::Region;
use omnirot_core::sweep::SweepConfig;

#[test]
fn test_default_config() {
    let c = RegistrationConfig::default();
    assert_eq!(c.output_dir, PathBuf::from("results"));
    assert_eq!(c.jpeg_quality, 95);
    assert_eq!(c.region, Region::new(2850, 1425, 3229, 1614));
    assert_eq!(c.sweep, SweepConfig::default());
}

#[test]
fn test_toml_roundtrip() {
    let mut c = RegistrationConfig::default();
    c.base = PathBuf::from("images/base/base.jpg");
    c.reference = PathBuf::from("images/reference/reference_18_5deg.jpg");
    c.sweep.expected_angle_deg = 18.5;
    c.region = Region::new(10, 20, 30, 40);

    let text = toml::to_string_pretty(&c).unwrap();
    let parsed: RegistrationConfig = toml::from_str(&text).unwrap();
    assert_eq!(parsed.base, c.base);
    assert_eq!(parsed.reference, c.reference);
    assert_eq!(parsed.region, c.region);
    assert_eq!(parsed.sweep, c.sweep);
    assert_eq!(parsed.jpeg_quality, c.jpeg_quality);
}

#[test]
fn test_minimal_toml_uses_defaults() {
    let text = r#"
base = "a.jpg"
reference = "b.jpg"

[sweep]
expected_angle_deg = 18.5
"#;
    let c: RegistrationConfig = toml::from_str(text).unwrap();
    assert_eq!(c.base, PathBuf::from("a.jpg"));
    assert_eq!(c.output_dir, PathBuf::from("results"));
    assert_eq!(c.region, Region::default());
    assert_eq!(c.sweep.expected_angle_deg, 18.5);
    assert_eq!(c.sweep.half_range_deg, 10.0);
    assert_eq!(c.sweep.step_deg, 0.1);
}

#[test]
fn test_partial_region_table() {
    let text = r#"
base = "a.jpg"
reference = "b.jpg"

[region]
u_min = 0
u_max = 99
"#;
    let c: RegistrationConfig = toml::from_str(text).unwrap();
    assert_eq!(c.region, Region::new(0, 1425, 99, 1614));
}

#[test]
fn test_missing_images_is_an_error() {
    let result: Result<RegistrationConfig, _> = toml::from_str("output_dir = \"out\"\n");
    assert!(result.is_err());
}

#[test]
fn test_sweep_config_json() {
    let json = serde_json::to_string(&SweepConfig::default()).unwrap();
    let back: SweepConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SweepConfig::default());
}
