use rstest::rstest;

use _vtree_descriptor::core::telemetry::init_tracing;
use _vtree_descriptor::{
    Descriptor, DescriptorConfig, DescriptorError, FloatDescriptorAdapter, DESCRIPTOR_LEN,
    PACKED_ROW_BYTES,
};

#[test]
fn default_config_matches_descriptor_family() {
    let config = DescriptorConfig::default();
    assert_eq!(config.descriptor_len, DESCRIPTOR_LEN);
    assert_eq!(config.packed_row_bytes, PACKED_ROW_BYTES);
    assert_eq!(DESCRIPTOR_LEN, 128);
    assert_eq!(PACKED_ROW_BYTES, 32);
}

#[rstest]
#[case("{}", 128, 32)]
#[case(r#"{"descriptor_len": 4}"#, 4, 32)]
#[case(r#"{"descriptor_len": 64, "packed_row_bytes": 16}"#, 64, 16)]
fn config_from_json_fills_defaults(
    #[case] payload: &str,
    #[case] descriptor_len: usize,
    #[case] packed_row_bytes: usize,
) {
    let config = DescriptorConfig::from_json(payload).expect("valid payload");
    assert_eq!(config.descriptor_len, descriptor_len);
    assert_eq!(config.packed_row_bytes, packed_row_bytes);
}

#[rstest]
#[case(r#"{"descriptor_len": 0}"#)]
#[case(r#"{"packed_row_bytes": 0}"#)]
#[case(r#"{"descriptor_len": "many"}"#)]
#[case("not json")]
fn invalid_config_is_rejected(#[case] payload: &str) {
    assert!(matches!(
        DescriptorConfig::from_json(payload),
        Err(DescriptorError::InvalidConfig(_))
    ));
}

#[test]
fn adapter_rejects_invalid_config() {
    let config = DescriptorConfig {
        descriptor_len: 0,
        packed_row_bytes: 32,
    };
    assert!(matches!(
        FloatDescriptorAdapter::new(config),
        Err(DescriptorError::InvalidConfig(_))
    ));
}

#[test]
fn descriptor_json_carries_element_type() {
    let json = serde_json::to_string(&Descriptor::U8(vec![1, 2])).expect("serializable");
    assert_eq!(json, r#"{"element_type":"u8","values":[1,2]}"#);

    let parsed: Descriptor =
        serde_json::from_str(r#"{"element_type":"f32","values":[0.5,1.0]}"#).expect("valid");
    assert_eq!(parsed, Descriptor::F32(vec![0.5, 1.0]));
}

#[test]
fn tracing_subscriber_installs_once() {
    let _ = init_tracing("debug");
    assert!(matches!(
        init_tracing("debug"),
        Err(DescriptorError::Runtime(_))
    ));
}
