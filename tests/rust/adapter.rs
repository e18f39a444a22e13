use rstest::{fixture, rstest};

use _vtree_descriptor::{
    Descriptor, DescriptorAdapter, DescriptorConfig, FloatDescriptorAdapter, DESCRIPTOR_LEN,
};

use crate::f32_descriptor;

#[fixture]
fn adapter() -> Box<dyn DescriptorAdapter> {
    let config = DescriptorConfig {
        descriptor_len: 4,
        packed_row_bytes: 16,
    };
    Box::new(FloatDescriptorAdapter::new(config).expect("valid config"))
}

#[rstest]
fn unit_vector_scenario(adapter: Box<dyn DescriptorAdapter>) {
    let d1 = f32_descriptor(&[1.0, 0.0, 0.0, 0.0]);
    let d2 = f32_descriptor(&[0.0, 1.0, 0.0, 0.0]);

    assert_eq!(adapter.descriptor_len(), 4);
    assert_eq!(adapter.distance(&d1, &d2), Ok(1));
    assert_eq!(
        adapter.mean_value(&[&d1, &d2]),
        f32_descriptor(&[0.5, 0.5, 0.0, 0.0])
    );
}

#[rstest]
fn adapter_uses_configured_shapes(adapter: Box<dyn DescriptorAdapter>) {
    assert_eq!(
        adapter.from_text("1.0 bogus 3.0"),
        f32_descriptor(&[1.0, 0.0, 3.0, 0.0])
    );
    assert!(adapter.from_text_strict("1 2 3").is_err());

    let descriptors = vec![f32_descriptor(&[1.0, 2.0, 3.0, 4.0])];
    let matrix = adapter.to_matrix(&descriptors).expect("4 columns");
    assert_eq!(matrix.shape(), (1, 4));
    assert_eq!(adapter.from_matrix(&matrix), Ok(descriptors.clone()));

    let packed = adapter.to_packed_matrix(&descriptors).expect("4 floats are 16 bytes");
    assert_eq!(packed.shape(), (1, 16));
}

#[rstest]
fn adapter_text_round_trip(adapter: Box<dyn DescriptorAdapter>) {
    let descriptor = f32_descriptor(&[0.75, -12.5, 3e-3, 8.0]);
    assert_eq!(adapter.from_text(&adapter.to_text(&descriptor)), descriptor);
}

#[rstest]
fn adapter_lenient_distance(adapter: Box<dyn DescriptorAdapter>) {
    let a = f32_descriptor(&[0.0, 0.0, 0.0, 0.0]);
    let b = Descriptor::U8(vec![0, 0, 6, 8]);

    assert!(adapter.distance(&a, &b).is_err());
    let measure = adapter.distance_lenient(&a, &b).expect("same length");
    assert_eq!(measure.value, 10);
    assert!(measure.degraded);
}

#[test]
fn default_adapter_uses_full_descriptor_length() {
    let adapter = FloatDescriptorAdapter::default();
    assert_eq!(adapter.descriptor_len(), DESCRIPTOR_LEN);
    assert_eq!(adapter.from_text("").len(), DESCRIPTOR_LEN);
    assert_eq!(adapter.packed_row_bytes(), 32);
}
