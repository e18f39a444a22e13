use rstest::rstest;

use _vtree_descriptor::descriptor::{from_text, from_text_as, from_text_strict, to_text};
use _vtree_descriptor::{Descriptor, DescriptorError, ElementType};

use crate::f32_descriptor;

#[test]
fn text_is_space_separated_with_trailing_delimiter() {
    assert_eq!(to_text(&f32_descriptor(&[1.0, 0.5, -2.25])), "1 0.5 -2.25 ");
    assert_eq!(to_text(&Descriptor::U8(vec![3, 200])), "3 200 ");
    assert_eq!(to_text(&Descriptor::empty()), "");
}

#[rstest]
#[case(&[0.1, -3.7, 1e-7, 42.0])]
#[case(&[f32::MAX, f32::MIN_POSITIVE, -f32::EPSILON, 123456.78])]
#[case(&[1.0 / 3.0, 2.0 / 3.0, 0.0, -1.0])]
fn text_round_trip_is_exact(#[case] values: &[f32]) {
    let descriptor = f32_descriptor(values);
    assert_eq!(from_text(&to_text(&descriptor), 4), descriptor);
    assert_eq!(from_text_strict(&to_text(&descriptor), 4), Ok(descriptor));
}

#[test]
fn malformed_token_keeps_default_without_shifting() {
    assert_eq!(
        from_text("1.0 bogus 3.0", 3),
        f32_descriptor(&[1.0, 0.0, 3.0])
    );
}

#[rstest]
#[case("1 2", &[1.0, 2.0, 0.0, 0.0])]
#[case("", &[0.0, 0.0, 0.0, 0.0])]
#[case("  4\t5\n6 7 8 9", &[4.0, 5.0, 6.0, 7.0])]
#[case("x y z w", &[0.0, 0.0, 0.0, 0.0])]
fn lenient_parse_fills_fixed_length(#[case] text: &str, #[case] expected: &[f32]) {
    assert_eq!(from_text(text, 4), f32_descriptor(expected));
}

#[test]
fn strict_parse_reports_bad_token() {
    assert_eq!(
        from_text_strict("1.0 bogus 3.0", 3),
        Err(DescriptorError::MalformedText {
            position: 1,
            token: "bogus".to_string(),
        })
    );
}

#[test]
fn strict_parse_requires_exact_token_count() {
    assert!(matches!(
        from_text_strict("1 2", 3),
        Err(DescriptorError::ShapeMismatch {
            expected: 3,
            actual: 2,
            ..
        })
    ));
}

#[test]
fn byte_descriptor_text_round_trip() {
    let descriptor = Descriptor::U8(vec![0, 17, 128, 255]);
    let text = to_text(&descriptor);
    assert_eq!(text, "0 17 128 255 ");
    assert_eq!(from_text_as(&text, 4, ElementType::U8), descriptor);
}

#[test]
fn byte_text_parse_is_lenient_per_token() {
    assert_eq!(
        from_text_as("9 300 -1 x 7", 4, ElementType::U8),
        Descriptor::U8(vec![9, 0, 0, 0])
    );
    assert_eq!(
        from_text_as("1.5 bogus 3", 3, ElementType::F32),
        f32_descriptor(&[1.5, 0.0, 3.0])
    );
}
