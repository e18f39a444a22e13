// 목적:
// - 디스크립터 타입 계약(거리/중심/행렬/텍스트) 모듈을 선언한다.
//
// 설명:
// - 각 연산은 상태 없는 순수 함수이며 디스크립터 길이를 명시 인자로 받는다.
// - 어휘 트리 collaborator는 core::adapter를 통하거나 이 함수들을 직접 호출한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/core/adapter.rs

pub mod centroid;
pub mod matrix;
pub mod metric;
pub mod text;
pub mod types;

pub use centroid::mean_value;
pub use matrix::{from_matrix, to_matrix, to_packed_matrix};
pub use metric::{distance, distance_lenient, DistanceMeasure};
pub use text::{from_text, from_text_as, from_text_strict, to_text};
pub use types::{Descriptor, DescriptorMatrix, ElementType};
