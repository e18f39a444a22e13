#![allow(non_local_definitions)]

// 목적:
// - Vtree 어휘 트리가 사용하는 f32 디스크립터 어댑터 크레이트의 진입점을 제공한다.
//
// 설명:
// - 거리/중심/행렬 변환/텍스트 왕복 연산을 descriptor 모듈에 두고,
//   collaborator용 어댑터 트레이트를 core 모듈에 둔다.
// - `python` 기능이 켜지면 동일 연산을 Python 확장 모듈로 노출한다.
//
// 디자인 패턴:
// - 계층형 모듈 구조(api/core/descriptor/math).
//
// 참조:
// - src_rs/core/adapter.rs
// - src_rs/api/descriptor_bridge.rs

#[cfg(feature = "python")]
pub mod api;
pub mod core;
pub mod descriptor;
pub mod math;

pub use crate::core::adapter::{DescriptorAdapter, FloatDescriptorAdapter};
pub use crate::core::config::{DescriptorConfig, DESCRIPTOR_LEN, PACKED_ROW_BYTES};
pub use crate::core::errors::{DescriptorError, DescriptorResult};
pub use crate::descriptor::{Descriptor, DescriptorMatrix, DistanceMeasure, ElementType};

#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyModule;

#[cfg(feature = "python")]
#[pymodule]
fn _vtree_descriptor(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<api::descriptor_bridge::PyDescriptorBridge>()?;
    m.add("DESCRIPTOR_LEN", DESCRIPTOR_LEN)?;
    m.add("PACKED_ROW_BYTES", PACKED_ROW_BYTES)?;
    Ok(())
}
