// 목적:
// - 디스크립터 간 거리(L2 노름)를 계산한다.
//
// 설명:
// - 정상 경로: 같은 원소 타입/길이의 두 디스크립터에 대해 sqrt(Σ(a_i - b_i)^2)를
//   0 방향으로 절삭한 정수를 반환한다.
// - 타입이 다르면 엄격 경로는 TypeMismatch를 반환한다.
// - 완화 경로는 두 피연산자를 f32로 변환해 계산하고 degraded 플래그와
//   warn 이벤트로 저하된 비교임을 알린다.
// - 어휘 트리 구축과 매칭의 가장 안쪽 루프이므로 호출당 힙 할당이 없다.
//
// 디자인 패턴:
// - 실패 빠르게(Fail Fast) + 명시적 폴백(Explicit Fallback).
//
// 참조:
// - src_rs/math/linalg.rs
// - src_rs/core/errors.rs

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::errors::{DescriptorError, DescriptorResult};
use crate::descriptor::types::Descriptor;
use crate::math::linalg;

/// 완화 경로의 거리 결과. `degraded`가 true면 타입 변환을 거친 값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMeasure {
    pub value: u32,
    pub degraded: bool,
}

/// 두 디스크립터의 L2 거리를 정수로 반환한다.
pub fn distance(a: &Descriptor, b: &Descriptor) -> DescriptorResult<u32> {
    ensure_same_len(a, b)?;

    match (a, b) {
        (Descriptor::F32(left), Descriptor::F32(right)) => {
            Ok(truncate_distance(linalg::l2_distance(left, right)))
        }
        (Descriptor::U8(left), Descriptor::U8(right)) => {
            Ok(truncate_distance(linalg::l2_distance(left, right)))
        }
        _ => Err(DescriptorError::TypeMismatch {
            left: a.element_type(),
            right: b.element_type(),
        }),
    }
}

/// 타입 불일치 시 f32 변환 후 거리를 계산한다. 길이 불일치는 여전히 오류다.
pub fn distance_lenient(a: &Descriptor, b: &Descriptor) -> DescriptorResult<DistanceMeasure> {
    match distance(a, b) {
        Ok(value) => Ok(DistanceMeasure {
            value,
            degraded: false,
        }),
        Err(DescriptorError::TypeMismatch { left, right }) => {
            let value = converted_distance(a, b);
            warn!(
                left = %left,
                right = %right,
                distance = value,
                "디스크립터 타입 불일치: f32 변환 후 거리를 계산했습니다"
            );
            Ok(DistanceMeasure {
                value,
                degraded: true,
            })
        }
        Err(error) => Err(error),
    }
}

fn converted_distance(a: &Descriptor, b: &Descriptor) -> u32 {
    // u8 -> f32 -> f64 변환은 무손실이므로 원소 단위로 바로 누적한다.
    let squared = match (a, b) {
        (Descriptor::F32(left), Descriptor::U8(right)) => linalg::squared_l2_distance(left, right),
        (Descriptor::U8(left), Descriptor::F32(right)) => linalg::squared_l2_distance(left, right),
        (Descriptor::F32(left), Descriptor::F32(right)) => linalg::squared_l2_distance(left, right),
        (Descriptor::U8(left), Descriptor::U8(right)) => linalg::squared_l2_distance(left, right),
    };
    truncate_distance(squared.sqrt())
}

fn ensure_same_len(a: &Descriptor, b: &Descriptor) -> DescriptorResult<()> {
    if a.len() != b.len() {
        return Err(DescriptorError::shape("distance", a.len(), b.len()));
    }
    Ok(())
}

// NaN은 0, 범위를 넘는 값은 u32::MAX로 포화된다.
fn truncate_distance(value: f64) -> u32 {
    value as u32
}
