// 목적:
// - 디스크립터 컬렉션과 밀집 행렬 사이의 일괄 변환을 제공한다.
//
// 설명:
// - f32 행렬: 행 i = 디스크립터 i, 열 수 = L.
// - 바이트 행렬: 디스크립터의 원시 바이트를 고정 행 폭으로 그대로 복사한다.
//   수치 변환은 하지 않는다.
// - 모든 행을 먼저 검증한 뒤 할당하므로 실패 시 부분 출력이 없다.
//
// 디자인 패턴:
// - 검증 후 기록(Validate-then-Write).
//
// 참조:
// - src_rs/descriptor/types.rs
// - src_rs/api/descriptor_bridge.rs

use tracing::debug;

use crate::core::errors::{DescriptorError, DescriptorResult};
use crate::descriptor::types::{Descriptor, DescriptorMatrix, ElementType};

/// 디스크립터 컬렉션을 N x L f32 행렬로 변환한다.
pub fn to_matrix(
    descriptors: &[Descriptor],
    descriptor_len: usize,
) -> DescriptorResult<DescriptorMatrix<f32>> {
    ensure_positive_width("descriptor_len", descriptor_len)?;
    if descriptors.is_empty() {
        return Ok(DescriptorMatrix::empty());
    }

    for (row, descriptor) in descriptors.iter().enumerate() {
        if descriptor.element_type() != ElementType::F32 {
            return Err(DescriptorError::TypeMismatch {
                left: ElementType::F32,
                right: descriptor.element_type(),
            });
        }
        if descriptor.len() != descriptor_len {
            return Err(DescriptorError::shape(
                format!("to_matrix row={}", row),
                descriptor_len,
                descriptor.len(),
            ));
        }
    }

    let mut data = Vec::with_capacity(descriptors.len() * descriptor_len);
    for descriptor in descriptors {
        if let Some(values) = descriptor.as_f32() {
            data.extend_from_slice(values);
        }
    }

    debug!(rows = descriptors.len(), cols = descriptor_len, "f32 디스크립터 행렬 생성");
    Ok(DescriptorMatrix::from_parts(
        descriptors.len(),
        descriptor_len,
        data,
    ))
}

/// N x L f32 행렬을 디스크립터 컬렉션으로 되돌린다.
pub fn from_matrix(
    matrix: &DescriptorMatrix<f32>,
    descriptor_len: usize,
) -> DescriptorResult<Vec<Descriptor>> {
    if matrix.is_empty() {
        return Ok(Vec::new());
    }

    if matrix.cols() != descriptor_len {
        return Err(DescriptorError::shape(
            "from_matrix cols",
            descriptor_len,
            matrix.cols(),
        ));
    }

    Ok(matrix
        .iter_rows()
        .map(|row| Descriptor::F32(row.to_vec()))
        .collect())
}

/// 디스크립터의 원시 바이트를 N x `row_bytes` 바이트 행렬로 복사한다.
pub fn to_packed_matrix(
    descriptors: &[Descriptor],
    row_bytes: usize,
) -> DescriptorResult<DescriptorMatrix<u8>> {
    ensure_positive_width("row_bytes", row_bytes)?;
    if descriptors.is_empty() {
        return Ok(DescriptorMatrix::empty());
    }

    for (row, descriptor) in descriptors.iter().enumerate() {
        if descriptor.byte_len() != row_bytes {
            return Err(DescriptorError::shape(
                format!("to_packed_matrix row={} bytes", row),
                row_bytes,
                descriptor.byte_len(),
            ));
        }
    }

    let mut data = vec![0u8; descriptors.len() * row_bytes];
    for (dst, descriptor) in data.chunks_exact_mut(row_bytes).zip(descriptors.iter()) {
        descriptor.copy_raw_bytes(dst);
    }

    debug!(rows = descriptors.len(), cols = row_bytes, "바이트 디스크립터 행렬 생성");
    Ok(DescriptorMatrix::from_parts(descriptors.len(), row_bytes, data))
}

fn ensure_positive_width(field_name: &str, width: usize) -> DescriptorResult<()> {
    if width == 0 {
        return Err(DescriptorError::InvalidConfig(format!(
            "{}는 1 이상이어야 합니다",
            field_name
        )));
    }
    Ok(())
}
