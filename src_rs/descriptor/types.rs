// 목적:
// - 디스크립터와 디스크립터 행렬 타입을 정의한다.
//
// 설명:
// - 디스크립터는 원소 타입 태그(f32/u8)를 가진 고정 길이 벡터다.
// - 길이 0인 디스크립터는 "미설정" 상태로, 0으로 채운 벡터와 구분된다.
// - 행렬은 행 우선(row-major) 밀집 버퍼이며 수신한 호출자가 소유한다.
//
// 디자인 패턴:
// - 태그드 유니온(Tagged Union).
//
// 참조:
// - src_rs/descriptor/metric.rs
// - src_rs/descriptor/matrix.rs

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    F32,
    U8,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::F32 => f.write_str("f32"),
            ElementType::U8 => f.write_str("u8"),
        }
    }
}

/// 이미지 키포인트 하나를 표현하는 고정 길이 특징 벡터다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "element_type", content = "values", rename_all = "snake_case")]
pub enum Descriptor {
    F32(Vec<f32>),
    U8(Vec<u8>),
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<f32>> for Descriptor {
    fn from(values: Vec<f32>) -> Self {
        Self::F32(values)
    }
}

impl From<Vec<u8>> for Descriptor {
    fn from(values: Vec<u8>) -> Self {
        Self::U8(values)
    }
}

impl Descriptor {
    /// 미설정(해제) 상태의 디스크립터를 만든다.
    pub fn empty() -> Self {
        Self::F32(Vec::new())
    }

    pub fn zeros(len: usize) -> Self {
        Self::F32(vec![0.0; len])
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Descriptor::F32(_) => ElementType::F32,
            Descriptor::U8(_) => ElementType::U8,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Descriptor::F32(values) => values.len(),
            Descriptor::U8(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Descriptor::F32(values) => Some(values),
            Descriptor::U8(_) => None,
        }
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            Descriptor::U8(values) => Some(values),
            Descriptor::F32(_) => None,
        }
    }

    /// 원소 타입과 무관하게 f32 벡터로 변환한 사본을 반환한다.
    pub fn to_f32_vec(&self) -> Vec<f32> {
        match self {
            Descriptor::F32(values) => values.clone(),
            Descriptor::U8(values) => values.iter().map(|&value| f32::from(value)).collect(),
        }
    }

    /// 메모리 표현 그대로의 원시 바이트 길이.
    pub fn byte_len(&self) -> usize {
        match self {
            Descriptor::F32(values) => values.len() * std::mem::size_of::<f32>(),
            Descriptor::U8(values) => values.len(),
        }
    }

    /// 원시 바이트를 `dst`에 그대로 복사한다. `dst` 길이는 `byte_len()`과 같아야 한다.
    pub(crate) fn copy_raw_bytes(&self, dst: &mut [u8]) {
        match self {
            Descriptor::U8(values) => dst.copy_from_slice(values),
            Descriptor::F32(values) => {
                for (chunk, value) in dst
                    .chunks_exact_mut(std::mem::size_of::<f32>())
                    .zip(values.iter())
                {
                    chunk.copy_from_slice(&value.to_ne_bytes());
                }
            }
        }
    }
}

/// 행 우선 밀집 행렬. 빈 행렬은 0x0 형상을 가진다.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Default for DescriptorMatrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> DescriptorMatrix<T> {
    pub fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(rows * cols, data.len());
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[T]> {
        if index >= self.rows {
            return None;
        }
        let start = index * self.cols;
        self.data.get(start..start + self.cols)
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        // cols가 0이면 chunks_exact가 패닉하므로 빈 행렬은 따로 처리한다.
        let width = self.cols.max(1);
        self.data.chunks_exact(width).take(self.rows)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// 외부 버퍼에서 행렬을 만든다. `data.len()`이 `rows * cols`가 아니면 None.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        if data.is_empty() {
            return Some(Self::empty());
        }
        Some(Self { rows, cols, data })
    }
}
