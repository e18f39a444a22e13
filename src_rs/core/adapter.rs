// 목적:
// - 어휘 트리(collaborator)가 소비하는 디스크립터 어댑터 계약을 정의한다.
//
// 설명:
// - 트레이트는 거리/중심/행렬/텍스트 연산과 디스크립터 길이(L)를 노출한다.
// - FloatDescriptorAdapter는 설정된 L과 바이트 행 폭으로 descriptor 모듈 함수를 호출한다.
// - 어댑터는 불변 값이므로 스레드 간에 동기화 없이 공유할 수 있다.
//
// 디자인 패턴:
// - 어댑터(Adapter).
//
// 참조:
// - src_rs/descriptor/mod.rs
// - src_rs/core/config.rs

use crate::core::config::DescriptorConfig;
use crate::core::errors::DescriptorResult;
use crate::descriptor::{self, Descriptor, DescriptorMatrix, DistanceMeasure};

pub trait DescriptorAdapter: Send + Sync {
    fn descriptor_len(&self) -> usize;
    fn distance(&self, a: &Descriptor, b: &Descriptor) -> DescriptorResult<u32>;
    fn distance_lenient(&self, a: &Descriptor, b: &Descriptor)
        -> DescriptorResult<DistanceMeasure>;
    fn mean_value(&self, descriptors: &[&Descriptor]) -> Descriptor;
    fn to_matrix(&self, descriptors: &[Descriptor]) -> DescriptorResult<DescriptorMatrix<f32>>;
    fn from_matrix(&self, matrix: &DescriptorMatrix<f32>) -> DescriptorResult<Vec<Descriptor>>;
    fn to_packed_matrix(&self, descriptors: &[Descriptor])
        -> DescriptorResult<DescriptorMatrix<u8>>;
    fn to_text(&self, descriptor: &Descriptor) -> String;
    fn from_text(&self, text: &str) -> Descriptor;
    fn from_text_strict(&self, text: &str) -> DescriptorResult<Descriptor>;
}

/// f32 디스크립터 패밀리 어댑터.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatDescriptorAdapter {
    config: DescriptorConfig,
}

impl FloatDescriptorAdapter {
    pub fn new(config: DescriptorConfig) -> DescriptorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DescriptorConfig {
        &self.config
    }

    pub fn packed_row_bytes(&self) -> usize {
        self.config.packed_row_bytes
    }
}

impl DescriptorAdapter for FloatDescriptorAdapter {
    fn descriptor_len(&self) -> usize {
        self.config.descriptor_len
    }

    fn distance(&self, a: &Descriptor, b: &Descriptor) -> DescriptorResult<u32> {
        descriptor::distance(a, b)
    }

    fn distance_lenient(
        &self,
        a: &Descriptor,
        b: &Descriptor,
    ) -> DescriptorResult<DistanceMeasure> {
        descriptor::distance_lenient(a, b)
    }

    fn mean_value(&self, descriptors: &[&Descriptor]) -> Descriptor {
        descriptor::mean_value(descriptors, self.config.descriptor_len)
    }

    fn to_matrix(&self, descriptors: &[Descriptor]) -> DescriptorResult<DescriptorMatrix<f32>> {
        descriptor::to_matrix(descriptors, self.config.descriptor_len)
    }

    fn from_matrix(&self, matrix: &DescriptorMatrix<f32>) -> DescriptorResult<Vec<Descriptor>> {
        descriptor::from_matrix(matrix, self.config.descriptor_len)
    }

    fn to_packed_matrix(
        &self,
        descriptors: &[Descriptor],
    ) -> DescriptorResult<DescriptorMatrix<u8>> {
        descriptor::to_packed_matrix(descriptors, self.config.packed_row_bytes)
    }

    fn to_text(&self, descriptor: &Descriptor) -> String {
        descriptor::to_text(descriptor)
    }

    fn from_text(&self, text: &str) -> Descriptor {
        descriptor::from_text(text, self.config.descriptor_len)
    }

    fn from_text_strict(&self, text: &str) -> DescriptorResult<Descriptor> {
        descriptor::from_text_strict(text, self.config.descriptor_len)
    }
}
