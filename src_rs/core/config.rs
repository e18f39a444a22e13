// 목적:
// - 디스크립터 패밀리의 형상 설정을 정의한다.
//
// 설명:
// - 디스크립터 길이(L)와 바이트 밀집 행 폭을 JSON 페이로드로 받아 검증한다.
// - 누락된 필드는 기본값(L=128, 32바이트)으로 채운다.
//
// 디자인 패턴:
// - 설정 페이로드(Config Payload) + 실패 빠르게(Fail Fast).
//
// 참조:
// - src_rs/core/adapter.rs
// - src_rs/api/descriptor_bridge.rs

use serde::{Deserialize, Serialize};

use crate::core::errors::{DescriptorError, DescriptorResult};

/// 디스크립터 길이(L). 어휘 트리가 디스크립터 버퍼 크기를 잡을 때 사용한다.
pub const DESCRIPTOR_LEN: usize = 128;
/// 바이트 밀집 행렬의 고정 행 폭(바이트).
pub const PACKED_ROW_BYTES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorConfig {
    pub descriptor_len: usize,
    pub packed_row_bytes: usize,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            descriptor_len: DESCRIPTOR_LEN,
            packed_row_bytes: PACKED_ROW_BYTES,
        }
    }
}

impl DescriptorConfig {
    /// JSON 문자열에서 설정을 읽고 검증한다.
    pub fn from_json(payload_json: &str) -> DescriptorResult<Self> {
        let config: Self = serde_json::from_str(payload_json).map_err(|error| {
            DescriptorError::InvalidConfig(format!("설정 JSON 파싱에 실패했습니다: {}", error))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DescriptorResult<()> {
        if self.descriptor_len == 0 {
            return Err(DescriptorError::InvalidConfig(
                "descriptor_len은 1 이상이어야 합니다".to_string(),
            ));
        }

        if self.packed_row_bytes == 0 {
            return Err(DescriptorError::InvalidConfig(
                "packed_row_bytes는 1 이상이어야 합니다".to_string(),
            ));
        }

        Ok(())
    }
}
