// 목적:
// - 디스크립터 어댑터의 표준 오류 타입을 정의한다.
//
// 설명:
// - 타입 불일치/형상 불일치/텍스트 파싱/설정 오류를 명시적으로 구분해
//   어휘 트리(collaborator)와 Python 계층에 전달한다.
//
// 디자인 패턴:
// - 도메인 오류 열거형(Domain Error Enum).
//
// 참조:
// - src_rs/descriptor/metric.rs
// - src_rs/descriptor/matrix.rs
// - src_rs/descriptor/text.rs

use thiserror::Error;

use crate::descriptor::types::ElementType;

/// 디스크립터 연산에서 공통으로 사용하는 오류 열거형이다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DescriptorError {
    #[error("디스크립터 원소 타입이 일치하지 않습니다: left={left}, right={right}")]
    TypeMismatch {
        left: ElementType,
        right: ElementType,
    },
    #[error("디스크립터 형상이 일치하지 않습니다 ({context}): expected={expected}, actual={actual}")]
    ShapeMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },
    #[error("디스크립터 텍스트 토큰을 해석할 수 없습니다: position={position}, token={token}")]
    MalformedText { position: usize, token: String },
    #[error("설정값이 유효하지 않습니다: {0}")]
    InvalidConfig(String),
    #[error("런타임 처리 중 오류가 발생했습니다: {0}")]
    Runtime(String),
}

impl DescriptorError {
    pub(crate) fn shape(context: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }
}

pub type DescriptorResult<T> = Result<T, DescriptorError>;
