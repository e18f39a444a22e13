// 목적:
// - 디스크립터의 텍스트 표현(공백 구분 실수 토큰)을 제공한다.
//
// 설명:
// - to_text: 각 원소 뒤에 공백 하나를 붙인다(마지막 구분자 포함).
//   f32 Display는 같은 값으로 되읽히는 최단 표현을 쓰므로 왕복이 정확하다.
// - from_text: 최대 L개 토큰을 토큰 단위 best-effort로 읽는다.
//   해석 실패 토큰은 해당 슬롯을 0으로 두고 이후 토큰 위치를 밀지 않는다.
//   토큰이 모자라면 남은 슬롯은 0, 넘치면 무시한다.
// - from_text_as: 같은 규칙으로 지정한 원소 타입(f32/u8)의 디스크립터를 만든다.
// - from_text_strict: 전부 아니면 실패(all-or-nothing) 파서.
//
// 디자인 패턴:
// - 호환 모드 + 엄격 모드 병행(Lenient/Strict Pair).
//
// 참조:
// - src_rs/core/errors.rs

use tracing::trace;

use crate::core::errors::{DescriptorError, DescriptorResult};
use crate::descriptor::types::{Descriptor, ElementType};

pub fn to_text(descriptor: &Descriptor) -> String {
    let text: String = match descriptor {
        Descriptor::F32(values) => values.iter().map(|value| format!("{} ", value)).collect(),
        Descriptor::U8(values) => values.iter().map(|value| format!("{} ", value)).collect(),
    };
    trace!(len = descriptor.len(), "디스크립터 텍스트 변환");
    text
}

/// 토큰 단위 best-effort 파서. 항상 길이 `descriptor_len`의 f32 디스크립터를 반환한다.
pub fn from_text(text: &str, descriptor_len: usize) -> Descriptor {
    from_text_as(text, descriptor_len, ElementType::F32)
}

/// `from_text`와 같은 best-effort 규칙으로 `element_type` 디스크립터를 만든다.
pub fn from_text_as(text: &str, descriptor_len: usize, element_type: ElementType) -> Descriptor {
    trace!(len = descriptor_len, %element_type, "텍스트 디스크립터 해석");
    match element_type {
        ElementType::F32 => Descriptor::F32(parse_lenient(text, descriptor_len)),
        ElementType::U8 => Descriptor::U8(parse_lenient(text, descriptor_len)),
    }
}

fn parse_lenient<T>(text: &str, descriptor_len: usize) -> Vec<T>
where
    T: Default + Clone + std::str::FromStr,
{
    let mut values = vec![T::default(); descriptor_len];
    for (slot, token) in values.iter_mut().zip(text.split_whitespace()) {
        if let Ok(parsed) = token.parse::<T>() {
            *slot = parsed;
        }
    }
    values
}

pub fn from_text_strict(text: &str, descriptor_len: usize) -> DescriptorResult<Descriptor> {
    let tokens = text.split_whitespace().collect::<Vec<_>>();
    if tokens.len() != descriptor_len {
        return Err(DescriptorError::shape(
            "from_text_strict tokens",
            descriptor_len,
            tokens.len(),
        ));
    }

    let values = tokens
        .iter()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<f32>()
                .map_err(|_| DescriptorError::MalformedText {
                    position,
                    token: token.to_string(),
                })
        })
        .collect::<DescriptorResult<Vec<_>>>()?;

    Ok(Descriptor::F32(values))
}
