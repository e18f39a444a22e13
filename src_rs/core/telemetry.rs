// 목적:
// - 호스트 프로세스용 tracing 구독자 설치 함수를 제공한다.
//
// 설명:
// - 라이브러리 코드는 tracing 이벤트만 내보내고 구독자를 직접 설치하지 않는다.
// - RUST_LOG가 있으면 우선하고, 없으면 전달받은 기본 지시문을 사용한다.
//
// 디자인 패턴:
// - 주입형 관측 훅(Injected Observability Hook).
//
// 참조:
// - src_rs/api/descriptor_bridge.rs

use tracing_subscriber::EnvFilter;

use crate::core::errors::{DescriptorError, DescriptorResult};

/// fmt 구독자를 전역 기본값으로 설치한다.
pub fn init_tracing(default_directive: &str) -> DescriptorResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive).map_err(|error| {
            DescriptorError::InvalidConfig(format!(
                "tracing 필터 지시문이 유효하지 않습니다: {}, directive={}",
                error, default_directive
            ))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|error| DescriptorError::Runtime(format!("tracing 구독자 설치 실패: {}", error)))
}
