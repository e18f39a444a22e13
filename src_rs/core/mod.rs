// 목적:
// - 어댑터 계약과 공통 기반(오류/설정/관측) 모듈을 선언한다.
//
// 설명:
// - 어휘 트리가 소비하는 어댑터 트레이트와 그 주변 관심사를 분리해 유지보수성을 높인다.
//
// 디자인 패턴:
// - 명시적 오류 모델(Explicit Error Model).
//
// 참조:
// - src_rs/core/errors.rs
// - src_rs/core/adapter.rs

pub mod adapter;
pub mod config;
pub mod errors;
pub mod telemetry;
