// 목적:
// - Python FFI 경계 모듈을 선언한다.
//
// 설명:
// - `python` 기능이 켜졌을 때만 컴파일되며, 디스크립터 어댑터를 한 클래스로 노출한다.
//
// 디자인 패턴:
// - 모듈 분리(Module Separation).
//
// 참조:
// - src_rs/api/descriptor_bridge.rs

pub mod descriptor_bridge;
