// 목적:
// - 디스크립터 연산이 공유하는 수치 커널 모듈을 선언한다.
//
// 설명:
// - 거리/중심 계산의 내부 루프를 힙 할당 없이 슬라이스 단위로 처리한다.
//
// 디자인 패턴:
// - 순수 함수 모듈(Pure Function Module).
//
// 참조:
// - src_rs/descriptor/metric.rs
// - src_rs/descriptor/centroid.rs

pub mod linalg;
