// 목적:
// - 디스크립터 군집의 중심(원소별 평균)을 계산한다.
//
// 설명:
// - 빈 군집은 미설정 디스크립터, 단일 원소는 산술 없이 사본을 반환한다.
// - 2개 이상이면 길이 L 누산기에 원소별 합을 더한 뒤 N으로 나눈다.
// - 결과 원소 타입은 군집 크기와 무관하다. 전부 u8인 군집은 평균을 반올림한
//   u8 디스크립터, 그 외(f32 또는 혼합)는 f32 디스크립터를 반환한다.
// - 입력 형상은 재검증하지 않지만, 짧은 입력은 모자란 원소만 기여하지 않을 뿐
//   패닉하지 않는다.
//
// 디자인 패턴:
// - 순수 함수(Pure Function).
//
// 참조:
// - src_rs/math/linalg.rs

use crate::descriptor::types::{Descriptor, ElementType};
use crate::math::linalg;

/// 디스크립터 군집의 중심을 반환한다. 결과는 입력과 메모리를 공유하지 않는다.
pub fn mean_value(descriptors: &[&Descriptor], descriptor_len: usize) -> Descriptor {
    match descriptors {
        [] => Descriptor::empty(),
        [single] => (*single).clone(),
        _ => {
            let mut mean = vec![0.0f32; descriptor_len];
            for descriptor in descriptors {
                match descriptor {
                    Descriptor::F32(values) => linalg::accumulate_in_place(&mut mean, values),
                    Descriptor::U8(values) => linalg::accumulate_in_place(&mut mean, values),
                }
            }
            linalg::divide_in_place(&mut mean, descriptors.len() as f32);

            let all_bytes = descriptors
                .iter()
                .all(|descriptor| descriptor.element_type() == ElementType::U8);
            if all_bytes {
                // u8 평균은 [0, 255] 안에 있으므로 반올림만으로 좁힐 수 있다.
                Descriptor::U8(mean.iter().map(|&value| value.round() as u8).collect())
            } else {
                Descriptor::F32(mean)
            }
        }
    }
}
