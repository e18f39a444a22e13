/// 두 슬라이스의 원소별 차이 제곱합을 f64로 누적한다.
///
/// 길이가 다르면 짧은 쪽까지만 계산한다. 호출 측에서 길이를 먼저 검증한다.
pub fn squared_l2_distance<A, B>(left: &[A], right: &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    left.iter()
        .zip(right.iter())
        .map(|(&l, &r)| {
            let (l, r): (f64, f64) = (l.into(), r.into());
            (l - r) * (l - r)
        })
        .sum::<f64>()
}

pub fn l2_distance<A, B>(left: &[A], right: &[B]) -> f64
where
    A: Copy + Into<f64>,
    B: Copy + Into<f64>,
{
    squared_l2_distance(left, right).sqrt()
}

pub fn accumulate_in_place<T>(acc: &mut [f32], values: &[T])
where
    T: Copy + Into<f32>,
{
    for (dst, &src) in acc.iter_mut().zip(values.iter()) {
        let value: f32 = src.into();
        *dst += value;
    }
}

pub fn divide_in_place(values: &mut [f32], divisor: f32) {
    for value in values.iter_mut() {
        *value /= divisor;
    }
}
