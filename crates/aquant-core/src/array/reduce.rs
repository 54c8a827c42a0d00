//! Linear-scan reductions: extremes, sums, averages, membership.

/// Largest element, or `None` for an empty slice.
///
/// Uses `PartialOrd`; for floats a NaN never replaces the running maximum.
#[must_use]
pub fn max<T: PartialOrd + Copy>(arr: &[T]) -> Option<T> {
    let (&first, rest) = arr.split_first()?;
    Some(rest.iter().fold(first, |best, &x| if x > best { x } else { best }))
}

/// Smallest element, or `None` for an empty slice.
#[must_use]
pub fn min<T: PartialOrd + Copy>(arr: &[T]) -> Option<T> {
    let (&first, rest) = arr.split_first()?;
    Some(rest.iter().fold(first, |best, &x| if x < best { x } else { best }))
}

/// Sum of `i32` elements, accumulated in `i64`. Empty sums to 0.
#[must_use]
pub fn sum(arr: &[i32]) -> i64 {
    arr.iter().map(|&x| i64::from(x)).sum()
}

/// Sum of `f32` elements, accumulated in `f64`.
#[must_use]
pub fn sum_f32(arr: &[f32]) -> f64 {
    arr.iter().map(|&x| f64::from(x)).sum()
}

#[must_use]
pub fn sum_f64(arr: &[f64]) -> f64 {
    arr.iter().sum()
}

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
pub fn average(arr: &[i32]) -> Option<f64> {
    if arr.is_empty() {
        return None;
    }
    Some(sum(arr) as f64 / arr.len() as f64)
}

#[must_use]
pub fn average_f32(arr: &[f32]) -> Option<f64> {
    if arr.is_empty() {
        return None;
    }
    Some(sum_f32(arr) / arr.len() as f64)
}

#[must_use]
pub fn average_f64(arr: &[f64]) -> Option<f64> {
    if arr.is_empty() {
        return None;
    }
    Some(sum_f64(arr) / arr.len() as f64)
}

#[must_use]
pub fn contains<T: PartialEq>(arr: &[T], value: &T) -> bool {
    arr.contains(value)
}

/// Index of the first element equal to `value`.
#[must_use]
pub fn index_of<T: PartialEq>(arr: &[T], value: &T) -> Option<usize> {
    arr.iter().position(|x| x == value)
}

#[must_use]
pub fn count_occurrence<T: PartialEq>(arr: &[T], value: &T) -> usize {
    arr.iter().filter(|&x| x == value).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: [i32; 8] = [5, -2, 8, 0, 9, 1, 5, i32::MAX];

    #[test]
    fn extremes() {
        assert_eq!(max(&MIXED), Some(i32::MAX));
        assert_eq!(min(&MIXED), Some(-2));
        assert_eq!(max(&[-5, -10, -2]), Some(-2));
        assert_eq!(min(&[-5, -10, -2]), Some(-10));
        assert_eq!(max(&[42]), Some(42));
        assert_eq!(max::<i32>(&[]), None);
        assert_eq!(min::<i32>(&[]), None);
        assert_eq!(max(&[2.5f32, -1.0, 100.5]), Some(100.5));
    }

    #[test]
    fn sums_do_not_overflow() {
        assert_eq!(sum(&MIXED), 26 + i64::from(i32::MAX));
        assert_eq!(sum(&[i32::MIN, i32::MIN]), 2 * i64::from(i32::MIN));
        assert_eq!(sum(&[]), 0);
        assert!((sum_f32(&[1.5, -1.0, 0.25]) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn averages() {
        assert_eq!(average(&[42]), Some(42.0));
        assert_eq!(average(&[]), None);
        assert_eq!(average(&[1, 2, 3, 4]), Some(2.5));
        assert_eq!(average_f64(&[1.0, 2.0]), Some(1.5));
        assert_eq!(average_f32(&[]), None);
    }

    #[test]
    fn membership() {
        assert!(contains(&MIXED, &8));
        assert!(!contains(&MIXED, &100));
        assert_eq!(index_of(&MIXED, &8), Some(2));
        assert_eq!(index_of(&MIXED, &5), Some(0));
        assert_eq!(index_of(&MIXED, &100), None);
        assert_eq!(count_occurrence(&MIXED, &5), 2);
        assert_eq!(count_occurrence::<i32>(&[], &5), 0);
    }
}
