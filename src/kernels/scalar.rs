//! Scalar reference kernels.

pub fn add_vec_scalar(a: &[i16], b: &[i16], c: &mut [i16], n: usize) {
    for ((c, &a), &b) in c[..n].iter_mut().zip(&a[..n]).zip(&b[..n]) {
        *c = a.wrapping_add(b);
    }
}

pub fn vec_sum_scalar(a: &[i16], n: usize) -> i32 {
    a[..n].iter().fold(0i32, |sum, &x| sum.wrapping_add(i32::from(x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_wraps() {
        let a = [i16::MAX, 1, -4];
        let b = [1, 2, 4];
        let mut c = [0i16; 3];
        add_vec_scalar(&a, &b, &mut c, 3);
        assert_eq!(c, [i16::MIN, 3, 0]);
    }

    #[test]
    fn test_add_respects_n() {
        let mut c = [9i16; 3];
        add_vec_scalar(&[1, 1, 1], &[1, 1, 1], &mut c, 2);
        assert_eq!(c, [2, 2, 9]);
    }

    #[test]
    fn test_sum_widens() {
        assert_eq!(vec_sum_scalar(&[i16::MAX, i16::MAX], 2), 2 * i32::from(i16::MAX));
        assert_eq!(vec_sum_scalar(&[-3, 5, 100], 2), 2);
        assert_eq!(vec_sum_scalar(&[], 0), 0);
    }
}
