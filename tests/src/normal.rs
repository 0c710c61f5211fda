#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use varjo::math::{Normal, Vec3};

    #[test]
    fn new() {
        let n = Normal::new(0.0, 1.0, 2.0);
        assert_eq!(n.z, 2.0);
        assert_eq!(Normal::from(Vec3::new(0.0, 1.0, 2.0)), n);
    }

    #[test]
    fn len() {
        let n = Normal::new(2.0, 3.0, 6.0);
        assert_eq!(n.len_sqr(), 49.0);
        assert_eq!(n.len(), 7.0);
        assert_abs_diff_eq!(n.normalized().len(), 1.0);
    }

    #[test]
    fn dot() {
        let n = Normal::new(1.0, 2.0, 3.0);
        assert_eq!(n.dot_v(Vec3::new(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(n.dot(Normal::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn neg() {
        assert_eq!(-Normal::new(1.0, -2.0, 3.0), Normal::new(-1.0, 2.0, -3.0));
    }
}
