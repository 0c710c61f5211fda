#[cfg(test)]
mod tests {
    use varjo::math::{point2, Point2, Point3, Vec3};

    // Test the Point specific methods and merely the existence of methods
    // shared with Vec since vector tests already cover those

    #[test]
    fn new() {
        let p = Point3::new(0.0, 1.0, 2.0);
        assert_eq!(p.z, 2.0);
        assert_eq!(Point3::zeros(), Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn dist() {
        let a = Point3::new(1.0, 1.0, 1.0);
        let b = Point3::new(3.0, 4.0, 7.0);
        assert_eq!(a.dist_sqr(b), 49.0);
        assert_eq!(a.dist(b), 7.0);
        assert_eq!(b.dist(a), 7.0);
    }

    #[test]
    fn point_vector_ops() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let v = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(p + v, Point3::new(5.0, 7.0, 9.0));
        assert_eq!(p - v, Point3::new(-3.0, -3.0, -3.0));
        assert_eq!(Point3::new(5.0, 7.0, 9.0) - p, v);

        let mut q = p;
        q += v;
        assert_eq!(q, Point3::new(5.0, 7.0, 9.0));
        q -= v;
        assert_eq!(q, p);
    }

    #[test]
    fn min_max() {
        let a = Point3::new(1.0, 5.0, 3.0);
        let b = Point3::new(4.0, 2.0, 6.0);
        assert_eq!(a.min(b), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(a.max(b), Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn index() {
        let p = Point3::new(0.0, 1.0, 2.0);
        assert_eq!(p[0], 0.0);
        assert_eq!(p[1], 1.0);
        assert_eq!(p[2], 2.0);
    }

    // Raster coordinates instantiate the 2d point over an integer type
    #[test]
    fn integer_point2() {
        let p: Point2<u32> = point2(3, 5);
        assert_eq!(p.x, 3);
        assert_eq!(p[1], 5);
        assert_eq!(p.min(point2(4, 2)), point2(3, 2));
        assert_eq!(p.max(point2(4, 2)), point2(4, 5));
    }
}
