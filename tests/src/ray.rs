#[cfg(test)]
mod tests {
    use varjo::math::{Point3, Ray, Vec3};

    #[test]
    fn new() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.o, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(r.d, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn point() {
        let r = Ray::new(Point3::new(1.0, 2.0, 3.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(r.point(0.0), r.o);
        assert_eq!(r.point(2.5), Point3::new(1.0, 4.5, 3.0));
        assert_eq!(r.point(-1.0), Point3::new(1.0, 1.0, 3.0));
    }
}
