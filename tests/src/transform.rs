#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use varjo::math::{
        transforms::{look_at, rotation_x, rotation_z, scale, translation},
        Matrix4x4, Normal, Point3, Ray, Transform, Vec3,
    };

    // These are by no means exhaustive. We throw some simple cases at the
    // implementation to catch obvious typos

    #[test]
    fn new() {
        let md = [
            [2.0, 0.0, 0.0, 1.0],
            [0.0, 3.0, 0.0, 2.0],
            [1.0, 0.0, 4.0, 3.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let m = Matrix4x4::new(md);
        let mi = m.inverted();

        let t0 = Transform::new(md);
        let t1 = Transform::new_m(m);
        let t2 = Transform::new_full(m, mi);
        assert_eq!(t0.m(), &m);
        assert_eq!(t0.m_inv(), &mi);
        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn default() {
        let t = Transform::<f64>::default();
        assert!(t.is_identity());
    }

    #[test]
    fn inverted() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        let ti = t.inverted();
        assert_eq!(t.m(), ti.m_inv());
        assert_eq!(t.m_inv(), ti.m());
    }

    #[test]
    fn translation_point() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(&t * Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 3.0, 4.0));
        // Vectors don't see translation
        assert_eq!(&t * Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn scale_point() {
        let t = scale(2.0, 3.0, 4.0);
        assert_eq!(&t * Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 3.0, 4.0));
        assert_eq!(&t * Vec3::new(1.0, 1.0, 1.0), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn rotation_point() {
        let t = rotation_z(FRAC_PI_2);
        assert_abs_diff_eq!(
            &t * Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );

        let t = rotation_x(FRAC_PI_2);
        assert_abs_diff_eq!(
            &t * Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn composition_applies_right_to_left() {
        let t = &translation(Vec3::new(1.0, 2.0, 3.0)) * &scale(2.0, 2.0, 2.0);
        assert_eq!(&t * Point3::new(1.0, 1.0, 1.0), Point3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn composed_with_inverse_is_identity() {
        let t = &(&translation(Vec3::new(1.0, -2.0, 3.0)) * &rotation_z(0.7)) * &scale(2.0, 3.0, 4.0);
        let roundtrip = &t * &t.inverted();

        let p = Point3::new(1.5, -2.5, 3.5);
        assert_abs_diff_eq!(&roundtrip * p, p, epsilon = 1e-6);
        assert_abs_diff_eq!(roundtrip.m(), &Matrix4x4::identity(), epsilon = 1e-6);
    }

    #[test]
    fn normals_use_inverse_transpose() {
        // Squashing a surface along y should steepen its normal, not flatten
        // it. With the inverse transpose the y component is divided, not
        // multiplied.
        let t = scale(1.0, 2.0, 1.0);
        let n = &t * Normal::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(n, Normal::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn ray_transform() {
        let t = translation(Vec3::new(1.0, 2.0, 3.0));
        let r = &t * Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(r.o, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(r.d, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn look_at_maps_world_to_camera() {
        let t = look_at(
            Point3::new(0.0, 0.0, -5.0),
            Point3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        // The target sits straight ahead on the camera's +z axis
        assert_abs_diff_eq!(
            &t * Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 5.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            &t * Point3::new(0.0, 0.0, -5.0),
            Point3::new(0.0, 0.0, 0.0),
            epsilon = 1e-12
        );
    }
}
