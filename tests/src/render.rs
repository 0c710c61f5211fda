#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    use varjo::{
        camera::CameraParameters,
        film::FilmSettings,
        light::{Light, Lighting},
        material::Material,
        math::{Point2, Point3, Spectrum, Vec2, Vec3},
        primitive::Primitive,
        renderer::{render, RenderConfig},
        scene::{NodeIdAllocator, SceneNode},
    };

    fn camera_at_minus_z() -> CameraParameters {
        CameraParameters {
            position: Point3::new(0.0, 0.0, -5.0),
            view: Vec3::new(0.0, 0.0, 1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov_degrees: 45.0,
        }
    }

    fn no_lights(ambient: Spectrum<f64>) -> Lighting {
        Lighting {
            ambient,
            lights: Vec::new(),
        }
    }

    #[test]
    fn rejects_zero_resolution() {
        let mut ids = NodeIdAllocator::new();
        let root = SceneNode::new("root", &mut ids);
        let film = FilmSettings {
            res: Vec2::new(0, 64),
        };
        assert!(render(
            &root,
            &film,
            &camera_at_minus_z(),
            &no_lights(Spectrum::zeros()),
            &RenderConfig::default(),
        )
        .is_err());
    }

    #[test]
    fn rejects_degenerate_fov() {
        let mut ids = NodeIdAllocator::new();
        let root = SceneNode::new("root", &mut ids);
        let film = FilmSettings {
            res: Vec2::new(4, 4),
        };
        for fov in [0.0, -10.0, 180.0, 270.0] {
            let camera = CameraParameters {
                fov_degrees: fov,
                ..camera_at_minus_z()
            };
            assert!(render(
                &root,
                &film,
                &camera,
                &no_lights(Spectrum::zeros()),
                &RenderConfig::default(),
            )
            .is_err());
        }
    }

    #[test]
    fn empty_scene_renders_background_gradient() {
        let mut ids = NodeIdAllocator::new();
        let root = SceneNode::new("root", &mut ids);
        let film = FilmSettings {
            res: Vec2::new(3, 3),
        };

        let result = render(
            &root,
            &film,
            &camera_at_minus_z(),
            &no_lights(Spectrum::zeros()),
            &RenderConfig::default(),
        )
        .unwrap();

        // Top row is the zenith colour, bottom row the horizon colour
        assert_abs_diff_eq!(
            result.film.pixel(Point2::new(1, 0)),
            Spectrum::new(0.07, 0.07, 0.18),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            result.film.pixel(Point2::new(1, 2)),
            Spectrum::new(0.45, 0.55, 0.75),
            epsilon = 1e-12
        );
        assert_eq!(result.stats.face_tests, 0);
    }

    #[test]
    fn ambient_shading_of_centered_sphere() {
        let mut ids = NodeIdAllocator::new();
        let mut root = SceneNode::new("root", &mut ids);
        let mut geom = SceneNode::geometry("s", Arc::new(Primitive::Sphere), &mut ids);
        geom.set_material(Arc::new(Material::new(
            Spectrum::new(1.0, 0.0, 0.0),
            Spectrum::zeros(),
            1.0,
        )));
        root.add_child(geom);

        let film = FilmSettings {
            res: Vec2::new(1, 1),
        };
        let result = render(
            &root,
            &film,
            &camera_at_minus_z(),
            &no_lights(Spectrum::new(0.5, 0.5, 0.5)),
            &RenderConfig::default(),
        )
        .unwrap();

        assert_abs_diff_eq!(
            result.film.pixel(Point2::new(0, 0)),
            Spectrum::new(0.5, 0.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn cube_scene_with_background() {
        let mut ids = NodeIdAllocator::new();
        let mut root = SceneNode::new("root", &mut ids);
        let mut geom = SceneNode::geometry("c", Arc::new(Primitive::Cube), &mut ids);
        geom.translate(Vec3::new(-0.5, -0.5, -0.5));
        geom.set_material(Arc::new(Material::new(
            Spectrum::new(1.0, 0.0, 0.0),
            Spectrum::zeros(),
            1.0,
        )));
        root.add_child(geom);

        let film = FilmSettings {
            res: Vec2::new(9, 9),
        };
        let result = render(
            &root,
            &film,
            &camera_at_minus_z(),
            &no_lights(Spectrum::ones()),
            &RenderConfig::default(),
        )
        .unwrap();

        assert_eq!(result.film.res(), Vec2::new(9, 9));
        // The center ray hits the cube's front face
        assert_abs_diff_eq!(
            result.film.pixel(Point2::new(4, 4)),
            Spectrum::new(1.0, 0.0, 0.0),
            epsilon = 1e-9
        );
        // Above the silhouette the gradient shows through in the same frame
        assert_abs_diff_eq!(
            result.film.pixel(Point2::new(4, 0)),
            Spectrum::new(0.07, 0.07, 0.18),
            epsilon = 1e-12
        );
    }

    #[test]
    fn diffuse_light_and_shadow() {
        let lighting = Lighting {
            ambient: Spectrum::zeros(),
            lights: vec![Light::new(
                Spectrum::ones(),
                Point3::new(0.0, 3.0, -4.0),
                [1.0, 0.0, 0.0],
            )],
        };
        let film = FilmSettings {
            res: Vec2::new(1, 1),
        };

        let build_scene = |with_occluder: bool| {
            let mut ids = NodeIdAllocator::new();
            let mut root = SceneNode::new("root", &mut ids);
            let mut geom = SceneNode::geometry("s", Arc::new(Primitive::Sphere), &mut ids);
            geom.set_material(Arc::new(Material::new(
                Spectrum::ones(),
                Spectrum::zeros(),
                1.0,
            )));
            root.add_child(geom);
            if with_occluder {
                // Sits on the segment from the hit point to the light but
                // well off the camera axis
                root.add_child(SceneNode::geometry(
                    "blocker",
                    Arc::new(Primitive::NonhierSphere {
                        pos: Point3::new(0.0, 1.5, -2.5),
                        radius: 0.5,
                    }),
                    &mut ids,
                ));
            }
            root
        };

        let lit = render(
            &build_scene(false),
            &film,
            &camera_at_minus_z(),
            &lighting,
            &RenderConfig::default(),
        )
        .unwrap();
        // The camera ray hits the sphere at (0, 0, -1) where n . l is
        // 1 / sqrt(2)
        let expected = 1.0 / 2.0_f64.sqrt();
        assert_abs_diff_eq!(
            lit.film.pixel(Point2::new(0, 0)),
            Spectrum::new(expected, expected, expected),
            epsilon = 1e-6
        );

        let shadowed = render(
            &build_scene(true),
            &film,
            &camera_at_minus_z(),
            &lighting,
            &RenderConfig::default(),
        )
        .unwrap();
        assert_abs_diff_eq!(
            shadowed.film.pixel(Point2::new(0, 0)),
            Spectrum::zeros(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn specular_highlight_on_axis() {
        // Light behind the camera on the view axis makes r and v coincide at
        // the silhouette center, so the specular term is just ks * light
        let lighting = Lighting {
            ambient: Spectrum::zeros(),
            lights: vec![Light::new(
                Spectrum::ones(),
                Point3::new(0.0, 0.0, -5.0),
                [1.0, 0.0, 0.0],
            )],
        };
        let film = FilmSettings {
            res: Vec2::new(1, 1),
        };

        let mut ids = NodeIdAllocator::new();
        let mut root = SceneNode::new("root", &mut ids);
        let mut geom = SceneNode::geometry("s", Arc::new(Primitive::Sphere), &mut ids);
        geom.set_material(Arc::new(Material::new(
            Spectrum::zeros(),
            Spectrum::new(0.25, 0.25, 0.25),
            10.0,
        )));
        root.add_child(geom);

        let result = render(
            &root,
            &film,
            &camera_at_minus_z(),
            &lighting,
            &RenderConfig::default(),
        )
        .unwrap();

        // Attenuation is constant, n . l = 1 and r . v = 1 at the center
        assert_abs_diff_eq!(
            result.film.pixel(Point2::new(0, 0)),
            Spectrum::new(0.25, 0.25, 0.25),
            epsilon = 1e-6
        );
    }

    #[test]
    fn light_falloff() {
        let light = Light::new(
            Spectrum::new(9.0, 9.0, 9.0),
            Point3::new(0.0, 0.0, 0.0),
            [1.0, 2.0, 1.0],
        );
        // 1 + 2 * 2 + 1 * 2 * 2 = 9
        assert_abs_diff_eq!(light.attenuated(2.0), Spectrum::ones());
    }
}
