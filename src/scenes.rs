//! Built-in scenes for the command-line renderer.

use crate::prelude::*;

/// Diffuse, glass and mirror spheres over a diffuse ground plane, with a
/// small triangle standing behind them.
pub fn materials() -> Scene {
    layout(
        Material::lambertian(Color::new(0.1, 0.2, 0.5)),
        Material::dielectric(0.9),
        Material::metal(Color::new(0.3, 0.7, 0.3), 0.0),
        Material::lambertian(Color::new(0.8, 0.6, 0.2)),
        Material::metal(Color::new(0.8, 0.8, 0.8), 0.3),
    )
}

/// Same layout shaded with the reflectivity blend model.
pub fn reflective() -> Scene {
    layout(
        Material::reflective(Color::new(0.1, 0.2, 0.5), 0.1),
        Material::reflective(Color::new(0.3, 0.3, 0.7), 0.6),
        Material::reflective(Color::new(0.3, 0.7, 0.3), 0.9),
        Material::reflective(Color::new(0.8, 0.6, 0.2), 0.2),
        Material::reflective(Color::new(0.8, 0.8, 0.8), 0.5),
    )
}

fn layout(
    center: Material,
    right: Material,
    left: Material,
    ground: Material,
    backdrop: Material,
) -> Scene {
    Scene::from_iter([
        Object::new(Sphere::new(Point3::new(0.0, 0.0, -1.0), 0.5), center),
        Object::new(Sphere::new(Point3::new(1.0, 0.0, -1.5), 0.5), right),
        Object::new(Sphere::new(Point3::new(-1.0, 0.0, -1.5), 0.5), left),
        Object::new(
            Plane::new(Point3::new(0.0, -0.5, 0.0), Vec3::new(0.0, 1.0, 0.0)),
            ground,
        ),
        Object::new(
            Triangle::new(
                Point3::new(-0.6, -0.5, -2.5),
                Point3::new(0.6, -0.5, -2.5),
                Point3::new(0.0, 0.6, -2.5),
            ),
            backdrop,
        ),
    ])
}

/// Frustum camera framing the built-in scenes.
pub fn default_camera(
    image_width: u32,
    image_height: u32,
    samples_per_pixel: u32,
) -> RenderResult<Camera> {
    Camera::new(
        Point3::new(0.0, 0.0, 0.5),
        Point3::new(-2.0, -1.725, -0.5),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 2.25, 0.0),
        image_width,
        image_height,
        samples_per_pixel,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenes_share_layout() {
        let a = materials();
        let b = reflective();
        assert_eq!(a.len(), 5);
        assert_eq!(b.len(), a.len());
        for (x, y) in a.objects.iter().zip(&b.objects) {
            assert_eq!(x.shape, y.shape);
        }
        assert!(
            b.objects
                .iter()
                .all(|o| matches!(o.material, Material::Reflective { .. }))
        );
    }

    #[test]
    fn test_camera_looks_at_center_sphere() {
        let scene = materials();
        let cam = default_camera(40, 20, 1).expect("valid camera");
        // Pixel (20, 15) sits just below the eye line.
        let r = cam.get_ray_with_offset(20, 15, 0.0, 0.0);
        let rec = scene
            .hit(&r, Interval::new(T_MIN, T_MAX))
            .expect("center pixel sees something");
        assert_eq!(*rec.mat, Material::lambertian(Color::new(0.1, 0.2, 0.5)));
    }
}
