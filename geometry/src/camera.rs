use crate::ray;
use math::hcm;

/// Left-handed coordinate system camera: x rightward, y upward, z forward.
///
/// Shoots one ray through the center of every film pixel; rays are not normalized.
pub struct Camera {
    center: hcm::Point3,
    a: hcm::Vec3,
    b: hcm::Vec3,
    c: hcm::Vec3,

    // Film image resolution.
    width: u32,
    height: u32,

    orientation: hcm::Mat3,
}

impl Camera {
    /// Builds a camera at the origin looking along +z with vertical field of view `fov_y_deg`.
    pub fn new(resolution: (u32, u32), fov_y_deg: f32) -> Camera {
        let (width, height) = resolution;
        let aspect_ratio = width as f32 / (height as f32);
        let half_vertical = (fov_y_deg.to_radians() * 0.5).tan();
        let half_horizontal = half_vertical * aspect_ratio;

        Camera {
            center: hcm::Point3::ORIGIN,
            a: hcm::Vec3::new(2.0 * half_horizontal / width as f32, 0.0, 0.0),
            b: hcm::Vec3::new(0.0, -2.0 * half_vertical / height as f32, 0.0),
            c: hcm::Vec3::new(-half_horizontal, half_vertical, 1.0),
            width,
            height,
            orientation: hcm::Mat3::IDENTITY,
        }
    }

    pub fn looking_at(self, from: hcm::Point3, target: hcm::Point3, up: hcm::Vec3) -> Self {
        let forward = (target - from).hat(); // new z-axis
        let right = (up.cross(forward)).hat(); // new x-axis, equals to cross(y, z)
        let up = forward.cross(right); // adjusted y-axis, equals to cross(z, x)

        Self {
            orientation: hcm::Mat3::from_cols(right, up, forward),
            center: from,
            ..self
        }
    }

    /// Returns the ray through the center of pixel (`row`, `col`), or `None` if the pixel is
    /// outside the film.
    pub fn shoot_ray(&self, row: u32, col: u32) -> Option<ray::Ray> {
        if row >= self.height || col >= self.width {
            return None;
        }
        let x = col as f32 + 0.5;
        let y = row as f32 + 0.5;
        let c = self.orientation * self.c;
        let a = self.orientation * self.a;
        let b = self.orientation * self.b;
        let dir = c + a * x + b * y;
        Some(ray::Ray::new(self.center, dir))
    }

    /// Returns resolution (width x height) of the camera film.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod test {
    use super::Camera;
    use math::hcm::{point3, vec3, Point3, Vec3};

    #[test]
    fn center_pixel_looks_forward() {
        let camera = Camera::new((101, 101), 90.0);
        let r = camera.shoot_ray(50, 50).unwrap();
        math::assert_close!(r.dir.hat(), Vec3::Z);
        assert!(camera.shoot_ray(101, 0).is_none());
    }

    #[test]
    fn top_left_pixel_is_up_and_left() {
        let camera = Camera::new((64, 48), 60.0);
        let r = camera.shoot_ray(0, 0).unwrap();
        assert!(r.dir.x < 0.0 && r.dir.y > 0.0);
    }

    #[test]
    fn looking_at_target() {
        let camera = Camera::new((11, 11), 45.0).looking_at(
            point3(0.0, 0.0, -5.0),
            Point3::ORIGIN,
            Vec3::Y,
        );
        let r = camera.shoot_ray(5, 5).unwrap();
        assert_eq!(r.origin, point3(0.0, 0.0, -5.0));
        math::assert_close!(r.dir.hat(), vec3(0.0, 0.0, 1.0));
    }
}
