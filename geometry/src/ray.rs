use std::fmt::{Display, Formatter, Result};

use math::hcm;

/// Represents a ray:
///
///   origin + t * direction
///
/// where t is positive.
///
/// The extent of the ray is by default infinite, but can be set to a positive number so that
/// occlusion queries only consider surfaces in front of a known point (e.g., a light).
///
/// The direction doesn't need to be unit-length; the `t` value of an intersection is measured in
/// units of `dir`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
    pub t_max: f32,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray {
            origin,
            dir,
            t_max: f32::INFINITY,
        }
    }

    pub fn with_extent(self, t_max: f32) -> Self {
        Ray { t_max, ..self }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}

#[cfg(test)]
mod test {
    use super::Ray;
    use math::hcm::{point3, vec3};

    #[test]
    fn position_along_ray() {
        let r = Ray::new(point3(1.0, 0.0, 0.0), vec3(0.0, 2.0, 0.0));
        assert_eq!(r.position_at(1.5), point3(1.0, 3.0, 0.0));
        assert_eq!(r.t_max, f32::INFINITY);
        assert_eq!(r.with_extent(4.0).t_max, 4.0);
        assert_eq!(format!("{:.1}", r), "[1.0, 0.0, 0.0] + t(0.0, 2.0, 0.0)");
    }
}
