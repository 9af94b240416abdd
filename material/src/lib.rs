use radiometry::color::Color;
use std::fmt;
use std::sync::Arc;
use texture::TextureMap;

/// Phong-style shading attributes attached to a surface.
///
/// Cloning is cheap: the optional diffuse texture is shared. A clone with a replaced diffuse term
/// is how per-vertex colors are applied to a single intersection.
#[derive(Clone)]
pub struct Material {
    pub emissive: Color,
    pub ambient: Color,
    pub specular: Color,
    pub reflective: Color,
    pub transmissive: Color,
    pub shininess: f32,
    /// Index of refraction.
    pub index: f32,
    diffuse: Color,
    diffuse_map: Option<Arc<dyn TextureMap>>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            emissive: Color::black(),
            ambient: Color::black(),
            specular: Color::black(),
            reflective: Color::black(),
            transmissive: Color::black(),
            shininess: 0.0,
            index: 1.0,
            diffuse: Color::gray(0.8),
            diffuse_map: None,
        }
    }
}

impl Material {
    pub fn diffuse(c: Color) -> Self {
        Self::default().with_diffuse(c)
    }

    pub fn diffuse_color(&self) -> Color {
        self.diffuse
    }

    pub fn set_diffuse(&mut self, c: Color) {
        self.diffuse = c;
    }

    pub fn with_diffuse(self, diffuse: Color) -> Self {
        Self { diffuse, ..self }
    }

    pub fn with_diffuse_map(self, map: Arc<dyn TextureMap>) -> Self {
        Self {
            diffuse_map: Some(map),
            ..self
        }
    }

    pub fn has_diffuse_map(&self) -> bool {
        self.diffuse_map.is_some()
    }

    /// Diffuse reflectance at a surface point. The texture map is looked up only if the surface
    /// provides a texture coordinate; otherwise the constant diffuse color is used.
    pub fn diffuse_at(&self, uv: Option<(f32, f32)>) -> Color {
        match (&self.diffuse_map, uv) {
            (Some(map), Some(uv)) => map.sample(uv),
            _ => self.diffuse,
        }
    }
}

impl fmt::Debug for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Material")
            .field("diffuse", &self.diffuse)
            .field("has_diffuse_map", &self.has_diffuse_map())
            .field("specular", &self.specular)
            .field("shininess", &self.shininess)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use texture::Solid;

    #[test]
    fn copy_with_new_diffuse_keeps_the_rest() {
        let mut base = Material::diffuse(Color::rgb(255, 0, 0));
        base.shininess = 32.0;
        base.specular = Color::white();

        let mut copy = base.clone();
        copy.set_diffuse(Color::rgb(0, 0, 255));

        assert_eq!(base.diffuse_color(), Color::rgb(255, 0, 0));
        assert_eq!(copy.diffuse_color(), Color::rgb(0, 0, 255));
        assert_eq!(copy.shininess, 32.0);
        assert_eq!(copy.specular, Color::white());
    }

    #[test]
    fn diffuse_map_needs_uv() {
        let map = Arc::new(Solid::new(Color::gray(0.25)));
        let m = Material::diffuse(Color::white()).with_diffuse_map(map);
        assert!(m.has_diffuse_map());
        assert_eq!(m.diffuse_at(Some((0.3, 0.3))), Color::gray(0.25));
        assert_eq!(m.diffuse_at(None), Color::white());
        assert_eq!(Material::default().diffuse_at(Some((0.1, 0.1))), Color::gray(0.8));
    }
}
