use std::convert::TryFrom;
use std::fmt;
use std::path::Path;

use geometry::ray::Ray;
use math::hcm::Vec3;
use radiometry::color::Color;
use thiserror::Error;

use crate::{ImageMap, TextureError, TextureMap};

/// One of the six faces of an axis-aligned cube. The discriminant is the slot index in a
/// `CubeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

use CubeFace::*;

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [PosX, NegX, PosY, NegY, PosZ, NegZ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// File stem used by `CubeMap::from_dir`.
    fn file_stem(self) -> &'static str {
        match self {
            PosX => "px",
            NegX => "nx",
            PosY => "py",
            NegY => "ny",
            PosZ => "pz",
            NegZ => "nz",
        }
    }
}

impl TryFrom<usize> for CubeFace {
    type Error = CubeMapError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        CubeFace::ALL
            .get(n)
            .copied()
            .ok_or(CubeMapError::FaceIndex(n))
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PosX => "+X",
            NegX => "-X",
            PosY => "+Y",
            NegY => "-Y",
            PosZ => "+Z",
            NegZ => "-Z",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum CubeMapError {
    #[error("cube map face {0} has no texture map")]
    MissingFace(CubeFace),
    #[error("cube map face index {0} is out of range 0..6")]
    FaceIndex(usize),
    #[error("direction {0} doesn't point at any cube face")]
    DegenerateDirection(Vec3),
    #[error("can't load cube map face {face}: {source}")]
    Load {
        face: CubeFace,
        #[source]
        source: TextureError,
    },
}

/// An environment surrounding the scene, made of six texture maps on the faces of a cube
/// centered at the ray origin. Each slot owns its map exclusively.
#[derive(Default)]
pub struct CubeMap {
    maps: [Option<Box<dyn TextureMap>>; 6],
}

impl CubeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `px.png`, `nx.png`, `py.png`, `ny.png`, `pz.png` and `nz.png` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CubeMapError> {
        let mut cube_map = Self::new();
        for face in CubeFace::ALL {
            let path = dir.as_ref().join(format!("{}.png", face.file_stem()));
            let image =
                ImageMap::from_file(&path).map_err(|source| CubeMapError::Load { face, source })?;
            cube_map.set_face(face, Box::new(image));
        }
        log::info!("loaded cube map from {}", dir.as_ref().display());
        Ok(cube_map)
    }

    /// Installs `map` on `face`, returning the map previously owned by that slot.
    pub fn set_face(
        &mut self, face: CubeFace, map: Box<dyn TextureMap>,
    ) -> Option<Box<dyn TextureMap>> {
        let previous = self.maps[face.index()].replace(map);
        if previous.is_some() {
            log::warn!("Discarding existing texture map on cube face {}", face);
        }
        previous
    }

    /// Index form of `set_face`: slots 0 to 5 are +X, -X, +Y, -Y, +Z, -Z.
    pub fn set_nth_map(
        &mut self, n: usize, map: Box<dyn TextureMap>,
    ) -> Result<Option<Box<dyn TextureMap>>, CubeMapError> {
        let face = CubeFace::try_from(n)?;
        Ok(self.set_face(face, map))
    }

    pub fn has_face(&self, face: CubeFace) -> bool {
        self.maps[face.index()].is_some()
    }

    /// Maps a direction to the cube face it points at and the texture coordinate on that face,
    /// in [0, 1] x [0, 1].
    ///
    /// The dominant axis is the one with largest magnitude; ties prefer x over y over z. A zero
    /// component counts as negative. The other two components are projected onto the face by
    /// dividing by the dominant magnitude:
    ///
    /// | face | u  | v  |
    /// |------|----|----|
    /// | +X   | -z | y  |
    /// | -X   | z  | y  |
    /// | +Y   | x  | -z |
    /// | -Y   | x  | z  |
    /// | +Z   | x  | y  |
    /// | -Z   | -x | y  |
    ///
    /// and each of u, v is then remapped from [-1, 1] to [0, 1].
    pub fn lookup(dir: Vec3) -> Result<(CubeFace, (f32, f32)), CubeMapError> {
        let Vec3 { x, y, z } = dir
            .try_hat()
            .ok_or(CubeMapError::DegenerateDirection(dir))?;
        let (ax, ay, az) = (x.abs(), y.abs(), z.abs());

        let (face, u, v) = if ax >= ay && ax >= az {
            if x > 0.0 {
                (PosX, -z / ax, y / ax)
            } else {
                (NegX, z / ax, y / ax)
            }
        } else if ay >= ax && ay >= az {
            if y > 0.0 {
                (PosY, x / ay, -z / ay)
            } else {
                (NegY, x / ay, z / ay)
            }
        } else if z > 0.0 {
            (PosZ, x / az, y / az)
        } else {
            (NegZ, -x / az, y / az)
        };

        Ok((face, ((u + 1.0) * 0.5, (v + 1.0) * 0.5)))
    }

    /// Samples the environment in the direction of `r`.
    pub fn sample(&self, r: &Ray) -> Result<Color, CubeMapError> {
        let (face, uv) = Self::lookup(r.dir)?;
        let map = self.maps[face.index()]
            .as_ref()
            .ok_or(CubeMapError::MissingFace(face))?;
        Ok(map.sample(uv))
    }
}
