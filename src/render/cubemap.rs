//! Cubemap assembly from six separately loaded face images.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureViewDescriptor, TextureViewDimension,
};

/// Face files in cube layer order: +X, -X, +Y, -Y, +Z, -Z.
pub const CUBEMAP_FACES: [&str; 6] = ["px.png", "nx.png", "py.png", "ny.png", "pz.png", "nz.png"];

/// Directory holding the face files.
pub const CUBEMAP_DIR: &str = "planets/cubeMap";

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CubemapError {
    #[error("cubemap face {face} has no pixel data")]
    MissingData { face: &'static str },

    #[error("cubemap faces must be square (got {width}x{height})")]
    NotSquare { width: u32, height: u32 },

    #[error("cubemap face {face} is {got:?}, expected {expected:?}")]
    SizeMismatch {
        face: &'static str,
        expected: (u32, u32),
        got: (u32, u32),
    },

    #[error("cubemap face {face} has a different pixel format than px.png")]
    FormatMismatch { face: &'static str },

    #[error("cubemap face {face} has {got} bytes, expected {expected}")]
    DataLength {
        face: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Asset path of every cubemap face, in layer order.
pub fn face_paths() -> [String; 6] {
    CUBEMAP_FACES.map(|face| format!("{CUBEMAP_DIR}/{face}"))
}

/// Stack six 2D face images into one cube texture.
///
/// All faces must be square and share size and pixel format.
pub fn assemble_cubemap(faces: [&Image; 6]) -> Result<Image, CubemapError> {
    let first = faces[0];
    let size = first.texture_descriptor.size;
    let format = first.texture_descriptor.format;

    if size.width != size.height {
        return Err(CubemapError::NotSquare {
            width: size.width,
            height: size.height,
        });
    }

    let face_len = first
        .data
        .as_ref()
        .map(Vec::len)
        .ok_or(CubemapError::MissingData {
            face: CUBEMAP_FACES[0],
        })?;

    let mut data = Vec::with_capacity(face_len * 6);
    for (image, face) in faces.iter().zip(CUBEMAP_FACES) {
        let face_size = image.texture_descriptor.size;
        if (face_size.width, face_size.height) != (size.width, size.height) {
            return Err(CubemapError::SizeMismatch {
                face,
                expected: (size.width, size.height),
                got: (face_size.width, face_size.height),
            });
        }
        if image.texture_descriptor.format != format {
            return Err(CubemapError::FormatMismatch { face });
        }

        let bytes = image
            .data
            .as_ref()
            .ok_or(CubemapError::MissingData { face })?;
        if bytes.len() != face_len {
            return Err(CubemapError::DataLength {
                face,
                expected: face_len,
                got: bytes.len(),
            });
        }
        data.extend_from_slice(bytes);
    }

    let mut cubemap = Image::new(
        Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: 6,
        },
        TextureDimension::D2,
        data,
        format,
        RenderAssetUsages::RENDER_WORLD,
    );
    cubemap.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });

    Ok(cubemap)
}
