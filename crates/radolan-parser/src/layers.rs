//! Arrangement of the decoded plane into layers.
//!
//! Volume products (e.g. PZ, 200x2400) stack equally sized layers on disk.
//! Picture products (e.g. PF, 200x224) store a vertical profile strip above
//! a single layer; the strip is dropped.

use radolan_common::{RadolanError, RadolanResult};

use crate::unpacking::Plane;

/// Where the layers sit inside the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerLayout {
    /// First plane row belonging to layer 0
    pub first_row: usize,
    pub layer_height: usize,
    pub count: usize,
}

impl LayerLayout {
    pub fn compute(plain_height: usize, layer_height: usize) -> RadolanResult<Self> {
        if layer_height == 0 || layer_height > plain_height {
            return Err(RadolanError::BadDimensions(format!(
                "layer height {} does not fit plane height {}",
                layer_height, plain_height
            )));
        }

        if plain_height % layer_height == 0 {
            Ok(Self {
                first_row: 0,
                layer_height,
                count: plain_height / layer_height,
            })
        } else {
            Ok(Self {
                first_row: plain_height - layer_height,
                layer_height,
                count: 1,
            })
        }
    }
}

/// Equally sized layers, stored contiguously in on-disk order.
#[derive(Debug, Clone, PartialEq)]
pub struct Layers {
    width: usize,
    height: usize,
    count: usize,
    data: Vec<f32>,
}

impl Layers {
    /// Slice `plane` into layers of `layer_width` x `layer_height`.
    pub fn arrange(plane: &Plane, layer_width: usize, layer_height: usize) -> RadolanResult<Self> {
        if layer_width != plane.width() {
            return Err(RadolanError::BadDimensions(format!(
                "layer width {} differs from plane width {}",
                layer_width,
                plane.width()
            )));
        }

        let layout = LayerLayout::compute(plane.height(), layer_height)?;
        let begin = layout.first_row * layer_width;
        let end = begin + layout.count * layer_height * layer_width;

        Ok(Self {
            width: layer_width,
            height: layer_height,
            count: layout.count,
            data: plane.values()[begin..end].to_vec(),
        })
    }

    /// Blank layers holding no data.
    pub fn empty(width: usize, height: usize, count: usize) -> Self {
        Self {
            width,
            height,
            count,
            data: vec![f32::NAN; width * height * count],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Row-major values of layer `z`.
    pub fn layer(&self, z: usize) -> Option<&[f32]> {
        if z >= self.count {
            return None;
        }
        let size = self.width * self.height;
        Some(&self.data[z * size..(z + 1) * size])
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.layer(z).map(|layer| layer[y * self.width + x])
    }
}
