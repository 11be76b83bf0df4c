/// Hypercubic periodic lattice geometry with on-the-fly neighbor computation.
///
/// Sites are indexed in row-major (C) order; every axis has the same extent
/// and wraps around modulo `side`.
pub struct Lattice {
    /// Extent along every dimension.
    pub side: usize,
    /// Row-major strides: `strides[d] = side^(n_dims - 1 - d)`.
    pub strides: Vec<usize>,
    /// Total number of sites (`side^n_dims`).
    pub n_spins: usize,
    /// Number of spatial dimensions.
    pub n_dims: usize,
}

impl Lattice {
    pub fn new(n_dims: usize, side: usize) -> Self {
        let n_spins = side.pow(n_dims as u32);

        // Row-major strides: stride[d] = product of the extents after d
        let mut strides = vec![1usize; n_dims];
        for d in (0..n_dims.saturating_sub(1)).rev() {
            strides[d] = strides[d + 1] * side;
        }

        Self {
            side,
            strides,
            n_spins,
            n_dims,
        }
    }

    /// Compute the flat index of the neighbor of `flat_idx` in dimension `dim`.
    /// `forward = true` means +1 direction, `forward = false` means -1 direction.
    #[inline]
    pub fn neighbor(&self, flat_idx: usize, dim: usize, forward: bool) -> usize {
        let stride = self.strides[dim];
        let size = self.side;

        // Extract the coordinate in this dimension
        let coord = (flat_idx / stride) % size;

        let new_coord = if forward {
            if coord + 1 == size {
                0
            } else {
                coord + 1
            }
        } else if coord == 0 {
            size - 1
        } else {
            coord - 1
        };

        // flat_idx - coord*stride strips this dimension's contribution (always >= 0),
        // then we add back new_coord*stride.
        flat_idx - coord * stride + new_coord * stride
    }

    /// Flatten a coordinate tuple into a row-major site index.
    ///
    /// Coordinates outside `0..side` are a programming defect, not a
    /// recoverable condition.
    #[inline]
    pub fn flatten(&self, coords: &[usize]) -> usize {
        assert_eq!(coords.len(), self.n_dims, "coordinate arity mismatch");
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(&c, &stride)| {
                assert!(c < self.side, "coordinate {c} out of range 0..{}", self.side);
                c * stride
            })
            .sum()
    }
}
