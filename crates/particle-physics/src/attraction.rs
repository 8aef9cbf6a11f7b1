//! Species classification and the attraction matrix
//!
//! A particle's display color is classified to the nearest canonical palette
//! entry; the matrix maps an ordered species pair to a signed affinity in
//! `[-1, 1]`. The table is not required to be symmetric.

use std::fmt;

use rand::Rng;

use crate::color::{self, Color, PALETTE};

/// Errors from attraction-matrix construction and species lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Species index outside `[0, SIZE)`.
    OutOfRange { index: usize },
    /// Supplied table is not SIZE x SIZE.
    BadDimensions { rows: usize, cols: usize },
    /// Supplied affinity value outside `[-1, 1]`.
    BadAffinity { row: usize, col: usize, value: f32 },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::OutOfRange { index } => {
                write!(
                    f,
                    "species index {} out of range (matrix size is {})",
                    index,
                    AttractionMatrix::SIZE
                )
            }
            MatrixError::BadDimensions { rows, cols } => {
                write!(
                    f,
                    "attraction table must be {0}x{0}, got {1}x{2}",
                    AttractionMatrix::SIZE,
                    rows,
                    cols
                )
            }
            MatrixError::BadAffinity { row, col, value } => {
                write!(
                    f,
                    "affinity at ({}, {}) is {}, expected a value in [-1, 1]",
                    row, col, value
                )
            }
        }
    }
}

impl std::error::Error for MatrixError {}

const SIZE: usize = PALETTE.len();

/// Square affinity table indexed by ordered species pairs.
///
/// Constructed once and shared read-only by every particle for the lifetime
/// of the simulation (wrap in `Arc` to share).
#[derive(Clone, Debug, PartialEq)]
pub struct AttractionMatrix {
    table: [[f32; SIZE]; SIZE],
}

impl AttractionMatrix {
    /// Number of canonical species.
    pub const SIZE: usize = SIZE;

    /// Matrix with independent uniform-random affinities in `[-1, 1]`.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut table = [[0.0; Self::SIZE]; Self::SIZE];
        for row in table.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.random_range(-1.0..=1.0);
            }
        }
        Self { table }
    }

    /// Matrix from a precomputed table.
    ///
    /// Fails if the table is not exactly SIZE x SIZE or holds any affinity
    /// outside `[-1, 1]`.
    pub fn from_table(table: &[Vec<f32>]) -> Result<Self, MatrixError> {
        if table.len() != Self::SIZE {
            return Err(MatrixError::BadDimensions {
                rows: table.len(),
                cols: table.first().map_or(0, Vec::len),
            });
        }

        let mut checked = [[0.0; Self::SIZE]; Self::SIZE];
        for (i, row) in table.iter().enumerate() {
            if row.len() != Self::SIZE {
                return Err(MatrixError::BadDimensions {
                    rows: table.len(),
                    cols: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if !(-1.0..=1.0).contains(&value) {
                    return Err(MatrixError::BadAffinity {
                        row: i,
                        col: j,
                        value,
                    });
                }
                checked[i][j] = value;
            }
        }

        Ok(Self { table: checked })
    }

    /// Species index of the palette entry nearest to `color`.
    ///
    /// First palette entry reaching the running maximum wins; an exact match
    /// short-circuits the scan.
    pub fn classify(color: Color) -> usize {
        let mut best_index = 0;
        let mut best_proximity = 0.0;

        for (i, &base) in PALETTE.iter().enumerate() {
            let prox = color::proximity(color, base);
            if prox > best_proximity {
                best_proximity = prox;
                best_index = i;

                if best_proximity == 1.0 {
                    break;
                }
            }
        }

        best_index
    }

    /// Canonical color of species `n`.
    pub fn species_color(n: usize) -> Result<Color, MatrixError> {
        PALETTE
            .get(n)
            .copied()
            .ok_or(MatrixError::OutOfRange { index: n })
    }

    /// Signed affinity of `c1`'s species toward `c2`'s species.
    pub fn attraction(&self, c1: Color, c2: Color) -> f32 {
        self.table[Self::classify(c1)][Self::classify(c2)]
    }
}

impl Default for AttractionMatrix {
    fn default() -> Self {
        Self::random(&mut rand::rng())
    }
}
