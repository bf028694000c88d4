use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SINGLE: f64 = 1.0;
pub const DOUBLE: f64 = 2.0;
pub const TRIPLE: f64 = 3.0;
/// Added to a bond between two aromatic atoms.
pub const AROMATIC_INCREMENT: f64 = 0.5;

/// Dense square matrix of bond orders.
///
/// A `0.0` entry means "no bond"; `1`, `2`, `3` are single, double and triple
/// bonds, and fractional values are aromatic or delocalized bonds. The parser
/// works on the upper-triangular form (bond `i < j` is stored at `[i][j]`)
/// and [`symmetrize`](BondMatrix::symmetrize)s once resolution is finished.
/// [`order`](BondMatrix::order) and [`set_order`](BondMatrix::set_order) work
/// the same in both forms.
///
/// The diagonal is always zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBondMatrix")]
pub struct BondMatrix {
    n: usize,
    data: Vec<f64>,
    symmetric: bool,
}

/// A deserialized matrix or molecule whose parts do not fit together.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("bond matrix of size {n} needs {expected} cells, found {found}")]
    MatrixCells {
        n: usize,
        expected: usize,
        found: usize,
    },
    #[error("{atoms} atoms but a bond matrix of size {size}")]
    AtomCount { atoms: usize, size: usize },
}

#[derive(Deserialize)]
struct RawBondMatrix {
    n: usize,
    data: Vec<f64>,
    symmetric: bool,
}

impl TryFrom<RawBondMatrix> for BondMatrix {
    type Error = ShapeError;

    fn try_from(raw: RawBondMatrix) -> Result<Self, Self::Error> {
        if raw.n.checked_mul(raw.n) != Some(raw.data.len()) {
            return Err(ShapeError::MatrixCells {
                n: raw.n,
                expected: raw.n.saturating_mul(raw.n),
                found: raw.data.len(),
            });
        }
        let mut m = Self {
            n: raw.n,
            data: raw.data,
            symmetric: raw.symmetric,
        };
        for i in 0..m.n {
            m.data[i * m.n + i] = 0.0;
        }
        Ok(m)
    }
}

impl BondMatrix {
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
            symmetric: false,
        }
    }

    /// Upper-triangular matrix of a simple chain: `i` bonded to `i + 1`.
    pub fn chain(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 1..n {
            m.set(i - 1, i, SINGLE);
        }
        m
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    /// Raw cell access.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Raw cell write. Writes to the diagonal are dropped.
    pub fn set(&mut self, i: usize, j: usize, order: f64) {
        if i == j {
            return;
        }
        self.data[i * self.n + j] = order;
    }

    /// Undirected bond order between `i` and `j`.
    pub fn order(&self, i: usize, j: usize) -> f64 {
        let (lo, hi) = ordered(i, j);
        self.get(lo, hi)
    }

    /// Writes the undirected bond order between `i` and `j`, keeping the
    /// current storage form.
    pub fn set_order(&mut self, i: usize, j: usize, order: f64) {
        let (lo, hi) = ordered(i, j);
        self.set(lo, hi, order);
        if self.symmetric {
            self.set(hi, lo, order);
        }
    }

    pub fn has_bond(&self, i: usize, j: usize) -> bool {
        self.order(i, j) > 0.0
    }

    /// Folds the upper-triangular working form into a full symmetric matrix.
    /// Entries below the diagonal are replaced by their mirror.
    pub fn symmetrize(&mut self) {
        if self.symmetric {
            return;
        }
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let v = self.get(i, j);
                self.set(j, i, v);
            }
        }
        self.symmetric = true;
    }

    /// Symmetric copy of the matrix, leaving `self` in its working form.
    pub fn symmetrized(&self) -> Self {
        let mut out = self.clone();
        out.symmetrize();
        out
    }

    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.n).filter(move |&j| j != i && self.has_bond(i, j))
    }

    pub fn degree(&self, i: usize) -> usize {
        self.neighbors(i).count()
    }

    /// Every bond once, as `(i, j, order)` with `i < j`.
    pub fn bonds(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n).flat_map(move |i| {
            ((i + 1)..self.n).filter_map(move |j| {
                let order = self.get(i, j);
                (order > 0.0).then_some((i, j, order))
            })
        })
    }

    pub fn bond_count(&self) -> usize {
        self.bonds().count()
    }

    /// Block-extends the matrix with `extra` zero rows and columns. The
    /// existing block is copied unchanged.
    pub fn extended(&self, extra: usize) -> Self {
        let n = self.n + extra;
        let mut data = vec![0.0; n * n];
        for i in 0..self.n {
            let src = &self.data[i * self.n..(i + 1) * self.n];
            data[i * n..i * n + self.n].copy_from_slice(src);
        }
        Self {
            n,
            data,
            symmetric: self.symmetric,
        }
    }

    /// Row-major view of the whole matrix.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks(self.n.max(1)).take(self.n)
    }
}

fn ordered(i: usize, j: usize) -> (usize, usize) {
    if i < j {
        (i, j)
    } else {
        (j, i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_is_upper_triangular() {
        let m = BondMatrix::chain(4);
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.get(2, 3), 1.0);
        assert_eq!(m.get(0, 2), 0.0);
        assert_eq!(m.bond_count(), 3);
        assert!(!m.is_symmetric());
    }

    #[test]
    fn chain_of_one_and_zero() {
        assert_eq!(BondMatrix::chain(1).bond_count(), 0);
        assert!(BondMatrix::chain(0).is_empty());
        assert_eq!(BondMatrix::chain(0).rows().count(), 0);
    }

    #[test]
    fn diagonal_writes_are_dropped() {
        let mut m = BondMatrix::zeros(2);
        m.set(1, 1, 2.0);
        m.set_order(0, 0, 3.0);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.get(0, 0), 0.0);
    }

    #[test]
    fn order_is_undirected() {
        let mut m = BondMatrix::zeros(3);
        m.set_order(2, 0, DOUBLE);
        assert_eq!(m.get(0, 2), DOUBLE);
        assert_eq!(m.get(2, 0), 0.0);
        assert_eq!(m.order(2, 0), DOUBLE);
    }

    #[test]
    fn symmetrize_mirrors_upper_triangle() {
        let mut m = BondMatrix::chain(3);
        m.set_order(0, 2, TRIPLE);
        m.symmetrize();
        assert_eq!(m.get(1, 0), 1.0);
        assert_eq!(m.get(2, 0), TRIPLE);
        m.set_order(0, 1, DOUBLE);
        assert_eq!(m.get(1, 0), DOUBLE);
        assert_eq!(m.get(0, 1), DOUBLE);
    }

    #[test]
    fn neighbors_and_degree() {
        let mut m = BondMatrix::chain(4);
        m.set_order(0, 3, SINGLE);
        let n: Vec<_> = m.neighbors(0).collect();
        assert_eq!(n, vec![1, 3]);
        assert_eq!(m.degree(3), 2);
        assert_eq!(m.symmetrized().degree(3), 2);
    }

    #[test]
    fn extended_keeps_existing_block() {
        let mut m = BondMatrix::chain(2);
        m.symmetrize();
        let e = m.extended(2);
        assert_eq!(e.len(), 4);
        assert_eq!(e.order(0, 1), 1.0);
        assert_eq!(e.get(1, 0), 1.0);
        assert_eq!(e.bond_count(), 1);
        assert!(e.is_symmetric());
    }

    #[test]
    fn bonds_lists_each_bond_once() {
        let mut m = BondMatrix::chain(3);
        m.symmetrize();
        let bonds: Vec<_> = m.bonds().collect();
        assert_eq!(bonds, vec![(0, 1, 1.0), (1, 2, 1.0)]);
    }

    #[test]
    fn as_slice_is_row_major() {
        let m = BondMatrix::chain(2);
        assert_eq!(m.as_slice(), &[0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn deserialize_checks_cell_count() {
        let err = serde_json::from_str::<BondMatrix>(r#"{"n":2,"data":[0.0],"symmetric":false}"#)
            .unwrap_err();
        assert!(err.to_string().contains("needs 4 cells, found 1"), "{err}");
    }

    #[test]
    fn deserialize_clears_diagonal() {
        let m: BondMatrix =
            serde_json::from_str(r#"{"n":2,"data":[5.0,1.0,0.0,5.0],"symmetric":false}"#).unwrap();
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(1, 1), 0.0);
        assert_eq!(m.order(0, 1), 1.0);
    }
}
