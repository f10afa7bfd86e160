//! Permutations of the finite set {1, ..., n}.
use std::collections::BTreeSet;
use std::fmt;

use num_integer::Integer;

use crate::error::{Error, Reason};
use crate::El;

/// A permutation of the finite set {1, ..., n}.
///
/// A permutation rearranges the elements of a finite set. It is a bijection σ from a set to the
/// same set. In symgroup these sets are always {1, ..., n} for some n, called the degree of the
/// permutation. The set of all permutations of degree n forms the symmetric group S<sub>n</sub>.
///
/// Internally a permutation is stored as its image list: position i (1-indexed) holds σ(i).
/// Values are immutable; every operation that produces a different permutation returns a new
/// value. Two permutations are equal iff they have the same degree and the same image list, and
/// the hash is derived from the image list so it is consistent with equality.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Permutation {
    images: Box<[El]>,
}

impl Permutation {
    /// The identity permutation of degree n.
    pub fn identity(degree: usize) -> Permutation {
        Permutation {
            images: (1..=degree as El).collect(),
        }
    }

    /// Create a permutation from the image list [σ(1), ..., σ(n)].
    ///
    /// Fails with [`Error::InvalidArgument`] if any image value repeats or lies outside 1..=n.
    /// The empty list is a valid image list and yields the degree-0 permutation.
    pub fn from_images(images: Vec<El>) -> Result<Permutation, Error> {
        // The degree must itself be a valid El so every point can index the image list
        assert!(images.len() <= El::MAX as usize);
        let degree = images.len();
        let mut seen = vec![false; degree];

        for &image in images.iter() {
            if image == 0 || image as usize > degree {
                return Err(Reason::ImageOutOfRange {
                    value: image,
                    degree,
                }
                .into());
            }
            if seen[image as usize - 1] {
                return Err(Reason::DuplicateImage(image).into());
            }
            seen[image as usize - 1] = true;
        }

        Ok(Permutation {
            images: images.into_boxed_slice(),
        })
    }

    /// Create a permutation from an optional image list.
    ///
    /// An absent list fails with [`Error::NullInput`]; a present list is validated as by
    /// [`from_images`](Permutation::from_images).
    pub fn from_optional_images(images: Option<Vec<El>>) -> Result<Permutation, Error> {
        images.map_or(Err(Error::NullInput), Permutation::from_images)
    }

    /// The degree n of this permutation, also called its permutation class.
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    /// The image list as a slice, in position order 1..=n.
    pub fn images(&self) -> &[El] {
        &self.images
    }

    /// Iterate over the image values in position order.
    ///
    /// The iterator is restartable: the value is immutable, so re-iterating yields the same
    /// sequence again.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, El>> {
        self.images.iter().copied()
    }

    /// The image σ(i) of a point.
    ///
    /// Fails with [`Error::InvalidArgument`] when the point lies outside the domain 1..=n.
    pub fn sigma(&self, point: El) -> Result<El, Error> {
        let degree = self.degree();
        if point == 0 || point as usize > degree {
            return Err(Reason::PointOutOfDomain { point, degree }.into());
        }
        Ok(self.images[point as usize - 1])
    }

    /// The inverse of this permutation.
    ///
    /// Every position of the result is filled because σ is a bijection on 1..=n. The inverse of
    /// the degree-0 permutation is the degree-0 permutation.
    pub fn inverse(&self) -> Permutation {
        let mut images = vec![0; self.degree()].into_boxed_slice();
        for (i, &image) in self.images.iter().enumerate() {
            images[image as usize - 1] = i as El + 1;
        }
        Permutation { images }
    }

    /// Compose with another permutation, applying `self` first.
    ///
    /// The result τ maps each point i to `other`(`self`(i)), i.e. τ = other ∘ self. Fails with
    /// [`Error::InvalidArgument`] when the degrees differ.
    pub fn compose(&self, other: &Permutation) -> Result<Permutation, Error> {
        if self.degree() != other.degree() {
            return Err(Reason::DegreeMismatch {
                left: self.degree(),
                right: other.degree(),
            }
            .into());
        }
        Ok(self.compose_same_degree(other))
    }

    /// Compose with an optional partner.
    ///
    /// An absent partner fails with [`Error::NullInput`]; a present one is composed as by
    /// [`compose`](Permutation::compose).
    pub fn compose_optional(&self, other: Option<&Permutation>) -> Result<Permutation, Error> {
        other.map_or(Err(Error::NullInput), |other| self.compose(other))
    }

    fn compose_same_degree(&self, other: &Permutation) -> Permutation {
        let images = self
            .images
            .iter()
            .map(|&image| other.images[image as usize - 1])
            .collect();
        Permutation { images }
    }

    /// A power of this permutation, computed by exponentiation by squaring.
    ///
    /// `pow(0)` is the identity of the same degree.
    pub fn pow(&self, mut exp: u64) -> Permutation {
        let mut result = Permutation::identity(self.degree());
        let mut base = self.clone();
        while exp > 0 {
            if exp.is_odd() {
                // Powers of the same permutation commute, so the order of the
                // factors does not matter here
                result = result.compose_same_degree(&base);
            }
            base = base.compose_same_degree(&base);
            exp /= 2;
        }
        result
    }

    /// Every fixed point of this permutation, i.e. every i with σ(i) = i.
    pub fn fixed_points(&self) -> BTreeSet<El> {
        (1..)
            .zip(self.images.iter().copied())
            .filter(|&(point, image)| point == image)
            .map(|(point, _)| point)
            .collect()
    }

    /// Whether this permutation maps every point to itself.
    pub fn is_identity(&self) -> bool {
        (1..)
            .zip(self.images.iter().copied())
            .all(|(point, image)| point == image)
    }

    /// The disjoint cycles of this permutation, in discovery order.
    ///
    /// The image list is scanned for unconsumed starting points in ascending order, so cycles
    /// containing lower points come first; this is the canonical order for
    /// [`cycle_notation`](Permutation::cycle_notation). Each cycle records its orbit starting
    /// from the first successor of the starting point, not the starting point itself:
    /// [2, 1, 3] decomposes into [2, 1] followed by [3]. Fixed points form 1-cycles, so the
    /// cycles partition 1..=n.
    pub fn cycles(&self) -> Vec<Vec<El>> {
        let mut seen = vec![false; self.degree()];
        let mut cycles = Vec::new();

        for start in 0..self.degree() {
            if seen[start] {
                continue;
            }
            let mut cycle = Vec::new();
            let mut current = start;
            while !seen[current] {
                seen[current] = true;
                let image = self.images[current];
                cycle.push(image);
                current = image as usize - 1;
            }
            cycles.push(cycle);
        }

        cycles
    }

    /// The disjoint cycles of this permutation as an unordered set.
    ///
    /// Duplicates are impossible since the cycles partition 1..=n.
    pub fn all_cycles(&self) -> BTreeSet<Vec<El>> {
        self.cycles().into_iter().collect()
    }

    /// 1-indexed access into the cycle list in discovery order.
    ///
    /// Fails with [`Error::InvalidArgument`] when the index is out of range, including every
    /// index on the degree-0 permutation.
    pub fn cycle(&self, index: usize) -> Result<Vec<El>, Error> {
        let mut cycles = self.cycles();
        if index == 0 || index > cycles.len() {
            return Err(Reason::CycleIndexOutOfRange {
                index,
                cycles: cycles.len(),
            }
            .into());
        }
        Ok(cycles.swap_remove(index - 1))
    }

    /// The order of this permutation: the smallest m > 0 with σ<sup>m</sup> = id.
    ///
    /// Computed as the LCM of the cycle lengths, fixed points included as 1-cycles. The
    /// degree-0 permutation has order 0 by convention.
    pub fn order(&self) -> u64 {
        if self.images.is_empty() {
            return 0;
        }
        match lcm_all(self.cycles().iter().map(|cycle| cycle.len() as u64)) {
            Ok(order) => order,
            // A nonempty permutation has at least one cycle
            Err(_) => 0,
        }
    }

    /// Display this permutation in cycle notation.
    ///
    /// Each cycle is rendered as a parenthesized space-separated group, cycles concatenated in
    /// discovery order with no separator, e.g. `(2 4 1)(5 3)`. The degree-0 permutation has no
    /// cycles and renders as the empty string.
    pub fn cycle_notation(&self) -> CycleNotation<'_> {
        CycleNotation { perm: self }
    }
}

/// The LCM of a collection of positive integers, reduced pairwise left to right via the
/// Euclidean GCD.
///
/// An empty collection has no LCM and fails with [`Error::InvalidArgument`].
fn lcm_all<I>(lengths: I) -> Result<u64, Error>
where
    I: IntoIterator<Item = u64>,
{
    let mut lengths = lengths.into_iter();
    let first = lengths
        .next()
        .ok_or(Error::InvalidArgument(Reason::EmptyLcm))?;
    Ok(lengths.fold(first, |acc, length| acc.lcm(&length)))
}

fn write_group<I>(f: &mut fmt::Formatter, els: I) -> fmt::Result
where
    I: IntoIterator<Item = El>,
{
    let mut first = true;
    for el in els {
        f.write_str(if first { "(" } else { " " })?;
        first = false;
        fmt::Display::fmt(&el, f)?;
    }
    f.write_str(if first { "()" } else { ")" })
}

/// List notation: the images in position order as a single parenthesized group, e.g. `(2 1 3)`.
/// The degree-0 permutation renders as `()`.
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_group(f, self.iter())
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<'a> IntoIterator for &'a Permutation {
    type Item = El;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, El>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Cycle notation display adapter returned by [`Permutation::cycle_notation`].
pub struct CycleNotation<'a> {
    perm: &'a Permutation,
}

impl fmt::Display for CycleNotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cycle in self.perm.cycles() {
            write_group(f, cycle)?;
        }
        Ok(())
    }
}

impl fmt::Debug for CycleNotation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Construct a permutation from a literal list of images.
///
/// Expands to [`Permutation::from_images`], so the result is validated and wrapped in a
/// `Result`.
#[macro_export]
macro_rules! perm {
    ($($image:expr),* $(,)?) => {
        $crate::perm::Permutation::from_images(::std::vec![$($image),*])
    };
}
