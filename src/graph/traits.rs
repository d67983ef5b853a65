use num_traits::Zero;
use ordered_float::OrderedFloat;
use std::fmt::{Debug, Display};

/// Edge cost usable by the shortest path engine.
///
/// Costs must be totally ordered so that the frontier can key on
/// `(distance, node)` directly. `infinity()` is the "no path found" sentinel
/// and is kept out of reach of real path sums: a sum that would reach or pass
/// it is reported as an overflow instead of being stored.
pub trait Weight: Copy + Ord + Debug + Display + Zero {
    /// The "no path found" sentinel
    fn infinity() -> Self;

    /// Adds two finite costs, or `None` if the sum is not representable below `infinity()`
    fn checked_sum(self, other: Self) -> Option<Self>;

    /// Returns true if this is the `infinity()` sentinel
    fn is_infinite(&self) -> bool {
        *self == Self::infinity()
    }

    /// Returns true if the cost is below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn infinity() -> Self {
                    <$t>::MAX
                }

                fn checked_sum(self, other: Self) -> Option<Self> {
                    self.checked_add(other).filter(|sum| *sum != <$t>::MAX)
                }
            }
        )*
    };
}

impl_integer_weight!(u32, u64, usize, i32, i64, i128);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                fn infinity() -> Self {
                    OrderedFloat(<$t>::INFINITY)
                }

                // Only a finite + finite sum rounding up to +inf is an overflow
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.0.is_infinite() && self.0.is_finite() && other.0.is_finite() {
                        None
                    } else {
                        Some(sum)
                    }
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a static weighted directed graph over dense vertex ids `0..n`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}
