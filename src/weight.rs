//! Edge weights and the scalar cost used by cheapest-path search.
//!
//! The graph engine stores whatever weight the caller attaches to an edge. The only thing
//! it ever asks of a weight is a single comparable scalar, exposed through [`Weight::cost`].
//! Plain numbers are weights of themselves; [`Route`] models an edge that can be travelled
//! two different ways, each described by a [`RouteLeg`].
//!
//! # Examples
//!
//! ```rust
//! use routegraph::{CostBasis, Route, RouteLeg, Weight};
//!
//! let route = Route::new(
//!     RouteLeg::new(120.0, 90.0, 14.5),
//!     RouteLeg::new(95.0, 140.0, 9.0),
//! );
//!
//! assert_eq!(route.cost(), 14.5);
//! assert_eq!(route.by(CostBasis::Alternative).cost(), 9.0);
//! ```

use std::fmt;

use strum::{Display, EnumIter};

/// A caller-supplied cost descriptor attached to an edge.
///
/// Cheapest-path search sums and compares the values returned by [`cost`](Weight::cost).
/// Costs are expected to be finite and non-negative; a search that meets any other value
/// fails with [`Error::InvalidWeight`](crate::Error::InvalidWeight).
pub trait Weight {
    /// Returns the scalar cost of traversing the edge.
    fn cost(&self) -> f64;
}

macro_rules! impl_weight_for_numeric {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[inline]
                #[allow(
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn cost(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_weight_for_numeric!(f64, f32, u8, u16, u32, u64, usize, i8, i16, i32, i64);

impl<W: Weight + ?Sized> Weight for &W {
    #[inline]
    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

/// Selects which of the two legs of a [`Route`] provides its cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum CostBasis {
    /// The first (preferred) way of travelling the edge
    #[default]
    Primary,
    /// The second way of travelling the edge
    Alternative,
}

/// One way of travelling between two places.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteLeg {
    /// Distance in kilometres
    pub distance_km: f64,
    /// Travel time in minutes
    pub duration_min: f64,
    /// Monetary cost of the leg
    pub cost: f64,
}

impl RouteLeg {
    /// Creates a leg from its distance, duration and cost.
    #[must_use]
    pub const fn new(distance_km: f64, duration_min: f64, cost: f64) -> Self {
        RouteLeg {
            distance_km,
            duration_min,
            cost,
        }
    }
}

impl fmt::Display for RouteLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} km, {} min, cost {}",
            self.distance_km, self.duration_min, self.cost
        )
    }
}

/// An edge weight carrying two alternative ways of travelling the edge.
///
/// As a [`Weight`], a route costs whatever its primary leg costs. Use [`Route::by`] to search
/// a graph on the alternative leg instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Route {
    /// Preferred leg; provides [`Weight::cost`]
    pub primary: RouteLeg,
    /// Second option for the same edge
    pub alternative: RouteLeg,
}

impl Route {
    /// Creates a route from its primary and alternative legs.
    #[must_use]
    pub const fn new(primary: RouteLeg, alternative: RouteLeg) -> Self {
        Route {
            primary,
            alternative,
        }
    }

    /// Returns the leg selected by `basis`.
    #[must_use]
    pub const fn leg(&self, basis: CostBasis) -> &RouteLeg {
        match basis {
            CostBasis::Primary => &self.primary,
            CostBasis::Alternative => &self.alternative,
        }
    }

    /// Returns a view of this route whose [`Weight::cost`] reads the leg selected by `basis`.
    #[must_use]
    pub const fn by(&self, basis: CostBasis) -> RouteCost<'_> {
        RouteCost { route: self, basis }
    }
}

impl Weight for Route {
    #[inline]
    fn cost(&self) -> f64 {
        self.primary.cost
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {}: {}",
            CostBasis::Primary,
            self.primary,
            CostBasis::Alternative,
            self.alternative
        )
    }
}

/// A [`Route`] viewed through one [`CostBasis`].
#[derive(Debug, Clone, Copy)]
pub struct RouteCost<'a> {
    route: &'a Route,
    basis: CostBasis,
}

impl RouteCost<'_> {
    /// Returns the basis this view reads.
    #[must_use]
    pub const fn basis(&self) -> CostBasis {
        self.basis
    }
}

impl Weight for RouteCost<'_> {
    #[inline]
    fn cost(&self) -> f64 {
        self.route.leg(self.basis).cost
    }
}
