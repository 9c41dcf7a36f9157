//! Grid coordinates, rectangular footprints and radius metrics.
use std::fmt;

/// Discrete grid position expressed in tile coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate shifted by the given offsets, saturating at the i32 range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Distance rule used when expanding a footprint by a radius.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RadiusMetric {
    /// Square rings: diagonal neighbours count as distance 1.
    #[default]
    Chebyshev,
    /// Diamond rings: only orthogonal steps count.
    Manhattan,
    /// Disk: `dx² + dy² <= radius²`.
    Euclidean,
}

impl RadiusMetric {
    /// Returns true if a cell `dx`/`dy` steps away from a footprint lies within `radius`.
    ///
    /// Offsets are absolute gaps to the nearest footprint cell, so `(0, 0)` means
    /// the cell is part of the footprint.
    pub fn within(self, dx: u32, dy: u32, radius: u32) -> bool {
        let (dx, dy, radius) = (u64::from(dx), u64::from(dy), u64::from(radius));
        match self {
            RadiusMetric::Chebyshev => dx.max(dy) <= radius,
            RadiusMetric::Manhattan => dx + dy <= radius,
            // squares fit in u64; only the sum can overflow
            RadiusMetric::Euclidean => (dx * dx).saturating_add(dy * dy) <= radius * radius,
        }
    }
}

/// Axis-aligned rectangle of coordinates occupied by a structure.
///
/// `origin` is the lowest `x`/`y` corner. Width and height are at least 1; a
/// single-tile footprint is produced by [`Footprint::point`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    origin: Coord,
    width: u32,
    height: u32,
}

impl Footprint {
    /// Largest radius [`radius_coords`](Self::radius_coords) expands by.
    pub const MAX_RADIUS: u32 = 1024;

    /// Creates a footprint; zero extents are clamped to 1.
    pub fn new(origin: Coord, width: u32, height: u32) -> Self {
        Self {
            origin,
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn point(origin: Coord) -> Self {
        Self::new(origin, 1, 1)
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Highest `x`/`y` corner (inclusive).
    pub fn far_corner(&self) -> Coord {
        self.origin
            .offset(extent_offset(self.width), extent_offset(self.height))
    }

    pub fn contains(&self, coord: Coord) -> bool {
        let far = self.far_corner();
        (self.origin.x..=far.x).contains(&coord.x) && (self.origin.y..=far.y).contains(&coord.y)
    }

    /// Iterates every coordinate of the footprint, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let origin = self.origin;
        let far = self.far_corner();
        (origin.y..=far.y).flat_map(move |y| (origin.x..=far.x).map(move |x| Coord::new(x, y)))
    }

    /// Absolute gap between `coord` and the nearest footprint cell on each axis.
    pub fn gap(&self, coord: Coord) -> (u32, u32) {
        let far = self.far_corner();
        let dx = axis_gap(coord.x, self.origin.x, far.x);
        let dy = axis_gap(coord.y, self.origin.y, far.y);
        (dx, dy)
    }

    /// Coordinates around the footprint within `radius` under `metric`.
    ///
    /// Footprint cells are never included. `radius` is clamped to
    /// [`MAX_RADIUS`](Self::MAX_RADIUS). Results come out row by row, so the
    /// sequence is stable for identical inputs.
    pub fn radius_coords(
        &self,
        radius: u32,
        metric: RadiusMetric,
    ) -> impl Iterator<Item = Coord> + use<> {
        let footprint = *self;
        let radius = radius.min(Self::MAX_RADIUS);
        let reach = i32::try_from(radius).unwrap_or(i32::MAX);
        let low = footprint.origin.offset(-reach, -reach);
        let far = footprint.far_corner();
        let high = far.offset(reach, reach);

        (low.y..=high.y)
            .flat_map(move |y| (low.x..=high.x).map(move |x| Coord::new(x, y)))
            .filter(move |&coord| {
                let (dx, dy) = footprint.gap(coord);
                (dx, dy) != (0, 0) && metric.within(dx, dy, radius)
            })
    }
}

impl From<Coord> for Footprint {
    fn from(origin: Coord) -> Self {
        Self::point(origin)
    }
}

fn extent_offset(extent: u32) -> i32 {
    i32::try_from(extent.saturating_sub(1)).unwrap_or(i32::MAX)
}

fn axis_gap(value: i32, low: i32, high: i32) -> u32 {
    if value < low {
        low.abs_diff(value)
    } else if value > high {
        value.abs_diff(high)
    } else {
        0
    }
}
