//! Rectangular latitude/longitude bounds.

use serde::{Deserialize, Serialize};

use crate::geo::impls::GeoPoint2d;
use crate::geo::{angular_distance, distance, heading, interpolate, offset, GeoPoint, NewGeoPoint};
use crate::shape::Shape;

/// Heading from the north-west corner towards the south-east one.
const SOUTH_EAST: f64 = 135.0;

/// Rectangular region on the surface of the Earth, given by its north-east and south-west
/// corners.
///
/// The north-east latitude is never below the south-west latitude of a non-empty box. Longitudes
/// are not ordered: a box whose east edge is west of its west edge crosses the antimeridian (see
/// [`crosses_antimeridian`](Self::crosses_antimeridian)). Only [`from_corners`](Self::from_corners)
/// and the operations built on it produce such boxes. [`from_coordinates`](Self::from_coordinates)
/// and [`including_bounds`](Self::including_bounds) treat longitude as a plain interval, so boxes
/// that should span the antimeridian come out covering the rest of the world instead.
///
/// Bounds are immutable: every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateBounds {
    north_east: GeoPoint2d,
    south_west: GeoPoint2d,
}

impl CoordinateBounds {
    /// Smallest box containing every point, computed as a min/max of latitudes and longitudes.
    ///
    /// Without points the result is empty (see [`is_empty`](Self::is_empty)): its north-east corner
    /// is `(-90, -180)` and its south-west corner is `(90, 180)`. Invalid points (NaN) are skipped.
    pub fn from_coordinates<'a, P>(points: impl IntoIterator<Item = &'a P>) -> Self
    where
        P: GeoPoint<Num = f64> + 'a,
    {
        let (mut north, mut east) = (-90.0_f64, -180.0_f64);
        let (mut south, mut west) = (90.0_f64, 180.0_f64);

        for point in points {
            north = north.max(point.lat());
            south = south.min(point.lat());
            east = east.max(point.lon());
            west = west.min(point.lon());
        }

        Self {
            north_east: GeoPoint2d::latlon(north, east),
            south_west: GeoPoint2d::latlon(south, west),
        }
    }

    /// Box with the two given opposite corners.
    ///
    /// It is ambiguous whether the box spans from the longitude of `a` eastwards to `b` or the
    /// other way around. The narrower of the two variants is used, so corners more than 180
    /// degrees of longitude apart give a box crossing the antimeridian.
    pub fn from_corners(a: &impl GeoPoint<Num = f64>, b: &impl GeoPoint<Num = f64>) -> Self {
        let north = a.lat().max(b.lat());
        let south = a.lat().min(b.lat());

        let (west, east) = if (a.lon() - b.lon()).abs() <= 180.0 {
            (a.lon().min(b.lon()), a.lon().max(b.lon()))
        } else {
            (a.lon().max(b.lon()), a.lon().min(b.lon()))
        };

        Self {
            north_east: GeoPoint2d::latlon(north, east),
            south_west: GeoPoint2d::latlon(south, west),
        }
    }

    /// Union of the bounds of all the shapes. Shapes without bounds are skipped.
    ///
    /// Returns `None` if no shape has bounds.
    pub fn from_shapes<'a, S>(shapes: impl IntoIterator<Item = &'a S>) -> Option<Self>
    where
        S: Shape + ?Sized + 'a,
    {
        let bounds = shapes
            .into_iter()
            .filter_map(|shape| shape.bounds())
            .reduce(|acc, bounds| acc.including_bounds(&bounds));

        if bounds.is_none() {
            log::debug!("None of the shapes has bounds");
        }

        bounds
    }

    /// North-east corner.
    pub fn north_east(&self) -> GeoPoint2d {
        self.north_east
    }

    /// South-west corner.
    pub fn south_west(&self) -> GeoPoint2d {
        self.south_west
    }

    /// North-west corner.
    pub fn north_west(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.north_east.lat(), self.south_west.lon())
    }

    /// South-east corner.
    pub fn south_east(&self) -> GeoPoint2d {
        GeoPoint2d::latlon(self.south_west.lat(), self.north_east.lon())
    }

    /// Returns true if the box contains no points, e.g. it was built from an empty list of
    /// coordinates.
    pub fn is_empty(&self) -> bool {
        self.north_east.lat() < self.south_west.lat()
    }

    /// Returns true if the east edge is west of the west edge.
    pub fn crosses_antimeridian(&self) -> bool {
        self.north_east.lon() < self.south_west.lon()
    }

    /// Returns true if the point is inside the box or on its edge.
    pub fn contains(&self, point: &impl GeoPoint<Num = f64>) -> bool {
        let lat = point.lat();
        let lon = point.lon();

        if !(self.south_west.lat() <= lat && lat <= self.north_east.lat()) {
            return false;
        }

        if self.crosses_antimeridian() {
            lon >= self.south_west.lon() || lon <= self.north_east.lon()
        } else {
            self.south_west.lon() <= lon && lon <= self.north_east.lon()
        }
    }

    /// Equirectangular distance between the north-east and south-west corners in meters.
    pub fn diagonal_distance(&self) -> f64 {
        distance(&self.north_east, &self.south_west)
    }

    /// Great circle midpoint of the north-east and south-west corners.
    ///
    /// Bounds of a single point have that point as their center.
    pub fn center(&self) -> GeoPoint2d {
        if angular_distance(&self.north_east, &self.south_west) == 0.0 {
            return self.north_east;
        }

        interpolate(&self.north_east, &self.south_west, 0.5)
    }

    /// Bounds centered at `center` that contain the corner of these bounds farther from it.
    ///
    /// The far corner is kept and the opposite corner is placed on the great circle from the far
    /// corner through `center`, at twice the distance.
    pub fn derive(&self, center: &impl GeoPoint<Num = f64>) -> Self {
        let north_east_is_farther =
            distance(center, &self.north_east) > distance(center, &self.south_west);
        let far = if north_east_is_farther {
            self.north_east
        } else {
            self.south_west
        };

        if angular_distance(&far, center) == 0.0 {
            return Self::from_corners(&far, &far);
        }

        let derived = interpolate(&far, center, 2.0);
        Self::from_corners(&far, &derived)
    }

    /// Moves the bounds so they are centered at `center`, keeping their size.
    ///
    /// Both corners are offset by the heading and distance between the current center and the
    /// new one.
    pub fn translate_to(&self, center: &impl GeoPoint<Num = f64>) -> Self {
        let current = self.center();
        let shift = distance(&current, center);
        let direction = heading(&current, center);

        let north_east = offset(&self.north_east, shift, direction);
        let south_west = offset(&self.south_west, shift, direction);

        Self::from_corners(&north_east, &south_west)
    }

    /// Moves the south-east corner further south-east by `offset_factor` times the length of the
    /// north-west to south-east diagonal. The north-west corner stays in place.
    pub fn extend_south_east(&self, offset_factor: f64) -> Self {
        let north_west = self.north_west();
        let south_east = self.south_east();

        let diagonal = distance(&north_west, &south_east);
        let extended = offset(&south_east, diagonal * offset_factor, SOUTH_EAST);

        Self::from_corners(&north_west, &extended)
    }

    /// Scales the bounds around their diagonal so that the corner to corner distance is in
    /// `[min, max]` meters.
    ///
    /// Bounds already in range are returned as is. Bounds of a single point, or with an invalid
    /// corner, cannot be scaled and are also returned unchanged.
    pub fn bound_to_distance(&self, min: f64, max: f64) -> Self {
        let visible = self.diagonal_distance();
        if visible >= min && visible <= max {
            return *self;
        }

        if visible == 0.0 || !visible.is_finite() {
            return *self;
        }

        let bounded = visible.max(min).min(max);
        let delta = (1.0 + bounded / visible) / 2.0;
        let north_east = interpolate(&self.south_west, &self.north_east, delta);
        let south_west = interpolate(&self.north_east, &self.south_west, delta);

        Self::from_corners(&north_east, &south_west)
    }

    /// Bounds extended to contain `other` as well.
    ///
    /// Corners are combined component-wise, so the result is wrong if either box crosses the
    /// antimeridian.
    pub fn including_bounds(&self, other: &Self) -> Self {
        Self {
            north_east: GeoPoint2d::latlon(
                self.north_east.lat().max(other.north_east.lat()),
                self.north_east.lon().max(other.north_east.lon()),
            ),
            south_west: GeoPoint2d::latlon(
                self.south_west.lat().min(other.south_west.lat()),
                self.south_west.lon().min(other.south_west.lon()),
            ),
        }
    }
}
