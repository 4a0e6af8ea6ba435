//! Codec for [Google's Encoded Polyline Algorithm Format](https://developers.google.com/maps/documentation/utilities/polylinealgorithm).
//!
//! Every coordinate is scaled by a [`Precision`] factor, rounded, and stored as the difference
//! from the previous point (the first point is relative to `(0, 0)`). Each signed difference is
//! zigzag encoded and written as 5-bit groups, least significant first, with `0x20` marking that
//! another group follows. Every group is offset by 63 so the output is printable ASCII in
//! `[63, 126]`. Latitude is written before longitude.
//!
//! ```
//! use gaia_types::polyline::{decode, encode};
//! use gaia_types::{latlon, Precision};
//!
//! let path = [latlon!(38.5, -120.2), latlon!(40.7, -120.95), latlon!(43.252, -126.453)];
//! let encoded = encode(&path, Precision::E5);
//! assert_eq!(encoded, "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
//! assert_eq!(decode(&encoded, Precision::E5), Some(path.to_vec()));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{InvalidPrecision, PolylineError};
use crate::geo::impls::GeoPoint2d;
use crate::geo::{GeoPoint, NewGeoPoint};

/// Offset added to every 5-bit group to make it printable.
const CHAR_OFFSET: u8 = 63;
/// Bit set on every group but the last one of a value.
const CONTINUATION: u64 = 0x20;
/// Mask of the payload bits of a group.
const GROUP_MASK: u64 = 0x1f;
/// Upper bound for the number of groups in one value.
const MAX_GROUPS: usize = 6;
/// Zigzag encoded values must stay below this to fit into [`MAX_GROUPS`] groups.
const MAX_ZIGZAG: f64 = (1u64 << (5 * MAX_GROUPS)) as f64;
/// Scaled coordinates are clamped to this magnitude so deltas between them cannot overflow.
const MAX_SCALED: i64 = 1 << 40;

/// Scale factor applied to coordinates before rounding them to integers.
///
/// Any accepted factor lets every valid coordinate round trip through [`encode`] and [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Precision(f64);

impl Precision {
    /// Five decimal digits, the format default.
    pub const E5: Self = Self(1e5);
    /// Six decimal digits, used by some routing providers.
    pub const E6: Self = Self(1e6);

    /// Creates a precision from a custom scale factor, e.g. `1e4`.
    ///
    /// The factor must be positive and a longitude step of 360 degrees must still fit into six
    /// groups, which caps it at about 1.49e6.
    pub fn new(factor: f64) -> Result<Self, InvalidPrecision> {
        let max_step = (360.0 * factor).round();
        if factor > 0.0 && 2.0 * max_step < MAX_ZIGZAG {
            Ok(Self(factor))
        } else {
            Err(InvalidPrecision { factor })
        }
    }

    /// Scale factor.
    pub const fn factor(&self) -> f64 {
        self.0
    }

    fn scale(&self, value: f64) -> i64 {
        // `as` saturates and maps NaN to 0. The clamp keeps deltas of scaled values in i64 range.
        ((value * self.0).round() as i64).clamp(-MAX_SCALED, MAX_SCALED)
    }
}

impl TryFrom<f64> for Precision {
    type Error = InvalidPrecision;

    fn try_from(factor: f64) -> Result<Self, Self::Error> {
        Self::new(factor)
    }
}

impl From<Precision> for f64 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::E5
    }
}

/// Encodes the points into a polyline string.
///
/// Encoding never fails. Coordinates outside of the valid range (including infinities) are still
/// written, but the result may hold values longer than [`decode`] accepts.
pub fn encode<'a, P>(points: impl IntoIterator<Item = &'a P>, precision: Precision) -> String
where
    P: GeoPoint<Num = f64> + 'a,
{
    let mut encoded = String::new();
    let mut prev_lat = 0;
    let mut prev_lon = 0;

    for point in points {
        let lat = precision.scale(point.lat());
        let lon = precision.scale(point.lon());

        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lon - prev_lon, &mut encoded);

        prev_lat = lat;
        prev_lon = lon;
    }

    encoded
}

fn encode_value(value: i64, out: &mut String) {
    let mut zigzag = if value < 0 {
        !(value << 1) as u64
    } else {
        (value << 1) as u64
    };

    while zigzag >= CONTINUATION {
        out.push(group_char((zigzag & GROUP_MASK) | CONTINUATION));
        zigzag >>= 5;
    }
    out.push(group_char(zigzag));
}

fn group_char(group: u64) -> char {
    // Groups are at most 0x3f, so the sum always fits into printable ASCII.
    char::from(group as u8 + CHAR_OFFSET)
}

/// Decodes a polyline string, or returns `None` if it is malformed.
///
/// Decoding is all or nothing: a single bad value discards the whole path. An empty string is a
/// valid empty path.
pub fn decode(encoded: &str, precision: Precision) -> Option<Vec<GeoPoint2d>> {
    match try_decode(encoded, precision) {
        Ok(points) => Some(points),
        Err(err) => {
            log::debug!("Failed to decode polyline of {} bytes: {err}", encoded.len());
            None
        }
    }
}

/// Decodes a polyline string, reporting why it is malformed.
pub fn try_decode(encoded: &str, precision: Precision) -> Result<Vec<GeoPoint2d>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut index = 0;
    let mut lat = 0i64;
    let mut lon = 0i64;
    let mut points = Vec::new();

    while index < bytes.len() {
        lat += decode_value(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(PolylineError::MissingLongitude { offset: index });
        }
        lon += decode_value(bytes, &mut index)?;

        points.push(GeoPoint2d::latlon(
            lat as f64 / precision.factor(),
            lon as f64 / precision.factor(),
        ));
    }

    log::trace!("Decoded {} points from {} bytes", points.len(), bytes.len());

    Ok(points)
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result = 0u64;
    let mut shift = 0;

    for _ in 0..MAX_GROUPS {
        let offset = *index;
        let Some(&byte) = bytes.get(offset) else {
            return Err(PolylineError::Truncated { offset });
        };
        if !(CHAR_OFFSET..=126).contains(&byte) {
            return Err(PolylineError::InvalidByte { offset, byte });
        }
        *index += 1;

        let group = u64::from(byte - CHAR_OFFSET);
        result |= (group & GROUP_MASK) << shift;
        shift += 5;

        if group & CONTINUATION == 0 {
            let value = (result >> 1) as i64;
            return Ok(if result & 1 == 1 { !value } else { value });
        }
    }

    Err(PolylineError::Overflow { offset: *index })
}
