//! One-shot device location.
//!
//! The dashboard asks for foreground location permission once, fetches a
//! single position if granted, and shows it on the map. There is no tracking
//! loop, retry or timeout: a denied permission leaves the map empty.
//!
//! Platform access sits behind [`LocationProvider`] so the fetch can be
//! exercised with a simulated provider on the host.

use thiserror::Error;

use crate::config::{MAP_LATITUDE_DELTA, MAP_LONGITUDE_DELTA};

/// WGS84 latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self { latitude, longitude }
    }

    /// Both components inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Answer to a foreground permission request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PermissionStatus {
    Granted,
    Denied,
    /// The user dismissed the prompt without answering.
    Undetermined,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum LocationError {
    #[error("location services unavailable")]
    Unavailable,
    #[error("position request timed out")]
    Timeout,
    #[error("provider returned an out-of-range coordinate")]
    InvalidCoordinate,
}

/// Platform location access.
pub trait LocationProvider {
    fn request_foreground_permission(&mut self) -> PermissionStatus;

    fn current_position(&mut self) -> Result<Coordinate, LocationError>;
}

/// Outcome of the one-shot fetch as seen by the map card.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum LocationState {
    /// Fetch still running.
    #[default]
    Pending,
    Resolved(Coordinate),
    /// Permission was not granted; the map is not rendered.
    Denied,
    Failed(LocationError),
}

impl LocationState {
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Resolved(coord) => Some(*coord),
            _ => None,
        }
    }

    /// Whether the fetch has finished, successfully or not.
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Request permission, then fetch one position.
pub fn locate_once<P>(provider: &mut P) -> LocationState
where
    P: LocationProvider + ?Sized,
{
    if provider.request_foreground_permission() != PermissionStatus::Granted {
        return LocationState::Denied;
    }

    match provider.current_position() {
        Ok(coord) if coord.is_valid() => LocationState::Resolved(coord),
        Ok(_) => LocationState::Failed(LocationError::InvalidCoordinate),
        Err(err) => LocationState::Failed(err),
    }
}

// =============================================================================
// Map Region
// =============================================================================

/// Visible map area centered on a coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Initial region around `center` with the default zoom.
    pub const fn around(center: Coordinate) -> Self {
        Self {
            center,
            latitude_delta: MAP_LATITUDE_DELTA,
            longitude_delta: MAP_LONGITUDE_DELTA,
        }
    }

    #[inline]
    fn west(&self) -> f64 {
        self.center.longitude - self.longitude_delta / 2.0
    }

    #[inline]
    fn north(&self) -> f64 {
        self.center.latitude + self.latitude_delta / 2.0
    }

    pub fn contains(
        &self,
        coord: Coordinate,
    ) -> bool {
        let dx = coord.longitude - self.west();
        let dy = self.north() - coord.latitude;
        (0.0..=self.longitude_delta).contains(&dx) && (0.0..=self.latitude_delta).contains(&dy)
    }

    /// Pixel offset of `coord` inside a `width` x `height` map, north up.
    ///
    /// Returns `None` for coordinates outside the region.
    pub fn project(
        &self,
        coord: Coordinate,
        width: u32,
        height: u32,
    ) -> Option<(i32, i32)> {
        if !self.contains(coord) {
            return None;
        }
        let fx = (coord.longitude - self.west()) / self.longitude_delta;
        let fy = (self.north() - coord.latitude) / self.latitude_delta;
        let x = libm::round(fx * f64::from(width)) as i32;
        let y = libm::round(fy * f64::from(height)) as i32;
        Some((x.min(width as i32 - 1), y.min(height as i32 - 1)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
