//! Background location fetch.
//!
//! The dashboard asks for a position once when it mounts. The fetch runs
//! [`locate_once`] on its own thread and sends a single [`LocationState`]
//! back; the render loop polls it every frame without blocking and shows
//! [`LocationState::Pending`] until the answer arrives.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use fleet_common::location::{Coordinate, LocationError, LocationProvider, LocationState, PermissionStatus, locate_once};
use tracing::{debug, error, info, warn};

/// Desktop stand-in for the platform location service.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedLocation {
    pub coordinate: Coordinate,
    /// Answer the permission prompt with "denied".
    pub denied: bool,
    /// Delay before the position is reported.
    pub latency: Duration,
}

impl SimulatedLocation {
    pub const fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            denied: false,
            latency: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn with_denied(
        self,
        denied: bool,
    ) -> Self {
        Self { denied, ..self }
    }

    #[must_use]
    pub const fn with_latency(
        self,
        latency: Duration,
    ) -> Self {
        Self { latency, ..self }
    }
}

impl LocationProvider for SimulatedLocation {
    fn request_foreground_permission(&mut self) -> PermissionStatus {
        if self.denied { PermissionStatus::Denied } else { PermissionStatus::Granted }
    }

    fn current_position(&mut self) -> Result<Coordinate, LocationError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        Ok(self.coordinate)
    }
}

/// One in-flight (or finished) location request.
#[derive(Debug)]
pub struct LocationFetch {
    state: LocationState,
    rx: Option<Receiver<LocationState>>,
}

impl LocationFetch {
    /// Start the fetch on a background thread.
    pub fn spawn<P>(provider: P) -> Self
    where
        P: LocationProvider + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let spawned = thread::Builder::new().name("location".into()).spawn(move || {
            let mut provider = provider;
            // Receiver gone means the app already exited
            let _ = tx.send(locate_once(&mut provider));
        });

        match spawned {
            Ok(_) => {
                debug!("location fetch started");
                Self {
                    state: LocationState::Pending,
                    rx: Some(rx),
                }
            }
            Err(err) => {
                warn!(%err, "location thread failed to start");
                Self::settled(LocationState::Failed(LocationError::Unavailable))
            }
        }
    }

    /// A fetch that has already finished with `state`.
    pub fn settled(state: LocationState) -> Self {
        report(&state);
        Self { state, rx: None }
    }

    /// Latest known state. Picks up the thread's answer if it has arrived.
    pub fn poll(&mut self) -> LocationState {
        let Some(received) = self.rx.as_ref().map(Receiver::try_recv) else {
            return self.state;
        };
        match received {
            Ok(state) => self.finish(state),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => self.finish(LocationState::Failed(LocationError::Unavailable)),
        }
        self.state
    }

    /// Block for up to `timeout` waiting for the answer.
    ///
    /// Still `Pending` if the thread did not answer in time.
    pub fn wait(
        &mut self,
        timeout: Duration,
    ) -> LocationState {
        let Some(received) = self.rx.as_ref().map(|rx| rx.recv_timeout(timeout)) else {
            return self.state;
        };
        match received {
            Ok(state) => self.finish(state),
            Err(RecvTimeoutError::Timeout) => warn!(?timeout, "location still pending"),
            Err(RecvTimeoutError::Disconnected) => self.finish(LocationState::Failed(LocationError::Unavailable)),
        }
        self.state
    }

    #[inline]
    pub const fn state(&self) -> LocationState {
        self.state
    }

    fn finish(
        &mut self,
        state: LocationState,
    ) {
        report(&state);
        self.state = state;
        self.rx = None;
    }
}

fn report(state: &LocationState) {
    match state {
        LocationState::Pending => {}
        LocationState::Resolved(coord) => {
            info!(lat = coord.latitude, lon = coord.longitude, "location resolved");
        }
        LocationState::Denied => error!("permission to access location was denied"),
        LocationState::Failed(err) => error!(%err, "location fetch failed"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
