//! Camera coordination policy.

use std::cell::RefCell;

use crate::domain::{BoundingBox, Coordinates, Feature};

use super::{FitBoundsOptions, FlyToOptions, MapCamera};

/// A camera movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    FitBounds { bounds: BoundingBox, padding: f64 },
    FlyTo { center: Coordinates, zoom: Option<f64> },
}

impl CameraCommand {
    /// Camera movement after `target` was chosen for one of the endpoints.
    ///
    /// With two distinct endpoints the map frames both; otherwise it flies to
    /// `target`.
    pub fn toward(
        origin: Option<&Feature>,
        destination: Option<&Feature>,
        target: Coordinates,
        padding: f64,
    ) -> Self {
        match Self::fit_both(origin, destination, padding) {
            Some(fit) => fit,
            None => CameraCommand::FlyTo {
                center: target,
                zoom: None,
            },
        }
    }

    /// Camera movement framing whichever endpoints exist.
    pub fn frame(
        origin: Option<&Feature>,
        destination: Option<&Feature>,
        padding: f64,
    ) -> Option<Self> {
        Self::fit_both(origin, destination, padding).or_else(|| {
            origin.or(destination).map(|f| CameraCommand::FlyTo {
                center: f.coordinates(),
                zoom: None,
            })
        })
    }

    fn fit_both(
        origin: Option<&Feature>,
        destination: Option<&Feature>,
        padding: f64,
    ) -> Option<Self> {
        let (origin, destination) = origin.zip(destination)?;
        if origin.geometry == destination.geometry {
            return None;
        }
        BoundingBox::extent([origin, destination])
            .map(|bounds| CameraCommand::FitBounds { bounds, padding })
    }

    pub fn apply(&self, map: &dyn MapCamera) {
        match *self {
            CameraCommand::FitBounds { bounds, padding } => {
                map.fit_bounds(bounds, FitBoundsOptions { padding })
            }
            CameraCommand::FlyTo { center, zoom } => map.fly_to(FlyToOptions { center, zoom }),
        }
    }
}

/// A [`MapCamera`] that records the commands it receives.
#[derive(Debug, Default)]
pub struct CameraRecorder {
    commands: RefCell<Vec<CameraCommand>>,
}

impl CameraRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> Vec<CameraCommand> {
        self.commands.borrow().clone()
    }

    /// Drain the recorded commands.
    pub fn take(&self) -> Vec<CameraCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }
}

impl MapCamera for CameraRecorder {
    fn fit_bounds(&self, bounds: BoundingBox, options: FitBoundsOptions) {
        self.commands.borrow_mut().push(CameraCommand::FitBounds {
            bounds,
            padding: options.padding,
        });
    }

    fn fly_to(&self, options: FlyToOptions) {
        tracing::debug!(center = %options.center, "fly to");
        self.commands.borrow_mut().push(CameraCommand::FlyTo {
            center: options.center,
            zoom: options.zoom,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(lng: f64, lat: f64, id: &str) -> Feature {
        Feature::point(Coordinates::new(lng, lat), id)
    }

    #[test]
    fn distinct_endpoints_fit_bounds() {
        let a = feature(-0.1, 51.5, "origin");
        let b = feature(2.35, 48.85, "destination");

        let command = CameraCommand::toward(Some(&a), Some(&b), b.coordinates(), 80.0);

        assert_eq!(
            command,
            CameraCommand::FitBounds {
                bounds: BoundingBox {
                    southwest: Coordinates::new(-0.1, 48.85),
                    northeast: Coordinates::new(2.35, 51.5),
                },
                padding: 80.0,
            }
        );
    }

    #[test]
    fn equal_endpoints_fly_to_target() {
        // Tags differ but the geometry is the same
        let a = feature(1.0, 2.0, "origin");
        let b = feature(1.0, 2.0, "destination");

        let command = CameraCommand::toward(Some(&a), Some(&b), Coordinates::new(1.0, 2.0), 80.0);

        assert_eq!(
            command,
            CameraCommand::FlyTo {
                center: Coordinates::new(1.0, 2.0),
                zoom: None
            }
        );
    }

    #[test]
    fn single_endpoint_flies_to_target() {
        let a = feature(1.0, 2.0, "origin");
        let command = CameraCommand::toward(Some(&a), None, Coordinates::new(1.0, 2.0), 80.0);
        assert!(matches!(command, CameraCommand::FlyTo { .. }));
    }

    #[test]
    fn frame_without_endpoints_does_nothing() {
        assert_eq!(CameraCommand::frame(None, None, 80.0), None);

        let b = feature(3.0, 4.0, "destination");
        assert_eq!(
            CameraCommand::frame(None, Some(&b), 80.0),
            Some(CameraCommand::FlyTo {
                center: Coordinates::new(3.0, 4.0),
                zoom: None
            })
        );
    }

    #[test]
    fn recorder_applies_commands_in_order() {
        let recorder = CameraRecorder::new();
        let fly = CameraCommand::FlyTo {
            center: Coordinates::new(5.0, 6.0),
            zoom: Some(16.0),
        };
        fly.apply(&recorder);
        CameraCommand::frame(
            Some(&feature(0.0, 0.0, "origin")),
            Some(&feature(1.0, 1.0, "destination")),
            20.0,
        )
        .unwrap()
        .apply(&recorder);

        let commands = recorder.take();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0], fly);
        assert!(matches!(commands[1], CameraCommand::FitBounds { padding, .. } if padding == 20.0));
        assert!(recorder.commands().is_empty());
    }
}
