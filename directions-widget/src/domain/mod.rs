//! Domain types for the directions widget.
//!
//! Coordinates, point features, routes and the enumerations that
//! parameterize routing and formatting. Types that arrive from outside
//! (query strings, posted JSON) are validated at construction.

mod error;
mod geometry;
mod profile;
mod route;
mod unit;

pub use error::DomainError;
pub use geometry::{BoundingBox, Coordinates, Feature, Point};
pub use profile::{InvalidProfile, Profile};
pub use route::{Maneuver, Route, RouteLeg, Step};
pub use unit::{Unit, format_duration};
