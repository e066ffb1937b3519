//! View-model construction for the instructions list.
//!
//! Everything here is pure: a route and a render context go in, a
//! [`RouteView`] comes out. Presentation lives in the templates.

use crate::domain::{Coordinates, Maneuver, Route, Step, Unit, format_duration};

/// Produces localized, human-readable maneuver text for a step.
pub trait InstructionCompiler: Send + Sync {
    fn compile(&self, language: &str, step: &Step) -> String;
}

impl<F> InstructionCompiler for F
where
    F: Fn(&str, &Step) -> String + Send + Sync,
{
    fn compile(&self, language: &str, step: &Step) -> String {
        self(language, step)
    }
}

/// Inputs to [`RouteView::build`] beyond the route itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub route_index: usize,
    pub route_count: usize,
    pub unit: Unit,
    pub language: &'a str,
    pub compiler: Option<&'a dyn InstructionCompiler>,
}

/// Everything the instructions template displays for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteView {
    pub summary: SummaryView,
    pub steps: Vec<StepView>,
}

/// Route summary header.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    pub distance: String,
    pub duration: String,
    /// One selector per route; empty when there is a single route.
    pub selectors: Vec<RouteSelectorView>,
}

impl SummaryView {
    pub fn is_multiple(&self) -> bool {
        !self.selectors.is_empty()
    }
}

/// A route-switch radio control.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSelectorView {
    pub index: usize,
    /// 1-based label shown to the user.
    pub label: usize,
    pub selected: bool,
}

/// One maneuver in the steps list.
#[derive(Debug, Clone, PartialEq)]
pub struct StepView {
    pub icon: String,
    pub instruction: String,
    /// Formatted distance to the next maneuver; absent for zero distance.
    pub distance: Option<String>,
    pub location: Coordinates,
}

impl RouteView {
    /// Build the view model for `route`.
    ///
    /// Only the first leg's steps are listed.
    pub fn build(route: &Route, ctx: &RenderContext<'_>) -> Self {
        let selectors = if ctx.route_count > 1 {
            (0..ctx.route_count)
                .map(|index| RouteSelectorView {
                    index,
                    label: index + 1,
                    selected: index == ctx.route_index,
                })
                .collect()
        } else {
            Vec::new()
        };

        let steps = route
            .first_leg_steps()
            .iter()
            .map(|step| StepView {
                icon: maneuver_icon(&step.maneuver),
                instruction: match ctx.compiler {
                    Some(compiler) => compiler.compile(ctx.language, step),
                    None => step.maneuver.instruction.clone(),
                },
                distance: (step.distance != 0.0 && !step.distance.is_nan())
                    .then(|| ctx.unit.format_distance(step.distance)),
                location: step.maneuver.location,
            })
            .collect();

        Self {
            summary: SummaryView {
                distance: ctx.unit.format_distance(route.distance),
                duration: format_duration(route.duration),
                selectors,
            },
            steps,
        }
    }

    /// Maneuver locations, in list order.
    pub fn step_locations(&self) -> Vec<Coordinates> {
        self.steps.iter().map(|s| s.location).collect()
    }
}

/// Icon key for a maneuver, used as the `directions-icon-*` class suffix.
///
/// Roundabouts and rotaries share one icon, arrive/depart keep their type
/// name, everything else uses the modifier (or the type when there is no
/// modifier) with whitespace runs replaced by `-` and lower-cased.
///
/// ```
/// use directions_widget::domain::{Coordinates, Maneuver};
/// use directions_widget::view::maneuver_icon;
///
/// let m = Maneuver {
///     kind: "turn".into(),
///     modifier: Some("slight left".into()),
///     location: Coordinates::new(0.0, 0.0),
///     instruction: String::new(),
///     exit: None,
/// };
/// assert_eq!(maneuver_icon(&m), "slight-left");
/// ```
pub fn maneuver_icon(maneuver: &Maneuver) -> String {
    match maneuver.kind.as_str() {
        "roundabout" | "rotary" => "roundabout".to_string(),
        "arrive" | "depart" => maneuver.kind.clone(),
        _ => {
            let source = maneuver
                .modifier
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(&maneuver.kind);
            hyphenate(source).to_lowercase()
        }
    }
}

/// Replace each run of whitespace with a single `-`.
fn hyphenate(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn with(kind: String, modifier: Option<String>) -> Maneuver {
        Maneuver {
            kind,
            modifier,
            location: Coordinates::new(0.0, 0.0),
            instruction: String::new(),
            exit: None,
        }
    }

    proptest! {
        /// Roundabout-like maneuvers always collapse to one icon
        #[test]
        fn roundabouts_collapse(kind in "roundabout|rotary", modifier in proptest::option::of("[a-z ]{0,12}")) {
            prop_assert_eq!(maneuver_icon(&with(kind, modifier)), "roundabout");
        }

        /// Derived icons never contain whitespace or upper-case letters
        #[test]
        fn derived_icons_are_normalized(kind in "[A-Za-z ]{1,12}", modifier in proptest::option::of("[A-Za-z \t]{1,12}")) {
            let icon = maneuver_icon(&with(kind.clone(), modifier));
            if kind != "arrive" && kind != "depart" {
                prop_assert!(!icon.chars().any(char::is_whitespace));
                prop_assert_eq!(icon.to_lowercase(), icon.clone());
            }
        }
    }
}
