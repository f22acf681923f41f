use bevy::prelude::*;

use crate::components::{AircraftState, Behavior, FlightPhase, PlanePath, SpawnOrder};
use crate::resources::{CoordinateConverter, RouteGraph, SegmentKind, TransformationResource};

/// System advancing every aircraft by one tick.
///
/// Aircraft are processed in insertion order. Junction rewrites made while updating one
/// aircraft are visible to every aircraft processed after it in the same tick.
pub fn traffic_update_system(
    mut query: Query<(&SpawnOrder, &mut AircraftState, &mut PlanePath)>,
    mut graph: ResMut<RouteGraph>,
    transform: Res<TransformationResource>,
) {
    let mut aircraft: Vec<_> = query.iter_mut().collect();
    aircraft.sort_by_key(|(order, _, _)| **order);

    for (_, mut state, mut path) in aircraft {
        update_aircraft(&mut state, &mut graph, transform.as_ref());
        path.update_points(state.spatial.position, state.spatial.heading);
    }
}

/// Advance a single aircraft by one tick.
///
/// # Arguments
/// * `state` - The aircraft to update
/// * `graph` - The shared route graph; junction decisions rewrite its links in place
/// * `converter` - Converts simulation distances to device-independent units
pub fn update_aircraft<C: CoordinateConverter>(
    state: &mut AircraftState,
    graph: &mut RouteGraph,
    converter: &C,
) {
    if state.behavior.is_frozen() {
        return;
    }

    if let Some(next_id) = graph.next_route(state.route) {
        let next = graph.get(next_id);
        let diff = converter.dips_offset(&state.spatial.position, &next.start);
        let (diff_x, diff_y) = (diff.x, diff.y);
        let window = next.transition_window(state.spatial.speed);

        debug!(
            "{}: route {}, speed {:.1}, diff ({:.2}, {:.2}), window ({:.2}, {:.2})",
            state.name,
            graph.name(state.route),
            state.spatial.speed,
            diff_x,
            diff_y,
            window.x,
            window.y
        );

        if diff_x.abs() < window.x && diff_y.abs() < window.y {
            if next.is_runway() && state.behavior == Behavior::RunwayWait {
                info!(
                    "{}: holding short of {} awaiting clearance",
                    state.name, next.name
                );
                state.behavior = Behavior::Stopped;
                return;
            }
            state.route = next_id;
            info!("{}: switching route to {}", state.name, next.name);
        }

        apply_segment_rules(state, graph, diff_y);

        let current = graph.get(state.route);
        state.spatial.heading = current.heading;
        state.spatial.speed = current.speed_at(&state.spatial.position);
    }

    if state.behavior.is_frozen() {
        return;
    }
    state.spatial.integrate();
    debug!(
        "{}: position ({:.2}, {:.2})",
        state.name, state.spatial.position.x, state.spatial.position.y
    );
}

/// Junction rewrites and segment-specific terminal conditions for the current route.
/// At most one rule fires per tick.
fn apply_segment_rules(state: &mut AircraftState, graph: &mut RouteGraph, diff_y: f64) {
    let route = state.route;

    if state.behavior.evaluates_junctions() {
        if let Some(junction) = graph.junction_at(route) {
            if let Some(target) = graph
                .junction_target(state.phase, junction)
                .filter(|target| graph.next_route(route) != Some(*target))
            {
                graph.set_next_route(route, Some(target));
                info!(
                    "{}: {:?} junction now leads to {}",
                    state.name,
                    junction,
                    graph.name(target)
                );
                return;
            }
        }
    }

    let current = graph.get(route);
    if let SegmentKind::Final(alignment) = current.kind {
        if alignment.should_align(diff_y) {
            state.spatial.position.y = current.start.y + alignment.offset;
        }
    } else if current.arrival_terminus && state.phase == FlightPhase::Arriving {
        info!("{}: arrived at {}, marking for removal", state.name, current.name);
        state.behavior = Behavior::Stopped;
        state.marked_for_removal = true;
    }
}
