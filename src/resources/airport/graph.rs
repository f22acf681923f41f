use bevy::prelude::*;
use std::collections::HashMap;

use super::config::AirportConfig;
use super::route::{RouteId, RouteSegment, SegmentKind};
use crate::components::{FlightPhase, Junction};
use crate::utils::SimError;

/// Arena of route segments. `next` links are indices into the arena and are rewritten in
/// place by the junction logic; segments are never removed.
#[derive(Resource, Debug, Clone)]
pub struct RouteGraph {
    segments: Vec<RouteSegment>,
    by_name: HashMap<String, RouteId>,
    authored_next: Vec<Option<RouteId>>,
    junction_targets: HashMap<(FlightPhase, Junction), RouteId>,
}

impl RouteGraph {
    /// Build and validate the graph. Any inconsistency is fatal: the simulation cannot start
    /// with a broken topology.
    pub fn from_config(config: &AirportConfig) -> Result<Self, SimError> {
        let mut by_name = HashMap::with_capacity(config.segments.len());
        for (index, spec) in config.segments.iter().enumerate() {
            if by_name.insert(spec.name.clone(), RouteId(index)).is_some() {
                return Err(SimError::DuplicateSegment(spec.name.clone()));
            }
        }

        let mut segments = Vec::with_capacity(config.segments.len());
        for spec in &config.segments {
            validate_spec_geometry(
                spec.name.as_str(),
                spec.precision_x,
                spec.precision_y,
                &spec.kind,
            )?;

            let next = match &spec.next {
                Some(next_name) => Some(*by_name.get(next_name).ok_or_else(|| {
                    SimError::MalformedRouteGraph {
                        segment: spec.name.clone(),
                        next: next_name.clone(),
                    }
                })?),
                None => None,
            };

            segments.push(RouteSegment {
                name: spec.name.clone(),
                start: spec.start,
                heading: spec.heading,
                speed: spec.speed,
                precision_x: spec.precision_x,
                precision_y: spec.precision_y,
                kind: spec.kind,
                arrival_terminus: spec.arrival_terminus,
                next,
            });
        }

        let mut junction_targets = HashMap::new();
        for junction in Junction::ALL {
            if !by_name.contains_key(junction.name()) {
                continue;
            }
            for phase in FlightPhase::ALL {
                let Some(target) = phase.junction_action(junction) else {
                    continue;
                };
                let id = by_name.get(target).ok_or_else(|| SimError::UnresolvedJunctionTarget {
                    junction: junction.name().to_string(),
                    target: target.to_string(),
                })?;
                junction_targets.insert((phase, junction), *id);
            }
        }

        let authored_next = segments.iter().map(|s| s.next).collect();
        info!("Built route graph with {} segments", segments.len());

        Ok(Self {
            segments,
            by_name,
            authored_next,
            junction_targets,
        })
    }

    pub fn id(&self, name: &str) -> Option<RouteId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: RouteId) -> &RouteSegment {
        &self.segments[id.0]
    }

    pub fn segment(&self, name: &str) -> Option<&RouteSegment> {
        self.id(name).map(|id| self.get(id))
    }

    pub fn name(&self, id: RouteId) -> &str {
        &self.segments[id.0].name
    }

    pub fn next_route(&self, id: RouteId) -> Option<RouteId> {
        self.segments[id.0].next
    }

    pub fn set_next_route(&mut self, id: RouteId, next: Option<RouteId>) {
        self.segments[id.0].next = next;
    }

    /// Junction decision point located at `id`, if any.
    pub fn junction_at(&self, id: RouteId) -> Option<Junction> {
        Junction::from_segment_name(&self.segments[id.0].name)
    }

    /// Segment a flight phase wants to follow out of `junction`.
    pub fn junction_target(&self, phase: FlightPhase, junction: Junction) -> Option<RouteId> {
        self.junction_targets.get(&(phase, junction)).copied()
    }

    /// Undo every junction rewrite.
    pub fn restore_authored_links(&mut self) {
        for (segment, next) in self.segments.iter_mut().zip(&self.authored_next) {
            segment.next = *next;
        }
    }
}

fn validate_spec_geometry(
    name: &str,
    precision_x: u32,
    precision_y: u32,
    kind: &SegmentKind,
) -> Result<(), SimError> {
    if precision_x == 0 || precision_y == 0 {
        return Err(SimError::InvalidSegment {
            segment: name.to_string(),
            reason: "precision coefficients must be non-zero".to_string(),
        });
    }
    if let SegmentKind::Runway { length, .. } = kind {
        if !length.is_finite() || *length <= 0.0 {
            return Err(SimError::InvalidSegment {
                segment: name.to_string(),
                reason: format!("runway length must be positive, got {}", length),
            });
        }
    }
    Ok(())
}
