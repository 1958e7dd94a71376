//! Reclamation resolver: drops dead entities at the end of a tick.
//!
//! Removal happens here and nowhere else, after every other phase has
//! finished iterating. The field counts as cleared when this pass removes the
//! last asteroid; that transition is reported once.

use tracing::info;

use crate::arena::Arena;
use crate::config::SimConfig;
use crate::entity::Ship;
use crate::event::{SimEvent, TickReport};

use super::Resolver;

/// Resolver that removes every dead asteroid and projectile.
#[derive(Debug, Clone, Default)]
pub struct ReclaimResolver;

impl ReclaimResolver {
    /// Creates a new reclamation resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for ReclaimResolver {
    fn name(&self) -> &'static str {
        "reclaim"
    }

    fn resolve(&self, arena: &mut Arena, _ship: &mut Ship, _config: &SimConfig, report: &mut TickReport) {
        let reclaimed = arena.reclaim();
        report.reclaimed = reclaimed;

        if reclaimed.asteroids > 0 && arena.is_field_cleared() {
            info!(tick = report.tick, "field cleared");
            report.push(SimEvent::FieldCleared);
        }
    }
}
