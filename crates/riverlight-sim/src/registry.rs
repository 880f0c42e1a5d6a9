//! Ordered entity registries.
//!
//! hecs iterates archetypes, not insertion order, so anything whose update
//! order or reported index matters goes through these registries instead.

use glam::Vec2;
use hecs::{Entity, World};

use riverlight_core::errors::SimError;
use riverlight_core::types::{Position, TetherId};

/// Tethers in level registration order. A `TetherId` is an index into
/// this list, stable for the lifetime of a level.
#[derive(Debug, Default)]
pub struct TetherRegistry {
    entities: Vec<Entity>,
}

impl TetherRegistry {
    pub fn register(&mut self, entity: Entity) -> TetherId {
        self.entities.push(entity);
        TetherId(self.entities.len() - 1)
    }

    pub fn get(&self, id: TetherId) -> Option<Entity> {
        self.entities.get(id.0).copied()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates tethers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (TetherId, Entity)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, &entity)| (TetherId(index), entity))
    }

    /// Nearest tether to `position` by squared distance. Ties resolve to
    /// the earlier-registered tether.
    pub fn nearest(&self, world: &World, position: Vec2) -> Result<(TetherId, Entity), SimError> {
        let mut best = None;
        let mut best_sq = f32::INFINITY;
        for (id, entity) in self.iter() {
            let Ok(tether_pos) = world.get::<&Position>(entity) else {
                continue;
            };
            let range_sq = tether_pos.0.distance_squared(position);
            if range_sq < best_sq {
                best_sq = range_sq;
                best = Some((id, entity));
            }
        }
        best.ok_or(SimError::NoTetherAvailable)
    }
}

/// Enemies in level registration order. Update order and the enemy index
/// reported in events both follow it.
#[derive(Debug, Default)]
pub struct EnemyRoster {
    entities: Vec<Entity>,
}

impl EnemyRoster {
    pub fn register(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.entities.iter().position(|&e| e == entity)
    }

    /// Iterates enemies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.entities.iter().copied().enumerate()
    }
}
