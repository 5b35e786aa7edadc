use crate::entities::{Enemy, Obstacle, Owner, Projectile};
use crate::upgrades::PowerUp;

/// Every live non-player entity. Order inside each pool is spawn order and
/// decides tie-breaks during collision resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pools {
    pub projectiles: Vec<Projectile>,
    pub obstacles: Vec<Obstacle>,
    pub enemies: Vec<Enemy>,
    pub power_up: Option<PowerUp>,
}

impl Pools {
    pub fn new() -> Self {
        Pools::default()
    }

    pub fn clear(&mut self) {
        self.projectiles.clear();
        self.obstacles.clear();
        self.enemies.clear();
        self.power_up = None;
    }

    /// Places a power-up only if none is live. Returns whether it was placed.
    pub fn offer_power_up(&mut self, power_up: PowerUp) -> bool {
        if self.power_up.is_some() {
            return false;
        }
        self.power_up = Some(power_up);
        true
    }

    pub fn projectiles_of(&self, owner: Owner) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(move |p| p.owner == owner)
    }
}

/// Drops every element matching `doomed`, keeping the order of the rest.
/// Returns how many were removed.
pub fn remove_where<T>(pool: &mut Vec<T>, mut doomed: impl FnMut(&T) -> bool) -> usize {
    let before = pool.len();
    pool.retain(|item| !doomed(item));
    before - pool.len()
}

/// Drops the elements whose index is flagged in `marks` (same length as the pool).
pub fn remove_marked<T>(pool: &mut Vec<T>, marks: &[bool]) -> usize {
    debug_assert_eq!(pool.len(), marks.len());
    let mut index = 0;
    remove_where(pool, |_| {
        let hit = marks.get(index).copied().unwrap_or(false);
        index += 1;
        hit
    })
}
