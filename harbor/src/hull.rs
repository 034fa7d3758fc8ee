use bevy::prelude::*;
use bevy_rapier3d::prelude::Damping;
use buoyancy::physics::{BuoyantBody, HullPhysicsBundle};

use crate::scenario::Scenario;

/// Fixed steps between two height reports.
const REPORT_INTERVAL: u32 = 30;

/// Marks the demo hull.
#[derive(Component)]
pub struct Hull;

/// Counts fixed simulation steps, the same steps buoyancy runs on.
#[derive(Resource, Debug)]
pub struct TickLimit {
    pub elapsed: u32,
    pub max: u32,
}

impl TickLimit {
    pub fn new(max: u32) -> Self {
        Self { elapsed: 0, max }
    }

    /// Advance by one tick. Returns true once the limit is reached.
    pub fn tick(&mut self) -> bool {
        self.elapsed += 1;
        self.elapsed >= self.max
    }
}

pub fn spawn_hull(mut commands: Commands, scenario: Res<Scenario>) {
    let bundle = match HullPhysicsBundle::boxed(scenario.half_extents) {
        Ok(bundle) => bundle.with_density(scenario.hull_density),
        Err(err) => {
            error!("Could not build hull mesh: {}", err);
            return;
        }
    };

    let entity = commands
        .spawn((
            Hull,
            bundle,
            Damping {
                linear_damping: scenario.damping,
                angular_damping: scenario.damping,
            },
            Transform::from_xyz(0.0, scenario.water_level + scenario.drop_height, 0.0),
        ))
        .id();

    debug!("Spawned hull {:?}", entity);
}

pub fn report_hull(
    mut limit: ResMut<TickLimit>,
    hulls: Query<(&Transform, &BuoyantBody), With<Hull>>,
    mut ev_app_exit: EventWriter<AppExit>,
) {
    let done = limit.tick();

    if limit.elapsed % REPORT_INTERVAL == 0 || done {
        for (transform, body) in hulls.iter() {
            let submerged = body
                .mesh
                .partition()
                .map(|partition| partition.submerged_ratio())
                .unwrap_or(0.0);
            info!(
                "step {:>5}: hull at y = {:>7.3}, {:>5.1}% of its surface wet",
                limit.elapsed,
                transform.translation.y,
                submerged * 100.0
            );
        }
    }

    if done {
        info!("Reached {} steps, shutting down", limit.max);
        ev_app_exit.write(AppExit::Success);
    }
}
