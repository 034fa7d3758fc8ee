use std::time::Duration;

use bevy::prelude::*;
use bevy_app::ScheduleRunnerPlugin;
use bevy_rapier3d::prelude::*;
use buoyancy::physics::{BuoyancyPlugin, WaterSurface};
use buoyancy::BuoyancyConfig;

use crate::hull::{self, TickLimit};
use crate::scenario::Scenario;

pub const TICKS_PER_SECOND: u64 = 60;

pub fn init(scenario: Scenario, ticks: u32) {
    let mut app = App::new();
    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
            1.0 / TICKS_PER_SECOND as f64,
        ))),
    );

    app.add_plugins(bevy::log::LogPlugin::default());

    info!(
        "Dropping a {} hull ({} kg/m³) from {} m onto {:?} water ({} kg/m³) for {} steps",
        scenario.half_extents * 2.0,
        scenario.hull_density,
        scenario.drop_height,
        scenario.preset,
        scenario.fluid_density,
        ticks
    );

    add_simulation(&mut app, scenario, ticks);

    app.run();
}

/// Everything but the runner and logging: physics, buoyancy, the hull and
/// its report.
pub fn add_simulation(app: &mut App, scenario: Scenario, ticks: u32) {
    app.add_plugins(TransformPlugin);
    app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default().with_default_system_setup(true));
    app.add_plugins(BuoyancyPlugin);

    app.insert_resource(BuoyancyConfig::default().with_density(scenario.fluid_density));
    app.insert_resource(WaterSurface::waves(
        scenario.preset.to_config(scenario.water_level),
    ));

    app.insert_resource(scenario);
    app.insert_resource(TickLimit::new(ticks));

    app.add_systems(Startup, (configure_rapier_context, hull::spawn_hull));
    app.add_systems(FixedUpdate, hull::report_hull);
}

/// Rapier shares the gravity the buoyancy model pushes against.
fn configure_rapier_context(
    config: Res<BuoyancyConfig>,
    mut query: Query<&mut RapierConfiguration>,
) {
    for mut rapier_config in query.iter_mut() {
        rapier_config.gravity = config.gravity;
        rapier_config.physics_pipeline_active = true;
        rapier_config.query_pipeline_active = true;
    }
}
