//! Water surface found by ray casts against water colliders.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::water::WaterSurfaceQuery;

/// Marks a collider as a body of water.
///
/// Ray casts only stop on colliders carrying this component, so terrain and
/// hulls left on rapier's default groups are never mistaken for water.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct WaterVolume;

/// Ray-cast settings for locating water colliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastSettings {
    /// Collision groups a collider must belong to to count as water
    pub water_groups: Group,
    /// How far up and down to look for a surface
    pub max_distance: f32,
}

impl Default for RaycastSettings {
    fn default() -> Self {
        Self {
            water_groups: super::collision_groups::WATER,
            max_distance: 1000.0,
        }
    }
}

/// [`WaterSurfaceQuery`] over the rapier scene.
///
/// Casts up from the point first: a hit means the point is under a water
/// surface, at minus the hit distance. Otherwise casts down, and a hit there
/// is the height above the surface. With no hit in either direction the
/// answer is `0.0`.
///
/// A collider counts as water when it is in `water_groups` and `is_water`
/// accepts its entity. Inside a bevy system `is_water` is usually a lookup
/// for [`WaterVolume`].
pub struct RaycastWater<'a> {
    pipeline: &'a RapierQueryPipeline,
    colliders: &'a RapierContextColliders,
    bodies: &'a RapierRigidBodySet,
    is_water: &'a (dyn Fn(Entity) -> bool + Sync),
    settings: RaycastSettings,
}

impl<'a> RaycastWater<'a> {
    pub fn new(
        pipeline: &'a RapierQueryPipeline,
        colliders: &'a RapierContextColliders,
        bodies: &'a RapierRigidBodySet,
        is_water: &'a (dyn Fn(Entity) -> bool + Sync),
        settings: RaycastSettings,
    ) -> Self {
        Self {
            pipeline,
            colliders,
            bodies,
            is_water,
            settings,
        }
    }

    fn cast(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        // Hollow casts so a point inside a water volume still finds its surface
        let groups = CollisionGroups::new(Group::ALL, self.settings.water_groups);
        let is_water = |entity: Entity| (self.is_water)(entity);
        let filter = QueryFilter::default().groups(groups).predicate(&is_water);
        self.pipeline
            .cast_ray(
                self.colliders,
                self.bodies,
                origin,
                direction,
                self.settings.max_distance,
                false,
                filter,
            )
            .map(|(_, toi)| toi)
    }
}

impl WaterSurfaceQuery for RaycastWater<'_> {
    fn signed_distance(&self, point: Vec3) -> f32 {
        if let Some(distance) = self.cast(point, Vec3::Y) {
            return -distance;
        }
        if let Some(distance) = self.cast(point, Vec3::NEG_Y) {
            return distance;
        }
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::collision_groups;

    fn rapier_app() -> App {
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            TransformPlugin,
            RapierPhysicsPlugin::<NoUserData>::default(),
        ));
        app
    }

    fn step(app: &mut App) {
        app.finish();
        app.cleanup();
        for _ in 0..3 {
            app.update();
        }
    }

    // Roof at y = 5, default groups, and optionally a water slab with its top at y = 0.
    fn scene(with_water: bool) -> (App, Option<Entity>) {
        let mut app = rapier_app();
        app.world_mut().spawn((
            Collider::cuboid(10.0, 0.5, 10.0),
            Transform::from_xyz(0.0, 5.0, 0.0),
        ));
        let water = with_water.then(|| {
            app.world_mut()
                .spawn((
                    WaterVolume,
                    Collider::cuboid(10.0, 2.0, 10.0),
                    CollisionGroups::new(collision_groups::WATER, Group::ALL),
                    Transform::from_xyz(0.0, -2.0, 0.0),
                ))
                .id()
        });
        step(&mut app);
        (app, water)
    }

    fn distance_at(
        app: &mut App,
        is_water: &(dyn Fn(Entity) -> bool + Sync),
        point: Vec3,
    ) -> f32 {
        let mut context = app.world_mut().query::<(
            &RapierContextColliders,
            &RapierRigidBodySet,
            &RapierQueryPipeline,
        )>();
        let (colliders, bodies, pipeline) = context.single(app.world()).unwrap();
        let settings = RaycastSettings::default();
        let water = RaycastWater::new(pipeline, colliders, bodies, is_water, settings);
        water.signed_distance(point)
    }

    #[test]
    fn test_roof_without_water_marker_is_ignored() {
        let (mut app, _) = scene(false);
        let world = app.world_mut();
        let mut volumes = world.query_filtered::<Entity, With<WaterVolume>>();
        let marked: Vec<Entity> = volumes.iter(world).collect();
        let is_water = move |entity: Entity| marked.contains(&entity);

        assert_eq!(distance_at(&mut app, &is_water, Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_point_under_water_surface() {
        let (mut app, water) = scene(true);
        let is_water = move |entity: Entity| Some(entity) == water;

        let distance = distance_at(&mut app, &is_water, Vec3::new(0.0, -1.0, 0.0));
        assert!((distance + 1.0).abs() < 1e-4, "got {distance}");
    }

    #[test]
    fn test_point_above_water_surface() {
        let (mut app, water) = scene(true);
        let is_water = move |entity: Entity| Some(entity) == water;

        // the roof above is skipped, the slab below is found
        let distance = distance_at(&mut app, &is_water, Vec3::new(0.0, 3.0, 0.0));
        assert!((distance - 3.0).abs() < 1e-4, "got {distance}");
    }
}
