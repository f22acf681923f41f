use bevy::prelude::*;
use atc_sim::{
    components::{AircraftConfig, AircraftState, PlanePath, SpawnOrder},
    plugins::TrafficPlugin,
    resources::{RouteGraph, SimulationConfig},
};

// Builder for a bare application running the traffic plugin
pub struct TestAppBuilder {
    config: SimulationConfig,
    aircraft_configs: Vec<AircraftConfig>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
            aircraft_configs: Vec::new(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Aircraft are spawned in the order they are added
    pub fn with_aircraft(mut self, config: AircraftConfig) -> Self {
        self.aircraft_configs.push(config);
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        let path_config = self.config.path;

        app.add_plugins(MinimalPlugins)
            .add_plugins(TrafficPlugin::new(self.config).unwrap());

        for (order, config) in self.aircraft_configs.into_iter().enumerate() {
            let world = app.world_mut();
            let state =
                AircraftState::from_config(&config, world.resource::<RouteGraph>()).unwrap();
            let path = PlanePath::new(&path_config, state.spatial.position, state.spatial.heading);
            world.spawn((state, path, SpawnOrder(order as u64), Name::new(config.name)));
        }

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn get_resource<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }

    pub fn query_all<T: Component>(&mut self) -> Vec<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.iter(world).collect()
    }

    pub fn aircraft(&mut self, name: &str) -> Option<&AircraftState> {
        self.query_all::<AircraftState>()
            .into_iter()
            .find(|state| state.name == name)
    }
}
