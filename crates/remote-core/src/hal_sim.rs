use crate::hal::LocoTelemetry;
use crate::reading::{GaugeReading, LocoClass};

/// Tank sizes and thermal behaviour of one locomotive class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocoProfile {
    pub fuel_capacity: f64,
    pub oil_capacity: f64,
    pub sand_capacity: f64,
    /// Operating band of the engine temperature gauge, °C.
    pub temp_band: (f64, f64),

    /// Consumption per second at full throttle.
    pub fuel_burn: f64,
    pub oil_burn: f64,
    pub sand_use: f64,

    pub ambient_temp: f64,
    /// Steady-state temperature at full throttle.
    pub full_load_temp: f64,
    /// First-order thermal time constant, seconds.
    pub thermal_tau_s: f64,
}

impl LocoProfile {
    pub fn for_class(class: LocoClass) -> Self {
        match class {
            LocoClass::Diesel => Self {
                fuel_capacity: 6000.0,
                oil_capacity: 500.0,
                sand_capacity: 2000.0,
                temp_band: (30.0, 120.0),
                fuel_burn: 2.5,
                oil_burn: 0.05,
                sand_use: 1.0,
                ambient_temp: 20.0,
                full_load_temp: 115.0,
                thermal_tau_s: 120.0,
            },
            LocoClass::Shunter => Self {
                fuel_capacity: 3000.0,
                oil_capacity: 200.0,
                sand_capacity: 1000.0,
                temp_band: (30.0, 120.0),
                fuel_burn: 1.2,
                oil_burn: 0.03,
                sand_use: 0.5,
                ambient_temp: 20.0,
                full_load_temp: 105.0,
                thermal_tau_s: 60.0,
            },
        }
    }
}

/// Simulated locomotive with draining consumables and engine heat.
#[derive(Debug, Clone)]
pub struct SimulatedLoco {
    class: LocoClass,
    profile: LocoProfile,

    fuel: f64,
    oil: f64,
    sand: f64,
    engine_temp_c: f64,

    throttle: f64,
    sanding: bool,
}

impl SimulatedLoco {
    /// Full tanks, cold engine.
    pub fn new(class: LocoClass) -> Self {
        let profile = LocoProfile::for_class(class);
        Self {
            class,
            profile,
            fuel: profile.fuel_capacity,
            oil: profile.oil_capacity,
            sand: profile.sand_capacity,
            engine_temp_c: profile.ambient_temp,
            throttle: 0.0,
            sanding: false,
        }
    }

    pub fn class(&self) -> LocoClass {
        self.class
    }

    pub fn profile(&self) -> &LocoProfile {
        &self.profile
    }

    pub fn throttle(&self) -> f64 {
        self.throttle
    }

    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = if throttle.is_finite() {
            throttle.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    pub fn set_sanding(&mut self, sanding: bool) {
        self.sanding = sanding;
    }

    pub fn set_fuel(&mut self, litres: f64) {
        self.fuel = litres.max(0.0);
    }

    pub fn set_oil(&mut self, litres: f64) {
        self.oil = litres.max(0.0);
    }

    pub fn set_sand(&mut self, kg: f64) {
        self.sand = kg.max(0.0);
    }

    pub fn set_engine_temp(&mut self, temp_c: f64) {
        self.engine_temp_c = temp_c;
    }

    pub fn is_running(&self) -> bool {
        self.fuel > 0.0 && self.oil > 0.0
    }

    pub fn step(&mut self, dt_s: f64) {
        if !(dt_s.is_finite() && dt_s > 0.0) {
            return;
        }
        let load = if self.is_running() { self.throttle } else { 0.0 };

        // Consumables drain with load; an idling engine still burns a little.
        let burn = load.max(0.05) * dt_s;
        if self.is_running() {
            self.fuel = (self.fuel - self.profile.fuel_burn * burn).max(0.0);
            self.oil = (self.oil - self.profile.oil_burn * burn).max(0.0);
        }
        if self.sanding {
            self.sand = (self.sand - self.profile.sand_use * dt_s).max(0.0);
        }

        // Engine temperature relaxes toward a load-dependent target.
        let target = self.profile.ambient_temp
            + (self.profile.full_load_temp - self.profile.ambient_temp) * load;
        let alpha = 1.0 - (-dt_s / self.profile.thermal_tau_s).exp();
        self.engine_temp_c += (target - self.engine_temp_c) * alpha;
    }
}

impl LocoTelemetry for SimulatedLoco {
    fn fuel(&self) -> GaugeReading {
        GaugeReading::new(self.fuel, 0.0, self.profile.fuel_capacity)
    }

    fn oil(&self) -> GaugeReading {
        GaugeReading::new(self.oil, 0.0, self.profile.oil_capacity)
    }

    fn sand(&self) -> GaugeReading {
        GaugeReading::new(self.sand, 0.0, self.profile.sand_capacity)
    }

    fn engine_temp(&self) -> GaugeReading {
        let (min, max) = self.profile.temp_band;
        GaugeReading::new(self.engine_temp_c, min, max)
    }
}
