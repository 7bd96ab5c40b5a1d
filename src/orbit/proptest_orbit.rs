//! Property-based tests for the orbital model using proptest.
//!
//! These tests verify the orbit invariants across a wide range of body
//! parameters, speed multipliers and tick counts.

use proptest::prelude::*;

use super::{BodyConfig, BodyId, SolarSystem, SunConfig, SystemConfig};

const PLANET: BodyId = BodyId::Planet(0);
const MOON: BodyId = BodyId::Moon { planet: 0, moon: 0 };

fn one_planet_one_moon(
    planet_distance: f64,
    planet_speed: f64,
    moon_distance: f64,
    moon_speed: f64,
) -> SolarSystem {
    let config = SystemConfig {
        sun: SunConfig {
            name: "Sun",
            radius: 1.0,
            texture: None,
        },
        planets: vec![
            BodyConfig::new("Planet", 1.0, planet_distance, planet_speed)
                .with_moons(vec![BodyConfig::new("Moon", 0.5, moon_distance, moon_speed)]),
        ],
    };
    SolarSystem::from_config(&config).expect("generated config is valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Angles grow linearly: angle(n) = angle(0) + n * base_speed * s.
    #[test]
    fn prop_linear_angle_accumulation(
        planet_speed in 0.0f64..0.1,
        moon_speed in 0.0f64..0.1,
        multiplier in -5.0f64..5.0,
        ticks in 0usize..2000,
    ) {
        let mut system = one_planet_one_moon(10.0, planet_speed, 3.0, moon_speed);
        for _ in 0..ticks {
            system.advance(multiplier);
        }

        for (id, speed) in [(PLANET, planet_speed), (MOON, moon_speed)] {
            let expected = ticks as f64 * speed * multiplier;
            let angle = system.body(id).unwrap().angle();
            prop_assert!(
                (angle - expected).abs() < 1e-9,
                "{:?}: angle {} expected {}", id, angle, expected
            );
        }
    }

    /// Bodies stay on a fixed-radius circle in the horizontal plane.
    #[test]
    fn prop_orbit_stays_on_circle(
        planet_distance in 0.1f64..500.0,
        moon_distance in 0.1f64..50.0,
        speed in 0.0f64..1.0,
        multiplier in -5.0f64..5.0,
        ticks in 0usize..500,
    ) {
        let mut system = one_planet_one_moon(planet_distance, speed, moon_distance, speed * 2.0);
        for _ in 0..ticks {
            system.advance(multiplier);

            for (id, distance) in [(PLANET, planet_distance), (MOON, moon_distance)] {
                let pos = system.local_position(id).unwrap();
                prop_assert_eq!(pos.y, 0.0);
                let r2 = pos.x * pos.x + pos.z * pos.z;
                prop_assert!(
                    (r2 - distance * distance).abs() <= 1e-9 * distance * distance,
                    "{:?}: r² {} vs d² {}", id, r2, distance * distance
                );
            }
        }
    }

    /// A zero multiplier leaves every angle and position untouched.
    #[test]
    fn prop_zero_multiplier_freezes(
        speed in 0.0f64..1.0,
        warmup in 0usize..100,
        ticks in 1usize..200,
    ) {
        let mut system = one_planet_one_moon(10.0, speed, 3.0, speed);
        for _ in 0..warmup {
            system.advance(1.0);
        }
        let planet_angle = system.body(PLANET).unwrap().angle();
        let moon_world = system.world_position(MOON).unwrap();

        for _ in 0..ticks {
            system.advance(0.0);
        }

        prop_assert_eq!(system.body(PLANET).unwrap().angle(), planet_angle);
        prop_assert_eq!(system.world_position(MOON).unwrap(), moon_world);
    }

    /// Running with -s mirrors the angle progression of +s.
    #[test]
    fn prop_negative_multiplier_mirrors(
        speed in 0.001f64..0.5,
        multiplier in 0.1f64..5.0,
        ticks in 1usize..500,
    ) {
        let mut forward = one_planet_one_moon(10.0, speed, 3.0, speed * 1.5);
        let mut backward = forward.clone();
        for _ in 0..ticks {
            forward.advance(multiplier);
            backward.advance(-multiplier);
        }

        for id in [PLANET, MOON] {
            let f = forward.body(id).unwrap().angle();
            let b = backward.body(id).unwrap().angle();
            prop_assert!(f > 0.0 && b < 0.0);
            prop_assert!((f + b).abs() < 1e-9, "{:?}: {} vs {}", id, f, b);
        }
    }

    /// A moon's world position is its planet's world position plus its local offset.
    #[test]
    fn prop_moon_composes_with_planet(
        planet_speed in 0.0f64..0.5,
        moon_speed in 0.0f64..0.5,
        ticks in 0usize..300,
    ) {
        let mut system = one_planet_one_moon(20.0, planet_speed, 2.0, moon_speed);
        for _ in 0..ticks {
            system.advance(1.0);
        }

        let planet = system.world_position(PLANET).unwrap();
        let moon_local = system.local_position(MOON).unwrap();
        let moon_world = system.world_position(MOON).unwrap();
        prop_assert!((moon_world - (planet + moon_local)).length() < 1e-12);
    }
}
