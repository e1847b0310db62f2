//! Prize physics
//!
//! One implicit step per animation frame: gravity, integrate, clamp to the
//! floor and walls, then push overlapping prizes apart. The push runs after
//! the clamp, so a prize shoved into a wall may sit slightly outside the
//! bounds until the next frame clamps it back.

use glam::Vec2;

use super::state::{PlayArea, PrizeObject};
use crate::Tuning;

/// Advance every active prize by one frame
pub fn step(prizes: &mut [PrizeObject], area: PlayArea, tuning: &Tuning) {
    for i in 0..prizes.len() {
        if prizes[i].caught {
            continue;
        }

        integrate(&mut prizes[i], area, tuning);

        for j in 0..prizes.len() {
            if j == i || prizes[j].caught {
                continue;
            }
            if let Some(push) = separation_push(prizes[i].center(), prizes[j].center(), tuning) {
                prizes[i].pos += push;
                prizes[j].pos -= push;
            }
        }
    }
}

/// Gravity, integration and boundary response for a single prize
pub fn integrate(prize: &mut PrizeObject, area: PlayArea, tuning: &Tuning) {
    prize.vel.y += tuning.gravity;
    prize.pos += prize.vel;

    // Floor: stop falling, bleed off sideways drift
    if prize.pos.y + prize.size.y > area.height {
        prize.pos.y = area.height - prize.size.y;
        prize.vel.y = 0.0;
        prize.vel.x *= tuning.floor_friction;
    }

    // Walls: just stop
    if prize.pos.x < 0.0 {
        prize.pos.x = 0.0;
        prize.vel.x = 0.0;
    } else if prize.pos.x + prize.size.x > area.width {
        prize.pos.x = area.width - prize.size.x;
        prize.vel.x = 0.0;
    }
}

/// Displacement to apply to `a` (and negated to `b`) when their centers are too close
///
/// `None` when they are far enough apart or exactly coincident.
pub fn separation_push(a: Vec2, b: Vec2, tuning: &Tuning) -> Option<Vec2> {
    let delta = a - b;
    let distance = delta.length();
    if distance < tuning.min_distance && distance > 0.0 {
        Some(delta / distance * tuning.push_step)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PrizeDef;
    use proptest::prelude::*;

    fn prize_at(x: f32, y: f32) -> PrizeObject {
        PrizeObject::new(
            PrizeDef::new("🐱", "cat", "https://cat.example"),
            Vec2::new(x, y),
            Vec2::new(80.0, 70.0),
        )
    }

    fn area() -> PlayArea {
        PlayArea::new(600.0, 400.0)
    }

    #[test]
    fn test_gravity_accelerates_falling_prize() {
        let tuning = Tuning::default();
        let mut prizes = vec![prize_at(100.0, 50.0)];

        step(&mut prizes, area(), &tuning);
        assert!((prizes[0].vel.y - 0.2).abs() < 1e-6);
        assert!((prizes[0].pos.y - 50.2).abs() < 1e-4);

        step(&mut prizes, area(), &tuning);
        assert!((prizes[0].vel.y - 0.4).abs() < 1e-6);
        assert!((prizes[0].pos.y - 50.6).abs() < 1e-4);
    }

    #[test]
    fn test_floor_stops_and_damps() {
        let tuning = Tuning::default();
        let mut prize = prize_at(100.0, 329.0);
        prize.vel = Vec2::new(10.0, 5.0);

        integrate(&mut prize, area(), &tuning);
        assert_eq!(prize.pos.y, 330.0);
        assert_eq!(prize.vel.y, 0.0);
        assert!((prize.vel.x - 9.0).abs() < 1e-5);
    }

    #[test]
    fn test_walls_stop_horizontal_motion() {
        let tuning = Tuning::default();

        let mut left = prize_at(2.0, 100.0);
        left.vel.x = -5.0;
        integrate(&mut left, area(), &tuning);
        assert_eq!(left.pos.x, 0.0);
        assert_eq!(left.vel.x, 0.0);

        let mut right = prize_at(515.0, 100.0);
        right.vel.x = 10.0;
        integrate(&mut right, area(), &tuning);
        assert_eq!(right.pos.x, 520.0);
        assert_eq!(right.vel.x, 0.0);
    }

    #[test]
    fn test_prize_settles_on_floor() {
        let tuning = Tuning::default();
        let mut prizes = vec![prize_at(100.0, 0.0)];
        for _ in 0..600 {
            step(&mut prizes, area(), &tuning);
        }
        assert_eq!(prizes[0].pos.y, 330.0);
        assert_eq!(prizes[0].vel.y, 0.0);
    }

    #[test]
    fn test_resize_rebounds_to_new_bounds() {
        let tuning = Tuning::default();
        let mut prizes = vec![prize_at(500.0, 330.0)];
        step(&mut prizes, area(), &tuning);
        assert_eq!(prizes[0].pos, Vec2::new(500.0, 330.0));

        // Window shrank
        let small = PlayArea::new(300.0, 200.0);
        step(&mut prizes, small, &tuning);
        assert_eq!(prizes[0].pos, Vec2::new(220.0, 130.0));
    }

    #[test]
    fn test_caught_prize_is_frozen() {
        let tuning = Tuning::default();
        let mut prizes = vec![prize_at(100.0, 100.0)];
        prizes[0].mark_caught(1.0);
        let before = prizes[0].clone();

        for _ in 0..10 {
            step(&mut prizes, area(), &tuning);
        }
        assert_eq!(prizes[0].pos, before.pos);
        assert_eq!(prizes[0].vel, before.vel);
    }

    #[test]
    fn test_caught_prize_ignored_by_separation() {
        let tuning = Tuning::default();
        let mut prizes = vec![prize_at(100.0, 330.0), prize_at(110.0, 330.0)];
        prizes[0].mark_caught(0.0);

        step(&mut prizes, area(), &tuning);
        assert_eq!(prizes[0].pos, Vec2::new(100.0, 330.0));
        // Only gravity/floor acted on the loose one
        assert_eq!(prizes[1].pos, Vec2::new(110.0, 330.0));
    }

    #[test]
    fn test_coincident_centers_not_pushed() {
        let tuning = Tuning::default();
        assert_eq!(separation_push(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), &tuning), None);

        let mut prizes = vec![prize_at(200.0, 330.0), prize_at(200.0, 330.0)];
        step(&mut prizes, area(), &tuning);
        assert_eq!(prizes[0].pos, prizes[1].pos);
    }

    #[test]
    fn test_push_is_fixed_step_along_centers() {
        let tuning = Tuning::default();
        let push = separation_push(Vec2::new(30.0, 0.0), Vec2::ZERO, &tuning).unwrap();
        assert_eq!(push, Vec2::new(2.0, 0.0));
        assert_eq!(separation_push(Vec2::new(60.0, 0.0), Vec2::ZERO, &tuning), None);
    }

    #[test]
    fn test_neighbours_on_floor_drift_apart() {
        let tuning = Tuning::default();
        let mut prizes = vec![prize_at(200.0, 330.0), prize_at(230.0, 330.0)];
        step(&mut prizes, area(), &tuning);
        // Each is pushed once as "self" and once as "other": 4px each
        assert!((prizes[0].pos.x - 196.0).abs() < 1e-4);
        assert!((prizes[1].pos.x - 234.0).abs() < 1e-4);
    }

    #[test]
    fn test_separation_can_overshoot_wall_for_one_frame() {
        let tuning = Tuning::default();
        let mut prizes = vec![prize_at(0.0, 330.0), prize_at(20.0, 330.0)];
        step(&mut prizes, area(), &tuning);
        assert!(prizes[0].pos.x < 0.0);

        step(&mut prizes, area(), &tuning);
        // Clamped again at the start of its own integration
        assert!(prizes[0].pos.x <= 0.0);
        assert!(prizes[0].pos.x > -4.1);
    }

    proptest! {
        #[test]
        fn prop_integrate_keeps_prize_in_bounds(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            w in 100.0f32..1200.0,
            h in 100.0f32..900.0,
        ) {
            let tuning = Tuning::default();
            let area = PlayArea::new(w, h);
            let mut prize = prize_at(x, y);
            prize.vel = Vec2::new(vx, vy);

            integrate(&mut prize, area, &tuning);

            prop_assert!(prize.pos.x >= 0.0);
            prop_assert!(prize.pos.x <= area.width - prize.size.x + 1e-3);
            prop_assert!(prize.pos.y <= area.height - prize.size.y + 1e-3);
        }

        #[test]
        fn prop_separation_strictly_increases_distance(
            angle in 0.0f32..std::f32::consts::TAU,
            distance in 0.5f32..59.5,
        ) {
            let tuning = Tuning::default();
            let mut a = Vec2::new(300.0, 200.0);
            let mut b = a + Vec2::from_angle(angle) * distance;
            let mut last = (a - b).length();

            let mut rounds = 0;
            while let Some(push) = separation_push(a, b, &tuning) {
                a += push;
                b -= push;
                let now = (a - b).length();
                prop_assert!(now > last);
                last = now;
                rounds += 1;
                prop_assert!(rounds < 100);
            }
            prop_assert!(last >= tuning.min_distance);
        }
    }
}
