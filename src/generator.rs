use std::ops::RangeInclusive;

use rand::Rng;

use crate::event::{HitEvent, StateEvent, Surface};

/// Value ranges a random hit is drawn from.
#[derive(Clone, Debug, PartialEq)]
pub struct HitRanges {
    pub x: RangeInclusive<f32>,
    pub y: RangeInclusive<f32>,
    pub energy: RangeInclusive<f32>,
}

impl HitRanges {
    /// Full plate, energy 0.1..=1.0. Used by interactive, random and stress.
    pub fn full() -> Self {
        Self::new(0.0..=1.0, 0.1..=1.0)
    }

    /// Same span on both axes.
    pub fn new(position: RangeInclusive<f32>, energy: RangeInclusive<f32>) -> Self {
        HitRanges { x: position.clone(), y: position, energy }
    }
}

/// Wire id for the `index`-th hit of a run. `None` once the int32 id space
/// is used up; runs stop there instead of wrapping.
pub fn particle_id(index: u64) -> Option<i32> {
    i32::try_from(index).ok()
}

/// Draw a hit with uniformly random position, energy and surface.
pub fn random_hit<R: Rng>(rng: &mut R, particle_id: i32, ranges: &HitRanges) -> HitEvent {
    HitEvent {
        particle_id,
        x: rng.gen_range(ranges.x.clone()),
        y: rng.gen_range(ranges.y.clone()),
        energy: rng.gen_range(ranges.energy.clone()),
        surface: Surface::from_index(rng.gen_range(0..Surface::ALL.len())),
    }
}

/// Deterministic walk over a 10x10 grid with cycling energy and surface.
pub fn sequence_hit(index: i32) -> HitEvent {
    let i = index.max(0);
    HitEvent {
        particle_id: i,
        x: (i % 10) as f32 / 10.0,
        y: ((i / 10) % 10) as f32 / 10.0,
        energy: 0.3 + (i % 7) as f32 * 0.1,
        surface: Surface::from_index(i as usize),
    }
}

pub fn random_state<R: Rng>(rng: &mut R) -> StateEvent {
    StateEvent {
        activity: rng.gen_range(0.0..=1.0),
        gesture: rng.gen_range(0.0..=1.0),
        presence: rng.gen_range(0.5..=1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn particle_ids_stop_at_int32_limit() {
        assert_eq!(particle_id(0), Some(0));
        assert_eq!(particle_id(i32::MAX as u64), Some(i32::MAX));
        assert_eq!(particle_id(i32::MAX as u64 + 1), None);
        assert_eq!(particle_id(u64::MAX), None);
    }

    #[test]
    fn random_hits_stay_in_full_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        let ranges = HitRanges::full();
        let mut seen = [false; 4];
        for id in 0..2000 {
            let hit = random_hit(&mut rng, id, &ranges);
            assert_eq!(hit.particle_id, id);
            assert!((0.0..=1.0).contains(&hit.x));
            assert!((0.0..=1.0).contains(&hit.y));
            assert!((0.1..=1.0).contains(&hit.energy));
            seen[hit.surface.code() as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every surface should be drawn");
    }

    #[test]
    fn narrowed_ranges_are_respected() {
        let mut rng = StdRng::seed_from_u64(7);
        let ranges = HitRanges::new(0.3..=0.7, 0.1..=0.3);
        for id in 0..500 {
            let hit = random_hit(&mut rng, id, &ranges);
            assert!((0.3..=0.7).contains(&hit.x));
            assert!((0.3..=0.7).contains(&hit.y));
            assert!((0.1..=0.3).contains(&hit.energy));
        }
    }

    #[test]
    fn sequence_first_and_seventh() {
        let first = sequence_hit(0);
        assert!(close(first.x, 0.0) && close(first.y, 0.0) && close(first.energy, 0.3));
        assert_eq!(first.surface, Surface::Left);

        let seventh = sequence_hit(6);
        assert!(close(seventh.x, 0.6));
        assert!(close(seventh.y, 0.0));
        assert!(close(seventh.energy, 0.9));
        assert_eq!(seventh.surface, Surface::Top);
    }

    #[test]
    fn sequence_wraps_rows_and_energy() {
        let hit = sequence_hit(23);
        assert!(close(hit.x, 0.3));
        assert!(close(hit.y, 0.2));
        // 23 % 7 == 2
        assert!(close(hit.energy, 0.5));
        assert_eq!(hit.surface, Surface::Bottom);

        let hit = sequence_hit(105);
        assert!(close(hit.y, 0.0), "y wraps after 100 hits");
    }

    #[test]
    fn random_state_presence_is_at_least_half() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let state = random_state(&mut rng);
            assert!((0.0..=1.0).contains(&state.activity));
            assert!((0.0..=1.0).contains(&state.gesture));
            assert!((0.5..=1.0).contains(&state.presence));
        }
    }
}
