// Copyright (c) 2026 rezky_nightky

use rand::{
    distr::{Distribution, Uniform},
    rngs::StdRng,
    seq::index,
    SeedableRng,
};

// The `i` command may push intensity one past the configurable 0-9 range.
pub const MAX_INTENSITY: u8 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Flake {
    pub row: u16,
    pub col: i32,
}

pub struct Field {
    pub height: u16,
    pub width: u16,
    pub intensity: u8,
    pub flakes: Vec<Flake>,

    rng: StdRng,
    rand_drift: Uniform<i32>,
}

impl Field {
    pub fn new(height: u16, width: u16, intensity: u8) -> Self {
        Self {
            height,
            width,
            intensity,
            flakes: Vec::new(),
            rng: StdRng::from_os_rng(),
            rand_drift: Uniform::new_inclusive(-1, 1).expect("valid range"),
        }
    }

    // Clamped so a pathological intensity can never ask for more distinct
    // columns than the field has.
    pub fn spawn_count(&self) -> usize {
        let computed = (self.width as u32 * self.intensity as u32 / 100) as usize;
        computed.min(self.width as usize)
    }

    pub fn spawn_flakes(&mut self) -> Vec<Flake> {
        let count = self.spawn_count();
        index::sample(&mut self.rng, self.width as usize, count)
            .into_iter()
            .map(|col| Flake {
                row: 0,
                col: col as i32,
            })
            .collect()
    }

    pub fn advance(&mut self) {
        for flake in &mut self.flakes {
            flake.row += 1;
            flake.col += self.rand_drift.sample(&mut self.rng);
        }
    }

    // One simulation step: move every flake down a row with sideways drift,
    // let fresh flakes in at the top, then drop whatever fell out of the
    // bottom. Drifting past the left or right edge is not a removal
    // condition; only the row is.
    pub fn tick(&mut self) {
        self.advance();
        let spawned = self.spawn_flakes();
        self.flakes.extend(spawned);

        let height = self.height;
        self.flakes.retain(|flake| flake.row < height);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Field, Flake};

    #[test]
    fn spawn_count_follows_intensity() {
        let mut field = Field::new(30, 100, 5);
        assert_eq!(field.spawn_count(), 5);

        field.intensity = 9;
        assert_eq!(field.spawn_count(), 9);

        field.intensity = 0;
        assert_eq!(field.spawn_count(), 0);
    }

    #[test]
    fn spawned_flakes_sit_in_distinct_top_row_columns() {
        let mut field = Field::new(30, 100, 9);
        let spawned = field.spawn_flakes();

        assert_eq!(spawned.len(), 9);
        assert!(spawned.iter().all(|f| f.row == 0));

        let cols: HashSet<i32> = spawned.iter().map(|f| f.col).collect();
        assert_eq!(cols.len(), spawned.len());
        assert!(cols.iter().all(|&c| (0..100).contains(&c)));
    }

    #[test]
    fn advance_preserves_count_and_moves_one_step() {
        let mut field = Field::new(30, 100, 0);
        field.flakes = vec![
            Flake { row: 0, col: 10 },
            Flake { row: 3, col: 50 },
            Flake { row: 7, col: 99 },
        ];
        let before = field.flakes.clone();

        field.advance();

        assert_eq!(field.flakes.len(), before.len());
        for (old, new) in before.iter().zip(&field.flakes) {
            assert_eq!(new.row, old.row + 1);
            assert!((new.col - old.col).abs() <= 1);
        }
    }

    #[test]
    fn tick_never_leaves_a_flake_below_the_bottom() {
        let mut field = Field::new(10, 20, 9);
        for _ in 0..50 {
            field.tick();
            assert!(field.flakes.iter().all(|f| f.row < field.height));
        }
    }

    #[test]
    fn flake_on_last_row_is_gone_after_one_tick() {
        let mut field = Field::new(10, 20, 0);
        field.flakes = vec![Flake { row: 9, col: 5 }];

        field.tick();

        assert!(field.flakes.is_empty());
    }

    #[test]
    fn flakes_drifted_outside_the_width_are_kept() {
        let mut field = Field::new(10, 20, 0);
        field.flakes = vec![Flake { row: 0, col: -4 }, Flake { row: 0, col: 25 }];

        field.tick();

        assert_eq!(field.flakes.len(), 2);
        assert!(field.flakes.iter().all(|f| f.row == 1));
    }

    #[test]
    fn pathological_intensity_is_clamped_to_the_width() {
        let mut field = Field::new(3, 5, 100);

        field.tick();

        assert!(field.flakes.len() <= 5);
        assert!(field.flakes.iter().all(|f| f.row == 0));

        let cols: HashSet<i32> = field.flakes.iter().map(|f| f.col).collect();
        assert_eq!(cols.len(), field.flakes.len());
    }
}
