// Copyright (c) 2026 rezky_nightky

use crate::field::Field;

const FLAKE: char = '*';

// Serialize the field into a height x width grid of characters, rows joined
// by newlines with no trailing newline. Flakes outside the visible columns
// are skipped, not an error.
pub fn render(field: &Field) -> String {
    let width = field.width as usize;
    let height = field.height as usize;

    let mut cells = vec![' '; width * height];
    for flake in &field.flakes {
        let row = flake.row as usize;
        if row >= height || flake.col < 0 || flake.col >= field.width as i32 {
            continue;
        }
        cells[row * width + flake.col as usize] = FLAKE;
    }

    let mut out = String::with_capacity(height * (width + 1));
    for (i, row) in cells.chunks(width).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::field::{Field, Flake};

    #[test]
    fn output_is_exactly_height_lines_of_width_chars() {
        let mut field = Field::new(4, 7, 0);
        field.flakes = vec![Flake { row: 2, col: 3 }];

        let text = render(&field);
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == 7));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn flakes_land_on_their_cells() {
        let mut field = Field::new(3, 5, 0);
        field.flakes = vec![Flake { row: 0, col: 0 }, Flake { row: 2, col: 4 }];

        let text = render(&field);
        let lines: Vec<&str> = text.split('\n').collect();

        assert_eq!(lines[0], "*    ");
        assert_eq!(lines[1], "     ");
        assert_eq!(lines[2], "    *");
    }

    #[test]
    fn out_of_range_columns_are_silently_skipped() {
        let mut field = Field::new(3, 5, 0);
        field.flakes = vec![
            Flake { row: 1, col: -1 },
            Flake { row: 1, col: 5 },
            Flake { row: 1, col: 12 },
        ];

        let text = render(&field);

        assert!(!text.contains('*'));
    }

    #[test]
    fn duplicate_flakes_are_indistinguishable() {
        let mut field = Field::new(2, 4, 0);
        field.flakes = vec![Flake { row: 1, col: 2 }, Flake { row: 1, col: 2 }];

        let text = render(&field);

        assert_eq!(text.matches('*').count(), 1);
    }
}
