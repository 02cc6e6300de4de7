//! Embedded picture art
//!
//! The picture hiding behind the block grid, as character art baked into the
//! binary: an Easter egg, after the stock secret word.

/// Native art dimension (rows and columns)
pub const ART_SIZE: usize = 15;

/// The hidden picture, row-major, `ART_SIZE` rows of `ART_SIZE` characters
pub const EGG: &[&str] = &[
    "               ",
    "     .:::.     ",
    "   .:::::::.   ",
    "  .:~~~~~~~:.  ",
    " .:~~ o o ~~:. ",
    " ::~~~ v ~~~:: ",
    " ::*:::::::*:: ",
    " :::**:::**::: ",
    " ::::*****:::: ",
    " .:::::::::::. ",
    "  .:::::::::.  ",
    "   .:::::::.   ",
    "    .:::::.    ",
    "     ':::'     ",
    "               ",
];

/// Sample the picture for a grid cell
///
/// Nearest-neighbor, so grids of any size map onto the fixed-size art.
#[must_use]
pub fn sample(row: usize, col: usize, grid_size: usize) -> char {
    if grid_size == 0 {
        return ' ';
    }
    let art_row = (row * ART_SIZE / grid_size).min(ART_SIZE - 1);
    let art_col = (col * ART_SIZE / grid_size).min(ART_SIZE - 1);
    EGG[art_row].chars().nth(art_col).unwrap_or(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_is_square() {
        assert_eq!(EGG.len(), ART_SIZE);
        for row in EGG {
            assert_eq!(row.chars().count(), ART_SIZE, "bad row: {row:?}");
        }
    }

    #[test]
    fn sample_native_size_is_identity() {
        for (r, row) in EGG.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                assert_eq!(sample(r, c, ART_SIZE), ch);
            }
        }
    }

    #[test]
    fn sample_scales_to_other_grids() {
        // Corners of any grid map to corners of the art
        assert_eq!(sample(0, 0, 30), ' ');
        assert_eq!(sample(29, 29, 30), ' ');
        // Every cell of a larger and a smaller grid is in range
        for grid in [5, 10, 30] {
            for r in 0..grid {
                for c in 0..grid {
                    let _ = sample(r, c, grid);
                }
            }
        }
    }

    #[test]
    fn sample_degenerate_grid() {
        assert_eq!(sample(0, 0, 0), ' ');
    }
}
