use ripple_grid_core::{CellShade, Grid, GridCell, GridStats};
use std::io::{self, Write};

fn marker(cell: GridCell) -> char {
    match cell.shade() {
        CellShade::Even => '.',
        CellShade::Odd => '*',
        CellShade::Locked => '#',
    }
}

pub(crate) fn write_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    for row in grid.to_rows() {
        let line: Vec<String> = row
            .iter()
            .map(|&cell| format!("{:>3}{}", cell.value(), marker(cell)))
            .collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    write_stats(out, &grid.stats())
}

pub(crate) fn write_stats(out: &mut impl Write, stats: &GridStats) -> io::Result<()> {
    writeln!(out, "{stats}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_grid_core::{apply_click, create_grid};

    #[test]
    fn marks_even_odd_and_locked_cells() {
        let mut grid = create_grid();
        for _ in 0..15 {
            grid = apply_click(&grid, 0, 0).unwrap();
        }
        grid = apply_click(&grid, 2, 2).unwrap();

        let mut out = Vec::new();
        write_grid(&mut out, &grid).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            " 15#   0.   0.\n  6.   0.   0.\n  0.   0.   1*\ntotal=22 locked=1/9\n"
        );
    }
}
