//! Tests for grid construction, bounds checks, tile access, and neighbor lookup

#[cfg(test)]
mod tests {
    use tilegrid::io::configuration::MAX_GRID_DIMENSION;
    use tilegrid::{Grid, GridError};

    fn coordinate_grid(width: usize, height: usize) -> Option<Grid<[usize; 2]>> {
        Grid::from_fn(width, height, |x, y| [x, y]).ok()
    }

    // Tests every in-range coordinate is valid and readable
    // Verified by swapping width and height in the bounds check
    #[test]
    fn test_all_in_range_coordinates_are_valid_and_readable() {
        let Some(grid) = coordinate_grid(4, 3) else {
            unreachable!("4x3 grid should be constructible");
        };

        for y in 0..3 {
            for x in 0..4 {
                assert!(grid.is_valid(x, y));
                assert!(grid.tile(x, y).is_ok_and(|&tile| tile == [x, y]));
            }
        }
    }

    // Tests coordinates outside the grid, including negatives, are invalid
    // Verified by using <= instead of < in is_valid
    #[test]
    fn test_out_of_range_coordinates_are_invalid() {
        let Some(grid) = coordinate_grid(4, 3) else {
            unreachable!("4x3 grid should be constructible");
        };

        assert!(!grid.is_valid(4, 0));
        assert!(!grid.is_valid(0, 3));
        assert!(!grid.is_valid(-1_i32, 0));
        assert!(!grid.is_valid(0_i64, -1));
        assert!(!grid.is_valid(usize::MAX, usize::MAX));
        assert!(grid.is_valid(3_u8, 2));
    }

    // Tests out-of-range tile access reports the coordinates and grid size
    // Verified by clamping coordinates instead of failing
    #[test]
    fn test_tile_out_of_bounds_is_an_error() {
        let Some(grid) = coordinate_grid(3, 3) else {
            unreachable!("3x3 grid should be constructible");
        };

        match grid.tile(5, 5) {
            Err(GridError::IndexOutOfBounds {
                x,
                y,
                width,
                height,
            }) => {
                assert_eq!((x, y), (5, 5));
                assert_eq!((width, height), (3, 3));
            }
            other => unreachable!("Expected IndexOutOfBounds, got {other:?}"),
        }

        assert!(grid.tile(3, 0).is_err());
        assert!(grid.tile(0, 3).is_err());
    }

    // Tests neighbor order for the center tile is left, right, down, up
    // Verified by reordering the direction table
    #[test]
    fn test_center_neighbors_in_fixed_order() {
        let Some(grid) = coordinate_grid(3, 3) else {
            unreachable!("3x3 grid should be constructible");
        };

        let neighbors: Vec<[usize; 2]> = grid.neighbors(1, 1).into_iter().copied().collect();
        assert_eq!(neighbors, vec![[0, 1], [2, 1], [1, 2], [1, 0]]);
    }

    // Tests the corner drops the left and up offsets
    // Verified by removing the bounds filter
    #[test]
    fn test_corner_neighbors_filter_off_grid_offsets() {
        let Some(grid) = coordinate_grid(3, 3) else {
            unreachable!("3x3 grid should be constructible");
        };

        let neighbors: Vec<[usize; 2]> = grid.neighbors(0, 0).into_iter().copied().collect();
        assert_eq!(neighbors, vec![[1, 0], [0, 1]]);

        let far_corner: Vec<[usize; 2]> = grid.neighbors(2, 2).into_iter().copied().collect();
        assert_eq!(far_corner, vec![[1, 2], [2, 1]]);
    }

    // Tests a single-tile grid has no neighbors
    #[test]
    fn test_single_tile_grid_has_no_neighbors() {
        let Some(grid) = coordinate_grid(1, 1) else {
            unreachable!("1x1 grid should be constructible");
        };

        assert!(grid.neighbors(0, 0).is_empty());
        assert!(grid.neighbor_positions(0, 0).is_empty());
    }

    // Tests neighbors never include diagonals and never exceed four
    // Verified by adding a diagonal offset to the direction table
    #[test]
    fn test_neighbors_are_axis_aligned() {
        let Some(grid) = coordinate_grid(5, 4) else {
            unreachable!("5x4 grid should be constructible");
        };

        for ([x, y], _) in grid.iter() {
            let positions = grid.neighbor_positions(x, y);
            assert!(positions.len() <= 4);
            for [nx, ny] in positions {
                assert_eq!(nx.abs_diff(x) + ny.abs_diff(y), 1);
                assert!(grid.is_valid(nx, ny));
            }
        }
    }

    // Tests positions outside the grid only yield neighbors that are inside it
    #[test]
    fn test_neighbors_of_off_grid_position_are_filtered() {
        let Some(grid) = coordinate_grid(3, 3) else {
            unreachable!("3x3 grid should be constructible");
        };

        assert_eq!(grid.neighbor_positions(3, 1), vec![[2, 1]]);
        assert!(grid.neighbors(5, 5).is_empty());
    }

    // Tests zero and oversized dimensions are rejected
    // Verified by removing the zero check
    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(matches!(
            Grid::new(0, 3, 0_u8),
            Err(GridError::InvalidDimension { axis: "width", value: 0, .. })
        ));
        assert!(matches!(
            Grid::new(3, 0, 0_u8),
            Err(GridError::InvalidDimension { axis: "height", value: 0, .. })
        ));
        assert!(matches!(
            Grid::<u8>::with_default(MAX_GRID_DIMENSION + 1, 1),
            Err(GridError::InvalidDimension { axis: "width", .. })
        ));
    }

    // Tests dimension accessors report width before height
    #[test]
    fn test_dimensions() {
        let Ok(grid) = Grid::new(7, 2, 'x') else {
            unreachable!("7x2 grid should be constructible");
        };

        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.dimensions(), (7, 2));
        assert_eq!(grid.len(), 14);
        assert!(!grid.is_empty());
    }

    // Tests writes through a row are visible through the matching column
    // Verified by keeping a separate column store
    #[test]
    fn test_row_and_column_views_share_tiles() {
        let Ok(mut grid) = Grid::new(3, 2, 0_u32) else {
            unreachable!("3x2 grid should be constructible");
        };

        if let Ok(tile) = grid.tile_mut(2, 1) {
            *tile = 9;
        }
        assert!(grid.set_tile(0, 0, 4).is_ok_and(|previous| previous == 0));

        let row = grid.row(1).ok().map(|row| row.to_vec());
        let column = grid.column(2).ok().map(|column| column.to_vec());
        assert_eq!(row, Some(vec![0, 0, 9]));
        assert_eq!(column, Some(vec![0, 9]));

        for ([x, y], &tile) in grid.iter() {
            let via_row = grid.row(y).ok().and_then(|row| row.get(x).copied());
            let via_column = grid.column(x).ok().and_then(|column| column.get(y).copied());
            assert_eq!(via_row, Some(tile));
            assert_eq!(via_column, Some(tile));
        }
    }

    // Tests lane iteration covers every row and column in order
    #[test]
    fn test_rows_and_columns_iterate_in_order() {
        let Some(grid) = coordinate_grid(3, 2) else {
            unreachable!("3x2 grid should be constructible");
        };

        let rows: Vec<Vec<[usize; 2]>> = grid.rows().map(|row| row.to_vec()).collect();
        assert_eq!(
            rows,
            vec![vec![[0, 0], [1, 0], [2, 0]], vec![[0, 1], [1, 1], [2, 1]]]
        );

        let columns: Vec<Vec<[usize; 2]>> = grid.columns().map(|column| column.to_vec()).collect();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns.first(), Some(&vec![[0, 0], [0, 1]]));

        assert!(grid.row(2).is_err());
        assert!(grid.column(3).is_err());
    }

    // Tests mutation through set_tile rejects out-of-range positions
    #[test]
    fn test_set_tile_out_of_bounds() {
        let Ok(mut grid) = Grid::new(2, 2, 'a') else {
            unreachable!("2x2 grid should be constructible");
        };

        assert!(grid.set_tile(2, 0, 'b').is_err());
        assert!(grid.iter().all(|(_, &tile)| tile == 'a'));
    }
}
