//! Grid export/import as a JSON array of rows of cell objects.
//!
//! The format is a plain structural dump: no version field and no semantic
//! validation. Import only checks that the rows form a non-empty rectangle.

use crate::cell::Cell;
use crate::error::{Result, ValeError};
use crate::grid::Grid;

/// Serialize `grid` to JSON text, row-major.
pub fn serialize(grid: &Grid) -> Result<String> {
    let rows: Vec<&[Cell]> = grid.rows().collect();
    Ok(serde_json::to_string(&rows)?)
}

/// Rebuild a grid from [`serialize`] output.
///
/// Cell contents are restored as written; passability and extremum flags are
/// not recomputed.
pub fn deserialize(text: &str) -> Result<Grid> {
    let rows: Vec<Vec<Cell>> = serde_json::from_str(text)?;
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(ValeError::EmptySnapshot);
    }
    let mut cells = Vec::with_capacity(width * height);
    for (row, cells_in_row) in rows.into_iter().enumerate() {
        if cells_in_row.len() != width {
            return Err(ValeError::RaggedRow { row, found: cells_in_row.len(), expected: width });
        }
        cells.extend(cells_in_row);
    }
    Ok(Grid::from_cells(width, height, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::LandCover;
    use crate::generator::{assemble_grid, TerrainGenerator};
    use crate::request::GenerationRequest;

    #[test]
    fn round_trip_is_exact() {
        let g = TerrainGenerator::new()
            .generate(&GenerationRequest::new(90, 70).with_seed(12))
            .unwrap();
        let text = serialize(&g).unwrap();
        assert_eq!(deserialize(&text).unwrap(), g);
    }

    #[test]
    fn output_is_rows_of_cells() {
        let g = assemble_grid(3, 2, |x, _| x as f32, |_, _| LandCover::Road).unwrap();
        let v: serde_json::Value = serde_json::from_str(&serialize(&g).unwrap()).unwrap();
        let rows = v.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_array().unwrap().len(), 3);
        assert_eq!(rows[0][2]["elevation"], 2.0);
        assert_eq!(rows[1][0]["landCover"], "road");
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(deserialize("not json"), Err(ValeError::Malformed(_))));
        assert!(matches!(deserialize(r#"[[{"landCover": "lava"}]]"#), Err(ValeError::Malformed(_))));
    }

    #[test]
    fn ragged_and_empty_rejected() {
        let cell = r#"{"landCover":"meadow","elevation":1.0,"passable":true}"#;
        let ragged = format!("[[{cell},{cell}],[{cell}]]");
        assert!(matches!(
            deserialize(&ragged),
            Err(ValeError::RaggedRow { row: 1, found: 1, expected: 2 })
        ));
        assert!(matches!(deserialize("[]"), Err(ValeError::EmptySnapshot)));
        assert!(matches!(deserialize("[[]]"), Err(ValeError::EmptySnapshot)));
    }

    #[test]
    fn legacy_snapshot_imports_without_flags() {
        let text = r#"[[{"landCover":"grass","elevation":0.4,"passable":true},
                        {"landCover":"village","elevation":0.5,"passable":false}]]"#;
        let g = deserialize(text).unwrap();
        assert_eq!(g.get(0, 0).land_cover, LandCover::Meadow);
        assert_eq!(g.get(1, 0).land_cover, LandCover::Settlement);
        assert!(!g.get(1, 0).is_peak);
    }
}
