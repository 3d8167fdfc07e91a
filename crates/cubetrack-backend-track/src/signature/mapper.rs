//! Signature matrix to cube sequence.

use cubetrack_spec::{CubeColor, HorizontalPosition, Orientation, TargetCubeData, VerticalPosition};

use super::SignatureMatrix;

/// Places one cube per `true` cell.
///
/// Every cube is blue, bottom row, right lane. The row index is the cube id
/// and picks the orientation: bottom on even rows, top on odd rows. The column
/// only decides emission order within a row.
///
/// # Example
/// ```
/// use cubetrack_backend_track::signature::{map_signature, SignatureMatrix};
/// use cubetrack_spec::Orientation;
///
/// let matrix = SignatureMatrix::new(vec![vec![true, false], vec![false, true]]);
/// let cubes = map_signature(&matrix);
/// assert_eq!(cubes.len(), 2);
/// assert_eq!(cubes[0].orientation, Orientation::Bottom);
/// assert_eq!(cubes[1].orientation, Orientation::Top);
/// ```
pub fn map_signature(matrix: &SignatureMatrix) -> Vec<TargetCubeData> {
    let mut cubes = Vec::with_capacity(matrix.set_count());

    for (row_idx, row) in matrix.rows().iter().enumerate() {
        let id = row_idx as u32;
        let orientation = if id % 2 == 0 {
            Orientation::Bottom
        } else {
            Orientation::Top
        };

        for _ in row.iter().filter(|&&cell| cell) {
            cubes.push(TargetCubeData {
                id,
                horizontal_position: HorizontalPosition::Right,
                vertical_position: VerticalPosition::Bottom,
                orientation,
                color: CubeColor::Blue,
            });
        }
    }

    cubes
}
