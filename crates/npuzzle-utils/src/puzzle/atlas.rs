use serde::{Deserialize, Serialize};

use super::board::BoardError;

/// Pixel rectangle inside the source image. The origin is the image's
/// bottom-left corner, so callers indexing the board top-down get their
/// rows flipped here rather than at every draw site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Cut the source image into one region per home index (row-major, row 0 at
/// the top of the board). Each region is `image_width / cols` by
/// `image_height / rows` pixels; any remainder is trimmed off the far edges.
///
/// Fails when the grid has fewer than 2 cells or the image is too small to
/// give every tile at least one pixel.
pub fn slice(
    image_width: u32,
    image_height: u32,
    cols: u32,
    rows: u32,
) -> Result<Vec<Region>, BoardError> {
    let invalid = BoardError::InvalidDimensions {
        width: cols as usize,
        height: rows as usize,
    };
    if cols == 0 || rows == 0 || (cols as usize) * (rows as usize) < 2 {
        return Err(invalid);
    }
    let tile_w = image_width / cols;
    let tile_h = image_height / rows;
    if tile_w == 0 || tile_h == 0 {
        return Err(invalid);
    }
    let mut regions = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            // board row 0 is the top of the image; region rows count from
            // the bottom
            let flipped = rows - 1 - row;
            regions.push(Region {
                x: col * tile_w,
                y: flipped * tile_h,
                width: tile_w,
                height: tile_h,
            });
        }
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_row_major_with_bottom_left_origin() {
        let regions = slice(300, 300, 3, 3).unwrap();
        assert_eq!(regions.len(), 9);
        // home index 0 is the board's top-left: top row of the image,
        // which is the highest y under a bottom-left origin
        assert_eq!(regions[0], Region { x: 0, y: 200, width: 100, height: 100 });
        // last home index is the bottom-right: y = 0
        assert_eq!(regions[8], Region { x: 200, y: 0, width: 100, height: 100 });
        assert_eq!(regions[4], Region { x: 100, y: 100, width: 100, height: 100 });
    }

    #[test]
    fn non_square_grids_divide_evenly() {
        let regions = slice(400, 300, 4, 3).unwrap();
        assert_eq!(regions.len(), 12);
        assert!(regions.iter().all(|r| r.width == 100 && r.height == 100));
        // second board row sits one region below the top
        assert_eq!(regions[4].y, 100);
    }

    #[test]
    fn remainder_pixels_are_trimmed() {
        let regions = slice(100, 100, 3, 3).unwrap();
        assert!(regions.iter().all(|r| r.width == 33 && r.height == 33));
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert!(slice(300, 300, 0, 3).is_err());
        assert!(slice(300, 300, 1, 1).is_err());
        // image smaller than the grid leaves zero-pixel tiles
        assert!(slice(2, 300, 3, 3).is_err());
    }
}
