//! Terminal pictures of the cube, drawn with background colors

use std::iter;

use cfop_core::{
    Color, LastLayerColors,
    catalog::{CubeFaces, Face},
    notation::{Segment, parse_markup},
};
use itertools::Itertools;
use log::trace;
use owo_colors::OwoColorize;

use crate::config::GridSize;

/// Lines of equal visible width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    pub lines: Vec<String>,
    pub width: usize,
}

impl Picture {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Places pictures next to each other, aligned at the top
    pub fn beside(pictures: &[Picture], gap: usize) -> Picture {
        let height = pictures.iter().map(Picture::height).max().unwrap_or(0);
        let width = pictures.iter().map(|p| p.width).sum::<usize>()
            + gap * pictures.len().saturating_sub(1);

        let lines = (0..height)
            .map(|row| {
                pictures
                    .iter()
                    .map(|picture| match picture.lines.get(row) {
                        Some(line) => line.clone(),
                        None => " ".repeat(picture.width),
                    })
                    .join(&" ".repeat(gap))
            })
            .collect();

        Picture { lines, width }
    }

    /// Stacks pictures, centering the narrower ones
    pub fn above(pictures: &[Picture], gap: usize) -> Picture {
        let width = pictures.iter().map(|p| p.width).max().unwrap_or(0);

        let mut lines = Vec::new();
        for (i, picture) in pictures.iter().enumerate() {
            if i > 0 {
                lines.extend(iter::repeat_n(" ".repeat(width), gap));
            }

            let left = (width - picture.width) / 2;
            let right = width - picture.width - left;
            lines.extend(picture.lines.iter().map(|line| {
                format!("{}{line}{}", " ".repeat(left), " ".repeat(right))
            }));
        }

        Picture { lines, width }
    }
}

impl std::fmt::Display for Picture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.iter().join("\n"))
    }
}

fn sticker(color: Color, width: usize) -> String {
    let (r, g, b) = color.rgb();
    " ".repeat(width).on_truecolor(r, g, b).to_string()
}

/// Draws rows of stickers, `None` leaving a gap of the same size
fn grid(rows: &[Vec<Option<Color>>], size: GridSize) -> Picture {
    let (cell_width, cell_height) = size.cell();
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let width = columns * cell_width + columns.saturating_sub(1);

    let mut lines = Vec::new();
    for row in rows {
        let line = (0..columns)
            .map(|column| match row.get(column).copied().flatten() {
                Some(color) => sticker(color, cell_width),
                None => " ".repeat(cell_width),
            })
            .join(" ");

        lines.extend(iter::repeat_n(line, cell_height));
    }

    Picture { lines, width }
}

/// The top face seen from above with the top row of each side around it. The back row is
/// drawn first and the front row last.
pub fn last_layer(colors: &LastLayerColors, size: GridSize) -> Picture {
    let sides = &colors.sides;

    let mut rows = Vec::with_capacity(5);
    rows.push(
        iter::once(None)
            .chain(sides.back.iter().copied().map(Some))
            .chain(iter::once(None))
            .collect_vec(),
    );

    for (i, top_row) in colors.top.chunks(3).enumerate() {
        rows.push(
            iter::once(Some(sides.left[i]))
                .chain(top_row.iter().copied().map(Some))
                .chain(iter::once(Some(sides.right[i])))
                .collect_vec(),
        );
    }

    rows.push(
        iter::once(None)
            .chain(sides.front.iter().copied().map(Some))
            .chain(iter::once(None))
            .collect_vec(),
    );

    trace!("Drawing a last layer at {size:?}");
    grid(&rows, size)
}

fn face(face: Option<Face>, size: GridSize) -> Picture {
    let rows = match face {
        Some(stickers) => stickers
            .chunks(3)
            .map(|row| row.iter().copied().map(Some).collect_vec())
            .collect_vec(),
        None => vec![vec![None; 3]; 3],
    };

    grid(&rows, size)
}

/// An unfolded cube: left, front, and right in a row with the top above the front and
/// the bottom below it. Hidden faces are left blank.
pub fn cube_faces(faces: &CubeFaces, size: GridSize) -> Picture {
    let middle = Picture::beside(
        &[
            face(faces.left, size),
            face(faces.front, size),
            face(faces.right, size),
        ],
        2,
    );

    let gap = usize::from(size != GridSize::Compact);

    let mut tiers = Vec::with_capacity(3);
    if faces.top.is_some() {
        tiers.push(face(faces.top, size));
    }
    tiers.push(middle);
    if faces.bottom.is_some() {
        tiers.push(face(faces.bottom, size));
    }

    Picture::above(&tiers, gap)
}

/// Algorithm text with its markup styled: cancelled moves struck through, highlighted
/// moves in bold, rotations in purple, and trigger names in italics. Only rotations and
/// groups keep their brackets. Text that doesn't parse is returned unchanged.
pub fn algorithm(text: &str) -> String {
    let Ok(segments) = parse_markup(text) else {
        return text.to_owned();
    };

    segments
        .into_iter()
        .map(|segment| match segment {
            Segment::Cancelled(moves) => moves.strikethrough().dimmed().to_string(),
            Segment::Highlight(moves) => moves.bold().to_string(),
            Segment::Rotation(_) => segment.truecolor(160, 90, 200).to_string(),
            Segment::Trigger(key) => key.italic().to_string(),
            Segment::Group(_) | Segment::Text(_) => segment.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use cfop_core::{
        LastLayerColors,
        catalog::{CROSS_GOAL, F2L_GOAL},
    };

    use super::{Picture, algorithm, cube_faces, last_layer};
    use crate::config::GridSize;

    #[test]
    fn last_layer_sizes() {
        let colors = LastLayerColors::blank();

        let compact = last_layer(&colors, GridSize::Compact);
        assert_eq!(compact.height(), 5);
        assert_eq!(compact.width, 5 * 2 + 4);

        let normal = last_layer(&colors, GridSize::Normal);
        assert_eq!(normal.height(), 15);
        assert_eq!(normal.width, 5 * 6 + 4);
    }

    #[test]
    fn corners_of_the_last_layer_are_empty() {
        let picture = last_layer(&LastLayerColors::blank(), GridSize::Compact);
        assert!(picture.lines[0].starts_with("   "));
        assert!(picture.lines[4].starts_with("   "));
        assert!(!picture.lines[2].starts_with(' '));
    }

    #[test]
    fn hidden_faces_are_skipped() {
        let cross = cube_faces(&CROSS_GOAL, GridSize::Compact);
        let f2l = cube_faces(&F2L_GOAL, GridSize::Compact);

        assert_eq!(cross.height(), f2l.height());
        assert_eq!(cross.width, 3 * 8 + 2 * 2);
        assert_eq!(cross.height(), 3 + 3);
    }

    fn blank(width: usize, height: usize) -> Picture {
        Picture {
            lines: vec![" ".repeat(width); height],
            width,
        }
    }

    #[test]
    fn pictures_line_up() {
        let a = blank(3, 2);
        let b = blank(4, 5);

        let beside = Picture::beside(&[a.clone(), b.clone()], 1);
        assert_eq!((beside.width, beside.height()), (8, 5));
        assert!(beside.lines.iter().all(|line| line.len() == 8));

        let above = Picture::above(&[a, b], 1);
        assert_eq!((above.width, above.height()), (4, 8));
        assert!(above.lines.iter().all(|line| line.len() == 4));
    }

    #[test]
    fn plain_markup_is_untouched() {
        assert_eq!(algorithm("R U R' U'"), "R U R' U'");
        assert_eq!(algorithm("(R U R' U')"), "(R U R' U')");
        assert_ne!(algorithm("**U**"), "**U**");
    }

    #[test]
    fn markers_are_dropped_from_styled_moves() {
        let styled = algorithm("{sexy} ~U'~ **U** [u]");

        assert!(styled.contains("sexy") && styled.contains("[u]"));
        for marker in ['{', '}', '~', '*'] {
            assert!(!styled.contains(marker), "{styled:?} still has {marker}");
        }
    }
}
