//! Text rendering of the cube as an unfolded net.
//!
//! ```text
//!       U U U
//!       U U U
//!       U U U
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//! L L L F F F R R R B B B
//!       D D D
//!       D D D
//!       D D D
//! ```

use cubedrill_core::{Face, Lattice};
use owo_colors::OwoColorize;

/// Rows of faces in the net. `None` is blank space.
const NET_LAYOUT: [[Option<Face>; 4]; 3] = [
    [None, Some(Face::U), None, None],
    [Some(Face::L), Some(Face::F), Some(Face::R), Some(Face::B)],
    [None, Some(Face::D), None, None],
];

/// Renders the stickers of the cube as a net, either as letters or as colored
/// blocks.
pub fn render(lattice: &Lattice, color: bool) -> String {
    let mut out = String::new();
    for layout_row in NET_LAYOUT {
        let colors = layout_row.map(|face| face.map(|f| lattice.face_colors(f)));
        for row in 0..3 {
            let mut line = String::new();
            for face_colors in &colors {
                for col in 0..3 {
                    match face_colors {
                        Some(stickers) => line += &sticker(stickers[row][col], color),
                        None => line += "  ",
                    }
                }
            }
            out += line.trim_end();
            out.push('\n');
        }
    }
    out
}

fn sticker(face: Face, color: bool) -> String {
    if color {
        let (r, g, b) = face_rgb(face);
        "  ".on_truecolor(r, g, b).to_string()
    } else {
        format!("{} ", face.symbol())
    }
}

/// Returns the standard color scheme: white on top, green in front.
fn face_rgb(face: Face) -> (u8, u8, u8) {
    match face {
        Face::R => (0xc4, 0x1e, 0x3a),
        Face::L => (0xff, 0x58, 0x00),
        Face::U => (0xff, 0xff, 0xff),
        Face::D => (0xff, 0xd5, 0x00),
        Face::F => (0x00, 0x9e, 0x60),
        Face::B => (0x00, 0x51, 0xba),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_net() {
        let expected = "      U U U
      U U U
      U U U
L L L F F F R R R B B B
L L L F F F R R R B B B
L L L F F F R R R B B B
      D D D
      D D D
      D D D
";
        assert_eq!(render(&Lattice::solved(), false), expected);
    }

    #[test]
    fn test_net_after_r() {
        let mut lattice = Lattice::solved();
        lattice.apply("R");
        let expected = "      U U F
      U U F
      U U F
L L L F F D R R R U B B
L L L F F D R R R U B B
L L L F F D R R R U B B
      D D B
      D D B
      D D B
";
        assert_eq!(render(&lattice, false), expected);
    }
}
