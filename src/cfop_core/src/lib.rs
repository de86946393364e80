#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]

// The last layer is seen from above with the front face at the bottom. The back and front
// rows run left to right in that view, and the left and right rows run back to front.

pub mod catalog;
pub mod cube;
pub mod flashcards;
pub mod notation;
pub mod oll;
pub mod pll;
pub mod rotation;
pub mod search;
pub mod topology;

pub use cube::{
    Color, LastLayerColors, Orientation, Position, Side, SideColor, SideColors, SideRow, TopFace,
};
pub use notation::{MoveSequence, NotationError, TriggerBook, expand, parse_markup};
pub use oll::{OllCase, OllOrientations, OrientationError, oll_to_colors};
pub use pll::{PllCase, pll_to_colors};
pub use rotation::{Yaw, rotate_pll_colors};
pub use topology::{Adjacency, PositionKind, lookup};
