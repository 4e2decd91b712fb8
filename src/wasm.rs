//! Bindings for a JavaScript renderer. Every command and query maps onto a [`Grid`] method; drawing is left to the caller.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;

use crate::board::Grid;
use crate::builder::BuilderInvalidReason;
use crate::location::Location;
use crate::shape::SquareStep;

/// A [`Grid`] owned by the JavaScript side.
#[wasm_bindgen]
pub struct PowerGame {
    grid: Grid,
}

#[wasm_bindgen]
impl PowerGame {
    /// Generate a scrambled, powered grid. Throws if either dimension is not positive.
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32, seed: u64) -> Result<PowerGame, JsError> {
        let reasons_to_error = |reasons: Vec<BuilderInvalidReason>| {
            JsError::new(&reasons.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))
        };

        let (width, height) = dims_from_js(width, height).map_err(reasons_to_error)?;
        Grid::generate(width, height, seed)
            .map(|grid| Self { grid })
            .map_err(reasons_to_error)
    }

    /// Turn the piece at `(col, row)`. Clicks outside the grid are ignored.
    pub fn rotate(&mut self, col: usize, row: usize) -> bool {
        self.grid.rotate(Location(col, row)).is_ok()
    }

    /// Move the source; `direction` is 0 for left, 1 up, 2 right, 3 down. Returns whether it moved.
    #[wasm_bindgen(js_name = moveSource)]
    pub fn move_source(&mut self, direction: u8) -> bool {
        let direction = match direction {
            0 => SquareStep::Left,
            1 => SquareStep::Up,
            2 => SquareStep::Right,
            3 => SquareStep::Down,
            _ => return false,
        };

        self.grid.move_source(direction)
    }

    /// Whether the piece at `(col, row)` is powered.
    #[wasm_bindgen(js_name = isLit)]
    pub fn is_lit(&self, col: usize, row: usize) -> bool {
        self.grid.is_lit(Location(col, row))
    }

    /// Hops to the source, or -1 when disconnected.
    #[wasm_bindgen(js_name = distanceToSource)]
    pub fn distance_to_source(&self, col: usize, row: usize) -> i32 {
        self.grid.distance_to_source(Location(col, row))
            .and_then(|hops| i32::try_from(hops).ok())
            .unwrap_or(-1)
    }

    /// Whether every piece is powered.
    #[wasm_bindgen(js_name = isWon)]
    pub fn is_won(&self) -> bool {
        self.grid.is_won()
    }

    /// Hop budget of the source.
    pub fn radius(&self) -> usize {
        self.grid.radius()
    }

    /// Lit state of every piece, column-major, one byte each.
    #[wasm_bindgen(js_name = litMask)]
    pub fn lit_mask(&self) -> Uint8Array {
        let mask = self.grid.pieces.iter().map(|piece| piece.lit as u8).collect::<Vec<_>>();
        Uint8Array::from(mask.as_slice())
    }

    /// The text rendering from [`Grid`]'s `Display`.
    pub fn render(&self) -> String {
        self.grid.to_string()
    }
}

/// Convert a JavaScript width and height, rejecting anything below one before it reaches the builder.
pub(crate) fn dims_from_js(width: i32, height: i32) -> Result<(usize, usize), Vec<BuilderInvalidReason>> {
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(width), Ok(height)) if width > 0 && height > 0 => Ok((width, height)),
        _ => Err(vec![BuilderInvalidReason::ZeroDimension]),
    }
}
