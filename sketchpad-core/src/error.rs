use thiserror::Error;

/// The single failure mode of the canvas.
///
/// Every operation checks its arguments up front and returns this before
/// any cell is touched, so a failed call leaves the canvas unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("{name} must be a positive integer, got {value}")]
    Dimension { name: &'static str, value: i32 },

    #[error(
        "{width}x{height} canvas exceeds the limit of {} cells",
        crate::canvas::MAX_CELLS
    )]
    TooLarge { width: i32, height: i32 },

    #[error("point ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("line ({x1}, {y1}) -> ({x2}, {y2}) is neither horizontal nor vertical")]
    Diagonal { x1: i32, y1: i32, x2: i32, y2: i32 },
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
