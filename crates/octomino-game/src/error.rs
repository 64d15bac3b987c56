use octomino_catalog::CatalogError;

/// Errors returned when a session cannot start.
///
/// A failed start leaves the session untouched.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The catalog could not be loaded or has no suitable puzzle.
    #[display("failed to select a puzzle: {_0}")]
    Catalog(#[from] CatalogError),
    /// The selected puzzle does not decode to a full set of shapes.
    #[display("puzzle has {len} shapes, expected 8")]
    IncompleteSolution {
        /// Number of decoded shapes.
        len: usize,
    },
}

/// Reason why another shape cannot be added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum AddShapeBlockReason {
    /// No puzzle has been started.
    #[display("the game has not started")]
    NotStarted,
    /// All eight shapes are on the board.
    #[display("all shapes are placed")]
    AllPlaced,
    /// Two placed shapes share a cell.
    #[display("shapes overlap")]
    Overlapping,
}
