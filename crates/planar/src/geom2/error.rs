use thiserror::Error;

/// Errors surfaced by constructors and precondition-checked predicates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    #[error("line has no defined start and end points")]
    NoEndpoints,

    #[error("lines are not inclined")]
    NotInclined,

    #[error("degenerate line: defining points coincide or coefficients vanish")]
    DegenerateLine,

    #[error("polygon needs at least 3 vertices, got {actual}")]
    TooFewVertices { actual: usize },

    #[error("invalid circle radius {radius}")]
    InvalidRadius { radius: f64 },

    #[error("circle coefficients give a negative squared radius ({radius_sq})")]
    ImaginaryCircle { radius_sq: f64 },

    #[error("points are collinear; no circle passes through them")]
    CollinearPoints,
}

pub type GeomResult<T> = Result<T, GeomError>;
