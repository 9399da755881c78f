//! Fehlertypen des Pfad-Kerns.

use thiserror::Error;

/// Ungültiger Pfad-Zustand für eine Operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathStateError {
    /// Segmente können nur an offene Pfade angehängt werden
    #[error("Segment kann nicht an einen geschlossenen Pfad angehängt werden")]
    SegmentOnClosedPath,
    /// Operation benötigt mindestens ein Segment
    #[error("Pfad enthält keine Punkte")]
    EmptyPath,
    /// Punktanzahl passt nicht zur Topologie (offen: 3n+1, geschlossen: 3n)
    #[error("Punktanzahl {len} ist ungültig (geschlossen: {closed})")]
    InvalidPointCount { len: usize, closed: bool },
}

/// Fehler der `BezierPath`-API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Punkt-Index außerhalb von `[0, point_count)`
    #[error("Punkt-Index {index} außerhalb des Bereichs (Punkte: {len})")]
    IndexOutOfBounds { index: usize, len: usize },
    /// Segment-Index außerhalb von `[0, segment_count)`
    #[error("Segment-Index {segment} außerhalb des Bereichs (Segmente: {count})")]
    SegmentOutOfBounds { segment: usize, count: usize },
    /// Index adressiert ein Handle, erwartet wird ein Anker
    #[error("Punkt {index} ist kein Anker")]
    NotAnAnchor { index: usize },
    /// Operation im aktuellen Zustand nicht erlaubt
    #[error(transparent)]
    InvalidState(#[from] PathStateError),
    /// Parameter außerhalb des gültigen Wertebereichs
    #[error("Ungültiges Argument `{name}`: {value}")]
    InvalidArgument { name: &'static str, value: f32 },
}

/// Ergebnis-Typ des Pfad-Kerns.
pub type PathResult<T> = Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_converts_into_path_error() {
        let err: PathError = PathStateError::SegmentOnClosedPath.into();
        assert_eq!(
            err,
            PathError::InvalidState(PathStateError::SegmentOnClosedPath)
        );
        assert!(err.to_string().contains("geschlossenen"));
    }

    #[test]
    fn test_invalid_point_count_message() {
        let err = PathStateError::InvalidPointCount {
            len: 5,
            closed: false,
        };
        assert_eq!(
            err.to_string(),
            "Punktanzahl 5 ist ungültig (geschlossen: false)"
        );
    }
}
