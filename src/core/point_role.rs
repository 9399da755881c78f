//! Rollen der Punkte im flachen Pfad-Array und Index-Arithmetik für offene/geschlossene Pfade.
//!
//! Jeder dritte Punkt (Index `i % 3 == 0`) ist ein Anker, die beiden dazwischen
//! sind Bézier-Handles. Nachbar-Zugriffe laufen ausschließlich über
//! [`in_range`] und [`wrap_index`], damit die Offen/Geschlossen-Unterscheidung
//! nicht an jeder Aufrufstelle neu verzweigt.

/// Rolle eines Punkts im Pfad, abgeleitet aus seinem Index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointRole {
    /// Punkt, durch den die Kurve verläuft
    Anchor,
    /// Bézier-Kontrollpunkt eines benachbarten Ankers
    Handle,
}

impl PointRole {
    /// Bestimmt die Rolle aus dem Index (`i % 3 == 0` → Anker).
    pub fn of_index(index: usize) -> Self {
        if index % 3 == 0 {
            PointRole::Anchor
        } else {
            PointRole::Handle
        }
    }

    /// `true` für Anker.
    pub fn is_anchor(self) -> bool {
        self == PointRole::Anchor
    }
}

/// Prüft, ob ein (ggf. negativer) Nachbar-Index existiert.
///
/// Geschlossene Pfade haben immer einen Nachbarn (Wraparound),
/// offene Pfade nur innerhalb von `[0, len)`.
pub fn in_range(index: isize, len: usize, is_closed: bool) -> bool {
    if is_closed {
        len > 0
    } else {
        index >= 0 && (index as usize) < len
    }
}

/// Bildet einen (ggf. negativen oder zu großen) Index auf `[0, len)` ab.
///
/// `len` muss größer 0 sein.
pub fn wrap_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

/// Kombiniert [`in_range`] und [`wrap_index`]: `Some(idx)` wenn der Nachbar
/// `index + offset` existiert.
pub fn neighbor_index(index: usize, offset: isize, len: usize, is_closed: bool) -> Option<usize> {
    let raw = index as isize + offset;
    in_range(raw, len, is_closed).then(|| wrap_index(raw, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_from_index() {
        assert_eq!(PointRole::of_index(0), PointRole::Anchor);
        assert_eq!(PointRole::of_index(1), PointRole::Handle);
        assert_eq!(PointRole::of_index(2), PointRole::Handle);
        assert_eq!(PointRole::of_index(3), PointRole::Anchor);
        assert!(PointRole::of_index(9).is_anchor());
    }

    #[test]
    fn test_in_range_open() {
        assert!(!in_range(-1, 4, false));
        assert!(in_range(0, 4, false));
        assert!(in_range(3, 4, false));
        assert!(!in_range(4, 4, false));
    }

    #[test]
    fn test_in_range_closed_always_true() {
        assert!(in_range(-3, 6, true));
        assert!(in_range(8, 6, true));
        assert!(!in_range(0, 0, true));
    }

    #[test]
    fn test_wrap_index() {
        assert_eq!(wrap_index(-1, 6), 5);
        assert_eq!(wrap_index(-3, 6), 3);
        assert_eq!(wrap_index(6, 6), 0);
        assert_eq!(wrap_index(8, 6), 2);
        assert_eq!(wrap_index(2, 6), 2);
    }

    #[test]
    fn test_neighbor_index() {
        assert_eq!(neighbor_index(0, -1, 4, false), None);
        assert_eq!(neighbor_index(0, 1, 4, false), Some(1));
        assert_eq!(neighbor_index(0, -1, 6, true), Some(5));
        assert_eq!(neighbor_index(3, 3, 6, true), Some(0));
        assert_eq!(neighbor_index(3, 3, 7, false), Some(6));
        assert_eq!(neighbor_index(6, 3, 7, false), None);
    }
}
