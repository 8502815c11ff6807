//! Multi-caret state: [`Caret`], its selection, and the merge-on-insert [`CaretSet`].

use crate::position::Position;

/// A single caret: an active end (where typing happens) and an anchor (the other end of
/// the selection). `active == anchor` is a point caret with no selection.
///
/// `baseline` remembers the horizontal pixel position used to pick a column when moving
/// vertically across lines of differing length (the C++ source computes this via
/// `_get_caret_pos_x`/`_hit_test_for_caret_x`); it is cleared by any edit that isn't a pure
/// vertical move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Caret {
    /// The end of the selection that moves when the caret is moved.
    pub active: Position,
    /// The fixed end of the selection.
    pub anchor: Position,
    /// Remembered horizontal pixel position for vertical movement, if any.
    pub baseline: Option<f64>,
}

impl Caret {
    /// A point caret (no selection) at `pos`.
    pub fn at(pos: Position) -> Self {
        Self {
            active: pos,
            anchor: pos,
            baseline: None,
        }
    }

    /// `true` if this caret has no selection.
    pub fn is_point(&self) -> bool {
        self.active == self.anchor
    }

    /// The selection as `(min, max)`. Equal to `(active, active)` for a point caret.
    pub fn selection(&self) -> (Position, Position) {
        if self.active <= self.anchor {
            (self.active, self.anchor)
        } else {
            (self.anchor, self.active)
        }
    }

    /// `true` if `pos` falls within this caret's selection, inclusive of both ends.
    pub fn contains(&self, pos: Position) -> bool {
        let (min, max) = self.selection();
        pos >= min && pos <= max
    }
}

/// Attempt to merge `new` into `existing`, returning the merged caret if their selections
/// touch closely enough to require merging, or `None` if they must remain distinct carets.
///
/// Four cases, transcribed from the source's selection-merge predicate:
/// 1. Both are points at the same position: merge to that single point.
/// 2. `new` is a point falling inside (inclusive) `existing`'s selection: `existing`
///    absorbs it, keeping `existing`'s range and orientation untouched.
/// 3. `existing` is a point falling inside `new`'s selection: symmetric to (2), `new`'s
///    range and orientation win.
/// 4. Both have a real extent and properly overlap (share more than a touching endpoint):
///    the merged caret spans their union, oriented the way `new` was facing.
///
/// Two non-point selections that merely touch at a shared endpoint are left disjoint:
/// adjacency without overlap is a permitted, stable configuration.
fn try_merge(new: Caret, existing: Caret) -> Option<Caret> {
    let (n_min, n_max) = new.selection();
    let (e_min, e_max) = existing.selection();

    if new.is_point() && existing.is_point() && new.active == existing.active {
        return Some(new);
    }
    if new.is_point() && n_min >= e_min && n_min <= e_max {
        return Some(existing);
    }
    if existing.is_point() && e_min >= n_min && e_min <= n_max {
        return Some(new);
    }
    if n_min < e_max && e_min < n_max {
        let union_min = n_min.min(e_min);
        let union_max = n_max.max(e_max);
        return Some(if new.active <= new.anchor {
            Caret {
                active: union_min,
                anchor: union_max,
                baseline: new.baseline,
            }
        } else {
            Caret {
                active: union_max,
                anchor: union_min,
                baseline: new.baseline,
            }
        });
    }
    None
}

/// The full set of carets in a document: always non-empty, always kept sorted by
/// selection start, and never containing two carets whose selections overlap or whose
/// points coincide.
#[derive(Debug, Clone)]
pub struct CaretSet {
    carets: Vec<Caret>,
    last_added: usize,
}

impl CaretSet {
    /// A set containing a single caret.
    pub fn single(caret: Caret) -> Self {
        Self {
            carets: vec![caret],
            last_added: 0,
        }
    }

    /// Insert `new`, merging with any carets it overlaps or coincides with. Merging
    /// repeats to a fixed point: absorbing one caret can bring the (now larger) selection
    /// into contact with another, so every insertion re-scans until no further merge
    /// applies, independent of the order carets were originally added in.
    pub fn insert(&mut self, mut new: Caret) {
        loop {
            let hit = self
                .carets
                .iter()
                .enumerate()
                .find_map(|(i, existing)| try_merge(new, *existing).map(|m| (i, m)));
            match hit {
                Some((i, merged)) => {
                    self.carets.remove(i);
                    new = merged;
                }
                None => break,
            }
        }
        let insert_at = self
            .carets
            .partition_point(|c| c.selection().0 < new.selection().0);
        self.carets.insert(insert_at, new);
        self.last_added = insert_at;
    }

    /// Replace the entire set with `carets`, re-running the merge algorithm as if each
    /// were inserted in turn. The final caret inserted becomes `last_added`.
    pub fn replace_all(&mut self, carets: impl IntoIterator<Item = Caret>) {
        self.carets.clear();
        self.last_added = 0;
        for c in carets {
            self.insert(c);
        }
    }

    /// All carets, in ascending order of selection start.
    pub fn carets(&self) -> &[Caret] {
        &self.carets
    }

    /// Number of carets currently in the set.
    pub fn len(&self) -> usize {
        self.carets.len()
    }

    /// The most recently inserted caret (by insertion order, post-merge).
    pub fn last_added(&self) -> Caret {
        self.carets[self.last_added]
    }

    /// Index of [`Self::last_added`] within [`Self::carets`].
    pub fn last_added_index(&self) -> usize {
        self.last_added
    }

    /// `true` if any caret's selection contains `pos`.
    pub fn contains_position(&self, pos: Position) -> bool {
        self.carets.iter().any(|c| c.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    #[test]
    fn coincident_points_merge_to_one() {
        let mut set = CaretSet::single(Caret::at(p(0, 0)));
        set.insert(Caret::at(p(0, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn point_absorbed_by_existing_range() {
        let range = Caret {
            active: p(0, 5),
            anchor: p(0, 0),
            baseline: None,
        };
        let mut set = CaretSet::single(range);
        set.insert(Caret::at(p(0, 3)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.carets()[0], range);
    }

    #[test]
    fn existing_point_absorbed_by_new_range() {
        let mut set = CaretSet::single(Caret::at(p(0, 3)));
        let incoming = Caret {
            active: p(0, 5),
            anchor: p(0, 0),
            baseline: None,
        };
        set.insert(incoming);
        assert_eq!(set.len(), 1);
        assert_eq!(set.carets()[0], incoming);
    }

    #[test]
    fn overlapping_ranges_union_with_new_orientation() {
        let mut set = CaretSet::single(Caret {
            active: p(0, 2),
            anchor: p(0, 6),
            baseline: None,
        });
        // new selection [4, 10), active at the low end (facing backward).
        set.insert(Caret {
            active: p(0, 4),
            anchor: p(0, 10),
            baseline: None,
        });
        assert_eq!(set.len(), 1);
        let merged = set.carets()[0];
        assert_eq!(merged.selection(), (p(0, 2), p(0, 10)));
        assert_eq!(merged.active, p(0, 2));
    }

    #[test]
    fn touching_ranges_stay_disjoint() {
        let mut set = CaretSet::single(Caret {
            active: p(0, 0),
            anchor: p(0, 5),
            baseline: None,
        });
        set.insert(Caret {
            active: p(0, 5),
            anchor: p(0, 10),
            baseline: None,
        });
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn merge_order_independent_for_chained_overlaps() {
        // Three carets whose pairwise overlaps chain together; regardless of insertion
        // order they must collapse to one.
        let a = Caret {
            active: p(0, 0),
            anchor: p(0, 3),
            baseline: None,
        };
        let b = Caret {
            active: p(0, 2),
            anchor: p(0, 5),
            baseline: None,
        };
        let c = Caret {
            active: p(0, 4),
            anchor: p(0, 8),
            baseline: None,
        };

        let mut forward = CaretSet::single(a);
        forward.insert(b);
        forward.insert(c);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward.carets()[0].selection(), (p(0, 0), p(0, 8)));

        let mut reverse = CaretSet::single(c);
        reverse.insert(b);
        reverse.insert(a);
        assert_eq!(reverse.len(), 1);
        assert_eq!(reverse.carets()[0].selection(), (p(0, 0), p(0, 8)));
    }

    #[test]
    fn distinct_carets_stay_sorted_by_selection_start() {
        let mut set = CaretSet::single(Caret::at(p(2, 0)));
        set.insert(Caret::at(p(0, 0)));
        set.insert(Caret::at(p(1, 0)));
        let starts: Vec<_> = set.carets().iter().map(|c| c.selection().0).collect();
        assert_eq!(starts, vec![p(0, 0), p(1, 0), p(2, 0)]);
    }
}
