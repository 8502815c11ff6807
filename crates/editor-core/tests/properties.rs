//! Property-style tests over randomized inputs (§8 "Testable Properties").

use editor_core::{Caret, CaretSet, LineStore, Position};
use rand::seq::SliceRandom;
use rand::Rng;

fn pos(line: usize, column: usize) -> Position {
    Position::new(line, column)
}

/// For any set of carets with overlapping or touching-point selections, the final merged
/// `CaretSet` is the same regardless of insertion order.
#[test]
fn caret_merge_is_order_independent() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let mut spans = Vec::new();
        for _ in 0..6 {
            let a = rng.gen_range(0..30);
            let b = rng.gen_range(0..30);
            spans.push((a.min(b), a.max(b)));
        }

        let build = |order: &[usize]| {
            let mut set: Option<CaretSet> = None;
            for &i in order {
                let (lo, hi) = spans[i];
                let caret = Caret {
                    active: pos(0, lo),
                    anchor: pos(0, hi),
                    baseline: None,
                };
                match &mut set {
                    Some(s) => s.insert(caret),
                    None => set = Some(CaretSet::single(caret)),
                }
            }
            set.unwrap()
                .carets()
                .iter()
                .map(|c| c.selection())
                .collect::<Vec<_>>()
        };

        let mut forward: Vec<usize> = (0..spans.len()).collect();
        let mut shuffled = forward.clone();
        shuffled.shuffle(&mut rng);

        let a = build(&forward);
        let b = build(&shuffled);
        assert_eq!(a, b, "spans={spans:?} forward={forward:?} shuffled={shuffled:?}");

        forward.clear(); // silence unused-mut in case spans.len() == 0, defensive only
    }
}

/// Loading then saving a document byte-for-byte preserves its original text, regardless
/// of line ending mix.
#[test]
fn load_save_round_trip_preserves_arbitrary_text() {
    let mut rng = rand::thread_rng();
    let alphabet = ["a", "b", "\n", "\r", "\r\n", " ", "word "];
    for _ in 0..200 {
        let len = rng.gen_range(0..40);
        let mut text = String::new();
        for _ in 0..len {
            text.push_str(alphabet[rng.gen_range(0..alphabet.len())]);
        }
        let store = LineStore::load_str(&text);
        assert_eq!(store.save_to_string(), text);
    }
}

/// A `CaretSet` never contains two carets whose selections overlap (point-in-range
/// absorption and general-union merging leave no overlapping pairs behind).
#[test]
fn caret_set_never_retains_overlapping_pairs() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let mut set = CaretSet::single(Caret::at(pos(0, rng.gen_range(0..20))));
        for _ in 0..10 {
            let a = rng.gen_range(0..20);
            let b = rng.gen_range(0..20);
            set.insert(Caret {
                active: pos(0, a.min(b)),
                anchor: pos(0, a.max(b)),
                baseline: None,
            });
        }
        let carets = set.carets();
        for i in 0..carets.len() {
            for j in (i + 1)..carets.len() {
                let (a_min, a_max) = carets[i].selection();
                let (b_min, b_max) = carets[j].selection();
                let overlap = a_min < b_max && b_min < a_max;
                assert!(!overlap, "{carets:?} has overlapping pair ({i}, {j})");
            }
        }
    }
}
