//! Property tests over generated straight-line diagrams

use proptest::prelude::*;
use pathwalk::types::NavigationError;
use pathwalk::traverse;

/// Cells a straight segment may be made of
fn segment_cell() -> impl Strategy<Value = char> {
    prop_oneof![
        3 => Just('-'),
        1 => Just('|'),
        2 => proptest::char::range('A', 'Z'),
    ]
}

fn segment() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment_cell(), 0..40).prop_map(|cells| cells.into_iter().collect())
}

proptest! {
    /// Letters are the uppercase cells in order; the path is the whole row
    #[test]
    fn prop_horizontal_row(indent in 0usize..5, body in segment()) {
        let row = format!("{}@{}x", " ".repeat(indent), body);
        let t = traverse(&[row.as_str()]).unwrap();

        let expected_letters: String = body.chars().filter(|c| c.is_ascii_uppercase()).collect();
        prop_assert_eq!(&t.letters, &expected_letters);
        prop_assert_eq!(t.path.as_str(), row.trim_start());
        prop_assert_eq!(t.path.chars().count(), t.steps() + 1);
    }

    /// The same segment drawn top to bottom
    #[test]
    fn prop_vertical_column(body in segment()) {
        let mut rows = vec!["@".to_string()];
        rows.extend(body.chars().map(|c| c.to_string()));
        rows.push("x".to_string());

        let t = traverse(rows.as_slice()).unwrap();
        prop_assert!(t.path.starts_with('@'));
        prop_assert!(t.path.ends_with('x'));
        prop_assert_eq!(t.path, rows.concat());
    }

    /// Repeated walks agree
    #[test]
    fn prop_deterministic(body in segment()) {
        let row = format!("@{}x", body);
        prop_assert_eq!(traverse(&[row.as_str()]), traverse(&[row.as_str()]));
    }

    /// Any extra start marker is rejected before walking
    #[test]
    fn prop_extra_start_rejected(body in segment(), gap in 1usize..4) {
        let rows = [format!("@{}x", body), String::new(), format!("{}@", " ".repeat(gap))];
        prop_assert_eq!(
            traverse(&rows[..]),
            Err(NavigationError::MultipleOrMissingStart { found: 2 })
        );
    }
}
