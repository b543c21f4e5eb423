//! Entropy and information-gain scoring.
//!
//! Entropy here uses a logarithm base equal to the number of distinct
//! class labels present in the scored subset, which normalizes every
//! node's impurity to `[0, 1]` no matter how many classes remain. This is
//! not the fixed-base textbook definition and must hold exactly for the
//! trace output to be reproducible.

use crate::data::Table;

/// Entropy of the class labels over `rows`.
///
/// Empty subsets and subsets with a single distinct label score 0.0.
pub fn entropy(table: &Table, rows: &[u32]) -> f64 {
    let counts = table.class_counts(rows);
    if counts.len() <= 1 {
        return 0.0;
    }

    let n = rows.len() as f64;
    let ln_base = (counts.len() as f64).ln();
    -counts
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            p * (p.ln() / ln_base)
        })
        .sum::<f64>()
}

/// Information gain of the full multi-way partition of `rows` by `attr`.
pub fn information_gain(table: &Table, rows: &[u32], attr: usize, base_entropy: f64) -> f64 {
    debug_assert!(!rows.is_empty());

    let n = rows.len() as f64;
    let mut weighted = 0.0;
    for value in table.distinct_values(attr, rows) {
        let group = table.filter(rows, attr, value);
        weighted += group.len() as f64 / n * entropy(table, &group);
    }
    base_entropy - weighted
}

/// Gain of splitting `rows` into the group matching the first observed
/// value of `attr` and everything else.
///
/// This two-group proxy is only ever used to score candidates during
/// attribute selection; built trees always branch on the full multi-way
/// partition.
pub fn two_way_gain(table: &Table, rows: &[u32], attr: usize, base_entropy: f64) -> f64 {
    debug_assert!(!rows.is_empty());

    let first = table.attr_value(rows[0], attr);
    let (hits, rest): (Vec<u32>, Vec<u32>) = rows
        .iter()
        .copied()
        .partition(|&row| table.attr_value(row, attr) == first);

    let p = hits.len() as f64 / rows.len() as f64;
    base_entropy - p * entropy(table, &hits) - (1.0 - p) * entropy(table, &rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_f64;
    use crate::data::Table;
    use crate::testing::{table_of, DEFAULT_TOLERANCE};
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn empty_subset_has_zero_entropy() {
        let table = table_of(&[&["a", "yes"]]);
        assert_eq!(entropy(&table, &[]), 0.0);
    }

    #[test]
    fn pure_subset_has_zero_entropy() {
        let table = table_of(&[&["a", "yes"], &["b", "yes"], &["c", "yes"]]);
        assert_eq!(entropy(&table, &table.all_rows()), 0.0);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    fn uniform_labels_have_unit_entropy(#[case] n_classes: usize) {
        let rows: Vec<Vec<String>> = (0..n_classes)
            .map(|c| vec!["v".to_string(), format!("class{c}")])
            .collect();
        let table = Table::from_rows(rows).unwrap();

        assert_approx_eq_f64!(entropy(&table, &table.all_rows()), 1.0, DEFAULT_TOLERANCE);
    }

    #[test]
    fn skewed_two_class_entropy_matches_the_closed_form() {
        let table = table_of(&[&["a", "yes"], &["b", "yes"], &["c", "yes"], &["d", "no"]]);

        let log2 = |p: f64| p.ln() / 2f64.ln();
        let expected = -(0.75 * log2(0.75) + 0.25 * log2(0.25));
        assert_eq!(entropy(&table, &table.all_rows()), expected);
    }

    #[test]
    fn fully_informative_attribute_recovers_the_base_entropy() {
        let table = table_of(&[&["a", "yes"], &["a", "yes"], &["b", "no"], &["b", "no"]]);
        let rows = table.all_rows();
        let base = entropy(&table, &rows);

        assert_eq!(base, 1.0);
        assert_eq!(information_gain(&table, &rows, 0, base), base);
        assert_eq!(two_way_gain(&table, &rows, 0, base), base);
    }

    #[test]
    fn single_valued_attribute_has_zero_gain() {
        let table = table_of(&[&["c", "yes"], &["c", "no"], &["c", "yes"]]);
        let rows = table.all_rows();
        let base = entropy(&table, &rows);

        assert_eq!(information_gain(&table, &rows, 0, base), 0.0);
        assert_eq!(two_way_gain(&table, &rows, 0, base), 0.0);
    }

    #[test]
    fn uninformative_two_way_split_has_zero_gain() {
        // Both halves mirror the parent distribution.
        let table = table_of(&[&["a", "yes"], &["a", "no"], &["b", "yes"], &["b", "no"]]);
        let rows = table.all_rows();
        let base = entropy(&table, &rows);

        assert_approx_eq_f64!(two_way_gain(&table, &rows, 0, base), 0.0, DEFAULT_TOLERANCE);
    }

    #[test]
    fn base_renormalization_can_produce_negative_gain() {
        // Three classes at the parent, two at each child: the children are
        // renormalized to base 2, which inflates their weighted entropy
        // past the parent's base-3 value.
        let table = table_of(&[&["x", "a"], &["x", "b"], &["y", "a"], &["y", "c"]]);
        let rows = table.all_rows();
        let base = entropy(&table, &rows);

        assert!(information_gain(&table, &rows, 0, base) < 0.0);
    }

    proptest! {
        #[test]
        fn entropy_stays_in_the_unit_interval(
            labels in proptest::collection::vec(0u8..5, 1..40)
        ) {
            let rows: Vec<Vec<String>> = labels
                .iter()
                .map(|l| vec!["v".to_string(), format!("class{l}")])
                .collect();
            let table = Table::from_rows(rows).unwrap();
            let h = entropy(&table, &table.all_rows());

            prop_assert!((0.0..=1.0 + 1e-12).contains(&h));
        }
    }
}
