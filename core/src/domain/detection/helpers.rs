use std::cmp::Ordering;

use crate::domain::detection::{entities::DishPrediction, labels};

/// Rank class probabilities and keep the `k` best predictions.
///
/// Ordering is (probability desc, index asc), so equal probabilities resolve
/// to the lower class index and the selection is deterministic. Indices
/// outside the label table are dropped.
pub fn top_predictions(probabilities: &[f32], k: usize) -> Vec<DishPrediction> {
    let mut ranked: Vec<(usize, f32)> = probabilities.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    ranked
        .into_iter()
        .filter_map(|(index, score)| {
            labels::label(index).map(|label| DishPrediction {
                index,
                label: label.to_string(),
                score,
            })
        })
        .take(k)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_k_highest_scores() {
        let mut probs = vec![0.0_f32; 107];
        probs[67] = 0.5; // omelette
        probs[44] = 0.3; // fried_rice
        probs[76] = 0.1; // pizza

        let top = top_predictions(&probs, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].label, "omelette");
        assert_eq!(top[1].label, "fried_rice");
    }

    #[test]
    fn ties_resolve_to_the_lower_index() {
        let mut probs = vec![0.0_f32; 107];
        probs[5] = 0.2;
        probs[3] = 0.2;
        probs[90] = 0.2;

        let top = top_predictions(&probs, 3);
        let indices: Vec<usize> = top.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![3, 5, 90]);
    }

    #[test]
    fn out_of_range_indices_are_dropped() {
        // Vector longer than the label table: the excess classes never rank.
        let mut probs = vec![0.0_f32; 120];
        probs[110] = 0.9;
        probs[0] = 0.1;

        let top = top_predictions(&probs, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].label, "apple_pie");
    }

    #[test]
    fn shorter_vector_yields_fewer_predictions() {
        let probs = vec![0.7_f32, 0.3];
        let top = top_predictions(&probs, 5);
        assert_eq!(top.len(), 2);
    }
}
