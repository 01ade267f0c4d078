//! Cosine similarity over palm landmark sequences.
//!
//! Landmarks arrive as raw JSON values on purpose: the register endpoint never
//! validates their shape, so the stored template may contain anything the
//! client sent. Verification therefore treats every malformed point (missing
//! coordinate, non-numeric value) as "no meaningful signal" and degrades to a
//! similarity of 0.0 instead of failing the request.

use serde_json::Value;

/// A sample verifies when its similarity to the stored template reaches this.
/// Fixed policy constant, not configurable per request.
pub const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Cosine similarity between two landmark sequences.
///
/// Each point contributes its `x`, `y`, `z` scalars in that order to a
/// flattened vector; the result is `dot / (|a| * |b|)`, not clamped to
/// `[-1, 1]`. Returns 0.0 when the sequences differ in length, when either
/// flattened vector has zero magnitude, or when any point is malformed.
pub fn cosine_similarity(a: &[Value], b: &[Value]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let (Some(flat_a), Some(flat_b)) = (flatten(a), flatten(b)) else {
        return 0.0;
    };
    let dot: f64 = flat_a.iter().zip(&flat_b).map(|(x, y)| x * y).sum();
    let mag_a = flat_a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = flat_b.iter().map(|y| y * y).sum::<f64>().sqrt();
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a * mag_b)
}

/// Concatenate each point's x, y, z coordinates into one scalar sequence.
/// `None` when a point is not an object with numeric x, y and z.
fn flatten(points: &[Value]) -> Option<Vec<f64>> {
    let mut flat = Vec::with_capacity(points.len() * 3);
    for point in points {
        for key in ["x", "y", "z"] {
            flat.push(point.get(key)?.as_f64()?);
        }
    }
    Some(flat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn points(coords: &[(f64, f64, f64)]) -> Vec<Value> {
        coords
            .iter()
            .map(|(x, y, z)| json!({"x": x, "y": y, "z": z}))
            .collect()
    }

    #[test]
    fn identical_sequences_score_one() {
        let a = points(&[(1.0, 2.0, 3.0), (-0.5, 0.25, 4.0)]);
        let sim = cosine_similarity(&a, &a);
        assert!((sim - 1.0).abs() < 1e-12, "got {sim}");
    }

    #[test]
    fn unequal_lengths_score_zero() {
        let a = points(&[(1.0, 0.0, 0.0), (0.0, 1.0, 0.0)]);
        let b = points(&[(1.0, 0.0, 0.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn zero_magnitude_scores_zero() {
        let zero = points(&[(0.0, 0.0, 0.0)]);
        let b = points(&[(1.0, 2.0, 3.0)]);
        assert_eq!(cosine_similarity(&zero, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &zero), 0.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = points(&[(1.0, 2.0, 3.0)]);
        let b = points(&[(4.0, -5.0, 6.0)]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn orthogonal_sequences_score_zero() {
        let a = points(&[(1.0, 0.0, 0.0)]);
        let b = points(&[(0.0, 1.0, 0.0)]);
        assert!(cosine_similarity(&a, &b).abs() < 1e-12);
    }

    #[test]
    fn antiparallel_sequences_score_minus_one() {
        // The score is not clamped to [0, 1].
        let a = points(&[(1.0, 2.0, 3.0)]);
        let b = points(&[(-1.0, -2.0, -3.0)]);
        let sim = cosine_similarity(&a, &b);
        assert!((sim + 1.0).abs() < 1e-12, "got {sim}");
    }

    #[test]
    fn missing_coordinate_scores_zero() {
        let a = vec![json!({"x": 1.0, "y": 2.0})];
        let b = points(&[(1.0, 2.0, 3.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn non_numeric_coordinate_scores_zero() {
        let a = vec![json!({"x": "1.0", "y": 2.0, "z": 3.0})];
        let b = points(&[(1.0, 2.0, 3.0)]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn flattening_preserves_coordinate_order() {
        // (1,0,0) vs (0,1,0) differs from (1,0,0) vs (1,0,0) only through order.
        let a = points(&[(1.0, 0.0, 0.0)]);
        let reordered = vec![json!({"z": 0.0, "x": 1.0, "y": 0.0})];
        let sim = cosine_similarity(&a, &reordered);
        assert!((sim - 1.0).abs() < 1e-12);
    }
}
