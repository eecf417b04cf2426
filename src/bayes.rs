//! Discrete Bayes posterior update.

/// Posterior probabilities for a set of hypotheses given one evidence
/// event.
///
/// ```text
/// P(Hᵢ|E) = P(Hᵢ) · P(E|Hᵢ) / Σⱼ P(Hⱼ) · P(E|Hⱼ)
/// ```
///
/// # Returns
/// - `None` if the slices differ in length or are empty, any entry is
///   outside [0, 1], the priors do not sum to 1 (tolerance 10⁻³), or the
///   marginal Σⱼ P(Hⱼ)·P(E|Hⱼ) is zero.
///
/// # Examples
/// ```
/// use statkit::bayes::posteriors;
/// // Two machines produce 60% / 40% of output with defect rates 2% / 5%.
/// let post = posteriors(&[0.6, 0.4], &[0.02, 0.05]).unwrap();
/// assert!((post[0] - 0.375).abs() < 1e-12);
/// assert!((post[1] - 0.625).abs() < 1e-12);
/// ```
pub fn posteriors(priors: &[f64], likelihoods: &[f64]) -> Option<Vec<f64>> {
    if priors.is_empty() || priors.len() != likelihoods.len() {
        return None;
    }
    let in_unit = |v: &f64| (0.0..=1.0).contains(v);
    if !priors.iter().all(in_unit) || !likelihoods.iter().all(in_unit) {
        return None;
    }
    let prior_total: f64 = priors.iter().sum();
    if (prior_total - 1.0).abs() > 1e-3 {
        return None;
    }

    let joints: Vec<f64> = priors
        .iter()
        .zip(likelihoods)
        .map(|(p, l)| p * l)
        .collect();
    let marginal: f64 = joints.iter().sum();
    if marginal == 0.0 {
        return None;
    }
    Some(joints.into_iter().map(|j| j / marginal).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_hypotheses() {
        let post = posteriors(&[0.6, 0.4], &[0.02, 0.05]).unwrap();
        // joints 0.012 and 0.020, marginal 0.032
        assert!((post[0] - 0.375).abs() < 1e-12);
        assert!((post[1] - 0.625).abs() < 1e-12);
    }

    #[test]
    fn test_posteriors_sum_to_one() {
        let post = posteriors(&[0.3, 0.5, 0.2], &[0.1, 0.4, 0.9]).unwrap();
        let total: f64 = post.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_prior_follows_likelihoods() {
        // With a flat prior the posteriors are the normalised likelihoods.
        let post = posteriors(&[0.25; 4], &[0.1, 0.2, 0.3, 0.4]).unwrap();
        for (i, p) in post.iter().enumerate() {
            let expected = (i + 1) as f64 * 0.1 / 1.0;
            assert!((p - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_certain_evidence_concentrates() {
        // Only the second hypothesis can produce the evidence.
        let post = posteriors(&[0.7, 0.3], &[0.0, 0.4]).unwrap();
        assert_eq!(post[0], 0.0);
        assert_eq!(post[1], 1.0);
    }

    #[test]
    fn test_prior_sum_tolerance() {
        assert!(posteriors(&[0.6, 0.4004], &[0.5, 0.5]).is_some());
        assert!(posteriors(&[0.6, 0.6], &[0.5, 0.5]).is_none());
        assert!(posteriors(&[0.3, 0.3], &[0.5, 0.5]).is_none());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(posteriors(&[], &[]).is_none());
        assert!(posteriors(&[0.5, 0.5], &[0.5]).is_none());
        assert!(posteriors(&[1.2, -0.2], &[0.5, 0.5]).is_none());
        assert!(posteriors(&[0.5, 0.5], &[0.5, 1.5]).is_none());
        // Zero marginal: evidence impossible under every hypothesis.
        assert!(posteriors(&[0.5, 0.5], &[0.0, 0.0]).is_none());
    }
}
