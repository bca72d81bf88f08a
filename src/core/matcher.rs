use crate::core::distance::distance;

pub const COMPONENT_DELIMITER: char = '-';

/// Highest similarity between any component of `candidate` and any reference.
///
/// With `split` the candidate is broken on `-` first, so `paypal-secure-login`
/// saturates against `paypal`. Returns `0.0` when there are no references.
pub fn best_match<S: AsRef<str>>(candidate: &str, references: &[S], split: bool) -> f64 {
    best_match_iter(candidate, references.iter().map(|r| r.as_ref()), split)
}

pub fn best_match_iter<'r, I>(candidate: &str, references: I, split: bool) -> f64
where
    I: IntoIterator<Item = &'r str>,
{
    let parts: Vec<&str> = if split {
        candidate.split(COMPONENT_DELIMITER).collect()
    } else {
        vec![candidate]
    };

    let mut ceil = 0.0f64;
    for reference in references {
        for part in parts.iter() {
            let score = distance(part, reference);
            if score > ceil {
                ceil = score;
            }
        }
    }
    ceil
}
