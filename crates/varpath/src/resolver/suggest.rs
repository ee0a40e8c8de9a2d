use strsim::levenshtein;

/// Returns up to three `available` keys close to a missed member `name`,
/// closest first.
///
/// Names of three characters or fewer allow one edit, longer names two.
/// Exact matches are not suggestions.
///
/// ```
/// use varpath::compute_suggestions;
///
/// let keys = vec!["name".to_string(), "email".to_string()];
/// assert_eq!(compute_suggestions("nmae", &keys), vec!["name"]);
/// ```
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, key)| key.clone())
        .collect()
}
