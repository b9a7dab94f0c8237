//! Human-readable list joining ("a, b and c")

/// Join with `separator` between items and `last_separator` before the final one
///
/// - `[]` -> `""`
/// - `[x]` -> `"x"` (no separator applied)
///
/// # Example
/// ```
/// use textsim_core::features::text_format::join;
///
/// assert_eq!(join(&["a", "b", "c"], ", ", " and "), "a, b and c");
/// ```
pub fn join<S>(items: &[S], separator: &str, last_separator: &str) -> String
where
    S: AsRef<str>,
{
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let capacity = items.iter().map(|s| s.as_ref().len()).sum::<usize>()
                + separator.len() * (head.len() - 1)
                + last_separator.len();
            let mut builder = String::with_capacity(capacity);

            for (idx, item) in head.iter().enumerate() {
                if idx > 0 {
                    builder.push_str(separator);
                }
                builder.push_str(item.as_ref());
            }

            builder.push_str(last_separator);
            builder.push_str(last.as_ref());
            builder
        }
    }
}
