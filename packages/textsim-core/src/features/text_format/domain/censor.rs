//! Substring masking
//!
//! Masks are applied one after the other. Each pass runs on the output of the
//! previous one, so a later mask can match text produced by an earlier
//! replacement:
//!
//! ```text
//! censor_all("ab", ["a", "#b"], '#')
//!   "ab"  --"a"-->  "#b"  --"#b"-->  "##"
//! ```
//!
//! A simultaneous replace would stop at "#b".

/// Default replacement char
pub const DEFAULT_REPLACEMENT: char = '*';

/// Replace every non-overlapping occurrence of `mask`, scanning left to right,
/// with `replacement` repeated once per `char` of `mask`
///
/// An empty mask leaves the input unchanged.
pub fn censor(input: &str, mask: &str, replacement: char) -> String {
    if mask.is_empty() {
        return input.to_string();
    }

    let run: String = std::iter::repeat(replacement)
        .take(mask.chars().count())
        .collect();

    input.replace(mask, &run)
}

/// Apply [`censor`] for each mask, in order
pub fn censor_all<S>(input: &str, masks: &[S], replacement: char) -> String
where
    S: AsRef<str>,
{
    masks
        .iter()
        .fold(input.to_string(), |current, mask| censor(&current, mask.as_ref(), replacement))
}
