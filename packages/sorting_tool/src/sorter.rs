use ::std::collections::BTreeMap;
use ::std::fmt::Display;
use ::std::io::Write;

use crate::args::{DataType, SortMode};
use crate::error::SortError;

const SORTED_PREFIX: &str = "Sorted sortedData: ";

/// Produces the report body for `tokens`: either the sorted tokens or the
/// frequency table. Tokens that are skipped while sorting numbers are
/// reported to `warnings`.
pub fn summarize<W: Write>(
    data_type: DataType,
    sort_mode: SortMode,
    tokens: &[String],
    warnings: &mut W,
) -> Result<String, SortError> {
    match sort_mode {
        SortMode::ByCount => tally(data_type, tokens),
        SortMode::Natural => sort_naturally(data_type, tokens, warnings),
    }
}

fn tally(data_type: DataType, tokens: &[String]) -> Result<String, SortError> {
    let total = tokens.len();

    let report = if data_type == DataType::Long {
        let counts = count_occurrences(parse_longs(tokens)?);
        format_counts(&sort_by_count(counts), total)
    } else {
        let counts = count_occurrences(tokens.iter().map(String::as_str));
        format_counts(&sort_by_count(counts), total)
    };

    Ok(report)
}

fn sort_naturally<W: Write>(
    data_type: DataType,
    tokens: &[String],
    warnings: &mut W,
) -> Result<String, SortError> {
    let joined = match data_type {
        DataType::Long => {
            for token in tokens {
                if let Err(skipped) = parse_long(token) {
                    writeln!(warnings, "{skipped}")?;
                }
            }

            // The warned tokens are not filtered out here, so any of them
            // still fails the run.
            let mut numbers = parse_longs(tokens)?;
            numbers.sort_unstable();
            numbers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        },
        DataType::Line => sorted(tokens).join("\n"),
        DataType::Word | DataType::Unspecified => sorted(tokens).join(" "),
    };

    Ok(format!("{SORTED_PREFIX}{joined}"))
}

fn sorted(tokens: &[String]) -> Vec<&str> {
    let mut sorted: Vec<&str> = tokens.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Values are 32-bit: anything outside the `i32` range is not a long.
fn parse_long(token: &str) -> Result<i32, SortError> {
    token
        .parse()
        .map_err(|_| SortError::NotALong(token.to_string()))
}

fn parse_longs(tokens: &[String]) -> Result<Vec<i32>, SortError> {
    tokens.iter().map(|token| parse_long(token)).collect()
}

/// Occurrences of each distinct key, ordered by key.
pub fn count_occurrences<K: Ord>(
    keys: impl IntoIterator<Item = K>,
) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// Orders entries by count, then by key. The map already yields keys in
/// ascending order and the sort is stable, so ties keep that order.
pub fn sort_by_count<K: Ord>(counts: BTreeMap<K, usize>) -> Vec<(K, usize)> {
    let mut entries: Vec<(K, usize)> = counts.into_iter().collect();
    entries.sort_by_key(|&(_, count)| count);
    entries
}

/// One `<key>: <count> time(s), <percent>%` line per entry. The percentage
/// is truncated toward zero.
pub fn format_counts<K: Display>(entries: &[(K, usize)], total: usize) -> String {
    entries
        .iter()
        .map(|(key, count)| {
            format!("{key}: {count} time(s), {}%\n", count * 100 / total)
        })
        .collect()
}
