//! Input splitting helpers

/// Group lines into blocks separated by blank lines
///
/// Trailing `\r` is stripped and empty blocks are skipped.
pub fn paragraphs(input: &str) -> Vec<Vec<&str>> {
    let mut blocks = vec![];
    let mut current = vec![];
    for line in input.lines().map(str::trim_end) {
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Parse every whitespace-separated integer in `s`
pub fn numbers<T: std::str::FromStr>(s: &str) -> Result<Vec<T>, T::Err> {
    s.split_whitespace().map(str::parse).collect()
}
