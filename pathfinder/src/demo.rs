use crate::config::GraphSpec;

/// A small connected graph used when no input is given.
///
/// ```text
///   0 --10-- 1 --1-- 2
///    \       |      / \
///     5      2     9   6
///      \     |    /     \
///       `--- 4 --'--2--- 3
/// ```
pub fn sample() -> GraphSpec {
    GraphSpec::new(Some(5), vec![
        (0, 1, 10),
        (0, 4, 5),
        (1, 4, 2),
        (1, 2, 1),
        (4, 2, 9),
        (4, 3, 2),
        (2, 3, 6),
    ])
}

#[cfg(test)]
mod test {
    use super::sample;
    use graph::dijkstra;

    #[test]
    fn test_sample() {
        let g = sample().build().unwrap();
        let dist = dijkstra(&g, 0).unwrap();
        let dist: Vec<_> = dist.iter().map(|(_, d)| d.unwrap()).collect();
        assert_eq!(dist, vec![0, 7, 8, 7, 5]);
    }
}
