use crate::graph::{Graph, GraphError};

impl Graph {
    /// True iff every pair of vertices in `segment` is directly connected.
    pub fn is_fully_connected(&self, segment: &[usize]) -> bool {
        if segment.len() < 2 {
            return false;
        }

        for (k, &i) in segment.iter().enumerate() {
            for &j in &segment[k + 1..] {
                if !self.has_edge(i, j) {
                    return false;
                }
            }
        }

        true
    }
}

/// Parse a periphery selection into 0-based periphery positions, in run
/// order.
///
/// Accepted forms, over 1-based periphery ranks: an inclusive range `a-b`
/// (a <= b) or an explicit set `a,b,c`. The resolved ranks must be at least
/// two and consecutive, either as a plain run or wrapping around the end of
/// the periphery; a wrapped run must break exactly once and its two pieces
/// must anchor at rank 1 and the last rank. Wrapped runs come back tail
/// piece first, so the result is always consecutive along the periphery.
pub fn parse_selection(input: &str, periphery_len: usize) -> Result<Vec<usize>, GraphError> {
    let input = input.trim();

    let ranks: Vec<usize> = if let Some(sep) = input.find('-') {
        let a = parse_rank(&input[..sep])?;
        let b = parse_rank(&input[sep + 1..])?;
        if a > b {
            return Err(GraphError::InvalidSegment);
        }
        (a..=b).collect()
    } else {
        let mut ranks = input
            .split(',')
            .map(parse_rank)
            .collect::<Result<Vec<_>, _>>()?;
        ranks.sort_unstable();
        ranks.dedup();
        ranks
    };

    if ranks.len() < 2 || ranks.len() > periphery_len {
        return Err(GraphError::InvalidSegment);
    }
    if ranks[0] == 0 || *ranks.last().unwrap() > periphery_len {
        return Err(GraphError::InvalidSegment);
    }

    let breaks: Vec<usize> = (0..ranks.len() - 1)
        .filter(|&k| ranks[k + 1] != ranks[k] + 1)
        .collect();

    let run: Vec<usize> = match breaks.as_slice() {
        [] => ranks,
        [k] if ranks[0] == 1 && *ranks.last().unwrap() == periphery_len => {
            ranks[k + 1..].iter().chain(&ranks[..=*k]).copied().collect()
        }
        _ => return Err(GraphError::InvalidSegment),
    };

    Ok(run.into_iter().map(|r| r - 1).collect())
}

/// Resolve periphery positions to the vertex indices they name.
pub fn segment_vertices(periphery: &[usize], positions: &[usize]) -> Vec<usize> {
    positions.iter().map(|&p| periphery[p]).collect()
}

fn parse_rank(token: &str) -> Result<usize, GraphError> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| GraphError::InvalidSegment)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::geo::{Bbox, Vec2};

    #[test]
    fn range_selection() {
        assert_eq!(parse_selection("2-4", 6).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_selection(" 1-2 ", 3).unwrap(), vec![0, 1]);
    }

    #[test]
    fn set_selection() {
        assert_eq!(parse_selection("3,4,5", 8).unwrap(), vec![2, 3, 4]);
        // duplicates collapse, order does not matter
        assert_eq!(parse_selection("4,3,4", 8).unwrap(), vec![2, 3]);
    }

    #[test]
    fn wraparound_selection() {
        // ranks {7, 8, 1, 2} in an 8-long periphery, tail piece first
        assert_eq!(parse_selection("1,2,7,8", 8).unwrap(), vec![6, 7, 0, 1]);
        assert_eq!(parse_selection("8,1", 8).unwrap(), vec![7, 0]);
    }

    #[test]
    fn rejected_selections() {
        for bad in &[
            "",        // nothing
            "3",       // single rank
            "3-3",     // single rank as a range
            "4-2",     // reversed range
            "1,3",     // not consecutive
            "2,3,7,8", // wrap pieces not anchored at rank 1
            "1,2,6,7", // wrap pieces not anchored at the last rank
            "1,4,5,8", // two breaks
            "0-2",     // ranks are 1-based
            "7-9",     // out of range
            "2,x",     // not a number
        ] {
            assert_eq!(
                parse_selection(bad, 8),
                Err(GraphError::InvalidSegment),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn selection_longer_than_periphery_is_rejected() {
        assert_eq!(parse_selection("1-4", 3), Err(GraphError::InvalidSegment));
    }

    #[test]
    fn full_connectivity_gate() {
        let mut b = Bbox::new(Vec2::zero());
        b.expand(Vec2::new(800.0, 800.0));
        let g = Graph::seed(&b);

        assert!(g.is_fully_connected(&[0, 1]));
        assert!(g.is_fully_connected(&[0, 1, 2]));
        assert!(!g.is_fully_connected(&[0]));
        assert!(!g.is_fully_connected(&[]));
    }

    #[test]
    fn resolving_positions_to_vertices() {
        let periphery = vec![4, 0, 2, 5];
        assert_eq!(segment_vertices(&periphery, &[1, 2]), vec![0, 2]);
        assert_eq!(segment_vertices(&periphery, &[3, 0]), vec![5, 4]);
    }
}
