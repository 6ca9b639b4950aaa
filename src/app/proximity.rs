use super::nodes::Node;

/// Collect every unordered index pair `(i, j)`, `i < j`, whose Euclidean
/// distance is strictly below `threshold`, into the caller's scratch vec.
///
/// Exhaustive O(n²) scan. The node count is small and fixed for the life of
/// the run, so no spatial index is warranted, and positions change every
/// frame, so nothing carries over between calls.
pub(super) fn proximity_pairs(nodes: &[Node], threshold: f32, out: &mut Vec<(usize, usize)>) {
    out.clear();
    let threshold_sq = threshold * threshold;

    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let delta = nodes[i].pos - nodes[j].pos;
            if delta.length_sq() < threshold_sq {
                out.push((i, j));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Vec2, pos2};

    use super::*;

    fn dust_at(x: f32, y: f32) -> Node {
        Node {
            pos: pos2(x, y),
            vel: Vec2::ZERO,
            label: None,
            radius: 3.0,
        }
    }

    #[test]
    fn pair_appears_below_threshold_and_drops_out_beyond_it() {
        let mut nodes = vec![dust_at(100.0, 100.0), dust_at(200.0, 100.0)];
        let mut pairs = Vec::new();

        proximity_pairs(&nodes, 150.0, &mut pairs);
        assert_eq!(pairs, vec![(0, 1)]);

        nodes[1].pos = pos2(300.0, 100.0);
        proximity_pairs(&nodes, 150.0, &mut pairs);
        assert!(pairs.is_empty());
    }

    #[test]
    fn threshold_is_strict() {
        let nodes = vec![dust_at(0.0, 0.0), dust_at(150.0, 0.0)];
        let mut pairs = Vec::new();
        proximity_pairs(&nodes, 150.0, &mut pairs);
        assert!(pairs.is_empty());
    }

    #[test]
    fn pairs_are_irreflexive_and_ordered() {
        let nodes = vec![
            dust_at(0.0, 0.0),
            dust_at(10.0, 0.0),
            dust_at(20.0, 0.0),
            dust_at(1000.0, 1000.0),
        ];
        let mut pairs = Vec::new();
        proximity_pairs(&nodes, 150.0, &mut pairs);

        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
        for &(i, j) in &pairs {
            assert!(i < j);
        }
    }

    #[test]
    fn scratch_is_cleared_between_calls() {
        let near = vec![dust_at(0.0, 0.0), dust_at(1.0, 0.0)];
        let far = vec![dust_at(0.0, 0.0), dust_at(500.0, 0.0)];
        let mut pairs = Vec::new();

        proximity_pairs(&near, 150.0, &mut pairs);
        assert_eq!(pairs.len(), 1);

        proximity_pairs(&far, 150.0, &mut pairs);
        assert!(pairs.is_empty());
    }

    #[test]
    fn diagonal_distance_uses_euclidean_metric() {
        // 3-4-5 triangle scaled by 25: distance is exactly 125.
        let nodes = vec![dust_at(0.0, 0.0), dust_at(75.0, 100.0)];
        let mut pairs = Vec::new();

        proximity_pairs(&nodes, 150.0, &mut pairs);
        assert_eq!(pairs, vec![(0, 1)]);

        proximity_pairs(&nodes, 125.0, &mut pairs);
        assert!(pairs.is_empty());
    }
}
