/// Expands an indexed triangle list into a line list of its edges.
///
/// Each triangle `(a, b, c)` yields `a-b`, `b-c`, `c-a`. Edges shared between
/// triangles are emitted once per triangle.
pub fn triangles_to_lines(indices: &[u32]) -> Vec<u32> {
    let mut lines = Vec::with_capacity(indices.len() * 2);

    for tri in indices.chunks_exact(3) {
        lines.extend([tri[0], tri[1], tri[1], tri[2], tri[2], tri[0]]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle() {
        assert_eq!(triangles_to_lines(&[4, 7, 9]), vec![4, 7, 7, 9, 9, 4]);
    }

    #[test]
    fn test_shared_edges_kept() {
        let lines = triangles_to_lines(&[0, 1, 2, 1, 3, 2]);

        assert_eq!(lines, vec![0, 1, 1, 2, 2, 0, 1, 3, 3, 2, 2, 1]);
    }

    #[test]
    fn test_partial_triangle_ignored() {
        assert_eq!(triangles_to_lines(&[0, 1, 2, 3, 4]).len(), 6);
        assert!(triangles_to_lines(&[]).is_empty());
    }
}
