use super::*;

/// Computes a closed walk starting and ending in `start` that traverses every edge of the
/// connected component of `start` exactly once (Hierholzer's algorithm with an explicit stack).
///
/// The multigraph is consumed; whenever there is a choice, the smallest neighbor is taken.
/// If `start` has no incident edges, the walk consists of `start` only. Edges outside the
/// component of `start` are not visited; comparing the length of the walk against the number
/// of edges detects this case.
///
/// The result is only a valid circuit if every node has even degree
/// (see [`WorkingMultigraph`]'s [`crate::errors::InvariantCheck`] implementation).
///
/// ** Panics if start >= n **
pub fn euler_circuit(mut multigraph: WorkingMultigraph, start: Node) -> Vec<Node> {
    assert!(start < multigraph.number_of_nodes());

    let mut circuit = Vec::with_capacity(multigraph.number_of_edges() as usize + 1);
    let mut stack = vec![start];

    while let Some(&u) = stack.last() {
        match multigraph.first_neighbor_of(u) {
            None => {
                circuit.push(u);
                stack.pop();
            }
            Some(v) => {
                multigraph.try_remove_edge(u, v);
                stack.push(v);
            }
        }
    }

    circuit.reverse();
    circuit
}
