// =========================================================================
// FALSIFY-VF: verification checkers must reject every broken output
//
// A checker that accepts everything would let the postconditions pass
// silently, so each test feeds a deliberately corrupted buffer and expects
// a rejection. The last tests pin the reference scenarios end to end.
// =========================================================================

use super::*;

fn path3() -> Graph {
    // 0 --1.0-- 1 --2.0-- 2
    Graph::build(3, &[Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0)]).expect("valid")
}

/// FALSIFY-VF-001: a pred array with a 2-cycle is not a tree
#[test]
fn falsify_vf_001_cycle_rejected() {
    let g = path3();
    let pred = [1, 0, 1];
    assert!(
        !g.is_tree(0, &pred, false),
        "FALSIFIED VF-001: cyclic pred {pred:?} accepted as tree"
    );
}

/// FALSIFY-VF-002: spanning requirement rejects an unreached node
#[test]
fn falsify_vf_002_not_spanning() {
    let g = path3();
    let pred = [INVALID_NODE, 0, INVALID_NODE];
    assert!(g.is_tree(0, &pred, false));
    assert!(
        !g.is_tree(0, &pred, true),
        "FALSIFIED VF-002: node 2 unreached but tree reported spanning"
    );
}

/// FALSIFY-VF-003: nonzero root distance is rejected
#[test]
fn falsify_vf_003_root_distance() {
    let g = path3();
    let pred = [INVALID_NODE, 0, 1];
    assert!(g.is_shortest_path_tree(0, &[0.0, 1.0, 3.0], &pred));
    assert!(
        !g.is_shortest_path_tree(0, &[0.5, 1.5, 3.5], &pred),
        "FALSIFIED VF-003: dist[root] != 0 accepted"
    );
}

/// FALSIFY-VF-004: root with a predecessor is rejected
#[test]
fn falsify_vf_004_root_has_pred() {
    let g = path3();
    assert!(
        !g.is_shortest_path_tree(0, &[0.0, 1.0, 3.0], &[1, 0, 1]),
        "FALSIFIED VF-004: pred[root] set but accepted"
    );
}

/// FALSIFY-VF-005: a recorded distance a neighbor can beat is rejected
#[test]
fn falsify_vf_005_shorter_path_exists() {
    let g = path3();
    assert!(
        !g.is_shortest_path_tree(0, &[0.0, 1.0, 10.0], &[INVALID_NODE, 0, 1]),
        "FALSIFIED VF-005: dist[2]=10 accepted although 1+2=3 is shorter"
    );
}

/// FALSIFY-VF-006: reached node next to an unreached neighbor is rejected
#[test]
fn falsify_vf_006_unreached_neighbor() {
    let g = path3();
    assert!(
        !g.is_shortest_path_tree(0, &[0.0, 1.0, INFINITE_DIST], &[INVALID_NODE, 0, INVALID_NODE]),
        "FALSIFIED VF-006: node 1 reached but neighbor 2 left at infinity"
    );
}

/// FALSIFY-VF-007: predecessor that is not a neighbor is rejected
#[test]
fn falsify_vf_007_pred_not_adjacent() {
    let g = path3();
    assert!(
        !g.is_shortest_path_tree(0, &[0.0, 1.0, 3.0], &[INVALID_NODE, 0, 0]),
        "FALSIFIED VF-007: pred[2]=0 accepted although 0 and 2 are not adjacent"
    );
}

/// FALSIFY-VF-008: forest with a non-graph edge is rejected
#[test]
fn falsify_vf_008_forest_foreign_edge() {
    let g = path3();
    let forest = SpanningForest {
        total_weight: 3.0,
        num_components: 1,
        edges: vec![Edge::new(0, 1, 1.0), Edge::new(0, 2, 2.0)],
    };
    assert!(
        !g.is_spanning_forest(&forest),
        "FALSIFIED VF-008: edge (0,2) is not in the graph"
    );
}

/// FALSIFY-VF-009: forest with wrong weight total or component count is rejected
#[test]
fn falsify_vf_009_forest_bookkeeping() {
    let g = path3();
    let good = g.minimum_spanning_forest().expect("kruskal");
    assert!(g.is_spanning_forest(&good));

    let wrong_weight = SpanningForest {
        total_weight: good.total_weight + 1.0,
        ..good.clone()
    };
    assert!(!g.is_spanning_forest(&wrong_weight));

    let wrong_count = SpanningForest {
        num_components: 2,
        ..good
    };
    assert!(
        !g.is_spanning_forest(&wrong_count),
        "FALSIFIED VF-009: component count 2 accepted for a connected graph"
    );
}

/// FALSIFY-VF-010: forest that misses a component's edge is rejected
#[test]
fn falsify_vf_010_forest_not_spanning() {
    let g = path3();
    // One edge and "two components", but graph edge (1,2) crosses them
    let forest = SpanningForest {
        total_weight: 1.0,
        num_components: 2,
        edges: vec![Edge::new(0, 1, 1.0)],
    };
    assert!(
        !g.is_spanning_forest(&forest),
        "FALSIFIED VF-010: forest leaves graph edge (1,2) between two trees"
    );
}

/// FALSIFY-VF-011: reference square graph, all three algorithms
#[test]
fn falsify_vf_011_reference_square() {
    // 1-based input (1,2,1) (2,3,2) (3,4,1) (1,4,5)
    let g = Graph::build(
        4,
        &[
            Edge::new(0, 1, 1.0),
            Edge::new(1, 2, 2.0),
            Edge::new(2, 3, 1.0),
            Edge::new(0, 3, 5.0),
        ],
    )
    .expect("valid");

    let bfs = g.bfs_tree(0).expect("bfs");
    assert_eq!(bfs.max_depth, 2, "FALSIFIED VF-011: eccentricity");
    assert_eq!(bfs.depth, vec![0, 1, 2, 1]);

    let spt = g.shortest_path_tree(0).expect("dijkstra");
    assert_eq!(
        spt.dist,
        vec![0.0, 1.0, 3.0, 4.0],
        "FALSIFIED VF-011: distances {:?}",
        spt.dist
    );

    let forest = g.minimum_spanning_forest().expect("kruskal");
    assert!(
        (forest.total_weight - 4.0).abs() < 1e-12,
        "FALSIFIED VF-011: forest weight {}",
        forest.total_weight
    );
    assert_eq!(forest.num_components, 1);
}
