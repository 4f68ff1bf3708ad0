use bcc_forge::bridges::analyze;
use bcc_forge::reduce::reduce_to_target;
use bcc_forge::shift::shift_vertices;
use bcc_forge::synthesis::{BlockSpec, BlockSynthesizer, complete_edges, cycle_edges, dense_edges};
use bcc_forge::testing::oracle::{brute_force_bridges, is_connected};
use bcc_forge::testing::random_graphs::random_graph;
use bcc_forge::types::{Edge, normalized};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn two_edge_connected_spec() -> impl Strategy<Value = BlockSpec> {
    prop_oneof![
        (3usize..8).prop_map(BlockSpec::complete),
        (3usize..16).prop_map(BlockSpec::cycle),
    ]
}

proptest! {
    #[test]
    fn prop_complete_edge_count(n in 1usize..15) {
        let edges = complete_edges(1, n).unwrap();
        prop_assert_eq!(edges.len(), n * (n - 1) / 2);
        if n >= 3 {
            let analysis = analyze(n, &edges).unwrap();
            prop_assert!(analysis.bridges.is_empty());
            prop_assert_eq!(analysis.bcc_count, 1);
        }
    }

    #[test]
    fn prop_cycle_is_one_component(n in 3usize..60, first in 1u32..100) {
        let edges = cycle_edges(first, n).unwrap();
        prop_assert_eq!(edges.len(), n);
        let analysis = analyze(first as usize + n - 1, &edges).unwrap();
        prop_assert!(analysis.bridges.is_empty());
        prop_assert_eq!(analysis.bcc_count, 1);
    }

    #[test]
    fn prop_dense_is_connected(n in 2usize..16, density in 0.0f64..=1.0, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let edges = dense_edges(1, n, density, &mut rng).unwrap();
        prop_assert!(is_connected(&edges));
        let upper = (n - 1).max(20.min(n * (n - 1) / 2));
        prop_assert!(edges.len() >= n - 1 && edges.len() <= upper);
    }

    #[test]
    fn prop_tree_of_blocks(specs in prop::collection::vec(two_edge_connected_spec(), 1..8), seed in any::<u64>()) {
        let mut synth = BlockSynthesizer::new(StdRng::seed_from_u64(seed));
        let graph = synth.generate_tree(&specs).unwrap();
        let analysis = analyze(graph.vertex_count, &graph.edges).unwrap();
        prop_assert_eq!(analysis.bcc_count, specs.len());
        prop_assert_eq!(analysis.bridges.len(), specs.len() - 1);
    }

    #[test]
    fn prop_bridges_match_oracle(n in 2usize..14, extra in 0usize..10, seed in any::<u64>()) {
        let edges = random_graph(n, n - 1 + extra, seed);
        let analysis = analyze(n, &edges).unwrap();
        let mut found: Vec<Edge> = analysis.bridges.iter().map(|&e| normalized(e)).collect();
        found.sort_unstable();
        prop_assert_eq!(found, brute_force_bridges(n, &edges));
    }

    #[test]
    fn prop_shift_round_trip(edges in prop::collection::vec((1u32..1000, 1u32..1000), 0..50)) {
        let twice = shift_vertices(&shift_vertices(&edges, 1).unwrap(), 1).unwrap();
        prop_assert_eq!(&twice, &shift_vertices(&edges, 2).unwrap());
        let back = shift_vertices(&shift_vertices(&edges, 1).unwrap(), -1).unwrap();
        prop_assert_eq!(back, edges);
    }

    #[test]
    fn prop_reduction_is_idempotent(n in 2usize..12, extra in 0usize..6, target in 1usize..8, seed in any::<u64>()) {
        let edges = random_graph(n, n - 1 + extra, seed);
        let first = reduce_to_target(n, &edges, target).unwrap();
        prop_assert!(first.deleted.len() <= edges.len());
        if first.reached() {
            let second = reduce_to_target(n, &first.edges, target).unwrap();
            prop_assert!(second.deleted.is_empty());
            prop_assert_eq!(second.edges, first.edges);
        }
    }
}
