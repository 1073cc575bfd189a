use super::*;

fn triangle() -> Graph {
    let mut graph = Graph::with_vertices([1, 2, 3]).unwrap();
    graph.add_edge(1, 2, 5).unwrap();
    graph.add_edge(2, 3, 7).unwrap();
    graph.add_edge(3, 1, 9).unwrap();
    graph
}

#[test]
fn test_add_vertex_and_duplicate() {
    let mut graph = Graph::new();
    graph.add_vertex(4).unwrap();

    assert!(graph.contains_vertex(4));
    assert_eq!(graph.vertex_count(), 1);
    assert!(matches!(
        graph.add_vertex(4),
        Err(GraphError::DuplicateVertex { vertex: 4 })
    ));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_add_edge_updates_all_structures() {
    let graph = triangle();

    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 1));
    assert_eq!(graph.cost(2, 3).unwrap(), 7);
    assert_eq!(graph.out_neighbors(1).unwrap(), vec![2]);
    assert_eq!(graph.in_neighbors(1).unwrap(), vec![3]);
    assert!(graph.check_consistency().is_ok());
}

#[test]
fn test_add_edge_requires_endpoints() {
    let mut graph = Graph::with_vertices([1]).unwrap();

    assert!(matches!(
        graph.add_edge(1, 2, 1),
        Err(GraphError::UnknownVertex { vertex: 2 })
    ));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.out_neighbors(1).unwrap().is_empty());
}

#[test]
fn test_duplicate_edge_does_not_mutate() {
    let mut graph = triangle();
    let before = graph.clone();

    let err = graph.add_edge(1, 2, 100).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateEdge { from: 1, to: 2 }));
    assert_eq!(graph, before);
    assert_eq!(graph.cost(1, 2).unwrap(), 5);
}

#[test]
fn test_remove_edge_after_add_restores_state() {
    let mut graph = Graph::with_vertices([1, 2]).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    graph.remove_edge(1, 2).unwrap();

    assert!(!graph.has_edge(1, 2));
    assert!(matches!(
        graph.cost(1, 2),
        Err(GraphError::UnknownEdge { from: 1, to: 2 })
    ));
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.out_neighbors(1).unwrap().is_empty());
    assert!(graph.in_neighbors(2).unwrap().is_empty());
    assert!(graph.check_consistency().is_ok());
}

#[test]
fn test_remove_missing_edge() {
    let mut graph = triangle();
    assert!(matches!(
        graph.remove_edge(2, 1),
        Err(GraphError::UnknownEdge { from: 2, to: 1 })
    ));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn test_remove_vertex_drops_incident_edges() {
    let mut graph = triangle();
    graph.remove_vertex(2).unwrap();

    assert!(!graph.contains_vertex(2));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.has_edge(1, 2));
    assert!(!graph.has_edge(2, 3));
    assert!(graph.has_edge(3, 1));
    assert!(graph.out_neighbors(1).unwrap().is_empty());
    assert!(graph.in_neighbors(3).unwrap().is_empty());
    assert!(graph.check_consistency().is_ok());
}

#[test]
fn test_remove_vertex_with_self_loop() {
    let mut graph = Graph::with_vertices([1, 2]).unwrap();
    graph.add_edge(1, 1, 2).unwrap();
    graph.add_edge(1, 2, 4).unwrap();
    graph.remove_vertex(1).unwrap();

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.in_neighbors(2).unwrap().is_empty());
    assert!(graph.check_consistency().is_ok());
}

#[test]
fn test_remove_unknown_vertex_does_not_mutate() {
    let mut graph = triangle();
    let before = graph.clone();

    assert!(matches!(
        graph.remove_vertex(42),
        Err(GraphError::UnknownVertex { vertex: 42 })
    ));
    assert_eq!(graph, before);
}

#[test]
fn test_set_cost() {
    let mut graph = triangle();
    graph.set_cost(1, 2, 11).unwrap();
    assert_eq!(graph.cost(1, 2).unwrap(), 11);

    assert!(matches!(
        graph.set_cost(2, 1, 1),
        Err(GraphError::UnknownEdge { .. })
    ));
}

#[test]
fn test_neighbors_are_copies() {
    let mut graph = triangle();
    let mut succs = graph.out_neighbors(1).unwrap();
    succs.push(3);

    assert_eq!(graph.out_neighbors(1).unwrap(), vec![2]);
    graph.remove_edge(1, 2).unwrap();
    assert_eq!(succs, vec![2, 3]);
}

#[test]
fn test_degrees_and_incident_edges() {
    let mut graph = triangle();
    graph.add_edge(1, 3, 2).unwrap();

    assert_eq!(graph.out_degree(1).unwrap(), 2);
    assert_eq!(graph.in_degree(1).unwrap(), 1);
    assert_eq!(
        graph.outbound_edges(1).unwrap(),
        EdgeCosts::from([((1, 2), 5), ((1, 3), 2)])
    );
    assert_eq!(
        graph.inbound_edges(3).unwrap(),
        EdgeCosts::from([((1, 3), 2), ((2, 3), 7)])
    );
    assert!(graph.out_degree(9).is_err());
}

#[test]
fn test_undirected_pair_builds_parallel_copies() {
    let mut graph = Graph::with_vertices([1, 2]).unwrap();
    graph.add_edge(1, 2, 4).unwrap();
    graph.add_edge(2, 1, 4).unwrap();
    graph.add_undirected_pair(1, 2, 4).unwrap();

    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.out_degree(1).unwrap(), 2);
    assert_eq!(graph.in_degree(1).unwrap(), 2);
    assert!(graph.check_consistency().is_ok());

    graph.remove_edge(1, 2).unwrap();
    assert!(graph.has_edge(1, 2));
    assert_eq!(graph.out_degree(1).unwrap(), 1);
    assert!(graph.check_consistency().is_ok());

    graph.remove_edge(1, 2).unwrap();
    assert!(!graph.has_edge(1, 2));
    assert_eq!(graph.out_degree(1).unwrap(), 0);
    assert!(graph.check_consistency().is_ok());
}

#[test]
fn test_sorted_vertices_and_edge_costs() {
    let graph = triangle();
    assert_eq!(graph.sorted_vertices(), vec![1, 2, 3]);
    assert_eq!(
        graph.edge_costs(),
        EdgeCosts::from([((1, 2), 5), ((2, 3), 7), ((3, 1), 9)])
    );
}
