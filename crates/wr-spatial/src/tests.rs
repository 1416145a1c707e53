//! Unit tests for wr-spatial.
//!
//! All tests use small hand-sized lattices; no forecast files are needed.

#[cfg(test)]
mod helpers {
    use wr_core::{Domain, WindVector};

    use crate::{Grid, WindField};

    /// 3 × 3 lattice over lat [0, 2] × lon [0, 2] at 1°.
    ///
    /// ```text
    ///   6 7 8    lat 2
    ///   3 4 5    lat 1
    ///   0 1 2    lat 0
    /// ```
    pub fn grid3() -> Grid {
        Grid::new(Domain::new(0.0, 2.0, 0.0, 2.0), 1.0).unwrap()
    }

    /// Uniform southerly (blowing from the south) at 10 m/s.
    pub fn southerly(grid: &Grid) -> WindField {
        WindField::uniform(grid, WindVector::new(0.0, -10.0)).unwrap()
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use wr_core::{Domain, GeoPoint, NodeId};

    use crate::{Grid, SpatialError};

    #[test]
    fn three_by_three_axes() {
        let g = super::helpers::grid3();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.len(), 9);
        assert_eq!(g.latitudes(), &[0.0, 1.0, 2.0]);
        assert_eq!(g.longitudes(), &[0.0, 1.0, 2.0]);
        assert_eq!(g.point(NodeId(5)), GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn partial_final_step_included() {
        let g = Grid::new(Domain::new(0.0, 1.0, 10.0, 11.0), 0.4).unwrap();
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 4);
        let last = *g.latitudes().last().unwrap();
        assert!((last - 1.2).abs() < 1e-12);
    }

    #[test]
    fn exact_multiple_has_no_extra_row() {
        let g = Grid::new(Domain::new(35.0, 50.0, -35.0, 0.0), 0.5).unwrap();
        assert_eq!(g.rows(), 31);
        assert_eq!(g.cols(), 71);
    }

    #[test]
    fn latitudes_capped_at_pole() {
        let g = Grid::new(Domain::new(88.0, 90.0, 0.0, 1.0), 1.5).unwrap();
        assert_eq!(g.latitudes(), &[88.0, 89.5, 90.0]);
    }

    #[test]
    fn invalid_domains_rejected() {
        let bad = [
            (Domain::new(2.0, 0.0, 0.0, 2.0), 1.0),
            (Domain::new(0.0, 2.0, 2.0, 2.0), 1.0),
            (Domain::new(0.0, 2.0, 0.0, 2.0), 0.0),
            (Domain::new(0.0, 2.0, 0.0, 2.0), -0.5),
            (Domain::new(0.0, f64::INFINITY, 0.0, 2.0), 1.0),
        ];
        for (d, res) in bad {
            assert!(
                matches!(Grid::new(d, res), Err(SpatialError::InvalidDomain(_))),
                "{d} @ {res}"
            );
        }
    }

    #[test]
    fn from_axes_validates() {
        assert!(Grid::from_axes(vec![0.0, 1.0], vec![0.0, 0.0]).is_err());
        assert!(Grid::from_axes(vec![0.0, 91.0], vec![0.0]).is_err());
        assert!(Grid::from_axes(vec![f64::NAN], vec![0.0]).is_err());
        let g = Grid::from_axes(vec![10.0, 10.25], vec![-3.0, -2.5, -2.0]).unwrap();
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn cell_addressing_roundtrip() {
        let g = super::helpers::grid3();
        for i in 0..g.len() {
            let id = NodeId(i as u32);
            let (r, c) = g.cell(id);
            assert_eq!(g.node_at(r, c), Some(id));
        }
        assert_eq!(g.node_at(3, 0), None);
        assert!(g.get(NodeId(9)).is_none());
        assert!(!g.contains(NodeId(9)));
    }

    #[test]
    fn neighbour_counts() {
        let g = super::helpers::grid3();
        assert_eq!(g.neighbours(NodeId(0)).count(), 3); // corner
        assert_eq!(g.neighbours(NodeId(1)).count(), 5); // border
        assert_eq!(g.neighbours(NodeId(4)).count(), 8); // interior
    }

    #[test]
    fn neighbour_order_is_fixed() {
        let g = super::helpers::grid3();
        let n: Vec<u32> = g.neighbours(NodeId(4)).map(|id| id.0).collect();
        assert_eq!(n, vec![0, 1, 2, 3, 5, 6, 7, 8]);
        let n: Vec<u32> = g.neighbours(NodeId(0)).map(|id| id.0).collect();
        assert_eq!(n, vec![1, 3, 4]);
    }

    #[test]
    fn single_column_neighbours() {
        let g = Grid::from_axes(vec![0.0, 1.0, 2.0], vec![5.0]).unwrap();
        assert_eq!(g.neighbours(NodeId(0)).count(), 1);
        assert_eq!(g.neighbours(NodeId(1)).count(), 2);
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use wr_core::{Domain, GeoPoint, NodeId};

    use crate::{Grid, SpatialError};

    #[test]
    fn exact_cell_position() {
        let g = super::helpers::grid3();
        for (i, &p) in g.points().iter().enumerate() {
            assert_eq!(g.nearest_node(p).unwrap(), NodeId(i as u32));
        }
    }

    #[test]
    fn nearest_by_distance() {
        let g = super::helpers::grid3();
        assert_eq!(g.nearest_node(GeoPoint::new(1.2, 1.9)).unwrap(), NodeId(5));
        // Outside the domain still snaps to the closest border cell.
        assert_eq!(g.nearest_node(GeoPoint::new(-5.0, 10.0)).unwrap(), NodeId(2));
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let g = super::helpers::grid3();
        assert_eq!(g.nearest_node(GeoPoint::new(0.5, 0.5)).unwrap(), NodeId(0));
        assert_eq!(g.nearest_node(GeoPoint::new(1.5, 0.5)).unwrap(), NodeId(3));
        assert_eq!(g.nearest_node(GeoPoint::new(1.5, 1.5)).unwrap(), NodeId(4));
        assert_eq!(g.nearest_node(GeoPoint::new(2.0, 1.5)).unwrap(), NodeId(7));
    }

    #[test]
    fn empty_grid() {
        let g = Grid::from_axes(vec![], vec![]).unwrap();
        assert!(g.is_empty());
        assert!(matches!(g.nearest_node(GeoPoint::new(0.0, 0.0)), Err(SpatialError::EmptyGrid)));
    }

    #[test]
    fn k_nearest_sorted() {
        let g = super::helpers::grid3();
        let near = g.nearest_nodes(GeoPoint::new(0.1, 0.0), 3);
        assert_eq!(near[0], NodeId(0));
        assert_eq!(near.len(), 3);
        // (0, 1) and (1, 0) are the next two, ordered by distance.
        assert_eq!(near[1], NodeId(3));
        assert_eq!(near[2], NodeId(1));
    }

    #[test]
    fn matches_brute_force_scan() {
        let g = Grid::new(Domain::new(40.0, 45.0, -12.0, -3.0), 0.5).unwrap();
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..500 {
            let q = GeoPoint::new(rng.gen_range(39.0..46.0), rng.gen_range(-13.0..-2.0));
            // First strictly-smaller wins, i.e. lowest index among ties.
            let mut best = (f64::INFINITY, NodeId::INVALID);
            for (i, &p) in g.points().iter().enumerate() {
                let d = p.planar_distance_2(q);
                if d < best.0 {
                    best = (d, NodeId(i as u32));
                }
            }
            assert_eq!(g.nearest_node(q).unwrap(), best.1, "query {q}");
        }
    }

    #[test]
    fn k_nearest_ties_by_index() {
        let g = super::helpers::grid3();
        let near = g.nearest_nodes(GeoPoint::new(0.5, 0.5), 2);
        assert_eq!(near, vec![NodeId(0), NodeId(1)]);
    }
}

// ── Wind field ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod field {
    use std::io::Cursor;

    use wr_core::{Domain, GeoPoint, NodeId, WindVector};

    use crate::{Grid, SpatialError, WindField, load_wind_reader};

    #[test]
    fn uniform_matches_grid() {
        let g = super::helpers::grid3();
        let w = super::helpers::southerly(&g);
        assert_eq!(w.len(), 9);
        assert!(w.check_shape(&g).is_ok());
        assert_eq!(w.at(NodeId(8)), WindVector::new(0.0, -10.0));
    }

    #[test]
    fn wrong_length_rejected() {
        let r = WindField::from_vectors(3, 3, vec![WindVector::default(); 8]);
        assert!(matches!(r, Err(SpatialError::InconsistentWindField(_))));
        let r = WindField::from_components(3, 3, &[0.0; 9], &[0.0; 8]);
        assert!(matches!(r, Err(SpatialError::InconsistentWindField(_))));
    }

    #[test]
    fn missing_value_rejected() {
        let mut v = vec![WindVector::new(1.0, 1.0); 9];
        v[4].u = f64::NAN;
        let r = WindField::from_vectors(3, 3, v);
        assert!(matches!(r, Err(SpatialError::InconsistentWindField(_))));
    }

    #[test]
    fn shape_mismatch_detected() {
        let g = super::helpers::grid3();
        let w = WindField::from_vectors(1, 9, vec![WindVector::default(); 9]).unwrap();
        assert!(matches!(w.check_shape(&g), Err(SpatialError::InconsistentWindField(_))));
    }

    #[test]
    fn from_fn_evaluates_cell_positions() {
        let g = super::helpers::grid3();
        let w = WindField::from_fn(&g, |p| WindVector::new(p.lon, p.lat)).unwrap();
        assert_eq!(w.at(NodeId(5)), WindVector::new(2.0, 1.0));
    }

    #[test]
    fn samples_snap_to_cells() {
        let g = Grid::new(Domain::new(0.0, 1.0, 0.0, 1.0), 1.0).unwrap();
        let samples = vec![
            (GeoPoint::new(0.1, 0.1), WindVector::new(1.0, 0.0)),
            (GeoPoint::new(0.1, 0.9), WindVector::new(2.0, 0.0)),
            (GeoPoint::new(0.9, 0.1), WindVector::new(3.0, 0.0)),
            (GeoPoint::new(1.0, 1.0), WindVector::new(4.0, 0.0)),
        ];
        let w = WindField::from_samples(&g, samples).unwrap();
        let us: Vec<f64> = w.vectors().iter().map(|v| v.u).collect();
        assert_eq!(us, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn uncovered_cell_rejected() {
        let g = Grid::new(Domain::new(0.0, 1.0, 0.0, 1.0), 1.0).unwrap();
        let samples = vec![
            (GeoPoint::new(0.0, 0.0), WindVector::new(1.0, 0.0)),
            (GeoPoint::new(0.0, 1.0), WindVector::new(1.0, 0.0)),
            (GeoPoint::new(1.0, 0.0), WindVector::new(1.0, 0.0)),
        ];
        let r = WindField::from_samples(&g, samples);
        assert!(matches!(r, Err(SpatialError::InconsistentWindField(_))));
    }

    #[test]
    fn csv_reader() {
        let g = Grid::new(Domain::new(0.0, 1.0, 0.0, 1.0), 1.0).unwrap();
        let csv = "lat, lon, u, v\n0,0,1,2\n0,1,3,4\n1,0,5,6\n1,1,7,8\n";
        let w = load_wind_reader(Cursor::new(csv), &g).unwrap();
        assert_eq!(w.at(NodeId(3)), WindVector::new(7.0, 8.0));
    }

    #[test]
    fn csv_bad_row_is_parse_error() {
        let g = Grid::new(Domain::new(0.0, 1.0, 0.0, 1.0), 1.0).unwrap();
        let csv = "lat,lon,u,v\n0,0,calm,2\n";
        let r = load_wind_reader(Cursor::new(csv), &g);
        assert!(matches!(r, Err(SpatialError::Parse(_))));
    }
}

// ── Leg costing ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod leg {
    use wr_core::{GeoPoint, WindVector};
    use wr_polar::PolarTable;

    use crate::leg_cost;

    #[test]
    fn downwind_leg() {
        let polar = PolarTable::absolute();
        let from = GeoPoint::new(0.0, 0.0);
        let to = GeoPoint::new(1.0, 0.0);
        let leg = leg_cost(from, to, WindVector::new(0.0, -10.0), &polar);
        assert_eq!(leg.heading_deg, 0.0);
        assert_eq!(leg.relative_angle_deg, 180.0);
        assert_eq!(leg.boat_speed_kn, 7.0);
        assert!((leg.hours - leg.distance_nm / 7.0).abs() < 1e-12);
        assert!(!leg.is_blocked());
    }

    #[test]
    fn head_to_wind_is_blocked() {
        let polar = PolarTable::absolute();
        let from = GeoPoint::new(1.0, 0.0);
        let to = GeoPoint::new(0.0, 0.0);
        let leg = leg_cost(from, to, WindVector::new(0.0, -10.0), &polar);
        assert_eq!(leg.relative_angle_deg, 0.0);
        assert_eq!(leg.boat_speed_kn, 0.0);
        assert!(leg.hours.is_infinite());
        assert!(leg.is_blocked());
    }

    #[test]
    fn wind_scaled_uses_knots() {
        let polar = PolarTable::wind_scaled();
        let leg = leg_cost(
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 1.0),
            WindVector::new(0.0, -10.0),
            &polar,
        );
        // Beam reach: half of 10 m/s in knots.
        assert!((leg.boat_speed_kn - 0.5 * 19.43844).abs() < 1e-9);
    }
}

// ── Graph builder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use wr_core::{GeoPoint, NodeId, WindVector};
    use wr_polar::PolarTable;

    use crate::{Grid, RouteGraphBuilder, SpatialError, WindField, build_graph, leg_cost};

    #[test]
    fn node_and_edge_counts() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        assert_eq!(graph.node_count(), 9);
        assert_eq!(graph.edge_count(), 4 * 3 + 4 * 5 + 8);
        assert_eq!(graph.out_degree(NodeId(0)), 3);
        assert_eq!(graph.out_degree(NodeId(1)), 5);
        assert_eq!(graph.out_degree(NodeId(4)), 8);
    }

    #[test]
    fn blocked_edges_kept() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        // Due south, straight into a southerly.
        let e = graph.edge_between(NodeId(4), NodeId(1)).unwrap();
        assert!(graph.edge_hours[e.index()].is_infinite());
        assert!(graph.finite_edge_count() < graph.edge_count());
    }

    #[test]
    fn edges_are_directional() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        let up = graph.edge_between(NodeId(1), NodeId(4)).unwrap();
        let down = graph.edge_between(NodeId(4), NodeId(1)).unwrap();
        assert!(graph.edge_hours[up.index()].is_finite());
        assert!(graph.edge_hours[down.index()].is_infinite());
        assert_eq!(graph.edge_heading_deg[up.index()], 0.0);
        assert_eq!(graph.edge_heading_deg[down.index()], 180.0);
    }

    #[test]
    fn edge_values_come_from_leg_cost() {
        let g = super::helpers::grid3();
        let w = WindField::from_fn(&g, |p| WindVector::new(3.0 + p.lat, -4.0 + p.lon)).unwrap();
        let polar = PolarTable::wind_scaled();
        let graph = build_graph(&g, &w, &polar).unwrap();
        for e in 0..graph.edge_count() {
            let from = graph.edge_from[e];
            let to = graph.edge_to[e];
            let leg = leg_cost(g.point(from), g.point(to), w.at(from), &polar);
            assert_eq!(graph.edge_hours[e], leg.hours);
            assert_eq!(graph.edge_length_nm[e], leg.distance_nm);
            assert_eq!(graph.edge_boat_speed_kn[e], leg.boat_speed_kn);
        }
    }

    #[test]
    fn shape_mismatch_rejected() {
        let g = super::helpers::grid3();
        let w = WindField::from_vectors(2, 2, vec![WindVector::default(); 4]).unwrap();
        let r = build_graph(&g, &w, &PolarTable::absolute());
        assert!(matches!(r, Err(SpatialError::InconsistentWindField(_))));
    }

    #[test]
    fn empty_grid_rejected() {
        let g = Grid::from_axes(vec![], vec![]).unwrap();
        let w = WindField::from_vectors(0, 0, vec![]).unwrap();
        let r = build_graph(&g, &w, &PolarTable::absolute());
        assert!(matches!(r, Err(SpatialError::EmptyGrid)));
    }

    #[test]
    fn builder_keeps_insertion_order_per_node() {
        let polar = PolarTable::absolute();
        let wind = WindVector::new(0.0, -10.0);
        let mut b = RouteGraphBuilder::new();
        let p = [GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0), GeoPoint::new(0.0, 1.0)];
        let n: Vec<NodeId> = p.iter().map(|&pos| b.add_node(pos)).collect();
        b.add_directed_edge(n[1], n[0], leg_cost(p[1], p[0], wind, &polar));
        b.add_directed_edge(n[0], n[2], leg_cost(p[0], p[2], wind, &polar));
        b.add_directed_edge(n[0], n[1], leg_cost(p[0], p[1], wind, &polar));
        let graph = b.build();
        let targets: Vec<NodeId> = graph.out_edges(n[0]).map(|e| graph.edge_to[e.index()]).collect();
        assert_eq!(targets, vec![n[2], n[1]]);
        assert_eq!(graph.out_degree(n[2]), 0);
        assert_eq!(graph.edge_between(n[2], n[0]), None);
    }
}

// ── Router ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod router {
    use std::time::Duration;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use wr_core::{CancelToken, Domain, NodeId, WindVector};
    use wr_polar::PolarTable;

    use crate::{DijkstraRouter, Grid, RouteGraph, Router, SpatialError, WindField, build_graph};

    /// Reference shortest times by Bellman-Ford relaxation.
    fn bellman_ford(graph: &RouteGraph, from: NodeId) -> Vec<f64> {
        let mut dist = vec![f64::INFINITY; graph.node_count()];
        dist[from.index()] = 0.0;
        for _ in 0..graph.node_count() {
            let mut changed = false;
            for e in 0..graph.edge_count() {
                let u = graph.edge_from[e].index();
                let v = graph.edge_to[e].index();
                let cand = dist[u] + graph.edge_hours[e];
                if cand < dist[v] {
                    dist[v] = cand;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
        dist
    }

    fn path_hours(graph: &RouteGraph, nodes: &[NodeId]) -> f64 {
        nodes.windows(2).fold(0.0, |acc, w| {
            let e = graph.edge_between(w[0], w[1]).expect("path uses a graph edge");
            acc + graph.edge_hours[e.index()]
        })
    }

    #[test]
    fn diagonal_broad_reach_wins() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        let path = DijkstraRouter.route(&graph, NodeId(0), NodeId(8)).unwrap();

        assert_eq!(path.nodes, vec![NodeId(0), NodeId(4), NodeId(8)]);
        assert!(path.total_hours.is_finite());
        // Two diagonals at 9 kn, well under the slowest-sailable bound.
        let dist = g.point(NodeId(0)).distance_nm(g.point(NodeId(4)))
            + g.point(NodeId(4)).distance_nm(g.point(NodeId(8)));
        assert!((path.total_hours - dist / 9.0).abs() < 1e-9);
        assert!(path.total_hours < 28.3);
        assert_eq!(path.total_hours, path_hours(&graph, &path.nodes));
    }

    #[test]
    fn trivial_route() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        let path = DijkstraRouter.route(&graph, NodeId(4), NodeId(4)).unwrap();
        assert_eq!(path.nodes, vec![NodeId(4)]);
        assert_eq!(path.total_hours, 0.0);
        assert!(path.is_trivial());
        assert_eq!(path.leg_count(), 0);
    }

    #[test]
    fn calm_gives_no_route() {
        let g = super::helpers::grid3();
        let calm = WindField::uniform(&g, WindVector::new(0.0, 0.0)).unwrap();
        let graph = build_graph(&g, &calm, &PolarTable::wind_scaled()).unwrap();
        assert_eq!(graph.finite_edge_count(), 0);
        let r = DijkstraRouter.route(&graph, NodeId(0), NodeId(8));
        assert!(matches!(r, Err(SpatialError::NoRoute { from: NodeId(0), to: NodeId(8) })));
    }

    #[test]
    fn upwind_only_channel_is_one_way() {
        // One column of three cells; a northerly blocks every northbound leg.
        let g = Grid::from_axes(vec![0.0, 1.0, 2.0], vec![0.0]).unwrap();
        let w = WindField::uniform(&g, WindVector::new(0.0, 10.0)).unwrap();
        let graph = build_graph(&g, &w, &PolarTable::absolute()).unwrap();
        assert!(matches!(
            DijkstraRouter.route(&graph, NodeId(0), NodeId(2)),
            Err(SpatialError::NoRoute { .. })
        ));
        let back = DijkstraRouter.route(&graph, NodeId(2), NodeId(0)).unwrap();
        assert_eq!(back.nodes, vec![NodeId(2), NodeId(1), NodeId(0)]);
    }

    #[test]
    fn unknown_node() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        let r = DijkstraRouter.route(&graph, NodeId(0), NodeId(99));
        assert!(matches!(r, Err(SpatialError::NodeNotFound(NodeId(99)))));
    }

    #[test]
    fn cancelled_before_start() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        let cancel = CancelToken::new();
        cancel.cancel();
        let r = DijkstraRouter.route_until(&graph, NodeId(0), NodeId(8), &cancel);
        assert!(matches!(r, Err(SpatialError::Cancelled { settled: 0 })));
    }

    #[test]
    fn generous_timeout_completes() {
        let g = Grid::new(Domain::new(0.0, 20.0, 0.0, 20.0), 0.25).unwrap();
        let w = WindField::uniform(&g, WindVector::new(-6.0, -6.0)).unwrap();
        let graph = build_graph(&g, &w, &PolarTable::absolute()).unwrap();
        let to = NodeId((g.len() - 1) as u32);
        let cancel = CancelToken::with_timeout(Duration::from_secs(3_600));
        let path = DijkstraRouter.route_until(&graph, NodeId(0), to, &cancel).unwrap();
        assert_eq!(path.destination(), Some(to));
        assert!(path.leg_count() >= 80);
    }

    #[test]
    fn matches_bellman_ford_on_random_winds() {
        let mut rng = SmallRng::seed_from_u64(42);
        let g = Grid::new(Domain::new(40.0, 44.0, -10.0, -5.0), 0.5).unwrap();
        let polar = PolarTable::absolute();
        for _ in 0..10 {
            let vectors = (0..g.len())
                .map(|_| WindVector::new(rng.gen_range(-15.0..15.0), rng.gen_range(-15.0..15.0)))
                .collect();
            let w = WindField::from_vectors(g.rows(), g.cols(), vectors).unwrap();
            let graph = build_graph(&g, &w, &polar).unwrap();
            let from = NodeId(rng.gen_range(0..g.len() as u32));
            let to = NodeId(rng.gen_range(0..g.len() as u32));
            let reference = bellman_ford(&graph, from)[to.index()];

            match DijkstraRouter.route(&graph, from, to) {
                Ok(path) => {
                    assert!((path.total_hours - reference).abs() <= 1e-9 * reference.max(1.0));
                    assert_eq!(path.origin(), Some(from));
                    assert_eq!(path.destination(), Some(to));
                    assert_eq!(path.total_hours, path_hours(&graph, &path.nodes));
                }
                Err(SpatialError::NoRoute { .. }) => assert!(reference.is_infinite()),
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }

    #[test]
    fn deterministic() {
        let g = Grid::new(Domain::new(40.0, 44.0, -10.0, -5.0), 0.5).unwrap();
        let w = WindField::from_fn(&g, |p| WindVector::new(8.0 + p.lat.sin(), 2.0 * p.lon.cos())).unwrap();
        let polar = PolarTable::absolute();
        let to = NodeId((g.len() - 1) as u32);
        let a = DijkstraRouter.route(&build_graph(&g, &w, &polar).unwrap(), NodeId(0), to).unwrap();
        let b = DijkstraRouter.route(&build_graph(&g, &w, &polar).unwrap(), NodeId(0), to).unwrap();
        assert_eq!(a.nodes, b.nodes);
        assert_eq!(a.total_hours.to_bits(), b.total_hours.to_bits());
    }

    #[test]
    fn usable_as_trait_object() {
        let g = super::helpers::grid3();
        let graph = build_graph(&g, &super::helpers::southerly(&g), &PolarTable::absolute()).unwrap();
        let router: Box<dyn Router> = Box::new(DijkstraRouter);
        assert!(router.route(&graph, NodeId(0), NodeId(8)).is_ok());
    }
}
