//! Integration tests for wr-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use wr_core::{Domain, NodeId, WindVector};
    use wr_metrics::{RouteMetricsRecord, RouteSummary, reconstruct};
    use wr_polar::PolarTable;
    use wr_spatial::{Grid, Path, WindField};

    use crate::csv::{CsvWriter, METRICS_FILE, SUMMARY_FILE};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn records() -> Vec<RouteMetricsRecord> {
        let g = Grid::new(Domain::new(0.0, 2.0, 0.0, 2.0), 1.0).unwrap();
        let w = WindField::uniform(&g, WindVector::new(0.0, -10.0)).unwrap();
        let path = Path { nodes: vec![NodeId(0), NodeId(4), NodeId(8)], total_hours: 0.0 };
        reconstruct(&path, &g, &w, &PolarTable::absolute()).unwrap()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(METRICS_FILE).exists());
        assert!(dir.path().join(SUMMARY_FILE).exists());
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("biscay");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join(METRICS_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(METRICS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers.len(), 15);
        assert_eq!(headers[0], "node");
        assert_eq!(headers[8], "heading_to_next_deg");
        assert_eq!(headers[14], "is_final");

        let mut rdr2 = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["legs", "total_distance_nm", "total_hours", "average_speed_kn", "min_boat_speed_kn", "max_boat_speed_kn"]
        );
    }

    #[test]
    fn metrics_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_records(&records()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(METRICS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[1][0], "4");
        assert_eq!(&rows[2][0], "8");
        assert_eq!(&rows[2][1], "2"); // lat
        assert_eq!(&rows[0][10], "9"); // broad reach
        assert_eq!(&rows[0][14], "0");
        assert_eq!(&rows[2][14], "1");
        assert_eq!(&rows[2][12], "0"); // no leg after the last node
    }

    #[test]
    fn summary_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&RouteSummary::from_records(&records())).unwrap();
        w.write_summary(&RouteSummary::default()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SUMMARY_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "2");
        assert_eq!(&rows[0][4], "9");
        assert_eq!(&rows[1][0], "0");
        assert_eq!(&rows[1][4], ""); // no legs, no min speed
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
