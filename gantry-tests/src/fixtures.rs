//! Canonical workspace fixtures
//!
//! One snapshot used across integration tests: a single location with
//! one repository, partition sets for two pipelines, and one set whose
//! partition function failed at capture time. The sets appear in the
//! YAML out of catalog order so sorting is actually exercised.

use gantry_core::RepositorySelector;
use gantry_workspace::{SnapshotHost, WorkspaceSnapshot};

/// The fixture workspace as YAML.
pub fn workspace_yaml() -> &'static str {
    r#"
locations:
  - name: local
    repositories:
      - name: analytics
        partition_sets:
          - name: rollup_weekly
            pipeline_name: rollup
            partitions:
              - name: "2024-W01"
              - name: "2024-W02"
          - name: ingest_hourly
            pipeline_name: ingest
            mode: staging
            partitions:
              - name: "2024-01-01-00"
              - name: "2024-01-01-01"
          - name: ingest_daily
            pipeline_name: ingest
            partitions:
              - name: "2024-01-01"
                run_config:
                  solids:
                    read:
                      config:
                        path: /data/2024-01-01.csv
                tags:
                  - key: gantry/partition
                    value: "2024-01-01"
                  - key: .gantry/snapshot_id
                    value: abc123
                  - key: team
                    value: infra
              - name: "2024-01-02"
              - name: "2024-01-03"
              - name: "2024-01-04"
              - name: "2024-01-05"
          - name: ingest_broken
            pipeline_name: ingest
            error: "partition function failed: boom"
"#
}

/// The fixture snapshot, parsed and validated.
pub fn snapshot() -> WorkspaceSnapshot {
    WorkspaceSnapshot::from_yaml_str(workspace_yaml()).expect("fixture workspace parses")
}

/// A host serving the fixture snapshot.
pub fn snapshot_host() -> SnapshotHost {
    SnapshotHost::new(snapshot())
}

/// Selector addressing the fixture repository.
pub fn selector() -> RepositorySelector {
    RepositorySelector::new("local", "analytics")
}

/// The five daily partition names, in snapshot order.
pub fn daily_partition_names() -> Vec<String> {
    (1..=5).map(|day| format!("2024-01-{day:02}")).collect()
}
