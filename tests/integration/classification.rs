//! Integration tests for classification and rendering through the library API

use rpscan::classifier::{classify, find_resource_providers};
use rpscan::cli::{render, ListRequest, RunContext};
use rpscan::types::{Mode, OutputFormat, ResourceProvider};
use std::collections::HashSet;

use crate::integration::SpecRepo;

fn names(providers: &[ResourceProvider]) -> Vec<&str> {
    providers.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_storage_is_listed_without_service_groups() {
    let repo = SpecRepo::standard();

    let ungrouped = find_resource_providers(repo.root(), Mode::WithoutServiceGroups).unwrap();
    assert_eq!(names(&ungrouped), vec!["Microsoft.KeyVault", "Microsoft.Storage"]);

    let grouped = find_resource_providers(repo.root(), Mode::WithServiceGroups).unwrap();
    assert!(!names(&grouped).contains(&"Microsoft.Storage"));
}

#[test]
fn test_compute_is_listed_with_service_groups() {
    let repo = SpecRepo::standard();

    let grouped = find_resource_providers(repo.root(), Mode::WithServiceGroups).unwrap();
    let out = render(&grouped, Mode::WithServiceGroups, OutputFormat::List).unwrap();
    assert_eq!(out, "Microsoft.Compute: [ComputeRP, DiskRP]");

    let ungrouped = find_resource_providers(repo.root(), Mode::WithoutServiceGroups).unwrap();
    assert!(!names(&ungrouped).contains(&"Microsoft.Compute"));
}

#[test]
fn test_partition_is_disjoint_and_complete() {
    let repo = SpecRepo::standard();
    let classification = classify(repo.root()).unwrap();

    let grouped: HashSet<_> = classification.grouped.iter().map(|p| &p.path).collect();
    let ungrouped: HashSet<_> = classification.ungrouped.iter().map(|p| &p.path).collect();
    let excluded: HashSet<_> = classification.excluded.iter().map(|p| &p.path).collect();

    assert!(grouped.is_disjoint(&ungrouped));
    assert!(grouped.is_disjoint(&excluded));
    assert!(ungrouped.is_disjoint(&excluded));
    assert_eq!(classification.candidate_count(), 4);
    assert_eq!(names(&classification.excluded), vec!["Microsoft.Empty"]);
}

#[test]
fn test_classification_is_repeatable() {
    let repo = SpecRepo::standard();
    let first = classify(repo.root()).unwrap();
    let second = classify(repo.root()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_round_trips() {
    let repo = SpecRepo::standard();
    for mode in [Mode::WithServiceGroups, Mode::WithoutServiceGroups] {
        let providers = find_resource_providers(repo.root(), mode).unwrap();
        let json = render(&providers, mode, OutputFormat::Json).unwrap();

        let parsed: Vec<ResourceProvider> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, providers);
        let again = render(&parsed, mode, OutputFormat::Json).unwrap();
        assert_eq!(again, json);
    }
}

#[test]
fn test_count_matches_list_and_json() {
    let repo = SpecRepo::standard();
    let ctx = RunContext::with_root(repo.root()).unwrap();

    for mode in [Mode::WithServiceGroups, Mode::WithoutServiceGroups] {
        let count: usize = ctx
            .execute(&ListRequest {
                mode,
                format: OutputFormat::List,
                count_only: true,
            })
            .unwrap()
            .parse()
            .unwrap();

        let list = ctx
            .execute(&ListRequest {
                mode,
                format: OutputFormat::List,
                count_only: false,
            })
            .unwrap();
        let list_lines = list
            .lines()
            .take_while(|line| !line.is_empty())
            .count();

        let json = ctx
            .execute(&ListRequest {
                mode,
                format: OutputFormat::Json,
                count_only: false,
            })
            .unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(count, list_lines);
        assert_eq!(count, entries.len());
    }
}

#[test]
fn test_dangling_symlink_is_not_a_candidate() {
    let repo = SpecRepo::new();
    let rm = repo.root().join("specification").join("broken").join("resource-manager");
    std::fs::create_dir_all(&rm).unwrap();
    // A dangling symlink named like a provider is not a directory, so it is skipped
    #[cfg(unix)]
    std::os::unix::fs::symlink(rm.join("missing-target"), rm.join("Microsoft.Dangling")).unwrap();

    let classification = classify(repo.root()).unwrap();
    assert_eq!(classification.candidate_count(), 0);
}
