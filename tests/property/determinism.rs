//! Property-based tests for root discovery reach and classification invariants

use proptest::prelude::*;
use rpscan::classifier::classify;
use rpscan::locator::find_repo_root;
use rpscan::types::Mode;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

/// Child layout of one generated provider directory
#[derive(Debug, Clone)]
struct ProviderLayout {
    name: String,
    service: String,
    children: Vec<String>,
}

fn provider_layout() -> impl Strategy<Value = ProviderLayout> {
    let child = prop_oneof![
        Just("stable".to_string()),
        Just("preview".to_string()),
        Just("examples".to_string()),
        Just("common-types".to_string()),
        "[A-Z][a-zA-Z]{1,8}RP",
    ];
    (
        "[A-Z][a-z]{1,10}",
        "[a-z]{1,8}",
        proptest::collection::vec(child, 0..4),
    )
        .prop_map(|(suffix, service, children)| ProviderLayout {
            name: format!("Microsoft.{}", suffix),
            service,
            children,
        })
}

fn build_repo(layouts: &[ProviderLayout]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("specification")).unwrap();
    for layout in layouts {
        let dir = temp_dir
            .path()
            .join("specification")
            .join(&layout.service)
            .join("resource-manager")
            .join(&layout.name);
        fs::create_dir_all(&dir).unwrap();
        for child in &layout.children {
            fs::create_dir_all(dir.join(child)).unwrap();
        }
    }
    temp_dir
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_root_found_from_any_depth_within_bound(
        segments in proptest::collection::vec("[a-z]{1,6}", 0..=5)
    ) {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("specification")).unwrap();
        let mut start = temp_dir.path().to_path_buf();
        for segment in &segments {
            start = start.join(segment);
        }
        fs::create_dir_all(&start).unwrap();

        let root = find_repo_root(Some(&start)).unwrap();
        prop_assert_eq!(root, dunce::canonicalize(temp_dir.path()).unwrap());
    }

    #[test]
    fn test_partition_covers_every_candidate_once(
        layouts in proptest::collection::vec(provider_layout(), 0..6)
    ) {
        let repo = build_repo(&layouts);
        let classification = classify(repo.path()).unwrap();

        let expected: HashSet<String> = layouts
            .iter()
            .map(|l| format!("specification/{}/resource-manager/{}", l.service, l.name))
            .collect();

        let mut seen = HashSet::new();
        for provider in classification
            .grouped
            .iter()
            .chain(&classification.ungrouped)
            .chain(&classification.excluded)
        {
            prop_assert!(seen.insert(provider.path.clone()), "duplicate {}", provider.path);
        }
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn test_selected_output_is_sorted_by_name(
        layouts in proptest::collection::vec(provider_layout(), 0..6),
        with_groups in any::<bool>(),
    ) {
        let repo = build_repo(&layouts);
        let providers = classify(repo.path())
            .unwrap()
            .select(Mode::from_flag(with_groups));

        for pair in providers.windows(2) {
            prop_assert!(pair[0].name <= pair[1].name);
        }
        for provider in &providers {
            prop_assert_eq!(provider.service_groups.is_some(), with_groups);
        }
    }
}
