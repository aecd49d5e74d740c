use policy_table_core::{filter, format_label, Dataset, Field, Record, StatusSelector};
use proptest::prelude::*;

const STATUSES: &[&str] = &[
    "ACTIVE",
    "SURRENDERED",
    "CANCELLED",
    "DRAFT",
    "DEATH",
    "MATURED",
    "LAPSE",
];

fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[A-Z]{2}-[0-9]{3}",
        prop::sample::select(STATUSES),
        "[A-Za-z ]{0,12}",
        proptest::option::of(0i64..50_000),
    )
        .prop_map(|(id, status, client, premium)| {
            let record = Record::default()
                .with(Field::ProposalNumber, id)
                .with(Field::Status, status)
                .with(Field::Client, client);
            match premium {
                Some(p) => record.with(Field::Premium, p),
                None => record,
            }
        })
}

fn arb_selector() -> impl Strategy<Value = StatusSelector> {
    prop::sample::select(StatusSelector::BUTTONS.to_vec())
}

fn is_subsequence(visible: &[&Record], records: &[Record]) -> bool {
    let mut source = records.iter();
    visible
        .iter()
        .all(|wanted| source.any(|candidate| std::ptr::eq(candidate, *wanted)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn test_label_has_no_underscores_and_capitalized_words(token in "[A-Za-z_]{0,40}") {
        let label = format_label(&token);
        prop_assert!(!label.contains('_'), "label {:?} kept an underscore", label);
        for word in label.split_whitespace() {
            let first = word.chars().next().unwrap();
            prop_assert!(first.is_uppercase(), "word {:?} in {:?} is not capitalized", word, label);
        }
    }

    #[test]
    fn test_visible_set_is_ordered_subsequence(
        records in prop::collection::vec(arb_record(), 0..40),
        status in arb_selector(),
        search in "[a-zA-Z0-9 ]{0,3}",
    ) {
        let visible = filter(&records, status, &search);
        prop_assert!(is_subsequence(&visible, &records));
        prop_assert!(visible.len() <= records.len());
    }

    #[test]
    fn test_visible_set_is_exactly_matching_records(
        records in prop::collection::vec(arb_record(), 0..40),
        status in arb_selector(),
        search in "[a-z0-9]{0,2}",
    ) {
        let visible = filter(&records, status, &search);
        let needle = search.to_lowercase();
        let expected: Vec<&Record> = records
            .iter()
            .filter(|record| {
                let status_ok = match status.codes() {
                    None => true,
                    Some(codes) => codes
                        .iter()
                        .any(|code| record.status_code() == Some(code.as_str())),
                };
                let search_ok = needle.is_empty()
                    || Field::ALL.iter().any(|field| {
                        record
                            .get(*field)
                            .map(|value| value.display_string().to_lowercase().contains(&needle))
                            .unwrap_or(false)
                    });
                status_ok && search_ok
            })
            .collect();
        prop_assert_eq!(visible, expected);
    }

    #[test]
    fn test_filter_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..40),
        status in arb_selector(),
        search in "[a-z]{0,2}",
    ) {
        let first = filter(&records, status, &search);
        let second = filter(&records, status, &search);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_all_with_empty_search_returns_everything(
        records in prop::collection::vec(arb_record(), 0..40),
    ) {
        let visible = filter(&records, StatusSelector::All, "");
        prop_assert_eq!(visible.len(), records.len());
    }
}

#[test]
fn test_sample_terminated_rows() {
    let dataset = Dataset::sample().expect("bundled sample parses");
    let visible = filter(dataset.records(), StatusSelector::Terminated, "");
    assert!(!visible.is_empty());
    for record in visible {
        let code = record.status_code().unwrap();
        assert!(code == "DEATH" || code == "MATURED", "unexpected status {}", code);
    }
}

#[test]
fn test_sample_premium_search() {
    let dataset = Dataset::sample().expect("bundled sample parses");
    let visible = filter(dataset.records(), StatusSelector::All, "1000");
    assert!(visible
        .iter()
        .any(|record| record.get(Field::Premium).map(|v| v.display_string()) == Some("1000".to_string())));
}
