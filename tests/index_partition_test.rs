use docweave::index::{IndexMode, NameBucketer, Paginator};
use docweave::{IndexError, OrderingPolicy, Symbol, SymbolId, SymbolKind, SymbolModel, TieBreak};
use std::collections::HashSet;

fn id(v: u32) -> SymbolId {
    SymbolId::new(v).unwrap()
}

fn fruit_model() -> SymbolModel {
    SymbolModel::new(vec![
        Symbol::new(id(1), "Apple", SymbolKind::Class),
        Symbol::new(id(2), "Seed", SymbolKind::Class)
            .with_container("apple")
            .with_superclass(id(1)),
        Symbol::new(id(3), "Banana", SymbolKind::Class),
        Symbol::new(id(4), "apricot", SymbolKind::Class),
        Symbol::new(id(5), "hidden", SymbolKind::Field).undocumented(),
        Symbol::new(id(6), "", SymbolKind::Package),
    ])
    .unwrap()
}

fn names<'a>(symbols: impl IntoIterator<Item = &'a Symbol>) -> Vec<&'a str> {
    symbols.into_iter().map(Symbol::as_name).collect()
}

#[test]
fn test_case_insensitive_buckets() {
    let model = fruit_model();
    let buckets = NameBucketer::new(OrderingPolicy::default()).bucket(model.documented());

    let keys: Vec<char> = buckets.iter().map(|b| b.key).collect();
    assert_eq!(keys, vec!['A', 'B', 'S']);
    assert_eq!(names(buckets[0].iter()), vec!["Apple", "apricot"]);
    assert_eq!(names(buckets[1].iter()), vec!["Banana"]);
}

#[test]
fn test_apple_apricot_banana_buckets() {
    let symbols = vec![
        Symbol::new(id(1), "Apple", SymbolKind::Class),
        Symbol::new(id(2), "apple.Seed", SymbolKind::Class).with_superclass(id(1)),
        Symbol::new(id(3), "Banana", SymbolKind::Class),
        Symbol::new(id(4), "apricot", SymbolKind::Class),
    ];
    // Plain names only
    let buckets = NameBucketer::new(OrderingPolicy::default())
        .bucket([&symbols[0], &symbols[2], &symbols[3]]);

    let keys: Vec<char> = buckets.iter().map(|b| b.key).collect();
    assert_eq!(keys, vec!['A', 'B']);
    assert_eq!(names(buckets[0].iter()), vec!["Apple", "apricot"]);
    assert_eq!(names(buckets[1].iter()), vec!["Banana"]);

    // With the dotted name included it joins 'A' and sorts between the two
    let buckets = NameBucketer::new(OrderingPolicy::default()).bucket(&symbols);
    assert_eq!(buckets.len(), 2);
    assert_eq!(names(buckets[0].iter()), vec!["Apple", "apple.Seed", "apricot"]);
}

#[test]
fn test_field_does_not_split_overloads() {
    let symbols = vec![
        Symbol::new(id(1), "value", SymbolKind::Method)
            .with_container("Foo")
            .with_signature("(int)"),
        Symbol::new(id(2), "value", SymbolKind::Field).with_container("Foo"),
        Symbol::new(id(3), "value", SymbolKind::Method)
            .with_container("Foo")
            .with_signature("()"),
    ];

    let buckets = NameBucketer::new(OrderingPolicy::default()).bucket(&symbols);
    let order: Vec<(SymbolKind, Option<&str>)> = buckets[0]
        .iter()
        .map(|s| (s.kind, s.signature.as_deref()))
        .collect();
    assert_eq!(
        order,
        vec![
            (SymbolKind::Field, None),
            (SymbolKind::Method, Some("()")),
            (SymbolKind::Method, Some("(int)")),
        ]
    );
}

#[test]
fn test_every_documented_name_appears_once() {
    let model = fruit_model();
    let partition = NameBucketer::new(OrderingPolicy::default()).partition(model.documented());

    let mut seen = HashSet::new();
    for symbol in partition.buckets.iter().flat_map(|b| b.iter()) {
        assert!(seen.insert(symbol.id), "{} listed twice", symbol.name);
        assert!(symbol.documented);
    }
    for symbol in &partition.unnamed {
        assert!(seen.insert(symbol.id));
    }

    let documented: HashSet<SymbolId> = model.documented().iter().map(|s| s.id).collect();
    assert_eq!(seen, documented);
    assert_eq!(partition.symbol_count() + partition.unnamed.len(), documented.len());
}

#[test]
fn test_split_pages_link_neighbours() {
    let model = fruit_model();
    let buckets = NameBucketer::new(OrderingPolicy::default()).bucket(model.documented());
    let pages = Paginator::new(IndexMode::Split).paginate(buckets).unwrap();

    let links: Vec<(Option<char>, Option<char>, Option<char>)> = pages
        .iter()
        .map(|page| (page.previous, page.key, page.next))
        .collect();
    assert_eq!(
        links,
        vec![
            (None, Some('A'), Some('B')),
            (Some('A'), Some('B'), Some('S')),
            (Some('B'), Some('S'), None),
        ]
    );
    assert_eq!(pages.iter().map(|p| p.number).collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_combined_page_keeps_bucket_order() {
    let model = fruit_model();
    let bucketer = NameBucketer::new(OrderingPolicy::default());
    let pages = Paginator::new(IndexMode::Combined)
        .paginate(bucketer.bucket(model.documented()))
        .unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].key, None);
    assert_eq!(pages[0].symbol_count(), 4);
    assert_eq!(pages[0].buckets, bucketer.bucket(model.documented()));
}

#[test]
fn test_split_over_nothing_is_an_error() {
    let hidden = [Symbol::new(id(1), "Hidden", SymbolKind::Class).undocumented()];
    let buckets = NameBucketer::new(OrderingPolicy::default()).bucket(&hidden);

    assert!(buckets.is_empty());
    assert_eq!(
        Paginator::new(IndexMode::Split).paginate(buckets),
        Err(IndexError::EmptyIndex)
    );
}

#[test]
fn test_overloads_order_by_signature_then_input() {
    let symbols = vec![
        Symbol::new(id(1), "put", SymbolKind::Method)
            .with_container("Map")
            .with_signature("(K, V)"),
        Symbol::new(id(2), "put", SymbolKind::Method)
            .with_container("Map")
            .with_signature("()"),
        Symbol::new(id(3), "Put", SymbolKind::Class).with_container("ops"),
        Symbol::new(id(4), "put", SymbolKind::Method)
            .with_container("Map")
            .with_signature("()"),
    ];

    let full = NameBucketer::new(OrderingPolicy::default()).bucket(&symbols);
    let ids: Vec<u32> = full[0].iter().map(|s| s.id.value()).collect();
    // Equal overloads keep input order
    assert_eq!(ids, vec![3, 2, 4, 1]);

    let stable = NameBucketer::new(OrderingPolicy {
        tie_break: TieBreak::Stable,
    })
    .bucket(&symbols);
    let ids: Vec<u32> = stable[0].iter().map(|s| s.id.value()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}
