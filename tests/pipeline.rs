use gridline::engine::filter::{filter_rows, FilterOptions};
use gridline::engine::pagination::paginate;
use gridline::engine::sort::sort_rows;
use gridline::{
    handle_event, Action, AdvancedFilter, ColumnDef, DataTable, Event, FilterState, LayoutState,
    Ownership, PageState, RowId, RowIdentity, Selection, SortDescriptor, TableConfig,
    TableOptions, TriState,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: u32,
    name: &'static str,
    age: u32,
}

fn people() -> Vec<Person> {
    vec![
        Person { id: 1, name: "Bob", age: 30 },
        Person { id: 2, name: "ann", age: 25 },
        Person { id: 3, name: "Cid", age: 40 },
        Person { id: 4, name: "Dee", age: 20 },
        Person { id: 5, name: "Eve", age: 35 },
    ]
}

fn columns() -> Vec<ColumnDef<Person>> {
    vec![
        ColumnDef::new("name", |p: &Person| p.name.into()),
        ColumnDef::new("age", |p: &Person| p.age.into()),
    ]
}

fn identity() -> RowIdentity<Person> {
    RowIdentity::from_fn(|p: &Person, _| p.id.into())
}

fn ids(rows: &[&Person]) -> Vec<u32> {
    rows.iter().map(|p| p.id).collect()
}

fn paged(page_size: usize) -> TableOptions<Person> {
    TableOptions::new(TableConfig {
        page_size,
        ..TableConfig::default()
    })
}

#[test]
fn engines_reproduce_reference_scenario() {
    let data = people();
    let columns = columns();

    let found = filter_rows(data.iter(), &FilterState::global("an"), &columns, &FilterOptions::default());
    assert_eq!(ids(&found), vec![2]);

    let mut sorted: Vec<&Person> = data.iter().collect();
    sort_rows(&mut sorted, Some(&SortDescriptor::asc("age")), &columns, None);
    assert_eq!(ids(&sorted), vec![4, 2, 1, 5, 3]);

    let pages: Vec<Vec<u32>> = (1..=3).map(|p| ids(&paginate(&sorted, p, 2).rows)).collect();
    assert_eq!(pages, vec![vec![4, 2], vec![1, 5], vec![3]]);
    assert_eq!(paginate(&sorted, 1, 2).total_pages, 3);
}

#[test]
fn table_reproduces_reference_scenario() {
    let options = TableOptions::new(TableConfig {
        page_size: 2,
        initial_sort: Some(SortDescriptor::asc("age")),
        ..TableConfig::default()
    });
    let mut table = DataTable::new(columns(), people(), identity(), options);

    let mut pages = Vec::new();
    for page in 1..=3 {
        table.set_page(page);
        let view = table.view();
        assert_eq!(view.total_pages, 3);
        pages.push(ids(&view.rows));
    }
    assert_eq!(pages, vec![vec![4, 2], vec![1, 5], vec![3]]);

    table.set_global_filter("AN");
    let view = table.view();
    assert_eq!(ids(&view.rows), vec![2]);
    assert_eq!(view.page, 1);
    assert_eq!(view.filtered_count, 1);
}

#[test]
fn controlled_page_is_rendered_from_caller_value() {
    let proposals = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&proposals);
    let options = paged(2).pagination(Ownership::controlled(PageState::new(1, 2), move |p: &PageState| {
        sink.lock().unwrap().push(*p);
    }));
    let mut table = DataTable::new(columns(), people(), identity(), options);

    table.set_page(2);
    assert_eq!(*proposals.lock().unwrap(), vec![PageState::new(2, 2)]);
    assert_eq!(ids(&table.view().rows), vec![1, 2]);

    // the owner vetoes page 2 and moves to page 3 instead
    table.sync_page(PageState::new(3, 2));
    assert_eq!(ids(&table.view().rows), vec![5]);
}

#[test]
fn uncontrolled_page_applies_and_notifies() {
    let proposals = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&proposals);
    let options = paged(2).on_page_change(move |p: &PageState| sink.lock().unwrap().push(p.page));
    let mut table = DataTable::new(columns(), people(), identity(), options);

    table.set_page(2);
    assert_eq!(ids(&table.view().rows), vec![3, 4]);
    assert_eq!(*proposals.lock().unwrap(), vec![2]);
}

#[test]
fn shrinking_filter_clamps_page_and_notifies() {
    let proposals = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&proposals);
    let config = TableConfig {
        page_size: 2,
        reset_page_on_filter_change: false,
        ..TableConfig::default()
    };
    let options = TableOptions::new(config)
        .on_page_change(move |p: &PageState| sink.lock().unwrap().push(p.page));
    let mut table = DataTable::new(columns(), people(), identity(), options);

    table.set_page(3);
    table.set_global_filter("e");
    // Dee, Eve
    let view = table.view();
    assert_eq!(view.page, 1);
    assert_eq!(ids(&view.rows), vec![4, 5]);
    assert_eq!(*proposals.lock().unwrap(), vec![3, 1]);
}

#[test]
fn mixed_ownership_keeps_categories_apart() {
    let selections = Arc::new(Mutex::new(Vec::<Selection>::new()));
    let sink = Arc::clone(&selections);
    let options = paged(2).selection(Ownership::controlled(Selection::new(), move |s: &Selection| {
        sink.lock().unwrap().push(s.clone());
    }));
    let mut table = DataTable::new(columns(), people(), identity(), options);

    let actions = table.toggle_row(RowId::from(3_u32));
    assert!(matches!(&actions[..], [Action::SelectionChanged(s)] if s.len() == 1));
    assert!(table.selection().is_empty());

    // pagination stays uncontrolled
    table.set_page(2);
    assert_eq!(table.page_state().page, 2);

    let proposed = selections.lock().unwrap()[0].clone();
    table.sync_selection(proposed);
    let view = table.view();
    assert!(view.is_selected(&RowId::from(3_u32)));
    assert_eq!(view.selection.page_state, TriState::Some);
    assert_eq!(view.page, 2);
}

#[test]
fn selection_follows_identity_through_filter_and_sort() {
    let mut table = DataTable::new(columns(), people(), identity(), paged(10));
    let r1 = RowId::from(1_u32);
    table.toggle_row(r1.clone());

    table.click_sort_header("age");
    assert!(table.view().is_selected(&r1));
    table.set_global_filter("ann");
    assert!(table.view().is_selected(&r1));
    assert_eq!(table.view().selection.total_selected, 1);
    table.set_global_filter("");
    table.click_sort_header("age");
    let view = table.view();
    assert!(view.is_selected(&r1));
    assert_eq!(view.selection.selected_on_page, 1);
}

#[test]
fn select_all_tri_state_cycle() {
    let mut table = DataTable::new(columns(), people(), identity(), paged(3));
    let page = table.page_ids();
    assert_eq!(page.len(), 3);

    table.toggle_row(page[0].clone());
    table.toggle_row(page[1].clone());
    assert_eq!(table.view().selection.page_state, TriState::Some);

    table.toggle_all(&page);
    assert_eq!(table.view().selection.page_state, TriState::All);
    table.toggle_all(&page);
    assert_eq!(table.view().selection.page_state, TriState::None);
}

#[test]
fn unchanged_inputs_do_not_rerun_accessors() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let columns = vec![ColumnDef::new("age", move |p: &Person| {
        counter.fetch_add(1, Ordering::SeqCst);
        p.age.into()
    })];
    let options = TableOptions::new(TableConfig {
        initial_sort: Some(SortDescriptor::desc("age")),
        ..TableConfig::default()
    });
    let mut table = DataTable::new(columns, people(), identity(), options);

    table.view();
    let after_first = calls.load(Ordering::SeqCst);
    assert!(after_first > 0);

    // page, selection and layout changes reuse the memoized stage
    table.view();
    table.toggle_row(RowId::from(1_u32));
    table.resize_column("age", 90);
    table.set_page_size(2);
    table.set_page(2);
    let view = table.view();
    assert_eq!(ids(&view.rows), vec![1, 2]);
    assert_eq!(calls.load(Ordering::SeqCst), after_first);

    table.set_data(people());
    table.view();
    assert!(calls.load(Ordering::SeqCst) > after_first);
}

#[test]
fn advanced_filters_combine_with_search() {
    let mut table = DataTable::new(columns(), people(), identity(), paged(10));
    table.set_advanced_filters(vec![AdvancedFilter::multi_select("age", ["20", "30", "40"])]);
    assert_eq!(ids(&table.view().rows), vec![1, 3, 4]);

    table.set_global_filter("e");
    assert_eq!(ids(&table.view().rows), vec![4]);

    table.reset_filters();
    assert_eq!(table.view().filtered_count, 5);
    assert_eq!(table.filter_state().advanced.len(), 1);
}

#[test]
fn controlled_layout_through_events() {
    let layouts = Arc::new(Mutex::new(Vec::<LayoutState>::new()));
    let sink = Arc::clone(&layouts);
    let config = TableConfig {
        enable_column_reorder: true,
        ..TableConfig::default()
    };
    let options = TableOptions::new(config).layout(Ownership::controlled(
        LayoutState {
            widths: Default::default(),
            order: vec!["name".into(), "age".into()],
        },
        move |l: &LayoutState| sink.lock().unwrap().push(l.clone()),
    ));
    let mut table = DataTable::new(columns(), people(), identity(), options);

    let (changed, actions) = handle_event(&mut table, &Event::ColumnMoved { from: 1, to: 0 });
    assert!(changed);
    assert_eq!(actions.len(), 2);
    assert!(matches!(&actions[1], Action::ColumnsReordered(order) if order == &["age", "name"]));
    let headers: Vec<String> = table.view().columns.into_iter().map(|c| c.id).collect();
    assert_eq!(headers, vec!["name", "age"]);

    let proposed = layouts.lock().unwrap()[0].clone();
    table.sync_layout(proposed);
    let headers: Vec<String> = table.view().columns.into_iter().map(|c| c.id).collect();
    assert_eq!(headers, vec!["age", "name"]);
}
