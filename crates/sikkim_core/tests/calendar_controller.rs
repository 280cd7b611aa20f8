use sikkim_core::{
    CalendarController, CulturalEvent, EventKind, EventStore, GridCell, MonthCursor, MonthStep,
    Selection,
};

fn event(title: &str, kind: EventKind) -> CulturalEvent {
    CulturalEvent {
        title: title.to_string(),
        location: "Pemayangtse Monastery".to_string(),
        time: "10:00 AM - 5:00 PM".to_string(),
        image: "https://example.com/event.jpg".to_string(),
        description: "Seed event for controller tests.".to_string(),
        kind,
    }
}

fn controller_at_september() -> CalendarController {
    let store = EventStore::from_entries([
        (
            "2025-09-11".to_string(),
            event("Pang Lhabsol Festival", EventKind::Festival),
        ),
        (
            "2025-09-15".to_string(),
            event("Buddha Purnima Celebration", EventKind::Ritual),
        ),
        (
            "2025-12-05".to_string(),
            event("Kagyed Dance Festival", EventKind::Festival),
        ),
    ])
    .expect("seed entries should load");
    CalendarController::new(store, MonthCursor::new(2025, 8))
}

#[test]
fn navigation_rolls_year_boundaries() {
    let store = EventStore::from_entries([]).unwrap();

    let mut controller = CalendarController::new(store.clone(), MonthCursor::new(2025, 11));
    controller.navigate(MonthStep::Next);
    let cursor = controller.cursor();
    assert_eq!((cursor.year(), cursor.month0()), (2026, 0));

    let mut controller = CalendarController::new(store, MonthCursor::new(2025, 0));
    controller.navigate(MonthStep::Previous);
    let cursor = controller.cursor();
    assert_eq!((cursor.year(), cursor.month0()), (2024, 11));
}

#[test]
fn select_day_resolves_event_when_one_is_scheduled() {
    let mut controller = controller_at_september();

    controller.select_day(11);
    assert!(matches!(
        controller.selection(),
        Selection::WithEvent { day: 11, .. }
    ));
    assert_eq!(controller.selection().day(), Some(11));
    assert_eq!(
        controller.selected_event().map(|e| e.title.as_str()),
        Some("Pang Lhabsol Festival")
    );
}

#[test]
fn select_day_without_event_is_a_normal_outcome() {
    let mut controller = controller_at_september();

    controller.select_day(12);
    assert_eq!(controller.selection(), Selection::NoEvent { day: 12 });
    assert!(controller.selected_event().is_none());
}

#[test]
fn any_navigation_resets_selection() {
    let mut controller = controller_at_september();

    controller.select_day(11);
    assert!(controller.selected_event().is_some());

    controller.navigate(MonthStep::Next);
    assert_eq!(controller.selection(), Selection::Unselected);
    assert!(controller.selected_event().is_none());

    controller.select_day(5);
    controller.navigate(MonthStep::Previous);
    assert_eq!(controller.selection(), Selection::Unselected);
}

#[test]
fn clear_selection_keeps_the_cursor() {
    let mut controller = controller_at_september();

    controller.select_day(15);
    controller.clear_selection();
    assert_eq!(controller.selection(), Selection::Unselected);

    let cursor = controller.cursor();
    assert_eq!((cursor.year(), cursor.month0()), (2025, 8));
}

#[test]
fn grid_has_leading_blanks_then_annotated_days() {
    let controller = controller_at_september();
    let grid = controller.current_grid();

    // September 2025 starts on a Monday: one blank, then 30 days.
    assert_eq!(grid.len(), 31);
    let cells = grid.cells();
    assert_eq!(cells[0], GridCell::Blank);
    assert_eq!(
        cells[1],
        GridCell::Day {
            day: 1,
            event: None
        }
    );
    assert_eq!(
        cells[11],
        GridCell::Day {
            day: 11,
            event: Some(EventKind::Festival)
        }
    );
    assert_eq!(
        cells[15],
        GridCell::Day {
            day: 15,
            event: Some(EventKind::Ritual)
        }
    );
    assert_eq!(
        cells[30],
        GridCell::Day {
            day: 30,
            event: None
        }
    );
}

#[test]
fn grid_weeks_never_exceed_seven_cells() {
    let controller = controller_at_september();
    let grid = controller.current_grid();
    for week in grid.weeks() {
        assert!(week.len() <= 7);
    }
    let total: usize = grid.weeks().map(|week| week.len()).sum();
    assert_eq!(total, grid.len());
}

#[test]
fn grid_is_recomputed_after_navigation() {
    let mut controller = controller_at_september();
    controller.navigate(MonthStep::Next);

    // October 2025 starts on a Wednesday: three blanks, 31 days.
    let grid = controller.current_grid();
    assert_eq!(grid.len(), 34);
    assert!(grid.cells()[..3].iter().all(|cell| *cell == GridCell::Blank));
}

#[test]
fn month_summary_lists_only_the_displayed_month_in_order() {
    let mut controller = controller_at_september();

    let titles: Vec<&str> = controller
        .month_summary()
        .iter()
        .map(|(_, event)| event.title.as_str())
        .collect();
    assert_eq!(
        titles,
        ["Pang Lhabsol Festival", "Buddha Purnima Celebration"]
    );

    controller.navigate(MonthStep::Next);
    assert!(controller.month_summary().is_empty());
}
