use expense_gantt::charts::{GanttChart, LayoutConfig, RecordingSurface};
use expense_gantt::data::{collect_entries, AmountScale, FormOutcome, EXPENSE_FIELDS};
use expense_gantt::{AppConfig, InputError};

fn submit(values: [&str; 5]) -> FormOutcome {
    FormOutcome::Submitted(values.map(str::to_string))
}

#[test]
fn accepted_form_fills_chart_in_field_order() {
    let config = AppConfig::default();
    let mut chart = GanttChart::new(config.chart_title.clone(), config.layout);

    let (entries, error) = collect_entries(submit(["250", "75", "30", "120", "1000"]), config.scale());
    assert!(error.is_none());
    chart.set_entries(entries);

    let mut surface = RecordingSurface::new();
    chart.render(&mut surface, 800, 600);

    let names: Vec<_> = surface
        .texts()
        .into_iter()
        .filter(|(text, _, _)| EXPENSE_FIELDS.contains(text))
        .map(|(text, _, _)| text)
        .collect();
    assert_eq!(names, EXPENSE_FIELDS);

    let widths: Vec<_> = surface.rects().iter().map(|r| r.2).collect();
    assert_eq!(widths, vec![150, 45, 18, 72, 600]);

    // every field label has its own table color, distinct from the others
    let mut colors: Vec<_> = surface.rects().iter().map(|r| r.4).collect();
    colors.dedup();
    assert_eq!(colors.len(), 5);
}

#[test]
fn rejected_form_clears_previous_chart() {
    let mut chart = GanttChart::new("Expenses of the Day", LayoutConfig::default());
    let (entries, _) = collect_entries(submit(["1", "2", "3", "4", "5"]), AmountScale::default());
    chart.set_entries(entries);
    assert_eq!(chart.entries().len(), 5);

    let (entries, error) = collect_entries(submit(["1", "2", "3", "4", "five"]), AmountScale::default());
    assert_eq!(
        error,
        Some(InputError::InvalidAmount {
            field: "Others",
            value: "five".to_string(),
        })
    );
    chart.set_entries(entries);

    let mut surface = RecordingSurface::new();
    chart.render(&mut surface, 800, 600);
    assert!(surface.rects().is_empty());
    assert_eq!(surface.texts().len(), 1);
}

#[test]
fn config_scale_drives_bar_widths() {
    let config = AppConfig::from_json(r#"{ "max_amount": 100 }"#).unwrap();
    let (entries, _) = collect_entries(submit(["50", "100", "0", "0", "0"]), config.scale());
    let mut chart = GanttChart::new("Scaled", config.layout);
    chart.set_entries(entries);

    let rows = chart.renderer().plan_rows(chart.entries(), 800);
    assert_eq!(rows[0].task_width, 300);
    assert_eq!(rows[1].task_width, 600);
}
