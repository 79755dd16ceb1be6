use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use wattsmith::library::Library;
use wattsmith::plan::{PlanReport, SlotOutcome};
use wattsmith::selector::{AdjustmentOutcome, RankedWorkout, SelectionResult};

fn right_align(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn describe_adjustment(outcome: &AdjustmentOutcome) -> (String, Color) {
    match outcome {
        AdjustmentOutcome::WithinTolerance => ("on target".to_string(), Color::Green),
        AdjustmentOutcome::Adjusted {
            field, from, to, ..
        } => (format!("{} {:.0}->{:.0}", field, from, to), Color::Cyan),
        AdjustmentOutcome::NoAdjustableDimension { target_stress, .. } => {
            (format!("fixed, target {:.0} unmet", target_stress), Color::Yellow)
        }
        AdjustmentOutcome::OutOfBounds {
            field,
            required,
            max,
            min,
        } => (
            format!("{} {:.0} outside [{:.0}, {:.0}]", field, required, min, max),
            Color::Yellow,
        ),
        AdjustmentOutcome::Unscalable => ("unscalable".to_string(), Color::Yellow),
    }
}

pub fn print_library_audit(library: &Library) {
    println!(
        "\nLibrary v{}: {} ({} workouts, sha256 {})",
        library.version(),
        library.description(),
        library.len(),
        library.checksum()
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Category"),
        Cell::new("Segs"),
        Cell::new("Min"),
        Cell::new("Stress").fg(Color::Cyan),
        Cell::new("Est."),
        Cell::new("Adjustable"),
    ]);
    right_align(&mut table, 2, 5);

    for w in library.entries() {
        let adjustable = match &w.adjustable {
            Some(dim) => format!("{} [{:.0}, {:.0}]", dim.field, dim.min, dim.max),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(&w.id).add_attribute(Attribute::Bold),
            Cell::new(w.category.to_string()),
            Cell::new(w.segments.len()),
            Cell::new(format!("{:.0}", w.duration_min)),
            Cell::new(format!("{:.0}", w.stress)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", w.estimated_stress())),
            Cell::new(adjustable),
        ]);
    }
    println!("{}", table);
}

pub fn print_ranking(ranked: &[RankedWorkout], limit: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Cat"),
        Cell::new("Phase"),
        Cell::new("Day"),
        Cell::new("Stress"),
        Cell::new("Dur"),
        Cell::new("Variety"),
    ]);
    right_align(&mut table, 1, 7);

    for r in ranked.iter().take(limit) {
        let d = &r.details;
        table.add_row(vec![
            Cell::new(&r.workout.id).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", d.total)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", d.category)),
            Cell::new(format!("{:.0}", d.phase)),
            Cell::new(format!("{:.0}", d.weekday)),
            Cell::new(format!("{:.1}", d.stress)),
            Cell::new(format!("{:.0}", d.duration)),
            Cell::new(format!("{:.1}", d.variety)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_selection(result: &SelectionResult) {
    let (adjustment, color) = describe_adjustment(&result.adjustment);
    let w = &result.workout;
    println!(
        "\n✅ {} ({}) score {:.1} at threshold {:.0}",
        w.name, w.id, result.score, result.threshold_used
    );
    println!(
        "   {:.0} min, stress {:.0}, adjustment: {}",
        w.duration_min, w.stress, adjustment
    );

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Step").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Power %FTP").fg(color),
    ]);
    right_align(&mut table, 1, 2);
    for seg in &w.segments {
        table.add_row(vec![
            Cell::new(seg.kind.to_string()),
            Cell::new(format!("{:.1}", seg.duration_min)),
            Cell::new(format!("{:.0}-{:.0}", seg.power_low, seg.power_high)),
        ]);
    }
    println!("{}", table);
}

pub fn print_plan(report: &PlanReport) {
    let summary = report.summary();
    println!(
        "\n📅 {}: {} assigned, {} unassigned, {} adjusted, {} targets missed",
        report.athlete,
        summary.assigned,
        summary.unassigned,
        summary.adjusted,
        summary.targets_missed
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Wk").add_attribute(Attribute::Bold),
        Cell::new("Day"),
        Cell::new("Want"),
        Cell::new("Workout").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Min"),
        Cell::new("Stress"),
        Cell::new("Adjustment"),
    ]);
    right_align(&mut table, 4, 6);

    for day in &report.days {
        let slot = &day.slot;
        let want = format!("{} {:.0}", slot.category, slot.target_stress);
        match &day.outcome {
            SlotOutcome::Assigned(result) => {
                let (adjustment, color) = describe_adjustment(&result.adjustment);
                table.add_row(vec![
                    Cell::new(slot.week),
                    Cell::new(slot.weekday.to_string()),
                    Cell::new(want),
                    Cell::new(&result.workout.id).add_attribute(Attribute::Bold),
                    Cell::new(format!("{:.1}", result.score)).fg(Color::Cyan),
                    Cell::new(format!("{:.0}", result.workout.duration_min)),
                    Cell::new(format!("{:.0}", result.workout.stress)),
                    Cell::new(adjustment).fg(color),
                ]);
            }
            SlotOutcome::Unassigned { reason } => {
                table.add_row(vec![
                    Cell::new(slot.week),
                    Cell::new(slot.weekday.to_string()),
                    Cell::new(want),
                    Cell::new("(none)").fg(Color::Red),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new("-"),
                    Cell::new(reason).fg(Color::Red),
                ]);
            }
        }
    }
    println!("{}", table);
    println!(
        "   Stress planned {:.0} / target {:.0}",
        summary.planned_stress, summary.target_stress
    );
}
