use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use seatforge::arrangement::Arrangement;
use seatforge::core_types::{agent_label, AgentId, Utility};
use seatforge::experiment::{SweepRow, WelfareStudy};
use seatforge::profile::{RankingProfile, ScoringScheme};
use seatforge::solver::{InconclusiveReason, SolveResult};

pub fn outcome_line(result: &SolveResult) -> String {
    match result {
        SolveResult::Stable { phase, .. } => format!("stable via {}", phase),
        SolveResult::ConfirmedNoStableArrangement => "no stable seating exists".to_string(),
        SolveResult::SearchInconclusive {
            reason: InconclusiveReason::ThresholdExceeded { n, threshold },
        } => format!(
            "inconclusive (n={} is not below the brute-force threshold {})",
            n, threshold
        ),
    }
}

fn rank_of(rankings: &RankingProfile, agent: AgentId, other: AgentId) -> String {
    rankings.rankings[agent as usize]
        .iter()
        .position(|&o| o == other)
        .map_or_else(|| "-".to_string(), |p| format!("#{}", p + 1))
}

pub fn print_agent_table(rankings: &RankingProfile, arrangement: &Arrangement, utilities: &[Utility]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Seat").add_attribute(Attribute::Bold),
        Cell::new("Agent").add_attribute(Attribute::Bold),
        Cell::new("Left"),
        Cell::new("Right"),
        Cell::new("Utility").fg(Color::Cyan),
    ]);

    for seat in 0..arrangement.len() {
        let agent = arrangement.agent_at(seat);
        let [left, right] = arrangement.neighbors_of_seat(seat);
        table.add_row(vec![
            Cell::new(seat),
            Cell::new(agent_label(agent)).add_attribute(Attribute::Bold),
            Cell::new(format!("{} {}", agent_label(left), rank_of(rankings, agent, left))),
            Cell::new(format!("{} {}", agent_label(right), rank_of(rankings, agent, right))),
            Cell::new(format!("{:.4}", utilities[agent as usize])).fg(Color::Cyan),
        ]);
    }

    if let Some(col) = table.column_mut(4) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}

pub fn print_sweep_table(rows: &[SweepRow]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("n").add_attribute(Attribute::Bold),
        Cell::new("Scheme").add_attribute(Attribute::Bold),
        Cell::new("Samples"),
        Cell::new("MaxSA"),
        Cell::new("MaxFix"),
        Cell::new("MinSA"),
        Cell::new("MinFix"),
        Cell::new("Missed").fg(Color::Yellow),
        Cell::new("None").fg(Color::Red),
        Cell::new("Unknown"),
        Cell::new("Found %").fg(Color::Green),
        Cell::new("Naive %"),
    ]);

    for i in 2..=11 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for r in rows {
        table.add_row(vec![
            Cell::new(r.n).add_attribute(Attribute::Bold),
            Cell::new(&r.scheme),
            Cell::new(r.samples),
            Cell::new(r.max_anneal),
            Cell::new(r.max_repair),
            Cell::new(r.min_anneal),
            Cell::new(r.min_repair),
            Cell::new(r.missed).fg(Color::Yellow),
            Cell::new(r.confirmed_none).fg(Color::Red),
            Cell::new(r.inconclusive),
            Cell::new(format!("{:.1}", r.recovered_pct)).fg(Color::Green),
            Cell::new(format!("{:.1}", r.naive_pct)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_welfare_table(rows: &[(usize, ScoringScheme, WelfareStudy)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("n").add_attribute(Attribute::Bold),
        Cell::new("Scheme").add_attribute(Attribute::Bold),
        Cell::new("Profiles"),
        Cell::new("Checked"),
        Cell::new("Max welfare stable"),
        Cell::new("%").fg(Color::Green),
    ]);

    for i in [2, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (n, scheme, study) in rows {
        table.add_row(vec![
            Cell::new(n).add_attribute(Attribute::Bold),
            Cell::new(scheme),
            Cell::new(study.samples),
            Cell::new(if study.exhaustive { "all" } else { "sampled" }),
            Cell::new(study.stable_max_welfare),
            Cell::new(format!("{:.1}", study.percent())).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}
